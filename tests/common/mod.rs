//! Common test utilities for integration tests.

use bevy::math::DVec2;
use gravity_wells::collision::{Course, Goal, PlayArea};
use gravity_wells::outcome::Verdict;
use gravity_wells::physics::{advance, Controls, FlightConfig, GravityCategory, GravitySource};
use gravity_wells::types::ShipState;

/// Normal planet of mass 100 at (400, 300) with the default 500 px influence.
pub fn reference_planet() -> GravitySource {
    GravitySource::planet(DVec2::new(400.0, 300.0), 100.0, 30.0, GravityCategory::Normal)
}

/// No walls and a goal nobody reaches.
pub fn open_course() -> Course {
    Course::new(Goal::at(DVec2::new(-1.0e9, -1.0e9))).with_bounds(PlayArea::unbounded())
}

/// Fly hands-off for up to `ticks`, returning every position and the final verdict.
pub fn fly_idle(
    ship: &mut ShipState,
    course: &Course,
    config: &FlightConfig,
    ticks: usize,
) -> (Vec<DVec2>, Verdict) {
    let mut positions = Vec::with_capacity(ticks);
    let mut verdict = Verdict::Continue;
    for _ in 0..ticks {
        verdict = advance(ship, course, Controls::IDLE, config);
        positions.push(ship.pos);
        if verdict.is_terminal() {
            break;
        }
    }
    (positions, verdict)
}

/// Assert two vectors agree component-wise within `tolerance`.
pub fn assert_vec_close(actual: DVec2, expected: DVec2, tolerance: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff.x <= tolerance && diff.y <= tolerance,
        "Vectors differ: actual={actual:?}, expected={expected:?}"
    );
}
