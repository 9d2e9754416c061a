//! Test utilities for slingshot flight tests.
//!
//! Provides fixture courses and ships, plus assertions for trajectories.

use bevy::math::DVec2;

use crate::collision::{Course, Goal, PlayArea};
use crate::physics::{GravityCategory, GravitySource};
use crate::types::{ShipState, FUEL_CAPACITY};

/// Fixtures for building courses and ships.
pub mod fixtures {
    use super::*;

    /// A course with no sources, no obstacles, an unreachable goal and no walls.
    pub fn open_course() -> Course {
        Course::new(Goal::at(DVec2::new(-1.0e9, -1.0e9))).with_bounds(PlayArea::unbounded())
    }

    /// A normal-category planet of mass 100 at (400, 300), influence 500.
    pub fn reference_planet() -> GravitySource {
        GravitySource::planet(DVec2::new(400.0, 300.0), 100.0, 30.0, GravityCategory::Normal)
    }

    /// The reference planet in the default arena with a goal far to the right.
    pub fn single_planet_course() -> Course {
        Course::new(Goal::at(DVec2::new(950.0, 700.0))).with_source(reference_planet())
    }

    /// Same as [`single_planet_course`] but without walls or a reachable goal.
    pub fn single_planet_open_course() -> Course {
        open_course().with_source(reference_planet())
    }

    /// A freshly launched ship with a full tank.
    pub fn launched_ship(pos: DVec2, vel: DVec2) -> ShipState {
        ShipState::new(pos, vel, FUEL_CAPACITY)
    }
}

/// Assertions for trajectories.
pub mod assertions {
    use super::*;

    /// Assert two vectors agree component-wise within `tolerance`.
    pub fn assert_vec_close(actual: DVec2, expected: DVec2, tolerance: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff.x <= tolerance && diff.y <= tolerance,
            "Vectors differ: actual={actual:?}, expected={expected:?}, tolerance={tolerance:e}"
        );
    }

    /// Assert every point of a path is finite.
    pub fn assert_finite_path(points: &[DVec2]) {
        if let Some((index, point)) = points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
            panic!("Non-finite point {point:?} at index {index}");
        }
    }
}

/// Utilities for creating headless Bevy apps for testing.
pub mod bevy_test {
    use bevy::prelude::*;

    /// Create a minimal Bevy app for testing without rendering.
    pub fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::evaluate_termination;
    use crate::outcome::Verdict;

    #[test]
    fn test_open_course_never_terminates() {
        let course = fixtures::open_course();
        for point in [DVec2::ZERO, DVec2::new(1.0e7, -1.0e7), DVec2::new(-5.0e8, 3.0)] {
            assert_eq!(evaluate_termination(point, &course, 8.0), Verdict::Continue);
        }
    }

    #[test]
    fn test_reference_planet_is_valid() {
        assert!(fixtures::reference_planet().validate().is_ok());
    }

    #[test]
    #[should_panic(expected = "Vectors differ")]
    fn test_assert_vec_close_panics() {
        assertions::assert_vec_close(DVec2::ZERO, DVec2::new(0.0, 1.0), 0.5);
    }
}
