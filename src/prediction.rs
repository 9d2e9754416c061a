//! Trajectory prediction for the aiming guide.
//!
//! Prediction replays the live coast step on a private copy of the launch
//! state, so the guide drawn while aiming is the path the ship will actually
//! fly if the pilot keeps their hands off the controls. Nothing here touches
//! live state.
//!
//! The guide is produced lazily by [`Trajectory`]. It yields the position
//! after each step, stops after `steps` samples, and ends early on the first
//! sample where live flight would end (lethal contact, leaving the arena or
//! reaching the goal). That terminal sample is included.

use std::iter::FusedIterator;

use bevy::log::debug;
use bevy::math::DVec2;

use crate::collision::{evaluate_termination, Course};
use crate::outcome::Verdict;
use crate::physics::{coast_step, FlightConfig};
use crate::types::{FIXED_DT, TICK_RATE_HZ};

/// Configuration for trajectory prediction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PredictionSettings {
    /// Maximum number of samples in the guide.
    pub steps: usize,
    /// Integration step in seconds. Must equal the live step for the guide to match flight.
    pub dt: f64,
}

impl Default for PredictionSettings {
    fn default() -> Self {
        Self {
            steps: (9.0 * TICK_RATE_HZ) as usize, // 9 seconds of flight
            dt: FIXED_DT,
        }
    }
}

impl PredictionSettings {
    /// Settings that step exactly like live flight under `config`.
    pub fn matching(config: &FlightConfig, steps: usize) -> Self {
        Self { steps, dt: config.dt }
    }

    /// Simulated time covered by a full-length guide (seconds).
    pub fn horizon(&self) -> f64 {
        self.steps as f64 * self.dt
    }
}

/// Lazy sequence of predicted positions.
///
/// Each call to `next` performs one integration step. Dropping the iterator
/// early costs nothing further, so callers that only need the first few
/// points can `take` them.
#[derive(Clone, Debug)]
pub struct Trajectory<'a> {
    course: &'a Course,
    pos: DVec2,
    vel: DVec2,
    dt: f64,
    contact_radius: f64,
    remaining: usize,
    ending: Verdict,
}

impl Trajectory<'_> {
    /// Verdict that ended the sequence so far.
    ///
    /// `Continue` until a terminal sample has been yielded, and still
    /// `Continue` if the horizon ran out first.
    pub fn ending(&self) -> Verdict {
        self.ending
    }

    /// Velocity after the last yielded step.
    pub fn velocity(&self) -> DVec2 {
        self.vel
    }
}

impl Iterator for Trajectory<'_> {
    type Item = DVec2;

    fn next(&mut self) -> Option<DVec2> {
        if self.remaining == 0 {
            return None;
        }

        coast_step(&mut self.pos, &mut self.vel, &self.course.sources, self.dt);
        self.remaining -= 1;

        let verdict = evaluate_termination(self.pos, self.course, self.contact_radius);
        if verdict.is_terminal() {
            debug!(
                "Prediction truncated at ({:.1}, {:.1}): {:?}",
                self.pos.x, self.pos.y, verdict
            );
            self.ending = verdict;
            self.remaining = 0;
        }

        Some(self.pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let upper = self.remaining;
        (upper.min(1), Some(upper))
    }
}

impl FusedIterator for Trajectory<'_> {}

/// Predict the coast of a ship released at `origin` with `velocity`.
///
/// Pure: identical inputs always produce identical sequences.
pub fn predict<'a>(
    origin: DVec2,
    velocity: DVec2,
    course: &'a Course,
    settings: &PredictionSettings,
    config: &FlightConfig,
) -> Trajectory<'a> {
    Trajectory {
        course,
        pos: origin,
        vel: velocity,
        dt: settings.dt,
        contact_radius: config.contact_radius,
        remaining: settings.steps,
        ending: Verdict::Continue,
    }
}

/// A fully evaluated guide, ready to hand to a renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredictedPath {
    /// Predicted positions, one per step.
    pub points: Vec<DVec2>,
    /// Verdict on the last point, or `Continue` if the horizon ran out.
    pub ending: Verdict,
}

impl PredictedPath {
    /// Whether the guide ends in a lethal contact or off the arena.
    pub fn ends_in_collision(&self) -> bool {
        self.ending.is_dead()
    }

    pub fn reaches_goal(&self) -> bool {
        self.ending.is_success()
    }

    pub fn last(&self) -> Option<DVec2> {
        self.points.last().copied()
    }
}

/// Evaluate a full guide into a [`PredictedPath`].
pub fn predict_path(
    origin: DVec2,
    velocity: DVec2,
    course: &Course,
    settings: &PredictionSettings,
    config: &FlightConfig,
) -> PredictedPath {
    let mut trajectory = predict(origin, velocity, course, settings, config);
    let points: Vec<DVec2> = trajectory.by_ref().collect();
    PredictedPath {
        points,
        ending: trajectory.ending(),
    }
}
