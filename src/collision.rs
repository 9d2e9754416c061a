//! Static level geometry and termination checks.
//!
//! A [`Course`] bundles everything the ship can run into during one attempt:
//! gravity sources, obstacles, the goal and the playable area. Termination is
//! evaluated once per tick after integration, in a fixed priority order:
//!
//! 1. Lethal contact with a source or an obstacle
//! 2. Leaving the play area past its margin
//! 3. Reaching the goal
//!
//! Danger wins ties: a position that touches both a lethal body and the goal
//! is a death.

use bevy::math::DVec2;

use crate::outcome::{Hazard, Verdict};
use crate::physics::GravitySource;
use crate::types::{ARENA_HEIGHT, ARENA_WIDTH, GOAL_RADIUS, OBSTACLE_RADIUS, OFFSCREEN_MARGIN};

/// Circular target region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Goal {
    pub position: DVec2,
    pub radius: f64,
}

impl Goal {
    pub fn new(position: DVec2, radius: f64) -> Self {
        Self { position, radius }
    }

    /// Goal with the default radius.
    pub fn at(position: DVec2) -> Self {
        Self::new(position, GOAL_RADIUS)
    }

    /// Containment uses the ship center, inclusive of the rim.
    pub fn contains(&self, point: DVec2) -> bool {
        point.distance_squared(self.position) <= self.radius * self.radius
    }
}

/// Solid circular obstacle. Exerts no gravity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obstacle {
    pub position: DVec2,
    pub radius: f64,
}

impl Obstacle {
    pub fn new(position: DVec2, radius: f64) -> Self {
        Self { position, radius }
    }

    pub fn at(position: DVec2) -> Self {
        Self::new(position, OBSTACLE_RADIUS)
    }

    /// Returns true if a ship of `contact_radius` centered at `point` touches this obstacle.
    pub fn touches(&self, point: DVec2, contact_radius: f64) -> bool {
        point.distance(self.position) < self.radius + contact_radius
    }
}

/// Rectangular arena plus the margin a ship may drift beyond it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayArea {
    /// Top-left corner of the visible arena (px)
    pub min: DVec2,
    /// Bottom-right corner of the visible arena (px)
    pub max: DVec2,
    /// Allowed overshoot past each edge (px)
    pub margin: f64,
}

impl Default for PlayArea {
    fn default() -> Self {
        Self {
            min: DVec2::ZERO,
            max: DVec2::new(ARENA_WIDTH, ARENA_HEIGHT),
            margin: OFFSCREEN_MARGIN,
        }
    }
}

impl PlayArea {
    pub fn new(min: DVec2, max: DVec2, margin: f64) -> Self {
        Self { min, max, margin }
    }

    /// An arena so large nothing realistic leaves it.
    pub fn unbounded() -> Self {
        Self::new(DVec2::splat(f64::MIN), DVec2::splat(f64::MAX), 0.0)
    }

    /// Returns true while `point` is inside the arena or its margin.
    ///
    /// Non-finite positions are always outside.
    pub fn contains(&self, point: DVec2) -> bool {
        let lo = self.min - DVec2::splat(self.margin);
        let hi = self.max + DVec2::splat(self.margin);
        point.is_finite() && point.x >= lo.x && point.x <= hi.x && point.y >= lo.y && point.y <= hi.y
    }

    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }
}

/// Everything static the ship interacts with during one level attempt.
#[derive(Clone, Debug, PartialEq)]
pub struct Course {
    pub sources: Vec<GravitySource>,
    pub obstacles: Vec<Obstacle>,
    pub goal: Goal,
    pub bounds: PlayArea,
}

impl Course {
    /// A course with only a goal in the default arena.
    pub fn new(goal: Goal) -> Self {
        Self {
            sources: Vec::new(),
            obstacles: Vec::new(),
            goal,
            bounds: PlayArea::default(),
        }
    }

    pub fn with_source(mut self, source: GravitySource) -> Self {
        self.sources.push(source);
        self
    }

    pub fn with_obstacle(mut self, obstacle: Obstacle) -> Self {
        self.obstacles.push(obstacle);
        self
    }

    pub fn with_bounds(mut self, bounds: PlayArea) -> Self {
        self.bounds = bounds;
        self
    }
}

/// First lethal body touched by a ship at `pos`, sources before obstacles.
fn lethal_contact(pos: DVec2, course: &Course, contact_radius: f64) -> Option<Hazard> {
    let source_hit = course.sources.iter().position(|source| {
        source.is_lethal() && pos.distance(source.position) < source.lethal_radius + contact_radius
    });
    if let Some(index) = source_hit {
        return Some(Hazard::Source(index));
    }

    course
        .obstacles
        .iter()
        .position(|obstacle| obstacle.touches(pos, contact_radius))
        .map(Hazard::Obstacle)
}

/// Evaluate the termination verdict for a ship centered at `pos`.
pub fn evaluate_termination(pos: DVec2, course: &Course, contact_radius: f64) -> Verdict {
    if let Some(hazard) = lethal_contact(pos, course, contact_radius) {
        return Verdict::Dead(hazard);
    }

    if !course.bounds.contains(pos) {
        return Verdict::Dead(Hazard::OutOfBounds);
    }

    if course.goal.contains(pos) {
        return Verdict::Success;
    }

    Verdict::Continue
}
