//! Core physics types and constants for the slingshot simulation.
//!
//! All distances are in arena pixels, times in seconds, and velocities in
//! pixels per second. The y axis points down, as on screen.

use bevy::math::DVec2;

use crate::outcome::Hazard;

/// Gravitational constant in arena units (px³·mass⁻¹·s⁻²).
pub const GRAVITY_CONSTANT: f64 = 5000.0;

/// Default influence radius of every gravity source (px).
pub const DEFAULT_INFLUENCE_RADIUS: f64 = 500.0;

/// Floor on squared distance when computing inverse-square pull.
/// Keeps acceleration finite when a point sits on a source center (5 px).
pub const MIN_DISTANCE_SQUARED: f64 = 25.0;

/// Target simulation rate of the live flight loop (ticks per second).
pub const TICK_RATE_HZ: f64 = 60.0;

/// Fixed live timestep (seconds).
pub const FIXED_DT: f64 = 1.0 / TICK_RATE_HZ;

/// Arena dimensions (px).
pub const ARENA_WIDTH: f64 = 1024.0;
pub const ARENA_HEIGHT: f64 = 768.0;

/// How far past the arena edge a ship may drift before it is lost (px).
pub const OFFSCREEN_MARGIN: f64 = 100.0;

/// Ship defaults
pub const SHIP_RADIUS: f64 = 8.0;
pub const FUEL_CAPACITY: f64 = 100.0;

/// Planet defaults
pub const PLANET_MASS: f64 = 100.0;
pub const PLANET_RADIUS: f64 = 30.0;

/// Black hole defaults. The core radius is the lethal radius; the event
/// horizon drawn around it is cosmetic.
pub const BLACK_HOLE_MASS: f64 = 500.0;
pub const BLACK_HOLE_RADIUS: f64 = 15.0;

/// Anti-gravity well defaults
pub const ANTI_GRAVITY_MASS: f64 = 50.0;
pub const ANTI_GRAVITY_RADIUS: f64 = 20.0;

/// Goal and obstacle defaults
pub const GOAL_RADIUS: f64 = 25.0;
pub const OBSTACLE_RADIUS: f64 = 15.0;

/// Kinematic state of the spaceship for one launch attempt.
///
/// A ship is alive while `wreck` is `None`. Once a hazard is recorded the
/// state is terminal and the integrator leaves it untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct ShipState {
    /// Position in arena pixels
    pub pos: DVec2,
    /// Velocity in pixels per second
    pub vel: DVec2,
    /// Remaining thruster/brake fuel, never negative
    pub fuel: f64,
    /// Hazard that destroyed the ship, if any
    pub wreck: Option<Hazard>,
}

impl ShipState {
    /// Create a ship released at `pos` with velocity `vel`.
    pub fn new(pos: DVec2, vel: DVec2, fuel: f64) -> Self {
        Self {
            pos,
            vel,
            fuel: fuel.max(0.0),
            wreck: None,
        }
    }

    /// A ship sitting on the launch pad, not yet released.
    pub fn at_rest(pos: DVec2, fuel: f64) -> Self {
        Self::new(pos, DVec2::ZERO, fuel)
    }

    pub fn is_alive(&self) -> bool {
        self.wreck.is_none()
    }

    pub fn has_fuel(&self) -> bool {
        self.fuel > 0.0
    }

    /// Burn `amount` fuel, clamping at empty.
    pub fn burn(&mut self, amount: f64) {
        self.fuel = (self.fuel - amount).max(0.0);
    }

    pub fn speed(&self) -> f64 {
        self.vel.length()
    }
}
