//! Fixed-step semi-implicit Euler integrator for live flight.
//!
//! One tick, in order:
//! 1. thrust (fuel permitting)
//! 2. brake (fuel permitting)
//! 3. net acceleration at the current position
//! 4. `vel += acc * dt`, then `pos += vel * dt`
//! 5. termination check
//!
//! Steps 3 and 4 are [`coast_step`], shared with the trajectory predictor so
//! the aiming guide and live flight cannot drift apart.

use bevy::log::{debug, warn};
use bevy::math::DVec2;
use bevy::prelude::Resource;

use super::gravity::{net_acceleration, GravitySource};
use crate::collision::{evaluate_termination, Course};
use crate::outcome::Verdict;
use crate::types::{ShipState, FIXED_DT, FUEL_CAPACITY, SHIP_RADIUS};

// =============================================================================
// Configuration
// =============================================================================

/// Tuning for live flight.
#[derive(Resource, Clone, Debug)]
pub struct FlightConfig {
    /// Fixed timestep in seconds. Default: 1/60.
    /// `FlightPlugin` sets `Time<Fixed>` from this, so it must be positive.
    pub dt: f64,
    /// Ship radius used for lethal contact checks. Default: 8 px.
    pub contact_radius: f64,
    /// Fuel in a fresh ship. Default: 100.
    pub fuel_capacity: f64,
    /// Thruster acceleration along the heading (px/s²). Default: 120.
    pub thrust_acceleration: f64,
    /// Fuel burned per tick of thrust. Default: 0.5.
    pub thrust_fuel_cost: f64,
    /// Velocity scale per tick of braking. Default: 0.98.
    pub brake_damping: f64,
    /// Fuel burned per tick of braking. Default: 0.5.
    pub brake_fuel_cost: f64,
    /// Heading used when the ship has no velocity. Default: +x.
    pub forward_direction: DVec2,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            dt: FIXED_DT,
            contact_radius: SHIP_RADIUS,
            fuel_capacity: FUEL_CAPACITY,
            thrust_acceleration: 120.0,
            thrust_fuel_cost: 0.5,
            brake_damping: 0.98,
            brake_fuel_cost: 0.5,
            forward_direction: DVec2::X,
        }
    }
}

/// Pilot input for one tick. Both flags may be set at once.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub thrust: bool,
    pub brake: bool,
}

impl Controls {
    pub const IDLE: Controls = Controls {
        thrust: false,
        brake: false,
    };

    pub fn thrust() -> Self {
        Self {
            thrust: true,
            brake: false,
        }
    }

    pub fn brake() -> Self {
        Self {
            thrust: false,
            brake: true,
        }
    }

    pub fn is_idle(&self) -> bool {
        !self.thrust && !self.brake
    }
}

// =============================================================================
// Step functions
// =============================================================================

/// Apply thrust and brake for one tick. Each is a no-op on an empty tank.
pub fn apply_controls(ship: &mut ShipState, controls: Controls, config: &FlightConfig) {
    let had_fuel = ship.has_fuel();

    if controls.thrust && ship.has_fuel() {
        let heading = ship.vel.try_normalize().unwrap_or(config.forward_direction);
        ship.vel += heading * (config.thrust_acceleration * config.dt);
        ship.burn(config.thrust_fuel_cost);
    }

    if controls.brake && ship.has_fuel() {
        ship.vel *= config.brake_damping;
        ship.burn(config.brake_fuel_cost);
    }

    if had_fuel && !ship.has_fuel() {
        debug!("Fuel exhausted at ({:.1}, {:.1})", ship.pos.x, ship.pos.y);
    }
}

/// Advance position and velocity under gravity alone.
///
/// Returns the acceleration that was applied.
#[inline]
pub fn coast_step(pos: &mut DVec2, vel: &mut DVec2, sources: &[GravitySource], dt: f64) -> DVec2 {
    let acc = net_acceleration(*pos, sources);
    *vel += acc * dt;
    *pos += *vel * dt;
    acc
}

/// Advance the live ship by one tick and report the verdict.
///
/// A wrecked ship is terminal: it is left untouched and its recorded hazard
/// is reported again.
pub fn advance(ship: &mut ShipState, course: &Course, controls: Controls, config: &FlightConfig) -> Verdict {
    if let Some(hazard) = ship.wreck {
        warn!("advance called on a wrecked ship ({hazard}), ignoring");
        return Verdict::Dead(hazard);
    }

    apply_controls(ship, controls, config);
    coast_step(&mut ship.pos, &mut ship.vel, &course.sources, config.dt);

    let verdict = evaluate_termination(ship.pos, course, config.contact_radius);
    if let Verdict::Dead(hazard) = verdict {
        ship.wreck = Some(hazard);
    }
    verdict
}
