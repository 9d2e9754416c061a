//! Per-level play session: shots, phase and the live ship.
//!
//! The session is the one piece of mutable game state. The host owns it (as
//! a Bevy resource) and passes it the pilot's input each tick; the physics
//! core never reaches into it.

use bevy::log::{info, warn};
use bevy::math::DVec2;
use bevy::prelude::Resource;
use thiserror::Error;

use crate::levels::Level;
use crate::outcome::Verdict;
use crate::physics::{advance, Controls, FlightConfig};
use crate::prediction::{predict_path, PredictedPath, PredictionSettings};
use crate::types::ShipState;

/// Where the level attempt stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Ship on the pad, waiting for a launch.
    #[default]
    Aiming,
    /// Ship in flight; ticks advance it.
    Flying,
    /// Goal reached.
    LevelComplete,
    /// Out of shots.
    GameOver,
}

impl Phase {
    /// Returns true once the level attempt is over either way.
    pub fn is_finished(&self) -> bool {
        matches!(self, Phase::LevelComplete | Phase::GameOver)
    }
}

/// Why a launch request was refused.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("cannot launch while {0:?}")]
    NotAiming(Phase),
    #[error("no shots remaining ({used} of {max} used)")]
    NoShotsRemaining { used: u32, max: u32 },
    #[error("launch velocity ({x}, {y}) is not finite")]
    NonFiniteVelocity { x: f64, y: f64 },
}

/// How the most recent flight ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightSummary {
    pub verdict: Verdict,
    /// Ship position on the final tick.
    pub final_position: DVec2,
    /// Ticks flown.
    pub ticks: u32,
    /// Fuel left in the tank.
    pub fuel_left: f64,
}

/// Play state for one level.
#[derive(Resource, Clone, Debug)]
pub struct Session {
    level: Level,
    phase: Phase,
    ship: ShipState,
    shots_used: u32,
    flight_ticks: u32,
    fuel_capacity: f64,
    last_flight: Option<FlightSummary>,
}

impl Session {
    /// Start a level with a fresh ship on the pad.
    pub fn new(level: Level, config: &FlightConfig) -> Self {
        info!("Starting level \"{}\" ({} shots)", level.name, level.max_shots);
        let ship = ShipState::at_rest(level.ship_start, config.fuel_capacity);
        Self {
            level,
            phase: Phase::Aiming,
            ship,
            shots_used: 0,
            flight_ticks: 0,
            fuel_capacity: config.fuel_capacity,
            last_flight: None,
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_flying(&self) -> bool {
        self.phase == Phase::Flying
    }

    /// The live ship (on the pad while aiming).
    pub fn ship(&self) -> &ShipState {
        &self.ship
    }

    pub fn shots_used(&self) -> u32 {
        self.shots_used
    }

    pub fn shots_remaining(&self) -> u32 {
        self.level.max_shots.saturating_sub(self.shots_used)
    }

    pub fn last_flight(&self) -> Option<&FlightSummary> {
        self.last_flight.as_ref()
    }

    /// Aiming guide for a launch at `velocity` from the pad.
    ///
    /// The guide steps with `config.dt`, so it traces the flight `tick`
    /// will produce under the same config.
    pub fn preview(&self, velocity: DVec2, steps: usize, config: &FlightConfig) -> PredictedPath {
        let settings = PredictionSettings::matching(config, steps);
        predict_path(self.level.ship_start, velocity, &self.level.course, &settings, config)
    }

    /// Release the ship from the pad. Consumes one shot.
    pub fn launch(&mut self, velocity: DVec2) -> Result<(), SessionError> {
        if self.phase != Phase::Aiming {
            warn!("Launch ignored: session is {:?}", self.phase);
            return Err(SessionError::NotAiming(self.phase));
        }
        if self.shots_remaining() == 0 {
            return Err(SessionError::NoShotsRemaining {
                used: self.shots_used,
                max: self.level.max_shots,
            });
        }
        if !velocity.is_finite() {
            return Err(SessionError::NonFiniteVelocity {
                x: velocity.x,
                y: velocity.y,
            });
        }

        self.ship = ShipState::new(self.level.ship_start, velocity, self.fuel_capacity);
        self.shots_used += 1;
        self.flight_ticks = 0;
        self.phase = Phase::Flying;
        info!(
            "Launch {}/{} at ({:.1}, {:.1}) px/s",
            self.shots_used, self.level.max_shots, velocity.x, velocity.y
        );
        Ok(())
    }

    /// Advance the flight by one tick and react to the verdict.
    ///
    /// Outside the flying phase this does nothing and reports `Continue`.
    pub fn tick(&mut self, controls: Controls, config: &FlightConfig) -> Verdict {
        if self.phase != Phase::Flying {
            warn!("Tick ignored: session is {:?}", self.phase);
            return Verdict::Continue;
        }

        let verdict = advance(&mut self.ship, &self.level.course, controls, config);
        self.flight_ticks += 1;

        if verdict.is_terminal() {
            self.finish_flight(verdict);
        }
        verdict
    }

    fn finish_flight(&mut self, verdict: Verdict) {
        self.last_flight = Some(FlightSummary {
            verdict,
            final_position: self.ship.pos,
            ticks: self.flight_ticks,
            fuel_left: self.ship.fuel,
        });

        match verdict {
            Verdict::Success => {
                info!(
                    "Level \"{}\" complete in {} shot(s)",
                    self.level.name, self.shots_used
                );
                self.phase = Phase::LevelComplete;
            }
            Verdict::Dead(hazard) => {
                info!("Ship lost to {hazard} after {} ticks", self.flight_ticks);
                if self.shots_remaining() == 0 {
                    info!("Game over on \"{}\"", self.level.name);
                    self.phase = Phase::GameOver;
                } else {
                    self.reset_ship();
                    self.phase = Phase::Aiming;
                }
            }
            Verdict::Continue => {}
        }
    }

    fn reset_ship(&mut self) {
        self.ship = ShipState::at_rest(self.level.ship_start, self.fuel_capacity);
        self.flight_ticks = 0;
    }

    /// Restart the level from scratch with every shot restored.
    pub fn restart(&mut self) {
        info!("Restarting level \"{}\"", self.level.name);
        self.reset_ship();
        self.shots_used = 0;
        self.last_flight = None;
        self.phase = Phase::Aiming;
    }
}
