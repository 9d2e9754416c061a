//! Physics simulation for the slingshot ship.
//!
//! The force field and the integrator are plain functions over plain data.
//! [`FlightPlugin`] is the only place they meet Bevy: it runs the active
//! [`Session`] one tick per `FixedUpdate`.

mod gravity;
mod integrator;

#[cfg(test)]
mod proptest_physics;

use bevy::prelude::*;

pub use gravity::{classify_color, net_acceleration, GravityCategory, GravitySource, Polarity, SourceError};
pub use integrator::{advance, apply_controls, coast_step, Controls, FlightConfig};

use crate::session::Session;

/// Plugin driving live flight on the fixed timestep.
///
/// Adds:
/// - `FlightConfig` (unless the host inserted one first) and `Controls`
/// - `Time<Fixed>` stepping at `FlightConfig::dt`
/// - `flight_step` in FixedUpdate
///
/// The host inserts a [`Session`] resource when a level starts and writes
/// pilot input into [`Controls`].
pub struct FlightPlugin;

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FlightConfig>().init_resource::<Controls>();

        // One FixedUpdate must be exactly one integration step.
        let dt = app.world().resource::<FlightConfig>().dt;
        app.insert_resource(Time::<Fixed>::from_seconds(dt))
            .add_systems(FixedUpdate, flight_step);
    }
}

/// Advance the active session by one tick.
///
/// Does nothing until a session exists.
pub fn flight_step(session: Option<ResMut<Session>>, controls: Res<Controls>, config: Res<FlightConfig>) {
    let Some(mut session) = session else {
        return;
    };

    if session.is_flying() {
        session.tick(*controls, &config);
    }
}
