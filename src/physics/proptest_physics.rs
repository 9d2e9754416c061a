//! Property-based tests for the force field and integrator using proptest.

use std::f64::consts::TAU;

use bevy::math::DVec2;
use proptest::prelude::*;

use super::gravity::{net_acceleration, GravityCategory, GravitySource};
use super::integrator::{advance, apply_controls, coast_step, Controls, FlightConfig};
use crate::prediction::{predict, PredictionSettings};
use crate::test_utils::{assertions, fixtures};
use crate::types::ShipState;

fn category() -> impl Strategy<Value = GravityCategory> {
    prop::sample::select(GravityCategory::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Attractors pull toward their center from every direction, repellers push away.
    #[test]
    fn prop_polarity_direction(
        angle in 0.0f64..TAU,
        distance in 6.0f64..490.0,
        mass in 1.0f64..1000.0,
        cat in category(),
    ) {
        let center = DVec2::new(512.0, 384.0);
        let point = center + DVec2::from_angle(angle) * distance;
        let toward = (center - point).normalize();

        let planet = GravitySource::planet(center, mass, 0.0, cat);
        let well = GravitySource::anti_gravity_well(center, mass);

        let pull = planet.acceleration_at(point);
        let push = well.acceleration_at(point);

        prop_assert!(pull.dot(toward) > 0.0, "attractor pulled away: {:?}", pull);
        prop_assert!(push.dot(toward) < 0.0, "repeller pulled in: {:?}", push);
        // Purely radial
        prop_assert!(pull.perp_dot(toward).abs() <= 1e-9 * pull.length());
    }

    /// Same mass and position: acceleration scales exactly with the category multiplier.
    #[test]
    fn prop_multiplier_scaling(
        angle in 0.0f64..TAU,
        distance in 0.0f64..500.0,
        mass in 1.0f64..1000.0,
        cat in category(),
    ) {
        let point = DVec2::from_angle(angle) * distance;
        let normal = GravitySource::planet(DVec2::ZERO, mass, 10.0, GravityCategory::Normal);
        let tagged = GravitySource::planet(DVec2::ZERO, mass, 10.0, cat);

        let base = normal.acceleration_at(point).length();
        let scaled = tagged.acceleration_at(point).length();
        prop_assert!((scaled - base * cat.multiplier()).abs() <= 1e-9 * scaled.max(1.0));
    }

    /// No point in the plane, including source centers, produces a non-finite pull.
    #[test]
    fn prop_acceleration_always_finite(
        x in -2000.0f64..2000.0,
        y in -2000.0f64..2000.0,
        on_center in any::<bool>(),
    ) {
        let sources = [
            GravitySource::default_black_hole(DVec2::new(300.0, 200.0)),
            GravitySource::default_anti_gravity_well(DVec2::new(500.0, 400.0)),
            fixtures::reference_planet(),
        ];
        let point = if on_center { sources[0].position } else { DVec2::new(x, y) };
        prop_assert!(net_acceleration(point, &sources).is_finite());
    }

    /// With no sources the integrator is straight-line motion.
    #[test]
    fn prop_zero_gravity_is_linear(
        vx in -300.0f64..300.0,
        vy in -300.0f64..300.0,
        ticks in 1usize..600,
    ) {
        let config = FlightConfig::default();
        let course = fixtures::open_course();
        let origin = DVec2::new(100.0, 300.0);
        let vel = DVec2::new(vx, vy);
        let mut ship = fixtures::launched_ship(origin, vel);

        for _ in 0..ticks {
            advance(&mut ship, &course, Controls::IDLE, &config);
        }

        let expected = origin + vel * (ticks as f64 * config.dt);
        assertions::assert_vec_close(ship.pos, expected, 1e-6);
        prop_assert_eq!(ship.vel, vel);
    }

    /// Prediction reproduces hands-off live flight step for step.
    #[test]
    fn prop_prediction_matches_live_flight(
        vx in -350.0f64..350.0,
        vy in -350.0f64..350.0,
        steps in 1usize..400,
    ) {
        let config = FlightConfig::default();
        let course = fixtures::single_planet_course();
        let origin = DVec2::new(100.0, 300.0);
        let settings = PredictionSettings::matching(&config, steps);

        let predicted: Vec<DVec2> = predict(origin, DVec2::new(vx, vy), &course, &settings, &config).collect();

        let mut ship = fixtures::launched_ship(origin, DVec2::new(vx, vy));
        let mut live = Vec::new();
        for _ in 0..steps {
            let verdict = advance(&mut ship, &course, Controls::IDLE, &config);
            live.push(ship.pos);
            if verdict.is_terminal() {
                break;
            }
        }

        prop_assert_eq!(predicted, live);
    }

    /// Once the tank is empty, controls change nothing but the gravity step would.
    #[test]
    fn prop_empty_tank_is_idempotent(
        vx in -300.0f64..300.0,
        vy in -300.0f64..300.0,
        thrust in any::<bool>(),
        brake in any::<bool>(),
    ) {
        let config = FlightConfig::default();
        let course = fixtures::single_planet_open_course();
        let start = ShipState::new(DVec2::new(100.0, 300.0), DVec2::new(vx, vy), 0.0);

        let mut piloted = start.clone();
        apply_controls(&mut piloted, Controls { thrust, brake }, &config);
        prop_assert_eq!(&piloted, &start);

        let mut piloted = start.clone();
        let mut coasting = start.clone();
        advance(&mut piloted, &course, Controls { thrust, brake }, &config);
        coast_step(&mut coasting.pos, &mut coasting.vel, &course.sources, config.dt);
        prop_assert_eq!(piloted.pos, coasting.pos);
        prop_assert_eq!(piloted.vel, coasting.vel);
        prop_assert_eq!(piloted.fuel, 0.0);
    }

    /// Fuel never goes negative however long the pilot holds the controls.
    #[test]
    fn prop_fuel_never_negative(
        fuel in 0.0f64..5.0,
        ticks in 1usize..50,
        thrust in any::<bool>(),
        brake in any::<bool>(),
    ) {
        let config = FlightConfig::default();
        let mut ship = ShipState::new(DVec2::ZERO, DVec2::new(10.0, 0.0), fuel);
        for _ in 0..ticks {
            apply_controls(&mut ship, Controls { thrust, brake }, &config);
            prop_assert!(ship.fuel >= 0.0);
        }
    }
}
