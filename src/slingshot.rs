//! Slingshot aiming: map a drag gesture to a launch velocity.
//!
//! The pilot grabs the ship at its anchor and pulls back. The ship launches
//! opposite the pull, with speed proportional to how far it was drawn, up to
//! `max_pull`. Short tugs below `min_pull` are ignored.

use bevy::math::DVec2;

/// Tuning for the slingshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlingshotConfig {
    /// Longest effective pull (px). Default: 120.
    pub max_pull: f64,
    /// Pulls at or below this distance do not launch (px). Default: 10.
    pub min_pull: f64,
    /// Launch speed at full pull (px/s). Default: 350.
    pub launch_speed: f64,
}

impl Default for SlingshotConfig {
    fn default() -> Self {
        Self {
            max_pull: 120.0,
            min_pull: 10.0,
            launch_speed: 350.0,
        }
    }
}

/// Constrain the drag point to the max pull circle around `anchor`.
pub fn clamp_pull(anchor: DVec2, pull_point: DVec2, config: &SlingshotConfig) -> DVec2 {
    let offset = pull_point - anchor;
    anchor + offset.clamp_length_max(config.max_pull)
}

/// Fraction of full power for this drag, in `[0, 1]`.
pub fn power(anchor: DVec2, pull_point: DVec2, config: &SlingshotConfig) -> f64 {
    if config.max_pull <= 0.0 {
        return 0.0;
    }
    let distance = anchor.distance(pull_point).min(config.max_pull);
    distance / config.max_pull
}

/// Launch velocity for a release at `pull_point`, or `None` for a pull too short to fire.
pub fn release_velocity(anchor: DVec2, pull_point: DVec2, config: &SlingshotConfig) -> Option<DVec2> {
    let pull = anchor - pull_point;
    let distance = pull.length().min(config.max_pull);
    if !distance.is_finite() || distance <= config.min_pull {
        return None;
    }

    let direction = pull.try_normalize()?;
    Some(direction * power(anchor, pull_point, config) * config.launch_speed)
}
