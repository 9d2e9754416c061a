//! Force field model for planets, black holes and anti-gravity wells.
//!
//! Each source pulls (or pushes) with inverse-square strength inside its
//! influence radius and exerts nothing outside it. The cutoff is hard: the
//! pull drops from its full value to zero at the boundary.

use std::fmt;

use bevy::math::DVec2;
use thiserror::Error;

use crate::types::{
    ANTI_GRAVITY_MASS, ANTI_GRAVITY_RADIUS, BLACK_HOLE_MASS, BLACK_HOLE_RADIUS,
    DEFAULT_INFLUENCE_RADIUS, GRAVITY_CONSTANT, MIN_DISTANCE_SQUARED, PLANET_MASS, PLANET_RADIUS,
};

/// Direction of a source's force.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// Pulls toward the source center.
    #[default]
    Attract,
    /// Pushes away from the source center.
    Repel,
}

impl Polarity {
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Polarity::Attract => 1.0,
            Polarity::Repel => -1.0,
        }
    }
}

/// Strength class of a gravity source, fixed when the level is built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GravityCategory {
    Heavy,
    SuperHeavy,
    Variable,
    Moderate,
    #[default]
    Normal,
    Light,
    /// Strength carried entirely by mass.
    BlackHole,
}

/// Strength multipliers, indexed by `GravityCategory as usize`.
const STRENGTH_TABLE: [f64; 7] = [2.0, 2.5, 1.5, 1.2, 1.0, 0.7, 1.0];

impl GravityCategory {
    pub const ALL: [GravityCategory; 7] = [
        GravityCategory::Heavy,
        GravityCategory::SuperHeavy,
        GravityCategory::Variable,
        GravityCategory::Moderate,
        GravityCategory::Normal,
        GravityCategory::Light,
        GravityCategory::BlackHole,
    ];

    /// Strength multiplier applied to the source mass.
    #[inline]
    pub fn multiplier(self) -> f64 {
        STRENGTH_TABLE[self as usize]
    }
}

impl fmt::Display for GravityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GravityCategory::Heavy => "heavy",
            GravityCategory::SuperHeavy => "superheavy",
            GravityCategory::Variable => "variable",
            GravityCategory::Moderate => "moderate",
            GravityCategory::Normal => "normal",
            GravityCategory::Light => "light",
            GravityCategory::BlackHole => "blackhole",
        };
        f.write_str(name)
    }
}

/// Classify a planet color into its gravity category.
///
/// Level files describe planets by RGB color. The thresholds and their order
/// are part of the level format: red is heavy, blue normal, green light,
/// yellow variable, purple superheavy, white moderate, anything else normal.
pub fn classify_color([r, g, b]: [u8; 3]) -> GravityCategory {
    if r > 150 && g < 100 && b < 100 {
        GravityCategory::Heavy
    } else if b > 150 && r < 100 && g < 100 {
        GravityCategory::Normal
    } else if g > 150 && r < 100 && b < 100 {
        GravityCategory::Light
    } else if r > 150 && g > 150 && b < 100 {
        GravityCategory::Variable
    } else if r > 100 && g < 100 && b > 100 {
        GravityCategory::SuperHeavy
    } else if r > 150 && g > 150 && b > 150 {
        GravityCategory::Moderate
    } else {
        GravityCategory::Normal
    }
}

/// Invalid gravity source configuration, reported at level load.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SourceError {
    #[error("mass must be positive and finite, got {0}")]
    InvalidMass(f64),
    #[error("radius must be non-negative and finite, got {0}")]
    InvalidRadius(f64),
    #[error("lethal radius {lethal} exceeds influence radius {influence}")]
    LethalBeyondInfluence { lethal: f64, influence: f64 },
}

/// A body contributing to the force field.
///
/// Sources are immutable for the lifetime of a level attempt.
#[derive(Clone, Debug, PartialEq)]
pub struct GravitySource {
    /// Center position (px)
    pub position: DVec2,
    /// Base mass, before the category multiplier
    pub mass: f64,
    pub polarity: Polarity,
    pub category: GravityCategory,
    /// Cached `category.multiplier()`
    strength: f64,
    /// Beyond this distance the source exerts no force (px)
    pub influence_radius: f64,
    /// Entering this distance destroys the ship; 0 for harmless bodies (px)
    pub lethal_radius: f64,
}

impl GravitySource {
    pub fn new(
        position: DVec2,
        mass: f64,
        polarity: Polarity,
        category: GravityCategory,
        influence_radius: f64,
        lethal_radius: f64,
    ) -> Self {
        Self {
            position,
            mass,
            polarity,
            category,
            strength: category.multiplier(),
            influence_radius,
            lethal_radius,
        }
    }

    /// An attracting planet whose surface is lethal.
    pub fn planet(position: DVec2, mass: f64, radius: f64, category: GravityCategory) -> Self {
        Self::new(
            position,
            mass,
            Polarity::Attract,
            category,
            DEFAULT_INFLUENCE_RADIUS,
            radius,
        )
    }

    /// A planet classified from its RGB color.
    pub fn colored_planet(position: DVec2, mass: f64, radius: f64, color: [u8; 3]) -> Self {
        Self::planet(position, mass, radius, classify_color(color))
    }

    /// A planet with the default mass and radius.
    pub fn default_planet(position: DVec2, color: [u8; 3]) -> Self {
        Self::colored_planet(position, PLANET_MASS, PLANET_RADIUS, color)
    }

    /// A black hole: heavy attractor, lethal on contact with its core.
    pub fn black_hole(position: DVec2, mass: f64) -> Self {
        Self::new(
            position,
            mass,
            Polarity::Attract,
            GravityCategory::BlackHole,
            DEFAULT_INFLUENCE_RADIUS,
            BLACK_HOLE_RADIUS,
        )
    }

    /// A black hole with the default mass.
    pub fn default_black_hole(position: DVec2) -> Self {
        Self::black_hole(position, BLACK_HOLE_MASS)
    }

    /// An anti-gravity well: repels, lethal on contact with its core.
    pub fn anti_gravity_well(position: DVec2, mass: f64) -> Self {
        Self::new(
            position,
            mass,
            Polarity::Repel,
            GravityCategory::Normal,
            DEFAULT_INFLUENCE_RADIUS,
            ANTI_GRAVITY_RADIUS,
        )
    }

    /// An anti-gravity well with the default mass.
    pub fn default_anti_gravity_well(position: DVec2) -> Self {
        Self::anti_gravity_well(position, ANTI_GRAVITY_MASS)
    }

    pub fn with_influence_radius(mut self, influence_radius: f64) -> Self {
        self.influence_radius = influence_radius;
        self
    }

    pub fn with_lethal_radius(mut self, lethal_radius: f64) -> Self {
        self.lethal_radius = lethal_radius;
        self
    }

    /// Strength multiplier derived from the category at construction.
    #[inline]
    pub fn strength_multiplier(&self) -> f64 {
        self.strength
    }

    /// Mass after the category multiplier.
    #[inline]
    pub fn effective_mass(&self) -> f64 {
        self.mass * self.strength
    }

    pub fn is_lethal(&self) -> bool {
        self.lethal_radius > 0.0
    }

    /// Check the source invariants: mass > 0, influence >= lethal >= 0.
    pub fn validate(&self) -> Result<(), SourceError> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(SourceError::InvalidMass(self.mass));
        }
        for radius in [self.lethal_radius, self.influence_radius] {
            if !(radius.is_finite() && radius >= 0.0) {
                return Err(SourceError::InvalidRadius(radius));
            }
        }
        if self.lethal_radius > self.influence_radius {
            return Err(SourceError::LethalBeyondInfluence {
                lethal: self.lethal_radius,
                influence: self.influence_radius,
            });
        }
        Ok(())
    }

    /// Acceleration this source imparts at `point`.
    #[inline]
    pub fn acceleration_at(&self, point: DVec2) -> DVec2 {
        let delta = self.position - point;
        let r_squared = delta.length_squared();

        if r_squared > self.influence_radius * self.influence_radius {
            return DVec2::ZERO;
        }

        // a = G·m·k / max(r², ε), toward the source for attractors.
        // At the exact center the direction is undefined and the pull is zero.
        let magnitude = GRAVITY_CONSTANT * self.effective_mass() / r_squared.max(MIN_DISTANCE_SQUARED);
        delta.normalize_or_zero() * (magnitude * self.polarity.sign())
    }
}

/// Net acceleration at `point` from every source.
///
/// Pure: reads the sources, never mutates them. Cost is O(sources).
#[inline]
pub fn net_acceleration(point: DVec2, sources: &[GravitySource]) -> DVec2 {
    let mut acc = DVec2::ZERO;

    for source in sources {
        acc += source.acceleration_at(point);
    }

    acc
}
