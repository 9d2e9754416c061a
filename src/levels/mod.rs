//! Level descriptions and their validated, simulation-ready form.
//!
//! A [`LevelLayout`] is the static description a level pack ships with:
//! typed object descriptors, a ship start and a shot limit. [`Level::build`]
//! checks it once at load time and produces a [`Level`] owning the
//! [`Course`] the engine flies against. The engine assumes every course it
//! receives came through here.

pub mod presets;

use bevy::log::info;
use bevy::math::DVec2;
use thiserror::Error;

use crate::collision::{Course, Goal, Obstacle, PlayArea};
use crate::physics::{GravitySource, SourceError};
use crate::types::{GOAL_RADIUS, OBSTACLE_RADIUS};

pub use presets::LEVELS;

/// One object in a level description.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LevelObject {
    /// Attracting planet; its color picks the gravity category.
    Planet {
        position: DVec2,
        mass: f64,
        radius: f64,
        color: [u8; 3],
    },
    BlackHole { position: DVec2, mass: f64 },
    AntiGravityWell { position: DVec2, mass: f64 },
    Goal { position: DVec2, radius: f64 },
    Obstacle { position: DVec2, radius: f64 },
}

impl LevelObject {
    pub const fn planet(x: f64, y: f64, mass: f64, radius: f64, color: [u8; 3]) -> Self {
        LevelObject::Planet {
            position: DVec2::new(x, y),
            mass,
            radius,
            color,
        }
    }

    pub const fn black_hole(x: f64, y: f64, mass: f64) -> Self {
        LevelObject::BlackHole {
            position: DVec2::new(x, y),
            mass,
        }
    }

    pub const fn anti_gravity(x: f64, y: f64, mass: f64) -> Self {
        LevelObject::AntiGravityWell {
            position: DVec2::new(x, y),
            mass,
        }
    }

    /// Goal with the default radius.
    pub const fn goal(x: f64, y: f64) -> Self {
        LevelObject::Goal {
            position: DVec2::new(x, y),
            radius: GOAL_RADIUS,
        }
    }

    pub const fn obstacle(x: f64, y: f64, radius: f64) -> Self {
        LevelObject::Obstacle {
            position: DVec2::new(x, y),
            radius,
        }
    }

    /// Obstacle with the default radius.
    pub const fn small_obstacle(x: f64, y: f64) -> Self {
        Self::obstacle(x, y, OBSTACLE_RADIUS)
    }

    /// The gravity source this object contributes, if any.
    pub fn gravity_source(&self) -> Option<GravitySource> {
        match *self {
            LevelObject::Planet {
                position,
                mass,
                radius,
                color,
            } => Some(GravitySource::colored_planet(position, mass, radius, color)),
            LevelObject::BlackHole { position, mass } => Some(GravitySource::black_hole(position, mass)),
            LevelObject::AntiGravityWell { position, mass } => Some(GravitySource::anti_gravity_well(position, mass)),
            LevelObject::Goal { .. } | LevelObject::Obstacle { .. } => None,
        }
    }
}

/// Static description of a level.
#[derive(Clone, Copy, Debug)]
pub struct LevelLayout {
    pub name: &'static str,
    pub description: &'static str,
    /// Launches allowed before the level is lost.
    pub max_shots: u32,
    /// Slingshot anchor and respawn point (px).
    pub ship_start: DVec2,
    pub objects: &'static [LevelObject],
}

/// Why a level description was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LevelError {
    #[error("object #{index}: invalid gravity source")]
    InvalidSource {
        index: usize,
        #[source]
        reason: SourceError,
    },
    #[error("object #{index}: obstacle radius must be positive and finite, got {radius}")]
    InvalidObstacle { index: usize, radius: f64 },
    #[error("object #{index}: goal radius must be positive and finite, got {radius}")]
    InvalidGoal { index: usize, radius: f64 },
    #[error("level has no goal")]
    MissingGoal,
    #[error("object #{index}: level already has a goal")]
    DuplicateGoal { index: usize },
    #[error("level must allow at least one shot")]
    NoShots,
    #[error("ship start ({x}, {y}) is not a finite position")]
    InvalidStart { x: f64, y: f64 },
}

/// A validated level, ready to fly.
#[derive(Clone, Debug, PartialEq)]
pub struct Level {
    pub name: String,
    pub description: String,
    pub max_shots: u32,
    pub ship_start: DVec2,
    pub course: Course,
}

fn positive_radius(radius: f64) -> bool {
    radius.is_finite() && radius > 0.0
}

impl Level {
    /// Validate a static layout.
    pub fn build(layout: &LevelLayout) -> Result<Self, LevelError> {
        Self::from_objects(
            layout.name,
            layout.description,
            layout.max_shots,
            layout.ship_start,
            layout.objects,
        )
    }

    /// Validate a level from loose parts, e.g. ones parsed from a level file.
    pub fn from_objects(
        name: &str,
        description: &str,
        max_shots: u32,
        ship_start: DVec2,
        objects: &[LevelObject],
    ) -> Result<Self, LevelError> {
        if max_shots == 0 {
            return Err(LevelError::NoShots);
        }
        if !ship_start.is_finite() {
            return Err(LevelError::InvalidStart {
                x: ship_start.x,
                y: ship_start.y,
            });
        }

        let mut sources = Vec::new();
        let mut obstacles = Vec::new();
        let mut goal = None;

        for (index, object) in objects.iter().enumerate() {
            if let Some(source) = object.gravity_source() {
                source
                    .validate()
                    .map_err(|reason| LevelError::InvalidSource { index, reason })?;
                sources.push(source);
                continue;
            }

            match *object {
                LevelObject::Goal { position, radius } => {
                    if goal.is_some() {
                        return Err(LevelError::DuplicateGoal { index });
                    }
                    if !positive_radius(radius) {
                        return Err(LevelError::InvalidGoal { index, radius });
                    }
                    goal = Some(Goal::new(position, radius));
                }
                LevelObject::Obstacle { position, radius } => {
                    if !positive_radius(radius) {
                        return Err(LevelError::InvalidObstacle { index, radius });
                    }
                    obstacles.push(Obstacle::new(position, radius));
                }
                _ => {}
            }
        }

        let goal = goal.ok_or(LevelError::MissingGoal)?;

        Ok(Self {
            name: name.to_owned(),
            description: description.to_owned(),
            max_shots,
            ship_start,
            course: Course {
                sources,
                obstacles,
                goal,
                bounds: PlayArea::default(),
            },
        })
    }

    /// Build every level of a pack, stopping at the first invalid one.
    pub fn build_all(layouts: &[LevelLayout]) -> Result<Vec<Level>, (usize, LevelError)> {
        let levels = layouts
            .iter()
            .enumerate()
            .map(|(i, layout)| Level::build(layout).map_err(|e| (i, e)))
            .collect::<Result<Vec<_>, _>>()?;
        info!("Loaded {} levels", levels.len());
        Ok(levels)
    }
}
