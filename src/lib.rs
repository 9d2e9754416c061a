//! Gravity Wells - slingshot physics engine
//!
//! A library crate providing the force field, fixed-step integrator and
//! trajectory predictor of a 2D gravity slingshot puzzle, plus the level and
//! session glue a game host drives them through.

pub mod collision;
pub mod levels;
pub mod outcome;
pub mod physics;
pub mod prediction;
pub mod session;
pub mod slingshot;
pub mod types;

#[cfg(test)]
pub mod test_utils;
