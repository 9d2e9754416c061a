//! Termination verdicts for live flight and predicted paths.
//!
//! Every tick ends in exactly one verdict:
//! - Continue: keep flying
//! - Success: the ship is inside the goal region
//! - Dead: the ship touched a lethal body or obstacle, or left the arena

use std::fmt;

/// What destroyed the ship.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hazard {
    /// Entered the lethal radius of the gravity source at this index.
    Source(usize),
    /// Touched the obstacle at this index.
    Obstacle(usize),
    /// Drifted past the arena margin.
    OutOfBounds,
}

impl fmt::Display for Hazard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hazard::Source(index) => write!(f, "gravity source #{index}"),
            Hazard::Obstacle(index) => write!(f, "obstacle #{index}"),
            Hazard::OutOfBounds => write!(f, "out of bounds"),
        }
    }
}

/// Outcome of a single simulation tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verdict {
    /// Flight continues.
    #[default]
    Continue,
    /// Ship reached the goal.
    Success,
    /// Ship was destroyed.
    Dead(Hazard),
}

impl Verdict {
    /// Returns true if the flight ends on this verdict.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Verdict::Continue)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Verdict::Success)
    }

    pub fn is_dead(&self) -> bool {
        matches!(self, Verdict::Dead(_))
    }

    /// The hazard responsible, if this is a death.
    pub fn hazard(&self) -> Option<Hazard> {
        match self {
            Verdict::Dead(hazard) => Some(*hazard),
            _ => None,
        }
    }
}
