use suvat_core::quantity::Quantity;
use thiserror::Error;

use crate::triple::Triple;

/// Coarse classification of solver failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The state was malformed: wrong number of knowns or a non-finite value.
    InvalidInput,
    /// The selected equation pair has no real, well-defined answer.
    Unsolvable,
}

/// Why a well-formed state has no unique real solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Degeneracy {
    #[error("elapsed time is zero, so the unknowns are undetermined")]
    ZeroTime,
    #[error("acceleration is zero, so the velocity cannot change")]
    ZeroAcceleration,
    #[error("initial and final velocities sum to zero")]
    ZeroVelocitySum,
    #[error("velocity is zero with no acceleration")]
    ZeroVelocity,
    #[error("displacement is zero, so the acceleration is undetermined")]
    ZeroDisplacement,
    #[error("no real velocity satisfies v^2 = u^2 + 2as")]
    NegativeDiscriminant,
    #[error("time would be negative")]
    NegativeTime,
    #[error("result is not a finite number")]
    NonFiniteResult,
}

/// Errors returned by [`solve`](crate::solve).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("exactly three quantities must be known, got {known}")]
    InvalidInput { known: usize },
    #[error("{quantity} is not a finite number")]
    NonFinite { quantity: Quantity },
    #[error("cannot solve from {triple}: {reason}")]
    Unsolvable { triple: Triple, reason: Degeneracy },
}

impl SolveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SolveError::InvalidInput { .. } | SolveError::NonFinite { .. } => {
                ErrorKind::InvalidInput
            }
            SolveError::Unsolvable { .. } => ErrorKind::Unsolvable,
        }
    }

    /// The degeneracy behind an unsolvable state, if that is what this is.
    pub fn degeneracy(&self) -> Option<Degeneracy> {
        match self {
            SolveError::Unsolvable { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}
