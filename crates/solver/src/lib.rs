//! Equation selection and evaluation for constant-acceleration motion.
//!
//! [`solve`] takes a [`KinematicState`] with exactly three known quantities,
//! works out which of the ten known-triples it is, and evaluates the matching
//! pair of closed-form equations for the other two.
//!
//! Two of the triples ({s, u, a} and {s, v, a}) go through a square root. Of
//! the two roots, the solver keeps the one giving the smallest non-negative
//! elapsed time: the first moment the body reaches the given displacement.

pub mod check;
mod error;
mod evaluate;
mod triple;

pub use error::{Degeneracy, ErrorKind, SolveError};
pub use evaluate::Given;
pub use triple::Triple;

use suvat_core::quantity::Quantity;
use suvat_core::state::KinematicState;
use tracing::debug;

/// A fully-resolved state together with the triple it was solved from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    pub s: f64,
    pub u: f64,
    pub v: f64,
    pub a: f64,
    pub t: f64,
    pub triple: Triple,
}

impl Solution {
    fn new(values: [f64; 5], triple: Triple) -> Self {
        let [s, u, v, a, t] = values;
        Solution {
            s,
            u,
            v,
            a,
            t,
            triple,
        }
    }

    /// Values in canonical `[s, u, v, a, t]` order.
    pub fn values(&self) -> [f64; 5] {
        [self.s, self.u, self.v, self.a, self.t]
    }

    pub fn get(&self, quantity: Quantity) -> f64 {
        self.values()[quantity.index()]
    }

    pub fn state(&self) -> KinematicState {
        KinematicState::from_values(self.values())
    }

    /// The two quantities that were computed rather than supplied.
    pub fn computed(&self) -> [Quantity; 2] {
        self.triple.unknowns()
    }
}

impl From<Solution> for KinematicState {
    fn from(solution: Solution) -> Self {
        solution.state()
    }
}

/// Resolve the two unknown quantities of `state`.
///
/// Fails with [`SolveError::InvalidInput`] unless exactly three quantities are
/// known, with [`SolveError::NonFinite`] if any known value is NaN or infinite,
/// and with [`SolveError::Unsolvable`] when the inputs admit no unique real
/// answer. No partial results are returned.
pub fn solve(state: KinematicState) -> Result<Solution, SolveError> {
    let given = Given::from_state(&state).inspect_err(|err| {
        debug!(known = state.known().len(), "rejected state: {err}");
    })?;
    let triple = given.triple();

    if let Some((quantity, _)) = state
        .iter()
        .find(|(_, value)| value.is_some_and(|v| !v.is_finite()))
    {
        debug!(%triple, %quantity, "rejected non-finite input");
        return Err(SolveError::NonFinite { quantity });
    }

    let unsolvable = |reason| {
        debug!(%triple, %reason, "no solution");
        SolveError::Unsolvable { triple, reason }
    };

    if given.time().is_some_and(|t| t < 0.0) {
        return Err(unsolvable(Degeneracy::NegativeTime));
    }

    let values = given.evaluate().map_err(unsolvable)?;
    if values.iter().any(|value| !value.is_finite()) {
        return Err(unsolvable(Degeneracy::NonFiniteResult));
    }

    let solution = Solution::new(values, triple);
    debug!(
        %triple,
        s = solution.s,
        u = solution.u,
        v = solution.v,
        a = solution.a,
        t = solution.t,
        "solved"
    );
    Ok(solution)
}
