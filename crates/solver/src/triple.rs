//! The ten combinations of three known quantities.

use std::fmt;

use suvat_core::equations::Equation;
use suvat_core::quantity::Quantity::{
    self, Acceleration as A, Displacement as S, FinalVelocity as V, InitialVelocity as U, Time as T,
};
use suvat_core::state::KnownSet;

/// Which three quantities were supplied. Named by their symbols in s, u, v, a, t order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Triple {
    Suv,
    Sua,
    Sut,
    Sva,
    Svt,
    Sat,
    Uva,
    Uvt,
    Uat,
    Vat,
}

impl Triple {
    pub const ALL: [Triple; 10] = [
        Triple::Suv,
        Triple::Sua,
        Triple::Sut,
        Triple::Sva,
        Triple::Svt,
        Triple::Sat,
        Triple::Uva,
        Triple::Uvt,
        Triple::Uat,
        Triple::Vat,
    ];

    /// The supplied quantities, in canonical order.
    pub const fn known(self) -> [Quantity; 3] {
        match self {
            Triple::Suv => [S, U, V],
            Triple::Sua => [S, U, A],
            Triple::Sut => [S, U, T],
            Triple::Sva => [S, V, A],
            Triple::Svt => [S, V, T],
            Triple::Sat => [S, A, T],
            Triple::Uva => [U, V, A],
            Triple::Uvt => [U, V, T],
            Triple::Uat => [U, A, T],
            Triple::Vat => [V, A, T],
        }
    }

    /// The two quantities the solver computes, in canonical order.
    pub const fn unknowns(self) -> [Quantity; 2] {
        match self {
            Triple::Suv => [A, T],
            Triple::Sua => [V, T],
            Triple::Sut => [V, A],
            Triple::Sva => [U, T],
            Triple::Svt => [U, A],
            Triple::Sat => [U, V],
            Triple::Uva => [S, T],
            Triple::Uvt => [S, A],
            Triple::Uat => [S, V],
            Triple::Vat => [S, U],
        }
    }

    pub fn known_set(self) -> KnownSet {
        self.known().into_iter().collect()
    }

    /// The pair of equations relating the knowns to the unknowns: for each
    /// unknown, the equation that leaves out the other one.
    pub fn equations(self) -> [Equation; 2] {
        let [first, second] = self.unknowns();
        [Equation::omitting(second), Equation::omitting(first)]
    }

    /// Lowercase symbols, e.g. `"suv"`.
    pub fn symbols(self) -> String {
        self.known().iter().map(|q| q.symbol()).collect()
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.known();
        write!(f, "{{{}, {}, {}}}", x.symbol(), y.symbol(), z.symbol())
    }
}
