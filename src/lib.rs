//! Constant-acceleration motion solver.
//!
//! Give any three of displacement, initial velocity, final velocity,
//! acceleration, and time; get the other two. The arithmetic lives in the
//! `suvat_solver` crate; this facade re-exports the workspace so front ends
//! (the `suvat` CLI, the `suvat_shell` REPL, or a GUI) share one entry point.

pub mod logging;
pub mod shell;

pub use suvat_config as config;
pub use suvat_core::{equations, quantity, state};
pub use suvat_export as export;
pub use suvat_form as form;
pub use suvat_solver as solver;

pub use suvat_core::quantity::Quantity;
pub use suvat_core::state::KinematicState;
pub use suvat_solver::{Solution, SolveError, solve};

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
