//! Cross-checking a resolved state against all five equations.

use suvat_core::equations::Equation;

/// Residual of one equation, relative to its largest term (floored at 1 so
/// near-zero states are compared absolutely).
pub fn relative_residual(equation: Equation, values: &[f64; 5]) -> f64 {
    equation.residual(values).abs() / equation.scale(values).max(1.0)
}

/// Relative residuals of every equation, in [`Equation::ALL`] order.
pub fn residuals(values: &[f64; 5]) -> [f64; 5] {
    Equation::ALL.map(|equation| relative_residual(equation, values))
}

/// The equation that fits worst, with its relative residual.
pub fn worst_fit(values: &[f64; 5]) -> (Equation, f64) {
    Equation::ALL
        .into_iter()
        .map(|equation| (equation, relative_residual(equation, values)))
        .fold((Equation::VelocityTime, 0.0), |worst, candidate| {
            if candidate.1 > worst.1 { candidate } else { worst }
        })
}

/// True when every equation holds within `tolerance`.
pub fn is_consistent(values: &[f64; 5], tolerance: f64) -> bool {
    residuals(values).iter().all(|r| *r <= tolerance)
}
