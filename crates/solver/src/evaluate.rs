//! Closed-form evaluation of the two unknowns for each known-triple.
//!
//! Every function returns the full `[s, u, v, a, t]` record. Zero tests are
//! exact comparisons; the caller rejects non-finite results afterwards.

use suvat_core::state::KinematicState;

use crate::error::{Degeneracy, SolveError};
use crate::triple::Triple;

/// The supplied values, tagged by which three quantities they are.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Given {
    Suv { s: f64, u: f64, v: f64 },
    Sua { s: f64, u: f64, a: f64 },
    Sut { s: f64, u: f64, t: f64 },
    Sva { s: f64, v: f64, a: f64 },
    Svt { s: f64, v: f64, t: f64 },
    Sat { s: f64, a: f64, t: f64 },
    Uva { u: f64, v: f64, a: f64 },
    Uvt { u: f64, v: f64, t: f64 },
    Uat { u: f64, a: f64, t: f64 },
    Vat { v: f64, a: f64, t: f64 },
}

impl Given {
    /// Classify a state, rejecting anything without exactly three knowns.
    pub fn from_state(state: &KinematicState) -> Result<Given, SolveError> {
        let given = match (state.s, state.u, state.v, state.a, state.t) {
            (Some(s), Some(u), Some(v), None, None) => Given::Suv { s, u, v },
            (Some(s), Some(u), None, Some(a), None) => Given::Sua { s, u, a },
            (Some(s), Some(u), None, None, Some(t)) => Given::Sut { s, u, t },
            (Some(s), None, Some(v), Some(a), None) => Given::Sva { s, v, a },
            (Some(s), None, Some(v), None, Some(t)) => Given::Svt { s, v, t },
            (Some(s), None, None, Some(a), Some(t)) => Given::Sat { s, a, t },
            (None, Some(u), Some(v), Some(a), None) => Given::Uva { u, v, a },
            (None, Some(u), Some(v), None, Some(t)) => Given::Uvt { u, v, t },
            (None, Some(u), None, Some(a), Some(t)) => Given::Uat { u, a, t },
            (None, None, Some(v), Some(a), Some(t)) => Given::Vat { v, a, t },
            _ => {
                return Err(SolveError::InvalidInput {
                    known: state.known().len(),
                });
            }
        };
        Ok(given)
    }

    pub fn triple(&self) -> Triple {
        match self {
            Given::Suv { .. } => Triple::Suv,
            Given::Sua { .. } => Triple::Sua,
            Given::Sut { .. } => Triple::Sut,
            Given::Sva { .. } => Triple::Sva,
            Given::Svt { .. } => Triple::Svt,
            Given::Sat { .. } => Triple::Sat,
            Given::Uva { .. } => Triple::Uva,
            Given::Uvt { .. } => Triple::Uvt,
            Given::Uat { .. } => Triple::Uat,
            Given::Vat { .. } => Triple::Vat,
        }
    }

    /// Known time, if this triple includes it.
    pub fn time(&self) -> Option<f64> {
        match *self {
            Given::Sut { t, .. }
            | Given::Svt { t, .. }
            | Given::Sat { t, .. }
            | Given::Uvt { t, .. }
            | Given::Uat { t, .. }
            | Given::Vat { t, .. } => Some(t),
            _ => None,
        }
    }

    /// Compute the two unknowns.
    pub fn evaluate(self) -> Result<[f64; 5], Degeneracy> {
        match self {
            Given::Suv { s, u, v } => from_suv(s, u, v),
            Given::Sua { s, u, a } => from_sua(s, u, a),
            Given::Sut { s, u, t } => from_sut(s, u, t),
            Given::Sva { s, v, a } => from_sva(s, v, a),
            Given::Svt { s, v, t } => from_svt(s, v, t),
            Given::Sat { s, a, t } => from_sat(s, a, t),
            Given::Uva { u, v, a } => from_uva(u, v, a),
            Given::Uvt { u, v, t } => from_uvt(u, v, t),
            Given::Uat { u, a, t } => Ok(from_uat(u, a, t)),
            Given::Vat { v, a, t } => Ok(from_vat(v, a, t)),
        }
    }
}

fn non_negative(t: f64) -> Result<f64, Degeneracy> {
    if t < 0.0 {
        Err(Degeneracy::NegativeTime)
    } else {
        Ok(t)
    }
}

/// Relative width, in units of `f64::EPSILON`, of the band around zero in
/// which a discriminant counts as exactly zero.
const DISCRIMINANT_ULPS: f64 = 4.0;

/// Pick the root of `x^2 = base + change` that reaches the state soonest.
///
/// Both signs are tried and the one with the smallest non-negative elapsed
/// time wins. Without a reversal in direction that is the root sharing the
/// sign of the motion; the reversing root is only taken when the other would
/// need negative time.
///
/// A sum within rounding error of zero is a turning point and yields the
/// single root zero.
fn earliest_root(
    base: f64,
    change: f64,
    elapsed: impl Fn(f64) -> f64,
) -> Result<(f64, f64), Degeneracy> {
    let mut square = base + change;
    let scale = base.abs().max(change.abs());
    if square.abs() <= DISCRIMINANT_ULPS * f64::EPSILON * scale {
        square = 0.0;
    }
    if square < 0.0 {
        return Err(Degeneracy::NegativeDiscriminant);
    }
    let root = square.sqrt();
    [root, -root]
        .into_iter()
        .map(|x| (x, elapsed(x)))
        .filter(|(_, t)| *t >= 0.0)
        .min_by(|(_, t1), (_, t2)| t1.total_cmp(t2))
        .ok_or(Degeneracy::NegativeTime)
}

fn from_suv(s: f64, u: f64, v: f64) -> Result<[f64; 5], Degeneracy> {
    // Opposite velocities cover no net distance in any time.
    let sum = u + v;
    if sum == 0.0 {
        return Err(Degeneracy::ZeroVelocitySum);
    }
    if s == 0.0 {
        return Err(Degeneracy::ZeroDisplacement);
    }
    // s = (u + v)t / 2
    let t = non_negative(2.0 * s / sum)?;
    // v = u + at
    let a = (v - u) / t;
    Ok([s, u, v, a, t])
}

fn from_sua(s: f64, u: f64, a: f64) -> Result<[f64; 5], Degeneracy> {
    if a == 0.0 {
        if u == 0.0 {
            return Err(Degeneracy::ZeroVelocity);
        }
        let t = non_negative(s / u)?;
        return Ok([s, u, u, a, t]);
    }
    // v^2 = u^2 + 2as, then v = u + at
    let (v, t) = earliest_root(u * u, 2.0 * a * s, |v| (v - u) / a)?;
    Ok([s, u, v, a, t])
}

fn from_sut(s: f64, u: f64, t: f64) -> Result<[f64; 5], Degeneracy> {
    if t == 0.0 {
        return Err(Degeneracy::ZeroTime);
    }
    // s = (u + v)t / 2
    let v = 2.0 * s / t - u;
    let a = (v - u) / t;
    Ok([s, u, v, a, t])
}

fn from_sva(s: f64, v: f64, a: f64) -> Result<[f64; 5], Degeneracy> {
    if a == 0.0 {
        if v == 0.0 {
            return Err(Degeneracy::ZeroVelocity);
        }
        let t = non_negative(s / v)?;
        return Ok([s, v, v, a, t]);
    }
    // u^2 = v^2 - 2as, then v = u + at
    let (u, t) = earliest_root(v * v, -(2.0 * a * s), |u| (v - u) / a)?;
    Ok([s, u, v, a, t])
}

fn from_svt(s: f64, v: f64, t: f64) -> Result<[f64; 5], Degeneracy> {
    if t == 0.0 {
        return Err(Degeneracy::ZeroTime);
    }
    let u = 2.0 * s / t - v;
    let a = (v - u) / t;
    Ok([s, u, v, a, t])
}

fn from_sat(s: f64, a: f64, t: f64) -> Result<[f64; 5], Degeneracy> {
    if t == 0.0 {
        return Err(Degeneracy::ZeroTime);
    }
    // s = ut + at^2 / 2
    let u = s / t - 0.5 * a * t;
    let v = u + a * t;
    Ok([s, u, v, a, t])
}

fn from_uva(u: f64, v: f64, a: f64) -> Result<[f64; 5], Degeneracy> {
    if a == 0.0 {
        return Err(Degeneracy::ZeroAcceleration);
    }
    let t = non_negative((v - u) / a)?;
    let s = 0.5 * (u + v) * t;
    Ok([s, u, v, a, t])
}

fn from_uvt(u: f64, v: f64, t: f64) -> Result<[f64; 5], Degeneracy> {
    if t == 0.0 {
        return Err(Degeneracy::ZeroTime);
    }
    let s = 0.5 * (u + v) * t;
    let a = (v - u) / t;
    Ok([s, u, v, a, t])
}

fn from_uat(u: f64, a: f64, t: f64) -> [f64; 5] {
    let v = u + a * t;
    let s = u * t + 0.5 * a * t * t;
    [s, u, v, a, t]
}

fn from_vat(v: f64, a: f64, t: f64) -> [f64; 5] {
    let u = v - a * t;
    let s = v * t - 0.5 * a * t * t;
    [s, u, v, a, t]
}
