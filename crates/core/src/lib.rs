//! Core quantities, state records, and equations shared across the suvat workspace.

/// The five scalar quantities of constant-acceleration motion.
pub mod quantity {
    use std::fmt;
    use std::str::FromStr;

    use thiserror::Error;

    /// One of the five SUVAT variables.
    ///
    /// The declaration order (s, u, v, a, t) is the canonical slot order used by
    /// every `[f64; 5]` in the workspace.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub enum Quantity {
        Displacement,
        InitialVelocity,
        FinalVelocity,
        Acceleration,
        Time,
    }

    impl Quantity {
        /// All quantities in canonical slot order.
        pub const ALL: [Quantity; 5] = [
            Quantity::Displacement,
            Quantity::InitialVelocity,
            Quantity::FinalVelocity,
            Quantity::Acceleration,
            Quantity::Time,
        ];

        /// Slot index in canonical order.
        #[inline]
        pub const fn index(self) -> usize {
            self as usize
        }

        /// Single bit identifying this quantity inside a [`KnownSet`](crate::state::KnownSet).
        #[inline]
        pub const fn bit(self) -> u8 {
            1 << (self as u8)
        }

        /// Conventional single-letter symbol.
        pub const fn symbol(self) -> char {
            match self {
                Quantity::Displacement => 's',
                Quantity::InitialVelocity => 'u',
                Quantity::FinalVelocity => 'v',
                Quantity::Acceleration => 'a',
                Quantity::Time => 't',
            }
        }

        /// Human-readable label.
        pub const fn label(self) -> &'static str {
            match self {
                Quantity::Displacement => "Displacement",
                Quantity::InitialVelocity => "Initial velocity",
                Quantity::FinalVelocity => "Final velocity",
                Quantity::Acceleration => "Acceleration",
                Quantity::Time => "Time",
            }
        }

        /// Machine key, used for serialized field names.
        pub const fn key(self) -> &'static str {
            match self {
                Quantity::Displacement => "displacement",
                Quantity::InitialVelocity => "initial_velocity",
                Quantity::FinalVelocity => "final_velocity",
                Quantity::Acceleration => "acceleration",
                Quantity::Time => "time",
            }
        }

        /// SI unit label. Values are never converted; this is display only.
        pub const fn unit(self) -> &'static str {
            match self {
                Quantity::Displacement => "m",
                Quantity::InitialVelocity | Quantity::FinalVelocity => "m/s",
                Quantity::Acceleration => "m/s^2",
                Quantity::Time => "s",
            }
        }
    }

    impl fmt::Display for Quantity {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{} ({})", self.label().to_lowercase(), self.symbol())
        }
    }

    /// Returned when a name does not identify any quantity.
    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[error("unknown quantity '{0}' (expected one of s, u, v, a, t)")]
    pub struct UnknownQuantity(pub String);

    impl FromStr for Quantity {
        type Err = UnknownQuantity;

        /// Accepts the symbol, the key, or the label, ignoring case and
        /// treating spaces, dashes, and underscores alike.
        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let normalized: String = s
                .trim()
                .chars()
                .map(|c| match c {
                    ' ' | '-' => '_',
                    other => other.to_ascii_lowercase(),
                })
                .collect();
            Quantity::ALL
                .into_iter()
                .find(|q| {
                    (normalized.len() == 1 && normalized.starts_with(q.symbol()))
                        || normalized == q.key()
                })
                .ok_or_else(|| UnknownQuantity(s.trim().to_string()))
        }
    }
}

/// State records passed into and out of the solver.
pub mod state {
    use super::quantity::Quantity;

    /// Bitmask of quantities present in a state.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KnownSet(u8);

    impl KnownSet {
        pub const EMPTY: KnownSet = KnownSet(0);
        pub const FULL: KnownSet = KnownSet(0b1_1111);

        /// Build a set from raw bits; bits above the fifth are discarded.
        #[inline]
        pub const fn from_bits(bits: u8) -> Self {
            KnownSet(bits & Self::FULL.0)
        }

        #[inline]
        pub const fn bits(self) -> u8 {
            self.0
        }

        #[inline]
        pub const fn contains(self, quantity: Quantity) -> bool {
            self.0 & quantity.bit() != 0
        }

        #[inline]
        pub const fn with(self, quantity: Quantity) -> Self {
            KnownSet(self.0 | quantity.bit())
        }

        /// Number of quantities in the set.
        #[inline]
        pub const fn len(self) -> usize {
            self.0.count_ones() as usize
        }

        #[inline]
        pub const fn is_empty(self) -> bool {
            self.0 == 0
        }

        /// Quantities not in the set.
        #[inline]
        pub const fn complement(self) -> Self {
            KnownSet(!self.0 & Self::FULL.0)
        }

        /// Members in canonical order.
        pub fn iter(self) -> impl Iterator<Item = Quantity> {
            Quantity::ALL.into_iter().filter(move |q| self.contains(*q))
        }
    }

    impl FromIterator<Quantity> for KnownSet {
        fn from_iter<I: IntoIterator<Item = Quantity>>(iter: I) -> Self {
            iter.into_iter().fold(KnownSet::EMPTY, KnownSet::with)
        }
    }

    /// Five optional SUVAT values. `None` marks an unknown.
    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct KinematicState {
        pub s: Option<f64>,
        pub u: Option<f64>,
        pub v: Option<f64>,
        pub a: Option<f64>,
        pub t: Option<f64>,
    }

    impl KinematicState {
        /// A state with every quantity unknown.
        pub const fn empty() -> Self {
            KinematicState {
                s: None,
                u: None,
                v: None,
                a: None,
                t: None,
            }
        }

        /// A fully-known state from canonically ordered values.
        pub const fn from_values(values: [f64; 5]) -> Self {
            let [s, u, v, a, t] = values;
            KinematicState {
                s: Some(s),
                u: Some(u),
                v: Some(v),
                a: Some(a),
                t: Some(t),
            }
        }

        pub fn get(&self, quantity: Quantity) -> Option<f64> {
            match quantity {
                Quantity::Displacement => self.s,
                Quantity::InitialVelocity => self.u,
                Quantity::FinalVelocity => self.v,
                Quantity::Acceleration => self.a,
                Quantity::Time => self.t,
            }
        }

        pub fn set(&mut self, quantity: Quantity, value: Option<f64>) {
            let slot = match quantity {
                Quantity::Displacement => &mut self.s,
                Quantity::InitialVelocity => &mut self.u,
                Quantity::FinalVelocity => &mut self.v,
                Quantity::Acceleration => &mut self.a,
                Quantity::Time => &mut self.t,
            };
            *slot = value;
        }

        /// Builder-style setter.
        pub fn with(mut self, quantity: Quantity, value: f64) -> Self {
            self.set(quantity, Some(value));
            self
        }

        /// Which quantities are present.
        pub fn known(&self) -> KnownSet {
            Quantity::ALL
                .into_iter()
                .filter(|q| self.get(*q).is_some())
                .collect()
        }

        /// True when all five quantities are present.
        pub fn is_resolved(&self) -> bool {
            self.known() == KnownSet::FULL
        }

        /// All five values in canonical order, if resolved.
        pub fn values(&self) -> Option<[f64; 5]> {
            Some([self.s?, self.u?, self.v?, self.a?, self.t?])
        }

        /// Copy of this state keeping only the quantities in `keep`.
        pub fn restrict(&self, keep: KnownSet) -> Self {
            let mut restricted = KinematicState::empty();
            for quantity in keep.iter() {
                restricted.set(quantity, self.get(quantity));
            }
            restricted
        }

        /// `(quantity, value)` pairs in canonical order.
        pub fn iter(&self) -> impl Iterator<Item = (Quantity, Option<f64>)> + '_ {
            Quantity::ALL.into_iter().map(|q| (q, self.get(q)))
        }
    }
}

/// The five constant-acceleration equations.
///
/// Each equation omits exactly one quantity, which is how the solver picks the
/// pair needed for a given pair of unknowns.
pub mod equations {
    use super::quantity::Quantity;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Equation {
        /// v = u + at
        VelocityTime,
        /// s = (u + v)t / 2
        AverageVelocity,
        /// s = ut + at²/2
        DisplacementFromInitial,
        /// s = vt - at²/2
        DisplacementFromFinal,
        /// v² = u² + 2as
        VelocitySquared,
    }

    impl Equation {
        pub const ALL: [Equation; 5] = [
            Equation::VelocityTime,
            Equation::AverageVelocity,
            Equation::DisplacementFromInitial,
            Equation::DisplacementFromFinal,
            Equation::VelocitySquared,
        ];

        pub const fn formula(self) -> &'static str {
            match self {
                Equation::VelocityTime => "v = u + at",
                Equation::AverageVelocity => "s = (u + v)t / 2",
                Equation::DisplacementFromInitial => "s = ut + at^2 / 2",
                Equation::DisplacementFromFinal => "s = vt - at^2 / 2",
                Equation::VelocitySquared => "v^2 = u^2 + 2as",
            }
        }

        /// The quantity that does not appear in this equation.
        pub const fn omits(self) -> Quantity {
            match self {
                Equation::VelocityTime => Quantity::Displacement,
                Equation::AverageVelocity => Quantity::Acceleration,
                Equation::DisplacementFromInitial => Quantity::FinalVelocity,
                Equation::DisplacementFromFinal => Quantity::InitialVelocity,
                Equation::VelocitySquared => Quantity::Time,
            }
        }

        /// The equation that does not involve `quantity`.
        pub const fn omitting(quantity: Quantity) -> Equation {
            match quantity {
                Quantity::Displacement => Equation::VelocityTime,
                Quantity::Acceleration => Equation::AverageVelocity,
                Quantity::FinalVelocity => Equation::DisplacementFromInitial,
                Quantity::InitialVelocity => Equation::DisplacementFromFinal,
                Quantity::Time => Equation::VelocitySquared,
            }
        }

        /// Left-hand side minus right-hand side, evaluated at `[s, u, v, a, t]`.
        pub fn residual(self, values: &[f64; 5]) -> f64 {
            let [s, u, v, a, t] = *values;
            match self {
                Equation::VelocityTime => v - (u + a * t),
                Equation::AverageVelocity => s - 0.5 * (u + v) * t,
                Equation::DisplacementFromInitial => s - (u * t + 0.5 * a * t * t),
                Equation::DisplacementFromFinal => s - (v * t - 0.5 * a * t * t),
                Equation::VelocitySquared => v * v - (u * u + 2.0 * a * s),
            }
        }

        /// Largest term magnitude in the equation, for relative comparisons.
        pub fn scale(self, values: &[f64; 5]) -> f64 {
            let [s, u, v, a, t] = *values;
            let terms = match self {
                Equation::VelocityTime => [v, u, a * t],
                Equation::AverageVelocity => [s, u * t, v * t],
                Equation::DisplacementFromInitial => [s, u * t, a * t * t],
                Equation::DisplacementFromFinal => [s, v * t, a * t * t],
                Equation::VelocitySquared => [v * v, u * u, 2.0 * a * s],
            };
            terms.iter().fold(0.0_f64, |acc, term| acc.max(term.abs()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::equations::Equation;
    use super::quantity::Quantity;
    use super::state::{KinematicState, KnownSet};

    #[test]
    fn quantity_parses_symbols_keys_and_labels() {
        assert_eq!("s".parse::<Quantity>(), Ok(Quantity::Displacement));
        assert_eq!("U".parse::<Quantity>(), Ok(Quantity::InitialVelocity));
        assert_eq!(
            "final-velocity".parse::<Quantity>(),
            Ok(Quantity::FinalVelocity)
        );
        assert_eq!(
            "Initial velocity".parse::<Quantity>(),
            Ok(Quantity::InitialVelocity)
        );
        assert_eq!(" time ".parse::<Quantity>(), Ok(Quantity::Time));
        assert!("x".parse::<Quantity>().is_err());
        assert!("speed".parse::<Quantity>().is_err());
    }

    #[test]
    fn known_set_tracks_present_fields() {
        let state = KinematicState::empty()
            .with(Quantity::Displacement, 1.0)
            .with(Quantity::Time, 2.0);
        let known = state.known();
        assert_eq!(known.len(), 2);
        assert!(known.contains(Quantity::Displacement));
        assert!(known.contains(Quantity::Time));
        assert!(!known.contains(Quantity::Acceleration));
        assert_eq!(known.complement().len(), 3);
        assert_eq!(
            known.iter().collect::<Vec<_>>(),
            vec![Quantity::Displacement, Quantity::Time]
        );
    }

    #[test]
    fn restrict_keeps_only_requested_values() {
        let full = KinematicState::from_values([1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!(full.is_resolved());
        let keep: KnownSet = [Quantity::InitialVelocity, Quantity::Acceleration]
            .into_iter()
            .collect();
        let partial = full.restrict(keep);
        assert_eq!(partial.u, Some(2.0));
        assert_eq!(partial.a, Some(4.0));
        assert_eq!(partial.s, None);
        assert_eq!(partial.values(), None);
    }

    #[test]
    fn each_equation_omits_a_distinct_quantity() {
        for equation in Equation::ALL {
            assert_eq!(Equation::omitting(equation.omits()), equation);
        }
    }

    #[test]
    fn residuals_vanish_for_free_fall() {
        // u = 0, a = 9.8, t = 2 gives v = 19.6 and s = 19.6.
        let values = [19.6, 0.0, 19.6, 9.8, 2.0];
        for equation in Equation::ALL {
            let r = equation.residual(&values);
            assert!(r.abs() < 1e-9, "{}: residual {r}", equation.formula());
        }
    }
}
