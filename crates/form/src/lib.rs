//! Text-field form model for the suvat calculator.
//!
//! A [`Form`] holds one text field per [`Quantity`] and is addressed by
//! quantity, never by field name. [`Form::calculate`] runs the same steps a
//! front end's Calculate button would: count filled fields, parse them, solve,
//! and write all five values back.

use suvat_core::quantity::Quantity;
use suvat_core::state::KinematicState;
use suvat_solver::{SolveError, Solution, solve};
use thiserror::Error;
use tracing::{debug, info};

/// Number of fields that must be filled before calculating.
pub const REQUIRED_FIELDS: usize = 3;

/// A field whose text is not a finite number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{quantity}: '{text}' is not a finite number")]
pub struct ParseError {
    pub quantity: Quantity,
    pub text: String,
}

/// Everything that can stop a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("three variables are needed to perform the calculation, {filled} given")]
    NotEnoughValues { filled: usize },
    #[error("more than three variables can cause contradictions, {filled} given")]
    TooManyValues { filled: usize },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Solve(#[from] SolveError),
}

impl FormError {
    /// Short heading suitable for a dialog title or an error prefix.
    pub fn title(&self) -> &'static str {
        match self {
            FormError::NotEnoughValues { .. } => "Three variables needed!",
            FormError::TooManyValues { .. } => "Too many variables given!",
            FormError::Parse(_) => "Invalid input!",
            FormError::Solve(_) => "Cannot solve!",
        }
    }
}

/// How resolved values are rendered back into text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatStyle {
    /// Fixed decimals, or the shortest round-trip form when `None`.
    pub precision: Option<usize>,
}

impl FormatStyle {
    pub fn with_precision(precision: Option<usize>) -> Self {
        FormatStyle { precision }
    }

    pub fn format(&self, value: f64) -> String {
        // Negative zero prints as "-0".
        let value = if value == 0.0 { 0.0 } else { value };
        match self.precision {
            Some(precision) => format!("{value:.precision$}"),
            None => format!("{value}"),
        }
    }
}

/// Five text fields bound to the five quantities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    fields: [String; 5],
}

impl Form {
    pub fn new() -> Self {
        Form::default()
    }

    pub fn set(&mut self, quantity: Quantity, text: impl Into<String>) {
        self.fields[quantity.index()] = text.into();
    }

    pub fn get(&self, quantity: Quantity) -> &str {
        &self.fields[quantity.index()]
    }

    pub fn clear(&mut self, quantity: Quantity) {
        self.fields[quantity.index()].clear();
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        self.fields.iter_mut().for_each(String::clear);
    }

    /// `(quantity, text)` pairs in s, u, v, a, t order.
    pub fn fields(&self) -> impl Iterator<Item = (Quantity, &str)> {
        Quantity::ALL
            .into_iter()
            .map(|quantity| (quantity, self.get(quantity)))
    }

    /// Number of fields holding something other than whitespace.
    pub fn filled(&self) -> usize {
        self.fields
            .iter()
            .filter(|text| !text.trim().is_empty())
            .count()
    }

    /// Check the field count and parse the filled fields into a state.
    pub fn read(&self) -> Result<KinematicState, FormError> {
        let filled = self.filled();
        if filled < REQUIRED_FIELDS {
            return Err(FormError::NotEnoughValues { filled });
        }
        if filled > REQUIRED_FIELDS {
            return Err(FormError::TooManyValues { filled });
        }

        let mut state = KinematicState::empty();
        for (quantity, text) in self.fields() {
            let text = text.trim();
            if text.is_empty() {
                continue;
            }
            state.set(quantity, Some(parse_field(quantity, text)?));
        }
        Ok(state)
    }

    /// Solve from the three filled fields and fill in the other two.
    ///
    /// On failure the fields are left exactly as they were.
    pub fn calculate(&mut self, style: &FormatStyle) -> Result<Solution, FormError> {
        let state = self.read().inspect_err(|err| {
            debug!("form rejected: {err}");
        })?;
        let solution = solve(state)?;
        info!(triple = %solution.triple, "calculated");
        self.write(&solution, style);
        Ok(solution)
    }

    /// Overwrite all five fields with a solution's values.
    pub fn write(&mut self, solution: &Solution, style: &FormatStyle) {
        for quantity in Quantity::ALL {
            self.set(quantity, style.format(solution.get(quantity)));
        }
    }
}

fn parse_field(quantity: Quantity, text: &str) -> Result<f64, ParseError> {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ParseError {
            quantity,
            text: text.to_string(),
        })
}
