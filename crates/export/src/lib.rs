//! Rendering helpers for solved states: aligned text, JSON, and CSV.

use std::io::{self, Write};
use std::str::FromStr;

use serde::Serialize;
use suvat_core::quantity::Quantity;
use suvat_solver::Solution;

const CSV_HEADER: [&str; 6] = ["s", "u", "v", "a", "t", "known"];

/// Output formats supported by the writers below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
    Csv,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            "csv" => Ok(Format::Csv),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

/// Serializable view of a solution.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Report {
    pub displacement: f64,
    pub initial_velocity: f64,
    pub final_velocity: f64,
    pub acceleration: f64,
    pub time: f64,
    /// Symbols of the supplied quantities, e.g. `"uat"`.
    pub known: String,
    /// The two equations used to compute the unknowns.
    pub equations: Vec<&'static str>,
}

impl From<&Solution> for Report {
    fn from(solution: &Solution) -> Self {
        Report {
            displacement: solution.s,
            initial_velocity: solution.u,
            final_velocity: solution.v,
            acceleration: solution.a,
            time: solution.t,
            known: solution.triple.symbols(),
            equations: solution
                .triple
                .equations()
                .iter()
                .map(|equation| equation.formula())
                .collect(),
        }
    }
}

/// Write a solution in the requested format.
///
/// `render` formats each value for the text table; JSON and CSV always carry
/// full precision.
pub fn write(
    writer: &mut dyn Write,
    solution: &Solution,
    format: Format,
    render: &dyn Fn(f64) -> String,
) -> io::Result<()> {
    match format {
        Format::Text => write_text(writer, solution, render),
        Format::Json => write_json(writer, solution),
        Format::Csv => write_csv(writer, solution),
    }
}

/// Aligned `label (symbol): value unit` lines, computed values marked with `*`.
pub fn write_text(
    writer: &mut dyn Write,
    solution: &Solution,
    render: &dyn Fn(f64) -> String,
) -> io::Result<()> {
    let computed = solution.computed();
    let width = Quantity::ALL
        .iter()
        .map(|q| q.label().len())
        .max()
        .unwrap_or_default();
    for quantity in Quantity::ALL {
        let marker = if computed.contains(&quantity) { "*" } else { " " };
        writeln!(
            writer,
            "{marker} {:<width$} ({}) : {} {}",
            quantity.label(),
            quantity.symbol(),
            render(solution.get(quantity)),
            quantity.unit(),
        )?;
    }
    let [first, second] = solution.triple.equations();
    writeln!(
        writer,
        "  using {} and {}",
        first.formula(),
        second.formula()
    )
}

pub fn write_json(writer: &mut dyn Write, solution: &Solution) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &Report::from(solution))?;
    writeln!(writer)
}

pub fn write_csv(writer: &mut dyn Write, solution: &Solution) -> io::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;
    let mut record: Vec<String> = solution.values().iter().map(f64::to_string).collect();
    record.push(solution.triple.symbols());
    csv_writer.write_record(&record)?;
    csv_writer.flush()
}
