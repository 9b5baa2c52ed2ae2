use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::anyhow;
use clap::Parser;
use suvat::config::{self, MAX_PRECISION};
use suvat::export::{self, Format};
use suvat::form::{Form, FormatStyle};
use suvat::solver::check;
use suvat::{Quantity, logging};
use tracing::warn;
use tracing_subscriber::filter::LevelFilter;

/// Solve constant-acceleration motion from exactly three of s, u, v, a, t.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Solve constant-acceleration motion from any three of s, u, v, a, t"
)]
struct Cli {
    /// Displacement (m)
    #[arg(long = "s", visible_alias = "displacement", allow_hyphen_values = true)]
    s: Option<String>,

    /// Initial velocity (m/s)
    #[arg(long = "u", visible_alias = "initial-velocity", allow_hyphen_values = true)]
    u: Option<String>,

    /// Final velocity (m/s)
    #[arg(long = "v", visible_alias = "final-velocity", allow_hyphen_values = true)]
    v: Option<String>,

    /// Acceleration (m/s^2)
    #[arg(long = "a", visible_alias = "acceleration", allow_hyphen_values = true)]
    a: Option<String>,

    /// Time (s)
    #[arg(long = "t", visible_alias = "time", allow_hyphen_values = true)]
    t: Option<String>,

    /// Configuration file (.toml, .yaml, or .yml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format: text, json, or csv
    #[arg(long, value_parser = Format::from_str, default_value = "text")]
    format: Format,

    /// Fixed decimals for text output (overrides config)
    #[arg(long, value_parser = clap::value_parser!(u64).range(0..=MAX_PRECISION as u64))]
    precision: Option<u64>,

    /// Log level: trace, debug, info, warn, error, or off (overrides config)
    #[arg(long, value_parser = LevelFilter::from_str)]
    log_level: Option<LevelFilter>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = config::load_or_default(cli.config.as_deref())?;
    let level = match cli.log_level {
        Some(level) => level,
        None => config.logging.filter()?,
    };
    logging::init(level);

    let precision = cli
        .precision
        .map(|p| p as usize)
        .or(config.display.precision);
    let style = FormatStyle::with_precision(precision);

    let mut form = Form::new();
    let inputs = [
        (Quantity::Displacement, cli.s),
        (Quantity::InitialVelocity, cli.u),
        (Quantity::FinalVelocity, cli.v),
        (Quantity::Acceleration, cli.a),
        (Quantity::Time, cli.t),
    ];
    for (quantity, text) in inputs {
        if let Some(text) = text {
            form.set(quantity, text);
        }
    }

    let solution = form
        .calculate(&style)
        .map_err(|err| anyhow!("{} {err}", err.title()))?;

    let values = solution.values();
    if !check::is_consistent(&values, config.check.tolerance) {
        let (equation, residual) = check::worst_fit(&values);
        warn!(
            equation = equation.formula(),
            residual, "result exceeds consistency tolerance"
        );
    }

    let mut stdout = io::stdout().lock();
    export::write(&mut stdout, &solution, cli.format, &|value: f64| {
        style.format(value)
    })?;
    Ok(())
}
