//! Interactive form: fill three fields, `calc`, `reset`, repeat.

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use suvat::config::{self, MAX_PRECISION};
use suvat::logging;
use suvat::shell::Shell;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive SUVAT calculator")]
struct Cli {
    /// Configuration file (.toml, .yaml, or .yml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fixed decimals for results (overrides config)
    #[arg(long, value_parser = clap::value_parser!(u64).range(0..=MAX_PRECISION as u64))]
    precision: Option<u64>,

    /// Log level: trace, debug, info, warn, error, or off (overrides config)
    #[arg(long, value_parser = LevelFilter::from_str)]
    log_level: Option<LevelFilter>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = config::load_or_default(cli.config.as_deref())?;
    if let Some(precision) = cli.precision {
        config.display.precision = Some(precision as usize);
    }
    let level = match cli.log_level {
        Some(level) => level,
        None => config.logging.filter()?,
    };
    logging::init(level);

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        println!(
            "suvat {} - type 'help' for commands, 'quit' to leave",
            suvat::version()
        );
    }

    let mut shell = Shell::new(&config).with_prompt(interactive);
    shell.run(stdin.lock(), &mut io::stdout().lock())?;
    Ok(())
}
