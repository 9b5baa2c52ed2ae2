use std::str::FromStr;

use suvat_core::quantity::{Quantity, UnknownQuantity};
use suvat_export::Format;
use thiserror::Error;

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Put text into a field. Empty text clears it.
    Set(Quantity, String),
    Clear(Quantity),
    Show,
    Calculate,
    Export(Format),
    Reset,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error(transparent)]
    Quantity(#[from] UnknownQuantity),
    #[error("{0}")]
    Format(String),
}

pub const HELP: &str = "\
commands:
  set <q> <value>   fill a field (also: <q>=<value>)
  clear <q>         empty a field
  show              print the five fields
  calc              solve from exactly three filled fields
  export <fmt>      print the last result as text, json, or csv
  reset             empty every field
  help              this message
  quit              leave
quantities: s (displacement), u (initial velocity), v (final velocity),
            a (acceleration), t (time)";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if let Some((name, value)) = line.split_once('=') {
            return Ok(Command::Set(name.parse()?, value.trim().to_string()));
        }

        let mut words = line.split_whitespace();
        let head = words.next().unwrap_or_default().to_ascii_lowercase();
        let rest: Vec<&str> = words.collect();
        match (head.as_str(), rest.as_slice()) {
            ("set", [name, value]) => Ok(Command::Set(name.parse()?, value.to_string())),
            ("set", _) => Err(CommandError::Usage("set <q> <value>")),
            ("clear", [name]) => Ok(Command::Clear(name.parse()?)),
            ("clear", _) => Err(CommandError::Usage("clear <q>")),
            ("show", []) => Ok(Command::Show),
            ("calc" | "calculate", []) => Ok(Command::Calculate),
            ("export", [format]) => Ok(Command::Export(
                format.parse().map_err(CommandError::Format)?,
            )),
            ("export", _) => Err(CommandError::Usage("export <text|json|csv>")),
            ("reset", []) => Ok(Command::Reset),
            ("help" | "?", _) => Ok(Command::Help),
            ("quit" | "exit" | "q", []) => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(line.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_assignments_and_words() {
        assert_eq!(
            "s = 100".parse::<Command>(),
            Ok(Command::Set(Quantity::Displacement, "100".to_string()))
        );
        assert_eq!(
            "set time 2.5".parse::<Command>(),
            Ok(Command::Set(Quantity::Time, "2.5".to_string()))
        );
        assert_eq!("u=".parse::<Command>(), Ok(Command::Set(Quantity::InitialVelocity, String::new())));
        assert_eq!("clear a".parse::<Command>(), Ok(Command::Clear(Quantity::Acceleration)));
        assert_eq!("CALC".parse::<Command>(), Ok(Command::Calculate));
        assert_eq!("export json".parse::<Command>(), Ok(Command::Export(Format::Json)));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!(
            "set s".parse::<Command>(),
            Err(CommandError::Usage("set <q> <value>"))
        );
        assert!(matches!(
            "x = 3".parse::<Command>(),
            Err(CommandError::Quantity(_))
        ));
        assert!(matches!(
            "export xml".parse::<Command>(),
            Err(CommandError::Format(_))
        ));
        assert!(matches!(
            "launch".parse::<Command>(),
            Err(CommandError::Unknown(_))
        ));
    }
}
