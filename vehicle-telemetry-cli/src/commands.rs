//! Operator commands read from stdin

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const HELP_TEXT: &str = "\
Commands:
  start            Start monitoring (one sample per tick)
  stop             Stop monitoring
  export [FILE]    Write the session log (default: configured export path)
  table            Print the full session log
  status           Show run state and sample count
  help             Show this help
  quit             Exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    Export(Option<PathBuf>),
    Table,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown command: {:?}", self.0)
    }
}

impl std::error::Error for UnknownCommand {}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut words = input.split_whitespace();
        let verb = words.next().unwrap_or("").to_ascii_lowercase();
        let argument = words.next();

        let command = match (verb.as_str(), argument) {
            ("start", None) => Command::Start,
            ("stop", None) => Command::Stop,
            ("export", path) => Command::Export(path.map(PathBuf::from)),
            ("table", None) => Command::Table,
            ("status", None) => Command::Status,
            ("help" | "?", None) => Command::Help,
            ("quit" | "exit" | "q", None) => Command::Quit,
            _ => return Err(UnknownCommand(input.trim().to_string())),
        };

        if words.next().is_some() {
            return Err(UnknownCommand(input.trim().to_string()));
        }
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!("start".parse(), Ok(Command::Start));
        assert_eq!("  STOP ".parse(), Ok(Command::Stop));
        assert_eq!("table".parse(), Ok(Command::Table));
        assert_eq!("status".parse(), Ok(Command::Status));
        assert_eq!("?".parse(), Ok(Command::Help));
        assert_eq!("exit".parse(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_export() {
        assert_eq!("export".parse(), Ok(Command::Export(None)));
        assert_eq!(
            "export /tmp/run.csv".parse(),
            Ok(Command::Export(Some(PathBuf::from("/tmp/run.csv"))))
        );
    }

    #[test]
    fn test_rejects_unknown_and_extra_arguments() {
        assert!("launch".parse::<Command>().is_err());
        assert!("start now".parse::<Command>().is_err());
        assert!("export a b".parse::<Command>().is_err());
        assert!("".parse::<Command>().is_err());

        let err = "launch".parse::<Command>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown command: \"launch\"");
    }
}
