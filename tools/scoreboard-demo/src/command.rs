//! Line command parsing
//!
//! One command per line: a verb, then comma-separated arguments so team
//! names may contain spaces (`start South Korea, Japan`).

use std::fmt;

/// Which side scored for `goal`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

/// A parsed demo command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Start { home: String, away: String },
    Score { home: String, away: String, home_score: f64, away_score: f64 },
    Goal { side: Side, home: String, away: String },
    Finish { home: String, away: String },
    Summary,
    Matches,
    Help,
    Quit,
}

/// Rejected input line
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("'{command}' takes {expected} comma-separated arguments, got {got}")]
    Arity { command: &'static str, expected: usize, got: usize },

    #[error("'{0}' is not a number")]
    InvalidScore(String),

    #[error("'{0}' is not a side (use 'home' or 'away')")]
    InvalidSide(String),
}

pub const HELP: &str = "\
commands:
  start <home>, <away>
  score <home>, <away>, <home score>, <away score>
  goal home|away <home>, <away>
  finish <home>, <away>
  summary
  matches
  help
  quit";

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Home => f.write_str("home"),
            Side::Away => f.write_str("away"),
        }
    }
}

/// Parse one input line
///
/// Team names are passed through untrimmed; the registry normalizes and
/// validates them.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::Empty);
    }

    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

    match verb.to_ascii_lowercase().as_str() {
        "start" => {
            let [home, away] = arguments::<2>("start", rest)?;
            Ok(Command::Start { home, away })
        }
        "score" => {
            let [home, away, home_score, away_score] = arguments::<4>("score", rest)?;
            Ok(Command::Score {
                home,
                away,
                home_score: number(&home_score)?,
                away_score: number(&away_score)?,
            })
        }
        "goal" => {
            let rest = rest.trim_start();
            let (side, teams) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            let side = match side.to_ascii_lowercase().as_str() {
                "home" => Side::Home,
                "away" => Side::Away,
                _ => return Err(ParseError::InvalidSide(side.to_string())),
            };
            let [home, away] = arguments::<2>("goal", teams)?;
            Ok(Command::Goal { side, home, away })
        }
        "finish" => {
            let [home, away] = arguments::<2>("finish", rest)?;
            Ok(Command::Finish { home, away })
        }
        "summary" => Ok(Command::Summary),
        "matches" => Ok(Command::Matches),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        _ => Err(ParseError::UnknownCommand(verb.to_string())),
    }
}

fn arguments<const N: usize>(command: &'static str, rest: &str) -> Result<[String; N], ParseError> {
    let parts: Vec<String> = rest.split(',').map(str::to_string).collect();
    let got = parts.len();
    parts.try_into().map_err(|_| ParseError::Arity {
        command,
        expected: N,
        got,
    })
}

// Same grammar as `f64::from_str`; "NaN" and "inf" get through to the registry
fn number(raw: &str) -> Result<f64, ParseError> {
    raw.trim()
        .parse()
        .map_err(|_| ParseError::InvalidScore(raw.trim().to_string()))
}
