use std::fmt;

use qbank_core::{Rating, RatingParseError};
use ui::StudyIntent;

pub const HELP: &str = "\
commands:
  n, next            next question
  p, prev            previous question
  r, random          random question
  j <n>, jump <n>    go to question number n (a bare number works too)
  a, answer          show or hide the answer
  rate <rating>      rate the current question
  +<rating>          show questions with this rating
  -<rating>          hide questions with this rating
  stats              rating totals
  help               this text
  q, quit            leave
ratings: notyet, excellent, good, fair, poor";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Intent(StudyIntent),
    Stats,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unknown(String),
    MissingArgument(&'static str),
    Rating(RatingParseError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Unknown(cmd) => write!(f, "unknown command: {cmd} (try `help`)"),
            CommandError::MissingArgument(cmd) => write!(f, "{cmd} requires a value"),
            CommandError::Rating(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<RatingParseError> for CommandError {
    fn from(err: RatingParseError) -> Self {
        Self::Rating(err)
    }
}

/// Parse one input line. Blank lines yield `None`.
///
/// # Errors
///
/// Returns `CommandError` for unknown verbs, missing arguments or bad rating names.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    // Signed numbers are record numbers, not filter toggles.
    if looks_numeric(line) {
        return Ok(Some(Command::Intent(StudyIntent::Jump(line.to_string()))));
    }

    if let Some(rest) = line.strip_prefix('+') {
        return Ok(Some(toggle(rest, true)?));
    }
    if let Some(rest) = line.strip_prefix('-') {
        return Ok(Some(toggle(rest, false)?));
    }

    let (verb, arg) = match line.split_once(char::is_whitespace) {
        Some((verb, arg)) => (verb, arg.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "n" | "next" => Command::Intent(StudyIntent::Next),
        "p" | "prev" => Command::Intent(StudyIntent::Prev),
        "r" | "random" => Command::Intent(StudyIntent::Random),
        "a" | "answer" => Command::Intent(StudyIntent::ToggleAnswer),
        "j" | "jump" => {
            if arg.is_empty() {
                return Err(CommandError::MissingArgument("jump"));
            }
            Command::Intent(StudyIntent::Jump(arg.to_string()))
        }
        "rate" => {
            if arg.is_empty() {
                return Err(CommandError::MissingArgument("rate"));
            }
            Command::Intent(StudyIntent::Rate(arg.parse()?))
        }
        "stats" => Command::Stats,
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        _ => return Err(CommandError::Unknown(verb.to_string())),
    };
    Ok(Some(command))
}

fn looks_numeric(line: &str) -> bool {
    let unsigned = line.strip_prefix(['+', '-']).unwrap_or(line).trim_start();
    unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.')
}

fn toggle(rest: &str, enabled: bool) -> Result<Command, RatingParseError> {
    let rating: Rating = rest.parse()?;
    Ok(Command::Intent(StudyIntent::ToggleFilter { rating, enabled }))
}
