//! Line commands understood by the terminal front-end.
//!
//! Parsing lives in the library so it can be tested without a terminal.

use thiserror::Error;

use crate::drill_engine::{Field, UnknownField};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Write digits into a cell. Non-digits are dropped on entry.
    Set { field: Field, value: String },
    Clear(Field),
    Check,
    Next,
    Show,
    Json,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("'{0}' needs a field name")]
    MissingField(&'static str),
    #[error(transparent)]
    Field(#[from] UnknownField),
}

pub const HELP: &str = "\
commands:
  set <field> <digit>   write a digit (shorthand: <field> <digit>)
  clear <field>         empty a cell
  check                 check the answer
  next                  new problem
  show                  redraw the grid
  json                  print the widget state as JSON
  quit                  leave
fields: row1D row1U row2D row2U carry resultD resultU
        (short: r1d r1u r2d r2u c rd ru)";

/// Parse one input line.
///
/// A missing value after `set` stores an empty cell, same as `clear`.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let head = words.next().ok_or(CommandError::Empty)?;

    let cmd = match head.to_ascii_lowercase().as_str() {
        "check" | "k"         => Command::Check,
        "next" | "n"          => Command::Next,
        "show" | "s"          => Command::Show,
        "json"                => Command::Json,
        "help" | "h" | "?"    => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "set" => {
            let field: Field = words.next().ok_or(CommandError::MissingField("set"))?.parse()?;
            Command::Set { field, value: words.collect() }
        }
        "clear" => {
            let field: Field = words.next().ok_or(CommandError::MissingField("clear"))?.parse()?;
            Command::Clear(field)
        }
        _ => match head.parse::<Field>() {
            Ok(field) => Command::Set { field, value: words.collect() },
            Err(_) => return Err(CommandError::Unknown(head.to_string())),
        },
    };
    Ok(cmd)
}
