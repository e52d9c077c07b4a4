//! Line-oriented drill loop behind the `column-drill` binary.
//!
//! Reads commands from any `BufRead` and writes to any `Write`, so the loop
//! runs the same against a terminal or an in-memory buffer.

use std::io::{self, BufRead, Write};

use crate::command::{parse_command, Command, HELP};
use crate::drill_engine::{
    grid::{render_feedback, render_grid},
    DrillSession,
};
use crate::widget_adapter::to_widget_state;

pub const GREETING: &str = "You can write the numbers in either order! Type 'help' for commands.";

fn write_json(session: &DrillSession, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(&to_widget_state(session))?)
}

/// Draw the grid and any feedback, or the widget JSON when `json` is set.
pub fn draw(session: &DrillSession, json: bool, out: &mut impl Write) -> io::Result<()> {
    if json {
        return write_json(session, out);
    }
    let grid = render_grid(session.problem(), session.input(), session.validation());
    writeln!(out, "{grid}")?;
    if let Some(fb) = session.feedback() {
        writeln!(out, "\n{}", render_feedback(&fb))?;
    }
    Ok(())
}

/// Run commands until `quit` or end of input, then print the run summary.
///
/// A line that does not parse is reported and the loop carries on.
pub fn run(
    session: &mut DrillSession,
    input: impl BufRead,
    out: &mut impl Write,
    json: bool,
) -> io::Result<()> {
    writeln!(out, "{GREETING}\n")?;
    draw(session, json, out)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let cmd = match parse_command(&line) {
            Ok(cmd) => cmd,
            Err(e) => {
                tracing::debug!(line = line.as_str(), error = %e, "rejected command");
                writeln!(out, "{e}")?;
                continue;
            }
        };
        match cmd {
            Command::Set { field, value } => {
                session.edit(field, &value);
            }
            Command::Clear(field) => {
                session.edit(field, "");
            }
            Command::Check => {
                session.check();
            }
            Command::Next => {
                session.next_problem();
            }
            Command::Show => {}
            Command::Json => {
                write_json(session, out)?;
                continue;
            }
            Command::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Command::Quit => break,
        }
        writeln!(out)?;
        draw(session, json, out)?;
    }

    let stats = session.stats();
    writeln!(
        out,
        "\nSolved {} of {} problems ({} checks).",
        stats.solved, stats.problems_generated, stats.checks
    )
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::drill_engine::{validator::model_answer, DrillConfig, Field};

    fn run_script(session: &mut DrillSession, script: &str, json: bool) -> String {
        let mut out = Vec::new();
        run(session, Cursor::new(script.as_bytes()), &mut out, json).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn seeded() -> DrillSession {
        DrillSession::new(DrillConfig { rng_seed: Some(12) })
    }

    #[test]
    fn bad_commands_are_reported_and_the_loop_continues() {
        let mut session = seeded();
        let out = run_script(&mut session, "jump\nset row9D 1\nset\nr1d 2\ncheck\n", false);

        assert!(out.contains("unknown command 'jump'"), "{out}");
        assert!(out.contains("unknown field 'row9D'"), "{out}");
        assert!(out.contains("'set' needs a field name"), "{out}");
        assert_eq!(session.input().get(Field::Row1Tens), "2");
        assert_eq!(session.stats().checks, 1);
        assert!(out.ends_with("Solved 0 of 1 problems (1 checks).\n"), "{out}");
    }

    #[test]
    fn quit_stops_reading_further_lines() {
        let mut session = seeded();
        run_script(&mut session, "quit\nnext\nnext\n", false);
        assert_eq!(session.stats().problems_generated, 1);
    }

    #[test]
    fn solving_prints_success_feedback() {
        let mut session = seeded();
        let answer = model_answer(session.problem());
        let script: String = Field::ALL
            .iter()
            .map(|&f| format!("set {f} {}\n", answer.get(f)))
            .chain(["check\n".to_string()])
            .collect();

        let out = run_script(&mut session, &script, false);
        assert!(out.contains("* Excellent work!"), "{out}");
        assert!(out.ends_with("Solved 1 of 1 problems (1 checks).\n"), "{out}");
    }

    #[test]
    fn json_mode_prints_widget_state() {
        let mut session = seeded();
        let out = run_script(&mut session, "help\n", true);
        assert!(out.contains("\"cells\""), "{out}");
        assert!(out.contains("fields: row1D"), "{out}");
    }
}
