//! Plain-text rendering of the column grid and of check feedback.

use crate::drill_engine::models::{
    CellVariant, Feedback, Field, Problem, UserInput, ValidationResult,
};

const CELL_WIDTH: usize = 5;
const GAP: &str = "  ";

/// One cell, e.g. `[ 7 ]`, `[ 7!]` when flagged, `( 1 )` for the carry box.
fn cell(field: Field, input: &UserInput, validation: Option<&ValidationResult>) -> String {
    let mut content = input.get(field).to_string();
    if validation.is_some_and(|v| v.has_error(field)) {
        content.push('!');
    }
    let (open, close) = match field.variant() {
        CellVariant::Carry => ('(', ')'),
        _ => ('[', ']'),
    };
    format!("{open}{content:^3}{close}")
}

/// Render the problem banner and the grid, tens column left, units right.
pub fn render_grid(
    problem: &Problem,
    input: &UserInput,
    validation: Option<&ValidationResult>,
) -> String {
    let c = |f: Field| cell(f, input, validation);
    let lines = [
        format!("{problem} = ?"),
        String::new(),
        format!("  {:^w$}{GAP}{:^w$}", "D", "U", w = CELL_WIDTH),
        format!("  {}", c(Field::Carry)),
        format!("  {}{GAP}{}", c(Field::Row1Tens), c(Field::Row1Units)),
        format!("+ {}{GAP}{}", c(Field::Row2Tens), c(Field::Row2Units)),
        format!("  {}", "-".repeat(CELL_WIDTH * 2 + GAP.len())),
        format!("  {}{GAP}{}", c(Field::ResultTens), c(Field::ResultUnits)),
    ];
    lines.join("\n")
}

/// Success line, or the heading followed by one bullet per message.
pub fn render_feedback(feedback: &Feedback) -> String {
    match feedback {
        Feedback::Success { message } => format!("* {message}"),
        Feedback::Retry { heading, items } => {
            let mut out = heading.clone();
            for item in items {
                out.push_str("\n  - ");
                out.push_str(item);
            }
            out
        }
    }
}
