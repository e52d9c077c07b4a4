use serde_json::{json, Value};

use crate::drill_engine::{DrillSession, Field, Problem, UserInput, ValidationResult};

/// Banner text shown above the grid, e.g. "27 + 15 = ?".
fn problem_block(problem: &Problem) -> Value {
    json!({
        "num1": problem.num1,
        "num2": problem.num2,
        "display": format!("{problem} = ?"),
    })
}

/// Build one cell entry for the client grid.
fn cell(field: Field, input: &UserInput, validation: Option<&ValidationResult>) -> Value {
    json!({
        "field": field,
        "value": input.get(field),
        "variant": field.variant(),
        "maxLength": field.capacity(),
        "isError": validation.is_some_and(|v| v.has_error(field)),
    })
}

/// Map a session to the JSON object a UI client renders.
///
/// Cells come in grid order: both addend rows, carry, then the result row.
/// `validation` and `feedback` are `null` until the learner checks.
pub fn to_widget_state(session: &DrillSession) -> Value {
    let validation = session.validation();
    let cells: Vec<Value> = Field::ALL
        .iter()
        .map(|&f| cell(f, session.input(), validation))
        .collect();

    json!({
        "problem": problem_block(session.problem()),
        "cells": cells,
        "validation": validation,
        "feedback": session.feedback(),
        "stats": session.stats(),
    })
}
