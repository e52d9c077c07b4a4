//! Answer checking for the column grid.
//!
//! The learner may write the addends in either order. Carry and result are
//! order-independent, so they are always compared against the same canonical
//! strings.

use std::collections::BTreeMap;

use crate::drill_engine::{
    digits,
    models::{Feedback, Field, Problem, UserInput, ValidationResult},
};

pub const ROWS_MESSAGE: &str = "Check that you wrote both addends correctly.";
pub const CARRY_MESSAGE: &str = "The carry (small red box) is not correct.";
pub const RESULT_MESSAGE: &str = "The result of the sum is not correct.";

pub const SUCCESS_MESSAGE: &str = "Excellent work!";
pub const RETRY_HEADING: &str = "Almost there! Let's fix it:";

/// Canonical carry cell: "1" when the units overflow, blank otherwise.
/// A "0" in the carry box counts as wrong.
pub fn expected_carry(problem: &Problem) -> &'static str {
    if problem.needs_carry() { "1" } else { "" }
}

/// Canonical result tens, unpadded. Sums of 100+ give two digits.
pub fn expected_result_tens(problem: &Problem) -> String {
    (problem.sum() / 10).to_string()
}

pub fn expected_result_units(problem: &Problem) -> String {
    (problem.sum() % 10).to_string()
}

/// Check every cell of `input` against `problem`. Never fails.
pub fn validate(problem: &Problem, input: &UserInput) -> ValidationResult {
    let mut field_errors: BTreeMap<Field, bool> = BTreeMap::new();
    let mut flag = |fields: &[Field]| {
        for &f in fields {
            field_errors.insert(f, true);
        }
    };

    let p1 = digits::padded2(problem.num1);
    let p2 = digits::padded2(problem.num2);
    let row1 = input.row1();
    let row2 = input.row2();

    let direct = row1 == p1 && row2 == p2;
    let swapped = row1 == p2 && row2 == p1;

    if !(direct || swapped) {
        let is_addend = |row: &str| row == p1 || row == p2;

        if !is_addend(&row1) {
            flag(&[Field::Row1Tens, Field::Row1Units]);
        }
        if !is_addend(&row2) {
            flag(&[Field::Row2Tens, Field::Row2Units]);
        }
        // Same addend written twice: the second row is the one to fix.
        if row1 == row2 && is_addend(&row1) && p1 != p2 {
            flag(&[Field::Row2Tens, Field::Row2Units]);
        }
    }

    if input.carry != expected_carry(problem) {
        flag(&[Field::Carry]);
    }
    if input.result_tens != expected_result_tens(problem) {
        flag(&[Field::ResultTens]);
    }
    if input.result_units != expected_result_units(problem) {
        flag(&[Field::ResultUnits]);
    }

    let mut errors = Vec::new();
    if field_errors.keys().any(|f| f.is_addend_row()) {
        errors.push(ROWS_MESSAGE.to_string());
    }
    if field_errors.contains_key(&Field::Carry) {
        errors.push(CARRY_MESSAGE.to_string());
    }
    if field_errors.contains_key(&Field::ResultTens)
        || field_errors.contains_key(&Field::ResultUnits)
    {
        errors.push(RESULT_MESSAGE.to_string());
    }

    ValidationResult {
        is_valid: field_errors.is_empty(),
        errors,
        field_errors,
    }
}

/// The message block shown after a check.
pub fn feedback(result: &ValidationResult) -> Feedback {
    if result.is_valid {
        Feedback::Success { message: SUCCESS_MESSAGE.to_string() }
    } else {
        Feedback::Retry {
            heading: RETRY_HEADING.to_string(),
            items: result.errors.clone(),
        }
    }
}

/// Input that a learner who got everything right would have typed.
pub fn model_answer(problem: &Problem) -> UserInput {
    let p1 = digits::padded2(problem.num1);
    let p2 = digits::padded2(problem.num2);
    let mut input = UserInput::default();
    input.set(Field::Row1Tens, &p1[..1]);
    input.set(Field::Row1Units, &p1[1..]);
    input.set(Field::Row2Tens, &p2[..1]);
    input.set(Field::Row2Units, &p2[1..]);
    input.set(Field::Carry, expected_carry(problem));
    input.set(Field::ResultTens, &expected_result_tens(problem));
    input.set(Field::ResultUnits, &expected_result_units(problem));
    input
}
