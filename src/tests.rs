//! Unit tests for the `column_addition_drill` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Correct entry | Direct and swapped order are valid for every addend pair |
//! | Blame | Wrong rows, duplicated addend, carry-only and result-only errors |
//! | Canonical digits | 27+15 and 21+12 carry/result strings, sums of 100+ |
//! | Problem range | `Problem::new` and deserialisation reject addends outside 10..=99 |
//! | Messages | At most three messages, fixed order |
//! | Idempotence | Repeated validation gives the same result |
//! | Generator | Forced-carry invariant, plain-branch range, seed determinism |
//! | Widget JSON | Client field names, error flags, null before a check |

use rand::{rngs::StdRng, SeedableRng};

use crate::drill_engine::{
    generator::{draw_problem, generate_problem},
    validator::{
        expected_carry, expected_result_tens, expected_result_units, model_answer, validate,
        CARRY_MESSAGE, RESULT_MESSAGE, ROWS_MESSAGE,
    },
    DrillConfig, DrillSession, Field, Problem, ProblemError, ProblemRequest, UserInput,
};
use crate::widget_adapter::to_widget_state;

// ── helpers ──────────────────────────────────────────────────────────────────

fn problem(num1: u8, num2: u8) -> Problem {
    Problem::new(num1, num2).expect("addends in range")
}

/// Fill both addend rows with the given two-digit strings.
fn with_rows(mut input: UserInput, row1: &str, row2: &str) -> UserInput {
    input.set(Field::Row1Tens, &row1[..1]);
    input.set(Field::Row1Units, &row1[1..]);
    input.set(Field::Row2Tens, &row2[..1]);
    input.set(Field::Row2Units, &row2[1..]);
    input
}

fn flagged(input: &UserInput, p: &Problem) -> Vec<Field> {
    validate(p, input).field_errors.into_keys().collect()
}

const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

// ── correct entry ────────────────────────────────────────────────────────────

#[test]
fn direct_order_is_valid_for_every_pair() {
    for num1 in 10..=99u8 {
        for num2 in 10..=99u8 {
            let p = problem(num1, num2);
            let r = validate(&p, &model_answer(&p));
            assert!(r.is_valid, "{p} rejected: {:?}", r.field_errors);
            assert!(r.errors.is_empty(), "{p} produced messages: {:?}", r.errors);
        }
    }
}

#[test]
fn swapped_order_is_valid_for_every_pair() {
    for num1 in 10..=99u8 {
        for num2 in 10..=99u8 {
            let p = problem(num1, num2);
            let swapped = with_rows(model_answer(&p), &num2.to_string(), &num1.to_string());
            let r = validate(&p, &swapped);
            assert!(r.is_valid, "{p} swapped rejected: {:?}", r.field_errors);
        }
    }
}

// ── blame ────────────────────────────────────────────────────────────────────

#[test]
fn duplicated_addend_blames_second_row_only() {
    for (num1, num2) in [(27u8, 15u8), (10, 99), (45, 44)] {
        let p = problem(num1, num2);
        let dup = num1.to_string();
        let input = with_rows(model_answer(&p), &dup, &dup);
        let r = validate(&p, &input);
        assert!(r.has_error(Field::Row2Tens), "{p}");
        assert!(r.has_error(Field::Row2Units), "{p}");
        assert!(!r.has_error(Field::Row1Tens), "{p}");
        assert!(!r.has_error(Field::Row1Units), "{p}");
        assert_eq!(r.errors, vec![ROWS_MESSAGE]);
    }
}

#[test]
fn duplicating_second_addend_also_blames_second_row() {
    let p = problem(27, 15);
    let input = with_rows(model_answer(&p), "15", "15");
    assert_eq!(flagged(&input, &p), vec![Field::Row2Tens, Field::Row2Units]);
}

#[test]
fn equal_addends_written_twice_are_correct() {
    let p = problem(33, 33);
    let r = validate(&p, &model_answer(&p));
    assert!(r.is_valid);
}

#[test]
fn unknown_row_is_blamed_on_its_own() {
    let p = problem(27, 15);
    let input = with_rows(model_answer(&p), "27", "16");
    assert_eq!(flagged(&input, &p), vec![Field::Row2Tens, Field::Row2Units]);

    let input = with_rows(model_answer(&p), "72", "15");
    assert_eq!(flagged(&input, &p), vec![Field::Row1Tens, Field::Row1Units]);

    let input = with_rows(model_answer(&p), "72", "51");
    assert_eq!(
        flagged(&input, &p),
        vec![Field::Row1Tens, Field::Row1Units, Field::Row2Tens, Field::Row2Units]
    );
}

#[test]
fn single_digit_row_does_not_match_padded_addend() {
    let p = problem(27, 15);
    let mut input = model_answer(&p);
    input.set(Field::Row2Tens, "");
    assert_eq!(flagged(&input, &p), vec![Field::Row2Tens, Field::Row2Units]);
}

// ── canonical digits ─────────────────────────────────────────────────────────

#[test]
fn carry_case_27_plus_15() {
    let p = problem(27, 15);
    assert_eq!(expected_carry(&p), "1");
    assert_eq!(expected_result_tens(&p), "4");
    assert_eq!(expected_result_units(&p), "2");

    let mut input = model_answer(&p);
    input.set(Field::Carry, "0");
    let r = validate(&p, &input);
    assert!(!r.is_valid);
    assert_eq!(r.field_errors.len(), 1);
    assert!(r.has_error(Field::Carry));
    assert_eq!(r.errors, vec![CARRY_MESSAGE]);
}

#[test]
fn no_carry_case_21_plus_12() {
    let p = problem(21, 12);
    assert_eq!(expected_carry(&p), "");
    assert_eq!(expected_result_tens(&p), "3");
    assert_eq!(expected_result_units(&p), "3");

    let mut input = model_answer(&p);
    assert!(validate(&p, &input).is_valid);
    input.set(Field::Carry, "0");
    assert_eq!(flagged(&input, &p), vec![Field::Carry], "a '0' carry is not blank");
}

#[test]
fn missing_carry_is_an_error_when_units_overflow() {
    let p = problem(38, 14);
    let mut input = model_answer(&p);
    input.set(Field::Carry, "");
    assert_eq!(flagged(&input, &p), vec![Field::Carry]);
}

#[test]
fn sums_of_one_hundred_and_more_use_two_tens_digits() {
    let p = problem(98, 97);
    assert_eq!(expected_result_tens(&p), "19");
    assert_eq!(expected_result_units(&p), "5");
    let input = model_answer(&p);
    assert_eq!(input.result_tens, "19");
    assert!(validate(&p, &input).is_valid);
}

#[test]
fn problem_rejects_out_of_range_addends() {
    assert_eq!(Problem::new(9, 50), Err(ProblemError::AddendOutOfRange(9)));
    assert_eq!(Problem::new(50, 100), Err(ProblemError::AddendOutOfRange(100)));
    assert!(Problem::new(10, 99).is_ok());
}

#[test]
fn deserialising_a_problem_applies_the_range_check() {
    let err = serde_json::from_str::<Problem>(r#"{"num1":5,"num2":12}"#)
        .expect_err("num1=5 must be rejected");
    assert!(err.to_string().contains("addend 5 is outside 10..=99"), "{err}");
    assert!(serde_json::from_str::<Problem>(r#"{"num1":27,"num2":100}"#).is_err());

    let p: Problem = serde_json::from_str(r#"{"num1":27,"num2":15,"forcedCarry":true}"#)
        .expect("in-range problem");
    assert_eq!((p.num1, p.num2, p.forced_carry), (27, 15, true));

    let round_trip: Problem = serde_json::from_str(&serde_json::to_string(&p).unwrap()).unwrap();
    assert_eq!(round_trip, p);
}

// ── messages ─────────────────────────────────────────────────────────────────

#[test]
fn messages_follow_rows_carry_result_order() {
    let p = problem(27, 15);
    let r = validate(&p, &UserInput::default());
    assert_eq!(r.errors, vec![ROWS_MESSAGE, CARRY_MESSAGE, RESULT_MESSAGE]);
    assert_eq!(r.field_errors.len(), 7);
}

#[test]
fn result_message_appears_once_for_both_result_cells() {
    let p = problem(27, 15);
    let mut input = model_answer(&p);
    input.set(Field::ResultTens, "5");
    input.set(Field::ResultUnits, "1");
    let r = validate(&p, &input);
    assert_eq!(r.errors, vec![RESULT_MESSAGE]);
    assert!(r.has_error(Field::ResultTens) && r.has_error(Field::ResultUnits));
}

// ── idempotence ──────────────────────────────────────────────────────────────

#[test]
fn validation_is_idempotent() {
    let p = problem(46, 37);
    let input = with_rows(model_answer(&p), "46", "46");
    assert_eq!(validate(&p, &input), validate(&p, &input));

    let mut session = DrillSession::new(DrillConfig { rng_seed: Some(9) });
    session.edit(Field::Row1Tens, "3");
    let first = session.check().clone();
    let second = session.check().clone();
    assert_eq!(first, second);
}

// ── generator ────────────────────────────────────────────────────────────────

#[test]
fn forced_branch_always_carries_and_plain_branch_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let (mut forced, mut plain) = (0u32, 0u32);
    for _ in 0..5_000 {
        let p = draw_problem(&mut rng);
        if p.forced_carry {
            forced += 1;
            assert!(p.needs_carry(), "forced problem {p} does not carry");
            assert!((15..=54).contains(&p.num1), "{p}");
        } else {
            plain += 1;
            assert!((10..=49).contains(&p.num1), "{p}");
            assert!((10..=49).contains(&p.num2), "{p}");
        }
    }
    // Fair coin: both branches show up in roughly equal measure.
    assert!(forced > 2_000 && plain > 2_000, "forced={forced} plain={plain}");
}

#[test]
fn generated_problems_fit_single_digit_result_tens() {
    let mut rng = StdRng::seed_from_u64(77);
    for _ in 0..2_000 {
        let p = draw_problem(&mut rng);
        assert!(p.sum() < 100, "{p} would need a two-digit tens cell");
    }
}

#[test]
fn same_seed_produces_identical_problem() {
    for seed in SEEDS {
        assert_eq!(
            generate_problem(ProblemRequest::seeded(seed)),
            generate_problem(ProblemRequest::seeded(seed)),
            "seed={seed}"
        );
    }
}

#[test]
fn entropy_request_produces_a_valid_problem() {
    let p = generate_problem(ProblemRequest::default());
    assert!((10..=99).contains(&p.num1));
    assert!((10..=99).contains(&p.num2));
}

// ── widget JSON ──────────────────────────────────────────────────────────────

#[test]
fn widget_state_uses_client_field_names() {
    let mut session = DrillSession::new(DrillConfig { rng_seed: Some(1) });
    session.edit(Field::Row1Tens, "x7");
    let state = to_widget_state(&session);

    let names: Vec<&str> = state["cells"]
        .as_array()
        .expect("cells array")
        .iter()
        .map(|c| c["field"].as_str().expect("field name"))
        .collect();
    assert_eq!(names, ["row1D", "row1U", "row2D", "row2U", "carry", "resultD", "resultU"]);
    assert_eq!(state["cells"][0]["value"], "7");
    assert_eq!(state["cells"][4]["variant"], "carry");
    assert_eq!(state["cells"][5]["maxLength"], 2);
    assert!(state["validation"].is_null());
    assert!(state["feedback"].is_null());
    assert_eq!(
        state["problem"]["display"],
        format!("{} = ?", session.problem())
    );
}

#[test]
fn widget_state_reports_errors_after_check() {
    let mut session = DrillSession::new(DrillConfig { rng_seed: Some(1) });
    session.check();
    let state = to_widget_state(&session);

    assert_eq!(state["validation"]["isValid"], false);
    assert_eq!(state["validation"]["fieldErrors"]["row1D"], true);
    assert_eq!(state["cells"][0]["isError"], true);
    assert_eq!(state["feedback"]["kind"], "retry");
    assert_eq!(state["stats"]["checks"], 1);
}
