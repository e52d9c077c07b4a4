//! Walk-through of the column addition drill.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **A full round**: a seeded session, a wrong first attempt with the
//!    feedback it earns, then the corrected grid.
//! 2. **Either order**: the same problem answered with the addends swapped.
//! 3. **Generator sample**: ten seeded problems, marking the ones built to
//!    force a carry.
//! 4. **Widget JSON**: the state a UI client would receive.

use column_addition_drill::{
    drill_engine::{
        grid::{render_feedback, render_grid},
        validator::model_answer,
    },
    generate_problem, to_widget_state, DrillConfig, DrillSession, Field, ProblemRequest,
};

fn print_round(session: &DrillSession) {
    println!("{}", render_grid(session.problem(), session.input(), session.validation()));
    if let Some(fb) = session.feedback() {
        println!();
        println!("{}", render_feedback(&fb));
    }
    println!();
}

fn main() {
    // ── A full round ────────────────────────────────────────────────────────
    println!("══ A full round (seed 2024) ══");
    println!();
    let mut session = DrillSession::new(DrillConfig { rng_seed: Some(2024) });
    let answer = model_answer(session.problem());

    // First attempt: rows right, carry forgotten, result units off by one.
    let first_try = [
        Field::Row1Tens,
        Field::Row1Units,
        Field::Row2Tens,
        Field::Row2Units,
        Field::ResultTens,
    ];
    for f in first_try {
        session.edit(f, answer.get(f));
    }
    let wrong_units = (answer.result_units.parse::<u8>().unwrap_or(0) + 1) % 10;
    session.edit(Field::ResultUnits, &wrong_units.to_string());
    session.check();
    print_round(&session);

    // Fix it.
    session.edit(Field::Carry, answer.get(Field::Carry));
    session.edit(Field::ResultUnits, answer.get(Field::ResultUnits));
    session.check();
    print_round(&session);

    // ── Either order ────────────────────────────────────────────────────────
    println!("══ Either order ══");
    println!();
    session.next_problem();
    let answer = model_answer(session.problem());
    let swaps = [
        (Field::Row1Tens, Field::Row2Tens),
        (Field::Row1Units, Field::Row2Units),
        (Field::Row2Tens, Field::Row1Tens),
        (Field::Row2Units, Field::Row1Units),
    ];
    for (target, source) in swaps {
        session.edit(target, answer.get(source));
    }
    for f in [Field::Carry, Field::ResultTens, Field::ResultUnits] {
        session.edit(f, answer.get(f));
    }
    session.check();
    print_round(&session);

    // ── Generator sample ────────────────────────────────────────────────────
    println!("══ Generator sample ══");
    println!();
    for seed in 1..=10u64 {
        let p = generate_problem(ProblemRequest::seeded(seed));
        let mark = if p.forced_carry { "carry" } else { "" };
        println!("  seed {seed:>2}: {:<8} = {:>3}  {mark}", p.to_string(), p.sum());
    }
    println!();

    // ── Widget JSON ─────────────────────────────────────────────────────────
    println!("══ Widget JSON ══");
    println!();
    let state = to_widget_state(&session);
    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("could not serialise widget state: {e}"),
    }

    let stats = session.stats();
    println!();
    println!("Solved {} of {} problems.", stats.solved, stats.problems_generated);
}
