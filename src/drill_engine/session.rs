//! The drill's state container: current problem, learner input, and the
//! last validation. Every interaction is one method call that runs to
//! completion.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::drill_engine::{
    generator::{draw_problem, make_rng},
    models::{DrillConfig, Feedback, Field, Problem, UserInput, ValidationResult},
    validator,
};

/// Counters for the current run. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub problems_generated: u32,
    pub checks: u32,
    pub solved: u32,
}

pub struct DrillSession {
    rng: StdRng,
    problem: Problem,
    input: UserInput,
    validation: Option<ValidationResult>,
    solved_current: bool,
    stats: SessionStats,
}

impl DrillSession {
    /// Start a session with its first problem already on the board.
    pub fn new(config: DrillConfig) -> Self {
        let mut rng = make_rng(config.rng_seed);
        let problem = draw_problem(&mut rng);
        debug!(%problem, forced_carry = problem.forced_carry, "first problem");
        DrillSession {
            rng,
            problem,
            input: UserInput::default(),
            validation: None,
            solved_current: false,
            stats: SessionStats { problems_generated: 1, ..SessionStats::default() },
        }
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    pub fn input(&self) -> &UserInput {
        &self.input
    }

    pub fn validation(&self) -> Option<&ValidationResult> {
        self.validation.as_ref()
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Replace the problem and wipe the grid and any feedback.
    pub fn next_problem(&mut self) -> &Problem {
        self.problem = draw_problem(&mut self.rng);
        self.input.clear();
        self.validation = None;
        self.solved_current = false;
        self.stats.problems_generated += 1;
        debug!(problem = %self.problem, forced_carry = self.problem.forced_carry, "new problem");
        &self.problem
    }

    /// Write one cell. Any previous check result is discarded.
    pub fn edit(&mut self, field: Field, raw: &str) -> &str {
        if self.validation.take().is_some() {
            debug!("validation cleared by edit");
        }
        let stored = self.input.set(field, raw);
        debug!(%field, raw, stored, "cell edited");
        stored
    }

    /// Validate the current grid and keep the result for display.
    pub fn check(&mut self) -> &ValidationResult {
        let result = validator::validate(&self.problem, &self.input);
        self.stats.checks += 1;
        debug!(
            problem = %self.problem,
            is_valid = result.is_valid,
            errors = result.field_errors.len(),
            "answer checked"
        );
        if result.is_valid && !self.solved_current {
            self.solved_current = true;
            self.stats.solved += 1;
            info!(problem = %self.problem, solved = self.stats.solved, "problem solved");
        }
        self.validation.insert(result)
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.validation.as_ref().map(validator::feedback)
    }
}
