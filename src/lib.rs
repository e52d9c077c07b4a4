//! # column_addition_drill
//!
//! Practice drill for two-digit column addition.
//!
//! The learner sees a problem such as `27 + 15` and fills in a units/tens
//! grid: both addends, the carry box above the tens column, and the result.
//! The checker marks each wrong cell and accepts the addends in either order.
//!
//! ## How it works
//!
//! 1. [`generate_problem`] draws two addends. Half of the time the units
//!    digits are chosen so that they carry.
//! 2. The learner's digits go into a [`UserInput`], one cell per [`Field`].
//!    Non-digits are dropped on entry.
//! 3. [`validate`] compares the grid with the canonical carry and result and
//!    returns a [`ValidationResult`] with per-field error flags and up to
//!    three messages.
//!
//! [`DrillSession`] wraps the three pieces of state and the next-problem /
//! edit / check cycle. [`to_widget_state`] turns a session into JSON for a UI
//! client.
//!
//! ## Quick start
//!
//! ```rust
//! use column_addition_drill::{DrillConfig, DrillSession, Field};
//!
//! let mut session = DrillSession::new(DrillConfig { rng_seed: Some(42) });
//! println!("{}", session.problem());
//!
//! session.edit(Field::Row1Tens, "2");
//! let result = session.check();
//! assert!(!result.is_valid);
//! for msg in &result.errors {
//!     println!("- {msg}");
//! }
//!
//! // Any edit discards the previous check.
//! session.edit(Field::Row1Units, "7");
//! assert!(session.validation().is_none());
//! ```

pub mod command;
pub mod drill_engine;
pub mod logging;
pub mod terminal;
pub mod widget_adapter;

pub use drill_engine::{
    generate_problem, validate, CellVariant, DrillConfig, DrillSession, Feedback, Field,
    Problem, ProblemError, ProblemRequest, SessionStats, UnknownField, UserInput,
    ValidationResult,
};
pub use widget_adapter::to_widget_state;

#[cfg(test)]
mod tests;
