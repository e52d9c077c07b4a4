//! Core drill engine: problem generation, answer checking, and grid state.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: problem, grid fields, learner input, results, config |
//! | `digits`    | Digit helpers: padding, units digit, input sanitisation |
//! | `generator` | `generate_problem()` and the carry-biased draw |
//! | `validator` | `validate()`: per-cell checking with either-order addends |
//! | `session`   | `DrillSession`: the generate / edit / check lifecycle |
//! | `grid`      | Plain-text rendering of the column grid and feedback |

pub mod digits;
pub mod generator;
pub mod grid;
pub mod models;
pub mod session;
pub mod validator;

pub use generator::generate_problem;
pub use models::{
    CellVariant, DrillConfig, Feedback, Field, Problem, ProblemError, ProblemRequest,
    UnknownField, UserInput, ValidationResult,
};
pub use session::{DrillSession, SessionStats};
pub use validator::validate;
