use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::drill_engine::digits;

/// Smallest addend a problem may hold.
pub const MIN_ADDEND: u8 = 10;
/// Largest addend a problem may hold.
pub const MAX_ADDEND: u8 = 99;

// ---------------------------------------------------------------------------
// Problem
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProblemError {
    #[error("addend {0} is outside 10..=99")]
    AddendOutOfRange(u8),
}

/// Two two-digit addends shown to the learner as `num1 + num2`.
///
/// [`Problem::new`] is the checked constructor. Deserialisation goes through
/// the same range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawProblem")]
pub struct Problem {
    pub num1: u8,
    pub num2: u8,
    /// Set when the generator took the forced-carry branch.
    pub forced_carry: bool,
}

impl Problem {
    pub fn new(num1: u8, num2: u8) -> Result<Self, ProblemError> {
        for n in [num1, num2] {
            if !(MIN_ADDEND..=MAX_ADDEND).contains(&n) {
                return Err(ProblemError::AddendOutOfRange(n));
            }
        }
        Ok(Problem { num1, num2, forced_carry: false })
    }

    pub fn sum(&self) -> u16 {
        self.num1 as u16 + self.num2 as u16
    }

    /// True when the units column overflows into the tens.
    pub fn needs_carry(&self) -> bool {
        digits::units(self.num1) + digits::units(self.num2) > 9
    }
}

/// Wire form of [`Problem`] before the range check.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProblem {
    num1: u8,
    num2: u8,
    #[serde(default)]
    forced_carry: bool,
}

impl TryFrom<RawProblem> for Problem {
    type Error = ProblemError;

    fn try_from(raw: RawProblem) -> Result<Self, Self::Error> {
        let problem = Problem::new(raw.num1, raw.num2)?;
        Ok(Problem { forced_carry: raw.forced_carry, ..problem })
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.num1, self.num2)
    }
}

// ---------------------------------------------------------------------------
// Grid cells
// ---------------------------------------------------------------------------

/// How a cell is drawn: regular addend cell, small carry box, or result cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellVariant {
    Normal,
    Carry,
    Result,
}

/// One of the seven input cells of the column grid.
///
/// Wire names follow the client convention: `D` is the tens ("dezenas")
/// column and `U` the units column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "row1D")]
    Row1Tens,
    #[serde(rename = "row1U")]
    Row1Units,
    #[serde(rename = "row2D")]
    Row2Tens,
    #[serde(rename = "row2U")]
    Row2Units,
    #[serde(rename = "carry")]
    Carry,
    #[serde(rename = "resultD")]
    ResultTens,
    #[serde(rename = "resultU")]
    ResultUnits,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Row1Tens,
        Field::Row1Units,
        Field::Row2Tens,
        Field::Row2Units,
        Field::Carry,
        Field::ResultTens,
        Field::ResultUnits,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Row1Tens    => "row1D",
            Field::Row1Units   => "row1U",
            Field::Row2Tens    => "row2D",
            Field::Row2Units   => "row2U",
            Field::Carry       => "carry",
            Field::ResultTens  => "resultD",
            Field::ResultUnits => "resultU",
        }
    }

    pub fn variant(self) -> CellVariant {
        match self {
            Field::Carry => CellVariant::Carry,
            Field::ResultTens | Field::ResultUnits => CellVariant::Result,
            _ => CellVariant::Normal,
        }
    }

    /// Maximum number of digits the cell accepts.
    ///
    /// The result tens cell takes two so that sums of 100 and above remain
    /// answerable; generated problems never need the second digit.
    pub fn capacity(self) -> usize {
        match self {
            Field::ResultTens => 2,
            _ => 1,
        }
    }

    pub fn is_addend_row(self) -> bool {
        matches!(
            self,
            Field::Row1Tens | Field::Row1Units | Field::Row2Tens | Field::Row2Units
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = match s.to_ascii_lowercase().as_str() {
            "row1d" | "r1d"   => Field::Row1Tens,
            "row1u" | "r1u"   => Field::Row1Units,
            "row2d" | "r2d"   => Field::Row2Tens,
            "row2u" | "r2u"   => Field::Row2Units,
            "carry" | "c"     => Field::Carry,
            "resultd" | "rd"  => Field::ResultTens,
            "resultu" | "ru"  => Field::ResultUnits,
            _ => return Err(UnknownField(s.to_string())),
        };
        Ok(field)
    }
}

// ---------------------------------------------------------------------------
// Learner input
// ---------------------------------------------------------------------------

/// The learner's entries, one digit string per cell. Empty means blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    #[serde(rename = "row1D")]
    pub row1_tens: String,
    #[serde(rename = "row1U")]
    pub row1_units: String,
    #[serde(rename = "row2D")]
    pub row2_tens: String,
    #[serde(rename = "row2U")]
    pub row2_units: String,
    pub carry: String,
    #[serde(rename = "resultD")]
    pub result_tens: String,
    #[serde(rename = "resultU")]
    pub result_units: String,
}

impl UserInput {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Row1Tens    => &self.row1_tens,
            Field::Row1Units   => &self.row1_units,
            Field::Row2Tens    => &self.row2_tens,
            Field::Row2Units   => &self.row2_units,
            Field::Carry       => &self.carry,
            Field::ResultTens  => &self.result_tens,
            Field::ResultUnits => &self.result_units,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Row1Tens    => &mut self.row1_tens,
            Field::Row1Units   => &mut self.row1_units,
            Field::Row2Tens    => &mut self.row2_tens,
            Field::Row2Units   => &mut self.row2_units,
            Field::Carry       => &mut self.carry,
            Field::ResultTens  => &mut self.result_tens,
            Field::ResultUnits => &mut self.result_units,
        }
    }

    /// Store `raw` after dropping non-digits and truncating to the cell's
    /// capacity. Returns the value actually stored.
    pub fn set(&mut self, field: Field, raw: &str) -> &str {
        let slot = self.slot(field);
        *slot = digits::sanitize(raw, field.capacity());
        slot
    }

    pub fn clear(&mut self) {
        *self = UserInput::default();
    }

    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|&f| self.get(f).is_empty())
    }

    /// Concatenated tens+units of the first addend row.
    pub fn row1(&self) -> String {
        format!("{}{}", self.row1_tens, self.row1_units)
    }

    /// Concatenated tens+units of the second addend row.
    pub fn row2(&self) -> String {
        format!("{}{}", self.row2_tens, self.row2_units)
    }
}

// ---------------------------------------------------------------------------
// Validation output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    /// Only fields in error are present, always mapped to `true`.
    pub field_errors: BTreeMap<Field, bool>,
}

impl ValidationResult {
    pub fn has_error(&self, field: Field) -> bool {
        self.field_errors.get(&field).copied().unwrap_or(false)
    }
}

/// What the learner sees after checking an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Feedback {
    Success { message: String },
    Retry { heading: String, items: Vec<String> },
}

// ---------------------------------------------------------------------------
// Request / configuration
// ---------------------------------------------------------------------------

/// Input to [`generate_problem`](crate::drill_engine::generate_problem).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemRequest {
    pub rng_seed: Option<u64>,
}

impl ProblemRequest {
    pub fn seeded(seed: u64) -> Self {
        ProblemRequest { rng_seed: Some(seed) }
    }
}

/// Settings for a [`DrillSession`](crate::drill_engine::DrillSession).
///
/// With `rng_seed` set, the whole problem sequence of the session is
/// reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillConfig {
    pub rng_seed: Option<u64>,
}
