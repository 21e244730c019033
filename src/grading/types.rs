//! Data types used by the grading pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Letter grade bands for a percentage score.
///
/// Variants are declared in ascending merit so the derived `Ord` ranks
/// `A` above `B`, down to `F` at the bottom.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum LetterGrade {
    F,
    D,
    C,
    B,
    A,
}

impl LetterGrade {
    pub fn as_str(&self) -> &'static str {
        match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of evaluating one score.
///
/// An out-of-range score is a reported outcome, not an error to unwind
/// from, so it travels as the [`EvaluationResult::Invalid`] variant rather
/// than an `Err`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EvaluationResult {
    Success { grade: LetterGrade, message: String },
    Invalid { reason: String },
}

impl EvaluationResult {
    /// Returns `true` if the score was graded.
    pub fn is_success(&self) -> bool {
        matches!(self, EvaluationResult::Success { .. })
    }
}

/// A single row deserialized from a roster CSV file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub student: String,
    pub score: f64,
}

/// One graded row appended to the output CSV.
///
/// `grade` and `message` are set for graded scores; `error` is set instead
/// when the score was out of range.
#[derive(Debug, Serialize)]
pub struct GradedRecord {
    pub timestamp: DateTime<Utc>,
    pub student: String,
    pub score: f64,
    pub grade: Option<LetterGrade>,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl GradedRecord {
    /// Builds a CSV row from one evaluation outcome.
    pub fn from_evaluation(student: &str, score: f64, result: &EvaluationResult) -> Self {
        match result {
            EvaluationResult::Success { grade, message } => GradedRecord {
                timestamp: Utc::now(),
                student: student.to_string(),
                score,
                grade: Some(*grade),
                message: Some(message.clone()),
                error: None,
            },
            EvaluationResult::Invalid { reason } => GradedRecord {
                timestamp: Utc::now(),
                student: student.to_string(),
                score,
                grade: None,
                message: None,
                error: Some(reason.clone()),
            },
        }
    }
}

/// Class average and the letter grade it falls into.
#[derive(Debug, Serialize)]
pub struct OverallGrade {
    pub score: f64,
    pub grade: LetterGrade,
}

/// Complete summary for one roster, written as JSON for the report layer.
#[derive(Debug, Serialize)]
pub struct ClassSummary {
    pub schema_version: u8,
    pub generated_at: DateTime<Utc>,
    pub total: usize,
    pub graded: usize,
    pub invalid: usize,
    pub average: f64,
    pub stddev: f64,
    pub tally: HashMap<String, usize>,
    pub overall: OverallGrade,
}
