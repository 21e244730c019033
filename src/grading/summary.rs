use crate::grading::evaluate::evaluate;
use crate::grading::grade::classify;
use crate::grading::types::{ClassSummary, EvaluationResult, OverallGrade, ScoreRecord};
use chrono::Utc;
use std::collections::HashMap;

/// Arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation given a pre-computed mean.
/// Returns 0.0 for empty input.
pub fn stddev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;

    variance.sqrt()
}

/// Aggregates a roster of [`ScoreRecord`] rows into a single [`ClassSummary`].
///
/// Every row is evaluated; out-of-range scores are counted as invalid and
/// excluded from the average, standard deviation, and tally. The class
/// average itself is graded for the overall block.
pub fn summarize(records: &[ScoreRecord]) -> ClassSummary {
    let mut tally: HashMap<String, usize> = HashMap::new();
    let mut graded_scores = Vec::new();
    let mut invalid = 0usize;

    for record in records {
        match evaluate(record.score) {
            EvaluationResult::Success { grade, .. } => {
                *tally.entry(grade.to_string()).or_default() += 1;
                graded_scores.push(record.score);
            }
            EvaluationResult::Invalid { .. } => invalid += 1,
        }
    }

    let average = mean(&graded_scores);
    let sd = stddev(&graded_scores, average);

    ClassSummary {
        schema_version: 1,
        generated_at: Utc::now(),
        total: records.len(),
        graded: graded_scores.len(),
        invalid,
        average,
        stddev: sd,
        tally,
        overall: OverallGrade {
            score: average,
            grade: classify(average),
        },
    }
}
