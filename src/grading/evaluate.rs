use crate::grading::grade::classify;
use crate::grading::message::performance_message;
use crate::grading::types::EvaluationResult;
use crate::grading::validate::validate_score;

/// Evaluates one raw score against the grading scale.
///
/// An out-of-range score short-circuits to [`EvaluationResult::Invalid`]
/// before the classifier or message lookup run. A valid score is graded
/// and paired with its performance message.
pub fn evaluate(score: f64) -> EvaluationResult {
    if !validate_score(score) {
        return EvaluationResult::Invalid {
            reason: "score out of range".to_string(),
        };
    }

    let grade = classify(score);
    EvaluationResult::Success {
        grade,
        message: performance_message(grade).to_string(),
    }
}
