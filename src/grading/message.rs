use crate::grading::types::LetterGrade;

/// Returns the fixed performance message for a letter grade.
///
/// One distinct sentence per grade, exhaustive over the enum, so every
/// graded score carries a human-readable line in the report.
pub fn performance_message(grade: LetterGrade) -> &'static str {
    match grade {
        LetterGrade::A => "Excellent work, you have mastered this material.",
        LetterGrade::B => "Good job, a strong performance with room to grow.",
        LetterGrade::C => "Satisfactory, you met the baseline expectations.",
        LetterGrade::D => "You passed, but the fundamentals need more attention.",
        LetterGrade::F => "Failing, please review the material and ask for help early.",
    }
}
