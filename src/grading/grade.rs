use crate::grading::types::LetterGrade;

/// Converts a validated percentage score (0.0–100.0) into a letter grade.
///
/// | Range       | Grade |
/// |-------------|-------|
/// | >= 90.0     | A     |
/// | >= 80.0     | B     |
/// | >= 70.0     | C     |
/// | >= 60.0     | D     |
/// | < 60.0      | F     |
///
/// Boundary scores belong to the higher band: 90.0 grades as A, not B.
/// Callers validate the score before classifying; this function assumes
/// the domain check has already passed.
pub fn classify(score: f64) -> LetterGrade {
    match score {
        s if s >= 90.0 => LetterGrade::A,
        s if s >= 80.0 => LetterGrade::B,
        s if s >= 70.0 => LetterGrade::C,
        s if s >= 60.0 => LetterGrade::D,
        _ => LetterGrade::F,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(100.0), LetterGrade::A);
        assert_eq!(classify(90.0), LetterGrade::A);
        assert_eq!(classify(89.999), LetterGrade::B);
        assert_eq!(classify(80.0), LetterGrade::B);
        assert_eq!(classify(79.999), LetterGrade::C);
        assert_eq!(classify(70.0), LetterGrade::C);
        assert_eq!(classify(69.999), LetterGrade::D);
        assert_eq!(classify(60.0), LetterGrade::D);
        assert_eq!(classify(59.999), LetterGrade::F);
        assert_eq!(classify(0.0), LetterGrade::F);
    }
}
