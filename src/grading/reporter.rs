use crate::grading::evaluate::evaluate;
use crate::grading::summary::summarize;
use crate::grading::types::{ClassSummary, GradedRecord, ScoreRecord};
use crate::output::{append_record, write_json_file};
use anyhow::Result;
use std::fs::File;
use tracing::info;

/// Grades every row of a roster CSV, appending one [`GradedRecord`] per
/// student to the output CSV. Returns the number of rows processed.
pub fn grade_roster(input: &str, output: &str) -> Result<usize> {
    let records = load_roster(input)?;
    info!(input, rows = records.len(), "Roster loaded");

    for record in &records {
        let result = evaluate(record.score);
        let row = GradedRecord::from_evaluation(&record.student, record.score, &result);
        append_record(output, &row)?;
    }

    info!(output, rows = records.len(), "Graded roster written");
    Ok(records.len())
}

/// Summarizes a roster CSV and writes the result as pretty JSON to `output`.
pub fn write_summary(input: &str, output: &str) -> Result<ClassSummary> {
    let records = load_roster(input)?;
    let summary = summarize(&records);

    write_json_file(output, &summary)?;
    info!(
        output,
        graded = summary.graded,
        invalid = summary.invalid,
        "Summary report written"
    );

    Ok(summary)
}

fn load_roster(path: &str) -> Result<Vec<ScoreRecord>> {
    let file = File::open(path)?;
    let mut rdr = csv::Reader::from_reader(file);

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let record: ScoreRecord = result?;
        rows.push(record);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    fn write_roster(path: &str) {
        fs::write(path, "student,score\nalice,95.0\nbob,42.0\ncarol,105.0\n").unwrap();
    }

    #[test]
    fn test_load_roster() {
        let path = temp_path("grade_report_test_load.csv");
        write_roster(&path);

        let rows = load_roster(&path).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].student, "alice");
        assert_eq!(rows[0].score, 95.0);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_roster_missing_file() {
        let result = load_roster("/nonexistent/roster.csv");
        assert!(result.is_err());
    }

    #[test]
    fn test_grade_roster_writes_all_rows() {
        let input = temp_path("grade_report_test_batch_in.csv");
        let output = temp_path("grade_report_test_batch_out.csv");
        write_roster(&input);
        let _ = fs::remove_file(&output);

        let rows = grade_roster(&input, &output).unwrap();
        assert_eq!(rows, 3);

        let content = fs::read_to_string(&output).unwrap();
        // 1 header + 3 data rows
        assert_eq!(content.lines().count(), 4);
        // the out-of-range row carries the error column, not a grade
        let invalid_line = content.lines().find(|l| l.contains("carol")).unwrap();
        assert!(invalid_line.contains("score out of range"));

        fs::remove_file(&input).unwrap();
        fs::remove_file(&output).unwrap();
    }

    #[test]
    fn test_write_summary_produces_json() {
        let input = temp_path("grade_report_test_summary_in.csv");
        let output = temp_path("grade_report_test_summary_out.json");
        write_roster(&input);
        let _ = fs::remove_file(&output);

        let summary = write_summary(&input, &output).unwrap();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.graded, 2);
        assert_eq!(summary.invalid, 1);

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("\"schema_version\""));
        assert!(content.contains("\"overall\""));

        fs::remove_file(&input).unwrap();
        fs::remove_file(&output).unwrap();
    }
}
