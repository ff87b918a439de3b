//! Marks aggregation.
//!
//! Per-record percentage and letter-grade computation over exam marks joined
//! with their exams. One canonical grade table is used everywhere.

use crate::model::api::MarkSummaryDto;

/// Marks obtained over the exam total, as a 0-100 percentage. 0 when the
/// exam total is zero.
pub fn mark_percentage(marks_obtained: i32, total_marks: i32) -> f64 {
    if total_marks <= 0 {
        return 0.0;
    }

    marks_obtained as f64 / total_marks as f64 * 100.0
}

/// The canonical percentage-to-letter-grade table.
pub fn grade_for(percentage: f64) -> &'static str {
    if percentage >= 90.0 {
        "A+"
    } else if percentage >= 85.0 {
        "A"
    } else if percentage >= 80.0 {
        "B+"
    } else if percentage >= 75.0 {
        "B"
    } else if percentage >= 60.0 {
        "C"
    } else if percentage >= 50.0 {
        "D"
    } else {
        "F"
    }
}

/// Computes a per-exam summary for each mark row. Marks whose exam no longer
/// exists are skipped. Output is sorted by exam date, then exam name.
pub fn summarize(
    rows: Vec<(entity::exam_mark::Model, Option<entity::exam::Model>)>,
) -> Vec<MarkSummaryDto> {
    let mut summaries: Vec<MarkSummaryDto> = rows
        .into_iter()
        .filter_map(|(mark, exam)| {
            let exam = exam?;
            let percentage = mark_percentage(mark.marks_obtained, exam.total_marks);

            Some(MarkSummaryDto {
                subject_id: exam.subject_id,
                test_name: exam.name,
                month: exam.date.format("%Y-%m").to_string(),
                marks_obtained: mark.marks_obtained,
                total_marks: exam.total_marks,
                percentage,
                grade: grade_for(percentage).to_string(),
            })
        })
        .collect();

    summaries.sort_by(|a, b| (&a.month, &a.test_name).cmp(&(&b.month, &b.test_name)));

    summaries
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn grade_table_breakpoints() {
        assert_eq!(grade_for(95.0), "A+");
        assert_eq!(grade_for(90.0), "A+");
        assert_eq!(grade_for(89.9), "A");
        assert_eq!(grade_for(85.0), "A");
        assert_eq!(grade_for(80.0), "B+");
        assert_eq!(grade_for(75.0), "B");
        assert_eq!(grade_for(60.0), "C");
        assert_eq!(grade_for(50.0), "D");
        assert_eq!(grade_for(49.9), "F");
        assert_eq!(grade_for(0.0), "F");
    }

    #[test]
    /// Higher percentage never yields a strictly worse grade
    fn grade_is_monotonic_in_percentage() {
        fn rank(grade: &str) -> u8 {
            match grade {
                "A+" => 6,
                "A" => 5,
                "B+" => 4,
                "B" => 3,
                "C" => 2,
                "D" => 1,
                _ => 0,
            }
        }

        let mut previous = rank(grade_for(0.0));
        for tenths in 0..=1000 {
            let current = rank(grade_for(tenths as f64 / 10.0));
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn zero_total_marks_is_zero_percent() {
        assert_eq!(mark_percentage(10, 0), 0.0);
        assert_eq!(mark_percentage(0, 0), 0.0);
    }

    fn mark(id: i32, marks_obtained: i32) -> entity::exam_mark::Model {
        entity::exam_mark::Model {
            id,
            exam_id: id,
            student_id: 1,
            marks_obtained,
        }
    }

    fn exam(id: i32, name: &str, total_marks: i32, month: u32) -> entity::exam::Model {
        entity::exam::Model {
            id,
            name: name.to_string(),
            subject_id: 1,
            total_marks,
            date: NaiveDate::from_ymd_opt(2026, month, 15).unwrap(),
        }
    }

    #[test]
    fn summarize_computes_percentage_and_grade_per_record() {
        let rows = vec![
            (mark(1, 92), Some(exam(1, "Final", 100, 5))),
            (mark(2, 30), Some(exam(2, "Midterm", 50, 3))),
        ];

        let summaries = summarize(rows);

        assert_eq!(summaries.len(), 2);
        // Sorted by month: the midterm comes first
        assert_eq!(summaries[0].test_name, "Midterm");
        assert_eq!(summaries[0].percentage, 60.0);
        assert_eq!(summaries[0].grade, "C");
        assert_eq!(summaries[1].test_name, "Final");
        assert_eq!(summaries[1].grade, "A+");
    }

    #[test]
    fn summarize_skips_marks_without_an_exam() {
        let rows = vec![(mark(1, 40), None)];

        assert!(summarize(rows).is_empty());
    }

    #[test]
    fn summarize_of_empty_input_is_empty() {
        assert!(summarize(Vec::new()).is_empty());
    }
}
