//! Attendance aggregation.
//!
//! Reduces raw daily present/absent records into per-(subject, month)
//! summaries. Pure functions over already-fetched rows; an empty input never
//! divides by zero.

use std::collections::BTreeMap;

use crate::{data::attendance::ATTENDANCE_PRESENT, model::api::AttendanceSummaryDto};

/// Present days over total days, as a 0-100 percentage. 0 when there are no
/// days.
pub fn percentage(present_days: u32, total_days: u32) -> f64 {
    if total_days == 0 {
        return 0.0;
    }

    present_days as f64 / total_days as f64 * 100.0
}

/// Attendance status label for a percentage.
pub fn attendance_status(percentage: f64) -> &'static str {
    if percentage >= 80.0 {
        "Good"
    } else if percentage >= 60.0 {
        "Average"
    } else {
        "Poor"
    }
}

/// Groups raw records by (subject, calendar month) and computes each group's
/// totals, percentage, and status label. Output is sorted by subject then
/// month.
pub fn summarize(rows: &[entity::daily_attendance::Model]) -> Vec<AttendanceSummaryDto> {
    let mut groups: BTreeMap<(i32, String), (u32, u32)> = BTreeMap::new();

    for row in rows {
        let key = (row.subject_id, row.date.format("%Y-%m").to_string());
        let (total_days, present_days) = groups.entry(key).or_default();

        *total_days += 1;
        if row.status == ATTENDANCE_PRESENT {
            *present_days += 1;
        }
    }

    groups
        .into_iter()
        .map(|((subject_id, month), (total_days, present_days))| {
            let percentage = percentage(present_days, total_days);

            AttendanceSummaryDto {
                subject_id,
                month,
                total_days,
                present_days,
                percentage,
                status: attendance_status(percentage).to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::data::attendance::{ATTENDANCE_ABSENT, ATTENDANCE_PRESENT};

    fn record(subject_id: i32, date: (i32, u32, u32), status: &str) -> entity::daily_attendance::Model {
        entity::daily_attendance::Model {
            id: 0,
            student_id: 1,
            subject_id,
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            status: status.to_string(),
        }
    }

    #[test]
    fn empty_input_produces_no_groups() {
        assert!(summarize(&[]).is_empty());
    }

    #[test]
    fn percentage_of_zero_days_is_zero() {
        assert_eq!(percentage(0, 0), 0.0);
    }

    #[test]
    fn groups_by_subject_and_month() {
        let rows = vec![
            record(1, (2026, 3, 2), ATTENDANCE_PRESENT),
            record(1, (2026, 3, 3), ATTENDANCE_ABSENT),
            record(1, (2026, 4, 1), ATTENDANCE_PRESENT),
            record(2, (2026, 3, 2), ATTENDANCE_PRESENT),
        ];

        let summaries = summarize(&rows);

        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].subject_id, 1);
        assert_eq!(summaries[0].month, "2026-03");
        assert_eq!(summaries[0].total_days, 2);
        assert_eq!(summaries[0].present_days, 1);
        assert_eq!(summaries[0].percentage, 50.0);
        assert_eq!(summaries[1].month, "2026-04");
        assert_eq!(summaries[2].subject_id, 2);
    }

    #[test]
    /// Percentage stays within 0-100 and hits 100 only when every row is
    /// present
    fn percentage_bounds() {
        let all_present = vec![
            record(1, (2026, 3, 2), ATTENDANCE_PRESENT),
            record(1, (2026, 3, 3), ATTENDANCE_PRESENT),
        ];
        let none_present = vec![
            record(1, (2026, 3, 2), ATTENDANCE_ABSENT),
            record(1, (2026, 3, 3), ATTENDANCE_ABSENT),
        ];
        let mixed = vec![
            record(1, (2026, 3, 2), ATTENDANCE_PRESENT),
            record(1, (2026, 3, 3), ATTENDANCE_ABSENT),
            record(1, (2026, 3, 4), ATTENDANCE_ABSENT),
        ];

        assert_eq!(summarize(&all_present)[0].percentage, 100.0);
        assert_eq!(summarize(&none_present)[0].percentage, 0.0);

        let mixed_pct = summarize(&mixed)[0].percentage;
        assert!(mixed_pct > 0.0 && mixed_pct < 100.0);
    }

    #[test]
    fn status_labels_at_boundaries() {
        assert_eq!(attendance_status(100.0), "Good");
        assert_eq!(attendance_status(80.0), "Good");
        assert_eq!(attendance_status(79.9), "Average");
        assert_eq!(attendance_status(60.0), "Average");
        assert_eq!(attendance_status(59.9), "Poor");
        assert_eq!(attendance_status(0.0), "Poor");
    }
}
