//! Dashboard analytics composed from the attendance and marks aggregators.

pub mod attendance;
pub mod marks;

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    data::{
        attendance::{AttendanceRepository, ATTENDANCE_PRESENT},
        branch::BranchRepository,
        exam::ExamRepository,
        library::LibraryRepository,
        student::StudentRepository,
        subject::SubjectRepository,
    },
    error::Error,
    model::api::{
        AttendanceSummaryDto, GlobalStatsDto, MarkSummaryDto, StatsScopeParams, SubjectStatsDto,
    },
};

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    /// Creates a new instance of [`StatsService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves a scope filter to branch ids. `branch_id` wins when both are
    /// given; `None` means the whole college.
    async fn scope_branch_ids(&self, scope: &StatsScopeParams) -> Result<Option<Vec<i32>>, Error> {
        if let Some(branch_id) = scope.branch_id {
            return Ok(Some(vec![branch_id]));
        }

        if let Some(batch_id) = scope.batch_id {
            let branch_ids = BranchRepository::new(self.db).ids_by_batch(batch_id).await?;

            return Ok(Some(branch_ids));
        }

        Ok(None)
    }

    /// Summary statistics for a scope.
    ///
    /// A scope with zero students short-circuits to all-zero stats so stale
    /// aggregates from unrelated scopes can never leak in. The attendance
    /// average is present-rows over total-rows (weighted by volume), not an
    /// average of per-student averages.
    pub async fn global_stats(&self, scope: &StatsScopeParams) -> Result<GlobalStatsDto, Error> {
        let branch_ids = self.scope_branch_ids(scope).await?;

        let student_ids = StudentRepository::new(self.db)
            .ids_in_branches(branch_ids.as_deref())
            .await?;

        if student_ids.is_empty() {
            return Ok(GlobalStatsDto::default());
        }

        let attendance_rows = AttendanceRepository::new(self.db)
            .for_students(&student_ids)
            .await?;
        let present_rows = attendance_rows
            .iter()
            .filter(|row| row.status == ATTENDANCE_PRESENT)
            .count() as u32;
        let avg_attendance = attendance::percentage(present_rows, attendance_rows.len() as u32);

        let mark_rows = ExamRepository::new(self.db)
            .marks_for_students(&student_ids)
            .await?;
        let avg_marks = mean_mark_percentage(&mark_rows);

        let total_books_issued = LibraryRepository::new(self.db)
            .count_issued_for_students(&student_ids)
            .await?;

        Ok(GlobalStatsDto {
            total_students: student_ids.len() as u64,
            avg_attendance,
            avg_marks,
            total_books_issued,
        })
    }

    /// Per-subject attendance and marks averages for a scope.
    ///
    /// Every subject in scope gets a row, zeroed when it has no records, so
    /// dashboards always see the full subject list.
    pub async fn subject_stats(
        &self,
        scope: &StatsScopeParams,
    ) -> Result<Vec<SubjectStatsDto>, Error> {
        let branch_ids = self.scope_branch_ids(scope).await?;

        let subjects = SubjectRepository::new(self.db)
            .list_in_branches(branch_ids.as_deref())
            .await?;
        let student_ids = StudentRepository::new(self.db)
            .ids_in_branches(branch_ids.as_deref())
            .await?;

        if student_ids.is_empty() {
            return Ok(subjects
                .into_iter()
                .map(|subject| SubjectStatsDto {
                    subject_id: subject.id,
                    code: subject.code,
                    name: subject.name,
                    avg_attendance: 0.0,
                    avg_marks: 0.0,
                })
                .collect());
        }

        // (total rows, present rows) per subject
        let mut attendance_by_subject: HashMap<i32, (u32, u32)> = HashMap::new();
        for row in AttendanceRepository::new(self.db)
            .for_students(&student_ids)
            .await?
        {
            let (total, present) = attendance_by_subject.entry(row.subject_id).or_default();
            *total += 1;
            if row.status == ATTENDANCE_PRESENT {
                *present += 1;
            }
        }

        let mut mark_percentages_by_subject: HashMap<i32, Vec<f64>> = HashMap::new();
        for (mark, exam) in ExamRepository::new(self.db)
            .marks_for_students(&student_ids)
            .await?
        {
            if let Some(exam) = exam {
                mark_percentages_by_subject
                    .entry(exam.subject_id)
                    .or_default()
                    .push(marks::mark_percentage(mark.marks_obtained, exam.total_marks));
            }
        }

        Ok(subjects
            .into_iter()
            .map(|subject| {
                let (total, present) = attendance_by_subject
                    .get(&subject.id)
                    .copied()
                    .unwrap_or((0, 0));
                let percentages = mark_percentages_by_subject
                    .get(&subject.id)
                    .map(Vec::as_slice)
                    .unwrap_or(&[]);

                SubjectStatsDto {
                    subject_id: subject.id,
                    code: subject.code,
                    name: subject.name,
                    avg_attendance: attendance::percentage(present, total),
                    avg_marks: mean(percentages),
                }
            })
            .collect())
    }

    /// Per-(subject, month) attendance summaries for one student
    pub async fn student_attendance(
        &self,
        student_id: i32,
    ) -> Result<Vec<AttendanceSummaryDto>, Error> {
        let rows = AttendanceRepository::new(self.db)
            .for_student(student_id)
            .await?;

        Ok(attendance::summarize(&rows))
    }

    /// Per-exam mark summaries for one student
    pub async fn student_marks(&self, student_id: i32) -> Result<Vec<MarkSummaryDto>, Error> {
        let rows = ExamRepository::new(self.db)
            .marks_for_student(student_id)
            .await?;

        Ok(marks::summarize(rows))
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    values.iter().sum::<f64>() / values.len() as f64
}

fn mean_mark_percentage(
    rows: &[(entity::exam_mark::Model, Option<entity::exam::Model>)],
) -> f64 {
    let percentages: Vec<f64> = rows
        .iter()
        .filter_map(|(mark, exam)| {
            exam.as_ref()
                .map(|exam| marks::mark_percentage(mark.marks_obtained, exam.total_marks))
        })
        .collect();

    mean(&percentages)
}
