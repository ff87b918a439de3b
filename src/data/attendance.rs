use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

pub const ATTENDANCE_PRESENT: &str = "present";
pub const ATTENDANCE_ABSENT: &str = "absent";

pub struct AttendanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceRepository<'a> {
    /// Creates a new instance of [`AttendanceRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Record attendance for a student on a subject and date.
    ///
    /// At most one record may exist per (student, subject, date); this is
    /// enforced by deleting any existing record before inserting, not by a
    /// database constraint.
    pub async fn mark(
        &self,
        student_id: i32,
        subject_id: i32,
        date: NaiveDate,
        status: &str,
    ) -> Result<entity::daily_attendance::Model, DbErr> {
        entity::prelude::DailyAttendance::delete_many()
            .filter(entity::daily_attendance::Column::StudentId.eq(student_id))
            .filter(entity::daily_attendance::Column::SubjectId.eq(subject_id))
            .filter(entity::daily_attendance::Column::Date.eq(date))
            .exec(self.db)
            .await?;

        let record = entity::daily_attendance::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            subject_id: ActiveValue::Set(subject_id),
            date: ActiveValue::Set(date),
            status: ActiveValue::Set(status.to_string()),
            ..Default::default()
        };

        record.insert(self.db).await
    }

    /// All daily records for one student
    pub async fn for_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<entity::daily_attendance::Model>, DbErr> {
        entity::prelude::DailyAttendance::find()
            .filter(entity::daily_attendance::Column::StudentId.eq(student_id))
            .all(self.db)
            .await
    }

    /// All daily records for a set of students
    pub async fn for_students(
        &self,
        student_ids: &[i32],
    ) -> Result<Vec<entity::daily_attendance::Model>, DbErr> {
        entity::prelude::DailyAttendance::find()
            .filter(entity::daily_attendance::Column::StudentId.is_in(student_ids.iter().copied()))
            .all(self.db)
            .await
    }
}
