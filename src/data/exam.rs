use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

pub struct ExamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExamRepository<'a> {
    /// Creates a new instance of [`ExamRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Record a student's mark for an exam.
    ///
    /// At most one mark may exist per (exam, student); an existing row is
    /// updated in place, otherwise a new row is inserted.
    pub async fn upsert_mark(
        &self,
        exam_id: i32,
        student_id: i32,
        marks_obtained: i32,
    ) -> Result<entity::exam_mark::Model, DbErr> {
        let existing = entity::prelude::ExamMark::find()
            .filter(entity::exam_mark::Column::ExamId.eq(exam_id))
            .filter(entity::exam_mark::Column::StudentId.eq(student_id))
            .one(self.db)
            .await?;

        match existing {
            Some(mark) => {
                let mut mark: entity::exam_mark::ActiveModel = mark.into();
                mark.marks_obtained = ActiveValue::Set(marks_obtained);

                mark.update(self.db).await
            }
            None => {
                let mark = entity::exam_mark::ActiveModel {
                    exam_id: ActiveValue::Set(exam_id),
                    student_id: ActiveValue::Set(student_id),
                    marks_obtained: ActiveValue::Set(marks_obtained),
                    ..Default::default()
                };

                mark.insert(self.db).await
            }
        }
    }

    /// A student's marks joined with their exams
    pub async fn marks_for_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<(entity::exam_mark::Model, Option<entity::exam::Model>)>, DbErr> {
        entity::prelude::ExamMark::find()
            .filter(entity::exam_mark::Column::StudentId.eq(student_id))
            .find_also_related(entity::prelude::Exam)
            .all(self.db)
            .await
    }

    /// Marks joined with their exams for a set of students
    pub async fn marks_for_students(
        &self,
        student_ids: &[i32],
    ) -> Result<Vec<(entity::exam_mark::Model, Option<entity::exam::Model>)>, DbErr> {
        entity::prelude::ExamMark::find()
            .filter(entity::exam_mark::Column::StudentId.is_in(student_ids.iter().copied()))
            .find_also_related(entity::prelude::Exam)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use registrar_test_utils::prelude::*;

    use crate::data::exam::ExamRepository;

    async fn setup() -> Result<(TestSetup, entity::student::Model, entity::exam::Model), TestError> {
        let test = test_setup_with_core_tables!()?;
        let db = &test.state.db;

        let batch = fixtures::insert_batch(db, "2024").await?;
        let branch = fixtures::insert_branch(db, batch.id, "Computer Science").await?;
        let student = fixtures::insert_student(db, branch.id, "CS-001", "Ada", "pw").await?;
        let subject = fixtures::insert_subject(db, branch.id, "CS101", "Algorithms").await?;
        let exam = fixtures::insert_exam(
            db,
            subject.id,
            "Midterm",
            100,
            NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
        )
        .await?;

        Ok((test, student, exam))
    }

    #[tokio::test]
    async fn inserts_mark_when_none_exists() -> Result<(), TestError> {
        let (test, student, exam) = setup().await?;
        let repo = ExamRepository::new(&test.state.db);

        let mark = repo.upsert_mark(exam.id, student.id, 72).await?;

        assert_eq!(mark.marks_obtained, 72);

        Ok(())
    }

    #[tokio::test]
    /// A second upsert for the same (exam, student) updates in place
    async fn updates_existing_mark_in_place() -> Result<(), TestError> {
        let (test, student, exam) = setup().await?;
        let repo = ExamRepository::new(&test.state.db);

        let first = repo.upsert_mark(exam.id, student.id, 72).await?;
        let second = repo.upsert_mark(exam.id, student.id, 85).await?;

        assert_eq!(first.id, second.id);
        assert_eq!(second.marks_obtained, 85);

        let marks = repo.marks_for_student(student.id).await?;
        assert_eq!(marks.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn joins_marks_with_exams() -> Result<(), TestError> {
        let (test, student, exam) = setup().await?;
        let repo = ExamRepository::new(&test.state.db);

        repo.upsert_mark(exam.id, student.id, 72).await?;

        let marks = repo.marks_for_students(&[student.id]).await?;

        assert_eq!(marks.len(), 1);
        let (mark, joined_exam) = &marks[0];
        assert_eq!(mark.marks_obtained, 72);
        assert_eq!(joined_exam.as_ref().unwrap().name, "Midterm");

        Ok(())
    }
}
