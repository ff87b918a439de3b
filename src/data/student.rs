use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QuerySelect,
};

pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    /// Creates a new instance of [`StudentRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new student with an already-hashed password
    pub async fn create(
        &self,
        roll_no: &str,
        name: &str,
        password_hash: &str,
        branch_id: i32,
    ) -> Result<entity::student::Model, DbErr> {
        let student = entity::student::ActiveModel {
            roll_no: ActiveValue::Set(roll_no.to_string()),
            name: ActiveValue::Set(name.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            password: ActiveValue::Set(None),
            failed_login_attempts: ActiveValue::Set(0),
            lockout_until: ActiveValue::Set(None),
            branch_id: ActiveValue::Set(branch_id),
            security_question: ActiveValue::Set(None),
            security_answer: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        student.insert(self.db).await
    }

    /// Get a student by its unique roll number
    pub async fn find_by_roll_no(
        &self,
        roll_no: &str,
    ) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find()
            .filter(entity::student::Column::RollNo.eq(roll_no))
            .one(self.db)
            .await
    }

    /// Persist a failed login attempt, locking the account when the lockout
    /// tracker says so
    pub async fn record_login_failure(
        &self,
        student_id: i32,
        failed_attempts: i32,
        lockout_until: Option<NaiveDateTime>,
    ) -> Result<entity::student::Model, DbErr> {
        let student = entity::student::ActiveModel {
            id: ActiveValue::Unchanged(student_id),
            failed_login_attempts: ActiveValue::Set(failed_attempts),
            lockout_until: ActiveValue::Set(lockout_until),
            ..Default::default()
        };

        student.update(self.db).await
    }

    /// Clear the failure counter and any lockout after a successful login
    pub async fn reset_login_state(
        &self,
        student_id: i32,
    ) -> Result<entity::student::Model, DbErr> {
        let student = entity::student::ActiveModel {
            id: ActiveValue::Unchanged(student_id),
            failed_login_attempts: ActiveValue::Set(0),
            lockout_until: ActiveValue::Set(None),
            ..Default::default()
        };

        student.update(self.db).await
    }

    /// Student ids, optionally restricted to a set of branches.
    ///
    /// `None` means the whole college.
    pub async fn ids_in_branches(&self, branch_ids: Option<&[i32]>) -> Result<Vec<i32>, DbErr> {
        let mut query = entity::prelude::Student::find()
            .select_only()
            .column(entity::student::Column::Id);

        if let Some(branch_ids) = branch_ids {
            query = query
                .filter(entity::student::Column::BranchId.is_in(branch_ids.iter().copied()));
        }

        query.into_tuple::<i32>().all(self.db).await
    }

    /// Count of students, optionally restricted to a set of branches
    pub async fn count_in_branches(&self, branch_ids: Option<&[i32]>) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Student::find();

        if let Some(branch_ids) = branch_ids {
            query = query
                .filter(entity::student::Column::BranchId.is_in(branch_ids.iter().copied()));
        }

        query.count(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use registrar_test_utils::prelude::*;

    use crate::data::student::StudentRepository;

    async fn setup() -> Result<(TestSetup, entity::branch::Model), TestError> {
        let test = test_setup_with_core_tables!()?;
        let db = &test.state.db;

        let batch = fixtures::insert_batch(db, "2024").await?;
        let branch = fixtures::insert_branch(db, batch.id, "Computer Science").await?;

        Ok((test, branch))
    }

    mod create_tests {
        use super::setup;
        use registrar_test_utils::prelude::*;

        use crate::data::student::StudentRepository;

        #[tokio::test]
        async fn creates_student_with_zeroed_lockout_state() -> Result<(), TestError> {
            let (test, branch) = setup().await?;
            let repo = StudentRepository::new(&test.state.db);

            let student = repo
                .create("CS-001", "Ada Lovelace", "$2b$04$hash", branch.id)
                .await?;

            assert_eq!(student.failed_login_attempts, 0);
            assert!(student.lockout_until.is_none());
            assert!(student.password.is_none());

            Ok(())
        }

        #[tokio::test]
        async fn rejects_duplicate_roll_no() -> Result<(), TestError> {
            let (test, branch) = setup().await?;
            let repo = StudentRepository::new(&test.state.db);

            repo.create("CS-001", "Ada Lovelace", "$2b$04$hash", branch.id)
                .await?;
            let result = repo
                .create("CS-001", "Grace Hopper", "$2b$04$hash", branch.id)
                .await;

            assert!(result.is_err());

            Ok(())
        }
    }

    #[tokio::test]
    async fn records_and_resets_login_failures() -> Result<(), TestError> {
        let (test, branch) = setup().await?;
        let db = &test.state.db;
        let repo = StudentRepository::new(db);
        let student = fixtures::insert_student(db, branch.id, "CS-001", "Ada", "pw").await?;

        // Whole seconds, so the value round-trips the database exactly
        let until = chrono::NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(10, 2, 0)
            .unwrap();
        let locked = repo
            .record_login_failure(student.id, 3, Some(until))
            .await?;

        assert_eq!(locked.failed_login_attempts, 3);
        assert_eq!(locked.lockout_until, Some(until));

        let reset = repo.reset_login_state(student.id).await?;

        assert_eq!(reset.failed_login_attempts, 0);
        assert!(reset.lockout_until.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn scopes_ids_and_counts_by_branch() -> Result<(), TestError> {
        let (test, branch) = setup().await?;
        let db = &test.state.db;
        let batch = fixtures::insert_batch(db, "2025").await?;
        let other_branch = fixtures::insert_branch(db, batch.id, "Mechanical").await?;

        let a = fixtures::insert_student(db, branch.id, "CS-001", "Ada", "pw").await?;
        let b = fixtures::insert_student(db, branch.id, "CS-002", "Grace", "pw").await?;
        fixtures::insert_student(db, other_branch.id, "ME-001", "Karl", "pw").await?;

        let repo = StudentRepository::new(db);

        let scoped = repo.ids_in_branches(Some(&[branch.id])).await?;
        assert_eq!(scoped, vec![a.id, b.id]);

        assert_eq!(repo.count_in_branches(Some(&[branch.id])).await?, 2);
        assert_eq!(repo.count_in_branches(None).await?, 3);

        Ok(())
    }
}
