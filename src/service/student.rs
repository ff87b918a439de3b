use sea_orm::DatabaseConnection;

use crate::{
    data::student::StudentRepository,
    error::{auth::AuthError, Error},
    model::auth::is_valid_roll_no,
    service::auth::password,
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    /// Creates a new instance of [`StudentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a student, hashing the password for storage.
    ///
    /// The roll number must be well-formed and not already taken.
    pub async fn create_student(
        &self,
        roll_no: &str,
        name: &str,
        raw_password: &str,
        branch_id: i32,
    ) -> Result<entity::student::Model, Error> {
        let roll_no = roll_no.trim();

        if !is_valid_roll_no(roll_no) {
            return Err(AuthError::MalformedRollNo.into());
        }

        let student_repository = StudentRepository::new(self.db);

        if student_repository.find_by_roll_no(roll_no).await?.is_some() {
            return Err(Error::Conflict(format!(
                "Roll number {roll_no} already exists"
            )));
        }

        let password_hash = password::hash_password(raw_password)?;

        let student = student_repository
            .create(roll_no, name, &password_hash, branch_id)
            .await?;

        Ok(student)
    }
}
