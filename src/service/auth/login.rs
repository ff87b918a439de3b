//! The login flow state machine.
//!
//! Orchestrates the maintenance gate, role dispatch, lockout checks,
//! credential verification, failure-counter updates, and audit logging.
//! Session establishment is left to the controller, which must save the
//! session before responding.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    data::{
        admin::{AdminRepository, ADMIN_STATUS_ACTIVE},
        audit::AuditLogRepository,
        student::StudentRepository,
    },
    error::{auth::AuthError, Error},
    model::auth::{LoginCredentials, Role},
    service::auth::{
        lockout::{self, FailureOutcome},
        password,
    },
};

/// The principal a successful login resolves to.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: i32,
    pub role: Role,
    /// Admin name, or the student's roll number.
    pub username: String,
    pub name: String,
    /// `admin` or `super_admin`; only present for admin logins.
    pub admin_role: Option<String>,
}

pub struct LoginService<'a> {
    db: &'a DatabaseConnection,
    config: &'a Config,
}

impl<'a> LoginService<'a> {
    /// Creates a new instance of [`LoginService`]
    pub fn new(db: &'a DatabaseConnection, config: &'a Config) -> Self {
        Self { db, config }
    }

    /// Runs the full login flow for already-validated credentials.
    ///
    /// The maintenance gate precedes every lookup.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthenticatedUser, Error> {
        if self.config.maintenance_mode {
            return Err(AuthError::MaintenanceMode.into());
        }

        match credentials.role {
            Role::Admin => self.admin_login(credentials).await,
            Role::Student => self.student_login(credentials).await,
        }
    }

    /// Admin logins verify against the hash only; there is no legacy
    /// fallback and no attempts-remaining hint for admins.
    async fn admin_login(&self, credentials: &LoginCredentials) -> Result<AuthenticatedUser, Error> {
        let admin_repository = AdminRepository::new(self.db);

        let admin = admin_repository
            .find_by_name(&credentials.username)
            .await?
            .ok_or(AuthError::UnknownUsername)?;

        if !password::verify_password(&credentials.password, &admin.password_hash) {
            return Err(AuthError::InvalidAdminPassword.into());
        }

        if admin.status != ADMIN_STATUS_ACTIVE {
            return Err(AuthError::AccountInactive.into());
        }

        admin_repository
            .update_last_login(admin.id, Utc::now().naive_utc())
            .await?;

        AuditLogRepository::new(self.db)
            .record(&admin.name, "admin_login", None)
            .await?;

        tracing::info!(admin = %admin.name, "admin logged in");

        Ok(AuthenticatedUser {
            user_id: admin.id,
            role: Role::Admin,
            username: admin.name.clone(),
            name: admin.name,
            admin_role: Some(admin.role),
        })
    }

    async fn student_login(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<AuthenticatedUser, Error> {
        let student_repository = StudentRepository::new(self.db);

        let student = student_repository
            .find_by_roll_no(&credentials.username)
            .await?
            .ok_or(AuthError::UnknownRollNo)?;

        let now = Utc::now().naive_utc();

        // The lockout check runs before verification: while locked, even a
        // correct password is rejected.
        if let Some(minutes_remaining) = lockout::remaining_lockout(student.lockout_until, now) {
            return Err(AuthError::AccountLocked { minutes_remaining }.into());
        }

        let verified = password::verify_password(&credentials.password, &student.password_hash)
            || student
                .password
                .as_deref()
                .is_some_and(|stored| password::legacy_plaintext_matches(&credentials.password, stored));

        if !verified {
            let policy = self.config.lockout_policy();

            return match lockout::register_failure(student.failed_login_attempts, &policy, now) {
                FailureOutcome::Warned {
                    failed_attempts,
                    attempts_remaining,
                } => {
                    student_repository
                        .record_login_failure(student.id, failed_attempts, None)
                        .await?;

                    Err(AuthError::InvalidPassword { attempts_remaining }.into())
                }
                FailureOutcome::Locked {
                    failed_attempts,
                    until,
                    minutes_remaining,
                } => {
                    student_repository
                        .record_login_failure(student.id, failed_attempts, Some(until))
                        .await?;

                    tracing::warn!(roll_no = %student.roll_no, "student account locked");

                    Err(AuthError::AccountLocked { minutes_remaining }.into())
                }
            };
        }

        if student.failed_login_attempts > 0 || student.lockout_until.is_some() {
            student_repository.reset_login_state(student.id).await?;
        }

        Ok(AuthenticatedUser {
            user_id: student.id,
            role: Role::Student,
            username: student.roll_no,
            name: student.name,
            admin_role: None,
        })
    }
}
