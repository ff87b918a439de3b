//! Parsed login input and the validation boundary in front of the login flow.
//!
//! Request bodies arrive loosely typed; [`LoginCredentials::parse`] is the
//! single place they are checked before any lookup or verification runs.

use serde::{Deserialize, Serialize};

use crate::{error::auth::AuthError, model::api::LoginDto};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Student,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Student => "student",
        }
    }
}

/// A validated login request.
#[derive(Clone, Debug, PartialEq)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl LoginCredentials {
    /// Validates a raw login body: all fields present, a known role, and for
    /// students a well-formed roll number. Runs before any core logic.
    pub fn parse(dto: LoginDto) -> Result<Self, AuthError> {
        let username = dto.username.trim();

        if username.is_empty() || dto.password.is_empty() || dto.role.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let role = match dto.role.as_str() {
            "admin" => Role::Admin,
            "student" => Role::Student,
            other => return Err(AuthError::InvalidRole(other.to_string())),
        };

        if role == Role::Student && !is_valid_roll_no(username) {
            return Err(AuthError::MalformedRollNo);
        }

        Ok(Self {
            username: username.to_string(),
            password: dto.password,
            role,
        })
    }
}

/// Roll numbers are ASCII alphanumeric plus `-`, `.`, and `/`.
pub fn is_valid_roll_no(roll_no: &str) -> bool {
    !roll_no.is_empty()
        && roll_no
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(username: &str, password: &str, role: &str) -> LoginDto {
        LoginDto {
            username: username.to_string(),
            password: password.to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn parses_valid_student_credentials() {
        let result = LoginCredentials::parse(dto("CS-2024/001", "secret", "student"));

        let credentials = result.unwrap();
        assert_eq!(credentials.username, "CS-2024/001");
        assert_eq!(credentials.role, Role::Student);
    }

    #[test]
    fn parses_valid_admin_credentials() {
        let result = LoginCredentials::parse(dto("registrar", "secret", "admin"));

        assert_eq!(result.unwrap().role, Role::Admin);
    }

    #[test]
    fn trims_surrounding_whitespace_from_username() {
        let result = LoginCredentials::parse(dto("  TEST-001  ", "secret", "student"));

        assert_eq!(result.unwrap().username, "TEST-001");
    }

    #[test]
    fn rejects_missing_fields() {
        assert_eq!(
            LoginCredentials::parse(dto("", "secret", "student")),
            Err(AuthError::MissingCredentials)
        );
        assert_eq!(
            LoginCredentials::parse(dto("TEST-001", "", "student")),
            Err(AuthError::MissingCredentials)
        );
        assert_eq!(
            LoginCredentials::parse(dto("TEST-001", "secret", "")),
            Err(AuthError::MissingCredentials)
        );
    }

    #[test]
    fn rejects_unknown_role() {
        assert_eq!(
            LoginCredentials::parse(dto("TEST-001", "secret", "librarian")),
            Err(AuthError::InvalidRole("librarian".to_string()))
        );
    }

    #[test]
    fn rejects_malformed_student_roll_no() {
        assert_eq!(
            LoginCredentials::parse(dto("TEST 001", "secret", "student")),
            Err(AuthError::MalformedRollNo)
        );
        assert_eq!(
            LoginCredentials::parse(dto("TEST@001", "secret", "student")),
            Err(AuthError::MalformedRollNo)
        );
    }

    #[test]
    fn admin_usernames_are_not_roll_checked() {
        let result = LoginCredentials::parse(dto("head registrar", "secret", "admin"));

        assert!(result.is_ok());
    }
}
