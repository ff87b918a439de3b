use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Username, password, and role are all required")]
    MissingCredentials,
    #[error("Unknown login role {0:?}")]
    InvalidRole(String),
    #[error("Roll number contains characters outside the allowed set")]
    MalformedRollNo,
    #[error("No admin account matches the submitted username")]
    UnknownUsername,
    #[error("No student account matches the submitted roll number")]
    UnknownRollNo,
    #[error("Password verification failed, {attempts_remaining} attempts remaining")]
    InvalidPassword { attempts_remaining: u32 },
    #[error("Admin password verification failed")]
    InvalidAdminPassword,
    #[error("Account locked for another {minutes_remaining} minutes")]
    AccountLocked { minutes_remaining: i64 },
    #[error("Admin account is marked inactive")]
    AccountInactive,
    #[error("Login rejected while the system is under maintenance")]
    MaintenanceMode,
    #[error("No user is present in the session")]
    NotLoggedIn,
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorDto { error: message })).into_response()
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingCredentials => error_response(
                StatusCode::BAD_REQUEST,
                "Username, password, and role are required".to_string(),
            ),
            Self::InvalidRole(role) => error_response(
                StatusCode::BAD_REQUEST,
                format!("Invalid role: {role}"),
            ),
            Self::MalformedRollNo => error_response(
                StatusCode::BAD_REQUEST,
                "Invalid roll number format".to_string(),
            ),
            // Unknown identifiers answer 401 with a deliberately terse
            // message; nothing beyond "invalid X" may leak.
            Self::UnknownUsername => error_response(
                StatusCode::UNAUTHORIZED,
                "Invalid username".to_string(),
            ),
            Self::UnknownRollNo => error_response(
                StatusCode::UNAUTHORIZED,
                "Invalid roll number".to_string(),
            ),
            Self::InvalidPassword { attempts_remaining } => error_response(
                StatusCode::UNAUTHORIZED,
                format!("Invalid password, {attempts_remaining} attempts remaining"),
            ),
            Self::InvalidAdminPassword => error_response(
                StatusCode::UNAUTHORIZED,
                "Invalid password".to_string(),
            ),
            Self::AccountLocked { minutes_remaining } => error_response(
                StatusCode::FORBIDDEN,
                format!("Account locked, try again in {minutes_remaining} minutes"),
            ),
            Self::AccountInactive => error_response(
                StatusCode::FORBIDDEN,
                "Account is inactive".to_string(),
            ),
            Self::MaintenanceMode => error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                "System is under maintenance, please try again later".to_string(),
            ),
            Self::NotLoggedIn => error_response(
                StatusCode::UNAUTHORIZED,
                "Not logged in".to_string(),
            ),
        }
    }
}
