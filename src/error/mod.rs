//! Error types for the Registrar server application.
//!
//! Domain-specific error enums (authentication, configuration, library
//! circulation) are aggregated into a single [`Error`] type. All errors
//! implement `IntoResponse` for axum and use `thiserror` for ergonomic
//! definitions with automatic `Display` and `Error` implementations.

pub mod auth;
pub mod config;
pub mod library;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{auth::AuthError, config::ConfigError, library::LibraryError},
    model::api::ErrorDto,
};

/// Main error type for the Registrar server application.
///
/// Aggregates domain-specific error types and external library errors into a
/// single unified error type, with `#[from]` conversions so the `?` operator
/// works across layers. The `IntoResponse` implementation maps errors to
/// appropriate HTTP responses for API consumers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (validation, credentials, lockout, maintenance).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Library circulation error (missing book/issue, no copies, double return).
    #[error(transparent)]
    LibraryError(#[from] LibraryError),
    /// A unique key already exists (e.g. duplicate roll number on create).
    #[error("Conflict: {0}")]
    Conflict(String),
    /// Malformed request input caught at the boundary.
    #[error("Validation failed: {0}")]
    Validation(String),
    /// Password hashing error.
    #[error(transparent)]
    BcryptError(#[from] bcrypt::BcryptError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::LibraryError(err) => err.into_response(),
            Self::Conflict(message) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: message })).into_response()
            }
            Self::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 response.
///
/// Logs the full error message for debugging but returns a generic message to
/// the client to avoid exposing internal details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
