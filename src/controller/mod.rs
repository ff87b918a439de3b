//! HTTP controller endpoints for the Registrar web API.
//!
//! Axum handlers that validate inputs, call services, and translate results
//! into HTTP responses. They integrate with tower-sessions for session
//! management and use utoipa for OpenAPI documentation.

pub mod attendance;
pub mod auth;
pub mod batch;
pub mod exam;
pub mod library;
pub mod notice;
pub mod stats;
pub mod student;
