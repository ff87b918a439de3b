use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LibraryError {
    #[error("Book ID {0} not found")]
    BookNotFound(i32),
    #[error("Issue record ID {0} not found")]
    IssueNotFound(i32),
    #[error("No copies of book ID {0} are currently available")]
    NoCopiesAvailable(i32),
    #[error("Issue record ID {0} has already been returned")]
    AlreadyReturned(i32),
}

impl IntoResponse for LibraryError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::BookNotFound(_) => (StatusCode::NOT_FOUND, "Book not found".to_string()),
            Self::IssueNotFound(_) => (StatusCode::NOT_FOUND, "Issue record not found".to_string()),
            Self::NoCopiesAvailable(_) => (
                StatusCode::CONFLICT,
                "No copies of this book are currently available".to_string(),
            ),
            Self::AlreadyReturned(_) => (
                StatusCode::CONFLICT,
                "This book has already been returned".to_string(),
            ),
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
