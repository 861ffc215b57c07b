use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

/// Everything a handler can fail with. The client only ever sees the
/// short messages below; full detail stays in the server log.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Username and password are required")]
    MissingCredentials,
    #[error("User already exists")]
    UserExists,
    #[error("User does not exist")]
    UnknownUser,
    #[error("Wrong password")]
    WrongPassword,
    #[error("{0}")]
    Unauthorized(&'static str),
    #[error("Server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingCredentials
            | ApiError::UserExists
            | ApiError::UnknownUser
            | ApiError::WrongPassword => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal(e) => error!(error = ?e, "request failed"),
            other => warn!(error = %other, "request rejected"),
        }
        (self.status(), self.to_string()).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            // Unique-constraint violation on users.username: the insert
            // lost the race or the name was simply taken.
            sqlx::Error::Database(db) if db.is_unique_violation() => ApiError::UserExists,
            other => ApiError::Internal(other.into()),
        }
    }
}
