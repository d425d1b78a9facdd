//! Backend Error Types
//!
//! [`ApiError`] covers every failure a handler can surface. Expected domain
//! errors carry their own message and status; everything else collapses to
//! an internal error whose details are logged but never returned to the
//! client.

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use thiserror::Error;

/// Errors surfaced by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or duplicate input (e.g. a duplicate email).
    #[error("{0}")]
    Validation(String),

    /// No token was supplied on a protected route.
    #[error("missing credential")]
    MissingCredential,

    /// The supplied token failed signature or expiry checks.
    #[error("invalid or expired credential")]
    InvalidCredential,

    /// Login failed. One message for both unknown email and wrong
    /// password, so accounts cannot be enumerated.
    #[error("invalid email or password")]
    BadCredentials,

    /// An identifier did not resolve to a record.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The multipart body could not be read.
    #[error("malformed multipart body: {0}")]
    Multipart(#[from] MultipartError),

    /// Storage-layer failure.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Password hashing failure.
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token signing failure.
    #[error("token signing failed: {0}")]
    TokenCreation(#[source] jsonwebtoken::errors::Error),

    /// Filesystem failure while storing an upload.
    #[error("file storage failed: {0}")]
    Storage(#[from] std::io::Error),
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Multipart(_) => StatusCode::BAD_REQUEST,
            Self::MissingCredential | Self::InvalidCredential | Self::BadCredentials => {
                StatusCode::UNAUTHORIZED
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Hash(_) | Self::TokenCreation(_) | Self::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message included in the response body.
    ///
    /// Internal errors return a generic message; their details only go to
    /// the log.
    pub fn message(&self) -> String {
        if self.status_code().is_server_error() {
            "internal server error".to_string()
        } else {
            self.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::Validation("email already registered".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::MissingCredential.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::InvalidCredential.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::BadCredentials.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::NotFound("user").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_errors_do_not_leak() {
        let err = ApiError::Database(sqlx::Error::PoolClosed);
        assert_eq!(err.message(), "internal server error");
    }

    #[test]
    fn test_domain_errors_keep_their_message() {
        let err = ApiError::NotFound("post");
        assert_eq!(err.message(), "post not found");

        let err = ApiError::Validation("email already registered".into());
        assert_eq!(err.message(), "email already registered");
    }
}
