//! API error taxonomy.
//!
//! Every failure a handler can surface maps to one variant here, and every
//! variant renders as an [`ErrorResponse`](crate::ErrorResponse) body so
//! clients can branch on the `error` kind.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::ErrorResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Input failed schema or field validation. Raised before any store
    /// access.
    #[error("{0}")]
    Validation(String),

    /// Missing, malformed, or expired credentials.
    #[error("{0}")]
    Unauthorized(String),

    /// Caller is authenticated but lacks the admin role. Fixed message,
    /// no detail about the guarded operation.
    #[error("Admin access required")]
    Forbidden,

    /// Single-record lookup found nothing.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The store rejected or could not service a write. Reads never carry
    /// this variant; they degrade to empty results instead.
    #[error("store unavailable: {0}")]
    Store(#[from] sqlx::Error),

    /// Server-side failure unrelated to the store (token signing and the
    /// like).
    #[error("{0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Validation(message) => ErrorResponse::bad_request(message),
            ApiError::Unauthorized(message) => ErrorResponse::new("Unauthorized", message),
            ApiError::Forbidden => ErrorResponse::new("Forbidden", "Admin access required"),
            ApiError::NotFound(what) => ErrorResponse::not_found(&format!("{} not found", what)),
            ApiError::Store(e) => {
                log::error!("Store error: {:?}", e);
                ErrorResponse::internal_error("An error occurred, please try again")
            }
            ApiError::Internal(message) => ErrorResponse::internal_error(message),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::NotFound("Project").status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_forbidden_message_is_fixed() {
        assert_eq!(ApiError::Forbidden.to_string(), "Admin access required");
    }
}
