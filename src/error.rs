use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Request-level failures. Every store or provider error is converted into
/// one of these at the handler boundary and rendered as a JSON body plus a
/// status code; nothing is allowed to crash the process.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Email already registered")]
    DuplicateAccount,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Text is required")]
    MissingText,

    #[error("{0}")]
    Upstream(String),

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::DuplicateAccount | ApiError::MissingText => {
                StatusCode::BAD_REQUEST
            }
            ApiError::InvalidCredentials | ApiError::InvalidToken => StatusCode::UNAUTHORIZED,
            ApiError::Upstream(_) | ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // The browser client reads `error` on AI routes and `message` everywhere else.
    fn body_key(&self) -> &'static str {
        match self {
            ApiError::MissingText | ApiError::Upstream(_) => "error",
            _ => "message",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let detail = match &self {
            ApiError::Store(e) => {
                error!(error = %e, "store failure");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        let body = match self.body_key() {
            "error" => json!({ "error": detail }),
            _ => json!({ "message": detail }),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_taxonomy() {
        assert_eq!(
            ApiError::Validation("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::DuplicateAccount.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::InvalidCredentials.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::InvalidToken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::MissingText.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Upstream("quota".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn ai_errors_use_error_key() {
        assert_eq!(ApiError::MissingText.body_key(), "error");
        assert_eq!(ApiError::Upstream("x".into()).body_key(), "error");
        assert_eq!(ApiError::InvalidCredentials.body_key(), "message");
    }

    #[test]
    fn store_failures_never_leak_detail() {
        let resp = ApiError::Store(anyhow::anyhow!("connection refused")).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
