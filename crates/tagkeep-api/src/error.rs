//! HTTP error boundary.
//!
//! Handlers work with `tagkeep_core::Error` internally; this is the only place
//! where errors become status codes.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use tagkeep_core::logging::subsystems;

#[derive(Debug)]
pub enum ApiError {
    /// Store or other server-side failure (500).
    Internal(tagkeep_core::Error),
    /// Unknown record or unmatched route (404).
    NotFound(String),
    /// Payload or query failed validation (422).
    Unprocessable(String),
    /// Extractor rejection, keeping the status axum chose.
    Rejection(StatusCode, String),
    /// Global rate limit exceeded (429).
    RateLimited,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Rejection(status, _) => *status,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        }
    }
}

impl From<tagkeep_core::Error> for ApiError {
    fn from(err: tagkeep_core::Error) -> Self {
        match err {
            tagkeep_core::Error::NotFound(msg) => ApiError::NotFound(msg),
            tagkeep_core::Error::TagNotFound(id) => {
                ApiError::NotFound(format!("Tag {} not found", id))
            }
            tagkeep_core::Error::Validation(msg) => ApiError::Unprocessable(msg),
            other => ApiError::Internal(other),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejection(rejection.status(), rejection.body_text())
    }
}

/// A query string that does not deserialize (for example a repeated `q`) is
/// an invalid search query, not a malformed request.
impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Unprocessable(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::Internal(err) => {
                tracing::error!(subsystem = subsystems::API, error = %err, "Request failed");
                err.to_string()
            }
            ApiError::NotFound(msg)
            | ApiError::Unprocessable(msg)
            | ApiError::Rejection(_, msg) => msg,
            ApiError::RateLimited => "Too many requests. Please wait before retrying.".to_string(),
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagkeep_core::Error;

    #[test]
    fn test_validation_maps_to_422() {
        let err: ApiError = Error::Validation("name is required".to_string()).into();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_not_found_variants_map_to_404() {
        let err: ApiError = Error::NotFound("nothing".to_string()).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err: ApiError = Error::TagNotFound(7).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        match err {
            ApiError::NotFound(msg) => assert_eq!(msg, "Tag 7 not found"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_server_side_failures_map_to_500() {
        let err: ApiError = Error::Config("bad pool".to_string()).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_response_carries_status() {
        let response = ApiError::Unprocessable("name cannot be empty".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = ApiError::RateLimited.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_body_too_large_is_a_rejection_with_413() {
        let err = ApiError::Rejection(StatusCode::PAYLOAD_TOO_LARGE, "too large".to_string());
        assert_eq!(err.into_response().status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
