//! HTTP error response types
//!
//! Every failure returns a structured reason; storage failures are surfaced
//! generically without leaking internal detail.

use actix_web::{
    HttpRequest, HttpResponse, HttpResponseBuilder,
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

/// Error result for API error responses
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResult {
    pub timestamp: String,
    pub status: i32,
    pub error: String,
    pub message: String,
    pub path: String,
}

impl ErrorResult {
    pub fn new(status: StatusCode, message: &str, path: &str) -> Self {
        ErrorResult {
            timestamp: chrono::Utc::now().to_rfc3339(),
            status: status.as_u16() as i32,
            error: status.canonical_reason().unwrap_or_default().to_string(),
            message: message.to_string(),
            path: path.to_string(),
        }
    }

    pub fn http_response(status: StatusCode, message: &str, path: &str) -> HttpResponse {
        HttpResponseBuilder::new(status).json(ErrorResult::new(status, message, path))
    }

    pub fn http_response_unauthorized(path: &str) -> HttpResponse {
        Self::http_response(
            StatusCode::UNAUTHORIZED,
            "missing, invalid, or expired token",
            path,
        )
    }

    pub fn http_response_internal(path: &str) -> HttpResponse {
        Self::http_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal server error",
            path,
        )
    }
}

/// Maps a malformed JSON request body to the same structured error shape
/// every other failure path uses. Installed via `web::JsonConfig`.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let response =
        ErrorResult::http_response(StatusCode::BAD_REQUEST, &err.to_string(), req.path());

    InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_result_fields() {
        let result = ErrorResult::new(StatusCode::NOT_FOUND, "Person not found", "/number/0000000");
        assert_eq!(result.status, 404);
        assert_eq!(result.error, "Not Found");
        assert_eq!(result.message, "Person not found");
        assert_eq!(result.path, "/number/0000000");
    }
}
