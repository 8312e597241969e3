use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use shopdesk_core::DomainError;

/// Single mapping from domain rejections to HTTP responses.
///
/// All locally detected validation-style failures surface as 400 with a
/// human-readable reason; only lookup misses (404), failed logins (401) and
/// internal-consistency faults (500) differ.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::Conflict(msg) => json_error(StatusCode::BAD_REQUEST, "conflict", msg),
        DomainError::InvalidReference(msg) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_reference", msg)
        }
        DomainError::CyclicReference(msg) => {
            json_error(StatusCode::BAD_REQUEST, "cyclic_reference", msg)
        }
        DomainError::PreconditionFailed(msg) => {
            json_error(StatusCode::BAD_REQUEST, "precondition_failed", msg)
        }
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::Unauthorized => json_error(
            StatusCode::UNAUTHORIZED,
            "unauthorized",
            "invalid username or password",
        ),
        DomainError::Inconsistency(msg) => {
            tracing::error!(%msg, "internal inconsistency surfaced to API");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
