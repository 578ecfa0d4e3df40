use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use hanumantay_catalog::CategoryFilter;
use hanumantay_core::{DomainError, ProductId};

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg)
        }
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
    }
}

/// A catalog mutation task panicked or was cancelled.
pub fn join_error_to_response(err: tokio::task::JoinError) -> axum::response::Response {
    tracing::error!(error = %err, "catalog mutation task failed");
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal_error",
        "catalog update failed",
    )
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

pub fn parse_product_id(s: &str) -> Result<ProductId, axum::response::Response> {
    ProductId::new(s).map_err(domain_error_to_response)
}

/// `"All"`, a category label or a slug; anything else is a 400.
pub fn parse_category_filter(s: &str) -> Result<CategoryFilter, axum::response::Response> {
    s.parse()
        .map_err(|e: DomainError| json_error(StatusCode::BAD_REQUEST, "invalid_category", e.to_string()))
}
