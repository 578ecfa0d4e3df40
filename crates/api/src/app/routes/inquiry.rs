use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};

use hanumantay_ai::InFlightDrafts;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/draft", post(generate_draft))
}

/// Always answers 200 with text once the request is accepted; service
/// failures show up as the fallback text and `"outcome": "failed"`.
pub async fn generate_draft(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::DraftRequest>,
) -> axum::response::Response {
    if body.business_name.trim().is_empty() || body.requirements.trim().is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "business_name and requirements are required",
        );
    }

    let key = InFlightDrafts::inquiry_key(&body.business_name, &body.requirements);
    let Some(_pending) = services.in_flight().try_begin(key) else {
        return errors::json_error(
            StatusCode::CONFLICT,
            "draft_in_progress",
            "a draft for this inquiry is already being generated",
        );
    };

    let draft = services
        .drafts()
        .draft(&body.business_name, &body.requirements)
        .await;
    Json(draft).into_response()
}
