use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    response::IntoResponse,
    routing::{get, post, put},
};

use hanumantay_catalog::{FilterCriteria, Page, Product};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(get_session))
        .route("/navigate", post(navigate))
        .route("/filter", put(set_filter))
        .route("/catalog", get(visible_catalog))
        .route("/inquiry", post(request_inquiry).delete(clear_inquiry))
}

pub async fn get_session(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    Json(services.session().clone()).into_response()
}

/// Unknown page names land on the home page.
pub async fn navigate(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::NavigateRequest>,
) -> axum::response::Response {
    let mut session = services.session();
    session.navigate(Page::from_name(&body.page));
    Json(session.clone()).into_response()
}

/// Rejected with 409 unless the session is on the catalog page.
pub async fn set_filter(
    Extension(services): Extension<Arc<AppServices>>,
    Json(criteria): Json<FilterCriteria>,
) -> axum::response::Response {
    let mut session = services.session();
    match session.set_filter(criteria) {
        Ok(()) => Json(session.clone()).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// Catalog page grid for the session's current criteria.
pub async fn visible_catalog(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let session = services.session().clone();
    let catalog = services.catalog();
    let visible: Vec<Product> = session
        .visible_products(catalog.products())
        .into_iter()
        .cloned()
        .collect();
    Json(visible).into_response()
}

pub async fn request_inquiry(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::InquiryRequest>,
) -> axum::response::Response {
    let id = match errors::parse_product_id(&body.product_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let product = services.catalog().get(&id).cloned();
    let Some(product) = product else {
        return errors::domain_error_to_response(hanumantay_core::DomainError::not_found());
    };

    let mut session = services.session();
    session.request_inquiry(product);
    Json(session.clone()).into_response()
}

pub async fn clear_inquiry(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let mut session = services.session();
    session.clear_selection();
    Json(session.clone()).into_response()
}
