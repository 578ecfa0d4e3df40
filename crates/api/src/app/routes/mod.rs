use axum::{
    Router,
    routing::{get, post},
};

pub mod inquiry;
pub mod products;
pub mod session;
pub mod system;

/// Router for all storefront endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/categories", get(products::list_categories))
        .route("/catalog/reset", post(products::reset_catalog))
        .nest("/products", products::router())
        .nest("/session", session::router())
        .nest("/inquiry", inquiry::router())
}
