use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use hanumantay_catalog::{Category, CategoryFilter, FilterCriteria, Product, ProductPatch, filter};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product).put(replace_products))
        .route(
            "/:id",
            get(get_product).patch(update_product).delete(remove_product),
        )
}

pub async fn list_categories() -> impl IntoResponse {
    let categories: Vec<dto::CategoryView> = Category::ALL.into_iter().map(Into::into).collect();
    Json(categories)
}

/// Filter engine over the current catalog; no parameters lists everything.
pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ProductQuery>,
) -> axum::response::Response {
    let category = match query.category.as_deref() {
        Some(raw) => match errors::parse_category_filter(raw) {
            Ok(c) => c,
            Err(resp) => return resp,
        },
        None => CategoryFilter::All,
    };
    let criteria = FilterCriteria::new(category, query.q.unwrap_or_default());

    let catalog = services.catalog();
    let visible: Vec<Product> = filter(catalog.products(), &criteria)
        .into_iter()
        .cloned()
        .collect();
    Json(visible).into_response()
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_product_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.catalog().get(&id) {
        Some(product) => Json(product.clone()).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateProductRequest>,
) -> axum::response::Response {
    let product = match body.into_product() {
        Ok(p) => p,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services
        .mutate_catalog(move |catalog| catalog.add_product(product))
        .await
    {
        Ok(Ok(created)) => (StatusCode::CREATED, Json(created)).into_response(),
        Ok(Err(e)) => errors::domain_error_to_response(e),
        Err(e) => errors::join_error_to_response(e),
    }
}

/// Replace the whole list (ids must be pairwise distinct).
pub async fn replace_products(
    Extension(services): Extension<Arc<AppServices>>,
    Json(products): Json<Vec<Product>>,
) -> axum::response::Response {
    let replaced = services
        .mutate_catalog(move |catalog| {
            catalog
                .set_products(products)
                .map(|()| catalog.products().to_vec())
        })
        .await;

    match replaced {
        Ok(Ok(products)) => Json(products).into_response(),
        Ok(Err(e)) => errors::domain_error_to_response(e),
        Err(e) => errors::join_error_to_response(e),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(patch): Json<ProductPatch>,
) -> axum::response::Response {
    let id = match errors::parse_product_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services
        .mutate_catalog(move |catalog| catalog.update_product(&id, &patch))
        .await
    {
        Ok(Ok(updated)) => Json(updated).into_response(),
        Ok(Err(e)) => errors::domain_error_to_response(e),
        Err(e) => errors::join_error_to_response(e),
    }
}

pub async fn remove_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_product_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services
        .mutate_catalog(move |catalog| catalog.remove_product(&id))
        .await
    {
        Ok(Ok(removed)) => Json(removed).into_response(),
        Ok(Err(e)) => errors::domain_error_to_response(e),
        Err(e) => errors::join_error_to_response(e),
    }
}

/// Restore the bundled catalog.
pub async fn reset_catalog(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let reset = services
        .mutate_catalog(|catalog| {
            catalog.reset_to_defaults();
            catalog.products().to_vec()
        })
        .await;

    match reset {
        Ok(products) => {
            tracing::info!(products = products.len(), "catalog reset to defaults");
            Json(products).into_response()
        }
        Err(e) => errors::join_error_to_response(e),
    }
}
