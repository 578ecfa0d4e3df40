use std::sync::Arc;

use async_trait::async_trait;
use hanumantay_ai::{COULD_NOT_GENERATE, ProviderError, SERVICE_FALLBACK, TextGenerator};
use hanumantay_api::app::{build_app, services::AppServices};
use hanumantay_catalog::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore};
use reqwest::StatusCode;
use serde_json::{Value, json};
use tokio::sync::Notify;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn_with(medium: Arc<dyn KeyValueStore>, provider: Arc<dyn TextGenerator>) -> Self {
        // Same router as prod, bound to an ephemeral port.
        let app = build_app(Arc::new(AppServices::new(medium, provider)));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    async fn spawn() -> Self {
        Self::spawn_with(Arc::new(InMemoryKeyValueStore::new()), Arc::new(Echo)).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Answers with a short email naming the sender found in the prompt.
struct Echo;

#[async_trait]
impl TextGenerator for Echo {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, ProviderError> {
        let sender = prompt
            .lines()
            .find_map(|l| l.trim().strip_prefix("Sender Business Name:"))
            .unwrap_or("")
            .trim();
        Ok(Some(format!(
            "Dear HANUMANTAY team,\nThis is {sender}. Please share bulk pricing and MOQ."
        )))
    }
}

struct Unreachable;

#[async_trait]
impl TextGenerator for Unreachable {
    async fn generate(&self, _prompt: &str) -> Result<Option<String>, ProviderError> {
        Err(ProviderError::Network("connection refused".to_string()))
    }
}

struct Silent;

#[async_trait]
impl TextGenerator for Silent {
    async fn generate(&self, _prompt: &str) -> Result<Option<String>, ProviderError> {
        Ok(None)
    }
}

/// Blocks until released so a request can be observed in flight.
#[derive(Default)]
struct Gated {
    started: Notify,
    release: Notify,
}

#[async_trait]
impl TextGenerator for Gated {
    async fn generate(&self, _prompt: &str) -> Result<Option<String>, ProviderError> {
        self.started.notify_one();
        self.release.notified().await;
        Ok(Some("Dear HANUMANTAY team, ...".to_string()))
    }
}

fn ids(body: &Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn health_and_categories() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client.get(srv.url("/categories")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    let categories = body.as_array().unwrap();
    assert_eq!(categories.len(), 5);
    assert_eq!(categories[0]["label"], "Scarves");
    assert_eq!(categories[1]["slug"], "men-hankies");
}

#[tokio::test]
async fn fresh_store_serves_bundled_catalog_and_filters() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let all: Value = client
        .get(srv.url("/products"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all.as_array().unwrap().len(), 10);

    let res = client
        .get(srv.url("/products"))
        .query(&[("category", "scarves")])
        .send()
        .await
        .unwrap();
    assert_eq!(ids(&res.json().await.unwrap()), ["sc-001", "sc-002", "sc-003"]);

    let res = client
        .get(srv.url("/products"))
        .query(&[("q", "LACE")])
        .send()
        .await
        .unwrap();
    assert_eq!(ids(&res.json().await.unwrap()), ["wp-001"]);

    let res = client
        .get(srv.url("/products"))
        .query(&[("category", "bags")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_category");
}

#[tokio::test]
async fn product_admin_lifecycle() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Create without id
    let res = client
        .post(srv.url("/products"))
        .json(&json!({
            "name": "Festive Gift Basket",
            "description": "Six assorted hankies in a woven basket",
            "category": "Hankies Baskets",
            "pricing": { "wholesale_rate": 45000, "currency": "INR", "unit": "basket", "min_order_qty": 12 }
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await.unwrap();
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());

    // Duplicate explicit id
    let res = client
        .post(srv.url("/products"))
        .json(&json!({
            "id": "sc-001",
            "name": "Copy",
            "category": "Scarves",
            "pricing": { "wholesale_rate": 1, "currency": "INR", "unit": "piece" }
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);

    // Blank name
    let res = client
        .post(srv.url("/products"))
        .json(&json!({
            "name": "  ",
            "category": "Scarves",
            "pricing": { "wholesale_rate": 1, "currency": "INR", "unit": "piece" }
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Patch
    let res = client
        .patch(srv.url(&format!("/products/{id}")))
        .json(&json!({ "name": "Festive Basket (Large)" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await.unwrap();
    assert_eq!(updated["name"], "Festive Basket (Large)");
    assert_eq!(updated["category"], "Hankies Baskets");

    let res = client
        .patch(srv.url("/products/does-not-exist"))
        .json(&json!({ "name": "x" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Delete
    let res = client
        .delete(srv.url(&format!("/products/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(srv.url(&format!("/products/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .delete(srv.url(&format!("/products/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn replace_rejects_duplicates_and_reset_restores() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let one = json!({
        "id": "x-1",
        "name": "Only Scarf",
        "description": "",
        "category": "Scarves",
        "pricing": { "wholesale_rate": 100, "currency": "INR", "unit": "piece" },
        "images": []
    });

    let res = client
        .put(srv.url("/products"))
        .json(&json!([one, one]))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let res = client
        .put(srv.url("/products"))
        .json(&json!([one]))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(ids(&res.json().await.unwrap()), ["x-1"]);

    let res = client.post(srv.url("/catalog/reset")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn product_ids_never_collide_with_catalog_routes() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/products"))
        .json(&json!({
            "id": "reset",
            "name": "Reset Red Scarf",
            "category": "Scarves",
            "pricing": { "wholesale_rate": 100, "currency": "INR", "unit": "piece" }
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client.get(srv.url("/products/reset")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["name"], "Reset Red Scarf");

    let res = client
        .patch(srv.url("/products/reset"))
        .json(&json!({ "name": "Reset Blue Scarf" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client.delete(srv.url("/products/reset")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let res = client.get(srv.url("/products/reset")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // The bundled catalog is untouched by any of the above.
    let all: Value = client
        .get(srv.url("/products"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all.as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn filter_set_away_from_catalog_never_reaches_it() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Session starts on the home page.
    let res = client
        .put(srv.url("/session/filter"))
        .json(&json!({ "category": "Scarves", "query": "silk" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let session: Value = client
        .post(srv.url("/session/navigate"))
        .json(&json!({ "page": "catalog" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(session["catalog_filter"]["category"], "All");
    assert_eq!(session["catalog_filter"]["query"], "");

    let visible: Value = client
        .get(srv.url("/session/catalog"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(visible.as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn edits_survive_a_restart_on_the_same_data_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let client = reqwest::Client::new();

    {
        let srv = TestServer::spawn_with(
            Arc::new(FileKeyValueStore::new(tmp.path())),
            Arc::new(Echo),
        )
        .await;
        let res = client
            .delete(srv.url("/products/sc-002"))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    let srv = TestServer::spawn_with(Arc::new(FileKeyValueStore::new(tmp.path())), Arc::new(Echo))
        .await;
    let res = client.get(srv.url("/products/sc-002")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let all: Value = client
        .get(srv.url("/products"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all.as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn session_navigation_filter_and_inquiry() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let session: Value = client
        .get(srv.url("/session"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(session["page"], "home");

    client
        .post(srv.url("/session/navigate"))
        .json(&json!({ "page": "catalog" }))
        .send()
        .await
        .unwrap();
    let res = client
        .put(srv.url("/session/filter"))
        .json(&json!({ "category": "Women's Printed Hankies", "query": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let visible: Value = client
        .get(srv.url("/session/catalog"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ids(&visible), ["wp-001", "wp-002"]);

    // Away and back: criteria reset.
    client
        .post(srv.url("/session/navigate"))
        .json(&json!({ "page": "about" }))
        .send()
        .await
        .unwrap();
    let session: Value = client
        .post(srv.url("/session/navigate"))
        .json(&json!({ "page": "catalog" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(session["catalog_filter"]["category"], "All");

    // Unknown pages land home.
    let session: Value = client
        .post(srv.url("/session/navigate"))
        .json(&json!({ "page": "checkout" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(session["page"], "home");

    let res = client
        .post(srv.url("/session/inquiry"))
        .json(&json!({ "product_id": "nope" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let session: Value = client
        .post(srv.url("/session/inquiry"))
        .json(&json!({ "product_id": "mh-001" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(session["page"], "wholesale");
    assert_eq!(session["selected"]["id"], "mh-001");

    let session: Value = client
        .delete(srv.url("/session/inquiry"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(session["selected"].is_null());
}

#[tokio::test]
async fn draft_success_and_fail_soft_outcomes() {
    let client = reqwest::Client::new();
    let request = json!({
        "business_name": "Acme Traders",
        "requirements": "200 silk scarves per month"
    });

    let srv = TestServer::spawn().await;
    let res = client
        .post(srv.url("/inquiry/draft"))
        .json(&request)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let draft: Value = res.json().await.unwrap();
    assert_eq!(draft["outcome"], "generated");
    let text = draft["text"].as_str().unwrap();
    assert!(text.contains("Acme Traders"));
    assert_ne!(text, SERVICE_FALLBACK);

    let srv = TestServer::spawn_with(Arc::new(InMemoryKeyValueStore::new()), Arc::new(Unreachable))
        .await;
    let draft: Value = client
        .post(srv.url("/inquiry/draft"))
        .json(&request)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(draft["outcome"], "failed");
    assert_eq!(draft["text"], SERVICE_FALLBACK);

    let srv =
        TestServer::spawn_with(Arc::new(InMemoryKeyValueStore::new()), Arc::new(Silent)).await;
    let draft: Value = client
        .post(srv.url("/inquiry/draft"))
        .json(&request)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(draft["outcome"], "empty");
    assert_eq!(draft["text"], COULD_NOT_GENERATE);
}

#[tokio::test]
async fn draft_requires_both_fields() {
    let srv = TestServer::spawn().await;
    let res = reqwest::Client::new()
        .post(srv.url("/inquiry/draft"))
        .json(&json!({ "business_name": "Acme", "requirements": "  " }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_draft_while_pending_is_rejected() {
    let gate = Arc::new(Gated::default());
    let srv = TestServer::spawn_with(Arc::new(InMemoryKeyValueStore::new()), gate.clone()).await;
    let client = reqwest::Client::new();
    let request = json!({ "business_name": "Acme", "requirements": "hankies" });

    let first = tokio::spawn({
        let client = client.clone();
        let url = srv.url("/inquiry/draft");
        let request = request.clone();
        async move { client.post(url).json(&request).send().await.unwrap() }
    });
    gate.started.notified().await;

    let res = client
        .post(srv.url("/inquiry/draft"))
        .json(&json!({ "business_name": " ACME ", "requirements": "Hankies" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "draft_in_progress");

    gate.release.notify_one();
    let res = first.await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // Released: the same inquiry can be drafted again.
    gate.release.notify_one();
    let res = client
        .post(srv.url("/inquiry/draft"))
        .json(&request)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}
