use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::Context;

use hanumantay_ai::{DraftGenerator, GeminiClient, InFlightDrafts, TextGenerator};
use hanumantay_catalog::{CatalogStore, FileKeyValueStore, KeyValueStore, SessionState};

use crate::config::AppConfig;

pub type SharedCatalog = CatalogStore<Arc<dyn KeyValueStore>>;

/// Everything the handlers share.
///
/// Locks are only ever taken one at a time and never held across an `.await`.
pub struct AppServices {
    catalog: Mutex<SharedCatalog>,
    session: Mutex<SessionState>,
    drafts: DraftGenerator,
    in_flight: InFlightDrafts,
}

impl AppServices {
    pub fn new(medium: Arc<dyn KeyValueStore>, provider: Arc<dyn TextGenerator>) -> Self {
        let catalog = CatalogStore::open(medium);
        tracing::info!(
            products = catalog.products().len(),
            outcome = ?catalog.load_outcome(),
            "catalog ready"
        );
        Self {
            catalog: Mutex::new(catalog),
            session: Mutex::new(SessionState::new()),
            drafts: DraftGenerator::new(provider),
            in_flight: InFlightDrafts::new(),
        }
    }

    /// File-backed catalog under `data_dir` plus the Gemini client.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let medium: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::new(&config.data_dir));
        let gemini =
            GeminiClient::new(config.gemini.clone()).context("failed to build Gemini client")?;
        tracing::info!(data_dir = %config.data_dir.display(), model = %config.gemini.model, "services configured");
        Ok(Self::new(medium, Arc::new(gemini)))
    }

    pub fn catalog(&self) -> MutexGuard<'_, SharedCatalog> {
        self.catalog.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Run a catalog mutation on the blocking pool. Mutations write through
    /// to the medium synchronously, which may be file IO.
    pub async fn mutate_catalog<T, F>(self: &Arc<Self>, op: F) -> Result<T, tokio::task::JoinError>
    where
        F: FnOnce(&mut SharedCatalog) -> T + Send + 'static,
        T: Send + 'static,
    {
        let services = Arc::clone(self);
        tokio::task::spawn_blocking(move || {
            let mut catalog = services.catalog();
            op(&mut *catalog)
        })
        .await
    }

    pub fn session(&self) -> MutexGuard<'_, SessionState> {
        self.session.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn drafts(&self) -> &DraftGenerator {
        &self.drafts
    }

    pub fn in_flight(&self) -> &InFlightDrafts {
        &self.in_flight
    }
}
