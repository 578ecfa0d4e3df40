//! Catalog Store: load-or-seed initialization, admin mutations and
//! write-through persistence.
//!
//! ## Data version policy
//!
//! A persisted snapshot is reused only when its stored version tag equals
//! [`DATA_VERSION`] exactly. Anything else (no tag, an older tag, no product
//! entry) replaces the stored list with the bundled catalog wholesale. There is
//! no field-level migration: stale local edits are dropped on purpose so that
//! shipping new bundled data always wins.
//!
//! ## Failure containment
//!
//! Unreadable or corrupt persisted data never escapes [`initialize`]; it is
//! logged and the bundled catalog is used instead. Write-through failures after
//! a mutation are logged and the in-memory catalog stays authoritative for the
//! session.

use serde::{Deserialize, Serialize};

use hanumantay_core::entity::first_duplicate_id;
use hanumantay_core::{DomainError, DomainResult, ProductId};

use crate::defaults::{DATA_VERSION, default_products};
use crate::product::{Product, ProductPatch};
use crate::storage::{DATA_VERSION_KEY, KeyValueStore, PRODUCTS_KEY, StorageError};

/// Ordered product list at a point in time.
///
/// Serializes as a plain JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogSnapshot(Vec<Product>);

impl CatalogSnapshot {
    /// Validated snapshot: every record valid, ids pairwise distinct.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        for p in &products {
            p.validate()?;
        }
        if let Some(dup) = first_duplicate_id(&products) {
            return Err(DomainError::validation(format!("duplicate product id: {dup}")));
        }
        Ok(Self(products))
    }

    /// The bundled catalog.
    pub fn defaults() -> Self {
        Self(default_products())
    }

    pub fn products(&self) -> &[Product] {
        &self.0
    }

    pub fn into_products(self) -> Vec<Product> {
        self.0
    }

    fn parse(raw: &str) -> Result<Self, String> {
        let products: Vec<Product> = serde_json::from_str(raw).map_err(|e| e.to_string())?;
        Self::new(products).map_err(|e| e.to_string())
    }
}

/// Why the bundled catalog was used instead of persisted data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedReason {
    /// No (or an empty) product entry in the medium.
    NoSnapshot,
    /// Stored tag absent or different from [`DATA_VERSION`].
    VersionMismatch { stored: Option<String> },
    /// Stored product entry could not be parsed or violates invariants.
    Corrupt(String),
    /// The medium itself failed to read.
    Unreadable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Restored,
    Seeded(SeedReason),
}

impl LoadOutcome {
    pub fn is_restored(&self) -> bool {
        matches!(self, LoadOutcome::Restored)
    }
}

/// Result of [`initialize`].
#[derive(Debug, Clone)]
pub struct Initialized {
    pub snapshot: CatalogSnapshot,
    pub outcome: LoadOutcome,
}

impl Initialized {
    fn seeded(reason: SeedReason) -> Self {
        Self {
            snapshot: CatalogSnapshot::defaults(),
            outcome: LoadOutcome::Seeded(reason),
        }
    }
}

/// Load the persisted snapshot, or fall back to the bundled catalog.
///
/// Never fails: every failure mode resolves to the bundled catalog with the
/// reason recorded in [`Initialized::outcome`].
pub fn initialize<S>(medium: &S) -> Initialized
where
    S: KeyValueStore + ?Sized,
{
    let (stored_version, stored_products) =
        match (medium.get(DATA_VERSION_KEY), medium.get(PRODUCTS_KEY)) {
            (Ok(v), Ok(p)) => (v, p),
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!(error = %e, "catalog storage unreadable; using bundled catalog");
                return Initialized::seeded(SeedReason::Unreadable(e.to_string()));
            }
        };

    let raw = match stored_products {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => {
            tracing::info!("no persisted catalog; seeding bundled catalog");
            return Initialized::seeded(SeedReason::NoSnapshot);
        }
    };

    if stored_version.as_deref() != Some(DATA_VERSION) {
        tracing::info!(
            stored = stored_version.as_deref().unwrap_or("<none>"),
            current = DATA_VERSION,
            "persisted catalog version mismatch; replacing with bundled catalog"
        );
        return Initialized::seeded(SeedReason::VersionMismatch {
            stored: stored_version,
        });
    }

    match CatalogSnapshot::parse(&raw) {
        Ok(snapshot) => {
            tracing::debug!(products = snapshot.products().len(), "restored persisted catalog");
            Initialized {
                snapshot,
                outcome: LoadOutcome::Restored,
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "persisted catalog is corrupt; using bundled catalog");
            Initialized::seeded(SeedReason::Corrupt(e))
        }
    }
}

/// Authoritative product list for the session, backed by a key/value medium.
///
/// Construct once at startup with [`CatalogStore::open`].
#[derive(Debug)]
pub struct CatalogStore<S> {
    medium: S,
    products: Vec<Product>,
    load_outcome: LoadOutcome,
}

impl<S: KeyValueStore> CatalogStore<S> {
    /// Initialize from `medium` and immediately persist the result, so the
    /// medium is tagged with the current version from the first run on.
    pub fn open(medium: S) -> Self {
        let Initialized { snapshot, outcome } = initialize(&medium);
        let store = Self {
            medium,
            products: snapshot.into_products(),
            load_outcome: outcome,
        };
        store.write_through("open");
        store
    }

    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot(self.products.clone())
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn medium(&self) -> &S {
        &self.medium
    }

    /// Write the full list and the current version tag.
    pub fn persist(&self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.products).map_err(|e| StorageError::Serialize {
            key: PRODUCTS_KEY,
            message: e.to_string(),
        })?;
        self.medium.set(PRODUCTS_KEY, &raw)?;
        self.medium.set(DATA_VERSION_KEY, DATA_VERSION)?;
        Ok(())
    }

    fn write_through(&self, op: &'static str) {
        if let Err(e) = self.persist() {
            tracing::error!(op, error = %e, "failed to persist catalog");
        }
    }

    /// Replace the whole list.
    pub fn set_products(&mut self, products: Vec<Product>) -> DomainResult<()> {
        let snapshot = CatalogSnapshot::new(products)?;
        self.products = snapshot.into_products();
        self.write_through("set_products");
        Ok(())
    }

    /// Append a product; duplicate ids are a conflict.
    pub fn add_product(&mut self, product: Product) -> DomainResult<Product> {
        product.validate()?;
        if self.get(&product.id).is_some() {
            return Err(DomainError::conflict(format!(
                "product {} already exists",
                product.id
            )));
        }
        self.products.push(product.clone());
        self.write_through("add_product");
        Ok(product)
    }

    /// Patch a product in place. Unknown ids are `NotFound`.
    pub fn update_product(&mut self, id: &ProductId, patch: &ProductPatch) -> DomainResult<Product> {
        let slot = self
            .products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(DomainError::not_found)?;
        let next = patch.apply_to(slot)?;
        *slot = next.clone();
        self.write_through("update_product");
        Ok(next)
    }

    /// Remove a product. Unknown ids are `NotFound`.
    pub fn remove_product(&mut self, id: &ProductId) -> DomainResult<Product> {
        let idx = self
            .products
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(DomainError::not_found)?;
        let removed = self.products.remove(idx);
        self.write_through("remove_product");
        Ok(removed)
    }

    /// Discard local edits and restore the bundled catalog.
    pub fn reset_to_defaults(&mut self) {
        self.products = default_products();
        self.write_through("reset_to_defaults");
    }
}
