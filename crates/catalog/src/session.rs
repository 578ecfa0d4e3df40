//! Navigation and selection state for one storefront session.
//!
//! Nothing here is persisted.

use serde::{Deserialize, Serialize};

use hanumantay_core::{DomainError, DomainResult};

use crate::filter::{FilterCriteria, filter};
use crate::product::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Catalog,
    /// Wholesale inquiry page.
    Wholesale,
    About,
    Admin,
}

impl Page {
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Catalog => "catalog",
            Page::Wholesale => "wholesale",
            Page::About => "about",
            Page::Admin => "admin",
        }
    }

    /// Unknown page names route to [`Page::Home`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "catalog" => Page::Catalog,
            "wholesale" => Page::Wholesale,
            "about" => Page::About,
            "admin" => Page::Admin,
            _ => Page::Home,
        }
    }
}

/// Current page, product under inquiry and the catalog page's filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionState {
    page: Page,
    selected: Option<Product>,
    catalog_filter: FilterCriteria,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn selected(&self) -> Option<&Product> {
        self.selected.as_ref()
    }

    pub fn catalog_filter(&self) -> &FilterCriteria {
        &self.catalog_filter
    }

    /// Switch pages. The filter criteria belong to one visit of the catalog
    /// page: leaving it or arriving from elsewhere starts from the defaults.
    pub fn navigate(&mut self, page: Page) {
        if self.page != page && (self.page == Page::Catalog || page == Page::Catalog) {
            self.catalog_filter.reset();
        }
        tracing::debug!(from = self.page.as_str(), to = page.as_str(), "navigate");
        self.page = page;
    }

    /// Only the catalog page has criteria; on any other page this is a conflict.
    pub fn set_filter(&mut self, criteria: FilterCriteria) -> DomainResult<()> {
        if self.page != Page::Catalog {
            return Err(DomainError::conflict(format!(
                "filter criteria only apply on the catalog page (current page: {})",
                self.page.as_str()
            )));
        }
        self.catalog_filter = criteria;
        Ok(())
    }

    /// Select `product` for inquiry and open the wholesale page.
    pub fn request_inquiry(&mut self, product: Product) {
        tracing::info!(product_id = %product.id, "inquiry requested");
        self.selected = Some(product);
        self.navigate(Page::Wholesale);
    }

    pub fn clear_selection(&mut self) -> Option<Product> {
        self.selected.take()
    }

    /// Catalog page grid contents for the current criteria.
    pub fn visible_products<'a>(&self, catalog: &'a [Product]) -> Vec<&'a Product> {
        filter(catalog, &self.catalog_filter)
    }
}
