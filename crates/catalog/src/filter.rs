//! Filter Engine: category + free-text search over the catalog.
//!
//! Pure and stateless; callers re-run it whenever the catalog or the criteria
//! change.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use hanumantay_core::DomainError;

use crate::product::{Category, Product};

/// Category selector: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn allows(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = DomainError;

    /// `"All"` (any case, or empty) or anything [`Category`] parses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        match value {
            CategoryFilter::All => "All".to_string(),
            CategoryFilter::Only(c) => c.label().to_string(),
        }
    }
}

/// Catalog page criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    pub query: String,
}

impl FilterCriteria {
    pub fn new(category: CategoryFilter, query: impl Into<String>) -> Self {
        Self {
            category,
            query: query.into(),
        }
    }

    /// Category predicate AND case-insensitive substring match on name or
    /// description. The query is used as typed (no trimming); an empty query
    /// matches everything.
    pub fn matches(&self, product: &Product) -> bool {
        if !self.category.allows(product.category) {
            return false;
        }
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        product.name.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle)
    }

    pub fn is_default(&self) -> bool {
        self == &Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Visible subset of `products`, in input order.
pub fn filter<'a>(products: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    products.iter().filter(|p| criteria.matches(p)).collect()
}
