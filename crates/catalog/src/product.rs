use core::str::FromStr;

use serde::{Deserialize, Serialize};

use hanumantay_core::{DomainError, DomainResult, Entity, ProductId};

/// Product grouping shown in the catalog sidebar.
///
/// The set is closed: persisted data carrying any other label fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Scarves")]
    Scarves,
    #[serde(rename = "Men's Handkerchiefs")]
    MenHankies,
    #[serde(rename = "Men's Packaged Hankies")]
    MenPackaged,
    #[serde(rename = "Hankies Baskets")]
    HankiesBaskets,
    #[serde(rename = "Women's Printed Hankies")]
    WomenPrinted,
}

impl Category {
    /// Sidebar order.
    pub const ALL: [Category; 5] = [
        Category::Scarves,
        Category::MenHankies,
        Category::MenPackaged,
        Category::HankiesBaskets,
        Category::WomenPrinted,
    ];

    /// Display label (also the serialized form).
    pub fn label(&self) -> &'static str {
        match self {
            Category::Scarves => "Scarves",
            Category::MenHankies => "Men's Handkerchiefs",
            Category::MenPackaged => "Men's Packaged Hankies",
            Category::HankiesBaskets => "Hankies Baskets",
            Category::WomenPrinted => "Women's Printed Hankies",
        }
    }

    /// URL-friendly identifier.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Scarves => "scarves",
            Category::MenHankies => "men-hankies",
            Category::MenPackaged => "men-packaged",
            Category::HankiesBaskets => "hankies-baskets",
            Category::WomenPrinted => "women-printed",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    /// Accepts the label or the slug, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(needle) || c.slug().eq_ignore_ascii_case(needle))
            .ok_or_else(|| DomainError::validation(format!("unknown category: {needle}")))
    }
}

/// Indicative wholesale rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pricing {
    /// Rate in smallest currency unit (e.g. paise).
    pub wholesale_rate: u64,
    /// ISO currency code (e.g. "INR").
    pub currency: String,
    /// Sale unit the rate applies to (e.g. "dozen").
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_order_qty: Option<u32>,
}

impl Pricing {
    pub fn new(wholesale_rate: u64, currency: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            wholesale_rate,
            currency: currency.into(),
            unit: unit.into(),
            min_order_qty: None,
        }
    }

    pub fn with_min_order_qty(mut self, qty: u32) -> Self {
        self.min_order_qty = Some(qty);
        self
    }
}

/// Catalog product record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub pricing: Pricing,
    /// Image references; the first one is the card image.
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        pricing: Pricing,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            category,
            pricing,
            images: Vec::new(),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.images.push(image.into());
        self
    }

    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Record-level invariants (catalog-wide id uniqueness is checked by the store).
    pub fn validate(&self) -> DomainResult<()> {
        if self.id.is_blank() {
            return Err(DomainError::invalid_id("product id cannot be blank"));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Partial update for an existing product. The id is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub pricing: Option<Pricing>,
    pub images: Option<Vec<String>>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Returns the patched copy; `product` itself is left untouched.
    pub fn apply_to(&self, product: &Product) -> DomainResult<Product> {
        let mut next = product.clone();
        if let Some(name) = &self.name {
            next.name = name.clone();
        }
        if let Some(description) = &self.description {
            next.description = description.clone();
        }
        if let Some(category) = self.category {
            next.category = category;
        }
        if let Some(pricing) = &self.pricing {
            next.pricing = pricing.clone();
        }
        if let Some(images) = &self.images {
            next.images = images.clone();
        }
        next.validate()?;
        Ok(next)
    }
}
