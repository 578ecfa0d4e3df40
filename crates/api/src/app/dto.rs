use serde::{Deserialize, Serialize};

use hanumantay_catalog::{Category, Pricing, Product};
use hanumantay_core::{DomainResult, ProductId};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    /// Generated when omitted.
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    pub pricing: Pricing,
    #[serde(default)]
    pub images: Vec<String>,
}

impl CreateProductRequest {
    pub fn into_product(self) -> DomainResult<Product> {
        let id = match self.id {
            Some(id) => ProductId::new(id)?,
            None => ProductId::generate(),
        };
        let mut product = Product::new(id, self.name, self.description, self.category, self.pricing);
        product.images = self.images;
        Ok(product)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub page: String,
}

#[derive(Debug, Deserialize)]
pub struct InquiryRequest {
    pub product_id: String,
}

#[derive(Debug, Deserialize)]
pub struct DraftRequest {
    pub business_name: String,
    pub requirements: String,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct CategoryView {
    pub label: &'static str,
    pub slug: &'static str,
}

impl From<Category> for CategoryView {
    fn from(c: Category) -> Self {
        Self {
            label: c.label(),
            slug: c.slug(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_generates_missing_id() {
        let req: CreateProductRequest = serde_json::from_value(serde_json::json!({
            "name": "Festive Gift Basket",
            "category": "Hankies Baskets",
            "pricing": { "wholesale_rate": 45000, "currency": "INR", "unit": "basket" }
        }))
        .unwrap();
        let product = req.into_product().unwrap();
        assert!(!product.id.is_blank());
        assert_eq!(product.category, Category::HankiesBaskets);
        assert!(product.images.is_empty());
    }

    #[test]
    fn create_request_rejects_blank_id() {
        let req: CreateProductRequest = serde_json::from_value(serde_json::json!({
            "id": " ",
            "name": "x",
            "category": "Scarves",
            "pricing": { "wholesale_rate": 1, "currency": "INR", "unit": "piece" }
        }))
        .unwrap();
        assert!(req.into_product().is_err());
    }
}
