//! Built-in product catalog.
//!
//! The catalog ships as a static JSON asset embedded in the crate and is
//! consumed read-only: the home view groups it by category, the product view
//! looks entries up by id.

use std::sync::OnceLock;

use stylemate_core::{Product, ProductId};

static CATALOG_JSON: &str = include_str!("../data/products.json");
static CATALOG: OnceLock<Vec<Product>> = OnceLock::new();

/// All products, in catalog order.
#[must_use]
pub fn products() -> &'static [Product] {
    CATALOG.get_or_init(|| {
        serde_json::from_str(CATALOG_JSON).unwrap_or_else(|e| {
            tracing::error!("built-in catalog failed to parse: {e}");
            Vec::new()
        })
    })
}

/// Look up a product by id.
#[must_use]
pub fn product(id: &ProductId) -> Option<&'static Product> {
    products().iter().find(|p| p.id == *id)
}

/// Unique category names, in first-appearance order.
#[must_use]
pub fn categories() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = Vec::new();
    for product in products() {
        if !names.contains(&product.category.as_str()) {
            names.push(product.category.as_str());
        }
    }
    names
}

/// Products belonging to `category`, in catalog order.
#[must_use]
pub fn by_category(category: &str) -> Vec<&'static Product> {
    products()
        .iter()
        .filter(|p| p.category == category)
        .collect()
}
