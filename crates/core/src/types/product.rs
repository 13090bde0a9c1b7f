//! Catalog product type.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// A product as it appears in the catalog.
///
/// `sizes` and `colors` are the variant axes a shopper can choose from; either
/// may be absent for products sold in a single variant. Absent axes are
/// omitted from the serialized form entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: Price,
    pub description: String,
    /// Path to the product image, served by the host application.
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
}
