//! Cart line type and the composite variant key.

use serde::{Deserialize, Serialize};

use super::{Price, Product, ProductId};

/// One line in the cart: a chosen product variant and its quantity.
///
/// Cart lines are identified by the composite key
/// `(product id, selected size, selected color)` - two lines with the same
/// product id but a different chosen variant are distinct entries. An absent
/// selection only matches an absent selection: a line with no size is never
/// matched by a lookup that specifies one.
///
/// `quantity` is at least 1 for any line held in a cart; a mutation that would
/// drop it to 0 removes the line instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_color: Option<String>,
}

impl CartItem {
    /// Create a line for a product with no variant selection.
    #[must_use]
    pub const fn new(product: Product, quantity: u32) -> Self {
        Self {
            product,
            quantity,
            selected_size: None,
            selected_color: None,
        }
    }

    /// Set the chosen size.
    #[must_use]
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.selected_size = Some(size.into());
        self
    }

    /// Set the chosen color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.selected_color = Some(color.into());
        self
    }

    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }

    /// Whether this line's composite key equals `(id, size, color)`.
    #[must_use]
    pub fn matches_variant(&self, id: &ProductId, size: Option<&str>, color: Option<&str>) -> bool {
        self.product.id == *id
            && self.selected_size.as_deref() == size
            && self.selected_color.as_deref() == color
    }

    /// Whether `other` refers to the same product variant as this line.
    #[must_use]
    pub fn same_variant(&self, other: &Self) -> bool {
        self.matches_variant(
            &other.product.id,
            other.selected_size.as_deref(),
            other.selected_color.as_deref(),
        )
    }
}
