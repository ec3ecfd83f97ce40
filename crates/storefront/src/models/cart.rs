//! Cart entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use floralink_core::{Price, ProductId};

use super::Product;

/// One line of the stored cart.
///
/// References the product by id only; the product may since have been
/// deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: ProductId,
    /// Always positive while stored.
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
}

/// A cart item joined with its current product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub item: CartItem,
    pub product: Product,
}

impl CartLine {
    /// Unit price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.product.price.times(self.item.quantity)
    }
}
