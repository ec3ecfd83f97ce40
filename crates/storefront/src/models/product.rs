//! Product records and the inputs used to create and edit them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use floralink_core::{Category, Price, ProductId};

/// A catalogue product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID, immutable.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Long description, may be empty.
    #[serde(default)]
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Image location.
    pub image_url: String,
    /// Occasion the product is listed under.
    pub category: Category,
    /// Whether the product appears on the home page.
    #[serde(default)]
    pub featured: bool,
    /// Creation time, immutable.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a product.
///
/// Required fields are optional here so that a form with gaps can be
/// reported field by field instead of failing to deserialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub image_url: Option<String>,
    pub category: Option<Category>,
    #[serde(default)]
    pub featured: bool,
}

/// A partial update merged over an existing product.
///
/// `id` and `createdAt` are not part of the patch; they can't be changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub image_url: Option<String>,
    pub category: Option<Category>,
    pub featured: Option<bool>,
}

impl ProductPatch {
    /// Whether the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the patch to `product` (does not touch timestamps).
    pub fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(image_url) = self.image_url {
            product.image_url = image_url;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(featured) = self.featured {
            product.featured = featured;
        }
    }
}
