//! Product catalogue management.

use chrono::Utc;
use thiserror::Error;

use floralink_core::ProductId;

use crate::models::{NewProduct, Product, ProductPatch};
use crate::storage::{StorageService, keys};

/// Default number of products on the home page.
pub const DEFAULT_FEATURED_LIMIT: usize = 6;

/// Errors that can occur when creating a product.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductError {
    /// One or more required fields were missing or empty.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

/// CRUD over the product collection.
///
/// Every call re-reads the collection; mutations rewrite it whole.
pub struct ProductManager<'a> {
    storage: &'a StorageService,
}

impl<'a> ProductManager<'a> {
    /// Create a product manager over `storage`.
    #[must_use]
    pub const fn new(storage: &'a StorageService) -> Self {
        Self { storage }
    }

    /// All products in stored order.
    #[must_use]
    pub fn list(&self) -> Vec<Product> {
        self.storage.get_list(keys::PRODUCTS)
    }

    /// Look up a product.
    #[must_use]
    pub fn get_by_id(&self, id: &ProductId) -> Option<Product> {
        self.list().into_iter().find(|p| &p.id == id)
    }

    /// Products whose category name is exactly `category`.
    #[must_use]
    pub fn list_by_category(&self, category: &str) -> Vec<Product> {
        self.list()
            .into_iter()
            .filter(|p| p.category.as_str() == category)
            .collect()
    }

    /// The first `limit` featured products, in stored order.
    #[must_use]
    pub fn list_featured(&self, limit: usize) -> Vec<Product> {
        self.list()
            .into_iter()
            .filter(|p| p.featured)
            .take(limit)
            .collect()
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns `ProductError::MissingFields` if name, price, category or
    /// image URL is missing (empty strings count as missing).
    pub fn create(&self, input: NewProduct) -> Result<Product, ProductError> {
        let name = input.name.filter(|s| !s.trim().is_empty());
        let image_url = input.image_url.filter(|s| !s.trim().is_empty());

        let (Some(name), Some(price), Some(category), Some(image_url)) =
            (name.clone(), input.price, input.category, image_url.clone())
        else {
            let mut missing = Vec::new();
            if name.is_none() {
                missing.push("name");
            }
            if input.price.is_none() {
                missing.push("price");
            }
            if input.category.is_none() {
                missing.push("category");
            }
            if image_url.is_none() {
                missing.push("imageUrl");
            }
            return Err(ProductError::MissingFields(missing));
        };

        let now = Utc::now();
        let product = Product {
            id: ProductId::generate(),
            name,
            description: input.description.unwrap_or_default(),
            price,
            image_url,
            category,
            featured: input.featured,
            created_at: now,
            updated_at: now,
        };

        let mut products = self.list();
        products.push(product.clone());
        self.storage.set(keys::PRODUCTS, &products);

        tracing::info!(product_id = %product.id, name = %product.name, "Product created");
        Ok(product)
    }

    /// Merge `patch` over an existing product, refreshing `updatedAt`.
    ///
    /// Returns `false` if no product has that id.
    pub fn update(&self, id: &ProductId, patch: ProductPatch) -> bool {
        let mut products = self.list();
        let Some(product) = products.iter_mut().find(|p| &p.id == id) else {
            return false;
        };

        patch.apply(product);
        product.updated_at = Utc::now();
        self.storage.set(keys::PRODUCTS, &products);

        tracing::info!(product_id = %id, "Product updated");
        true
    }

    /// Hard-delete a product. Carts and orders referencing it are untouched.
    ///
    /// Returns `false` if no product has that id.
    pub fn delete(&self, id: &ProductId) -> bool {
        let products = self.list();
        let before = products.len();
        let remaining: Vec<Product> = products.into_iter().filter(|p| &p.id != id).collect();

        if remaining.len() == before {
            return false;
        }

        self.storage.set(keys::PRODUCTS, &remaining);
        tracing::info!(product_id = %id, "Product deleted");
        true
    }
}
