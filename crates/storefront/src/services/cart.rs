//! Shopping cart.
//!
//! There is one cart per profile, independent of who is logged in.

use chrono::Utc;

use floralink_core::{Price, ProductId};

use super::products::ProductManager;
use crate::models::{CartItem, CartLine};
use crate::storage::{StorageService, keys};

/// Cart operations over the `cart` collection.
pub struct CartManager<'a> {
    storage: &'a StorageService,
    products: ProductManager<'a>,
}

impl<'a> CartManager<'a> {
    /// Create a cart manager over `storage`.
    #[must_use]
    pub const fn new(storage: &'a StorageService) -> Self {
        Self {
            storage,
            products: ProductManager::new(storage),
        }
    }

    /// Raw cart entries in insertion order.
    #[must_use]
    pub fn items(&self) -> Vec<CartItem> {
        self.storage.get_list(keys::CART)
    }

    fn save(&self, items: &[CartItem]) {
        self.storage.set(keys::CART, items);
    }

    /// Add `quantity` of a product, merging with an existing entry.
    ///
    /// Adding zero is a no-op.
    pub fn add_item(&self, product_id: &ProductId, quantity: u32) {
        if quantity == 0 {
            tracing::debug!(product_id = %product_id, "Ignoring add of zero quantity");
            return;
        }

        let mut items = self.items();
        if let Some(existing) = items.iter_mut().find(|i| &i.product_id == product_id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
        } else {
            items.push(CartItem {
                product_id: product_id.clone(),
                quantity,
                added_at: Utc::now(),
            });
        }

        self.save(&items);
        tracing::debug!(product_id = %product_id, quantity, "Added to cart");
    }

    /// Overwrite the quantity of an entry; zero or less removes it.
    ///
    /// Unknown products are ignored.
    pub fn update_quantity(&self, product_id: &ProductId, quantity: i64) {
        let Ok(quantity) = u32::try_from(quantity) else {
            if quantity <= 0 {
                self.remove_item(product_id);
            } else {
                tracing::warn!(product_id = %product_id, quantity, "Quantity out of range");
            }
            return;
        };
        if quantity == 0 {
            self.remove_item(product_id);
            return;
        }

        let mut items = self.items();
        if let Some(item) = items.iter_mut().find(|i| &i.product_id == product_id) {
            item.quantity = quantity;
            self.save(&items);
        }
    }

    /// Remove a product's entry. No-op if absent.
    pub fn remove_item(&self, product_id: &ProductId) {
        let items: Vec<CartItem> = self
            .items()
            .into_iter()
            .filter(|i| &i.product_id != product_id)
            .collect();
        self.save(&items);
    }

    /// Cart entries joined with their current products.
    ///
    /// Entries whose product no longer exists are left out of the result but
    /// stay in storage.
    #[must_use]
    pub fn list_with_details(&self) -> Vec<CartLine> {
        let products = self.products.list();
        self.items()
            .into_iter()
            .filter_map(|item| {
                let product = products.iter().find(|p| p.id == item.product_id)?;
                Some(CartLine {
                    product: product.clone(),
                    item,
                })
            })
            .collect()
    }

    /// Sum of quantities over all stored entries.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items().iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of price times quantity over entries whose product still exists.
    #[must_use]
    pub fn total(&self) -> Price {
        self.list_with_details().iter().map(CartLine::subtotal).sum()
    }

    /// Empty the cart.
    pub fn clear(&self) {
        self.save(&[]);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::services::products::tests::rose;

    #[test]
    fn test_add_same_product_merges() {
        let storage = StorageService::in_memory();
        let cart = CartManager::new(&storage);
        let id = ProductId::new("P1");

        cart.add_item(&id, 1);
        cart.add_item(&id, 2);

        let items = cart.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 3);
    }

    #[test]
    fn test_add_zero_is_noop() {
        let storage = StorageService::in_memory();
        let cart = CartManager::new(&storage);
        cart.add_item(&ProductId::new("P1"), 0);
        assert!(cart.items().is_empty());
    }

    #[test]
    fn test_item_count_and_remove() {
        let storage = StorageService::in_memory();
        let cart = CartManager::new(&storage);
        let id = ProductId::new("P1");

        cart.add_item(&id, 2);
        cart.add_item(&id, 3);
        assert_eq!(cart.item_count(), 5);

        cart.remove_item(&id);
        assert_eq!(cart.item_count(), 0);
        // Removing an absent item is fine.
        cart.remove_item(&id);
    }

    #[test]
    fn test_update_quantity_floor_removes() {
        let storage = StorageService::in_memory();
        let cart = CartManager::new(&storage);
        let a = ProductId::new("A");
        let b = ProductId::new("B");
        cart.add_item(&a, 4);
        cart.add_item(&b, 4);

        cart.update_quantity(&a, 0);
        cart.update_quantity(&b, -5);

        assert!(cart.items().is_empty());
    }

    #[test]
    fn test_update_quantity_overwrites() {
        let storage = StorageService::in_memory();
        let cart = CartManager::new(&storage);
        let a = ProductId::new("A");
        cart.add_item(&a, 4);

        cart.update_quantity(&a, 7);
        cart.update_quantity(&ProductId::new("unknown"), 3);

        let items = cart.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 7);
    }

    #[test]
    fn test_dangling_items_dropped_from_details_and_total() {
        let storage = StorageService::in_memory();
        let products = ProductManager::new(&storage);
        let cart = CartManager::new(&storage);

        let product = products.create(rose()).unwrap();
        cart.add_item(&product.id, 2);
        cart.add_item(&ProductId::new("deleted"), 5);

        let lines = cart.list_with_details();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].product.id, product.id);
        assert_eq!(cart.total(), Price::from_cents(9998).unwrap());
        // Dangling entries still count and stay in storage.
        assert_eq!(cart.item_count(), 7);
        assert_eq!(cart.items().len(), 2);
    }

    #[test]
    fn test_total_saturates_on_overflowing_line() {
        let storage = StorageService::in_memory();
        let products = ProductManager::new(&storage);
        let cart = CartManager::new(&storage);

        let product = products
            .create(crate::models::NewProduct {
                price: Some("100000000000000000000".parse().unwrap()),
                ..rose()
            })
            .unwrap();
        cart.add_item(&product.id, 1_000_000_000);
        cart.add_item(&products.create(rose()).unwrap().id, 1);

        let lines = cart.list_with_details();
        assert_eq!(lines.first().unwrap().subtotal(), Price::MAX);
        assert_eq!(cart.total(), Price::MAX);
    }

    #[test]
    fn test_total_follows_current_price() {
        let storage = StorageService::in_memory();
        let products = ProductManager::new(&storage);
        let cart = CartManager::new(&storage);

        let product = products.create(rose()).unwrap();
        cart.add_item(&product.id, 1);
        products.update(
            &product.id,
            crate::models::ProductPatch {
                price: Some(Price::from_cents(1000).unwrap()),
                ..Default::default()
            },
        );
        assert_eq!(cart.total(), Price::from_cents(1000).unwrap());
    }

    #[test]
    fn test_clear() {
        let storage = StorageService::in_memory();
        let cart = CartManager::new(&storage);
        cart.add_item(&ProductId::new("P1"), 1);
        cart.clear();
        assert!(cart.items().is_empty());
        assert_eq!(storage.get::<Vec<CartItem>>(keys::CART), Some(Vec::new()));
    }
}
