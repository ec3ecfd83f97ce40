//! Order management.

use chrono::Utc;

use floralink_core::{OrderId, OrderStatus, UserId};

use crate::models::{NewOrder, Order};
use crate::storage::{StorageService, keys};

/// Orders over the `orders` collection.
pub struct OrderManager<'a> {
    storage: &'a StorageService,
}

impl<'a> OrderManager<'a> {
    /// Create an order manager over `storage`.
    #[must_use]
    pub const fn new(storage: &'a StorageService) -> Self {
        Self { storage }
    }

    /// All orders in placement order.
    #[must_use]
    pub fn list(&self) -> Vec<Order> {
        self.storage.get_list(keys::ORDERS)
    }

    /// Record a new order with status `pending`.
    ///
    /// Items, total, customer and payment details are stored as given; the
    /// total is not recomputed against current prices.
    pub fn create(&self, input: NewOrder) -> Order {
        let order = Order {
            id: OrderId::generate(),
            user_id: input.user_id,
            items: input.items,
            total: input.total,
            customer_info: input.customer_info,
            payment_info: input.payment_info,
            status: OrderStatus::pending(),
            created_at: Utc::now(),
        };

        let mut orders = self.list();
        orders.push(order.clone());
        self.storage.set(keys::ORDERS, &orders);

        tracing::info!(order_id = %order.id, total = %order.total, "Order created");
        order
    }

    /// Look up an order.
    #[must_use]
    pub fn get_by_id(&self, id: &OrderId) -> Option<Order> {
        self.list().into_iter().find(|o| &o.id == id)
    }

    /// Orders placed by `user_id`.
    #[must_use]
    pub fn list_by_user(&self, user_id: &UserId) -> Vec<Order> {
        self.list()
            .into_iter()
            .filter(|o| o.user_id.as_ref() == Some(user_id))
            .collect()
    }

    /// Set an order's status. Any status is accepted.
    ///
    /// Returns `false` if no order has that id.
    pub fn update_status(&self, id: &OrderId, status: impl Into<OrderStatus>) -> bool {
        let mut orders = self.list();
        let Some(order) = orders.iter_mut().find(|o| &o.id == id) else {
            return false;
        };

        order.status = status.into();
        tracing::info!(order_id = %id, status = %order.status, "Order status updated");
        self.storage.set(keys::ORDERS, &orders);
        true
    }
}
