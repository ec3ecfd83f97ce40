//! Orders placed at checkout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use floralink_core::{OrderId, OrderStatus, PaymentMethod, Price, UserId};

use super::CartItem;

/// Delivery contact details entered at checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub full_name: String,
    pub phone: String,
    pub delivery_address: String,
}

/// How the order was paid. Only non-sensitive details are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    pub method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_last4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot_name: Option<String>,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    /// The buyer, if one was logged in.
    pub user_id: Option<UserId>,
    /// Snapshot of the cart at purchase time.
    pub items: Vec<CartItem>,
    /// Total as reported at checkout; not recomputed.
    pub total: Price,
    pub customer_info: CustomerInfo,
    pub payment_info: PaymentInfo,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Input for creating an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub user_id: Option<UserId>,
    pub items: Vec<CartItem>,
    pub total: Price,
    pub customer_info: CustomerInfo,
    pub payment_info: PaymentInfo,
}
