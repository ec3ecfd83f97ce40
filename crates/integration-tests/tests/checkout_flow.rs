//! Orders placed from the cart.

#![allow(clippy::unwrap_used)]

use floralink_core::{Category, OrderStatus, PaymentMethod, Price};
use floralink_integration_tests::{create_product, empty_store};
use floralink_storefront::models::CustomerInfo;
use floralink_storefront::services::{CheckoutError, CheckoutRequest, PaymentDetails};

fn customer() -> CustomerInfo {
    CustomerInfo {
        full_name: "Juan Dela Cruz".to_owned(),
        phone: "09171234567".to_owned(),
        delivery_address: "123 Ayala Ave, Makati City".to_owned(),
    }
}

fn card(number: &str) -> CheckoutRequest {
    CheckoutRequest {
        customer: customer(),
        payment: PaymentDetails::Card {
            card_number: number.to_owned(),
        },
    }
}

#[test]
fn test_checkout_requires_login_then_items() {
    let app = empty_store();
    assert_eq!(
        app.checkout().place_order(card("4111 1111 1111 1111")).unwrap_err(),
        CheckoutError::NotAuthenticated
    );

    app.auth().signup("Juan", "juan@x.com", "password1").unwrap();
    assert_eq!(
        app.checkout().place_order(card("4111 1111 1111 1111")).unwrap_err(),
        CheckoutError::EmptyCart
    );
    assert!(app.orders().list().is_empty());
}

#[test]
fn test_card_checkout_creates_order_and_clears_cart() {
    let app = empty_store();
    let rose = create_product(&app, "Red Rose", 4999, Category::Romantic);
    let user = app.auth().signup("Juan", "juan@x.com", "password1").unwrap();
    app.cart().add_item(&rose.id, 3);

    let order = app.checkout().place_order(card("4111 1111 1111 4242")).unwrap();

    assert_eq!(order.user_id, Some(user.id.clone()));
    assert_eq!(order.total, Price::from_cents(14997).unwrap());
    assert_eq!(order.status, OrderStatus::pending());
    assert_eq!(order.customer_info, customer());
    assert_eq!(order.payment_info.method, PaymentMethod::Card);
    assert_eq!(order.payment_info.card_last4.as_deref(), Some("4242"));
    assert_eq!(order.items.len(), 1);

    assert!(app.cart().items().is_empty());
    assert_eq!(app.orders().get_by_id(&order.id).unwrap(), order);
    assert_eq!(app.orders().list_by_user(&user.id).len(), 1);
}

#[test]
fn test_gcash_needs_screenshot() {
    let app = empty_store();
    let rose = create_product(&app, "Red Rose", 4999, Category::Romantic);
    app.auth().signup("Juan", "juan@x.com", "password1").unwrap();
    app.cart().add_item(&rose.id, 1);

    let missing = CheckoutRequest {
        customer: customer(),
        payment: PaymentDetails::Gcash {
            screenshot_name: String::new(),
        },
    };
    assert!(matches!(
        app.checkout().place_order(missing),
        Err(CheckoutError::MissingPaymentDetails(_))
    ));
    assert_eq!(app.cart().item_count(), 1);

    let order = app
        .checkout()
        .place_order(CheckoutRequest {
            customer: customer(),
            payment: PaymentDetails::Gcash {
                screenshot_name: "receipt.png".to_owned(),
            },
        })
        .unwrap();
    assert_eq!(order.payment_info.screenshot_name.as_deref(), Some("receipt.png"));
}

#[test]
fn test_status_updates_are_free_form() {
    let app = empty_store();
    let rose = create_product(&app, "Red Rose", 4999, Category::Romantic);
    app.auth().signup("Juan", "juan@x.com", "password1").unwrap();
    app.cart().add_item(&rose.id, 1);
    let order = app.checkout().place_order(card("4242")).unwrap();

    assert!(app.orders().update_status(&order.id, "out-for-delivery"));
    assert_eq!(
        app.orders().get_by_id(&order.id).unwrap().status.as_str(),
        "out-for-delivery"
    );
    assert!(!app.orders().update_status(&"missing".into(), "delivered"));
}
