//! Product CRUD through the storefront.

#![allow(clippy::unwrap_used)]

use floralink_core::{Category, Price, ProductId};
use floralink_integration_tests::{empty_store, product_form, seeded_store};
use floralink_storefront::models::{NewProduct, ProductPatch};
use floralink_storefront::services::ProductError;

#[test]
fn test_create_round_trips_every_field() {
    let app = empty_store();
    let mut form = product_form("Bridal Bouquet", 12999, Category::WeddingEngagement);
    form.featured = true;

    let created = app.products().create(form.clone()).unwrap();
    let fetched = app.products().get_by_id(&created.id).unwrap();

    assert_eq!(fetched, created);
    assert_eq!(Some(fetched.name), form.name);
    assert_eq!(Some(fetched.description), form.description);
    assert_eq!(Some(fetched.price), form.price);
    assert_eq!(Some(fetched.image_url), form.image_url);
    assert_eq!(Some(fetched.category), form.category);
    assert!(fetched.featured);
    assert_eq!(fetched.created_at, fetched.updated_at);
}

#[test]
fn test_create_reports_missing_fields() {
    let app = empty_store();
    let err = app
        .products()
        .create(NewProduct {
            name: Some("  ".to_owned()),
            ..NewProduct::default()
        })
        .unwrap_err();
    assert_eq!(
        err,
        ProductError::MissingFields(vec!["name", "price", "category", "imageUrl"])
    );
    assert!(app.products().list().is_empty());
}

#[test]
fn test_update_and_delete_unknown_ids() {
    let app = empty_store();
    let ghost = ProductId::new("ghost");
    assert!(!app.products().update(&ghost, ProductPatch::default()));
    assert!(!app.products().delete(&ghost));
}

#[test]
fn test_update_keeps_identity() {
    let app = empty_store();
    let created = app
        .products()
        .create(product_form("Spring Mix", 4499, Category::SeasonalSpecialDays))
        .unwrap();

    assert!(app.products().update(
        &created.id,
        ProductPatch {
            name: Some("Spring Garden Mix".to_owned()),
            price: Some(Price::from_cents(4999).unwrap()),
            ..ProductPatch::default()
        },
    ));

    let updated = app.products().get_by_id(&created.id).unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.name, "Spring Garden Mix");
    assert_eq!(updated.category, Category::SeasonalSpecialDays);
    assert!(updated.updated_at >= created.updated_at);
}

#[test]
fn test_seeded_catalogue_queries() {
    let app = seeded_store();
    let products = app.products();

    assert_eq!(products.list().len(), 15);
    assert_eq!(products.list_by_category("Wedding & Engagement").len(), 3);
    assert!(products.list_by_category("Wedding%20%26%20Engagement").is_empty());

    let featured = products.list_featured(6);
    assert_eq!(featured.len(), 6);
    assert!(featured.iter().all(|p| p.featured));
    assert_eq!(products.list_featured(2).len(), 2);
}
