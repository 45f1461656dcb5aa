//! Integration tests for the cart store.
//!
//! These tests drive `CartStore` through its public API over an in-memory
//! storage area and inspect the storage directly where the stored form
//! matters.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::sync::Arc;

use rust_decimal::Decimal;
use takeaway_cart::{CartStore, DEFAULT_CART_KEY, MemoryStorage, StorageArea};
use takeaway_core::{CartLineItem, ComboId, DishId, IdentityPolicy};
use takeaway_integration_tests::{combo, dish};

fn shared_cart() -> (CartStore<Arc<MemoryStorage>>, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    (CartStore::new(Arc::clone(&storage)), storage)
}

// =============================================================================
// Add / Merge
// =============================================================================

#[test]
fn test_distinct_adds_keep_first_seen_order() {
    let (cart, _) = shared_cart();
    let added = [dish(3, 500, 1), combo(1, 2000, 1), dish(1, 450, 2), combo(3, 1800, 1)];
    for item in added.clone() {
        cart.add_or_merge(item);
    }

    let items = cart.read();
    assert_eq!(items, added.to_vec());
}

#[test]
fn test_same_identity_accumulates_quantity() {
    let (cart, _) = shared_cart();
    cart.add_or_merge(dish(7, 900, 2));
    cart.add_or_merge(combo(7, 1500, 1));
    cart.add_or_merge(dish(7, 900, 3));

    let items = cart.read();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].dish_id, Some(DishId::new(7)));
    assert_eq!(items[0].quantity, 5);
    assert_eq!(items[1].combo_id, Some(ComboId::new(7)));
    assert_eq!(items[1].quantity, 1);
}

#[test]
fn test_merge_keeps_stored_fields() {
    let (cart, _) = shared_cart();
    cart.add_or_merge(dish(2, 600, 1).with_notes("no chili"));
    cart.add_or_merge(CartLineItem {
        name: "Other name".to_owned(),
        unit_price: Decimal::new(1, 0),
        notes: Some("extra chili".to_owned()),
        ..dish(2, 600, 4)
    });

    let items = cart.read();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Dish 2");
    assert_eq!(items[0].unit_price, Decimal::new(600, 2));
    assert_eq!(items[0].notes.as_deref(), Some("no chili"));
    assert_eq!(items[0].quantity, 5);
}

#[test]
fn test_lines_without_ids_merge_under_both_policies() {
    let untagged = CartLineItem {
        dish_id: None,
        combo_id: None,
        ..dish(0, 100, 1)
    };

    for policy in [IdentityPolicy::Tagged, IdentityPolicy::ZeroNormalized] {
        let cart = CartStore::new(MemoryStorage::new()).with_policy(policy);
        cart.add_or_merge(untagged.clone());
        cart.add_or_merge(untagged.clone());
        assert_eq!(cart.read().len(), 1, "policy {policy}");
    }
}

#[test]
fn test_absent_id_versus_explicit_zero() {
    let explicit_zero = CartLineItem {
        combo_id: Some(ComboId::new(0)),
        ..dish(4, 700, 1)
    };
    let dish_only = dish(4, 700, 1);

    let tagged = CartStore::new(MemoryStorage::new());
    tagged.add_or_merge(explicit_zero.clone());
    tagged.add_or_merge(dish_only.clone());
    assert_eq!(tagged.read().len(), 2);

    let legacy = CartStore::new(MemoryStorage::new()).with_policy(IdentityPolicy::ZeroNormalized);
    legacy.add_or_merge(explicit_zero);
    legacy.add_or_merge(dish_only);
    let items = legacy.read();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 2);
}

// =============================================================================
// Update / Remove
// =============================================================================

#[test]
fn test_update_to_zero_clamps_to_one() {
    let (cart, _) = shared_cart();
    cart.add_or_merge(dish(1, 100, 1));
    cart.add_or_merge(dish(2, 100, 6));

    cart.update_quantity(1, 0);
    let items = cart.read();
    assert_eq!(items[1].quantity, 1);
    assert_eq!(items[0].quantity, 1);
}

#[test]
fn test_update_out_of_range_leaves_cart_unchanged() {
    let (cart, storage) = shared_cart();
    cart.add_or_merge(dish(1, 100, 2));
    let before = storage.get(DEFAULT_CART_KEY).unwrap();

    assert!(!cart.update_quantity(1, 9));
    assert!(!cart.update_quantity(usize::MAX, 9));
    assert_eq!(storage.get(DEFAULT_CART_KEY).unwrap(), before);
}

#[test]
fn test_remove_shifts_and_preserves_order() {
    let (cart, _) = shared_cart();
    for id in 1..=5 {
        cart.add_or_merge(dish(id, 100, 1));
    }

    cart.remove_at(0);
    cart.remove_at(2);

    let ids: Vec<i64> = cart
        .read()
        .iter()
        .filter_map(|item| item.dish_id.as_ref().map(DishId::as_i64))
        .collect();
    assert_eq!(ids, vec![2, 3, 5]);
}

#[test]
fn test_remove_out_of_range_is_noop() {
    let (cart, storage) = shared_cart();
    assert!(cart.remove_at(0).is_none());
    assert!(storage.is_empty());

    cart.add_or_merge(dish(1, 100, 1));
    assert!(cart.remove_at(1).is_none());
    assert_eq!(cart.read().len(), 1);
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn test_clear_removes_key_rather_than_writing_empty_array() {
    let (cart, storage) = shared_cart();
    cart.add_or_merge(dish(1, 100, 1));
    cart.clear();

    assert!(cart.read().is_empty());
    assert!(!storage.contains(DEFAULT_CART_KEY).unwrap());

    cart.write(&[]);
    assert_eq!(storage.get(DEFAULT_CART_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_malformed_text_reads_as_empty() {
    let (cart, storage) = shared_cart();
    for text in ["", "null", "{", "[{\"name\":\"missing fields\"}]", "[{\"dishId\":1,\"name\":\"x\",\"unitPrice\":1,\"quantity\":-2}]"] {
        storage.set(DEFAULT_CART_KEY, text).unwrap();
        assert!(cart.read().is_empty(), "text {text:?}");
    }
}

#[test]
fn test_price_outside_decimal_range_makes_text_malformed() {
    let (cart, storage) = shared_cart();
    storage
        .set(
            DEFAULT_CART_KEY,
            r#"[{"dishId":1,"name":"Pho","unitPrice":12,"quantity":1},{"dishId":2,"name":"x","unitPrice":1e30,"quantity":1}]"#,
        )
        .unwrap();

    assert!(cart.read().is_empty());
    assert!(cart.summary().is_empty());
}

#[test]
fn test_add_after_malformed_text_starts_fresh() {
    let (cart, storage) = shared_cart();
    storage.set(DEFAULT_CART_KEY, "corrupt").unwrap();

    cart.add_or_merge(dish(1, 100, 2));
    assert_eq!(cart.read(), vec![dish(1, 100, 2)]);
}

#[test]
fn test_write_then_read_roundtrip() {
    let (cart, _) = shared_cart();
    let items = vec![
        dish(1, 1299, 2).with_notes("no peanuts"),
        combo(2, 3450, 1),
        CartLineItem {
            combo_id: Some(ComboId::new(9)),
            ..dish(3, 5, 40)
        },
    ];

    cart.write(&items);
    assert_eq!(cart.read(), items);
}

#[test]
fn test_write_then_read_keeps_long_prices_exact() {
    let (cart, _) = shared_cart();
    let items = vec![
        CartLineItem {
            unit_price: "1.2345678901234567890123".parse().unwrap(),
            ..dish(1, 100, 1)
        },
        CartLineItem {
            unit_price: Decimal::MAX,
            ..combo(2, 100, 1)
        },
    ];

    cart.write(&items);
    let read = cart.read();
    assert_eq!(read, items);
    assert_eq!(read[0].unit_price.to_string(), "1.2345678901234567890123");
}

#[test]
fn test_stored_form_matches_front_end_layout() {
    let (cart, storage) = shared_cart();
    cart.add_or_merge(dish(5, 1250, 2).with_notes("spicy"));

    let stored = storage.get(DEFAULT_CART_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "dishId": 5,
            "name": "Dish 5",
            "unitPrice": 12.5,
            "quantity": 2,
            "notes": "spicy"
        }])
    );
}

#[test]
fn test_two_stores_share_one_area() {
    let (cart, storage) = shared_cart();
    let other = CartStore::new(Arc::clone(&storage));

    cart.add_or_merge(dish(1, 100, 1));
    other.add_or_merge(dish(1, 100, 1));

    assert_eq!(cart.read()[0].quantity, 2);
}

#[test]
fn test_summary_tracks_mutations() {
    let (cart, _) = shared_cart();
    cart.add_or_merge(dish(1, 450, 2));
    cart.add_or_merge(combo(1, 2000, 1));
    cart.update_quantity(1, 3);

    let summary = cart.summary();
    assert_eq!(summary.line_count, 2);
    assert_eq!(summary.item_count, 5);
    assert_eq!(summary.subtotal, Decimal::new(6900, 2));

    cart.clear();
    assert!(cart.summary().is_empty());
}

#[test]
fn test_summary_of_huge_stored_prices_saturates() {
    let (cart, storage) = shared_cart();
    storage
        .set(
            DEFAULT_CART_KEY,
            r#"[{"dishId":1,"name":"Gold Leaf Platter","unitPrice":10000000000000000000000000000,"quantity":100}]"#,
        )
        .unwrap();
    assert_eq!(cart.read().len(), 1);

    let summary = cart.summary();
    assert_eq!(summary.item_count, 100);
    assert_eq!(summary.subtotal, Decimal::MAX);
}
