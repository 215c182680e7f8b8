use fake::Fake;
use pharmacy_cart::{
    domain::{
        cart::{AggregatedCart, CartItem, DEFAULT_STORAGE_KEY},
        fake::Medicine,
    },
    infra::storage::{FileSessionStore, KeyValueStore},
    open_cart, open_session_store,
};

use crate::test_utils::{TempRoot, test_settings};

#[test]
fn cart_survives_reopening_the_session() {
    let root = TempRoot::new();
    let settings = test_settings(&root);

    let mut cart = open_cart(&settings, open_session_store(&settings, None).unwrap());
    cart.add_items([CartItem::new("1").with_quantity(2)]).unwrap();
    drop(cart);

    let mut cart = open_cart(&settings, open_session_store(&settings, None).unwrap());
    cart.add_items([CartItem::new("1").with_quantity(3)]).unwrap();

    let items = cart.get_items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 5);
}

#[test]
fn sessions_do_not_share_carts() {
    let root = TempRoot::new();
    let settings = test_settings(&root);

    let mut first = open_cart(&settings, open_session_store(&settings, Some("tab-1")).unwrap());
    let second = open_cart(&settings, open_session_store(&settings, Some("tab-2")).unwrap());
    first.add_items([Medicine.fake::<CartItem>()]).unwrap();

    assert_eq!(first.get_items().len(), 1);
    assert!(second.get_items().is_empty());
}

#[test]
fn corrupt_file_is_read_as_an_empty_cart() {
    let root = TempRoot::new();
    let mut store = FileSessionStore::new(&root.0, "s").unwrap();
    store.set(DEFAULT_STORAGE_KEY, "{\"items\": [").unwrap();

    let mut cart = AggregatedCart::new(store);
    assert!(cart.get_cart().is_empty());

    // The next write replaces the corrupt value.
    cart.add_items([CartItem::new("1")]).unwrap();
    assert_eq!(cart.get_items().len(), 1);
}

#[test]
fn scoped_operations_across_prescriptions_and_pharmacies() {
    let root = TempRoot::new();
    let mut cart = AggregatedCart::new(FileSessionStore::new(&root.0, "s").unwrap());
    cart.add_items([
        CartItem::new("1").with_prescription_id("RX1").with_pharmacy_name("A"),
        CartItem::new("2").with_prescription_id("RX1").with_pharmacy_name("B"),
        CartItem::new("3").with_prescription_id("RX2").with_pharmacy_name("A"),
        CartItem::new("4"),
    ])
    .unwrap();

    cart.set_items_for_prescription_and_pharmacy(
        "RX1",
        Some("A"),
        [CartItem::new("9").with_quantity(2)],
    )
    .unwrap();
    let rx1: Vec<String> = cart
        .get_items_by_prescription(Some("RX1"))
        .iter()
        .map(|i| format!("{}@{}x{}", i.id, i.pharmacy_name, i.quantity))
        .collect();
    assert_eq!(rx1, vec!["2@Bx1", "9@Ax2"]);

    cart.clear_prescription(Some("RX1")).unwrap();
    let left: Vec<String> = cart.get_items().iter().map(|i| i.id.to_string()).collect();
    assert_eq!(left, vec!["3", "4"]);
}

#[test]
fn end_session_discards_the_cart() {
    let root = TempRoot::new();
    let settings = test_settings(&root);
    let mut cart = open_cart(&settings, open_session_store(&settings, None).unwrap());
    cart.add_items([Medicine.fake::<CartItem>()]).unwrap();

    let mut store = cart.into_store();
    store.end_session().unwrap();

    let cart = open_cart(&settings, store);
    assert!(cart.get_cart().is_empty());
}
