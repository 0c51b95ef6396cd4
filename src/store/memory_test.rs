use futures::executor::block_on;

use super::*;

fn names_and_prices(items: &[LineItem]) -> Vec<(String, u64)> {
    let mut pairs: Vec<_> = items.iter().map(|i| (i.name.clone(), i.price.to_bits())).collect();
    pairs.sort();
    pairs
}

// =============================================================
// read_all
// =============================================================

#[test]
fn new_store_reads_empty() {
    let store = MemoryStore::new();
    assert!(block_on(store.read_all()).unwrap().is_empty());
    assert!(store.is_empty());
}

// =============================================================
// replace_all
// =============================================================

#[test]
fn replace_all_assigns_ids_in_insert_order() {
    let store = MemoryStore::new();
    let items = vec![LineItem::new("حمص", 4.0), LineItem::new("شاي", 1.5)];
    block_on(store.replace_all(&items)).unwrap();

    let stored = block_on(store.read_all()).unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].name, "حمص");
    assert_eq!(stored[0].id, Some(1));
    assert_eq!(stored[1].name, "شاي");
    assert_eq!(stored[1].id, Some(2));
}

#[test]
fn replace_all_discards_previous_records_and_ids() {
    let store = MemoryStore::new();
    block_on(store.replace_all(&[LineItem::new("a", 1.0), LineItem::new("b", 2.0)])).unwrap();

    let reloaded = block_on(store.read_all()).unwrap();
    block_on(store.replace_all(&reloaded[1..])).unwrap();

    let stored = block_on(store.read_all()).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "b");
    assert_eq!(stored[0].id, Some(3));
}

#[test]
fn replace_all_with_empty_slice_clears_store() {
    let store = MemoryStore::new();
    block_on(store.replace_all(&[LineItem::new("a", 1.0)])).unwrap();
    block_on(store.replace_all(&[])).unwrap();
    assert!(store.is_empty());
}

#[test]
fn duplicate_items_are_stored_separately() {
    let store = MemoryStore::new();
    let items = vec![LineItem::new("كنافة", 5.0), LineItem::new("كنافة", 5.0)];
    block_on(store.replace_all(&items)).unwrap();
    assert_eq!(store.len(), 2);
}

#[test]
fn clones_share_records() {
    let store = MemoryStore::new();
    let other = store.clone();
    block_on(store.replace_all(&[LineItem::new("a", 1.0)])).unwrap();
    assert_eq!(other.len(), 1);
}

// =============================================================
// Round trip
// =============================================================

#[test]
fn persist_then_reload_preserves_name_price_multiset() {
    let store = MemoryStore::new();
    let cart = vec![
        LineItem::new("فلافل", 3.5),
        LineItem::new("شاي", 1.5),
        LineItem::new("فلافل", 3.5),
    ];
    block_on(store.replace_all(&cart)).unwrap();
    let reloaded = block_on(store.read_all()).unwrap();

    block_on(store.replace_all(&reloaded)).unwrap();
    let again = block_on(store.read_all()).unwrap();

    assert_eq!(names_and_prices(&cart), names_and_prices(&again));
    assert!(again.iter().all(|i| i.id.is_some()));
}
