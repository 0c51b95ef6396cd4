use super::*;

fn cart_with(prices: &[f64]) -> CartState {
    let mut cart = CartState::default();
    cart.settle_unpersisted();
    for (i, price) in prices.iter().enumerate() {
        cart.add_item(format!("item-{i}"), *price).unwrap();
    }
    cart
}

// =============================================================
// Labels
// =============================================================

#[test]
fn price_label_uses_shortest_number_form() {
    assert_eq!(price_label(5.0), "5 دولار");
    assert_eq!(price_label(3.5), "3.5 دولار");
}

#[test]
fn line_label_joins_name_and_price() {
    let item = LineItem::new("فلافل", 3.5);
    assert_eq!(line_label(&item), "فلافل - 3.5 دولار");
}

#[test]
fn total_label_formats_two_decimals() {
    assert_eq!(total_label(0.0), "المجموع: 0.00 دولار");
    assert_eq!(total_label(8.5), "المجموع: 8.50 دولار");
}

#[test]
fn added_to_cart_names_item() {
    assert_eq!(added_to_cart("كنافة"), "تم إضافة كنافة إلى السلة!");
}

// =============================================================
// Checkout
// =============================================================

#[test]
fn checkout_on_empty_cart_warns_without_total() {
    let summary = checkout_summary(&cart_with(&[]));
    assert_eq!(summary, CART_EMPTY);
    assert!(!summary.contains("0.00"));
    assert!(!summary.contains(PAYMENT_METHOD));
}

#[test]
fn checkout_reports_total_and_payment_method() {
    let summary = checkout_summary(&cart_with(&[5.0, 3.5]));
    assert_eq!(summary, format!("إجمالي الفاتورة: 8.50 دولار\n{PAYMENT_METHOD}"));
}

#[test]
fn checkout_does_not_modify_cart() {
    let cart = cart_with(&[5.0]);
    let before = cart.clone();
    let _ = checkout_summary(&cart);
    assert_eq!(cart, before);
}

#[test]
fn checkout_while_loading_reports_loading_not_empty() {
    let summary = checkout_summary(&CartState::default());
    assert_eq!(summary, CART_LOADING);
    assert_ne!(summary, CART_EMPTY);
}
