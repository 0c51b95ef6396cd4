//! Fixed Arabic strings shown by the cart and its notifications.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use crate::state::cart::CartState;
use crate::store::types::LineItem;

pub const CURRENCY: &str = "دولار";
pub const REMOVE_LABEL: &str = "إزالة";
pub const ADD_LABEL: &str = "أضف إلى السلة";
pub const CHECKOUT_LABEL: &str = "إتمام الطلب";
pub const CLEAR_LABEL: &str = "مسح السلة";
pub const CART_TITLE: &str = "سلة المشتريات";
pub const CART_LOADING: &str = "جارٍ تحميل السلة...";
pub const CART_EMPTY: &str = "السلة فارغة. يرجى إضافة منتجات أولاً.";
pub const CART_CLEARED: &str = "تم مسح السلة.";
pub const PAYMENT_METHOD: &str = "طريقة الدفع: نقدي أو بطاقة ائتمانية عند الاستلام.";

/// Price as written on the menu and in cart rows, e.g. `3.5 دولار`.
pub fn price_label(price: f64) -> String {
    format!("{price} {CURRENCY}")
}

/// One cart row, e.g. `فلافل - 3.5 دولار`.
pub fn line_label(item: &LineItem) -> String {
    format!("{} - {}", item.name, price_label(item.price))
}

/// Cart total display, always with two decimals.
pub fn total_label(total: f64) -> String {
    format!("المجموع: {total:.2} {CURRENCY}")
}

pub fn added_to_cart(name: &str) -> String {
    format!("تم إضافة {name} إلى السلة!")
}

/// Checkout notification: a warning for an empty cart, otherwise the order
/// total followed by the payment method line. A cart still loading from the
/// store has no total to report yet.
pub fn checkout_summary(cart: &CartState) -> String {
    if !cart.is_ready() {
        return CART_LOADING.to_owned();
    }
    if cart.is_empty() {
        return CART_EMPTY.to_owned();
    }
    format!("إجمالي الفاتورة: {:.2} {CURRENCY}\n{PAYMENT_METHOD}", cart.total)
}
