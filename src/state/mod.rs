//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `cart` holds the cart rules as plain data, `cart_controller` connects it
//! to signals and the store, and `hover` tracks the one visible tooltip.

pub mod cart;
pub mod cart_controller;
pub mod hover;
