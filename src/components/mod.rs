//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the menu and cart while reading/writing shared state
//! from Leptos context providers.

pub mod cart_panel;
pub mod menu_item;
pub mod menu_section;
pub mod nav_bar;
