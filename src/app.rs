//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Html, Title, provide_meta_context};

use crate::config::StoreConfig;
use crate::pages::menu::MenuPage;
use crate::state::cart_controller::CartController;
use crate::state::hover::HoverState;

/// Root application component.
///
/// Provides the cart controller and tooltip state, then starts opening the
/// cart store. Cart controls stay disabled until the store settles.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let cart = CartController::new();
    let hover = RwSignal::new(HoverState::default());

    provide_context(cart);
    provide_context(hover);

    cart.connect(StoreConfig::default());

    view! {
        <Html attr:lang="ar" attr:dir="rtl"/>
        <Title text="قائمة الطعام"/>

        <MenuPage/>
    }
}
