//! Restaurant menu page: navigation, menu sections, and the cart.

use leptos::prelude::*;

use crate::components::cart_panel::CartPanel;
use crate::components::menu_section::MenuSectionView;
use crate::components::nav_bar::NavBar;
use crate::config::MenuConfig;

/// Menu page rendered from the embedded catalog.
///
/// A catalog that fails to load is logged and rendered as an empty menu;
/// the cart still works.
#[component]
pub fn MenuPage() -> impl IntoView {
    let menu = MenuConfig::embedded().unwrap_or_else(|e| {
        leptos::logging::error!("menu catalog failed to load: {e}");
        MenuConfig::default()
    });
    let MenuConfig { restaurant, sections } = menu;
    let nav_sections = sections.clone();

    view! {
        <div class="menu-page">
            <header class="menu-page__header">
                <h1 class="menu-page__title">{restaurant}</h1>
                <NavBar sections=nav_sections/>
            </header>

            <main class="menu-page__menu">
                {sections
                    .into_iter()
                    .enumerate()
                    .map(|(index, section)| view! { <MenuSectionView index=index section=section/> })
                    .collect::<Vec<_>>()}
            </main>

            <CartPanel/>
        </div>
    }
}
