//! A titled group of dish cards; the section id is the nav anchor.

use leptos::prelude::*;

use crate::components::menu_item::MenuItemCard;
use crate::config::MenuSection;
use crate::state::hover::MenuItemKey;

#[component]
pub fn MenuSectionView(index: usize, section: MenuSection) -> impl IntoView {
    let MenuSection { id, title, items } = section;

    view! {
        <section id=id class="menu-section">
            <h3 class="menu-section__title">{title}</h3>
            <div class="menu-section__items">
                {items
                    .into_iter()
                    .enumerate()
                    .map(|(item_index, item)| {
                        let item_key = MenuItemKey { section: index, item: item_index };
                        view! { <MenuItemCard item=item item_key=item_key/> }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
