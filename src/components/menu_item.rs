//! Menu dish card with add-to-cart button and hover tooltip.

use leptos::prelude::*;

use crate::config::MenuItem;
use crate::state::cart::CartState;
use crate::state::cart_controller::CartController;
use crate::state::hover::{HoverState, MenuItemKey};
use crate::util::messages::{ADD_LABEL, added_to_cart, price_label};
use crate::util::notify;

/// One dish: name, description, price, and an add-to-cart button.
///
/// Hovering shows a tooltip built from the same dish data.
#[component]
pub fn MenuItemCard(item: MenuItem, item_key: MenuItemKey) -> impl IntoView {
    let cart = expect_context::<CartController>();
    let hover = expect_context::<RwSignal<HoverState>>();
    let ready = move || cart.state().with(CartState::is_ready);

    let MenuItem { name, description, price } = item;
    let price_text = price_label(price);

    let on_add = {
        let name = name.clone();
        move |_| match cart.add_item(&name, price) {
            Ok(()) => notify::alert(&added_to_cart(&name)),
            Err(e) => leptos::logging::warn!("add to cart ignored: {e}"),
        }
    };

    let data_name = name.clone();
    let tip_name = name.clone();
    let tip_description = description.clone();
    let tip_price = price_text.clone();

    view! {
        <div
            class="menu-item"
            on:mouseenter=move |_| hover.update(|h| h.enter(item_key))
            on:mouseleave=move |_| hover.update(|h| h.leave(item_key))
        >
            <h4>{name}</h4>
            <p>{description}</p>
            <span class="price">{price_text}</span>
            <button
                class="btn add-to-cart"
                data-name=data_name
                data-price=price.to_string()
                disabled=move || !ready()
                on:click=on_add
            >
                {ADD_LABEL}
            </button>
            <Show when=move || hover.with(|h| h.shows_tooltip(item_key))>
                <Tooltip
                    name=tip_name.clone()
                    description=tip_description.clone()
                    price=tip_price.clone()
                />
            </Show>
        </div>
    }
}

#[component]
fn Tooltip(name: String, description: String, price: String) -> impl IntoView {
    view! {
        <div class="tooltip">
            <strong>{name}</strong>
            <br/>
            {description}
            <br/>
            <em>{price}</em>
        </div>
    }
}
