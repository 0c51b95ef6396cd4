//! Cart contents, running total, and the checkout/clear actions.
//!
//! The item list is rebuilt from scratch on every cart change. Each row's
//! remove button is bound to the row index at render time, which stays valid
//! because any removal triggers a fresh rebuild.

use leptos::prelude::*;

use crate::state::cart::CartState;
use crate::state::cart_controller::CartController;
use crate::util::messages::{
    CART_CLEARED, CART_LOADING, CART_TITLE, CHECKOUT_LABEL, CLEAR_LABEL, REMOVE_LABEL, checkout_summary, line_label,
    total_label,
};
use crate::util::notify;

#[component]
pub fn CartPanel() -> impl IntoView {
    let cart = expect_context::<CartController>();
    let state = cart.state();
    let ready = move || state.with(CartState::is_ready);

    let on_remove = move |index: usize| {
        if let Err(e) = cart.remove_item(index) {
            leptos::logging::warn!("remove from cart ignored: {e}");
        }
    };

    let on_checkout = move |_| notify::alert(&state.with_untracked(checkout_summary));

    let on_clear = move |_| match cart.clear() {
        Ok(()) => notify::alert(CART_CLEARED),
        Err(e) => leptos::logging::warn!("clear cart ignored: {e}"),
    };

    view! {
        <section id="cart" class="cart-panel">
            <h2 class="cart-panel__title">{CART_TITLE}</h2>

            <div id="cart-items" class="cart-panel__items">
                {move || {
                    state.with(|s| {
                        s.items
                            .iter()
                            .enumerate()
                            .map(|(index, item)| {
                                let label = line_label(item);
                                view! {
                                    <div class="cart-panel__row">
                                        <span class="cart-panel__label">{label}</span>
                                        <button
                                            class="btn remove-item"
                                            data-index=index.to_string()
                                            disabled=move || !ready()
                                            on:click=move |_| on_remove(index)
                                        >
                                            {REMOVE_LABEL}
                                        </button>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    })
                }}
            </div>

            <div id="cart-total" class="cart-panel__total">
                {move || state.with(|s| total_label(s.total))}
            </div>

            <Show when=move || !ready()>
                <div class="cart-panel__loading">{CART_LOADING}</div>
            </Show>

            <div class="cart-panel__actions">
                <button id="checkout" class="btn btn--primary" disabled=move || !ready() on:click=on_checkout>
                    {CHECKOUT_LABEL}
                </button>
                <button id="clear-cart" class="btn" disabled=move || !ready() on:click=on_clear>
                    {CLEAR_LABEL}
                </button>
            </div>
        </section>
    }
}
