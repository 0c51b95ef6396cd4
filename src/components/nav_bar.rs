//! Top navigation with smooth-scrolling section links.

use leptos::prelude::*;

use crate::config::MenuSection;
use crate::util::messages::CART_TITLE;
use crate::util::scroll::{anchor_target, scroll_to_anchor};

/// Links to every menu section plus the cart.
#[component]
pub fn NavBar(sections: Vec<MenuSection>) -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <ul class="nav-bar__links">
                {sections
                    .into_iter()
                    .map(|section| {
                        view! {
                            <li>
                                <AnchorLink href=format!("#{}", section.id) label=section.title/>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
                <li>
                    <AnchorLink href="#cart".to_owned() label=CART_TITLE.to_owned()/>
                </li>
            </ul>
        </nav>
    }
}

/// Anchor that scrolls smoothly to a same-page target instead of jumping.
///
/// Links that are not `#fragment` hrefs keep their default navigation.
#[component]
pub fn AnchorLink(href: String, label: String) -> impl IntoView {
    let target = href.clone();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        if anchor_target(&target).is_none() {
            return;
        }
        ev.prevent_default();
        scroll_to_anchor(&target);
    };

    view! {
        <a class="nav-bar__link" href=href on:click=on_click>
            {label}
        </a>
    }
}
