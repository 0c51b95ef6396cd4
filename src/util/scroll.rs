//! Smooth scrolling for same-page anchor links.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Element id referenced by a same-page `href`, e.g. `#mains` -> `mains`.
///
/// Returns `None` for anything that is not a non-empty fragment link.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Smoothly scroll the element referenced by `href` into view.
///
/// Returns `false` without doing anything when `href` is not a fragment
/// link or no element carries that id.
pub fn scroll_to_anchor(href: &str) -> bool {
    let Some(id) = anchor_target(href) else {
        return false;
    };

    #[cfg(feature = "csr")]
    {
        let Some(target) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            leptos::logging::debug_warn!("scroll target #{id} not found");
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        false
    }
}
