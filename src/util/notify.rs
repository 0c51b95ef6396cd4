//! Blocking user notifications.
//!
//! In the browser this is `window.alert`; without a window the message is
//! logged instead.

pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_ok() {
                return;
            }
        }
    }
    leptos::logging::log!("{message}");
}
