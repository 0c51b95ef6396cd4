//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser calls (alerts, scrolling) and user-facing strings live here so
//! components stay small and the text can be tested without a DOM.

pub mod messages;
pub mod notify;
pub mod scroll;
