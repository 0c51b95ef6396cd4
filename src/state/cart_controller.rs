//! Reactive cart handle shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components never touch `CartState` or the store directly. They call the
//! controller, which applies the mutation to the signal and, once the store
//! is open, writes the whole cart back with `replace_all`.
//!
//! The store is opened once at startup by [`CartController::connect`]. Until
//! it settles the cart is in `StoreStatus::Opening` and mutations are
//! refused, so a stored cart can never overwrite a click that happened
//! before the load finished.

#[cfg(test)]
#[path = "cart_controller_test.rs"]
mod cart_controller_test;

use leptos::prelude::*;

use super::cart::{CartError, CartState};
use crate::config::StoreConfig;
use crate::store::types::LineItem;
use crate::store::{self, CartStore, StoreError, StoreHandle};

#[derive(Clone, Copy)]
pub struct CartController {
    state: RwSignal<CartState>,
    store: StoredValue<Option<StoreHandle>, LocalStorage>,
    spawn_save: fn(PendingSave),
}

/// A cart snapshot waiting to be written with `replace_all`.
pub(crate) struct PendingSave {
    handle: StoreHandle,
    items: Vec<LineItem>,
}

impl PendingSave {
    async fn run(self) {
        if let Err(e) = self.handle.replace_all(&self.items).await {
            leptos::logging::error!("cart save failed ({} items): {e}", self.items.len());
        }
    }
}

fn spawn_local_save(save: PendingSave) {
    leptos::task::spawn_local(save.run());
}

impl CartController {
    pub fn new() -> Self {
        Self::with_saver(spawn_local_save)
    }

    /// Build a controller whose saves are handed to `spawn_save`.
    pub(crate) fn with_saver(spawn_save: fn(PendingSave)) -> Self {
        Self { state: RwSignal::new(CartState::default()), store: StoredValue::new_local(None), spawn_save }
    }

    /// The reactive cart for rendering.
    pub fn state(&self) -> RwSignal<CartState> {
        self.state
    }

    /// Open the store and load the persisted cart.
    ///
    /// Failures are logged and leave the cart in memory-only mode.
    pub fn connect(&self, config: StoreConfig) {
        let this = *self;
        leptos::task::spawn_local(async move {
            let opened = store::open(&config).await;
            this.attach(opened).await;
        });
    }

    /// Settle the cart against the result of opening the store.
    ///
    /// The handle is kept only if the initial read succeeds. Once the cart
    /// has settled, later calls are ignored.
    pub(crate) async fn attach(&self, opened: Result<StoreHandle, StoreError>) {
        if self.state.with_untracked(CartState::is_ready) {
            leptos::logging::debug_warn!("cart store already settled, ignoring");
            return;
        }

        let handle = match opened {
            Ok(handle) => handle,
            Err(e) => {
                leptos::logging::error!("cart store unavailable, keeping cart in memory: {e}");
                self.state.update(CartState::settle_unpersisted);
                return;
            }
        };

        match handle.read_all().await {
            Ok(items) => {
                leptos::logging::log!("cart loaded: {} items", items.len());
                self.store.set_value(Some(handle));
                self.state.update(|s| s.settle_persisted(items));
            }
            Err(e) => {
                leptos::logging::error!("cart load failed, keeping cart in memory: {e}");
                self.state.update(CartState::settle_unpersisted);
            }
        }
    }

    /// Add an item and persist.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Loading`] before the store has settled.
    pub fn add_item(&self, name: &str, price: f64) -> Result<(), CartError> {
        self.mutate(|s| s.add_item(name, price))?;
        self.persist();
        Ok(())
    }

    /// Remove the item at `index` and persist.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::IndexOutOfRange`] for a stale index and
    /// [`CartError::Loading`] before the store has settled.
    pub fn remove_item(&self, index: usize) -> Result<LineItem, CartError> {
        let removed = self.mutate(|s| s.remove_item(index))?;
        self.persist();
        Ok(removed)
    }

    /// Empty the cart and persist.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Loading`] before the store has settled.
    pub fn clear(&self) -> Result<(), CartError> {
        self.mutate(CartState::clear)?;
        self.persist();
        Ok(())
    }

    /// Apply `f` to the cart, notifying subscribers only if it succeeded.
    fn mutate<T>(&self, f: impl FnOnce(&mut CartState) -> Result<T, CartError>) -> Result<T, CartError> {
        let mut next = self.state.get_untracked();
        let out = f(&mut next)?;
        self.state.set(next);
        Ok(out)
    }

    fn persist(&self) {
        let Some(items) = self.state.with_untracked(|s| s.should_persist().then(|| s.items.clone())) else {
            return;
        };
        let Some(handle) = self.store.with_value(Clone::clone) else {
            leptos::logging::debug_warn!("cart persisted without a store handle");
            return;
        };
        (self.spawn_save)(PendingSave { handle, items });
    }
}

impl Default for CartController {
    fn default() -> Self {
        Self::new()
    }
}
