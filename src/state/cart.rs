//! Cart line items, running total, and store status.
//!
//! DESIGN
//! ======
//! `CartState` is plain data plus the mutation rules; it knows nothing about
//! signals or the store. `CartController` wraps it in a signal and mirrors
//! every accepted mutation into the store.
//!
//! The total is adjusted incrementally on add/remove and recomputed from the
//! items whenever a stored cart is loaded.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use crate::store::types::LineItem;

/// Rejected cart mutations. The cart is left unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CartError {
    #[error("no cart item at index {index} (cart has {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("cart is still loading")]
    Loading,
}

/// Whether cart mutations are mirrored to the local store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StoreStatus {
    /// Store open and initial load in flight; mutations are held back.
    #[default]
    Opening,
    /// Store open and loaded; every mutation is persisted.
    Persisted,
    /// Store could not be used; the cart lives in memory for this session.
    Unpersisted,
}

/// The shopper's cart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartState {
    pub items: Vec<LineItem>,
    pub total: f64,
    pub status: StoreStatus,
}

impl CartState {
    /// Whether the store has settled and mutations are accepted.
    pub fn is_ready(&self) -> bool {
        self.status != StoreStatus::Opening
    }

    /// Whether accepted mutations should be written to the store.
    pub fn should_persist(&self) -> bool {
        self.status == StoreStatus::Persisted
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item and add its price to the total.
    ///
    /// Name and price are taken as given.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Loading`] while the store is still opening.
    pub fn add_item(&mut self, name: impl Into<String>, price: f64) -> Result<(), CartError> {
        self.ensure_ready()?;
        self.items.push(LineItem::new(name, price));
        self.total += price;
        Ok(())
    }

    /// Remove the item at `index`, keeping the order of the rest.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::IndexOutOfRange`] for an index past the end and
    /// [`CartError::Loading`] while the store is still opening.
    pub fn remove_item(&mut self, index: usize) -> Result<LineItem, CartError> {
        self.ensure_ready()?;
        if index >= self.items.len() {
            return Err(CartError::IndexOutOfRange { index, len: self.items.len() });
        }
        let removed = self.items.remove(index);
        self.total -= removed.price;
        if self.items.is_empty() {
            self.total = 0.0;
        }
        Ok(removed)
    }

    /// Empty the cart and reset the total.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Loading`] while the store is still opening.
    pub fn clear(&mut self) -> Result<(), CartError> {
        self.ensure_ready()?;
        self.items.clear();
        self.total = 0.0;
        Ok(())
    }

    /// Replace the cart with stored items and recompute the total.
    pub fn load_from_store(&mut self, items: Vec<LineItem>) {
        self.total = items.iter().map(|item| item.price).sum();
        self.items = items;
    }

    /// Finish opening with a working store and its stored items.
    ///
    /// Ignored once the status has settled.
    pub fn settle_persisted(&mut self, items: Vec<LineItem>) {
        if self.status != StoreStatus::Opening {
            return;
        }
        self.load_from_store(items);
        self.status = StoreStatus::Persisted;
    }

    /// Finish opening without a store; the cart stays in memory.
    ///
    /// Ignored once the status has settled.
    pub fn settle_unpersisted(&mut self) {
        if self.status == StoreStatus::Opening {
            self.status = StoreStatus::Unpersisted;
        }
    }

    fn ensure_ready(&self) -> Result<(), CartError> {
        if self.is_ready() { Ok(()) } else { Err(CartError::Loading) }
    }
}
