//! Records persisted in the cart object store.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One cart entry: a name/price pair.
///
/// `id` is assigned by the store when the item is written and is only
/// present on items read back from it. Duplicate name/price pairs are
/// separate entries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
}

impl LineItem {
    /// Build a transient item that has not been persisted yet.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self { name: name.into(), price, id: None }
    }

    /// Borrow the fields that get written to the store.
    ///
    /// The id is left out so every write receives a fresh key.
    #[must_use]
    pub fn to_record(&self) -> NewRecord<'_> {
        NewRecord { name: &self.name, price: self.price }
    }
}

/// Insert payload for the store: a line item without its key.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct NewRecord<'a> {
    pub name: &'a str,
    pub price: f64,
}
