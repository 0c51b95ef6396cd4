//! In-memory store backend with auto-incrementing keys.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::types::LineItem;
use super::{CartStore, StoreError};

/// Shared in-memory collection. Clones point at the same records.
///
/// Keys keep counting up across clears, the same way an auto-increment key
/// generator never reuses a number.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryInner>>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    next_id: u32,
    records: BTreeMap<u32, LineItem>,
    #[cfg(test)]
    fail_reads: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently stored.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.inner.borrow().records.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Make every later `read_all` fail, as a broken database would.
    #[cfg(test)]
    pub(crate) fn fail_reads(&self) {
        self.inner.borrow_mut().fail_reads = true;
    }
}

impl CartStore for MemoryStore {
    async fn replace_all(&self, items: &[LineItem]) -> Result<(), StoreError> {
        let mut inner = self.inner.borrow_mut();
        inner.records.clear();
        for item in items {
            inner.next_id += 1;
            let id = inner.next_id;
            let record = item.to_record();
            inner
                .records
                .insert(id, LineItem { name: record.name.to_owned(), price: record.price, id: Some(id) });
        }
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<LineItem>, StoreError> {
        #[cfg(test)]
        if self.inner.borrow().fail_reads {
            return Err(StoreError::Request("read failed".to_owned()));
        }
        Ok(self.inner.borrow().records.values().cloned().collect())
    }
}
