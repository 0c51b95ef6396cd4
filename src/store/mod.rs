//! Local persistence for cart line items.
//!
//! SYSTEM CONTEXT
//! ==============
//! The cart is mirrored into a single browser-local collection with a
//! read-all / replace-all contract. `indexed_db` is the browser backend
//! (compiled with `csr`); `memory` backs native builds and tests. Callers
//! hold a [`StoreHandle`] and never see which backend they got.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns [`StoreError`]. Nothing here retries; callers log
//! the error and keep working from in-memory state.

pub mod memory;
pub mod types;

#[cfg(feature = "csr")]
pub mod indexed_db;

use std::future::Future;

use crate::config::StoreConfig;
use memory::MemoryStore;
use types::LineItem;

/// Failures reported by a store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The environment offers no persistent store (no window or no factory).
    #[error("local store unavailable")]
    Unavailable,
    /// The database could not be opened or upgraded.
    #[error("failed to open store: {0}")]
    Open(String),
    /// Another connection holds an older version open.
    #[error("store open blocked by another connection")]
    Blocked,
    /// A transaction could not start, failed, or was aborted.
    #[error("store transaction failed: {0}")]
    Transaction(String),
    /// A single read or write request failed.
    #[error("store request failed: {0}")]
    Request(String),
    /// A record could not be converted to or from JSON.
    #[error("store record encoding failed: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The completion callback was dropped before it fired.
    #[error("store request canceled")]
    Canceled,
}

/// Read-all / replace-all access to the persisted cart.
pub trait CartStore {
    /// Clear the collection, then insert every item as a new record.
    ///
    /// Each record receives a fresh id; ids carried by `items` are ignored.
    fn replace_all(&self, items: &[LineItem]) -> impl Future<Output = Result<(), StoreError>>;

    /// Return every record in the backend's iteration order.
    fn read_all(&self) -> impl Future<Output = Result<Vec<LineItem>, StoreError>>;
}

/// An opened store of either backend.
#[derive(Clone, Debug)]
pub enum StoreHandle {
    Memory(MemoryStore),
    #[cfg(feature = "csr")]
    IndexedDb(indexed_db::IdbStore),
}

impl CartStore for StoreHandle {
    async fn replace_all(&self, items: &[LineItem]) -> Result<(), StoreError> {
        match self {
            Self::Memory(store) => store.replace_all(items).await,
            #[cfg(feature = "csr")]
            Self::IndexedDb(store) => store.replace_all(items).await,
        }
    }

    async fn read_all(&self) -> Result<Vec<LineItem>, StoreError> {
        match self {
            Self::Memory(store) => store.read_all().await,
            #[cfg(feature = "csr")]
            Self::IndexedDb(store) => store.read_all().await,
        }
    }
}

/// Open (or create) the configured store.
///
/// In the browser this opens IndexedDB and creates the collection on first
/// use. Native builds get a fresh in-memory store.
///
/// # Errors
///
/// Returns [`StoreError`] if the browser denies access or the open request
/// fails or is blocked.
#[allow(clippy::unused_async)]
pub async fn open(config: &StoreConfig) -> Result<StoreHandle, StoreError> {
    #[cfg(feature = "csr")]
    {
        indexed_db::IdbStore::open(config).await.map(StoreHandle::IndexedDb)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        Ok(StoreHandle::Memory(MemoryStore::new()))
    }
}
