//! IndexedDB backend for the cart store.
//!
//! DESIGN
//! ======
//! IndexedDB reports completion through `onsuccess`/`onerror`-style event
//! handlers. Each pending request gets a one-shot channel; the handlers send
//! the outcome into it and the async caller awaits the receiver. Handlers are
//! owned by the awaiting future, so they live exactly as long as the request
//! is outstanding.
//!
//! `replace_all` runs the clear and every insert inside a single readwrite
//! transaction and resolves when the transaction completes. Readwrite
//! transactions on the same store run in the order they were created, so
//! back-to-back saves land in mutation order.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    IdbDatabase, IdbIndexParameters, IdbObjectStoreParameters, IdbOpenDbRequest, IdbRequest, IdbTransaction,
    IdbTransactionMode,
};

use super::types::LineItem;
use super::{CartStore, StoreError};
use crate::config::{STORE_INDEXES, StoreConfig};

type Outcome = Result<JsValue, StoreError>;
type Handler = Closure<dyn FnMut(web_sys::Event)>;

/// An open IndexedDB connection scoped to the cart collection.
#[derive(Clone, Debug)]
pub struct IdbStore {
    db: IdbDatabase,
    store_name: String,
}

impl IdbStore {
    /// Open the configured database, creating the collection on upgrade.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the page has no IndexedDB,
    /// [`StoreError::Blocked`] when an older connection prevents the upgrade,
    /// and [`StoreError::Open`] for any other failure.
    pub async fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        let factory = web_sys::window()
            .and_then(|w| w.indexed_db().ok().flatten())
            .ok_or(StoreError::Unavailable)?;
        let request = factory
            .open_with_u32(&config.db_name, config.version)
            .map_err(|e| StoreError::Open(js_message(&e)))?;

        let upgrade = upgrade_handler(&request, config.store_name.clone());
        request.set_onupgradeneeded(Some(upgrade.as_ref().unchecked_ref()));

        let settle = Settle::new();
        let on_success = settle.handler({
            let request = request.clone();
            move || request.result().map_err(|e| StoreError::Open(js_message(&e)))
        });
        let on_error = settle.handler({
            let request = request.clone();
            move || Err(StoreError::Open(request_error(&request)))
        });
        let on_blocked = settle.handler(|| Err(StoreError::Blocked));
        request.set_onsuccess(Some(on_success.as_ref().unchecked_ref()));
        request.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        request.set_onblocked(Some(on_blocked.as_ref().unchecked_ref()));

        let outcome = settle.wait().await;
        request.set_onupgradeneeded(None);
        request.set_onsuccess(None);
        request.set_onerror(None);
        request.set_onblocked(None);

        let db = outcome?
            .dyn_into::<IdbDatabase>()
            .map_err(|_| StoreError::Open("open result is not a database".to_owned()))?;
        leptos::logging::log!("cart store opened: {} v{}", config.db_name, config.version);
        Ok(Self { db, store_name: config.store_name.clone() })
    }

    fn transaction(&self, mode: IdbTransactionMode) -> Result<IdbTransaction, StoreError> {
        self.db
            .transaction_with_str_and_mode(&self.store_name, mode)
            .map_err(|e| StoreError::Transaction(js_message(&e)))
    }
}

impl CartStore for IdbStore {
    async fn replace_all(&self, items: &[LineItem]) -> Result<(), StoreError> {
        let tx = self.transaction(IdbTransactionMode::Readwrite)?;
        let store = tx
            .object_store(&self.store_name)
            .map_err(|e| StoreError::Transaction(js_message(&e)))?;

        store.clear().map_err(|e| StoreError::Request(js_message(&e)))?;
        for item in items {
            let value = to_js(&item.to_record())?;
            store.add(&value).map_err(|e| StoreError::Request(js_message(&e)))?;
        }

        transaction_done(&tx).await
    }

    async fn read_all(&self) -> Result<Vec<LineItem>, StoreError> {
        let tx = self.transaction(IdbTransactionMode::Readonly)?;
        let store = tx
            .object_store(&self.store_name)
            .map_err(|e| StoreError::Transaction(js_message(&e)))?;
        let request = store.get_all().map_err(|e| StoreError::Request(js_message(&e)))?;

        let value = request_result(&request).await?;
        from_js(&value)
    }
}

/// One-shot completion slot shared by a request's event handlers.
///
/// The first handler to fire wins; later ones find the sender gone.
struct Settle {
    tx: Rc<RefCell<Option<oneshot::Sender<Outcome>>>>,
    rx: oneshot::Receiver<Outcome>,
}

impl Settle {
    fn new() -> Self {
        let (tx, rx) = oneshot::channel();
        Self { tx: Rc::new(RefCell::new(Some(tx))), rx }
    }

    fn handler(&self, outcome: impl Fn() -> Outcome + 'static) -> Handler {
        let tx = Rc::clone(&self.tx);
        Closure::wrap(Box::new(move |_ev: web_sys::Event| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(outcome());
            }
        }) as Box<dyn FnMut(web_sys::Event)>)
    }

    async fn wait(self) -> Outcome {
        self.rx.await.map_err(|_| StoreError::Canceled)?
    }
}

/// Create the cart collection and its lookups when the database is new.
fn upgrade_handler(request: &IdbOpenDbRequest, store_name: String) -> Handler {
    let request = request.clone();
    Closure::wrap(Box::new(move |_ev: web_sys::Event| {
        let Some(db) = request.result().ok().and_then(|r| r.dyn_into::<IdbDatabase>().ok()) else {
            leptos::logging::error!("cart store upgrade: no database on request");
            return;
        };
        if db.object_store_names().contains(&store_name) {
            return;
        }

        let params = match to_js(&StoreConfig::store_options()) {
            Ok(value) => value.unchecked_into::<IdbObjectStoreParameters>(),
            Err(e) => {
                leptos::logging::error!("cart store upgrade failed: {e}");
                return;
            }
        };
        let store = match db.create_object_store_with_optional_parameters(&store_name, &params) {
            Ok(store) => store,
            Err(e) => {
                leptos::logging::error!("cart store upgrade failed: {}", js_message(&e));
                return;
            }
        };

        let index_params = match to_js(&StoreConfig::index_options()) {
            Ok(value) => value.unchecked_into::<IdbIndexParameters>(),
            Err(e) => {
                leptos::logging::error!("cart store indexes skipped: {e}");
                return;
            }
        };
        for index in STORE_INDEXES {
            if let Err(e) = store.create_index_with_str_and_optional_parameters(index, index, &index_params) {
                leptos::logging::error!("cart store index {index} failed: {}", js_message(&e));
            }
        }
        leptos::logging::log!("cart store created: {store_name}");
    }) as Box<dyn FnMut(web_sys::Event)>)
}

async fn request_result(request: &IdbRequest) -> Result<JsValue, StoreError> {
    let settle = Settle::new();
    let on_success = settle.handler({
        let request = request.clone();
        move || request.result().map_err(|e| StoreError::Request(js_message(&e)))
    });
    let on_error = settle.handler({
        let request = request.clone();
        move || Err(StoreError::Request(request_error(&request)))
    });
    request.set_onsuccess(Some(on_success.as_ref().unchecked_ref()));
    request.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    let outcome = settle.wait().await;
    request.set_onsuccess(None);
    request.set_onerror(None);
    outcome
}

async fn transaction_done(tx: &IdbTransaction) -> Result<(), StoreError> {
    let settle = Settle::new();
    let on_complete = settle.handler(|| Ok(JsValue::UNDEFINED));
    let on_error = settle.handler({
        let tx = tx.clone();
        move || Err(StoreError::Transaction(transaction_error(&tx)))
    });
    let on_abort = settle.handler({
        let tx = tx.clone();
        move || Err(StoreError::Transaction(format!("aborted: {}", transaction_error(&tx))))
    });
    tx.set_oncomplete(Some(on_complete.as_ref().unchecked_ref()));
    tx.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    tx.set_onabort(Some(on_abort.as_ref().unchecked_ref()));

    let outcome = settle.wait().await;
    tx.set_oncomplete(None);
    tx.set_onerror(None);
    tx.set_onabort(None);
    outcome.map(|_| ())
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, StoreError> {
    let json = serde_json::to_string(value)?;
    js_sys::JSON::parse(&json).map_err(|e| StoreError::Request(js_message(&e)))
}

fn from_js(value: &JsValue) -> Result<Vec<LineItem>, StoreError> {
    let json = js_sys::JSON::stringify(value).map_err(|e| StoreError::Request(js_message(&e)))?;
    Ok(serde_json::from_str(&String::from(json))?)
}

fn request_error(request: &IdbRequest) -> String {
    request
        .error()
        .ok()
        .flatten()
        .map_or_else(|| "unknown error".to_owned(), |e| e.message())
}

fn transaction_error(tx: &IdbTransaction) -> String {
    tx.error().map_or_else(|| "unknown error".to_owned(), |e| e.message())
}

fn js_message(value: &JsValue) -> String {
    value
        .dyn_ref::<web_sys::DomException>()
        .map(web_sys::DomException::message)
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
