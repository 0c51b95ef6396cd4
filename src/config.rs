//! Typed configuration for the cart store and the menu catalog.
//!
//! DESIGN
//! ======
//! The page has no environment to read from, so store settings are fixed
//! defaults and the menu is a JSON catalog embedded at build time. Parsing
//! the catalog up front gives the components typed names, descriptions, and
//! prices instead of scraping them back out of rendered markup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::HashSet;

use serde::Deserialize;

pub const DEFAULT_DB_NAME: &str = "CartDB";
pub const DEFAULT_DB_VERSION: u32 = 1;
pub const DEFAULT_STORE_NAME: &str = "cart";

/// Secondary lookups declared on the cart store.
pub const STORE_INDEXES: [&str; 2] = ["name", "price"];

const EMBEDDED_MENU: &str = include_str!("../assets/menu.json");

/// Errors raised while loading the menu catalog.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid menu catalog: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("menu section at position {0} has an empty id")]
    EmptySectionId(usize),
    #[error("duplicate menu section id: {0}")]
    DuplicateSection(String),
}

/// Location of the persistent cart collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub db_name: String,
    pub version: u32,
    pub store_name: String,
}

impl StoreConfig {
    /// Creation options for the cart collection: records keyed by an
    /// auto-incrementing `id`.
    pub fn store_options() -> serde_json::Value {
        serde_json::json!({ "keyPath": "id", "autoIncrement": true })
    }

    /// Creation options shared by every entry in [`STORE_INDEXES`].
    pub fn index_options() -> serde_json::Value {
        serde_json::json!({ "unique": false })
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_name: DEFAULT_DB_NAME.to_owned(),
            version: DEFAULT_DB_VERSION,
            store_name: DEFAULT_STORE_NAME.to_owned(),
        }
    }
}

/// A dish offered on the menu.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// A titled group of dishes; `id` doubles as the in-page anchor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuSection {
    pub id: String,
    pub title: String,
    pub items: Vec<MenuItem>,
}

/// The full menu catalog.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MenuConfig {
    pub restaurant: String,
    pub sections: Vec<MenuSection>,
}

impl MenuConfig {
    /// Parse the catalog bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the bundled JSON is malformed or its
    /// section ids are empty or repeated.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED_MENU)
    }

    /// Parse and validate a catalog from raw JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed JSON, an empty section id, or a
    /// section id used twice.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        let mut seen = HashSet::new();
        for (position, section) in config.sections.iter().enumerate() {
            if section.id.trim().is_empty() {
                return Err(ConfigError::EmptySectionId(position));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(ConfigError::DuplicateSection(section.id.clone()));
            }
        }
        Ok(config)
    }
}
