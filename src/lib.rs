//! bistro: storefront state engine for a small restaurant site.
//!
//! The core is the catalog/cart consistency engine: a mutable menu catalog
//! (items keyed by id), a cart of quantity-bearing lines snapshotting item
//! name and price, and immutable billing snapshots issued at checkout. Every
//! mutation persists synchronously through a typed store port; the rendering
//! side observes changes through a notifier port and never mutates state.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;

pub use domain::{
    AppError, BillingSnapshot, Cart, CartChange, CartLine, Catalog, ItemDraft, MenuItem,
    MenuSection, StorefrontConfig,
};
pub use ports::{ChangeNotifier, MenuClient, StateChange, StorefrontStore};
pub use services::{
    HttpMenuClient, JsonFileStore, MemoryStore, StaticMenuClient, Storefront, format_amount,
    render_receipt,
};

/// Storefront wired with the default adapters: JSON files under the
/// configured storage directory, and either the HTTP menu client or the
/// embedded offline one.
pub type DefaultStorefront = Storefront<JsonFileStore, Box<dyn MenuClient>>;

/// Open a storefront in the current directory, reading `bistro.toml` when
/// present. `offline` forces the embedded seed-menu client; otherwise the
/// HTTP client is used whenever a base URL is configured.
pub fn open(offline: bool) -> Result<DefaultStorefront, AppError> {
    open_in(Path::new("."), offline)
}

/// Open a storefront rooted at `dir`.
pub fn open_in(dir: &Path, offline: bool) -> Result<DefaultStorefront, AppError> {
    let config = StorefrontConfig::load_from(dir)?;
    let store = JsonFileStore::new(dir.join(&config.storage_dir));
    let client: Box<dyn MenuClient> = if offline || config.api.base_url.is_none() {
        Box::new(StaticMenuClient::embedded()?)
    } else {
        Box::new(HttpMenuClient::from_config(&config.api)?)
    };
    Storefront::open(store, client, &config)
}
