mod json_store;
mod memory_store;
mod menu_client_http;
mod menu_client_static;
mod receipt;
mod storefront;

pub use json_store::JsonFileStore;
pub use memory_store::MemoryStore;
pub use menu_client_http::HttpMenuClient;
pub use menu_client_static::StaticMenuClient;
pub use receipt::{format_amount, render_receipt};
pub use storefront::Storefront;
