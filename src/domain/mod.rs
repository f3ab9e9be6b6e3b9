pub mod bill;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod menu_item;

pub use bill::BillingSnapshot;
pub use cart::{Cart, CartChange, CartLine};
pub use catalog::{Catalog, MenuSection};
pub use config::{AdminConfig, CONFIG_FILE, MenuApiConfig, StorefrontConfig, hash_password};
pub use error::AppError;
pub use menu_item::{ItemDraft, MenuItem};
