//! Filesystem-backed storefront store: one JSON file per durable key.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::{AppError, BillingSnapshot, CartLine, MenuItem, StorefrontConfig};
use crate::ports::StorefrontStore;

const CATALOG_KEY: &str = "catalog.json";
const CART_KEY: &str = "cart.json";
const LAST_ORDER_KEY: &str = "last_order.json";
const CUSTOMER_KEY: &str = "customer.json";
const ADMIN_KEY: &str = "admin.json";

/// Durable key-value store rooted at a directory, one schema per key.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at the configured storage directory.
    pub fn from_config(config: &StorefrontConfig) -> Self {
        Self::new(config.storage_dir.clone())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    fn read_key<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, AppError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        let value = serde_json::from_str(&content).map_err(|err| AppError::MalformedState {
            key: key.to_string(),
            details: err.to_string(),
        })?;
        Ok(Some(value))
    }

    fn write_key<T: Serialize>(&self, key: &str, value: &T) -> Result<(), AppError> {
        fs::create_dir_all(&self.root)?;
        let content = serde_json::to_string_pretty(value).map_err(|err| {
            AppError::MalformedState { key: key.to_string(), details: err.to_string() }
        })?;
        fs::write(self.key_path(key), content)?;
        Ok(())
    }
}

impl StorefrontStore for JsonFileStore {
    fn load_catalog(&self) -> Result<Option<Vec<MenuItem>>, AppError> {
        self.read_key(CATALOG_KEY)
    }

    fn save_catalog(&self, items: &[MenuItem]) -> Result<(), AppError> {
        self.write_key(CATALOG_KEY, &items)
    }

    fn load_cart(&self) -> Result<Option<Vec<CartLine>>, AppError> {
        self.read_key(CART_KEY)
    }

    fn save_cart(&self, lines: &[CartLine]) -> Result<(), AppError> {
        self.write_key(CART_KEY, &lines)
    }

    fn load_last_bill(&self) -> Result<Option<BillingSnapshot>, AppError> {
        self.read_key(LAST_ORDER_KEY)
    }

    fn save_last_bill(&self, bill: &BillingSnapshot) -> Result<(), AppError> {
        self.write_key(LAST_ORDER_KEY, bill)
    }

    fn load_customer_name(&self) -> Result<Option<String>, AppError> {
        self.read_key(CUSTOMER_KEY)
    }

    fn save_customer_name(&self, name: &str) -> Result<(), AppError> {
        self.write_key(CUSTOMER_KEY, &name)
    }

    fn admin_logged_in(&self) -> Result<bool, AppError> {
        Ok(self.read_key(ADMIN_KEY)?.unwrap_or(false))
    }

    fn set_admin_logged_in(&self, logged_in: bool) -> Result<(), AppError> {
        self.write_key(ADMIN_KEY, &logged_in)
    }
}
