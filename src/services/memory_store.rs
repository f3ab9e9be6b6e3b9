//! In-memory storefront store for tests and throwaway sessions.

use std::sync::{Arc, Mutex};

use crate::domain::{AppError, BillingSnapshot, CartLine, MenuItem};
use crate::ports::StorefrontStore;

#[derive(Debug, Default)]
struct State {
    catalog: Option<Vec<MenuItem>>,
    cart: Option<Vec<CartLine>>,
    last_bill: Option<BillingSnapshot>,
    customer_name: Option<String>,
    admin_logged_in: bool,
}

/// Storefront store held entirely in memory.
///
/// Clones share state, so a test can keep a handle and inspect what the
/// engine persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorefrontStore for MemoryStore {
    fn load_catalog(&self) -> Result<Option<Vec<MenuItem>>, AppError> {
        Ok(self.state.lock().unwrap().catalog.clone())
    }

    fn save_catalog(&self, items: &[MenuItem]) -> Result<(), AppError> {
        self.state.lock().unwrap().catalog = Some(items.to_vec());
        Ok(())
    }

    fn load_cart(&self) -> Result<Option<Vec<CartLine>>, AppError> {
        Ok(self.state.lock().unwrap().cart.clone())
    }

    fn save_cart(&self, lines: &[CartLine]) -> Result<(), AppError> {
        self.state.lock().unwrap().cart = Some(lines.to_vec());
        Ok(())
    }

    fn load_last_bill(&self) -> Result<Option<BillingSnapshot>, AppError> {
        Ok(self.state.lock().unwrap().last_bill.clone())
    }

    fn save_last_bill(&self, bill: &BillingSnapshot) -> Result<(), AppError> {
        self.state.lock().unwrap().last_bill = Some(bill.clone());
        Ok(())
    }

    fn load_customer_name(&self) -> Result<Option<String>, AppError> {
        Ok(self.state.lock().unwrap().customer_name.clone())
    }

    fn save_customer_name(&self, name: &str) -> Result<(), AppError> {
        self.state.lock().unwrap().customer_name = Some(name.to_string());
        Ok(())
    }

    fn admin_logged_in(&self) -> Result<bool, AppError> {
        Ok(self.state.lock().unwrap().admin_logged_in)
    }

    fn set_admin_logged_in(&self, logged_in: bool) -> Result<(), AppError> {
        self.state.lock().unwrap().admin_logged_in = logged_in;
        Ok(())
    }
}
