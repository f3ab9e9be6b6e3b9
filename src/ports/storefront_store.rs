//! Typed persistence port for storefront state.
//!
//! Each operation owns one durable key with a fixed schema, so call sites
//! never touch serialization or key names. A missing key reads as `None`
//! (or `false` for the admin flag), never as an error.

use crate::domain::{AppError, BillingSnapshot, CartLine, MenuItem};

/// Port for durable storefront state.
pub trait StorefrontStore {
    /// Last persisted catalog, if any.
    fn load_catalog(&self) -> Result<Option<Vec<MenuItem>>, AppError>;

    /// Persist the catalog wholesale.
    fn save_catalog(&self, items: &[MenuItem]) -> Result<(), AppError>;

    /// Last persisted cart lines, if any.
    fn load_cart(&self) -> Result<Option<Vec<CartLine>>, AppError>;

    /// Persist the live cart.
    fn save_cart(&self, lines: &[CartLine]) -> Result<(), AppError>;

    /// Most recently issued bill, if any.
    fn load_last_bill(&self) -> Result<Option<BillingSnapshot>, AppError>;

    /// Persist an issued bill under its own key, distinct from the live cart.
    fn save_last_bill(&self, bill: &BillingSnapshot) -> Result<(), AppError>;

    /// Stored customer display name, if any.
    fn load_customer_name(&self) -> Result<Option<String>, AppError>;

    fn save_customer_name(&self, name: &str) -> Result<(), AppError>;

    /// Persisted admin-logged-in flag; absent reads as `false`.
    fn admin_logged_in(&self) -> Result<bool, AppError>;

    fn set_admin_logged_in(&self, logged_in: bool) -> Result<(), AppError>;
}
