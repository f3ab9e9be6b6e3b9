//! Billing snapshot: an issued order frozen at checkout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{AppError, Cart, CartLine};

/// Immutable record of a completed order.
///
/// Holds its own copies of the cart lines and total, so a later cart
/// mutation can never retroactively alter a bill already issued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingSnapshot {
    pub bill_no: String,
    pub issued_at: DateTime<Utc>,
    pub customer: String,
    pub lines: Vec<CartLine>,
    pub total: f64,
}

impl BillingSnapshot {
    /// Freeze `cart` into a snapshot issued at `issued_at`.
    ///
    /// Fails with `EmptyCart` when there is nothing to bill; the cart is left
    /// untouched either way (clearing it is the storefront's job, after the
    /// snapshot has been persisted).
    pub fn issue(
        cart: &Cart,
        customer: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        if cart.is_empty() {
            return Err(AppError::EmptyCart);
        }
        Ok(Self {
            bill_no: format!("BILL-{}", issued_at.timestamp_millis()),
            issued_at,
            customer: customer.to_string(),
            lines: cart.lines().to_vec(),
            total: cart.total(),
        })
    }
}
