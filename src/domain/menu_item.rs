//! Menu item model and draft validation.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// One purchasable dish in the catalog.
///
/// `id` is assigned by the catalog and is the sole key the cart and the
/// rendered views join on. Cart lines copy `name` and `price` at add time,
/// so later edits or deletions never reach into an existing cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub desc: String,
    pub img: String,
}

impl MenuItem {
    /// Case-insensitive substring match over name, description and category.
    pub fn matches(&self, query: &str) -> bool {
        let haystack =
            format!("{}{}{}", self.name, self.desc, self.category).to_lowercase();
        haystack.contains(&query.to_lowercase())
    }
}

/// Fields for a menu item that has not been assigned an id yet.
///
/// Used for both local creation/edits and the remote create request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub desc: String,
    pub img: String,
}

impl ItemDraft {
    /// Reject drafts that could not become a valid catalog entry.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::InvalidItem("name must not be empty".into()));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(AppError::InvalidItem(format!(
                "price must be a non-negative number, got {}",
                self.price
            )));
        }
        Ok(())
    }

    /// Materialize the draft as a catalog entry with the given id.
    pub fn into_item(self, id: u32) -> MenuItem {
        MenuItem {
            id,
            name: self.name,
            category: self.category,
            price: self.price,
            desc: self.desc,
            img: self.img,
        }
    }
}
