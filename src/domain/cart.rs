//! Shopping cart: quantity-bearing lines keyed by menu item id.

use serde::{Deserialize, Serialize};

use crate::domain::MenuItem;

/// One (item, quantity) pairing with a frozen name/price snapshot.
///
/// The snapshot is what keeps the cart valid across catalog edits and
/// deletions: a line never joins back to the catalog once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: u32,
    pub name: String,
    pub unit_price: f64,
    pub qty: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> f64 {
        self.unit_price * self.qty as f64
    }
}

/// Outcome of a quantity mutation, so callers can tell a no-op on an absent
/// line from a real change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    /// Line now holds this quantity.
    Set(u32),
    /// Quantity reached zero and the line was dropped.
    Removed,
    /// No line existed and the delta could not create one.
    Ignored,
}

/// The live cart. Lines are kept in insertion order for stable rendering;
/// no line ever holds qty 0.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Rebuild a cart from persisted lines, dropping any zero-quantity lines
    /// a stale blob might carry.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Self { lines: lines.into_iter().filter(|line| line.qty > 0).collect() }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of `item`, snapshotting name and price if this is the
    /// first unit. Returns the line's new quantity.
    pub fn add(&mut self, item: &MenuItem) -> u32 {
        match self.lines.iter_mut().find(|line| line.item_id == item.id) {
            Some(line) => {
                line.qty += 1;
                line.qty
            }
            None => {
                self.lines.push(CartLine {
                    item_id: item.id,
                    name: item.name.clone(),
                    unit_price: item.price,
                    qty: 1,
                });
                1
            }
        }
    }

    /// Apply `delta` to an existing line. A resulting quantity <= 0 removes
    /// the line entirely rather than clamping. Absent line: `Ignored` — the
    /// absent-plus-positive-delta case needs the catalog and is handled by
    /// the storefront engine.
    pub fn change_qty(&mut self, item_id: u32, delta: i32) -> CartChange {
        let Some(index) = self.lines.iter().position(|line| line.item_id == item_id) else {
            return CartChange::Ignored;
        };
        let next = self.lines[index].qty as i64 + delta as i64;
        if next <= 0 {
            self.lines.remove(index);
            CartChange::Removed
        } else {
            self.lines[index].qty = next as u32;
            CartChange::Set(next as u32)
        }
    }

    pub fn quantity_of(&self, item_id: u32) -> u32 {
        self.lines.iter().find(|line| line.item_id == item_id).map(|line| line.qty).unwrap_or(0)
    }

    /// Exact numeric total; currency formatting belongs to the views.
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
