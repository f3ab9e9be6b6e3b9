//! Change notification port.
//!
//! Mutations on the storefront emit events instead of reaching into any
//! view; the rendering side subscribes and redraws. Notifiers are purely
//! observational and never mutate core state.

/// A state transition worth redrawing for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChange {
    /// An item just went into the cart (the transient "added" popup).
    ItemAdded { name: String },
    /// Cart lines or quantities changed.
    CartChanged,
    /// The catalog was replaced or edited.
    CatalogChanged,
    /// A bill was issued at checkout.
    BillIssued { bill_no: String },
}

/// Port for observers of storefront state.
pub trait ChangeNotifier {
    fn notify(&self, change: &StateChange);
}

/// Notifier that swallows every event; the default for library use and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl ChangeNotifier for SilentNotifier {
    fn notify(&self, _change: &StateChange) {}
}
