//! Remote menu source port.

use crate::domain::{AppError, ItemDraft, MenuItem};

/// Acknowledgement for a remote item creation.
#[derive(Debug, Clone)]
pub struct CreateItemAck {
    pub success: bool,
    pub message: Option<String>,
}

/// Port for the remote menu catalog.
///
/// The fetch is all-or-nothing: either the full item list arrives or the
/// caller keeps whatever it had. After a successful create, callers are
/// expected to re-fetch the whole menu rather than trust a local insert.
pub trait MenuClient {
    /// Fetch the full menu item list.
    fn fetch_menu(&self) -> Result<Vec<MenuItem>, AppError>;

    /// Create an item on the remote side.
    fn create_item(&self, draft: &ItemDraft) -> Result<CreateItemAck, AppError>;
}

impl MenuClient for Box<dyn MenuClient> {
    fn fetch_menu(&self) -> Result<Vec<MenuItem>, AppError> {
        (**self).fetch_menu()
    }

    fn create_item(&self, draft: &ItemDraft) -> Result<CreateItemAck, AppError> {
        (**self).create_item(draft)
    }
}
