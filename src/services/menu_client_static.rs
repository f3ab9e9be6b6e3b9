//! Offline menu client backed by the embedded seed menu.

use std::sync::{Arc, Mutex};

use include_dir::{Dir, include_dir};

use crate::domain::{AppError, ItemDraft, MenuItem};
use crate::ports::{CreateItemAck, MenuClient};

static ASSETS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets");

const SEED_MENU: &str = "seed_menu.json";

/// Menu client serving an in-memory item list, seeded from the embedded
/// menu asset. Creates land in the same list, so the reload-after-create
/// flow behaves exactly as it does against a real backend.
#[derive(Debug, Clone)]
pub struct StaticMenuClient {
    items: Arc<Mutex<Vec<MenuItem>>>,
}

impl StaticMenuClient {
    /// Client pre-loaded with the embedded seed menu.
    pub fn embedded() -> Result<Self, AppError> {
        let raw = ASSETS_DIR
            .get_file(SEED_MENU)
            .and_then(|file| file.contents_utf8())
            .ok_or_else(|| AppError::config_error("Embedded seed menu missing"))?;
        let items: Vec<MenuItem> = serde_json::from_str(raw).map_err(|err| {
            AppError::MalformedState { key: SEED_MENU.to_string(), details: err.to_string() }
        })?;
        Ok(Self::with_items(items))
    }

    /// Client serving exactly `items`.
    pub fn with_items(items: Vec<MenuItem>) -> Self {
        Self { items: Arc::new(Mutex::new(items)) }
    }
}

impl MenuClient for StaticMenuClient {
    fn fetch_menu(&self) -> Result<Vec<MenuItem>, AppError> {
        Ok(self.items.lock().unwrap().clone())
    }

    fn create_item(&self, draft: &ItemDraft) -> Result<CreateItemAck, AppError> {
        draft.validate()?;
        let mut items = self.items.lock().unwrap();
        let id = items.iter().map(|item| item.id).max().unwrap_or(0) + 1;
        items.push(draft.clone().into_item(id));
        Ok(CreateItemAck { success: true, message: Some(format!("Item {} added", id)) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_seed_menu_parses_and_has_unique_ids() {
        let client = StaticMenuClient::embedded().unwrap();
        let items = client.fetch_menu().unwrap();
        assert!(!items.is_empty());

        let mut ids: Vec<_> = items.iter().map(|item| item.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), items.len());
        assert!(items.iter().all(|item| item.price >= 0.0));
    }

    #[test]
    fn created_items_show_up_in_the_next_fetch() {
        let client = StaticMenuClient::with_items(Vec::new());
        let draft = ItemDraft {
            name: "Dosa".to_string(),
            category: "Tiffin".to_string(),
            price: 50.0,
            desc: String::new(),
            img: String::new(),
        };

        let ack = client.create_item(&draft).unwrap();
        assert!(ack.success);

        let items = client.fetch_menu().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[0].name, "Dosa");
    }

    #[test]
    fn create_rejects_invalid_drafts() {
        let client = StaticMenuClient::with_items(Vec::new());
        let draft = ItemDraft {
            name: String::new(),
            category: "Tiffin".to_string(),
            price: 50.0,
            desc: String::new(),
            img: String::new(),
        };
        assert!(client.create_item(&draft).is_err());
    }
}
