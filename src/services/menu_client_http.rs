//! Remote menu client over HTTP using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, ItemDraft, MenuApiConfig, MenuItem};
use crate::ports::{CreateItemAck, MenuClient};

/// HTTP client for the menu API.
///
/// The fetch is a single best-effort read: a failure is reported once and
/// callers fall back to the last persisted catalog. No retries.
#[derive(Debug, Clone)]
pub struct HttpMenuClient {
    menu_url: Url,
    items_url: Url,
    client: Client,
}

impl HttpMenuClient {
    /// Create a client for the given base URL.
    pub fn new(base_url: &Url, timeout_secs: u64) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        let join = |segment: &str| {
            base_url.join(segment).map_err(|e| {
                AppError::Configuration(format!("Invalid menu API URL '{}': {}", base_url, e))
            })
        };

        Ok(Self { menu_url: join("menu")?, items_url: join("items")?, client })
    }

    /// Create from config; fails when no base URL is configured.
    pub fn from_config(config: &MenuApiConfig) -> Result<Self, AppError> {
        let base_url = config
            .base_url
            .as_ref()
            .ok_or_else(|| AppError::config_error("No menu API base URL configured"))?;
        Self::new(base_url, config.timeout_secs)
    }
}

#[derive(Debug, Serialize)]
struct CreateItemRequest<'a> {
    name: &'a str,
    category: &'a str,
    price: f64,
    description: &'a str,
    img: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreateItemResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

impl MenuClient for HttpMenuClient {
    fn fetch_menu(&self) -> Result<Vec<MenuItem>, AppError> {
        let response = self
            .client
            .get(self.menu_url.clone())
            .send()
            .map_err(|e| AppError::MenuFetch { details: e.to_string() })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::MenuFetch {
                details: format!("server returned {}", status.as_u16()),
            });
        }

        response.json().map_err(|e| AppError::MenuFetch {
            details: format!("malformed menu payload: {}", e),
        })
    }

    fn create_item(&self, draft: &ItemDraft) -> Result<CreateItemAck, AppError> {
        let request = CreateItemRequest {
            name: &draft.name,
            category: &draft.category,
            price: draft.price,
            description: &draft.desc,
            img: &draft.img,
        };

        let response = self
            .client
            .post(self.items_url.clone())
            .json(&request)
            .send()
            .map_err(|e| AppError::Configuration(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let details = response.text().unwrap_or_else(|_| "unknown error".to_string());
            return Err(AppError::RemoteRejected(format!(
                "server returned {}: {}",
                status.as_u16(),
                details
            )));
        }

        let ack: CreateItemResponse = response.json().map_err(|e| {
            AppError::Configuration(format!("Failed to parse create response: {}", e))
        })?;

        Ok(CreateItemAck { success: ack.success, message: ack.message })
    }
}
