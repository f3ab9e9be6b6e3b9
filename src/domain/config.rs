//! Storefront configuration loaded from `bistro.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use sha2::{Digest, Sha256};
use url::Url;

use crate::domain::AppError;

/// Top-level configuration. Every field has a default so an absent or empty
/// config file yields a working offline storefront.
#[derive(Debug, Clone, Deserialize)]
pub struct StorefrontConfig {
    /// Directory holding the persisted JSON state blobs.
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,
    /// Remote menu API settings.
    #[serde(default)]
    pub api: MenuApiConfig,
    /// Admin credential pair.
    #[serde(default)]
    pub admin: AdminConfig,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            api: MenuApiConfig::default(),
            admin: AdminConfig::default(),
        }
    }
}

/// Remote menu API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuApiConfig {
    /// Base URL; the client appends `menu` and `items`.
    pub base_url: Option<Url>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for MenuApiConfig {
    fn default() -> Self {
        Self { base_url: None, timeout_secs: default_timeout() }
    }
}

/// Admin credential pair. The password is held as a sha256 hex digest; the
/// check stays an opaque boolean gate (no lockout, no expiry).
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    #[serde(default = "default_admin_user")]
    pub username: String,
    #[serde(default = "default_admin_digest")]
    pub password_sha256: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self { username: default_admin_user(), password_sha256: default_admin_digest() }
    }
}

impl AdminConfig {
    /// Constant-shape comparison against the configured pair.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && hash_password(password) == self.password_sha256
    }
}

/// Hex sha256 digest of a password, as stored in config.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.finalize().iter().map(|byte| format!("{:02x}", byte)).collect()
}

impl StorefrontConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(content)?)
    }

    /// Load from `bistro.toml` under `dir`, falling back to defaults when the
    /// file does not exist.
    pub fn load_from(dir: &Path) -> Result<Self, AppError> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_toml_str(&fs::read_to_string(path)?)
    }
}

pub const CONFIG_FILE: &str = "bistro.toml";

fn default_storage_dir() -> PathBuf {
    PathBuf::from(".bistro")
}

fn default_timeout() -> u64 {
    10
}

fn default_admin_user() -> String {
    "admin".to_string()
}

fn default_admin_digest() -> String {
    // sha256("admin")
    "8c6976e5b5410415bde908bd4dee15dfb167a9c873fc4bb8a81f6f2ab448a918".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = StorefrontConfig::from_toml_str("").unwrap();
        assert_eq!(config.storage_dir, PathBuf::from(".bistro"));
        assert!(config.api.base_url.is_none());
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.admin.username, "admin");
    }

    #[test]
    fn partial_document_fills_missing_fields() {
        let config = StorefrontConfig::from_toml_str(
            r#"
            storage_dir = "state"

            [api]
            base_url = "https://kitchen.example/api/"
            "#,
        )
        .unwrap();
        assert_eq!(config.storage_dir, PathBuf::from("state"));
        assert_eq!(config.api.base_url.unwrap().as_str(), "https://kitchen.example/api/");
        assert_eq!(config.api.timeout_secs, 10);
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let result = StorefrontConfig::from_toml_str("storage_dir = [not toml");
        assert!(matches!(result, Err(AppError::TomlParse(_))));
    }

    #[test]
    fn verify_accepts_only_the_configured_pair() {
        let admin = AdminConfig {
            username: "Mani".to_string(),
            password_sha256: hash_password("A25MIT06"),
        };
        assert!(admin.verify("Mani", "A25MIT06"));
        assert!(!admin.verify("Mani", "wrong"));
        assert!(!admin.verify("someone", "A25MIT06"));
    }

    #[test]
    fn default_digest_matches_default_password() {
        let admin = AdminConfig::default();
        assert!(admin.verify("admin", "admin"));
    }
}
