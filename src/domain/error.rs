use std::io;

use thiserror::Error;

/// Library-wide error type for bistro operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Remote menu fetch or parse failure. Recoverable: callers fall back to
    /// the last persisted catalog.
    #[error("Menu fetch failed: {details}")]
    MenuFetch { details: String },

    /// Referenced menu item id does not resolve in the catalog.
    #[error("Menu item {0} not found")]
    ItemNotFound(u32),

    /// Checkout attempted with an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Admin login rejected.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Item create/update carried an invalid field.
    #[error("Invalid menu item: {0}")]
    InvalidItem(String),

    /// Remote item creation was acknowledged but flagged unsuccessful.
    #[error("Remote rejected item: {0}")]
    RemoteRejected(String),

    /// A persisted state blob failed to deserialize.
    #[error("Malformed state under '{key}': {details}")]
    MalformedState { key: String, details: String },

    /// TOML parsing error.
    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Receipt template error.
    #[error(transparent)]
    Template(#[from] minijinja::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::EmptyCart
            | AppError::InvalidCredentials
            | AppError::InvalidItem(_)
            | AppError::TomlParse(_) => io::ErrorKind::InvalidInput,
            AppError::ItemNotFound(_) => io::ErrorKind::NotFound,
            AppError::MalformedState { .. } => io::ErrorKind::InvalidData,
            AppError::MenuFetch { .. } | AppError::RemoteRejected(_) | AppError::Template(_) => {
                io::ErrorKind::Other
            }
        }
    }
}
