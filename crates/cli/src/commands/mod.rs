//! CLI command implementations.
//!
//! Each command returns the text to print so it can be tested without
//! capturing stdout.

pub mod cart;

use std::path::PathBuf;

use takeaway_cart::{CartStore, FileStorage};
use thiserror::Error;

use crate::config::{CartConfig, ConfigError};

/// Errors that can occur while running a command.
///
/// Cart storage problems never show up here; the cart store absorbs them.
/// These cover configuration and user-supplied input only.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Neither a dish nor a combo was given.
    #[error("either --dish or --combo is required")]
    MissingProduct,

    /// The import file could not be read.
    #[error("Failed to read {path}: {source}")]
    ReadImport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The import file is not a JSON array of line items.
    #[error("Invalid cart file {path}: {source}")]
    ParseImport {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Rendering output as JSON failed.
    #[error("Failed to render cart: {0}")]
    Render(#[from] serde_json::Error),
}

/// Open the cart described by `config` over file storage.
pub fn open_cart(config: &CartConfig) -> CartStore<FileStorage> {
    CartStore::new(FileStorage::open(&config.storage_path))
        .with_key(&config.cart_key)
        .with_policy(config.identity_policy)
}
