//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `TAKEAWAY_STORAGE_PATH` - Storage file path (default: .takeaway/storage.json)
//! - `TAKEAWAY_CART_KEY` - Key the cart is stored under (default: `takeaway_cart`)
//! - `TAKEAWAY_IDENTITY_POLICY` - `tagged` or `zero_normalized` (default: tagged)
//! - `RUST_LOG` - Log filter (default: warn)

use std::path::PathBuf;

use takeaway_cart::DEFAULT_CART_KEY;
use takeaway_core::IdentityPolicy;
use thiserror::Error;

const DEFAULT_STORAGE_PATH: &str = ".takeaway/storage.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    /// File backing the storage area
    pub storage_path: PathBuf,
    /// Storage key holding the cart
    pub cart_key: String,
    /// How additions are matched to existing lines
    pub identity_policy: IdentityPolicy,
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `TAKEAWAY_IDENTITY_POLICY` names an unknown policy.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let storage_path = lookup("TAKEAWAY_STORAGE_PATH")
            .filter(|v| !v.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_STORAGE_PATH), PathBuf::from);

        let cart_key = lookup("TAKEAWAY_CART_KEY")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CART_KEY.to_owned());

        let identity_policy = match lookup("TAKEAWAY_IDENTITY_POLICY") {
            Some(value) => value.trim().parse().map_err(|e: takeaway_core::ParsePolicyError| {
                ConfigError::InvalidEnvVar("TAKEAWAY_IDENTITY_POLICY".to_string(), e.to_string())
            })?,
            None => IdentityPolicy::default(),
        };

        Ok(Self {
            storage_path,
            cart_key,
            identity_policy,
        })
    }
}
