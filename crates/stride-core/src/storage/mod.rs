//! Storage collaborators: configuration and snapshot persistence.
//!
//! The analytics engine never touches the filesystem; this layer owns
//! loading and refreshing the collections that are passed into it as
//! slices, one consistent unit at a time.

mod config;
mod snapshot;

pub use config::Config;
pub use snapshot::Snapshot;

use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Returns `~/.config/stride[-dev]/`, creating it if needed.
///
/// Set STRIDE_ENV=dev to use the development data directory.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("STRIDE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("stride-dev")
    } else {
        base_dir.join("stride")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::DataDirError(e.to_string()))?;
    Ok(dir)
}
