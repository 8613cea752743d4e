//! Stackpane Configuration System
//!
//! Provides configuration management for the stackpane view:
//! - Project configuration (stackpane.toml)
//! - Global user configuration (~/.stackpane/config.toml)
//! - Configuration precedence and merging
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded and merged in the following order (later overrides earlier):
//! 1. Global config (~/.stackpane/config.toml)
//! 2. Project config (./stackpane.toml)
//! 3. Environment variables (STACKPANE_*)
//!
//! # Example
//!
//! ```no_run
//! use stackpane_config::ConfigLoader;
//! use std::path::Path;
//!
//! let mut loader = ConfigLoader::new();
//! let config = loader.load_from_directory(Path::new(".")).unwrap();
//! let view = config.effective_view();
//! ```

pub mod loader;
pub mod view;

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax in {file}: {error}")]
    TomlParseError {
        file: PathBuf,
        error: toml::de::Error,
    },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Home directory not found")]
    HomeNotFound,
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

// Re-export main types
pub use loader::{Config, ConfigLoader};
pub use view::{ColumnConfig, MarkerConfig, PathStyle, ViewConfig};
