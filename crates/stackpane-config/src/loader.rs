//! Configuration Loader
//!
//! Handles loading and merging configuration from multiple sources with proper precedence.

use crate::view::{
    ColumnConfig, MarkerConfig, PathStyle, ViewConfig, DEFAULT_ADDRESS_MIN_CHARS,
    DEFAULT_FILE_MIN_CHARS, DEFAULT_FUNCTION_MIN_CHARS, DEFAULT_LINE_MIN_CHARS,
    DEFAULT_MARKER_GLYPH, DEFAULT_MARKER_PADDING,
};
use crate::{ConfigError, ConfigResult};
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Configuration loader
///
/// Loads configuration from multiple sources and merges them with proper precedence:
/// 1. Global config (~/.stackpane/config.toml) - lowest priority
/// 2. Project config (./stackpane.toml) - overrides global
/// 3. Environment variables (STACKPANE_*) - highest priority
pub struct ConfigLoader {
    /// Cached global config path
    global_config_path: Option<PathBuf>,
}

/// Merged configuration result
#[derive(Debug, Clone)]
pub struct Config {
    /// Project view configuration
    pub project: ViewConfig,

    /// Global view configuration
    pub global: ViewConfig,

    /// Project root directory (where stackpane.toml was found)
    pub project_root: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self {
            global_config_path: None,
        }
    }

    /// Load configuration starting from the given directory
    ///
    /// Walks up the directory tree to find stackpane.toml, then loads and merges
    /// global config if it exists.
    pub fn load_from_directory(&mut self, start_dir: &Path) -> ConfigResult<Config> {
        let (project_root, project_config) = self.find_project_config(start_dir)?;

        // Load global config (optional)
        let global_config = self.load_global_config().unwrap_or_default();

        // Apply environment variable overrides
        let project_config = self.apply_env_overrides(project_config)?;

        Ok(Config {
            project: project_config,
            global: global_config,
            project_root,
        })
    }

    /// Load configuration from a specific config file
    pub fn load_from_file(&mut self, config_path: &Path) -> ConfigResult<Config> {
        let project_config = ViewConfig::load_from_file(config_path)?;
        let global_config = self.load_global_config().unwrap_or_default();
        let project_config = self.apply_env_overrides(project_config)?;

        let project_root = config_path.parent().map(|p| p.to_path_buf());

        Ok(Config {
            project: project_config,
            global: global_config,
            project_root,
        })
    }

    /// Find project configuration by walking up directory tree
    ///
    /// Returns (project_root, view_config) or defaults if not found
    fn find_project_config(&self, start_dir: &Path) -> ConfigResult<(Option<PathBuf>, ViewConfig)> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join("stackpane.toml");

            if config_path.exists() {
                let view_config = ViewConfig::load_from_file(&config_path)?;
                return Ok((Some(current), view_config));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    // Reached filesystem root without finding stackpane.toml
                    return Ok((None, ViewConfig::default()));
                }
            }
        }
    }

    /// Load global configuration from ~/.stackpane/config.toml
    fn load_global_config(&mut self) -> ConfigResult<ViewConfig> {
        if self.global_config_path.is_none() {
            self.global_config_path = Some(Self::global_config_dir()?.join("config.toml"));
        }

        let path = self.global_config_path.as_ref().unwrap();

        // Global config is optional - if it doesn't exist, return default
        if !path.exists() {
            return Ok(ViewConfig::default());
        }

        ViewConfig::load_from_file(path)
    }

    /// Apply environment variable overrides to view config
    ///
    /// Environment variables follow the pattern: STACKPANE_<SECTION>_<KEY>
    /// Example: STACKPANE_MARKER_GLYPH="▶"
    fn apply_env_overrides(&self, mut config: ViewConfig) -> ConfigResult<ViewConfig> {
        if let Ok(glyph) = env::var("STACKPANE_MARKER_GLYPH") {
            if glyph.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "marker.glyph".to_string(),
                    reason: "glyph must not be empty".to_string(),
                });
            }
            config.marker.get_or_insert_with(MarkerConfig::default).glyph = Some(glyph);
        }

        if let Ok(padding) = env::var("STACKPANE_MARKER_PADDING") {
            let padding = padding
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue {
                    field: "marker.padding".to_string(),
                    reason: format!("expected an integer, got '{}'", padding),
                })?;
            config.marker.get_or_insert_with(MarkerConfig::default).padding = Some(padding);
        }

        if let Ok(style) = env::var("STACKPANE_PATH_STYLE") {
            config.path_style = Some(PathStyle::from_str(&style)?);
        }

        Ok(config)
    }

    /// Get the global configuration directory (~/.stackpane)
    pub fn global_config_dir() -> ConfigResult<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeNotFound)?;
        Ok(home.join(".stackpane"))
    }

    /// Ensure global configuration directory exists
    pub fn ensure_global_config_dir() -> ConfigResult<PathBuf> {
        let dir = Self::global_config_dir()?;
        if !dir.exists() {
            std::fs::create_dir_all(&dir)?;
        }
        Ok(dir)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Get the project root directory
    pub fn project_root(&self) -> Option<&Path> {
        self.project_root.as_deref()
    }

    /// True if a stackpane.toml was found
    pub fn is_project(&self) -> bool {
        self.project_root.is_some()
    }

    /// Effective address column minimum (project > global > default)
    pub fn address_min_chars(&self) -> u16 {
        self.resolve(|c| c.columns.as_ref().and_then(|c| c.address))
            .unwrap_or(DEFAULT_ADDRESS_MIN_CHARS)
    }

    /// Effective function column minimum (project > global > default)
    pub fn function_min_chars(&self) -> u16 {
        self.resolve(|c| c.columns.as_ref().and_then(|c| c.function))
            .unwrap_or(DEFAULT_FUNCTION_MIN_CHARS)
    }

    /// Effective file column minimum (project > global > default)
    pub fn file_min_chars(&self) -> u16 {
        self.resolve(|c| c.columns.as_ref().and_then(|c| c.file))
            .unwrap_or(DEFAULT_FILE_MIN_CHARS)
    }

    /// Effective line column minimum (project > global > default)
    pub fn line_min_chars(&self) -> u16 {
        self.resolve(|c| c.columns.as_ref().and_then(|c| c.line))
            .unwrap_or(DEFAULT_LINE_MIN_CHARS)
    }

    /// Effective marker glyph (project > global > default)
    pub fn marker_glyph(&self) -> &str {
        self.project
            .marker
            .as_ref()
            .and_then(|m| m.glyph.as_deref())
            .or_else(|| self.global.marker.as_ref().and_then(|m| m.glyph.as_deref()))
            .unwrap_or(DEFAULT_MARKER_GLYPH)
    }

    /// Effective marker padding (project > global > default)
    pub fn marker_padding(&self) -> u16 {
        self.resolve(|c| c.marker.as_ref().and_then(|m| m.padding))
            .unwrap_or(DEFAULT_MARKER_PADDING)
    }

    /// Effective path display style (project > global > default)
    pub fn path_style(&self) -> PathStyle {
        self.resolve(|c| c.path_style).unwrap_or_default()
    }

    /// Materialize the merged configuration as a fully-populated ViewConfig
    ///
    /// The result has every field set, so it stands alone without further
    /// fallback resolution.
    pub fn effective_view(&self) -> ViewConfig {
        ViewConfig {
            columns: Some(ColumnConfig {
                address: Some(self.address_min_chars()),
                function: Some(self.function_min_chars()),
                file: Some(self.file_min_chars()),
                line: Some(self.line_min_chars()),
            }),
            marker: Some(MarkerConfig {
                glyph: Some(self.marker_glyph().to_string()),
                padding: Some(self.marker_padding()),
            }),
            path_style: Some(self.path_style()),
        }
    }

    /// Resolve an optional field with project-over-global precedence
    fn resolve<T>(&self, get: impl Fn(&ViewConfig) -> Option<T>) -> Option<T> {
        get(&self.project).or_else(|| get(&self.global))
    }
}
