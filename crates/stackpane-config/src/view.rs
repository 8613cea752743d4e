//! View Configuration (stackpane.toml)
//!
//! Presentation hints for the stack-trace pane: minimum column widths, the
//! current-frame marker, and how file paths are displayed. Every field is
//! optional in TOML; accessors fall back to the built-in defaults.

use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Default minimum column widths, in characters.
pub const DEFAULT_ADDRESS_MIN_CHARS: u16 = 10;
pub const DEFAULT_FUNCTION_MIN_CHARS: u16 = 10;
pub const DEFAULT_FILE_MIN_CHARS: u16 = 0;
pub const DEFAULT_LINE_MIN_CHARS: u16 = 4;

/// Default current-frame marker glyph and horizontal padding.
pub const DEFAULT_MARKER_GLYPH: &str = "→";
pub const DEFAULT_MARKER_PADDING: u16 = 10;

/// View configuration from stackpane.toml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ViewConfig {
    /// Column width hints
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<ColumnConfig>,

    /// Current-frame marker
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<MarkerConfig>,

    /// How file paths are displayed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_style: Option<PathStyle>,
}

/// Minimum column widths in characters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ColumnConfig {
    /// Address column (default: 10)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<u16>,

    /// Function column (default: 10)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<u16>,

    /// File column (default: 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<u16>,

    /// Line column (default: 4)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u16>,
}

/// Current-frame marker configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct MarkerConfig {
    /// Marker glyph (default: "→")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyph: Option<String>,

    /// Horizontal padding on each side of the glyph, in characters (default: 10)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<u16>,
}

/// How file paths are rendered in the pane
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PathStyle {
    /// Full path as captured
    #[default]
    Full,
    /// Final path component only
    Filename,
}

impl FromStr for PathStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(PathStyle::Full),
            "filename" => Ok(PathStyle::Filename),
            other => Err(ConfigError::InvalidValue {
                field: "path_style".to_string(),
                reason: format!("expected 'full' or 'filename', got '{}'", other),
            }),
        }
    }
}

impl ViewConfig {
    /// Load view configuration from a file
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::IoError(e)
            }
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlParseError {
            file: path.to_path_buf(),
            error: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the view configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(marker) = &self.marker {
            if let Some(glyph) = &marker.glyph {
                if glyph.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        field: "marker.glyph".to_string(),
                        reason: "glyph must not be empty".to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    // ── Accessors with defaults ───────────────────────────────────────────────

    /// Minimum width of the address column, in characters
    pub fn address_min_chars(&self) -> u16 {
        self.columns
            .as_ref()
            .and_then(|c| c.address)
            .unwrap_or(DEFAULT_ADDRESS_MIN_CHARS)
    }

    /// Minimum width of the function column, in characters
    pub fn function_min_chars(&self) -> u16 {
        self.columns
            .as_ref()
            .and_then(|c| c.function)
            .unwrap_or(DEFAULT_FUNCTION_MIN_CHARS)
    }

    /// Minimum width of the file column, in characters
    pub fn file_min_chars(&self) -> u16 {
        self.columns
            .as_ref()
            .and_then(|c| c.file)
            .unwrap_or(DEFAULT_FILE_MIN_CHARS)
    }

    /// Minimum width of the line column, in characters
    pub fn line_min_chars(&self) -> u16 {
        self.columns
            .as_ref()
            .and_then(|c| c.line)
            .unwrap_or(DEFAULT_LINE_MIN_CHARS)
    }

    /// Current-frame marker glyph
    pub fn marker_glyph(&self) -> &str {
        self.marker
            .as_ref()
            .and_then(|m| m.glyph.as_deref())
            .unwrap_or(DEFAULT_MARKER_GLYPH)
    }

    /// Horizontal padding on each side of the marker glyph
    pub fn marker_padding(&self) -> u16 {
        self.marker
            .as_ref()
            .and_then(|m| m.padding)
            .unwrap_or(DEFAULT_MARKER_PADDING)
    }

    /// File path display style
    pub fn path_style(&self) -> PathStyle {
        self.path_style.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_builtin_constants() {
        let config = ViewConfig::default();
        assert_eq!(config.address_min_chars(), 10);
        assert_eq!(config.function_min_chars(), 10);
        assert_eq!(config.file_min_chars(), 0);
        assert_eq!(config.line_min_chars(), 4);
        assert_eq!(config.marker_glyph(), "→");
        assert_eq!(config.marker_padding(), 10);
        assert_eq!(config.path_style(), PathStyle::Full);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
path_style = "filename"

[columns]
address = 18
line = 6

[marker]
glyph = "▶"
padding = 2
"#;
        let config: ViewConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.address_min_chars(), 18);
        assert_eq!(config.function_min_chars(), 10); // default survives
        assert_eq!(config.line_min_chars(), 6);
        assert_eq!(config.marker_glyph(), "▶");
        assert_eq!(config.marker_padding(), 2);
        assert_eq!(config.path_style(), PathStyle::Filename);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let toml = r#"
[columns]
adress = 18
"#;
        assert!(toml::from_str::<ViewConfig>(toml).is_err());
    }

    #[test]
    fn test_empty_glyph_fails_validation() {
        let config = ViewConfig {
            marker: Some(MarkerConfig {
                glyph: Some(String::new()),
                padding: None,
            }),
            ..Default::default()
        };
        match config.validate() {
            Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, "marker.glyph"),
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[rstest::rstest]
    #[case("full", PathStyle::Full)]
    #[case("Full", PathStyle::Full)]
    #[case("filename", PathStyle::Filename)]
    #[case("FILENAME", PathStyle::Filename)]
    fn test_path_style_from_str(#[case] input: &str, #[case] expected: PathStyle) {
        assert_eq!(PathStyle::from_str(input).unwrap(), expected);
    }

    #[test]
    fn test_path_style_unknown_value_rejected() {
        assert!(PathStyle::from_str("short").is_err());
    }
}
