//! Call-stack frame records
//!
//! A [`Frame`] is one entry of a captured call stack as delivered by the
//! debugger backend: display-formatted address, symbol name, and the source
//! location if the backend resolved one.

use serde::{Deserialize, Serialize};
use stackpane_config::PathStyle;
use std::fmt;

/// One entry in a captured call stack.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Frame {
    /// Display-formatted instruction pointer (e.g. "0x0040112a")
    pub address: String,

    /// Symbol name
    pub function: String,

    /// Source file path; empty when the backend resolved no location
    #[serde(default)]
    pub file: String,

    /// 1-based source line; meaningful only when `file` is non-empty
    #[serde(default)]
    pub line: u32,

    /// Whether `file` was located on disk at capture time
    #[serde(default)]
    pub have_source: bool,
}

impl Frame {
    /// Create a frame without source location.
    pub fn new(address: impl Into<String>, function: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            function: function.into(),
            file: String::new(),
            line: 0,
            have_source: false,
        }
    }

    /// Create a frame with a resolved source location.
    pub fn located(
        address: impl Into<String>,
        function: impl Into<String>,
        file: impl Into<String>,
        line: u32,
        have_source: bool,
    ) -> Self {
        Self {
            address: address.into(),
            function: function.into(),
            file: file.into(),
            line,
            have_source,
        }
    }

    /// Final component of the file path.
    pub fn short_file(&self) -> &str {
        self.file.rsplit('/').next().unwrap_or(&self.file)
    }

    /// Render the source location as "file:line", honoring the path style.
    ///
    /// Frames without a file render as "unknown".
    pub fn location(&self, style: PathStyle) -> String {
        if self.file.is_empty() {
            return "unknown".to_string();
        }
        match style {
            PathStyle::Full => format!("{}:{}", self.file, self.line),
            PathStyle::Filename => format!("{}:{}", self.short_file(), self.line),
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in {} at {}",
            self.address,
            self.function,
            self.location(PathStyle::Full)
        )
    }
}
