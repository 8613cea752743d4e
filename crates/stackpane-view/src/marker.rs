//! Current-frame marker resource
//!
//! Stands in for the arrow icon a widget renders next to the current frame.
//! The marker is acquired once when the pane is constructed and released when
//! the pane is dropped; renderers query its glyph and total cell width.

use tracing::trace;

/// Marker resource for the current frame: glyph plus horizontal padding.
#[derive(Debug)]
pub struct FrameMarker {
    glyph: String,
    padding: u16,
}

impl FrameMarker {
    /// Acquire the marker from its configured glyph and padding.
    pub fn acquire(glyph: impl Into<String>, padding: u16) -> Self {
        Self {
            glyph: glyph.into(),
            padding,
        }
    }

    /// The glyph to render on the current row.
    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Padding on each side of the glyph, in cells.
    pub fn padding(&self) -> u16 {
        self.padding
    }

    /// Total column width: glyph width plus padding on both sides.
    pub fn width(&self) -> usize {
        self.glyph.chars().count() + 2 * self.padding as usize
    }
}

impl Drop for FrameMarker {
    fn drop(&mut self) {
        trace!("current-frame marker released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_includes_padding_on_both_sides() {
        let marker = FrameMarker::acquire("→", 10);
        assert_eq!(marker.width(), 21);
    }

    #[test]
    fn test_width_counts_chars_not_bytes() {
        // multi-byte glyph is still one cell-ish unit for the width hint
        let marker = FrameMarker::acquire("→→", 0);
        assert_eq!(marker.width(), 2);
    }

    #[test]
    fn test_accessors() {
        let marker = FrameMarker::acquire("▶", 2);
        assert_eq!(marker.glyph(), "▶");
        assert_eq!(marker.padding(), 2);
    }
}
