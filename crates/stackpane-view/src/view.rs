//! Stack-trace pane core
//!
//! [`StackPane`] owns the frame store, the source availability index, the
//! selection, the suppression guard, the navigation callback, and the
//! current-frame marker. The host's toolkit adapter translates native row
//! events into [`StackPane::on_selection_changed`] / [`StackPane::on_activate`];
//! the debugger-session controller drives [`StackPane::append`],
//! [`StackPane::clear`] and [`StackPane::select_first`].
//!
//! Nothing here returns an error: a missing file, an empty path, an unknown
//! row or an empty store all degrade to "no navigation". Library frames
//! without inspectable source are a normal condition.

use crate::frame::Frame;
use crate::marker::FrameMarker;
use crate::sources::SourceIndex;
use crate::store::{FrameRow, FrameStore};
use stackpane_config::ViewConfig;
use tracing::{debug, trace};

// ── Navigator ────────────────────────────────────────────────────────────────

/// Host-supplied navigation callback.
///
/// Registered once when the pane is constructed; invoked with `(file, line)`
/// whenever the user selects or activates a frame whose source is known to
/// exist.
pub trait Navigator {
    /// Move the editor to `file` at 1-based `line`.
    fn navigate(&mut self, file: &str, line: u32);
}

impl<F: FnMut(&str, u32)> Navigator for F {
    fn navigate(&mut self, file: &str, line: u32) {
        self(file, line)
    }
}

// ── StackPane ────────────────────────────────────────────────────────────────

/// The stack-trace pane: frame rows, source availability, and navigation
/// dispatch, constructed once per debug view.
pub struct StackPane {
    /// Frame rows in display order.
    store: FrameStore,
    /// Which displayed file paths have source on disk.
    sources: SourceIndex,
    /// Currently selected row, if any.
    selection: Option<usize>,
    /// When false, selection-changed events are ignored entirely (bulk ops).
    handle_events: bool,
    /// Host navigation callback.
    navigator: Box<dyn Navigator>,
    /// Current-frame marker resource; released when the pane is dropped.
    marker: FrameMarker,
    /// Presentation configuration.
    config: ViewConfig,
}

impl StackPane {
    /// Create a pane, registering the navigation callback and acquiring the
    /// current-frame marker from the configuration.
    pub fn new(config: ViewConfig, navigator: impl Navigator + 'static) -> Self {
        let marker = FrameMarker::acquire(config.marker_glyph(), config.marker_padding());
        Self {
            store: FrameStore::new(),
            sources: SourceIndex::new(),
            selection: None,
            handle_events: true,
            navigator: Box::new(navigator),
            marker,
            config,
        }
    }

    // ── Host operations ───────────────────────────────────────────────────────

    /// Append a frame to the pane; `is_current` marks it as the frame
    /// execution is stopped at.
    ///
    /// Side effect: records the frame's source availability in the index.
    pub fn append(&mut self, frame: Frame, is_current: bool) {
        self.sources.record(&frame.file, frame.have_source);
        trace!(function = %frame.function, current = is_current, "frame appended");
        self.store.append(frame, is_current);
    }

    /// Remove all frames and forget all source availability.
    ///
    /// Selection-changed events delivered while clearing are ignored; the
    /// guard is released only after both structures are empty, so no event
    /// can observe frames without the index or vice versa.
    pub fn clear(&mut self) {
        self.handle_events = false;

        let dropped = self.store.len();
        self.store.clear();
        self.sources.clear();
        self.selection = None;

        self.handle_events = true;
        debug!(frames = dropped, "stack-trace pane cleared");
    }

    /// Select the first frame; no-op on an empty pane.
    ///
    /// Routed through the selection-changed path, so selecting the topmost
    /// frame after a stop also navigates to it when its source is known.
    pub fn select_first(&mut self) {
        if self.store.is_empty() {
            return;
        }
        self.on_selection_changed(0);
    }

    // ── Row events ────────────────────────────────────────────────────────────

    /// Selection moved to `row` (arrow keys, single click on another row).
    ///
    /// Ignored while suppressed and for rows that no longer exist; otherwise
    /// records the selection and navigates if the row's source is known.
    pub fn on_selection_changed(&mut self, row: usize) {
        if !self.handle_events {
            return;
        }
        if self.store.get(row).is_none() {
            return;
        }
        self.selection = Some(row);
        self.navigate_to_row(row);
    }

    /// The user explicitly activated `row` (press on a selected row).
    ///
    /// Only an exact match with the current selection navigates; a press that
    /// also changes the selection arrives through the selection-changed path
    /// instead, so the jump is never performed twice.
    pub fn on_activate(&mut self, row: usize) {
        if self.selection != Some(row) {
            return;
        }
        self.navigate_to_row(row);
    }

    // ── Accessors for renderers ───────────────────────────────────────────────

    /// Rows in display order.
    pub fn rows(&self) -> impl Iterator<Item = &FrameRow> {
        self.store.rows()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// True if the pane shows no frames.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Currently selected row, if any.
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Row carrying the current-frame marker, if any.
    pub fn current_index(&self) -> Option<usize> {
        self.store.current_index()
    }

    /// The current-frame marker resource.
    pub fn marker(&self) -> &FrameMarker {
        &self.marker
    }

    /// The pane's presentation configuration.
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    // ── Navigation procedure ──────────────────────────────────────────────────

    /// Shared by both event paths: jump to the row's location if its file is
    /// non-empty and known to exist. Everything else is a silent no-op.
    fn navigate_to_row(&mut self, row: usize) {
        let (file, line) = match self.store.get(row) {
            Some(r) => (r.frame.file.clone(), r.frame.line),
            None => return,
        };
        if !file.is_empty() && self.sources.has_source(&file) {
            self.navigator.navigate(&file, line);
        }
    }
}
