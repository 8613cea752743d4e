//! Stackpane View - Stack-trace pane core
//!
//! This library provides the toolkit-agnostic core of a stack-trace viewer
//! for debugger front-ends:
//! - Ordered frame store with a current-frame mark
//! - Source availability tracking per file path
//! - Selection/activation dispatch into a host navigation callback
//!
//! The host owns the actual widget; it feeds frames in with [`StackPane::append`],
//! translates native row events into [`StackPane::on_selection_changed`] and
//! [`StackPane::on_activate`], and receives `(file, line)` jumps through the
//! [`Navigator`] it registered at construction.

/// Stackpane view version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Public API modules
pub mod frame;
pub mod marker;
pub mod sources;
pub mod store;
pub mod view;

// Re-export commonly used types
pub use frame::Frame;
pub use marker::FrameMarker;
pub use sources::SourceIndex;
pub use store::{FrameRow, FrameStore};
pub use view::{Navigator, StackPane};
