//! End-to-end pane lifecycle tests
//!
//! Drives a StackPane the way a debugger-session controller would: stacks
//! arrive frame by frame after every stop, the first frame is selected, the
//! user moves around and activates rows, and the whole view resets between
//! stops.

use pretty_assertions::assert_eq;
use stackpane_config::ViewConfig;
use stackpane_view::{Frame, StackPane};
use std::cell::RefCell;
use std::rc::Rc;

type Jumps = Rc<RefCell<Vec<(String, u32)>>>;

fn pane() -> (StackPane, Jumps) {
    let jumps: Jumps = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&jumps);
    let pane = StackPane::new(ViewConfig::default(), move |file: &str, line: u32| {
        sink.borrow_mut().push((file.to_string(), line));
    });
    (pane, jumps)
}

/// Feed a stopped-at-breakpoint stack: app frames with source, libc without.
fn push_app_stack(pane: &mut StackPane) {
    pane.append(
        Frame::located("0x00401a2f", "compute", "src/compute.c", 57, true),
        true,
    );
    pane.append(
        Frame::located("0x004015b0", "run", "src/main.c", 121, true),
        false,
    );
    pane.append(Frame::new("0x7f22e410", "__libc_start_main"), false);
}

// ============================================================================
// Stop / navigate / re-stop lifecycle
// ============================================================================

#[test]
fn test_stop_selects_and_navigates_to_current_frame() {
    let (mut pane, jumps) = pane();

    pane.clear();
    push_app_stack(&mut pane);
    pane.select_first();

    assert_eq!(pane.len(), 3);
    assert_eq!(pane.current_index(), Some(0));
    assert_eq!(pane.selection(), Some(0));
    assert_eq!(*jumps.borrow(), vec![("src/compute.c".to_string(), 57)]);
}

#[test]
fn test_walking_the_stack_navigates_only_into_known_sources() {
    let (mut pane, jumps) = pane();
    push_app_stack(&mut pane);
    pane.select_first();

    // arrow down through the stack
    pane.on_selection_changed(1);
    pane.on_selection_changed(2); // libc frame: selected, but no jump

    assert_eq!(pane.selection(), Some(2));
    assert_eq!(
        *jumps.borrow(),
        vec![
            ("src/compute.c".to_string(), 57),
            ("src/main.c".to_string(), 121),
        ]
    );
}

#[test]
fn test_activating_the_selected_row_jumps_again() {
    let (mut pane, jumps) = pane();
    push_app_stack(&mut pane);
    pane.select_first();
    jumps.borrow_mut().clear();

    // press the already-selected row to re-open the location
    pane.on_activate(0);

    assert_eq!(*jumps.borrow(), vec![("src/compute.c".to_string(), 57)]);
}

#[test]
fn test_restop_forgets_previous_sessions_sources() {
    let (mut pane, jumps) = pane();
    push_app_stack(&mut pane);
    pane.select_first();

    // execution continues, then stops somewhere without sources
    pane.clear();
    pane.append(Frame::new("0x7f22e9c1", "poll"), true);
    pane.append(
        Frame::located("0x004015b0", "run", "src/compute.c", 121, false),
        false,
    );
    pane.select_first();
    jumps.borrow_mut().clear();

    // src/compute.c was known in the previous stack, but the index was
    // cleared with it; this stack never located the file
    pane.on_selection_changed(1);

    assert_eq!(pane.selection(), Some(1));
    assert!(jumps.borrow().is_empty());
}

#[test]
fn test_empty_stop_keeps_pane_inert() {
    let (mut pane, jumps) = pane();

    pane.clear();
    pane.select_first();
    pane.on_activate(0);

    assert!(pane.is_empty());
    assert_eq!(pane.selection(), None);
    assert!(jumps.borrow().is_empty());
}

// ============================================================================
// Renderer-facing state
// ============================================================================

#[test]
fn test_rows_expose_display_data_in_order() {
    let (mut pane, _) = pane();
    push_app_stack(&mut pane);

    let functions: Vec<&str> = pane.rows().map(|r| r.frame.function.as_str()).collect();
    assert_eq!(functions, vec!["compute", "run", "__libc_start_main"]);

    let marked: Vec<bool> = pane.rows().map(|r| r.current).collect();
    assert_eq!(marked, vec![true, false, false]);
}

#[test]
fn test_marker_defaults() {
    let (pane, _) = pane();
    assert_eq!(pane.marker().glyph(), "→");
    // glyph plus default padding on both sides
    assert_eq!(pane.marker().width(), 21);
}
