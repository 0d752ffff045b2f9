use crate::extender::Side;
use crate::viewport::{PagerConfig, PagerViewportState};

fn page_units() -> PagerViewportState {
    PagerViewportState::new(PagerConfig::default())
}

#[test]
fn initial_offset_buffers_load_size_pages() {
    let viewport = page_units();
    assert_eq!(viewport.offset(), 5.0);

    let pixels = PagerViewportState::new(PagerConfig {
        page_extent: 390.0,
        ..PagerConfig::default()
    });
    assert_eq!(pixels.offset(), 5.0 * 390.0);
}

#[test]
fn left_zone_sets_flag_and_emits_one_event() {
    let viewport = page_units();

    let events = viewport.on_scroll_position_changed(4.5, 11, 100.0);

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].side, Side::Left);
    assert_eq!(events[0].timestamp, 100.0);
    assert!(viewport.is_left_loading());
    assert!(!viewport.is_right_loading());
}

#[test]
fn pending_flag_gates_reemission_regardless_of_timestamps() {
    let viewport = page_units();

    assert_eq!(viewport.on_scroll_position_changed(4.5, 11, 100.0).len(), 1);
    // Still inside the zone, well past the duplicate window: the hard gate
    // holds until the load is acknowledged or rejected.
    assert!(viewport.on_scroll_position_changed(4.0, 11, 101.0).is_empty());
    assert!(viewport.on_scroll_position_changed(3.0, 11, 102.0).is_empty());
}

#[test]
fn outside_either_zone_emits_nothing() {
    let viewport = page_units();

    let events = viewport.on_scroll_position_changed(5.5, 11, 100.0);

    assert!(events.is_empty());
    assert!(!viewport.is_left_loading());
    assert!(!viewport.is_right_loading());
    assert_eq!(viewport.offset(), 5.5, "offset is stored even with no event");
}

#[test]
fn right_zone_sets_flag_and_emits() {
    let viewport = page_units();

    let events = viewport.on_scroll_position_changed(6.5, 11, 200.0);

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].side, Side::Right);
    assert!(viewport.is_right_loading());
    assert!(!viewport.is_left_loading());
}

#[test]
fn apply_extension_left_shifts_offset_by_added_pages() {
    let viewport = page_units();
    viewport.on_scroll_position_changed(4.5, 11, 100.0);

    viewport.apply_extension(Side::Left, 5);

    assert_eq!(viewport.offset(), 9.5);
}

#[test]
fn apply_extension_right_leaves_offset_alone() {
    let viewport = page_units();
    viewport.on_scroll_position_changed(6.5, 11, 100.0);

    viewport.apply_extension(Side::Right, 5);

    assert_eq!(viewport.offset(), 6.5, "appending does not move content");
}

#[test]
fn compensation_scales_with_page_extent() {
    let viewport = PagerViewportState::new(PagerConfig {
        page_extent: 390.0,
        ..PagerConfig::default()
    });
    viewport.set_offset(1000.0);

    viewport.apply_extension(Side::Left, 5);

    assert_eq!(viewport.offset(), 1000.0 + 5.0 * 390.0);
}

#[test]
fn rejection_clears_only_that_side() {
    let viewport = page_units();
    viewport.on_scroll_position_changed(4.5, 11, 100.0);
    viewport.on_scroll_position_changed(6.5, 11, 100.0);
    assert!(viewport.is_left_loading() && viewport.is_right_loading());

    viewport.on_extension_rejected(Side::Left);

    assert!(!viewport.is_left_loading());
    assert!(viewport.is_right_loading());
}

#[test]
fn data_updated_clears_both_flags_and_is_idempotent() {
    let viewport = page_units();
    viewport.on_scroll_position_changed(4.5, 11, 100.0);
    viewport.on_scroll_position_changed(6.5, 11, 100.0);

    viewport.on_data_updated();
    assert!(!viewport.is_left_loading());
    assert!(!viewport.is_right_loading());

    // Nothing pending: a second acknowledgment changes nothing.
    viewport.on_data_updated();
    assert!(!viewport.is_left_loading());
    assert!(!viewport.is_right_loading());
}

#[test]
fn cleared_flag_allows_the_next_crossing() {
    let viewport = page_units();

    assert_eq!(viewport.on_scroll_position_changed(4.5, 11, 100.0).len(), 1);
    viewport.on_data_updated();
    assert_eq!(
        viewport.on_scroll_position_changed(4.5, 16, 101.0).len(),
        1,
        "a new crossing after acknowledgment should emit again"
    );
}

#[test]
fn recenter_restores_the_buffer_position() {
    let viewport = page_units();
    viewport.set_offset(42.0);

    viewport.recenter();

    assert_eq!(viewport.offset(), 5.0);
}

#[test]
fn clones_share_state() {
    let viewport = page_units();
    let handle = viewport.clone();

    viewport.on_scroll_position_changed(4.5, 11, 100.0);

    assert!(handle.is_left_loading());
    assert_eq!(handle.offset(), 4.5);
}
