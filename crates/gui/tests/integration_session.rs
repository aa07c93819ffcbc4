//! End-to-end pointer session tests driven through the headless harness.

use boxcarve_gui_lib::harness::TestHarness;
use boxcarve_gui_lib::state::session::ClickPhase;
use shared::colors;

#[test]
fn test_press_on_empty_space_is_ignored() {
    let mut h = TestHarness::new();
    h.press_miss();
    assert_eq!(h.session().phase(), ClickPhase::Idle);
    assert!(!h.session().camera.is_frozen());
    for v in 0..h.slot.mesh().vertex_count() {
        assert_eq!(h.vertex_color(v), colors::NEUTRAL);
    }
}

#[test]
fn test_arming_click_colors_face_and_freezes_camera() {
    let mut h = TestHarness::new();
    h.press_triangle(9);
    assert_eq!(h.session().click_count, 1);
    assert_eq!(h.session().colored_face, Some(8));
    assert!(h.session().camera.is_frozen());
    // Top quad colored blue
    for v in 16..20 {
        assert_eq!(h.vertex_color(v), colors::SELECTED_FACE);
    }
    assert_eq!(h.vertex_color(0), colors::NEUTRAL);
}

#[test]
fn test_release_after_arming_keeps_face_armed() {
    let mut h = TestHarness::new();
    h.press_triangle(4);
    h.release();
    assert_eq!(h.session().click_count, 1);
    assert_eq!(h.session().colored_face, Some(4));
    assert!(h.session().selected_face.is_none());
    assert!(!h.session().camera.is_frozen());
    assert_eq!(h.vertex_color(8), colors::SELECTED_FACE);
}

#[test]
fn test_single_click_without_drag_leaves_box_unchanged() {
    let mut h = TestHarness::new();
    let spec0 = *h.spec();
    h.press_triangle(0);
    h.release();
    h.press_triangle(0);
    h.release();
    assert_eq!(*h.spec(), spec0);
    assert_eq!(h.session().phase(), ClickPhase::Idle);
    for v in 0..h.slot.mesh().vertex_count() {
        assert_eq!(h.vertex_color(v), colors::NEUTRAL);
    }
}

#[test]
fn test_release_when_idle_is_idempotent() {
    let mut h = TestHarness::new();
    h.release();
    h.release();
    h.release();
    assert_eq!(h.session().phase(), ClickPhase::Idle);
    assert!(h.session().colored_face.is_none());
    assert!(!h.session().camera.is_frozen());
}

#[test]
fn test_clicking_other_face_moves_highlight() {
    let mut h = TestHarness::new();
    h.press_triangle(0);
    h.release();
    h.press_triangle(10);
    assert_eq!(h.session().click_count, 1);
    assert_eq!(h.session().colored_face, Some(10));
    // Highlight moved from front to bottom
    assert_eq!(h.vertex_color(0), colors::NEUTRAL);
    assert_eq!(h.vertex_color(20), colors::SELECTED_FACE);
}

#[test]
fn test_both_triangles_of_a_face_arm_the_same_drag() {
    let mut h = TestHarness::new();
    h.press_triangle(2);
    h.release();
    // The other triangle of the back face counts as the same face
    h.press_triangle(3);
    assert_eq!(h.session().click_count, 2);
    assert_eq!(h.session().colored_face, Some(2));
}

#[test]
fn test_move_without_drag_does_nothing() {
    let mut h = TestHarness::new();
    h.move_resolved(1.0, 2.0, 3.0);
    assert!(h.session().last_drag.is_none());

    h.press_triangle(0);
    h.move_resolved(1.0, 2.0, 3.0);
    assert!(h.session().last_drag.is_none());
    assert_eq!(h.spec().scale, [1.0, 1.0, 1.0]);
}

#[test]
fn test_unresolved_cursor_does_not_break_drag() {
    let mut h = TestHarness::new();
    h.press_triangle(0);
    h.release();
    h.press_triangle(0);
    h.move_resolved(0.0, 0.0, 2.0);
    h.move_unresolved();
    h.move_unresolved();
    assert_eq!(h.session().last_drag, Some(2.0));
    // Drag continues once resolution comes back
    h.move_resolved(0.0, 0.0, 2.5);
    assert_eq!(h.spec().scale, [1.0, 1.0, 1.5]);
}

#[test]
fn test_press_during_drag_keeps_armed_face() {
    let mut h = TestHarness::new();
    h.press_triangle(0);
    h.release();
    h.press_triangle(0);
    // A further press while dragging only retargets the selection
    h.press_triangle(8);
    assert_eq!(h.session().click_count, 2);
    assert_eq!(h.session().selected_face, Some(8));
    assert_eq!(h.session().colored_face, Some(0));
    // Mismatched selection stalls the drag rather than resizing
    h.move_resolved(0.0, 5.0, 0.0);
    h.move_resolved(0.0, 6.0, 0.0);
    assert_eq!(h.spec().scale, [1.0, 1.0, 1.0]);
}

#[test]
fn test_full_session_returns_to_idle() {
    let mut h = TestHarness::new();
    h.press_triangle(5);
    h.release();
    h.press_triangle(5);
    h.move_resolved(2.0, 0.0, 0.0);
    h.move_resolved(3.0, 0.0, 0.0);
    h.release();
    let s = h.session();
    assert_eq!(s.click_count, 0);
    assert!(s.selected_face.is_none());
    assert!(s.colored_face.is_none());
    assert!(s.last_drag.is_none());
    assert!(!s.camera.is_frozen());
    for v in 0..h.slot.mesh().vertex_count() {
        assert_eq!(h.vertex_color(v), colors::NEUTRAL);
    }
}
