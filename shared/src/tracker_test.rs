use super::*;
use crate::surface::recording::RecordingSurface;

fn bounds() -> Option<Rect> {
    Some(Rect::new(100.0, 100.0, 550.0, 450.0))
}

fn surface() -> RecordingSurface {
    RecordingSurface::new(550.0, 450.0)
}

/// Run press, moves, release and collect every dispatched draw.
fn stroke(tracker: &mut PointerTracker, samples: &[(f64, f64)]) -> Vec<Draw> {
    let mut surface = surface();
    let mut seen = Vec::new();
    let (first, rest) = samples.split_first().expect("at least one sample");
    tracker.press(first.0, first.1, bounds(), Some(&mut surface), |draw, _| {
        seen.push(*draw)
    });
    for (x, y) in rest {
        tracker.pointer_move(*x, *y, bounds(), Some(&mut surface), |draw, _| {
            seen.push(*draw)
        });
    }
    tracker.release();
    seen
}

// =============================================================
// Previous-point bookkeeping
// =============================================================

#[test]
fn first_draw_has_no_previous() {
    let mut tracker = PointerTracker::new();
    let draws = stroke(&mut tracker, &[(110.0, 110.0), (120.0, 110.0)]);
    assert_eq!(draws[0].previous, None);
    assert_eq!(draws[0].current, Point::new(10.0, 10.0));
}

#[test]
fn each_previous_is_the_prior_current() {
    let mut tracker = PointerTracker::new();
    let draws = stroke(
        &mut tracker,
        &[(110.0, 110.0), (120.0, 115.0), (135.0, 130.0), (160.0, 130.0)],
    );
    assert_eq!(draws.len(), 4);
    for pair in draws.windows(2) {
        assert_eq!(pair[1].previous, Some(pair[0].current));
    }
}

#[test]
fn release_starts_a_fresh_sequence() {
    let mut tracker = PointerTracker::new();
    let first = stroke(&mut tracker, &[(110.0, 110.0), (150.0, 150.0)]);
    let second = stroke(&mut tracker, &[(300.0, 300.0), (310.0, 300.0)]);
    assert_eq!(second[0].previous, None);
    assert_ne!(second[0].previous, Some(first[1].current));
    assert_eq!(second[1].previous, Some(second[0].current));
}

#[test]
fn release_resets_state() {
    let mut tracker = PointerTracker::new();
    stroke(&mut tracker, &[(110.0, 110.0), (150.0, 150.0)]);
    assert!(!tracker.is_held());
    assert_eq!(tracker.previous(), None);
}

// =============================================================
// No-op preconditions
// =============================================================

#[test]
fn move_without_press_does_nothing() {
    let mut tracker = PointerTracker::new();
    let mut surface = surface();
    let mut called = false;
    let drew = tracker.pointer_move(120.0, 120.0, bounds(), Some(&mut surface), |_, _| {
        called = true
    });
    assert!(!drew);
    assert!(!called);
    assert_eq!(tracker.previous(), None);
}

#[test]
fn missing_surface_skips_the_event() {
    let mut tracker = PointerTracker::new();
    let mut called = false;
    let drew = tracker.press(
        120.0,
        120.0,
        bounds(),
        None::<&mut RecordingSurface>,
        |_, _| called = true,
    );
    assert!(!drew);
    assert!(!called);
    assert!(tracker.is_held());
    assert_eq!(tracker.previous(), None);
}

#[test]
fn missing_bounds_skips_the_event() {
    let mut tracker = PointerTracker::new();
    let mut surface = surface();
    tracker.press(110.0, 110.0, bounds(), Some(&mut surface), |_, _| {});
    let mut called = false;
    let drew = tracker.pointer_move(120.0, 120.0, None, Some(&mut surface), |_, _| called = true);
    assert!(!drew);
    assert!(!called);
    assert_eq!(tracker.previous(), Some(Point::new(10.0, 10.0)));
}

#[test]
fn collapsed_bounds_skip_the_event() {
    let mut tracker = PointerTracker::new();
    let mut surface = surface();
    let collapsed = Some(Rect::new(0.0, 0.0, 0.0, 0.0));
    let drew = tracker.press(10.0, 10.0, collapsed, Some(&mut surface), |_, _| {});
    assert!(!drew);
}

// =============================================================
// Callback swapping
// =============================================================

#[test]
fn swapping_the_callback_keeps_the_stroke() {
    let mut tracker = PointerTracker::new();
    let mut surface = surface();
    let mut first = Vec::new();
    let mut second = Vec::new();
    tracker.press(110.0, 110.0, bounds(), Some(&mut surface), |draw, _| {
        first.push(*draw)
    });
    tracker.pointer_move(130.0, 110.0, bounds(), Some(&mut surface), |draw, _| {
        second.push(*draw)
    });
    assert_eq!(first.len(), 1);
    assert_eq!(second[0].previous, Some(Point::new(10.0, 10.0)));
    assert_eq!(second[0].current, Point::new(30.0, 10.0));
}

// =============================================================
// Clear
// =============================================================

#[test]
fn clear_wipes_the_whole_surface() {
    let tracker = PointerTracker::new();
    let mut surface = surface();
    tracker.clear(Some(&mut surface));
    assert_eq!(surface.clears(), vec![(0.0, 0.0, 550.0, 450.0)]);
}

#[test]
fn clear_without_surface_is_a_no_op() {
    let tracker = PointerTracker::new();
    tracker.clear(None::<&mut RecordingSurface>);
}
