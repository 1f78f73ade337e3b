use super::*;

// =============================================================
// Construction
// =============================================================

#[test]
fn new_carousel_is_stopped_on_first_image() {
    let c = Carousel::new(3);
    assert_eq!(c.len(), 3);
    assert_eq!(c.index(), Some(0));
    assert_eq!(c.phase(), Phase::Stopped);
}

#[test]
fn empty_carousel_has_no_index() {
    let c = Carousel::new(0);
    assert!(c.is_empty());
    assert_eq!(c.index(), None);
}

// =============================================================
// start / stop
// =============================================================

#[test]
fn single_image_never_starts() {
    let mut c = Carousel::new(1);
    assert_eq!(c.start(), None);
    assert!(!c.is_running());
    assert_eq!(c.tick(0), None);
    assert_eq!(c.index(), Some(0));
}

#[test]
fn start_issues_increasing_generations() {
    let mut c = Carousel::new(2);
    let g1 = c.start().unwrap();
    assert!(c.stop());
    let g2 = c.start().unwrap();
    assert!(g2 > g1);
    assert_eq!(c.phase(), Phase::Running { generation: g2 });
}

#[test]
fn start_while_running_is_noop() {
    let mut c = Carousel::new(2);
    let g = c.start().unwrap();
    assert_eq!(c.start(), None);
    assert_eq!(c.phase(), Phase::Running { generation: g });
}

#[test]
fn stop_when_stopped_reports_nothing_to_cancel() {
    let mut c = Carousel::new(2);
    assert!(!c.stop());
}

// =============================================================
// tick
// =============================================================

#[test]
fn tick_advances_and_wraps() {
    let mut c = Carousel::new(3);
    let g = c.start().unwrap();
    assert_eq!(c.tick(g), Some(Rotation { from: 0, to: 1 }));
    assert_eq!(c.tick(g), Some(Rotation { from: 1, to: 2 }));
    assert_eq!(c.tick(g), Some(Rotation { from: 2, to: 0 }));
}

#[test]
fn tick_while_stopped_is_ignored() {
    let mut c = Carousel::new(3);
    let g = c.start().unwrap();
    c.stop();
    assert_eq!(c.tick(g), None);
    assert_eq!(c.index(), Some(0));
}

#[test]
fn stale_generation_tick_is_ignored() {
    let mut c = Carousel::new(3);
    let old = c.start().unwrap();
    c.stop();
    let new = c.start().unwrap();
    assert_eq!(c.tick(old), None);
    assert_eq!(c.tick(new), Some(Rotation { from: 0, to: 1 }));
}

// =============================================================
// hover
// =============================================================

#[test]
fn hover_pauses_and_leave_resumes_with_new_timer() {
    let mut c = Carousel::new(3);
    let g1 = c.start().unwrap();
    assert!(c.pointer_enter());
    assert!(c.is_hovered());
    assert!(!c.is_running());
    let g2 = c.pointer_leave().unwrap();
    assert!(!c.is_hovered());
    assert_ne!(g1, g2);
}

#[test]
fn repeated_leave_does_not_stack_timers() {
    let mut c = Carousel::new(3);
    c.start();
    c.pointer_enter();
    assert!(c.pointer_leave().is_some());
    assert!(c.pointer_leave().is_none());
}
