// rectkit-core/tests/rectangle_tests.rs
//
// Rectangle widget: construction, hit testing, color selection,
// hover/focus transitions, cloning, and drawing through a Canvas.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use rectkit_core::{Color, EventKind, NdcQuad, Point, Rectangle, Scene, Viewport};

fn counter() -> (Arc<AtomicUsize>, impl Fn(&rectkit_core::RectEvent) + Send + Sync + 'static) {
    let hits = Arc::new(AtomicUsize::new(0));
    let h = hits.clone();
    (hits, move |_: &rectkit_core::RectEvent| {
        h.fetch_add(1, Ordering::SeqCst);
    })
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_uses_default_fill() {
    let r = Rectangle::new(Point::new(10.0, 20.0), 30, 40);
    assert_eq!(r.top_left, Point::new(10.0, 20.0));
    assert_eq!(r.width, 30);
    assert_eq!(r.height, 40);
    assert_eq!(r.color, Color::rgb(0.9, 0.9, 0.9));
    assert!(!r.is_hovered());
    assert!(!r.is_focused());
    assert!(r.events.is_empty());
}

#[test]
fn test_from_xy_matches_new() {
    let a = Rectangle::from_xy(5.0, 6.0, 7, 8);
    let b = Rectangle::new(Point::new(5.0, 6.0), 7, 8);
    assert_eq!(a.top_left, b.top_left);
    assert_eq!((a.width, a.height), (b.width, b.height));
    assert_ne!(a.id, b.id);
}

#[test]
fn test_with_color_rederives_hover_and_focus() {
    let red = Color::rgb(1.0, 0.0, 0.0);
    let r = Rectangle::from_xy(0.0, 0.0, 1, 1).with_color(red);
    assert_eq!(r.color, red);
    assert!(r.hover_color.r < 1.0 && r.hover_color.r > 0.0);
    assert!(r.focus_color.r < r.hover_color.r);
}

#[test]
fn test_explicit_hover_and_focus_colors() {
    let r = Rectangle::from_xy(0.0, 0.0, 1, 1)
        .with_color(Color::WHITE)
        .with_hover_color(Color::BLACK)
        .with_focus_color(Color::TRANSPARENT);
    assert_eq!(r.hover_color, Color::BLACK);
    assert_eq!(r.focus_color, Color::TRANSPARENT);
}

#[test]
fn test_bottom_right() {
    let r = Rectangle::from_xy(10.0, 20.0, 100, 50);
    assert_eq!(r.bottom_right(), Point::new(110.0, 70.0));
}

// ============================================================================
// Hit testing
// ============================================================================

#[test]
fn test_is_in_range_interior() {
    let r = Rectangle::from_xy(10.0, 10.0, 20, 20);
    assert!(r.is_in_range(15.0, 15.0));
}

#[test]
fn test_is_in_range_edges_inclusive() {
    let r = Rectangle::from_xy(10.0, 10.0, 20, 20);
    assert!(r.is_in_range(10.0, 10.0));
    assert!(r.is_in_range(30.0, 30.0));
    assert!(r.is_in_range(10.0, 30.0));
    assert!(r.is_in_range(30.0, 10.0));
    assert!(r.is_in_range(20.0, 30.0));
}

#[test]
fn test_is_in_range_outside() {
    let r = Rectangle::from_xy(10.0, 10.0, 20, 20);
    assert!(!r.is_in_range(9.99, 15.0));
    assert!(!r.is_in_range(30.01, 15.0));
    assert!(!r.is_in_range(15.0, 9.99));
    assert!(!r.is_in_range(15.0, 30.01));
    assert!(!r.is_in_range(-15.0, -15.0));
}

#[test]
fn test_is_in_range_grid_matches_bounds() {
    let r = Rectangle::from_xy(3.0, 4.0, 5, 6);
    for xi in -2..12 {
        for yi in -2..14 {
            let (x, y) = (xi as f32, yi as f32);
            let expected = (3.0..=8.0).contains(&x) && (4.0..=10.0).contains(&y);
            assert_eq!(r.is_in_range(x, y), expected, "({x}, {y})");
        }
    }
}

#[test]
fn test_zero_size_contains_only_its_corner() {
    let r = Rectangle::from_xy(5.0, 5.0, 0, 0);
    assert!(r.is_in_range(5.0, 5.0));
    assert!(!r.is_in_range(5.5, 5.0));
}

#[test]
fn test_contains_point() {
    let r = Rectangle::from_xy(0.0, 0.0, 10, 10);
    assert!(r.contains(&Point::new(5.0, 5.0)));
    assert!(!r.contains(&Point::new(11.0, 5.0)));
}

#[test]
fn test_move_and_resize_change_hit_area() {
    let mut r = Rectangle::from_xy(0.0, 0.0, 10, 10);
    r.move_to(Point::new(100.0, 100.0));
    assert!(!r.is_in_range(5.0, 5.0));
    assert!(r.is_in_range(105.0, 105.0));
    r.resize(1, 1);
    assert!(!r.is_in_range(105.0, 105.0));
}

// ============================================================================
// Color selection
// ============================================================================

#[test]
fn test_current_color_fill_when_idle() {
    let r = Rectangle::from_xy(0.0, 0.0, 1, 1);
    assert_eq!(r.current_color(), r.color);
}

#[test]
fn test_current_color_hover() {
    let mut scene = Scene::default();
    let id = scene.add(Rectangle::from_xy(0.0, 0.0, 1, 1));
    scene.mouse_in(id);
    let r = scene.get(id).unwrap();
    assert_eq!(r.current_color(), r.hover_color);
}

#[test]
fn test_current_color_focus_beats_hover() {
    let mut scene = Scene::default();
    let id = scene.add(Rectangle::from_xy(0.0, 0.0, 1, 1));
    let (fill, hover, focus) = {
        let r = scene.get(id).unwrap();
        (r.color, r.hover_color, r.focus_color)
    };
    assert_ne!(hover, focus);

    scene.mouse_in(id);
    scene.focus(id);
    assert_eq!(scene.get(id).unwrap().current_color(), focus);
    scene.mouse_out(id);
    assert_eq!(scene.get(id).unwrap().current_color(), focus);
    scene.blur(id);
    assert_eq!(scene.get(id).unwrap().current_color(), fill);
}

// ============================================================================
// Hover / focus transitions
// ============================================================================

#[test]
fn test_mouse_in_fires_once() {
    let mut r = Rectangle::from_xy(0.0, 0.0, 1, 1);
    let (hits, listener) = counter();
    r.events.on(EventKind::MouseIn, listener);
    let mut scene = Scene::default();
    let id = scene.add(r);

    assert!(scene.mouse_in(id));
    assert!(!scene.mouse_in(id));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_mouse_out_without_in_is_noop() {
    let mut r = Rectangle::from_xy(0.0, 0.0, 1, 1);
    let (hits, listener) = counter();
    r.events.on(EventKind::MouseOut, listener);
    let mut scene = Scene::default();
    let id = scene.add(r);

    assert!(!scene.mouse_out(id));
    assert_eq!(hits.load(Ordering::SeqCst), 0);

    scene.mouse_in(id);
    assert!(scene.mouse_out(id));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_focus_and_blur_fire_listeners() {
    let mut r = Rectangle::from_xy(0.0, 0.0, 1, 1);
    let (focus_hits, on_focus) = counter();
    let (blur_hits, on_blur) = counter();
    r.events.on(EventKind::Focus, on_focus);
    r.events.on(EventKind::Blur, on_blur);
    let mut scene = Scene::default();
    let id = scene.add(r);

    scene.focus(id);
    scene.focus(id);
    scene.blur(id);
    scene.blur(id);
    assert_eq!(focus_hits.load(Ordering::SeqCst), 1);
    assert_eq!(blur_hits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_emit_reports_target() {
    let mut r = Rectangle::from_xy(0.0, 0.0, 1, 1);
    let seen = Arc::new(std::sync::Mutex::new(None));
    let s = seen.clone();
    r.events.on(EventKind::Click, move |e| {
        *s.lock().unwrap() = Some(e.target);
    });

    assert_eq!(r.emit(EventKind::Click, None), 1);
    assert_eq!(*seen.lock().unwrap(), Some(r.id));
}

// ============================================================================
// Cloning
// ============================================================================

#[test]
fn test_clone_is_a_distinct_widget() {
    let mut r = Rectangle::from_xy(1.0, 2.0, 3, 4).with_color(Color::BLACK);
    let (hits, listener) = counter();
    r.events.on(EventKind::MouseIn, listener);
    let mut scene = Scene::default();
    let id = scene.add(r);
    scene.mouse_in(id);
    scene.focus(id);

    let original = scene.get(id).unwrap();
    assert!(original.is_hovered() && original.is_focused());
    let copy = original.clone();
    assert_ne!(copy.id, id);
    assert_eq!(copy.top_left, original.top_left);
    assert_eq!((copy.width, copy.height), (3, 4));
    assert_eq!(copy.color, Color::BLACK);
    assert!(!copy.is_hovered());
    assert!(!copy.is_focused());

    // Listeners are shared with the original.
    let copy_id = scene.add(copy);
    scene.mouse_in(copy_id);
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

// ============================================================================
// Drawing
// ============================================================================

#[test]
fn test_draw_emits_mapped_quad() {
    let r = Rectangle::from_xy(0.0, 0.0, 400, 300);
    let vp = Viewport::new(800, 600);
    let mut canvas: Vec<NdcQuad> = Vec::new();
    r.draw(&mut canvas, &vp);

    assert_eq!(canvas.len(), 1);
    let q = canvas[0];
    assert_eq!(q.top_left, Point::new(-1.0, 1.0));
    assert_eq!(q.bottom_right, Point::new(0.0, 0.0));
    assert_eq!(q.color, r.color);
    assert_eq!(q.width(), 1.0);
    assert_eq!(q.height(), 1.0);
}

#[test]
fn test_draw_uses_current_color() {
    let mut scene = Scene::default();
    let id = scene.add(Rectangle::from_xy(0.0, 0.0, 10, 10));
    scene.mouse_in(id);
    let r = scene.get(id).unwrap();
    let mut canvas: Vec<NdcQuad> = Vec::new();
    r.draw(&mut canvas, &Viewport::default());
    assert_eq!(canvas[0].color, r.hover_color);
}

#[test]
fn test_draw_skips_empty_rectangle() {
    let r = Rectangle::from_xy(0.0, 0.0, 0, 10);
    let mut canvas: Vec<NdcQuad> = Vec::new();
    r.draw(&mut canvas, &Viewport::default());
    assert!(canvas.is_empty());
}
