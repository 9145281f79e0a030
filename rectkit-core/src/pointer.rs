//! Pointer tracking: which rectangle the mouse is in, which one has focus.
//!
//! The tracker holds ids, never references; every operation takes the
//! rectangles it should act on. Rectangles later in the slice are drawn on
//! top, so hit testing walks the slice back to front.

use crate::events::EventKind;
use crate::geometry::Point;
use crate::rectangle::{RectId, Rectangle};

#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    cursor: Option<Point>,
    hovered: Option<RectId>,
    focused: Option<RectId>,
    pressed_on: Option<RectId>,
}

fn contains_id(rects: &[Rectangle], id: RectId) -> bool {
    rects.iter().any(|r| r.id == id)
}

fn find_mut(rects: &mut [Rectangle], id: RectId) -> Option<&mut Rectangle> {
    rects.iter_mut().find(|r| r.id == id)
}

/// Topmost rectangle containing `p`.
pub fn topmost_at(rects: &[Rectangle], p: &Point) -> Option<RectId> {
    rects.iter().rev().find(|r| r.contains(p)).map(|r| r.id)
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rectangle the mouse is currently in, if any.
    pub fn mouse_is_in(&self) -> Option<RectId> {
        self.hovered
    }

    pub fn focused(&self) -> Option<RectId> {
        self.focused
    }

    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    /// Move the cursor to `(x, y)`. Returns `true` if the hovered
    /// rectangle changed.
    pub fn cursor_moved(&mut self, rects: &mut [Rectangle], x: f32, y: f32) -> bool {
        let p = Point::new(x, y);
        self.cursor = Some(p);
        let target = topmost_at(rects, &p);
        self.hover(rects, target)
    }

    /// The cursor left the window.
    pub fn cursor_left(&mut self, rects: &mut [Rectangle]) -> bool {
        self.cursor = None;
        self.hover(rects, None)
    }

    /// Re-run the hit test at the last cursor position, e.g. after
    /// rectangles moved underneath a stationary mouse.
    pub fn refresh(&mut self, rects: &mut [Rectangle]) -> bool {
        let target = self.cursor.and_then(|p| topmost_at(rects, &p));
        self.hover(rects, target)
    }

    /// Mark `id` as the rectangle the mouse is in, taking hover from the
    /// previous holder. Unknown ids are ignored.
    pub fn mouse_in(&mut self, rects: &mut [Rectangle], id: RectId) -> bool {
        if !contains_id(rects, id) {
            return false;
        }
        self.hover(rects, Some(id))
    }

    /// Clear hover if `id` holds it.
    pub fn mouse_out(&mut self, rects: &mut [Rectangle], id: RectId) -> bool {
        if self.hovered != Some(id) {
            return false;
        }
        self.hover(rects, None)
    }

    fn hover(&mut self, rects: &mut [Rectangle], target: Option<RectId>) -> bool {
        if target == self.hovered {
            return false;
        }

        let cursor = self.cursor;
        if let Some(old) = self.hovered.take() {
            if let Some(rect) = find_mut(rects, old) {
                rect.set_hovered(false, cursor);
            }
        }
        if let Some(new) = target {
            if let Some(rect) = find_mut(rects, new) {
                rect.set_hovered(true, cursor);
            }
        }

        tracing::debug!("hover: {:?}", target.map(|id| id.0));
        self.hovered = target;
        true
    }

    /// Primary button went down. Focus follows the hovered rectangle;
    /// pressing empty space clears focus. Returns the pressed rectangle.
    pub fn pressed(&mut self, rects: &mut [Rectangle]) -> Option<RectId> {
        self.pressed_on = self.hovered;
        self.set_focus(rects, self.hovered);

        if let Some(id) = self.hovered {
            if let Some(rect) = rects.iter().find(|r| r.id == id) {
                rect.emit(EventKind::Press, self.cursor);
            }
        }
        self.hovered
    }

    /// Primary button went up. Returns `true` if this completed a click,
    /// i.e. press and release landed on the same rectangle.
    pub fn released(&mut self, rects: &mut [Rectangle]) -> bool {
        let pressed = self.pressed_on.take();
        let Some(id) = self.hovered else {
            return false;
        };
        let Some(rect) = rects.iter().find(|r| r.id == id) else {
            return false;
        };

        rect.emit(EventKind::Release, self.cursor);
        if pressed == Some(id) {
            rect.emit(EventKind::Click, self.cursor);
            return true;
        }
        false
    }

    /// Move focus to `target`, blurring the previous holder. A target that
    /// is not in `rects` is rejected and focus stays where it was.
    pub fn set_focus(&mut self, rects: &mut [Rectangle], target: Option<RectId>) -> bool {
        if target == self.focused {
            return false;
        }
        if let Some(id) = target {
            if !contains_id(rects, id) {
                tracing::debug!("focus: ignoring unknown rect {:?}", id.0);
                return false;
            }
        }

        let cursor = self.cursor;
        if let Some(old) = self.focused.take() {
            if let Some(rect) = find_mut(rects, old) {
                rect.set_focused(false, cursor);
            }
        }
        if let Some(new) = target {
            if let Some(rect) = find_mut(rects, new) {
                rect.set_focused(true, cursor);
            }
        }

        tracing::debug!("focus: {:?}", target.map(|id| id.0));
        self.focused = target;
        true
    }

    /// Clear focus if `id` holds it.
    pub fn blur(&mut self, rects: &mut [Rectangle], id: RectId) -> bool {
        if self.focused != Some(id) {
            return false;
        }
        self.set_focus(rects, None)
    }

    /// Drop every reference to `id`, e.g. after the rectangle was removed.
    pub fn forget(&mut self, id: RectId) {
        if self.hovered == Some(id) {
            self.hovered = None;
        }
        if self.focused == Some(id) {
            self.focused = None;
        }
        if self.pressed_on == Some(id) {
            self.pressed_on = None;
        }
    }
}
