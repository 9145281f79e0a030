//! A flat list of rectangles plus the state needed to drive them:
//! viewport size and pointer tracking.

use crate::canvas::Canvas;
use crate::geometry::Point;
use crate::pointer::{PointerTracker, topmost_at};
use crate::rectangle::{RectId, Rectangle};
use crate::viewport::Viewport;

#[derive(Debug, Default)]
pub struct Scene {
    rects: Vec<Rectangle>,
    viewport: Viewport,
    pointer: PointerTracker,
}

impl Scene {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            rects: Vec::new(),
            viewport,
            pointer: PointerTracker::new(),
        }
    }

    /// Add a rectangle on top of everything else.
    pub fn add(&mut self, rect: Rectangle) -> RectId {
        let id = rect.id;
        self.rects.push(rect);
        self.pointer.refresh(&mut self.rects);
        id
    }

    /// Remove a rectangle. It loses hover and focus first (firing
    /// `MouseOut` / `Blur`), so it comes back in its idle state.
    pub fn remove(&mut self, id: RectId) -> Option<Rectangle> {
        let idx = self.rects.iter().position(|r| r.id == id)?;
        self.pointer.blur(&mut self.rects, id);
        self.pointer.mouse_out(&mut self.rects, id);
        let rect = self.rects.remove(idx);
        self.pointer.forget(id);
        self.pointer.refresh(&mut self.rects);
        Some(rect)
    }

    pub fn get(&self, id: RectId) -> Option<&Rectangle> {
        self.rects.iter().find(|r| r.id == id)
    }

    /// Mutable access. Hover and focus are not reachable from here; use
    /// [`Scene::mouse_in`], [`Scene::focus`] and friends. Geometry edits are not re-hit-tested until the next
    /// pointer event or [`Scene::refresh`].
    pub fn get_mut(&mut self, id: RectId) -> Option<&mut Rectangle> {
        self.rects.iter_mut().find(|r| r.id == id)
    }

    pub fn rects(&self) -> &[Rectangle] {
        &self.rects
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Track the window size. A zero-sized (minimized) window keeps the
    /// last real size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if Viewport::new(width, height).is_empty() {
            return;
        }
        self.viewport.resize(width, height);
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    pub fn rect_at(&self, x: f32, y: f32) -> Option<RectId> {
        topmost_at(&self.rects, &Point::new(x, y))
    }

    pub fn cursor_moved(&mut self, x: f32, y: f32) -> bool {
        self.pointer.cursor_moved(&mut self.rects, x, y)
    }

    pub fn cursor_left(&mut self) -> bool {
        self.pointer.cursor_left(&mut self.rects)
    }

    pub fn pressed(&mut self) -> Option<RectId> {
        self.pointer.pressed(&mut self.rects)
    }

    pub fn released(&mut self) -> bool {
        self.pointer.released(&mut self.rects)
    }

    pub fn set_focus(&mut self, id: Option<RectId>) -> bool {
        self.pointer.set_focus(&mut self.rects, id)
    }

    /// Put the mouse in `id` as if the cursor had entered it. The next
    /// real cursor movement re-runs the hit test.
    pub fn mouse_in(&mut self, id: RectId) -> bool {
        self.pointer.mouse_in(&mut self.rects, id)
    }

    pub fn mouse_out(&mut self, id: RectId) -> bool {
        self.pointer.mouse_out(&mut self.rects, id)
    }

    pub fn focus(&mut self, id: RectId) -> bool {
        self.pointer.set_focus(&mut self.rects, Some(id))
    }

    pub fn blur(&mut self, id: RectId) -> bool {
        self.pointer.blur(&mut self.rects, id)
    }

    pub fn refresh(&mut self) -> bool {
        self.pointer.refresh(&mut self.rects)
    }

    /// Draw every rectangle bottom to top.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for rect in &self.rects {
            rect.draw(canvas, &self.viewport);
        }
    }
}
