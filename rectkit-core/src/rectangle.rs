//! The rectangle widget.
//!
//! A screen-space box with fill / hover / focus colors, a point hit test,
//! and a bag of event listeners. Drawing goes through a [`Canvas`], so the
//! widget never touches GPU handles itself.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::canvas::{Canvas, NdcQuad};
use crate::color::Color;
use crate::events::{EventKind, Events, RectEvent};
use crate::geometry::Point;
use crate::viewport::Viewport;

/// How much the hover color darkens the fill when not set explicitly.
const HOVER_DARKEN: f32 = 0.1;
/// How much the focus color darkens the fill when not set explicitly.
const FOCUS_DARKEN: f32 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RectId(pub Uuid);

impl RectId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RectId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct Rectangle {
    pub id: RectId,
    pub top_left: Point,
    pub width: u32,
    pub height: u32,
    pub color: Color,
    pub hover_color: Color,
    pub focus_color: Color,
    pub events: Events,
    hovered: bool,
    focused: bool,
}

impl Rectangle {
    /// A rectangle at `top_left` filled with [`Color::DEFAULT_FILL`].
    pub fn new(top_left: Point, width: u32, height: u32) -> Self {
        let color = Color::DEFAULT_FILL;
        Self {
            id: RectId::new(),
            top_left,
            width,
            height,
            color,
            hover_color: color.darken(HOVER_DARKEN),
            focus_color: color.darken(FOCUS_DARKEN),
            events: Events::new(),
            hovered: false,
            focused: false,
        }
    }

    pub fn from_xy(x: f32, y: f32, width: u32, height: u32) -> Self {
        Self::new(Point::new(x, y), width, height)
    }

    /// Set the fill color. Hover and focus colors are re-derived from it,
    /// so call this before `with_hover_color` / `with_focus_color`.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self.hover_color = color.darken(HOVER_DARKEN);
        self.focus_color = color.darken(FOCUS_DARKEN);
        self
    }

    pub fn with_hover_color(mut self, color: Color) -> Self {
        self.hover_color = color;
        self
    }

    pub fn with_focus_color(mut self, color: Color) -> Self {
        self.focus_color = color;
        self
    }

    pub fn with_events(mut self, events: Events) -> Self {
        self.events = events;
        self
    }

    pub fn bottom_right(&self) -> Point {
        self.top_left.offset(self.width as f32, self.height as f32)
    }

    /// Point-in-rectangle test, inclusive on every edge.
    pub fn is_in_range(&self, x: f32, y: f32) -> bool {
        let br = self.bottom_right();
        x >= self.top_left.x && x <= br.x && y >= self.top_left.y && y <= br.y
    }

    pub fn contains(&self, p: &Point) -> bool {
        self.is_in_range(p.x, p.y)
    }

    pub fn move_to(&mut self, top_left: Point) {
        self.top_left = top_left;
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// The color `draw` uses: focus wins over hover, hover over fill.
    pub fn current_color(&self) -> Color {
        if self.focused {
            self.focus_color
        } else if self.hovered {
            self.hover_color
        } else {
            self.color
        }
    }

    /// Only a [`PointerTracker`] flips hover and focus.
    ///
    /// [`PointerTracker`]: crate::pointer::PointerTracker
    pub(crate) fn set_hovered(&mut self, hovered: bool, cursor: Option<Point>) -> bool {
        if self.hovered == hovered {
            return false;
        }
        self.hovered = hovered;
        let kind = if hovered {
            EventKind::MouseIn
        } else {
            EventKind::MouseOut
        };
        self.emit(kind, cursor);
        true
    }

    pub(crate) fn set_focused(&mut self, focused: bool, cursor: Option<Point>) -> bool {
        if self.focused == focused {
            return false;
        }
        self.focused = focused;
        let kind = if focused {
            EventKind::Focus
        } else {
            EventKind::Blur
        };
        self.emit(kind, cursor);
        true
    }

    /// Fire `kind` at this rectangle's listeners. Returns how many ran.
    pub fn emit(&self, kind: EventKind, cursor: Option<Point>) -> usize {
        tracing::debug!("rect {:?}: {}", self.id.0, kind.label());
        self.events.emit(&RectEvent {
            kind,
            target: self.id,
            cursor,
        })
    }

    /// The quad this rectangle occupies, in normalized device coordinates.
    pub fn ndc_quad(&self, viewport: &Viewport) -> NdcQuad {
        NdcQuad {
            top_left: viewport.map(&self.top_left),
            bottom_right: viewport.map(&self.bottom_right()),
            color: self.current_color(),
        }
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, viewport: &Viewport) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        canvas.fill(self.ndc_quad(viewport));
    }
}

/// A clone is a distinct widget: fresh id, no hover or focus.
impl Clone for Rectangle {
    fn clone(&self) -> Self {
        Self {
            id: RectId::new(),
            top_left: self.top_left,
            width: self.width,
            height: self.height,
            color: self.color,
            hover_color: self.hover_color,
            focus_color: self.focus_color,
            events: self.events.clone(),
            hovered: false,
            focused: false,
        }
    }
}
