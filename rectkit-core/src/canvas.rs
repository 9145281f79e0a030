//! The seam between widget state and the GPU.
//!
//! Widgets describe what they want drawn as [`NdcQuad`]s; anything that
//! implements [`Canvas`] decides how. The wgpu pipeline in the bridge crate
//! is one implementation, tests use a recording one.

use crate::color::Color;
use crate::geometry::Point;

/// An axis-aligned quad in normalized device coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NdcQuad {
    /// Top-left corner (x in `[-1, 1]`, y up).
    pub top_left: Point,
    /// Bottom-right corner.
    pub bottom_right: Point,
    pub color: Color,
}

impl NdcQuad {
    pub fn width(&self) -> f32 {
        self.bottom_right.x - self.top_left.x
    }

    /// Height in NDC units. Positive for a quad drawn top-down.
    pub fn height(&self) -> f32 {
        self.top_left.y - self.bottom_right.y
    }
}

pub trait Canvas {
    fn fill(&mut self, quad: NdcQuad);
}

impl Canvas for Vec<NdcQuad> {
    fn fill(&mut self, quad: NdcQuad) {
        self.push(quad);
    }
}
