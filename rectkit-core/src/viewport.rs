//! Viewport dimensions and pixel -> NDC mapping.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Size of the drawable surface in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Map a screen pixel to normalized device coordinates.
    ///
    /// `(0, 0)` lands on `(-1, 1)` and `(width, height)` on `(1, -1)`.
    /// A zero dimension is treated as one pixel.
    pub fn map(&self, p: &Point) -> Point {
        let w = self.width.max(1) as f32;
        let h = self.height.max(1) as f32;
        Point {
            x: 2.0 * p.x / w - 1.0,
            y: 1.0 - 2.0 * p.y / h,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn as_array(&self) -> [u32; 2] {
        [self.width, self.height]
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

impl From<[u32; 2]> for Viewport {
    fn from([width, height]: [u32; 2]) -> Self {
        Self { width, height }
    }
}
