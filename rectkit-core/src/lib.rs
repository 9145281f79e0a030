//! # rectkit core
//!
//! GPU-free state for the rectkit widget toolkit: geometry, colors, the
//! rectangle widget with its hit test and listeners, pointer tracking,
//! and configuration. The bridge crate supplies the wgpu [`Canvas`].

pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod events;
pub mod geometry;
pub mod pointer;
pub mod rectangle;
pub mod scene;
pub mod viewport;

// Re-export the main types so users can just use `rectkit_core::Rectangle`
pub use canvas::{Canvas, NdcQuad};
pub use color::Color;
pub use config::ToolkitConfig;
pub use error::{Error, Result};
pub use events::{EventKind, Events, RectEvent};
pub use geometry::Point;
pub use pointer::PointerTracker;
pub use rectangle::{RectId, Rectangle};
pub use scene::Scene;
pub use viewport::Viewport;
