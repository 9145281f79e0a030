//! Application Shell: winit lifecycle and event dispatch.
//!
//! The shell owns the winit event loop and the scene. It translates
//! platform events into pointer actions on the scene and coordinates
//! rendering.

pub(crate) mod app;
mod events;

pub use app::{RectkitApp, run};
pub use events::{PointerAction, pointer_action};
