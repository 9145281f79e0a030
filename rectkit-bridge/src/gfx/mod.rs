//! GPU Rendering Subsystem.
//!
//! Manages the wgpu device, surface, and rendering pipelines.
//! Sub-modules:
//!   renderer: wgpu device/surface lifecycle, frame orchestration
//!   rect:     shared rectangle pipeline (unit quad, shader, instances)

mod rect;
mod renderer;

pub use rect::{RectBatch, RectInstance, RectPipeline, grown_capacity};
pub use renderer::GpuState;
