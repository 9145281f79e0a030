//! rectkit bridge library target.
//!
//! The wgpu rectangle pipeline and the winit shell. The binary entry point
//! is in `main.rs`; this file exists so `tests/*.rs` can reach the pieces
//! that do not need a live GPU.

pub mod gfx;
pub mod shell;
