// rectkit-bridge/src/shell/app.rs
//! Application state and winit event loop.

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use rectkit_core::{Color, EventKind, Scene, ToolkitConfig};

use crate::gfx::GpuState;

// ════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════

/// The rectkit application. Owns the window, the GPU, and the scene.
pub struct RectkitApp {
    // ── Window + GPU ──
    pub window: Option<Arc<Window>>,
    pub gpu: Option<GpuState>,

    // ── Widgets ──
    pub scene: Scene,
    pub clear_color: Color,

    // ── Window settings ──
    pub title: String,
    pub initial_size: PhysicalSize<u32>,

    pub wants_exit: bool,
}

impl RectkitApp {
    pub fn new(config: &ToolkitConfig, scene: Scene) -> Self {
        Self {
            window: None,
            gpu: None,
            scene,
            clear_color: config.clear_color,
            title: config.window.title.clone(),
            initial_size: PhysicalSize::new(config.window.width, config.window.height),
            wants_exit: false,
        }
    }

    /// Request a window redraw.
    pub fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    /// Draw the scene into the current frame.
    pub fn redraw(&mut self) {
        let Some(gpu) = &mut self.gpu else {
            return;
        };

        let scene = &self.scene;
        if let Err(e) = gpu.render_frame(self.clear_color, |rects| scene.draw(rects)) {
            tracing::error!("Render failed: {:#}", e);
        }
    }
}

// ════════════════════════════════════════════════════════════════════
// ApplicationHandler
// ════════════════════════════════════════════════════════════════════

impl ApplicationHandler for RectkitApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already created
        }

        let attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(self.initial_size);

        match event_loop.create_window(attrs) {
            Ok(window) => {
                let window = Arc::new(window);
                match GpuState::new(window.clone()) {
                    Ok(gpu) => {
                        let viewport = gpu.viewport();
                        self.scene.resize(viewport.width, viewport.height);
                        self.gpu = Some(gpu);
                        self.window = Some(window);
                        tracing::info!("Window + GPU initialized");
                        self.request_redraw();
                    }
                    Err(e) => {
                        tracing::error!("GPU init failed: {:#}", e);
                        event_loop.exit();
                    }
                }
            }
            Err(e) => {
                tracing::error!("Window creation failed: {:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        super::events::handle_window_event(self, event_loop, event);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.wants_exit {
            event_loop.exit();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // Shared GPU resources go before the window does.
        if let Some(gpu) = self.gpu.take() {
            gpu.destroy();
        }
        self.window = None;
    }
}

// ════════════════════════════════════════════════════════════════════
// Entry Point
// ════════════════════════════════════════════════════════════════════

/// Log clicks and focus changes on every rectangle in the scene.
fn attach_demo_listeners(scene: &mut Scene) {
    let ids: Vec<_> = scene.rects().iter().map(|r| r.id).collect();
    for (index, id) in ids.into_iter().enumerate() {
        if let Some(rect) = scene.get_mut(id) {
            rect.events.on(EventKind::Click, move |_| {
                tracing::info!("Rectangle #{} clicked", index);
            });
            rect.events.on(EventKind::Focus, move |e| {
                tracing::info!("Rectangle #{} focused at {:?}", index, e.cursor);
            });
        }
    }
}

/// Run the rectkit demo window.
pub fn run(config: ToolkitConfig) -> anyhow::Result<()> {
    // Tracing is initialized once in the binary entry point (src/main.rs).

    tracing::info!("rectkit v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut scene = config.build_scene()?;
    attach_demo_listeners(&mut scene);
    tracing::info!("Scene ready with {} rectangles", scene.len());

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = RectkitApp::new(&config, scene);
    event_loop.run_app(&mut app)?;

    Ok(())
}
