//! Winit event handling.
//!
//! Translates WindowEvent into scene actions:
//!   CursorMoved        → hover tracking
//!   CursorLeft         → clear hover
//!   Left mouse down/up → focus, press, release, click
//!   Escape             → exit

use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey};

use rectkit_core::Scene;

use super::app::RectkitApp;

/// Pointer input, stripped of platform types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerAction {
    Moved { x: f32, y: f32 },
    Left,
    Pressed,
    Released,
}

impl PointerAction {
    /// Apply to the scene. Returns `true` when something visible changed.
    pub fn apply(self, scene: &mut Scene) -> bool {
        match self {
            PointerAction::Moved { x, y } => scene.cursor_moved(x, y),
            PointerAction::Left => scene.cursor_left(),
            PointerAction::Pressed => {
                let before = scene.pointer().focused();
                scene.pressed();
                scene.pointer().focused() != before
            }
            // Release never changes hover or focus, so colors stay put.
            PointerAction::Released => {
                scene.released();
                false
            }
        }
    }
}

/// Map a window event to a pointer action, if it is one.
pub fn pointer_action(event: &WindowEvent) -> Option<PointerAction> {
    match event {
        WindowEvent::CursorMoved { position, .. } => Some(PointerAction::Moved {
            x: position.x as f32,
            y: position.y as f32,
        }),
        WindowEvent::CursorLeft { .. } => Some(PointerAction::Left),
        WindowEvent::MouseInput {
            state,
            button: MouseButton::Left,
            ..
        } => Some(match state {
            ElementState::Pressed => PointerAction::Pressed,
            ElementState::Released => PointerAction::Released,
        }),
        _ => None,
    }
}

pub fn handle_window_event(app: &mut RectkitApp, event_loop: &ActiveEventLoop, event: WindowEvent) {
    if let Some(action) = pointer_action(&event) {
        if action.apply(&mut app.scene) {
            app.request_redraw();
        }
        return;
    }

    match event {
        // ── Window lifecycle ──────────────────────────────────────
        WindowEvent::CloseRequested => {
            tracing::info!("Window close requested");
            event_loop.exit();
        }

        WindowEvent::Destroyed => {
            tracing::info!("Window destroyed");
        }

        // ── Resize ───────────────────────────────────────────────
        WindowEvent::Resized(new_size) => {
            if let Some(gpu) = &mut app.gpu {
                gpu.resize(new_size);
            }
            app.scene.resize(new_size.width, new_size.height);
            app.request_redraw();
        }

        // ── Keyboard ─────────────────────────────────────────────
        WindowEvent::KeyboardInput { event, .. } => {
            if event.state == ElementState::Pressed
                && event.logical_key == Key::Named(NamedKey::Escape)
            {
                app.wants_exit = true;
            }
        }

        // ── Redraw ───────────────────────────────────────────────
        WindowEvent::RedrawRequested => {
            app.redraw();
        }

        _ => {}
    }
}
