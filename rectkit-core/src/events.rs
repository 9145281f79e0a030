//! Per-rectangle event listeners.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::rectangle::RectId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    MouseIn,
    MouseOut,
    Press,
    Release,
    Click,
    Focus,
    Blur,
}

impl EventKind {
    pub fn all() -> &'static [EventKind] {
        &[
            EventKind::MouseIn,
            EventKind::MouseOut,
            EventKind::Press,
            EventKind::Release,
            EventKind::Click,
            EventKind::Focus,
            EventKind::Blur,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventKind::MouseIn => "mouse-in",
            EventKind::MouseOut => "mouse-out",
            EventKind::Press => "press",
            EventKind::Release => "release",
            EventKind::Click => "click",
            EventKind::Focus => "focus",
            EventKind::Blur => "blur",
        }
    }
}

/// What a listener receives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectEvent {
    pub kind: EventKind,
    pub target: RectId,
    /// Last known cursor position, in pixels. `None` for events raised
    /// without pointer input (e.g. programmatic focus).
    pub cursor: Option<Point>,
}

pub type Listener = Arc<dyn Fn(&RectEvent) + Send + Sync>;

/// A bag of listeners, invoked in registration order.
#[derive(Clone, Default)]
pub struct Events {
    listeners: Vec<(EventKind, Listener)>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on<F>(&mut self, kind: EventKind, listener: F)
    where
        F: Fn(&RectEvent) + Send + Sync + 'static,
    {
        self.listeners.push((kind, Arc::new(listener)));
    }

    /// Invoke every listener registered for `event.kind`.
    /// Returns how many ran.
    pub fn emit(&self, event: &RectEvent) -> usize {
        let mut fired = 0;
        for (kind, listener) in &self.listeners {
            if *kind == event.kind {
                listener(event);
                fired += 1;
            }
        }
        fired
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.listeners.iter().filter(|(k, _)| *k == kind).count()
    }

    pub fn clear(&mut self, kind: EventKind) {
        self.listeners.retain(|(k, _)| *k != kind);
    }

    pub fn clear_all(&mut self) {
        self.listeners.clear();
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for Events {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kinds: Vec<&str> = self.listeners.iter().map(|(k, _)| k.label()).collect();
        f.debug_struct("Events").field("listeners", &kinds).finish()
    }
}
