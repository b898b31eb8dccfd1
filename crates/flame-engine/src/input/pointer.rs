use glam::Vec2;

use super::queue::InputEvent;

/// Folds pointer events into a single optional location: present while the
/// pointer is down, absent otherwise.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    location: Option<Vec2>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self { location: None }
    }

    pub fn location(&self) -> Option<Vec2> {
        self.location
    }

    pub fn is_active(&self) -> bool {
        self.location.is_some()
    }

    pub fn handle(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerDown { x, y } | InputEvent::PointerMove { x, y } => {
                self.location = Some(Vec2::new(x, y));
            }
            InputEvent::PointerUp { .. } | InputEvent::PointerCancel => {
                self.location = None;
            }
        }
    }

    pub fn clear(&mut self) {
        self.location = None;
    }
}
