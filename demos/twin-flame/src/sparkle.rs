//! Tap-to-reveal: the four-point star at the centre of the heart and the
//! message label it uncovers.

use std::f32::consts::TAU;

use flame_engine::{OverlayInstance, Tween};
use glam::Vec2;

/// Overlay kinds understood by the host renderer.
pub const OVERLAY_SPARKLE: f32 = 0.0;
pub const OVERLAY_MESSAGE: f32 = 1.0;

const SPIN_SECONDS: f32 = 0.8;
const SPIN_ANGLE: f32 = 2.0 * TAU;
const VANISH_SECONDS: f32 = 0.2;
const VANISH_SCALE: f32 = 0.1;

const REVEAL_SECONDS: f32 = 0.5;
const REVEAL_RISE: f32 = 100.0;
/// Label start height above the bottom edge.
const REVEAL_BASELINE: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparklePhase {
    Idle,
    Spinning,
    Vanishing,
    Gone,
}

#[derive(Debug, Clone)]
pub struct SparkleButton {
    center: Vec2,
    radius: f32,
    phase: SparklePhase,
    spin: Tween,
    fade: Tween,
    shrink: Tween,
}

impl SparkleButton {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self {
            center,
            radius,
            phase: SparklePhase::Idle,
            spin: Tween::new(0.0, SPIN_ANGLE, SPIN_SECONDS),
            fade: Tween::fade_out(VANISH_SECONDS),
            shrink: Tween::new(1.0, VANISH_SCALE, VANISH_SECONDS),
        }
    }

    pub fn phase(&self) -> SparklePhase {
        self.phase
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Inside the circular hit region, edge included.
    pub fn contains(&self, point: Vec2) -> bool {
        point.distance(self.center) <= self.radius
    }

    /// Start the reveal if `point` hits an idle button. Later taps are
    /// refused.
    pub fn tap(&mut self, point: Vec2) -> bool {
        if self.phase != SparklePhase::Idle || !self.contains(point) {
            return false;
        }
        log::debug!("sparkle tapped at ({:.1}, {:.1})", point.x, point.y);
        self.phase = SparklePhase::Spinning;
        true
    }

    /// Advance the animation. Returns true on the frame the button is gone.
    pub fn update(&mut self, dt: f32) -> bool {
        match self.phase {
            SparklePhase::Spinning => {
                let left = self.spin.advance(dt);
                if self.spin.is_complete() {
                    self.phase = SparklePhase::Vanishing;
                    self.vanish(left)
                } else {
                    false
                }
            }
            SparklePhase::Vanishing => self.vanish(dt),
            SparklePhase::Idle | SparklePhase::Gone => false,
        }
    }

    fn vanish(&mut self, dt: f32) -> bool {
        self.fade.advance(dt);
        self.shrink.advance(dt);
        if self.fade.is_complete() {
            self.phase = SparklePhase::Gone;
            true
        } else {
            false
        }
    }

    pub fn rotation(&self) -> f32 {
        self.spin.value()
    }

    pub fn alpha(&self) -> f32 {
        self.fade.value()
    }

    pub fn scale(&self) -> f32 {
        self.shrink.value()
    }

    /// `scale` carries the star's half-extent in world units.
    pub fn overlay(&self) -> Option<OverlayInstance> {
        if self.phase == SparklePhase::Gone {
            return None;
        }
        Some(OverlayInstance {
            kind: OVERLAY_SPARKLE,
            x: self.center.x,
            y: self.center.y,
            rotation: self.rotation(),
            scale: self.radius * self.scale(),
            alpha: self.alpha(),
        })
    }
}

/// Today's message, fading in while it rises from the bottom of the screen.
#[derive(Debug, Clone)]
pub struct MessageLabel {
    text: String,
    x: f32,
    rise: Tween,
    fade: Tween,
}

impl MessageLabel {
    pub fn new(text: String, viewport: Vec2) -> Self {
        let start = viewport.y - REVEAL_BASELINE;
        Self {
            text,
            x: viewport.x * 0.5,
            rise: Tween::new(start, start - REVEAL_RISE, REVEAL_SECONDS),
            fade: Tween::fade_in(REVEAL_SECONDS),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn update(&mut self, dt: f32) {
        self.rise.advance(dt);
        self.fade.advance(dt);
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.rise.value())
    }

    pub fn alpha(&self) -> f32 {
        self.fade.value()
    }

    pub fn is_settled(&self) -> bool {
        self.rise.is_complete() && self.fade.is_complete()
    }

    pub fn overlay(&self) -> OverlayInstance {
        let position = self.position();
        OverlayInstance {
            kind: OVERLAY_MESSAGE,
            x: position.x,
            y: position.y,
            rotation: 0.0,
            scale: 1.0,
            alpha: self.alpha(),
        }
    }
}
