// extensions/tween.rs
//
// A single scalar animated linearly over a fixed duration.
//
// Usage:
//   let mut fade = Tween::fade_out(0.2);
//   fade.advance(dt);
//   alpha = fade.value();

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    /// Seconds.
    pub duration: f32,
    elapsed: f32,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
        }
    }

    pub fn fade_in(duration: f32) -> Self {
        Self::new(0.0, 1.0, duration)
    }

    pub fn fade_out(duration: f32) -> Self {
        Self::new(1.0, 0.0, duration)
    }

    /// Add `dt` seconds and return the part of `dt` left over past the end,
    /// so a follow-up tween can start from it. Negative `dt` is ignored.
    pub fn advance(&mut self, dt: f32) -> f32 {
        let remaining = self.duration - self.elapsed;
        let dt = dt.max(0.0);
        if dt >= remaining {
            self.elapsed = self.duration;
            dt - remaining.max(0.0)
        } else {
            self.elapsed += dt;
            0.0
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Normalized progress in [0, 1]. Zero-length tweens are always done.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn value(&self) -> f32 {
        lerp(self.from, self.to, self.progress())
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }
}
