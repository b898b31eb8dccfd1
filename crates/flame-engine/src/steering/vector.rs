//! Steering-flavoured helpers on top of `glam::Vec2`.
//!
//! glam already supplies add, subtract, scale and distance. What it does not
//! supply with the exact semantics the steering model relies on is a
//! normalize that is total on the zero vector and a magnitude clamp that
//! leaves short vectors bit-for-bit untouched.

use glam::Vec2;

/// Total vector operations used by the steering behaviors.
pub trait SteeringVec {
    /// Euclidean length, `sqrt(x² + y²)`.
    fn magnitude(self) -> f32;

    /// Unit vector in the same direction.
    /// Returns `Vec2::ZERO` when the magnitude is exactly zero.
    fn normalized(self) -> Vec2;

    /// Clamp the magnitude to `max_value`.
    /// Returns `self` unchanged when it is already short enough.
    fn limited(self, max_value: f32) -> Vec2;
}

impl SteeringVec for Vec2 {
    #[inline]
    fn magnitude(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    #[inline]
    fn normalized(self) -> Vec2 {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Vec2::ZERO;
        }
        Vec2::new(self.x / mag, self.y / mag)
    }

    #[inline]
    fn limited(self, max_value: f32) -> Vec2 {
        if self.magnitude() > max_value {
            self.normalized() * max_value
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn normalized_has_unit_length() {
        for v in [
            Vec2::new(3.0, 4.0),
            Vec2::new(-0.001, 0.0),
            Vec2::new(1234.5, -987.0),
            Vec2::new(0.0, -7.0),
        ] {
            let n = v.normalized();
            assert!((n.magnitude() - 1.0).abs() < EPS, "{v:?} -> {n:?}");
        }
    }

    #[test]
    fn normalized_zero_is_zero() {
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
    }

    #[test]
    fn limited_clamps_long_vectors() {
        let v = Vec2::new(30.0, 40.0).limited(5.0);
        assert!((v.magnitude() - 5.0).abs() < EPS);
        assert!((v.x - 3.0).abs() < EPS && (v.y - 4.0).abs() < EPS);
    }

    #[test]
    fn limited_keeps_short_vectors_identical() {
        let v = Vec2::new(0.3, -0.4);
        assert_eq!(v.limited(0.5), v);
        assert_eq!(v.limited(1.0), v);
    }

    #[test]
    fn limited_to_zero_collapses() {
        assert_eq!(Vec2::new(2.0, 0.0).limited(0.0), Vec2::ZERO);
    }

    #[test]
    fn magnitude_matches_distance() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(4.0, 6.0);
        assert!(((b - a).magnitude() - a.distance(b)).abs() < EPS);
    }
}
