//! Parametric heart curves, sampled once at startup.
//!
//! x = 16·r·sin³(t)
//! y = r·(13·cos t − 5·cos 2t − 2·cos 3t − cos 4t)
//!
//! Both curves share one angle sampling, so index `i` names the same angle
//! on the inner and the outer heart.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::config::SceneConfig;

/// Sample angles `0, step, 2·step, …` strictly below 2π. Steps finer than
/// [`SceneConfig::MIN_ANGLE_STEP`] are raised to it; non-positive or
/// non-finite steps yield nothing.
pub fn sample_angles(step: f32) -> Vec<f32> {
    let mut angles = Vec::new();
    if !(step > 0.0 && step.is_finite()) {
        return angles;
    }
    let step = step.max(SceneConfig::MIN_ANGLE_STEP);
    let mut i = 0u32;
    loop {
        let angle = i as f32 * step;
        if angle >= TAU {
            break;
        }
        angles.push(angle);
        i += 1;
    }
    angles
}

/// One point of the heart curve around the origin, y pointing up.
pub fn heart_point(angle: f32, radius: f32) -> Vec2 {
    let x = radius * 16.0 * angle.sin().powi(3);
    let y = radius
        * (13.0 * angle.cos()
            - 5.0 * (2.0 * angle).cos()
            - 2.0 * (3.0 * angle).cos()
            - (4.0 * angle).cos());
    Vec2::new(x, y)
}

/// Radius multiplier that fits the heart in the viewport.
/// The viewport is read once; resizing later does not rescale.
/// An unusable reference dimension collapses the heart to a point.
pub fn scale_factor(viewport: Vec2, config: &SceneConfig) -> f32 {
    if !(config.reference_dimension > 0.0 && config.reference_dimension.is_finite()) {
        return 0.0;
    }
    let available_width = (viewport.x - 2.0 * config.horizontal_padding).max(0.0);
    let available_height = viewport.y;
    available_width.min(available_height) / config.reference_dimension
}

/// The outer and inner heart curves, placed in world space.
#[derive(Debug, Clone)]
pub struct HeartField {
    angles: Vec<f32>,
    outer: Vec<Vec2>,
    inner: Vec<Vec2>,
    center: Vec2,
}

impl HeartField {
    pub fn new(viewport: Vec2, config: &SceneConfig) -> Self {
        let scale = scale_factor(viewport, config);
        let center = viewport * 0.5;
        let angles = sample_angles(config.angle_step);

        let place = |radius: f32| -> Vec<Vec2> {
            angles
                .iter()
                .map(|&a| {
                    let p = heart_point(a, radius);
                    // world space is y-down
                    center + Vec2::new(p.x, -p.y)
                })
                .collect()
        };

        let outer = place(config.outer_radius * scale);
        let inner = place(config.inner_radius * scale);

        log::info!(
            "heart: {} points per curve, scale {:.3}",
            angles.len(),
            scale
        );

        Self {
            angles,
            outer,
            inner,
            center,
        }
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    pub fn angles(&self) -> &[f32] {
        &self.angles
    }

    pub fn outer(&self) -> &[Vec2] {
        &self.outer
    }

    pub fn inner(&self) -> &[Vec2] {
        &self.inner
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Targets for pair `i`: the first population chases the outer curve on
    /// outer phases and the inner curve otherwise; the second gets the other.
    pub fn targets(&self, i: usize, use_outer: bool) -> (Vec2, Vec2) {
        if use_outer {
            (self.outer[i], self.inner[i])
        } else {
            (self.inner[i], self.outer[i])
        }
    }

    /// Gap between the two curves at index `i`.
    pub fn gap(&self, i: usize) -> f32 {
        self.outer[i].distance(self.inner[i])
    }
}
