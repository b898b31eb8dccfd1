use serde::{Deserialize, Serialize};

/// Tunables for the heart scene. Every field has a default, so a partial
/// JSON object (or `{}`) is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Angular sampling step of the heart curves, in radians.
    pub angle_step: f32,
    /// Phase clock increment per tick.
    pub time_increment: f32,
    /// Horizontal padding kept clear on each side of the heart.
    pub horizontal_padding: f32,
    /// Viewport dimension at which the radii below are used unscaled.
    pub reference_dimension: f32,
    pub outer_radius: f32,
    pub inner_radius: f32,
    /// Extra lace length beyond the outer-to-inner gap.
    pub lace_slack: f32,
    /// Radius of the sparkle button's tap region.
    pub hit_radius: f32,
    /// Seconds to wait for remote messages before falling back.
    pub message_timeout: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            angle_step: 0.06,
            time_increment: 0.005,
            horizontal_padding: 24.0,
            reference_dimension: 430.0,
            outer_radius: 20.0,
            inner_radius: 8.0,
            lace_slack: 40.0,
            hit_radius: 20.0,
            message_timeout: 5.0,
        }
    }
}

impl SceneConfig {
    /// Smallest accepted curve sampling step, about 6300 points per curve.
    pub const MIN_ANGLE_STEP: f32 = 1e-3;

    /// Parse a config from a JSON string. Missing fields keep defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        if !(config.angle_step >= Self::MIN_ANGLE_STEP && config.angle_step.is_finite()) {
            return Err(serde::de::Error::custom(format!(
                "angle_step must be a finite value >= {}",
                Self::MIN_ANGLE_STEP
            )));
        }
        if !(config.reference_dimension > 0.0 && config.reference_dimension.is_finite()) {
            return Err(serde::de::Error::custom(
                "reference_dimension must be positive and finite",
            ));
        }
        Ok(config)
    }
}
