//! Validated 3D scene settings.
//!
//! The geometry core assumes numeric inputs are already in range; this is
//! the single place those ranges are enforced, before the pipeline runs.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::types::LightStyle;

/// Configuration of the 3D chart scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scene3dSettings {
    /// Camera inclination (rotation about X) in degrees, `[-90, 90]`.
    pub inclination: f64,
    /// Camera rotation (azimuth about Y) in degrees, `[-180, 180]`.
    pub rotation: f64,
    /// Perspective percentage, `[0, 100]`; 0 is orthographic.
    pub perspective: f64,
    /// Scene depth along Z in chart units, strictly positive.
    pub depth: f64,
    /// Gap between series slabs along Z, as a fraction of `depth`, `[0, 1)`.
    pub point_gap_depth: f64,
    /// Paint series in reverse Z order.
    pub reversed_series_order: bool,
    /// Simulated light source.
    pub light_style: LightStyle,
}

impl Default for Scene3dSettings {
    fn default() -> Self {
        Self {
            inclination: 30.0,
            rotation: 30.0,
            perspective: 0.0,
            depth: 10.0,
            point_gap_depth: 0.0,
            reversed_series_order: false,
            light_style: LightStyle::Simplistic,
        }
    }
}

impl Scene3dSettings {
    /// Validate all ranges, returning the first violation found.
    pub fn validate(&self) -> Result<()> {
        if !self.inclination.is_finite() || self.inclination.abs() > 90.0 {
            return Err(ChartError::InvalidSettings(format!(
                "inclination must be in [-90, 90] degrees, got {}",
                self.inclination
            )));
        }
        if !self.rotation.is_finite() || self.rotation.abs() > 180.0 {
            return Err(ChartError::InvalidSettings(format!(
                "rotation must be in [-180, 180] degrees, got {}",
                self.rotation
            )));
        }
        if !self.perspective.is_finite() || !(0.0..=100.0).contains(&self.perspective) {
            return Err(ChartError::InvalidSettings(format!(
                "perspective must be in [0, 100] percent, got {}",
                self.perspective
            )));
        }
        if !self.depth.is_finite() || self.depth <= 0.0 {
            return Err(ChartError::InvalidSettings(format!(
                "depth must be positive, got {}",
                self.depth
            )));
        }
        if !self.point_gap_depth.is_finite() || !(0.0..1.0).contains(&self.point_gap_depth) {
            return Err(ChartError::InvalidSettings(format!(
                "point gap depth must be in [0, 1), got {}",
                self.point_gap_depth
            )));
        }
        Ok(())
    }

    /// Builder-style inclination.
    pub fn with_inclination(mut self, degrees: f64) -> Self {
        self.inclination = degrees;
        self
    }

    /// Builder-style rotation.
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Builder-style perspective percentage.
    pub fn with_perspective(mut self, percent: f64) -> Self {
        self.perspective = percent;
        self
    }

    /// Builder-style scene depth.
    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = depth;
        self
    }

    /// Builder-style reversed series order.
    pub fn with_reversed_series_order(mut self, reversed: bool) -> Self {
        self.reversed_series_order = reversed;
        self
    }

    /// Builder-style light style.
    pub fn with_light_style(mut self, style: LightStyle) -> Self {
        self.light_style = style;
        self
    }
}
