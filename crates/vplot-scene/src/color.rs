//! RGBA color with the darkening blend used for unlit faces.

use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Rgba {
    /// Create an opaque color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with explicit alpha.
    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::with_alpha(0, 0, 0, 0);

    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Return the same color with a different alpha.
    pub const fn alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// True when the color will be composited (alpha below 255).
    pub fn is_translucent(&self) -> bool {
        self.a < 255
    }

    /// Blend toward black by `factor` in `[0, 1]`.
    ///
    /// 0 means no attenuation, 1 yields black. Alpha is preserved. The
    /// blend is monotone: a larger factor never produces a brighter color.
    pub fn darken(&self, factor: f64) -> Self {
        let f = (1.0 - factor.clamp(0.0, 1.0)).max(0.0);
        Self {
            r: (self.r as f64 * f).round() as u8,
            g: (self.g as f64 * f).round() as u8,
            b: (self.b as f64 * f).round() as u8,
            a: self.a,
        }
    }

    /// Relative luminance (Rec. 601 weights), in `[0, 255]`.
    pub fn luminance(&self) -> f64 {
        0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn darken_endpoints() {
        let c = Rgba::new(200, 100, 50);
        assert_eq!(c.darken(0.0), c);
        assert_eq!(c.darken(1.0), Rgba::BLACK);
    }

    #[test]
    fn darken_preserves_alpha() {
        let c = Rgba::with_alpha(200, 100, 50, 96);
        assert_eq!(c.darken(0.5).a, 96);
    }

    #[test]
    fn darken_is_monotone_toward_black() {
        // Luminance must never increase as the factor grows, for any color.
        let colors = [
            Rgba::new(255, 255, 255),
            Rgba::new(200, 100, 50),
            Rgba::new(1, 2, 3),
            Rgba::with_alpha(13, 200, 77, 128),
        ];
        for c in colors {
            let mut last = c.luminance();
            for step in 1..=10 {
                let lum = c.darken(step as f64 / 10.0).luminance();
                assert!(
                    lum <= last + 1e-9,
                    "luminance rose at step {step} for {c:?}"
                );
                last = lum;
            }
        }
    }

    #[test]
    fn darken_clamps_out_of_range_factors() {
        let c = Rgba::new(10, 20, 30);
        assert_eq!(c.darken(-0.5), c);
        assert_eq!(c.darken(2.0), Rgba::BLACK);
    }

    #[test]
    fn serde_round_trip() {
        let c = Rgba::with_alpha(1, 2, 3, 4);
        let json = serde_json::to_string(&c).unwrap();
        let back: Rgba = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
