//! Per-face darkening factors from the simulated light source.
//!
//! Darkening is a monotone blend toward black applied to a face's fill and
//! border colors; 0 means "fully lit". The light travels with the camera,
//! so under `Realistic` lighting the factor follows the angle between the
//! rotated face normal and the view direction.

use vplot_math::{Matrix3D, Vec3};
use vplot_scene::{LightStyle, SurfaceNames};

/// Fixed attenuation for horizontal faces under `Simplistic` lighting.
const SIMPLE_HORIZONTAL: f64 = 0.15;
/// Fixed attenuation for side faces under `Simplistic` lighting.
const SIMPLE_SIDE: f64 = 0.25;
/// Maximum attenuation under `Realistic` lighting.
const REALISTIC_MAX: f64 = 0.25;

/// Outward normal of a face in chart coordinates (Y grows down, Z toward
/// the viewer).
fn face_normal(face: SurfaceNames) -> Vec3 {
    match face {
        SurfaceNames::TOP => Vec3::new(0.0, -1.0, 0.0),
        SurfaceNames::BOTTOM => Vec3::new(0.0, 1.0, 0.0),
        SurfaceNames::LEFT => Vec3::new(-1.0, 0.0, 0.0),
        SurfaceNames::RIGHT => Vec3::new(1.0, 0.0, 0.0),
        SurfaceNames::FRONT => Vec3::new(0.0, 0.0, 1.0),
        SurfaceNames::BACK => Vec3::new(0.0, 0.0, -1.0),
        _ => panic!("face_normal called with a non-singleton face: {face:?}"),
    }
}

/// Darkening factor in `[0, 1]` for one face.
pub fn face_darkening(face: SurfaceNames, style: LightStyle, matrix: &Matrix3D) -> f64 {
    match style {
        LightStyle::None => 0.0,
        LightStyle::Simplistic => match face {
            SurfaceNames::TOP | SurfaceNames::BOTTOM => SIMPLE_HORIZONTAL,
            SurfaceNames::LEFT | SurfaceNames::RIGHT => SIMPLE_SIDE,
            _ => 0.0,
        },
        LightStyle::Realistic => {
            let rotated = matrix.transform_normal(&face_normal(face));
            // Component toward the viewer; faces turned away get the
            // full attenuation.
            let toward = rotated.z.clamp(0.0, 1.0);
            REALISTIC_MAX * (1.0 - toward)
        }
    }
}
