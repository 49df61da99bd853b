#![warn(missing_docs)]

//! Math types for the vplot 3D chart geometry engine.
//!
//! Thin wrappers around nalgebra providing domain-specific types for
//! chart-scene geometry: points, the scene transform (rotation plus
//! one-point perspective), signed-area winding tests, and tolerance
//! constants.
//!
//! Coordinate convention: chart coordinates have X growing right and Y
//! growing **down** (screen convention). Z grows toward the viewer, so a
//! slab at `z = 0` sits against the back wall of the scene and larger
//! residual z after projection means "closer to the camera".

use serde::{Deserialize, Serialize};

/// A point in 3D chart-scene space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D chart-scene space.
pub type Vec3 = nalgebra::Vector3<f64>;

/// A 2D point for serializable polygon output.
///
/// We use a custom type instead of nalgebra::Point2 to enable serde
/// serialization without requiring nalgebra's serde feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point2D {
    /// Create a new 2D point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Distance to another point.
    pub fn distance(&self, other: &Self) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// True if either coordinate is NaN or infinite.
    pub fn is_degenerate(&self) -> bool {
        !self.x.is_finite() || !self.y.is_finite()
    }
}

impl Default for Point2D {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl From<Point3> for Point2D {
    fn from(p: Point3) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// A 2D axis-aligned rectangle in chart coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge (Y grows down).
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point.
    pub fn center(&self) -> Point2D {
        Point2D::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear coordinate tolerance (chart units).
    pub linear: f64,
}

impl Tolerance {
    /// Default chart tolerances (1e-6 chart units).
    pub const DEFAULT: Self = Self { linear: 1e-6 };

    /// Check if two 2D points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point2D, b: &Point2D) -> bool {
        a.distance(b) < self.linear
    }

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Twice the signed area of the triangle `(p0, p1, p2)` in screen space.
///
/// With the Y-down screen convention, a positive value means the corners
/// run counter-clockwise as seen by the viewer. This is the atomic test
/// behind all face-visibility decisions: a face is camera-facing iff the
/// signed area of its corner triangle is strictly positive.
pub fn triangle_signed_area(p0: &Point3, p1: &Point3, p2: &Point3) -> f64 {
    (p1.x - p0.x) * (p2.y - p0.y) - (p2.x - p0.x) * (p1.y - p0.y)
}

/// The scene transform: rotation about the plot center, optional one-point
/// perspective, and projection into the 2D screen plane.
///
/// The transform is a pure function of its construction parameters; calling
/// [`Matrix3D::transform_points`] never accumulates hidden state. Z rotation
/// is not supported (charts never roll the camera).
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix3D {
    /// Scene rotation center: plot-rectangle center at half depth.
    center: Point3,
    /// Inclination angle (rotation about the X axis), radians.
    angle_x: f64,
    /// Azimuth angle (rotation about the Y axis), radians.
    angle_y: f64,
    /// Viewer distance for perspective division; infinite when orthographic.
    viewer_distance: f64,
}

impl Matrix3D {
    /// Build the scene transform.
    ///
    /// `plot_bounds` is the 2D plot rectangle in chart coordinates, `depth`
    /// the scene depth along Z, `inclination`/`rotation` the camera angles
    /// in **degrees**, and `perspective` the perspective percentage in
    /// `[0, 100]` (0 = orthographic).
    ///
    /// Angle and perspective ranges are assumed already validated by the
    /// scene settings layer; this constructor only derives coefficients.
    pub fn new(
        plot_bounds: Rect,
        depth: f64,
        inclination: f64,
        rotation: f64,
        perspective: f64,
    ) -> Self {
        let c2 = plot_bounds.center();
        let center = Point3::new(c2.x, c2.y, depth / 2.0);
        // Viewer distance shrinks as the perspective percentage grows;
        // at 0% the division degenerates to the identity (orthographic).
        let viewer_distance = if perspective > 0.0 {
            depth * 100.0 / perspective
        } else {
            f64::INFINITY
        };
        Self {
            center,
            angle_x: inclination.to_radians(),
            angle_y: rotation.to_radians(),
            viewer_distance,
        }
    }

    /// An orthographic, unrotated transform over the given bounds.
    pub fn orthographic(plot_bounds: Rect, depth: f64) -> Self {
        Self::new(plot_bounds, depth, 0.0, 0.0, 0.0)
    }

    /// The scene rotation center.
    pub fn center(&self) -> Point3 {
        self.center
    }

    /// True when a perspective division is applied (perspective > 0%).
    pub fn has_perspective(&self) -> bool {
        self.viewer_distance.is_finite()
    }

    /// Center of projection in screen coordinates, present only under
    /// perspective viewing. Consumed by the draw-order comparer.
    pub fn perspective_center(&self) -> Option<Point2D> {
        self.has_perspective()
            .then(|| Point2D::new(self.center.x, self.center.y))
    }

    /// Transform one point into screen space, returning the new point.
    ///
    /// The returned z is the residual depth after rotation (larger =
    /// closer to the viewer), used for depth sorting.
    pub fn transform_point(&self, p: &Point3) -> Point3 {
        // Move the rotation center to the origin. Y is flipped so the
        // rotation math runs in a Y-up frame, then flipped back on exit.
        let x0 = p.x - self.center.x;
        let y0 = -(p.y - self.center.y);
        let z0 = p.z - self.center.z;

        // Azimuth: rotate about the Y axis.
        let (sy, cy) = self.angle_y.sin_cos();
        let x1 = x0 * cy + z0 * sy;
        let z1 = -x0 * sy + z0 * cy;

        // Inclination: rotate about the X axis.
        let (sx, cx) = self.angle_x.sin_cos();
        let y2 = y0 * cx - z1 * sx;
        let z2 = y0 * sx + z1 * cx;

        // One-point perspective about the scene center.
        let (x3, y3) = if self.viewer_distance.is_finite() {
            let k = self.viewer_distance / (self.viewer_distance - z2);
            (x1 * k, y2 * k)
        } else {
            (x1, y2)
        };

        Point3::new(self.center.x + x3, self.center.y - y3, z2)
    }

    /// Transform a slice of points in place, preserving order.
    pub fn transform_points(&self, points: &mut [Point3]) {
        for p in points.iter_mut() {
            *p = self.transform_point(p);
        }
    }

    /// Rotate a direction vector by the scene rotation only (no
    /// translation, no perspective). Used for lighting normals; the
    /// returned z is the component toward the viewer.
    pub fn transform_normal(&self, n: &Vec3) -> Vec3 {
        let x0 = n.x;
        let y0 = -n.y;
        let z0 = n.z;

        let (sy, cy) = self.angle_y.sin_cos();
        let x1 = x0 * cy + z0 * sy;
        let z1 = -x0 * sy + z0 * cy;

        let (sx, cx) = self.angle_x.sin_cos();
        let y2 = y0 * cx - z1 * sx;
        let z2 = y0 * sx + z1 * cx;

        Vec3::new(x1, -y2, z2)
    }

    /// Whether the bottom wall of the scene cuboid faces the camera.
    ///
    /// Computed by transforming a probe cuboid's bottom-face corners and
    /// checking their winding; the comparer uses this to pick its primary
    /// sort direction.
    pub fn is_bottom_visible(&self) -> bool {
        // Bottom face (max Y in the Y-down frame), corners ordered so the
        // winding is positive when the underside faces the camera.
        let corners = self.probe_corners();
        let area = triangle_signed_area(&corners[3], &corners[2], &corners[6]);
        area > 0.0
    }

    /// Whether the right wall of the scene cuboid faces the camera.
    pub fn is_right_side_visible(&self) -> bool {
        let corners = self.probe_corners();
        let area = triangle_signed_area(&corners[2], &corners[1], &corners[5]);
        area > 0.0
    }

    /// Transformed corners of a unit probe cuboid centered on the scene.
    ///
    /// Corner layout (shared with the visibility module): 0..3 are the near
    /// face (larger z) in order top-left, top-right, bottom-right,
    /// bottom-left; 4..7 are the same corners on the far face.
    fn probe_corners(&self) -> [Point3; 8] {
        let c = self.center;
        let mut corners = [
            Point3::new(c.x - 0.5, c.y - 0.5, c.z + 0.5),
            Point3::new(c.x + 0.5, c.y - 0.5, c.z + 0.5),
            Point3::new(c.x + 0.5, c.y + 0.5, c.z + 0.5),
            Point3::new(c.x - 0.5, c.y + 0.5, c.z + 0.5),
            Point3::new(c.x - 0.5, c.y - 0.5, c.z - 0.5),
            Point3::new(c.x + 0.5, c.y - 0.5, c.z - 0.5),
            Point3::new(c.x + 0.5, c.y + 0.5, c.z - 0.5),
            Point3::new(c.x - 0.5, c.y + 0.5, c.z - 0.5),
        ];
        self.transform_points(&mut corners);
        corners
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 100.0)
    }

    #[test]
    fn orthographic_is_identity_in_xy() {
        let m = Matrix3D::orthographic(bounds(), 20.0);
        // The 8 corners of a cube must project to their own x/y.
        for &x in &[10.0, 90.0] {
            for &y in &[5.0, 95.0] {
                for &z in &[0.0, 20.0] {
                    let p = m.transform_point(&Point3::new(x, y, z));
                    assert_relative_eq!(p.x, x, epsilon = 1e-12);
                    assert_relative_eq!(p.y, y, epsilon = 1e-12);
                }
            }
        }
    }

    #[test]
    fn residual_z_orders_depth() {
        let m = Matrix3D::orthographic(bounds(), 20.0);
        let near = m.transform_point(&Point3::new(50.0, 50.0, 20.0));
        let far = m.transform_point(&Point3::new(50.0, 50.0, 0.0));
        assert!(near.z > far.z);
    }

    #[test]
    fn rotation_moves_depth_into_x() {
        // 90° azimuth swings the Z axis onto the screen X axis.
        let m = Matrix3D::new(bounds(), 20.0, 0.0, 90.0, 0.0);
        let p = m.transform_point(&Point3::new(50.0, 50.0, 20.0));
        assert_relative_eq!(p.x, 60.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn inclination_moves_depth_into_y() {
        // Positive inclination tips the scene so the near face moves down.
        let m = Matrix3D::new(bounds(), 20.0, 30.0, 0.0, 0.0);
        let near = m.transform_point(&Point3::new(50.0, 50.0, 20.0));
        let far = m.transform_point(&Point3::new(50.0, 50.0, 0.0));
        assert!(near.y > far.y);
    }

    #[test]
    fn perspective_shrinks_far_geometry() {
        let m = Matrix3D::new(bounds(), 20.0, 0.0, 0.0, 50.0);
        let near = m.transform_point(&Point3::new(90.0, 50.0, 20.0));
        let far = m.transform_point(&Point3::new(90.0, 50.0, 0.0));
        // Both are right of center; the far one is pulled toward center.
        assert!(far.x < near.x);
        assert!(m.perspective_center().is_some());
        assert!(Matrix3D::orthographic(bounds(), 20.0)
            .perspective_center()
            .is_none());
    }

    #[test]
    fn transform_is_stateless() {
        let m = Matrix3D::new(bounds(), 20.0, 20.0, 35.0, 10.0);
        let p = Point3::new(12.0, 34.0, 5.0);
        let a = m.transform_point(&p);
        let b = m.transform_point(&p);
        assert_eq!(a, b);
    }

    #[test]
    fn transform_points_preserves_order() {
        let m = Matrix3D::new(bounds(), 20.0, 15.0, -25.0, 0.0);
        let originals = [
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(4.0, 5.0, 6.0),
            Point3::new(7.0, 8.0, 9.0),
        ];
        let mut pts = originals;
        m.transform_points(&mut pts);
        for (orig, out) in originals.iter().zip(pts.iter()) {
            assert_eq!(*out, m.transform_point(orig));
        }
    }

    #[test]
    fn bottom_wall_visibility_follows_inclination() {
        // Tipping the scene back (negative inclination) exposes the
        // underside; tipping it forward hides it.
        let below = Matrix3D::new(bounds(), 20.0, -30.0, 0.0, 0.0);
        let above = Matrix3D::new(bounds(), 20.0, 30.0, 0.0, 0.0);
        assert!(below.is_bottom_visible());
        assert!(!above.is_bottom_visible());
    }

    #[test]
    fn right_wall_visibility_follows_rotation() {
        let from_right = Matrix3D::new(bounds(), 20.0, 0.0, -30.0, 0.0);
        let from_left = Matrix3D::new(bounds(), 20.0, 0.0, 30.0, 0.0);
        assert!(from_right.is_right_side_visible());
        assert!(!from_left.is_right_side_visible());
    }

    #[test]
    fn signed_area_winding() {
        // Y-down screen frame: (0,0) -> (1,1) -> (1,0) runs CCW for the
        // viewer and must test positive.
        let p0 = Point3::new(0.0, 0.0, 0.0);
        let p1 = Point3::new(1.0, 1.0, 0.0);
        let p2 = Point3::new(1.0, 0.0, 0.0);
        assert!(triangle_signed_area(&p0, &p1, &p2) > 0.0);
        assert!(triangle_signed_area(&p0, &p2, &p1) < 0.0);
        // Edge-on (collinear) is exactly zero.
        let q = Point3::new(2.0, 2.0, 0.0);
        assert_eq!(triangle_signed_area(&p0, &p1, &q), 0.0);
    }
}
