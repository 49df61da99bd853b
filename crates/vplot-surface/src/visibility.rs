//! Camera-facing tests for the six canonical faces of a slab cuboid.
//!
//! Visibility is decided per face from the winding order of three
//! representative transformed corners: a face is camera-facing iff the
//! signed area of its corner triangle is strictly positive. Exactly
//! edge-on faces (zero area) count as not visible, which avoids emitting
//! degenerate zero-width polygons.

use vplot_math::{triangle_signed_area, Matrix3D, Point3, Rect};
use vplot_scene::SurfaceNames;

/// Corner indices per face, ordered so the signed area is positive when
/// the face's outward normal points toward the camera.
///
/// Corner layout: 0..3 near face (z + depth) in order top-left, top-right,
/// bottom-right, bottom-left; 4..7 the same corners on the far face (z).
const FACE_TRIPLES: [(SurfaceNames, [usize; 3]); 6] = [
    (SurfaceNames::FRONT, [0, 1, 2]),
    (SurfaceNames::BACK, [5, 4, 7]),
    (SurfaceNames::TOP, [4, 5, 1]),
    (SurfaceNames::BOTTOM, [3, 2, 6]),
    (SurfaceNames::LEFT, [0, 3, 7]),
    (SurfaceNames::RIGHT, [2, 1, 5]),
];

/// The 8 corners of an axis-aligned slab cuboid, untransformed.
///
/// `bounds` is the slab's 2D extent in chart coordinates; the cuboid spans
/// `[z, z + depth]` along Z with the near (camera-side) face at `z + depth`.
pub fn cuboid_corners(bounds: Rect, z: f64, depth: f64) -> [Point3; 8] {
    let near = z + depth;
    [
        Point3::new(bounds.x, bounds.y, near),
        Point3::new(bounds.right(), bounds.y, near),
        Point3::new(bounds.right(), bounds.bottom(), near),
        Point3::new(bounds.x, bounds.bottom(), near),
        Point3::new(bounds.x, bounds.y, z),
        Point3::new(bounds.right(), bounds.y, z),
        Point3::new(bounds.right(), bounds.bottom(), z),
        Point3::new(bounds.x, bounds.bottom(), z),
    ]
}

/// The atomic visibility test: true iff the already-transformed corner
/// triangle `(p0, p1, p2)` winds counter-clockwise in screen space.
pub fn is_surface_visible(p0: &Point3, p1: &Point3, p2: &Point3) -> bool {
    triangle_signed_area(p0, p1, p2) > 0.0
}

/// Visible faces of the axis-aligned bounding cuboid under `matrix`.
///
/// Recomputed from scratch per slab; adjacent slabs can face differently
/// under perspective, so nothing here may be cached across slabs.
pub fn visible_surfaces(bounds: Rect, z: f64, depth: f64, matrix: &Matrix3D) -> SurfaceNames {
    let mut corners = cuboid_corners(bounds, z, depth);
    matrix.transform_points(&mut corners);

    let mut visible = SurfaceNames::empty();
    for (face, [a, b, c]) in FACE_TRIPLES {
        if is_surface_visible(&corners[a], &corners[b], &corners[c]) {
            visible.insert(face);
        }
    }
    visible
}

/// Refined visibility for a slab whose value edge is slanted.
///
/// The coarse test above uses the bounding cuboid, but a slab whose left
/// and right heights differ has a slanted value face whose visibility can
/// disagree with the bounding box's flat face. This recomputes that flag
/// from the two *actual* edge points `(x_left, y_left)` and
/// `(x_right, y_right)`.
///
/// `upside_down` marks a slab whose value sits below the axis-crossing
/// baseline: the slanted value edge is then the slab's geometric *bottom*
/// (tested with reversed orientation), while the flat baseline cap on top
/// keeps the coarse Top flag — the cap coincides with the bounding box's
/// top face, so the coarse test is already exact for it.
pub fn top_surface_visibility(
    bounds: Rect,
    z: f64,
    depth: f64,
    upside_down: bool,
    x_left: f64,
    y_left: f64,
    x_right: f64,
    y_right: f64,
    matrix: &Matrix3D,
) -> SurfaceNames {
    let mut visible = visible_surfaces(bounds, z, depth, matrix);

    // Precise test: far-left, far-right, near-right of the actual edge.
    let mut tri = [
        Point3::new(x_left, y_left, z),
        Point3::new(x_right, y_right, z),
        Point3::new(x_right, y_right, z + depth),
    ];
    matrix.transform_points(&mut tri);
    let area = triangle_signed_area(&tri[0], &tri[1], &tri[2]);
    if upside_down {
        visible.set(SurfaceNames::BOTTOM, area < 0.0);
    } else {
        visible.set(SurfaceNames::TOP, area > 0.0);
    }

    visible
}
