//! Construction of the screen-space polygon for one face of one slab.
//!
//! Each face has a fixed vertex rule over the slab's four logical corner
//! points (top-left, top-right, bottom-left, bottom-right in chart space)
//! plus the z/depth pair. The builder applies the scene transform, the
//! darkening blend, the thin-border rules for contiguous runs, the
//! two-layer translucency protocol, and the clipped-segment face
//! restriction. Malformed geometry yields `None`, never a panic.

use vplot_math::{Matrix3D, Point2D, Point3, Rect, Tolerance};
use vplot_scene::{FacePolygon, LineSegmentType, PointStyle, Rgba, SurfaceNames};

/// Extra darkening applied to the layer-1 outline so back-facing borders
/// stay readable through a translucent front face.
const LAYER1_OUTLINE_DARKENING: f64 = 0.25;

/// The four logical corner points of a slab in chart coordinates.
///
/// For an area segment the top edge may be slanted (`top_left.y` differs
/// from `top_right.y`); the bottom edge lies on the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceCorners {
    /// Top-left corner.
    pub top_left: Point2D,
    /// Top-right corner.
    pub top_right: Point2D,
    /// Bottom-left corner.
    pub bottom_left: Point2D,
    /// Bottom-right corner.
    pub bottom_right: Point2D,
}

impl FaceCorners {
    /// Corners of an axis-aligned rectangle (bar/column slabs).
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            top_left: Point2D::new(rect.x, rect.y),
            top_right: Point2D::new(rect.right(), rect.y),
            bottom_left: Point2D::new(rect.x, rect.bottom()),
            bottom_right: Point2D::new(rect.right(), rect.bottom()),
        }
    }

    /// Corners of an area segment: slanted top edge, flat bottom edge.
    pub fn area_segment(
        x_left: f64,
        y_top_left: f64,
        x_right: f64,
        y_top_right: f64,
        y_bottom: f64,
    ) -> Self {
        Self {
            top_left: Point2D::new(x_left, y_top_left),
            top_right: Point2D::new(x_right, y_top_right),
            bottom_left: Point2D::new(x_left, y_bottom),
            bottom_right: Point2D::new(x_right, y_bottom),
        }
    }
}

/// Everything `build_face` needs to construct one face polygon.
#[derive(Debug, Clone)]
pub struct FaceRequest<'a> {
    /// Which face to build (must be a single flag).
    pub face: SurfaceNames,
    /// The slab's four logical corner points.
    pub corners: FaceCorners,
    /// Z position of the slab's far plane.
    pub z_position: f64,
    /// Slab depth along Z.
    pub depth: f64,
    /// Point styling (fill, border).
    pub style: &'a PointStyle,
    /// Darkening factor for this face, `[0, 1]`.
    pub darkening: f64,
    /// Slab position within its run (thin-border placement).
    pub segment_type: LineSegmentType,
    /// Series painted in reverse order: run extremities swap sides.
    pub reversed: bool,
    /// Render layer, 1 or 2 (two-pass translucency protocol).
    pub layer: u8,
    /// Whether this face is camera-facing (from the visibility module).
    pub visible: bool,
    /// Slab was clipped against the plot boundary: only Top/Bottom faces
    /// may render (side faces would show a false wall at the clip edge).
    pub clipped: bool,
}

fn at_depth(p: Point2D, z: f64) -> Point3 {
    Point3::new(p.x, p.y, z)
}

/// The 4 untransformed vertices of the requested face.
///
/// Panics on a non-singleton face flag: that is a pipeline contract
/// violation, not user data.
fn face_vertices(req: &FaceRequest) -> [Point3; 4] {
    let c = &req.corners;
    let far = req.z_position;
    let near = req.z_position + req.depth;
    match req.face {
        SurfaceNames::FRONT => [
            at_depth(c.top_left, near),
            at_depth(c.top_right, near),
            at_depth(c.bottom_right, near),
            at_depth(c.bottom_left, near),
        ],
        SurfaceNames::BACK => [
            at_depth(c.top_left, far),
            at_depth(c.top_right, far),
            at_depth(c.bottom_right, far),
            at_depth(c.bottom_left, far),
        ],
        SurfaceNames::TOP => [
            at_depth(c.top_left, far),
            at_depth(c.top_right, far),
            at_depth(c.top_right, near),
            at_depth(c.top_left, near),
        ],
        SurfaceNames::BOTTOM => [
            at_depth(c.bottom_left, far),
            at_depth(c.bottom_right, far),
            at_depth(c.bottom_right, near),
            at_depth(c.bottom_left, near),
        ],
        SurfaceNames::LEFT => [
            at_depth(c.top_left, far),
            at_depth(c.top_left, near),
            at_depth(c.bottom_left, near),
            at_depth(c.bottom_left, far),
        ],
        SurfaceNames::RIGHT => [
            at_depth(c.top_right, far),
            at_depth(c.top_right, near),
            at_depth(c.bottom_right, near),
            at_depth(c.bottom_right, far),
        ],
        other => panic!("build_face called with a non-singleton face: {other:?}"),
    }
}

/// Effective run-extremity flags after the reversed-order swap.
fn run_caps(segment_type: LineSegmentType, reversed: bool) -> (bool, bool) {
    let (left, right) = (segment_type.caps_left(), segment_type.caps_right());
    if reversed {
        (right, left)
    } else {
        (left, right)
    }
}

/// Build the polygon for one face of one slab.
///
/// Returns `None` when the face must not render this pass:
/// - layer 1 is the translucent underdraw and only emits borders of
///   camera-averted faces of translucent slabs;
/// - layer 2 only emits camera-facing faces;
/// - clipped slabs emit Top/Bottom only;
/// - Left/Right faces exist only at run extremities;
/// - degenerate geometry (NaN, fewer than 3 distinct screen points).
pub fn build_face(matrix: &Matrix3D, req: &FaceRequest) -> Option<FacePolygon> {
    let (caps_left, caps_right) = run_caps(req.segment_type, req.reversed);

    match req.layer {
        1 => {
            if req.visible || !req.style.color.is_translucent() {
                return None;
            }
        }
        2 => {
            if !req.visible {
                return None;
            }
        }
        other => panic!("build_face called with layer {other}, expected 1 or 2"),
    }

    if req.clipped && !matches!(req.face, SurfaceNames::TOP | SurfaceNames::BOTTOM) {
        return None;
    }
    match req.face {
        SurfaceNames::LEFT if !caps_left => return None,
        SurfaceNames::RIGHT if !caps_right => return None,
        _ => {}
    }

    let mut vertices = face_vertices(req);
    matrix.transform_points(&mut vertices);

    let points: Vec<Point2D> = vertices.iter().map(|p| Point2D::from(*p)).collect();
    if points.iter().any(|p| p.is_degenerate()) {
        return None;
    }
    if distinct_count(&points) < 3 {
        return None;
    }

    let (fill, border_color) = if req.layer == 1 {
        // Underdraw: no fill, outline darker than the fill color so it
        // reads through the translucent front face.
        let outline = req
            .style
            .color
            .darken((req.darkening + LAYER1_OUTLINE_DARKENING).min(1.0));
        (Rgba::TRANSPARENT, outline)
    } else {
        (
            req.style.color.darken(req.darkening),
            req.style.border_color.darken(req.darkening),
        )
    };

    let border_edges = border_edges(req.face, &points, caps_left, caps_right, req.style);

    Some(FacePolygon {
        face: req.face,
        layer: req.layer,
        points,
        fill,
        border_color,
        border_width: req.style.border_width,
        dash_style: req.style.dash_style,
        border_edges,
    })
}

/// Number of distinct points under the default tolerance.
fn distinct_count(points: &[Point2D]) -> usize {
    let tol = Tolerance::DEFAULT;
    let mut distinct: Vec<Point2D> = Vec::with_capacity(points.len());
    for p in points {
        if !distinct.iter().any(|q| tol.points_equal(p, q)) {
            distinct.push(*p);
        }
    }
    distinct.len()
}

/// Border edges to stroke for a face polygon.
///
/// Front/Back faces suppress the interior left/right edges of a
/// contiguous run; every other face strokes its full outline.
fn border_edges(
    face: SurfaceNames,
    points: &[Point2D],
    caps_left: bool,
    caps_right: bool,
    style: &PointStyle,
) -> Vec<(Point2D, Point2D)> {
    if style.border_width <= 0.0 {
        return Vec::new();
    }
    let edge = |i: usize, j: usize| (points[i], points[j]);
    match face {
        SurfaceNames::FRONT | SurfaceNames::BACK => {
            // Vertex order: tl, tr, br, bl. Top and bottom edges always;
            // side edges only at run extremities.
            let mut edges = vec![edge(0, 1), edge(2, 3)];
            if caps_right {
                edges.push(edge(1, 2));
            }
            if caps_left {
                edges.push(edge(3, 0));
            }
            edges
        }
        _ => (0..points.len())
            .map(|i| edge(i, (i + 1) % points.len()))
            .collect(),
    }
}
