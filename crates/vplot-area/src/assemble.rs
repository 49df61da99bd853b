//! The area-surface assembler: per-segment pipeline and series walk.
//!
//! Stage order per segment: tension flattening, axis-crossing split,
//! view-range split/clamp, then the two-layer face loop. Every stage
//! recurses through [`draw_3d_surface`] so the downstream stages never
//! see a segment that still straddles a boundary.

use vplot_math::{Matrix3D, Point2D, Rect, Tolerance};
use vplot_scene::{
    AxisMapper, DataPoint3D, HotRegionList, LineSegmentType, RenderSurface, Scene3dSettings,
    SurfaceNames,
};
use vplot_surface::builder::{build_face, FaceCorners, FaceRequest};
use vplot_surface::lighting::face_darkening;
use vplot_surface::visibility::top_surface_visibility;

use crate::clip::{split_at_value, SegmentSpan};
use crate::flatten::flatten_segment;

/// Per-paint-pass context threaded through the pipeline.
///
/// Replaces mutable instance state: everything a segment needs is either
/// here (read-only camera/axis/settings, write-only outputs) or passed
/// explicitly, so segments can be processed in any order.
pub struct PaintPass<'a> {
    /// Scene transform for this pass.
    pub matrix: &'a Matrix3D,
    /// Axis mapping collaborator.
    pub axis: &'a dyn AxisMapper,
    /// Validated scene settings.
    pub settings: &'a Scene3dSettings,
    /// Drawing-surface collaborator receiving finished faces.
    pub surface: &'a mut dyn RenderSurface,
    /// Optional hit-region collaborator (hit-test passes).
    pub hot_regions: Option<&'a mut HotRegionList>,
}

/// Per-segment parameters.
#[derive(Debug, Clone)]
pub struct SegmentRequest {
    /// Cardinal-spline tension; 0 means straight.
    pub tension: f64,
    /// Slab position within its contiguous run.
    pub segment_type: LineSegmentType,
    /// Extra darkening for the visual top face.
    pub top_darkening: f64,
    /// Extra darkening for the visual bottom face.
    pub bottom_darkening: f64,
    /// Segment already clipped against the plot boundary.
    pub clipped: bool,
}

impl SegmentRequest {
    /// A plain segment with no extra darkening.
    pub fn new(tension: f64, segment_type: LineSegmentType) -> Self {
        Self {
            tension,
            segment_type,
            top_darkening: 0.0,
            bottom_darkening: 0.0,
            clipped: false,
        }
    }
}

/// Accumulated output of one segment (or one whole series).
#[derive(Debug, Default, Clone)]
pub struct SegmentResult {
    /// Number of face polygons emitted.
    pub faces_painted: usize,
    /// Hit polygons of every visible painted face, in paint order.
    pub hit_polygons: Vec<Vec<Point2D>>,
}

impl SegmentResult {
    /// Fold another result into this one.
    pub fn merge(&mut self, other: SegmentResult) {
        self.faces_painted += other.faces_painted;
        self.hit_polygons.extend(other.hit_polygons);
    }
}

/// Cap ownership of a sub-segment produced by a split.
fn sub_segment_type(parent: LineSegmentType, is_first: bool, is_last: bool) -> LineSegmentType {
    let left = is_first && parent.caps_left();
    let right = is_last && parent.caps_right();
    match (left, right) {
        (true, true) => LineSegmentType::Single,
        (true, false) => LineSegmentType::First,
        (false, true) => LineSegmentType::Last,
        (false, false) => LineSegmentType::Middle,
    }
}

/// Build and emit the 3D surfaces of the area slab between two adjacent
/// data points.
///
/// `points` must contain the series' proxies in series order (tension
/// flattening reads the neighbors of the pair for its tangents);
/// `first`/`second` index the governing pair.
pub fn draw_3d_surface(
    pass: &mut PaintPass,
    points: &[DataPoint3D],
    first: usize,
    second: usize,
    req: &SegmentRequest,
) -> SegmentResult {
    let span = SegmentSpan::new(&points[first], &points[second]);
    if span.is_degenerate() {
        return SegmentResult::default();
    }

    // Tension: flatten the spline span and recurse per sub-segment,
    // unioning the sub-results into one combined hit path.
    if req.tension != 0.0 {
        let lo = first.min(second);
        let hi = first.max(second);
        let prev = lo.checked_sub(1).and_then(|i| points.get(i));
        let next = points.get(hi + 1);
        let flat = flatten_segment(prev, &points[lo], &points[hi], next, req.tension);

        let mut result = SegmentResult::default();
        let last = flat.len() - 2;
        for i in 0..=last {
            let sub = SegmentRequest {
                tension: 0.0,
                segment_type: sub_segment_type(req.segment_type, i == 0, i == last),
                ..req.clone()
            };
            result.merge(draw_3d_surface(pass, &flat, i, i + 1, &sub));
        }
        return result;
    }

    // Axis crossing: split at the exact baseline intersection so the
    // area touches zero at the crossing, never overshooting.
    let base = pass.axis.crossing();
    let base_y = pass.axis.crossing_position();
    if let Some(mid) = split_at_value(&span, base, base_y) {
        return split_and_recurse(pass, &span, mid, req);
    }

    // View-range boundaries: segments straddling the top or bottom of
    // the view are split there, then each side is handled uniformly.
    for boundary in [pass.axis.view_maximum(), pass.axis.view_minimum()] {
        if let Some(mid) = split_at_value(&span, boundary, pass.axis.position(boundary)) {
            return split_and_recurse(pass, &span, mid, req);
        }
    }

    // Uniformly outside the view on one side: truncate to the boundary.
    let mut span = span;
    let mut clipped = req.clipped;
    for (boundary, beyond) in [
        (pass.axis.view_maximum(), true),
        (pass.axis.view_minimum(), false),
    ] {
        let (v1, v2) = (span.left.value, span.right.value);
        let outside = if beyond {
            v1 >= boundary && v2 >= boundary && (v1 > boundary || v2 > boundary)
        } else {
            v1 <= boundary && v2 <= boundary && (v1 < boundary || v2 < boundary)
        };
        if outside {
            let y = pass.axis.position(boundary);
            for p in [&mut span.left, &mut span.right] {
                p.value = boundary;
                p.y_position = y;
            }
            clipped = true;
        }
    }

    // A truncated slab flattened onto the baseline has no extent in
    // view: the whole segment is outside, skip it.
    let tol = Tolerance::DEFAULT;
    if clipped
        && tol.is_zero(span.left.y_position - base_y)
        && tol.is_zero(span.right.y_position - base_y)
    {
        return SegmentResult::default();
    }

    emit_faces(pass, &span, base_y, clipped, req)
}

/// Recurse on the two halves of a split segment, preserving cap
/// ownership on the outer ends.
fn split_and_recurse(
    pass: &mut PaintPass,
    span: &SegmentSpan,
    mid: DataPoint3D,
    req: &SegmentRequest,
) -> SegmentResult {
    let seq = [span.left.clone(), mid, span.right.clone()];
    let mut result = SegmentResult::default();
    for (a, b, is_first, is_last) in [(0usize, 1usize, true, false), (1, 2, false, true)] {
        let sub = SegmentRequest {
            segment_type: sub_segment_type(req.segment_type, is_first, is_last),
            ..req.clone()
        };
        result.merge(draw_3d_surface(pass, &seq, a, b, &sub));
    }
    result
}

/// The face loop: visibility, two render layers, six faces in fixed
/// paint order.
fn emit_faces(
    pass: &mut PaintPass,
    span: &SegmentSpan,
    base_y: f64,
    clipped: bool,
    req: &SegmentRequest,
) -> SegmentResult {
    let (x1, y1) = (span.left.x_position, span.left.y_position);
    let (x2, y2) = (span.right.x_position, span.right.y_position);
    let z = span.left.z_position;
    let depth = span.left.depth;
    let style = span.left.style;

    // A slab whose value edge sits below the baseline hangs upside down:
    // its visual top is the flat baseline edge.
    let upside_down = (y1 + y2) / 2.0 > base_y;
    let corners = if upside_down {
        FaceCorners {
            top_left: Point2D::new(x1, base_y),
            top_right: Point2D::new(x2, base_y),
            bottom_left: Point2D::new(x1, y1),
            bottom_right: Point2D::new(x2, y2),
        }
    } else {
        FaceCorners::area_segment(x1, y1, x2, y2, base_y)
    };

    let top = y1.min(y2).min(base_y);
    let bottom = y1.max(y2).max(base_y);
    let bounds = Rect::new(x1, top, x2 - x1, bottom - top);

    let visible = top_surface_visibility(
        bounds,
        z,
        depth,
        upside_down,
        x1,
        y1,
        x2,
        y2,
        pass.matrix,
    );

    let layers: &[u8] = if style.color.is_translucent() {
        &[1, 2]
    } else {
        &[2]
    };

    let mut result = SegmentResult::default();
    for &layer in layers {
        for face in SurfaceNames::PAINT_ORDER {
            let light = face_darkening(face, pass.settings.light_style, pass.matrix);
            let extra = match face {
                SurfaceNames::TOP => req.top_darkening,
                SurfaceNames::BOTTOM => req.bottom_darkening,
                _ => 0.0,
            };
            let face_req = FaceRequest {
                face,
                corners,
                z_position: z,
                depth,
                style: &style,
                darkening: light.max(extra),
                segment_type: req.segment_type,
                reversed: pass.settings.reversed_series_order,
                layer,
                visible: visible.contains(face),
                clipped,
            };
            let Some(polygon) = build_face(pass.matrix, &face_req) else {
                continue;
            };
            if layer == 2 {
                if let Some(regions) = pass.hot_regions.as_deref_mut() {
                    regions.add(
                        polygon.points.clone(),
                        span.right.series_index,
                        span.right.point_index,
                    );
                }
                result.hit_polygons.push(polygon.points.clone());
            }
            pass.surface.fill_polygon(&polygon);
            result.faces_painted += 1;
        }
    }
    result
}

/// Paint a whole series of area slabs in back-to-front order.
///
/// `points` is the series' proxies in series order; the processing order
/// of the point pairs comes from the draw-order comparer.
pub fn draw_area_series(
    pass: &mut PaintPass,
    points: &[DataPoint3D],
    tension: f64,
) -> SegmentResult {
    let mut result = SegmentResult::default();
    if points.len() < 2 {
        return result;
    }

    let order = vplot_order::DrawOrder::new(pass.matrix, pass.settings.reversed_series_order);
    let mut indices: Vec<usize> = (0..points.len()).collect();
    indices.sort_by(|&a, &b| order.compare(&points[a], &points[b]));

    for &i in &indices {
        if i + 1 >= points.len() {
            continue;
        }
        let segment_type = if points.len() == 2 {
            LineSegmentType::Single
        } else if i == 0 {
            LineSegmentType::First
        } else if i + 2 == points.len() {
            LineSegmentType::Last
        } else {
            LineSegmentType::Middle
        };
        let req = SegmentRequest::new(tension, segment_type);
        result.merge(draw_3d_surface(pass, points, i, i + 1, &req));
    }
    result
}
