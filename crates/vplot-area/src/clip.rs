//! Axis-crossing and view-range splitting of area segments.
//!
//! A segment whose endpoints straddle the baseline (or a view boundary)
//! is split at the exact intersection so the area visually touches the
//! boundary value, never overshooting it. All math is linear interpolation
//! between the two governing endpoints.

use vplot_scene::DataPoint3D;

/// A segment's endpoint pair, ordered left-to-right by X.
#[derive(Debug, Clone)]
pub struct SegmentSpan {
    /// Left endpoint.
    pub left: DataPoint3D,
    /// Right endpoint.
    pub right: DataPoint3D,
}

impl SegmentSpan {
    /// Order two endpoints by X position.
    pub fn new(a: &DataPoint3D, b: &DataPoint3D) -> Self {
        if a.x_position <= b.x_position {
            Self {
                left: a.clone(),
                right: b.clone(),
            }
        } else {
            Self {
                left: b.clone(),
                right: a.clone(),
            }
        }
    }

    /// True when either endpoint carries non-finite placement.
    pub fn is_degenerate(&self) -> bool {
        self.left.is_degenerate() || self.right.is_degenerate()
    }

    /// True when both endpoints' values sit strictly on opposite sides
    /// of `boundary`.
    pub fn straddles_value(&self, boundary: f64) -> bool {
        (self.left.value - boundary) * (self.right.value - boundary) < 0.0
    }
}

/// X position where the segment's edge meets the horizontal line at
/// `boundary_y`, per the exact linear-interpolation rule:
/// `x = (boundary_y - y1) * (x2 - x1) / (y2 - y1) + x1`.
///
/// Returns `None` for a horizontal edge (no single intersection).
pub fn axis_crossing_x(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    boundary_y: f64,
) -> Option<f64> {
    if y2 == y1 {
        return None;
    }
    Some((boundary_y - y1) * (x2 - x1) / (y2 - y1) + x1)
}

/// Split a span at the point where its value equals `boundary_value`,
/// mapped to chart coordinate `boundary_y`.
///
/// Returns the interpolated midpoint proxy, or `None` when the edge never
/// reaches the boundary (or is value-flat). The midpoint inherits the left
/// endpoint's identity and styling; its `y_position` is exactly
/// `boundary_y`.
pub fn split_at_value(
    span: &SegmentSpan,
    boundary_value: f64,
    boundary_y: f64,
) -> Option<DataPoint3D> {
    if !span.straddles_value(boundary_value) {
        return None;
    }
    let x = axis_crossing_x(
        span.left.x_position,
        span.left.y_position,
        span.right.x_position,
        span.right.y_position,
        boundary_y,
    )?;
    let mut mid = span.left.clone();
    mid.value = boundary_value;
    mid.x_position = x;
    mid.y_position = boundary_y;
    Some(mid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use vplot_scene::PointStyle;

    fn proxy(x: f64, y: f64, value: f64) -> DataPoint3D {
        DataPoint3D {
            series_index: 0,
            point_index: 0,
            value,
            x_position: x,
            y_position: y,
            width: 4.0,
            height: 0.0,
            z_position: 0.0,
            depth: 10.0,
            indexed_series: false,
            style: PointStyle::default(),
        }
    }

    #[test]
    fn crossing_x_is_exact() {
        // Edge from (0, 100) to (10, 0); the line y = 50 is met at x = 5.
        let x = axis_crossing_x(0.0, 100.0, 10.0, 0.0, 50.0).unwrap();
        assert_relative_eq!(x, 5.0, epsilon = 1e-3);
    }

    #[test]
    fn horizontal_edge_has_no_crossing() {
        assert!(axis_crossing_x(0.0, 50.0, 10.0, 50.0, 40.0).is_none());
    }

    #[test]
    fn split_lands_exactly_on_baseline() {
        // Values straddle zero; the baseline maps to y = 60.
        let span = SegmentSpan::new(&proxy(0.0, 20.0, 40.0), &proxy(10.0, 100.0, -40.0));
        let mid = split_at_value(&span, 0.0, 60.0).unwrap();
        assert_relative_eq!(mid.y_position, 60.0, epsilon = 1e-3);
        assert_relative_eq!(mid.value, 0.0);
        assert_relative_eq!(mid.x_position, 5.0, epsilon = 1e-3);
    }

    #[test]
    fn no_split_when_both_sides_agree() {
        let span = SegmentSpan::new(&proxy(0.0, 20.0, 40.0), &proxy(10.0, 40.0, 20.0));
        assert!(split_at_value(&span, 0.0, 60.0).is_none());
    }

    #[test]
    fn span_orders_endpoints_by_x() {
        let span = SegmentSpan::new(&proxy(10.0, 0.0, 1.0), &proxy(0.0, 0.0, 2.0));
        assert_eq!(span.left.x_position, 0.0);
        assert_eq!(span.right.x_position, 10.0);
    }
}
