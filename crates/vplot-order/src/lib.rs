#![warn(missing_docs)]

//! Back-to-front draw ordering for vplot data-point proxies.
//!
//! Painting composites correctly only when slabs are emitted farthest
//! first. Which end of the X axis is "far" depends on the camera rotation,
//! so the comparer captures the camera facts once at construction and is
//! read-only afterwards. Under perspective viewing, slabs whose extent
//! straddles the center of projection must be painted after both of their
//! neighbors to cover their seams, which adds the center-crossing
//! adjustments below.

use std::cmp::Ordering;

use vplot_math::{Matrix3D, Point2D};
use vplot_scene::DataPoint3D;

/// Precomputed draw-order comparer for one paint pass.
#[derive(Debug, Clone)]
pub struct DrawOrder {
    /// Paint in ascending X when true (far end is at low X).
    ascending: bool,
    /// Y tie-break direction, from which side wall faces the camera.
    ascending_y: bool,
    /// Center of projection; present only under perspective viewing.
    center: Option<Point2D>,
    /// Hit-testing re-pass: invert to front-to-back priority.
    selection: bool,
}

impl DrawOrder {
    /// Capture camera facts for painting order.
    ///
    /// `reversed` is the chart's reversed-series-order setting; it flips
    /// the primary direction.
    pub fn new(matrix: &Matrix3D, reversed: bool) -> Self {
        Self {
            ascending: matrix.is_bottom_visible() != reversed,
            ascending_y: matrix.is_right_side_visible() != reversed,
            center: matrix.perspective_center(),
            selection: false,
        }
    }

    /// The same comparer configured for hit-testing: front-to-back, so
    /// the topmost clicked element wins.
    pub fn for_selection(matrix: &Matrix3D, reversed: bool) -> Self {
        Self {
            selection: true,
            ..Self::new(matrix, reversed)
        }
    }

    /// Total order over proxies; painting in this order composites
    /// back-to-front.
    pub fn compare(&self, a: &DataPoint3D, b: &DataPoint3D) -> Ordering {
        let mut result = cmp_f64(a.x_position, b.x_position);
        if !self.ascending {
            result = result.reverse();
        }

        if result == Ordering::Equal {
            // Equal X: fall back to Y, drawing from the sides toward the
            // projection center so center-crossing slabs cover seams.
            let mut by_y = cmp_f64(a.y_position, b.y_position);
            if !self.ascending_y {
                by_y = by_y.reverse();
            }
            if let Some(center) = self.center {
                let a_crosses = straddles(a.y_top(), a.y_bottom(), center.y);
                let b_crosses = straddles(b.y_top(), b.y_bottom(), center.y);
                if a_crosses != b_crosses {
                    by_y = if a_crosses {
                        Ordering::Greater
                    } else {
                        Ordering::Less
                    };
                }
            }
            result = by_y;
        } else if let Some(center) = self.center {
            // Different X: slabs straddling the center along X are pushed
            // later, yielding the outward-to-center order.
            let a_crosses = straddles(a.left(), a.right(), center.x);
            let b_crosses = straddles(b.left(), b.right(), center.x);
            if a_crosses != b_crosses {
                result = if a_crosses {
                    Ordering::Greater
                } else {
                    Ordering::Less
                };
            }
        }

        if self.selection {
            result = result.reverse();
        }
        result
    }
}

/// Sort proxies into paint order.
pub fn sort_points(points: &mut [DataPoint3D], order: &DrawOrder) {
    points.sort_by(|a, b| order.compare(a, b));
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn straddles(low: f64, high: f64, value: f64) -> bool {
    let (low, high) = if low <= high { (low, high) } else { (high, low) };
    low < value && value < high
}
