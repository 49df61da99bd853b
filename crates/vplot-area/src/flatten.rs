//! Spline-tension flattening.
//!
//! A segment with non-zero tension is a cardinal-spline span; the pipeline
//! flattens it into short straight sub-segments and recurses on each with
//! tension zero. X stays linear (category positions never bend); the curve
//! lives entirely in the Y/value dimension, which also keeps the flattened
//! polyline monotone in X.

use vplot_scene::DataPoint3D;

/// Number of straight sub-segments per spline span.
const FLATTEN_STEPS: usize = 10;

/// Flatten the cardinal-spline span between `p1` and `p2` into
/// `FLATTEN_STEPS + 1` interpolated proxies (endpoints included).
///
/// `prev` and `next` are the neighboring series points used for the
/// tangents; a missing neighbor falls back to the one-sided chord.
/// `tension` scales the tangents: 0 reproduces the straight segment.
pub fn flatten_segment(
    prev: Option<&DataPoint3D>,
    p1: &DataPoint3D,
    p2: &DataPoint3D,
    next: Option<&DataPoint3D>,
    tension: f64,
) -> Vec<DataPoint3D> {
    // Cardinal tangents over (y_position, value), scaled by tension/2 of
    // the neighbor chord.
    let scale = tension / 2.0;
    let (m1_y, m1_v) = match prev {
        Some(p0) => (
            scale * (p2.y_position - p0.y_position),
            scale * (p2.value - p0.value),
        ),
        None => (
            scale * (p2.y_position - p1.y_position),
            scale * (p2.value - p1.value),
        ),
    };
    let (m2_y, m2_v) = match next {
        Some(p3) => (
            scale * (p3.y_position - p1.y_position),
            scale * (p3.value - p1.value),
        ),
        None => (
            scale * (p2.y_position - p1.y_position),
            scale * (p2.value - p1.value),
        ),
    };

    let mut out = Vec::with_capacity(FLATTEN_STEPS + 1);
    for step in 0..=FLATTEN_STEPS {
        let t = step as f64 / FLATTEN_STEPS as f64;
        let t2 = t * t;
        let t3 = t2 * t;
        // Hermite basis.
        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;

        let mut p = if t < 0.5 { p1.clone() } else { p2.clone() };
        p.x_position = p1.x_position + t * (p2.x_position - p1.x_position);
        p.y_position =
            h00 * p1.y_position + h10 * m1_y + h01 * p2.y_position + h11 * m2_y;
        p.value = h00 * p1.value + h10 * m1_v + h01 * p2.value + h11 * m2_v;
        out.push(p);
    }
    out
}
