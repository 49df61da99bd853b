#![warn(missing_docs)]

//! 3D area-surface assembly.
//!
//! For each pair of adjacent data points in a series this crate builds the
//! area *slab* between the value edge and the baseline, as a sequence of
//! well-defined stages: spline-tension flattening, axis-crossing split,
//! view-range clipping, then the two-layer face loop over the six slab
//! faces. All stages are pure functions over [`vplot_scene::DataPoint3D`]
//! proxies; the only side effects are the emitted face polygons and hit
//! regions on the per-pass context.

pub mod assemble;
pub mod clip;
pub mod flatten;

pub use assemble::{draw_3d_surface, draw_area_series, PaintPass, SegmentRequest, SegmentResult};
pub use clip::{axis_crossing_x, split_at_value, SegmentSpan};
pub use flatten::flatten_segment;
