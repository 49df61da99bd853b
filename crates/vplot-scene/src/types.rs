//! Core scene types: face flags, segment classification, data-point
//! proxies, and the axis-mapping collaborator.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::color::Rgba;

bitflags! {
    /// The six canonical faces of a slab cuboid, as a flag set.
    ///
    /// A "visible surface set" is a bitmask computed fresh per slab; it is
    /// never cached across slabs because the camera angle is global but the
    /// point geometry varies.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct SurfaceNames: u8 {
        /// Top face (minimum Y; Y grows down).
        const TOP = 1 << 0;
        /// Bottom face (maximum Y).
        const BOTTOM = 1 << 1;
        /// Left face (minimum X).
        const LEFT = 1 << 2;
        /// Right face (maximum X).
        const RIGHT = 1 << 3;
        /// Front face (maximum Z, toward the viewer at rest).
        const FRONT = 1 << 4;
        /// Back face (minimum Z).
        const BACK = 1 << 5;
    }
}

impl SurfaceNames {
    /// The fixed paint order for the face loop:
    /// Back, Bottom, Top, Left, Right, Front.
    pub const PAINT_ORDER: [SurfaceNames; 6] = [
        SurfaceNames::BACK,
        SurfaceNames::BOTTOM,
        SurfaceNames::TOP,
        SurfaceNames::LEFT,
        SurfaceNames::RIGHT,
        SurfaceNames::FRONT,
    ];
}

/// Position of a slab within a contiguous run of same-series points.
///
/// Controls whether thin "cap" borders are drawn on the left/right edges
/// (so interior borders are not double-drawn) and whether the side faces
/// are emitted at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineSegmentType {
    /// The only slab in its run: thin borders on both sides.
    Single,
    /// First slab in a run: thin border on the left edge.
    First,
    /// Interior slab: no thin side borders.
    Middle,
    /// Last slab in a run: thin border on the right edge.
    Last,
}

impl LineSegmentType {
    /// Whether this slab owns the left cap of its run.
    pub fn caps_left(self) -> bool {
        matches!(self, LineSegmentType::Single | LineSegmentType::First)
    }

    /// Whether this slab owns the right cap of its run.
    pub fn caps_right(self) -> bool {
        matches!(self, LineSegmentType::Single | LineSegmentType::Last)
    }
}

/// Border dash style, passed through to the drawing surface untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DashStyle {
    /// Solid line.
    #[default]
    Solid,
    /// Dashed line.
    Dash,
    /// Dotted line.
    Dot,
    /// Alternating dash-dot line.
    DashDot,
}

/// Simulated light source controlling per-face darkening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LightStyle {
    /// No lighting: every face keeps its base color.
    None,
    /// Fixed attenuation per face identity, independent of camera angle.
    #[default]
    Simplistic,
    /// Attenuation scaled by the angle between face normal and light
    /// direction (light travels with the camera).
    Realistic,
}

/// Visual styling snapshot for one data point.
///
/// The geometry core reads these values; it never mutates the originating
/// series data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointStyle {
    /// Fill color of the slab.
    pub color: Rgba,
    /// Border color.
    pub border_color: Rgba,
    /// Border width in chart units.
    pub border_width: f64,
    /// Border dash style.
    pub dash_style: DashStyle,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            color: Rgba::new(65, 140, 240),
            border_color: Rgba::BLACK,
            border_width: 1.0,
            dash_style: DashStyle::Solid,
        }
    }
}

/// A 3D data-point proxy: one logical data point plus its computed
/// screen-space placement for the current paint pass.
///
/// Proxies are created fresh per pass from the logical series data and
/// discarded afterwards; several proxies may describe the same logical
/// point (for example the two ends of a segment). They are never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint3D {
    /// Index of the owning series.
    pub series_index: usize,
    /// Index of the logical point within its series.
    pub point_index: usize,
    /// Raw Y data value (used for baseline and view-range decisions).
    pub value: f64,
    /// X position in chart coordinates.
    pub x_position: f64,
    /// Y position in chart coordinates (axis-mapped value).
    pub y_position: f64,
    /// Slab width in chart coordinates.
    pub width: f64,
    /// Slab height in chart coordinates (Y extent below `y_position`).
    pub height: f64,
    /// Z position of the slab's front plane.
    pub z_position: f64,
    /// Slab depth along Z.
    pub depth: f64,
    /// True when the series is indexed (category positions, not values).
    pub indexed_series: bool,
    /// Styling snapshot for this point.
    pub style: PointStyle,
}

impl DataPoint3D {
    /// Left edge of the slab.
    pub fn left(&self) -> f64 {
        self.x_position - self.width / 2.0
    }

    /// Right edge of the slab.
    pub fn right(&self) -> f64 {
        self.x_position + self.width / 2.0
    }

    /// Top of the slab's Y extent.
    pub fn y_top(&self) -> f64 {
        self.y_position
    }

    /// Bottom of the slab's Y extent.
    pub fn y_bottom(&self) -> f64 {
        self.y_position + self.height
    }

    /// True if any placement coordinate is not finite.
    pub fn is_degenerate(&self) -> bool {
        !(self.x_position.is_finite()
            && self.y_position.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.z_position.is_finite()
            && self.depth.is_finite())
    }
}

/// Axis mapping collaborator.
///
/// The core treats these as pure functions of the data value; it knows
/// nothing about logarithmic, date, or categorical semantics.
pub trait AxisMapper {
    /// Map a data value to a linear chart coordinate.
    fn position(&self, value: f64) -> f64;

    /// Smallest data value currently in view.
    fn view_minimum(&self) -> f64;

    /// Largest data value currently in view.
    fn view_maximum(&self) -> f64;

    /// Baseline value at which slabs meet the axis (often zero).
    fn crossing(&self) -> f64;

    /// Chart coordinate of the baseline, clamped into the view range.
    fn crossing_position(&self) -> f64 {
        let c = self
            .crossing()
            .clamp(self.view_minimum(), self.view_maximum());
        self.position(c)
    }
}

/// A plain linear axis: maps `[view_min, view_max]` onto a pixel span.
///
/// Chart Y coordinates grow down, so the view maximum maps to the *top*
/// of the span.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LinearAxis {
    /// Smallest visible data value.
    pub view_min: f64,
    /// Largest visible data value.
    pub view_max: f64,
    /// Chart coordinate the view minimum maps to (bottom of the plot).
    pub low_position: f64,
    /// Chart coordinate the view maximum maps to (top of the plot).
    pub high_position: f64,
    /// Baseline (axis-crossing) value.
    pub crossing: f64,
}

impl LinearAxis {
    /// Create a linear axis over `[view_min, view_max]` spanning the given
    /// chart-coordinate range, with the baseline at `crossing`.
    pub fn new(
        view_min: f64,
        view_max: f64,
        low_position: f64,
        high_position: f64,
        crossing: f64,
    ) -> Self {
        Self {
            view_min,
            view_max,
            low_position,
            high_position,
            crossing,
        }
    }
}

impl AxisMapper for LinearAxis {
    fn position(&self, value: f64) -> f64 {
        let span = self.view_max - self.view_min;
        if span == 0.0 {
            return self.low_position;
        }
        let t = (value - self.view_min) / span;
        self.low_position + t * (self.high_position - self.low_position)
    }

    fn view_minimum(&self) -> f64 {
        self.view_min
    }

    fn view_maximum(&self) -> f64 {
        self.view_max
    }

    fn crossing(&self) -> f64 {
        self.crossing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn surface_flag_popcount_bounds() {
        assert_eq!(SurfaceNames::all().bits().count_ones(), 6);
        assert_eq!(SurfaceNames::empty().bits().count_ones(), 0);
        assert_eq!(SurfaceNames::PAINT_ORDER.len(), 6);
    }

    #[test]
    fn segment_type_caps() {
        assert!(LineSegmentType::Single.caps_left());
        assert!(LineSegmentType::Single.caps_right());
        assert!(LineSegmentType::First.caps_left());
        assert!(!LineSegmentType::First.caps_right());
        assert!(!LineSegmentType::Middle.caps_left());
        assert!(!LineSegmentType::Middle.caps_right());
        assert!(LineSegmentType::Last.caps_right());
    }

    #[test]
    fn linear_axis_maps_endpoints() {
        // Y grows down: view max at the top of a [10, 110] pixel span.
        let axis = LinearAxis::new(0.0, 100.0, 110.0, 10.0, 0.0);
        assert_relative_eq!(axis.position(0.0), 110.0);
        assert_relative_eq!(axis.position(100.0), 10.0);
        assert_relative_eq!(axis.position(50.0), 60.0);
    }

    #[test]
    fn crossing_position_is_clamped() {
        let axis = LinearAxis::new(0.0, 100.0, 110.0, 10.0, -20.0);
        // Crossing below the view range clamps to the view minimum.
        assert_relative_eq!(axis.crossing_position(), 110.0);
    }

    #[test]
    fn degenerate_proxy_detection() {
        let mut p = DataPoint3D {
            series_index: 0,
            point_index: 0,
            value: 1.0,
            x_position: 10.0,
            y_position: 20.0,
            width: 5.0,
            height: 30.0,
            z_position: 0.0,
            depth: 10.0,
            indexed_series: false,
            style: PointStyle::default(),
        };
        assert!(!p.is_degenerate());
        p.y_position = f64::NAN;
        assert!(p.is_degenerate());
    }
}
