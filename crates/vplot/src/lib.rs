#![warn(missing_docs)]

//! vplot — 3D chart-surface geometry in Rust
//!
//! Projects chart series into a rotated, optionally perspective 3D scene
//! and emits ready-to-paint face polygons plus hit-test regions. The
//! engine never rasterizes anything: plug a renderer in through the
//! [`RenderSurface`] trait, or use [`RecordingSurface`] to collect the
//! full display list.
//!
//! # Example
//!
//! ```rust
//! use vplot::{ChartScene, LinearAxis, Rect, RecordingSurface, Scene3dSettings, SeriesSpec};
//!
//! let scene = ChartScene::new(
//!     Rect::new(0.0, 0.0, 100.0, 100.0),
//!     Scene3dSettings::default(),
//!     LinearAxis::new(0.0, 100.0, 100.0, 0.0, 0.0),
//! )
//! .unwrap();
//!
//! let mut surface = RecordingSurface::new();
//! let spec = SeriesSpec::new(&[10.0, 50.0, 30.0]);
//! scene
//!     .render_area_series(&spec, 0.0, &mut surface, None)
//!     .unwrap();
//! assert!(!surface.is_empty());
//! ```

use vplot_math::Tolerance;

pub use vplot_area::{
    axis_crossing_x, draw_3d_surface, draw_area_series, flatten_segment, split_at_value, PaintPass,
    SegmentRequest, SegmentResult, SegmentSpan,
};
pub use vplot_math::{Matrix3D, Point2D, Point3, Rect, Vec3};
pub use vplot_order::DrawOrder;
pub use vplot_scene::{
    AxisMapper, ChartError, DashStyle, DataPoint3D, FacePolygon, HotRegion, HotRegionList,
    LightStyle, LineSegmentType, LinearAxis, PointStyle, RecordingSurface, RenderSurface, Result,
    Rgba, Scene3dSettings, SurfaceNames,
};
pub use vplot_surface::{
    build_face, face_darkening, fill_cuboid, top_surface_visibility, visible_surfaces,
    CuboidRequest, FaceCorners, FaceRequest,
};

/// One series to render: raw values plus styling and its slot among the
/// chart's series.
#[derive(Debug, Clone)]
pub struct SeriesSpec<'a> {
    /// Raw Y data values, one per category position. Non-finite values
    /// mark empty points and are skipped.
    pub values: &'a [f64],
    /// Styling applied to every point of the series.
    pub style: PointStyle,
    /// This series' index among the chart's series.
    pub series_index: usize,
    /// Total number of series sharing the scene depth.
    pub series_count: usize,
}

impl<'a> SeriesSpec<'a> {
    /// A single default-styled series.
    pub fn new(values: &'a [f64]) -> Self {
        Self {
            values,
            style: PointStyle::default(),
            series_index: 0,
            series_count: 1,
        }
    }

    /// Builder-style point styling.
    pub fn with_style(mut self, style: PointStyle) -> Self {
        self.style = style;
        self
    }

    /// Builder-style series slot.
    pub fn with_slot(mut self, series_index: usize, series_count: usize) -> Self {
        self.series_index = series_index;
        self.series_count = series_count;
        self
    }
}

/// A configured 3D chart scene: plot rectangle, validated settings, the
/// Y axis, and the derived scene transform.
///
/// The scene is immutable once built; every render call is a pure
/// function of the scene and the series passed in.
#[derive(Debug, Clone)]
pub struct ChartScene {
    plot_bounds: Rect,
    settings: Scene3dSettings,
    axis: LinearAxis,
    matrix: Matrix3D,
}

impl ChartScene {
    /// Build a scene, validating the settings first.
    pub fn new(plot_bounds: Rect, settings: Scene3dSettings, axis: LinearAxis) -> Result<Self> {
        settings.validate()?;
        let matrix = Matrix3D::new(
            plot_bounds,
            settings.depth,
            settings.inclination,
            settings.rotation,
            settings.perspective,
        );
        Ok(Self {
            plot_bounds,
            settings,
            axis,
            matrix,
        })
    }

    /// The scene transform.
    pub fn matrix(&self) -> &Matrix3D {
        &self.matrix
    }

    /// The validated scene settings.
    pub fn settings(&self) -> &Scene3dSettings {
        &self.settings
    }

    /// The Y axis mapper.
    pub fn axis(&self) -> &LinearAxis {
        &self.axis
    }

    /// The plot rectangle in chart coordinates.
    pub fn plot_bounds(&self) -> Rect {
        self.plot_bounds
    }

    /// Z placement of one series: each series owns an equal slot of the
    /// scene depth, shrunk by the point-gap fraction. Series 0 sits at
    /// the front unless the series order is reversed.
    fn series_slot(&self, series_index: usize, series_count: usize) -> (f64, f64) {
        let slot = self.settings.depth / series_count as f64;
        let gap = slot * self.settings.point_gap_depth;
        let slot_index = if self.settings.reversed_series_order {
            series_index
        } else {
            series_count - 1 - series_index
        };
        (slot * slot_index as f64 + gap / 2.0, slot - gap)
    }

    fn check_slot(&self, spec: &SeriesSpec) -> Result<()> {
        if spec.series_count == 0 || spec.series_index >= spec.series_count {
            return Err(ChartError::InvalidSettings(format!(
                "series index {} outside series count {}",
                spec.series_index, spec.series_count
            )));
        }
        Ok(())
    }

    /// Per-pass data-point proxies for one series, at category-centered
    /// X positions.
    fn proxies(&self, spec: &SeriesSpec) -> Vec<DataPoint3D> {
        let slot_width = self.plot_bounds.width / spec.values.len() as f64;
        let (z, depth) = self.series_slot(spec.series_index, spec.series_count);
        let base_y = self.axis.crossing_position();
        spec.values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let y = self.axis.position(value);
                DataPoint3D {
                    series_index: spec.series_index,
                    point_index: i,
                    value,
                    x_position: self.plot_bounds.x + (i as f64 + 0.5) * slot_width,
                    y_position: y,
                    width: slot_width,
                    height: (base_y - y).abs(),
                    z_position: z,
                    depth,
                    indexed_series: true,
                    style: spec.style,
                }
            })
            .collect()
    }

    /// Render one area series: the filled surface between the series'
    /// value edge and the axis baseline, as 3D slabs.
    ///
    /// `tension` bends each segment as a cardinal spline (0 = straight).
    /// Emits face polygons to `surface` in back-to-front paint order and,
    /// when given, hit polygons of every visible face to `hot_regions`.
    pub fn render_area_series(
        &self,
        spec: &SeriesSpec,
        tension: f64,
        surface: &mut dyn RenderSurface,
        hot_regions: Option<&mut HotRegionList>,
    ) -> Result<SegmentResult> {
        self.check_slot(spec)?;
        if spec.values.len() < 2 {
            return Err(ChartError::NotEnoughPoints {
                needed: 2,
                got: spec.values.len(),
            });
        }
        let points = self.proxies(spec);
        let mut pass = PaintPass {
            matrix: &self.matrix,
            axis: &self.axis,
            settings: &self.settings,
            surface,
            hot_regions,
        };
        Ok(draw_area_series(&mut pass, &points, tension))
    }

    /// Render one bar/column series: one axis-aligned cuboid per point,
    /// painted back-to-front.
    ///
    /// `width_fraction` is the bar width as a fraction of the category
    /// slot, in `(0, 1]`. Returns the visible-face set of each point in
    /// point order; empty points keep an empty set.
    pub fn render_bar_series(
        &self,
        spec: &SeriesSpec,
        width_fraction: f64,
        surface: &mut dyn RenderSurface,
        mut hot_regions: Option<&mut HotRegionList>,
    ) -> Result<Vec<SurfaceNames>> {
        self.check_slot(spec)?;
        if spec.values.is_empty() {
            return Err(ChartError::NotEnoughPoints { needed: 1, got: 0 });
        }
        if !width_fraction.is_finite() || !(0.0..=1.0).contains(&width_fraction) || width_fraction == 0.0 {
            return Err(ChartError::InvalidSettings(format!(
                "bar width fraction must be in (0, 1], got {width_fraction}"
            )));
        }

        let points = self.proxies(spec);
        let order = DrawOrder::new(&self.matrix, self.settings.reversed_series_order);
        let mut indices: Vec<usize> = (0..points.len()).collect();
        indices.sort_by(|&a, &b| order.compare(&points[a], &points[b]));

        // Bars never overshoot the view: both edges clamp into the span
        // the axis maps onto.
        let base_y = self.axis.crossing_position();
        let span_a = self.axis.position(self.axis.view_minimum());
        let span_b = self.axis.position(self.axis.view_maximum());
        let (span_top, span_bottom) = (span_a.min(span_b), span_a.max(span_b));

        let tol = Tolerance::DEFAULT;
        let mut visible = vec![SurfaceNames::empty(); points.len()];
        for &i in &indices {
            let p = &points[i];
            if p.is_degenerate() {
                continue;
            }
            let top = p.y_position.min(base_y).clamp(span_top, span_bottom);
            let bottom = p.y_position.max(base_y).clamp(span_top, span_bottom);
            if tol.is_zero(bottom - top) {
                continue;
            }
            let width = p.width * width_fraction;
            let req = CuboidRequest {
                bounds: Rect::new(p.x_position - width / 2.0, top, width, bottom - top),
                z_position: p.z_position,
                depth: p.depth,
                style: &p.style,
                light_style: self.settings.light_style,
                series_index: p.series_index,
                point_index: p.point_index,
            };
            visible[i] = fill_cuboid(&self.matrix, &req, surface, hot_regions.as_deref_mut());
        }
        Ok(visible)
    }
}
