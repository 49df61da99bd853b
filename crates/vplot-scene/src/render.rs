//! Render-surface and hit-region collaborators.
//!
//! The geometry core never rasterizes anything; it emits finished face
//! polygons to a [`RenderSurface`] and non-degenerate hit polygons to a
//! [`HotRegionList`]. [`RecordingSurface`] is the accumulating
//! implementation used by tests and by downstream rasterizers that want
//! the full display list.

use serde::{Deserialize, Serialize};
use vplot_math::Point2D;

use crate::color::Rgba;
use crate::types::{DashStyle, SurfaceNames};

/// One finished, oriented, shaded face polygon ready to paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacePolygon {
    /// Which cuboid face this polygon came from.
    pub face: SurfaceNames,
    /// Render layer: 1 = translucent-composite underdraw (borders of
    /// camera-averted faces), 2 = normal visible-face pass.
    pub layer: u8,
    /// Polygon outline in screen coordinates (3+ points, closed implicitly).
    pub points: Vec<Point2D>,
    /// Fill color after darkening; fully transparent for border-only faces.
    pub fill: Rgba,
    /// Border color after darkening.
    pub border_color: Rgba,
    /// Border width in chart units; 0 suppresses the border entirely.
    pub border_width: f64,
    /// Border dash style.
    pub dash_style: DashStyle,
    /// Border edges to stroke, as point pairs. A subset of the polygon
    /// outline: thin-border suppression removes interior run edges.
    pub border_edges: Vec<(Point2D, Point2D)>,
}

impl FacePolygon {
    /// True when the polygon cannot be painted (fewer than 3 points or a
    /// non-finite coordinate).
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3 || self.points.iter().any(|p| p.is_degenerate())
    }
}

/// Drawing-surface collaborator: receives finished face polygons in paint
/// order.
pub trait RenderSurface {
    /// Paint one face polygon. Implementations must not reorder faces.
    fn fill_polygon(&mut self, face: &FacePolygon);
}

/// A render surface that records every painted face in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    faces: Vec<FacePolygon>,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// All faces painted so far, in paint order.
    pub fn faces(&self) -> &[FacePolygon] {
        &self.faces
    }

    /// Faces painted in the given layer.
    pub fn layer(&self, layer: u8) -> impl Iterator<Item = &FacePolygon> {
        self.faces.iter().filter(move |f| f.layer == layer)
    }

    /// Number of faces painted.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// True when nothing has been painted.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Drop all recorded faces.
    pub fn clear(&mut self) {
        self.faces.clear();
    }
}

impl RenderSurface for RecordingSurface {
    fn fill_polygon(&mut self, face: &FacePolygon) {
        self.faces.push(face.clone());
    }
}

/// One hit-test region: a painted face polygon tagged with its source point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotRegion {
    /// Hit polygon in screen coordinates.
    pub polygon: Vec<Point2D>,
    /// Owning series index.
    pub series_index: usize,
    /// Point index within the series.
    pub point_index: usize,
}

/// Hit-region collaborator: a push-only list of hit polygons.
///
/// The core guarantees every added polygon is non-degenerate; the list
/// enforces it as a second line of defense by dropping anything smaller
/// than a triangle.
#[derive(Debug, Default, Clone)]
pub struct HotRegionList {
    regions: Vec<HotRegion>,
}

impl HotRegionList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a hit region. Polygons with fewer than 3 points or non-finite
    /// coordinates are silently dropped.
    pub fn add(&mut self, polygon: Vec<Point2D>, series_index: usize, point_index: usize) {
        if polygon.len() < 3 || polygon.iter().any(|p| p.is_degenerate()) {
            return;
        }
        self.regions.push(HotRegion {
            polygon,
            series_index,
            point_index,
        });
    }

    /// All regions added so far.
    pub fn regions(&self) -> &[HotRegion] {
        &self.regions
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// True when no regions were added.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
