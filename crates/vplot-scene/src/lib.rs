#![warn(missing_docs)]

//! Shared chart-scene types for the vplot 3D geometry engine.
//!
//! This crate holds the plain-data vocabulary the kernel crates exchange:
//! colors, data-point proxies, face flags, segment classification, the
//! validated scene settings, and the collaborator traits (axis mapping,
//! render surface, hot regions) that connect the geometry core to the
//! excluded surrounding subsystems.

pub mod color;
pub mod error;
pub mod render;
pub mod settings;
pub mod types;

pub use color::Rgba;
pub use error::{ChartError, Result};
pub use render::{FacePolygon, HotRegion, HotRegionList, RecordingSurface, RenderSurface};
pub use settings::Scene3dSettings;
pub use types::{
    AxisMapper, DashStyle, DataPoint3D, LightStyle, LineSegmentType, LinearAxis, PointStyle,
    SurfaceNames,
};
