#![warn(missing_docs)]

//! Face visibility and polygon construction for vplot slabs.
//!
//! A *slab* is the 3D solid representing one data point (a bar, a column,
//! or one area-chart segment). This crate decides which of a slab's six
//! faces the camera can see, builds the screen-space polygon for each face
//! with the correct darkening and border treatment, and fills whole
//! cuboids (bars/columns) in a fixed paint order.

pub mod builder;
pub mod cuboid;
pub mod lighting;
pub mod visibility;

pub use builder::{build_face, FaceCorners, FaceRequest};
pub use cuboid::{fill_cuboid, CuboidRequest};
pub use lighting::face_darkening;
pub use visibility::{
    cuboid_corners, is_surface_visible, top_surface_visibility, visible_surfaces,
};
