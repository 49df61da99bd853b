//! Whole-slab fill for bar and column charts.
//!
//! A bar/column slab is an axis-aligned cuboid: visibility is computed
//! once, then every face is offered to the builder in the fixed paint
//! order, with per-face light darkening. Translucent slabs run the
//! two-layer protocol (underdraw borders first, visible fills second).

use vplot_math::{Matrix3D, Rect};
use vplot_scene::{
    HotRegionList, LightStyle, LineSegmentType, PointStyle, RenderSurface, SurfaceNames,
};

use crate::builder::{build_face, FaceCorners, FaceRequest};
use crate::lighting::face_darkening;
use crate::visibility::visible_surfaces;

/// Everything `fill_cuboid` needs to paint one bar/column slab.
#[derive(Debug, Clone)]
pub struct CuboidRequest<'a> {
    /// Slab extent in chart coordinates.
    pub bounds: Rect,
    /// Z position of the slab's far plane.
    pub z_position: f64,
    /// Slab depth along Z.
    pub depth: f64,
    /// Point styling.
    pub style: &'a PointStyle,
    /// Simulated light source.
    pub light_style: LightStyle,
    /// Owning series index (hit regions).
    pub series_index: usize,
    /// Point index within the series (hit regions).
    pub point_index: usize,
}

/// Paint one cuboid slab, emitting faces back-to-front.
///
/// Returns the visible-face set that was computed for the slab. When
/// `hot_regions` is given, every visible painted face also contributes a
/// hit polygon.
pub fn fill_cuboid(
    matrix: &Matrix3D,
    req: &CuboidRequest,
    surface: &mut dyn RenderSurface,
    mut hot_regions: Option<&mut HotRegionList>,
) -> SurfaceNames {
    let visible = visible_surfaces(req.bounds, req.z_position, req.depth, matrix);
    let corners = FaceCorners::from_rect(req.bounds);

    let layers: &[u8] = if req.style.color.is_translucent() {
        &[1, 2]
    } else {
        &[2]
    };

    for &layer in layers {
        for face in SurfaceNames::PAINT_ORDER {
            let face_req = FaceRequest {
                face,
                corners,
                z_position: req.z_position,
                depth: req.depth,
                style: req.style,
                darkening: face_darkening(face, req.light_style, matrix),
                segment_type: LineSegmentType::Single,
                reversed: false,
                layer,
                visible: visible.contains(face),
                clipped: false,
            };
            let Some(polygon) = build_face(matrix, &face_req) else {
                continue;
            };
            if layer == 2 {
                if let Some(regions) = hot_regions.as_deref_mut() {
                    regions.add(polygon.points.clone(), req.series_index, req.point_index);
                }
            }
            surface.fill_polygon(&polygon);
        }
    }

    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use vplot_scene::{RecordingSurface, Rgba};

    fn plot() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 100.0)
    }

    fn request(style: &PointStyle) -> CuboidRequest<'_> {
        CuboidRequest {
            bounds: Rect::new(40.0, 30.0, 20.0, 50.0),
            z_position: 0.0,
            depth: 10.0,
            style,
            light_style: LightStyle::Simplistic,
            series_index: 1,
            point_index: 2,
        }
    }

    #[test]
    fn orthographic_bar_paints_one_face() {
        let m = Matrix3D::orthographic(plot(), 10.0);
        let style = PointStyle::default();
        let mut surface = RecordingSurface::new();
        let visible = fill_cuboid(&m, &request(&style), &mut surface, None);
        assert_eq!(visible, SurfaceNames::FRONT);
        assert_eq!(surface.len(), 1);
        assert_eq!(surface.faces()[0].face, SurfaceNames::FRONT);
    }

    #[test]
    fn rotated_bar_paints_three_faces_in_order() {
        let m = Matrix3D::new(plot(), 10.0, 30.0, 30.0, 0.0);
        let style = PointStyle::default();
        let mut surface = RecordingSurface::new();
        let visible = fill_cuboid(&m, &request(&style), &mut surface, None);
        assert_eq!(visible.bits().count_ones(), 3);
        assert_eq!(surface.len(), 3);
        // Paint order keeps the front face last.
        assert_eq!(surface.faces().last().unwrap().face, SurfaceNames::FRONT);
    }

    #[test]
    fn translucent_bar_runs_both_layers() {
        let m = Matrix3D::new(plot(), 10.0, 30.0, 30.0, 0.0);
        let style = PointStyle {
            color: Rgba::with_alpha(65, 140, 240, 100),
            ..PointStyle::default()
        };
        let mut surface = RecordingSurface::new();
        fill_cuboid(&m, &request(&style), &mut surface, None);
        // 3 camera-averted faces in layer 1, 3 visible in layer 2.
        assert_eq!(surface.layer(1).count(), 3);
        assert_eq!(surface.layer(2).count(), 3);
        assert!(surface.layer(1).all(|f| f.fill == Rgba::TRANSPARENT));
        // Every layer-1 face precedes every layer-2 face.
        let first_l2 = surface.faces().iter().position(|f| f.layer == 2).unwrap();
        assert!(surface.faces()[..first_l2].iter().all(|f| f.layer == 1));
    }

    #[test]
    fn hit_regions_cover_visible_faces_only() {
        let m = Matrix3D::new(plot(), 10.0, 30.0, 30.0, 0.0);
        let style = PointStyle {
            color: Rgba::with_alpha(65, 140, 240, 100),
            ..PointStyle::default()
        };
        let mut surface = RecordingSurface::new();
        let mut hot = HotRegionList::new();
        fill_cuboid(&m, &request(&style), &mut surface, Some(&mut hot));
        assert_eq!(hot.len(), 3);
        assert!(hot.regions().iter().all(|r| r.series_index == 1));
        assert!(hot.regions().iter().all(|r| r.point_index == 2));
    }

    #[test]
    fn light_style_darkens_top_face() {
        let m = Matrix3D::new(plot(), 10.0, 30.0, 30.0, 0.0);
        let style = PointStyle::default();
        let mut surface = RecordingSurface::new();
        fill_cuboid(&m, &request(&style), &mut surface, None);
        let top = surface
            .faces()
            .iter()
            .find(|f| f.face == SurfaceNames::TOP)
            .unwrap();
        let front = surface
            .faces()
            .iter()
            .find(|f| f.face == SurfaceNames::FRONT)
            .unwrap();
        assert!(top.fill.luminance() < front.fill.luminance());
    }
}
