//! End-to-end scene rendering through the public facade.

use vplot::{
    ChartScene, HotRegionList, LinearAxis, PointStyle, RecordingSurface, Rect, Rgba,
    Scene3dSettings, SeriesSpec, SurfaceNames,
};

fn plot() -> Rect {
    Rect::new(0.0, 0.0, 100.0, 100.0)
}

fn axis() -> LinearAxis {
    LinearAxis::new(0.0, 100.0, 100.0, 0.0, 0.0)
}

fn rotated_scene() -> ChartScene {
    ChartScene::new(plot(), Scene3dSettings::default(), axis()).unwrap()
}

#[test]
fn rotated_area_segment_shows_three_faces() {
    let scene = rotated_scene();
    let mut surface = RecordingSurface::new();
    let result = scene
        .render_area_series(&SeriesSpec::new(&[10.0, 50.0]), 0.0, &mut surface, None)
        .unwrap();

    assert_eq!(result.faces_painted, 3);
    let painted: Vec<SurfaceNames> = surface.faces().iter().map(|f| f.face).collect();
    assert_eq!(
        painted,
        vec![SurfaceNames::TOP, SurfaceNames::LEFT, SurfaceNames::FRONT]
    );
    for face in surface.faces() {
        assert!(!face.is_degenerate());
        assert_eq!(face.layer, 2);
    }
}

#[test]
fn translucent_area_segment_emits_all_six_faces() {
    // A single translucent slab under a rotated camera exercises both
    // render layers: every one of the six slab faces appears exactly
    // once, averted faces as layer-1 border outlines, visible faces as
    // layer-2 fills.
    let scene = rotated_scene();
    let style = PointStyle {
        color: Rgba::with_alpha(65, 140, 240, 128),
        ..PointStyle::default()
    };
    let spec = SeriesSpec::new(&[10.0, 50.0]).with_style(style);
    let mut surface = RecordingSurface::new();
    let result = scene
        .render_area_series(&spec, 0.0, &mut surface, None)
        .unwrap();

    assert_eq!(result.faces_painted, 6);
    let mut seen = SurfaceNames::empty();
    for face in surface.faces() {
        assert!(!seen.contains(face.face), "{:?} painted twice", face.face);
        seen |= face.face;
        assert!(!face.is_degenerate());
    }
    assert_eq!(seen, SurfaceNames::all());

    // Underdraw first, fills second; underdraw has no fill.
    let first_l2 = surface.faces().iter().position(|f| f.layer == 2).unwrap();
    assert!(surface.faces()[..first_l2].iter().all(|f| f.layer == 1));
    assert!(surface
        .layer(1)
        .all(|f| f.fill == Rgba::TRANSPARENT && f.face != SurfaceNames::FRONT));
}

#[test]
fn orthographic_area_series_is_flat() {
    let scene = ChartScene::new(
        plot(),
        Scene3dSettings::default()
            .with_inclination(0.0)
            .with_rotation(0.0),
        axis(),
    )
    .unwrap();
    let mut surface = RecordingSurface::new();
    let result = scene
        .render_area_series(&SeriesSpec::new(&[10.0, 50.0, 30.0]), 0.0, &mut surface, None)
        .unwrap();

    // Head-on every slab shows only its front face.
    assert_eq!(result.faces_painted, 2);
    assert!(surface
        .faces()
        .iter()
        .all(|f| f.face == SurfaceNames::FRONT));
}

#[test]
fn hot_regions_match_visible_faces() {
    let scene = rotated_scene();
    let mut surface = RecordingSurface::new();
    let mut hot = HotRegionList::new();
    let result = scene
        .render_area_series(
            &SeriesSpec::new(&[10.0, 50.0, 30.0]),
            0.0,
            &mut surface,
            Some(&mut hot),
        )
        .unwrap();

    assert_eq!(hot.len(), result.faces_painted);
    assert_eq!(hot.len(), result.hit_polygons.len());
    // Each hit region names a real point of the series.
    assert!(hot.regions().iter().all(|r| r.series_index == 0));
    assert!(hot.regions().iter().all(|r| r.point_index < 3));
}

#[test]
fn bar_series_paints_back_to_front() {
    let scene = rotated_scene();
    let mut surface = RecordingSurface::new();
    let visible = scene
        .render_bar_series(&SeriesSpec::new(&[30.0, 80.0]), 0.6, &mut surface, None)
        .unwrap();

    // Both bars show the same three faces under this camera.
    for v in &visible {
        assert_eq!(v.bits().count_ones(), 3);
        assert!(v.contains(SurfaceNames::FRONT));
        assert!(v.contains(SurfaceNames::TOP));
    }
    assert_eq!(surface.len(), 6);
    // The front face of the later-painted bar is the last thing drawn.
    assert_eq!(surface.faces().last().unwrap().face, SurfaceNames::FRONT);
}

#[test]
fn two_series_share_the_scene_depth() {
    let scene = rotated_scene();
    let mut surface = RecordingSurface::new();
    let back = SeriesSpec::new(&[20.0, 40.0]).with_slot(1, 2);
    let front = SeriesSpec::new(&[50.0, 70.0]).with_slot(0, 2);
    scene
        .render_area_series(&back, 0.0, &mut surface, None)
        .unwrap();
    scene
        .render_area_series(&front, 0.0, &mut surface, None)
        .unwrap();
    assert!(surface.len() >= 6);
    for face in surface.faces() {
        assert!(!face.is_degenerate());
    }
}

#[test]
fn curved_series_stays_inside_the_plot() {
    let scene = rotated_scene();
    let mut surface = RecordingSurface::new();
    let result = scene
        .render_area_series(
            &SeriesSpec::new(&[20.0, 60.0, 40.0, 80.0]),
            0.5,
            &mut surface,
            None,
        )
        .unwrap();
    assert!(result.faces_painted > 3);
    for face in surface.faces() {
        assert!(!face.is_degenerate());
        for p in &face.points {
            assert!(p.x.is_finite() && p.y.is_finite());
        }
    }
}

#[test]
fn serde_display_list_round_trip() {
    let scene = rotated_scene();
    let mut surface = RecordingSurface::new();
    scene
        .render_area_series(&SeriesSpec::new(&[10.0, 50.0]), 0.0, &mut surface, None)
        .unwrap();
    let json = serde_json::to_string(surface.faces()).unwrap();
    let back: Vec<vplot::FacePolygon> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, surface.faces());
}
