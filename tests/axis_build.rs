//! End-to-end builds of a single axis through the public API.
//!
//! Run with logs: RUST_LOG=axial=trace cargo test --features tracing -- --nocapture

use std::sync::Arc;

use axial::axis::{RecordingTarget, TitleLock, defaults::MAX_TICKS};
use axial::{
    AxisActor, AxisPosition, AxisSpec, AxisStatus, AxisType, Bounds, Drawable, MatrixViewport,
    RenderPass, TextBox, TextMeasure, TextStyle, TickLocation,
};
use glam::{DVec3, dvec2, dvec3};

/// Tolerance for projected (display space) comparisons
const EPS: f64 = 1e-9;

// =============================================================================
// Helpers
// =============================================================================

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Every non-empty string measures `w × h`, whatever the style.
#[derive(Debug, Clone, Copy)]
struct FixedBox {
    w: f64,
    h: f64,
}

impl TextMeasure for FixedBox {
    fn measure(&self, text: &str, _style: &TextStyle) -> TextBox {
        if text.is_empty() {
            TextBox::EMPTY
        } else {
            TextBox::new(0.0, self.w, 0.0, self.h)
        }
    }
}

fn bounds_0_10() -> Bounds {
    Bounds::new(0.0, 10.0, 0.0, 10.0, 0.0, 10.0)
}

/// X axis from the origin to (10, 0, 0), major every 2, minor every 2.
fn x_axis() -> AxisActor {
    let spec = AxisSpec::default()
        .with_points(DVec3::ZERO, dvec3(10.0, 0.0, 0.0))
        .with_range(0.0, 10.0)
        .with_bounds(bounds_0_10())
        .with_type(AxisType::X, AxisPosition::MinMin)
        .with_major(0.0, 2.0)
        .with_minor(0.0, 2.0);
    AxisActor::with_spec(spec).expect("valid spec")
}

/// Orthographic front view of the 0..10 cube in a 400×400 window.
fn front() -> MatrixViewport {
    MatrixViewport::front(&bounds_0_10(), 400.0, 400.0)
}

fn dump(points: &[DVec3]) -> String {
    points
        .chunks(4)
        .map(|tick| {
            tick.iter()
                .map(|p| format!("({} {} {})", p.x, p.y, p.z))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// Zero length
// =============================================================================

#[test]
fn zero_length_axis_renders_nothing() {
    init_tracing();
    let p = dvec3(3.0, 3.0, 3.0);
    let spec = AxisSpec::default().with_points(p, p).with_bounds(bounds_0_10());
    let mut axis = AxisActor::with_spec(spec).expect("valid spec");
    axis.set_labels(&["a", "b"]);
    axis.set_title("Nothing");
    let mut target = RecordingTarget::default();

    assert_eq!(axis.build_and_render(&front(), &mut target, true), 0);
    assert_eq!(axis.render_translucent(&front(), &mut target), 0);
    assert_eq!(axis.render_overlay(&mut target), 0);
    assert_eq!(axis.status(), AxisStatus::ZeroLength);
    assert!(axis.tick_points().major.is_empty());
    assert!(axis.tick_points().minor.is_empty());
    assert!(axis.geometry().lines.points.is_empty());
    assert!(target.draws.is_empty());
}

#[test]
fn collapsing_a_built_axis_clears_it_and_recovers() {
    let mut axis = x_axis();
    let vp = front();
    axis.build(&vp, false);
    assert_eq!(axis.tick_points().major_count(), 6);

    axis.set_point2(DVec3::ZERO).unwrap();
    axis.build(&vp, false);
    assert_eq!(axis.status(), AxisStatus::ZeroLength);
    assert!(axis.tick_points().major.is_empty());
    assert!(axis.geometry().lines.segments.is_empty());
    assert!(!axis.build_state().has_built());

    axis.set_point2(dvec3(10.0, 0.0, 0.0)).unwrap();
    axis.build(&vp, false);
    assert_eq!(axis.status(), AxisStatus::Built);
    assert_eq!(axis.tick_points().major_count(), 6);
}

// =============================================================================
// Cache short-circuit and force
// =============================================================================

#[test]
fn unchanged_inputs_reuse_every_buffer() {
    init_tracing();
    let mut axis = x_axis();
    axis.set_labels(&["0", "2", "4", "6", "8", "10"]);
    axis.set_title("Distance");
    let vp = front();
    let mut target = RecordingTarget::default();

    let first = axis.build_and_render(&vp, &mut target, false);
    let ticks = axis.tick_points().clone();
    let lines = axis.geometry().lines.points.clone();
    let label = axis.labels().get(3).map(|l| l.billboard.position);
    let counters = axis.counters();

    let second = axis.build_and_render(&vp, &mut target, false);
    assert_eq!(first, second);
    assert_eq!(axis.tick_points(), &ticks);
    assert!(Arc::ptr_eq(&lines, &axis.geometry().lines.points));
    assert_eq!(axis.labels().get(3).map(|l| l.billboard.position), label);

    let after = axis.counters();
    assert_eq!(after.builds, counters.builds);
    assert_eq!(after.tick_generations, counters.tick_generations);
    assert_eq!(after.label_layouts, counters.label_layouts);
    assert_eq!(after.short_circuits, counters.short_circuits + 1);
}

#[test]
fn force_always_regenerates() {
    let mut axis = x_axis();
    let vp = front();
    for n in 1..=3 {
        axis.build(&vp, true);
        let c = axis.counters();
        assert_eq!(c.builds, n);
        assert_eq!(c.tick_generations, n);
        assert_eq!(c.line_assemblies, n);
    }
}

#[test]
fn camera_motion_rebuilds_labels_but_not_ticks() {
    let mut axis = x_axis();
    axis.set_labels(&["0", "2", "4", "6", "8", "10"]);
    let mut vp = front();
    axis.build(&vp, false);

    vp.set_size(800.0, 600.0);
    axis.build(&vp, false);
    let c = axis.counters();
    assert_eq!(c.builds, 2);
    assert_eq!(c.tick_generations, 1);
    // 3D labels depend on bounds, position and range, not the camera
    assert_eq!(c.label_layouts, 1);
}

#[test]
fn endpoint_moves_need_force() {
    let mut axis = x_axis();
    let vp = front();
    axis.build(&vp, false);

    axis.set_point2(dvec3(4.0, 0.0, 0.0)).unwrap();
    axis.build(&vp, false);
    assert_eq!(axis.tick_points().major_count(), 6);

    axis.build(&vp, true);
    assert_eq!(axis.tick_points().major_count(), 3);
}

#[test]
fn tick_location_change_regenerates() {
    let mut axis = x_axis();
    let vp = front();
    axis.build(&vp, false);
    axis.set_tick_location(TickLocation::Outside);
    axis.build(&vp, false);
    assert_eq!(axis.counters().tick_generations, 2);
    assert_eq!(axis.tick_points().major[1], dvec3(0.0, -1.0, 0.0));
}

// =============================================================================
// Tick buffers
// =============================================================================

#[test]
fn tick_buffers_hold_whole_ticks() {
    for axis_type in AxisType::ALL {
        for position in AxisPosition::ALL {
            for location in TickLocation::ALL {
                let mut axis = x_axis();
                axis.set_axis_type_and_position(axis_type, position);
                axis.set_tick_location(location);
                axis.set_minor_spacing(0.0, 0.3).unwrap();
                axis.build(&front(), true);
                let t = axis.tick_points();
                assert_eq!(t.minor.len() % 4, 0);
                assert_eq!(t.major.len() % 4, 0);
                assert_eq!(t.gridlines.len() % 4, 0);
                assert_eq!(t.gridpolys.len() % 4, 0);
            }
        }
    }
}

#[test]
fn zero_delta_is_capped() {
    let mut axis = x_axis();
    axis.set_major_spacing(0.0, 0.0).unwrap();
    axis.set_minor_spacing(0.0, 0.0).unwrap();
    axis.build(&front(), true);
    assert_eq!(axis.tick_points().major_count(), MAX_TICKS);
    assert_eq!(axis.tick_points().minor_count(), MAX_TICKS);
}

#[test]
fn major_sweep_is_inclusive() {
    let mut axis = x_axis();
    axis.build(&front(), false);
    let major = &axis.tick_points().major;
    assert_eq!(major.len(), 24);
    let swept: Vec<f64> = major.chunks(4).map(|t| t[0].x).collect();
    assert_eq!(swept, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
}

#[test]
fn minor_sweep_is_exclusive() {
    let mut axis = x_axis();
    axis.build(&front(), false);
    let minor = &axis.tick_points().minor;
    assert_eq!(minor.len(), 20);
    let swept: Vec<f64> = minor.chunks(4).map(|t| t[0].x).collect();
    assert_eq!(swept, vec![0.0, 2.0, 4.0, 6.0, 8.0]);
}

#[test]
fn outside_x_ticks_snapshot() {
    let spec = AxisSpec::default()
        .with_points(DVec3::ZERO, dvec3(4.0, 0.0, 0.0))
        .with_tick_location(TickLocation::Outside)
        .with_major(0.0, 2.0);
    let mut axis = AxisActor::with_spec(spec).unwrap();
    axis.build(&front(), true);
    insta::assert_snapshot!(dump(&axis.tick_points().major), @r"
    (0 0 0) (0 -1 0) (0 0 0) (0 0 -1)
    (2 0 0) (2 -1 0) (2 0 0) (2 0 -1)
    (4 0 0) (4 -1 0) (4 0 0) (4 0 -1)
    ");
}

#[test]
fn outside_y_ticks_snapshot() {
    let spec = AxisSpec::default()
        .with_points(DVec3::ZERO, dvec3(0.0, 4.0, 0.0))
        .with_type(AxisType::Y, AxisPosition::MinMin)
        .with_tick_location(TickLocation::Outside)
        .with_major(0.0, 2.0);
    let mut axis = AxisActor::with_spec(spec).unwrap();
    axis.build(&front(), true);
    insta::assert_snapshot!(dump(&axis.tick_points().major), @r"
    (0 0 0) (-1 0 0) (0 0 0) (0 0 -1)
    (0 2 0) (-1 2 0) (0 2 0) (0 2 -1)
    (0 4 0) (-1 4 0) (0 4 0) (0 4 -1)
    ");
}

/// Build one axis of `axis_type` along its own coordinate from 0 to 10.
fn swept_axis(axis_type: AxisType, position: AxisPosition, location: TickLocation) -> AxisActor {
    let mut end = DVec3::ZERO;
    end[axis_type.index()] = 10.0;
    let spec = AxisSpec::default()
        .with_points(DVec3::ZERO, end)
        .with_bounds(bounds_0_10())
        .with_type(axis_type, position)
        .with_tick_location(location)
        .with_tick_sizes(1.5, 0.5)
        .with_major(0.0, 2.5)
        .with_minor(0.0, 1.0)
        .with_gridline_lengths([3.0, 3.0, 3.0]);
    let mut axis = AxisActor::with_spec(spec).unwrap();
    axis.build(&front(), true);
    axis
}

#[test]
fn y_and_z_are_permuted_x() {
    // X lays out (sweep, first perpendicular, second perpendicular) as
    // (x, y, z); Y as (y, x, z); Z as (z, x, y).
    let as_y = |p: DVec3| dvec3(p.y, p.x, p.z);
    let as_z = |p: DVec3| dvec3(p.y, p.z, p.x);

    for position in AxisPosition::ALL {
        for location in TickLocation::ALL {
            let x = swept_axis(AxisType::X, position, location);
            let y = swept_axis(AxisType::Y, position, location);
            let z = swept_axis(AxisType::Z, position, location);
            let (xt, yt, zt) = (x.tick_points(), y.tick_points(), z.tick_points());

            for (xs, ys, zs) in [
                (&xt.minor, &yt.minor, &zt.minor),
                (&xt.major, &yt.major, &zt.major),
                (&xt.gridlines, &yt.gridlines, &zt.gridlines),
                (&xt.inner_gridlines, &yt.inner_gridlines, &zt.inner_gridlines),
                (&xt.gridpolys, &yt.gridpolys, &zt.gridpolys),
            ] {
                let expect_y: Vec<DVec3> = xs.iter().copied().map(as_y).collect();
                let expect_z: Vec<DVec3> = xs.iter().copied().map(as_z).collect();
                assert_eq!(ys, &expect_y, "{position:?} {location:?}");
                assert_eq!(zs, &expect_z, "{position:?} {location:?}");
            }
        }
    }
}

// =============================================================================
// Labels
// =============================================================================

#[test]
fn labels_anchor_on_the_second_point_of_each_tick() {
    let mut axis = x_axis();
    axis.set_tick_location(TickLocation::Both);
    axis.set_calculate_label_offset(false);
    axis.set_labels(&["0", "2", "4", "6", "8", "10"]);
    axis.build(&front(), false);

    let major = &axis.tick_points().major;
    for (i, label) in axis.labels().iter().enumerate() {
        assert_eq!(label.billboard.position, major[4 * i + 1], "label {i}");
        assert!(label.billboard.auto_center);
    }
}

#[test]
fn surplus_ticks_get_no_label() {
    let mut axis = x_axis();
    axis.set_labels(&["0", "2"]);
    axis.build(&front(), false);
    assert_eq!(axis.labels_built(), 2);

    let mut target = RecordingTarget::default();
    axis.render_opaque(&front(), &mut target);
    let billboards = target
        .in_pass(RenderPass::Opaque)
        .filter(|d| matches!(d, Drawable::Billboard(_)))
        .count();
    assert_eq!(billboards, 2);
}

#[test]
fn relabelling_with_the_same_count_relays_in_place() {
    let mut axis = x_axis().with_text_measure(FixedBox { w: 1.0, h: 1.0 });
    axis.set_labels(&["a", "b", "c"]);
    axis.build(&front(), false);
    axis.set_labels(&["x", "y", "z"]);
    axis.build(&front(), false);
    assert_eq!(axis.counters().label_layouts, 2);
    assert_eq!(axis.labels().texts().collect::<Vec<_>>(), vec!["x", "y", "z"]);
}

#[test]
fn labels_set_while_hidden_are_laid_out_once_shown() {
    init_tracing();
    let mut axis = x_axis();
    axis.update_visibility(|v| v.labels = false);
    axis.set_labels(&["0", "2", "4", "6", "8", "10"]);
    axis.build(&front(), false);
    assert_eq!(axis.labels_built(), 0);

    axis.update_visibility(|v| v.labels = true);
    let mut target = RecordingTarget::default();
    axis.render_opaque(&front(), &mut target);
    assert_eq!(axis.labels_built(), 6);
    let billboards = target
        .in_pass(RenderPass::Opaque)
        .filter(|d| matches!(d, Drawable::Billboard(_)))
        .count();
    assert_eq!(billboards, 6);
}

// =============================================================================
// Title
// =============================================================================

#[test]
fn title_clears_labels_by_twice_their_height() {
    let measure = FixedBox { w: 2.0, h: 0.5 };
    let mut axis = x_axis().with_text_measure(measure);
    axis.set_labels(&["0", "2", "4", "6", "8", "10"]);
    axis.set_title("Distance");
    axis.set_title_scale(2.0).unwrap();
    axis.build(&front(), false);

    // X axis at min-min pushes text toward -y
    let half_title_height = 0.5 * 0.5 * 2.0;
    let max_label_height = 0.5;
    let p = axis.title().billboard.position;
    assert_eq!(p.x, 5.0);
    assert_eq!(p.y, -(half_title_height + 2.0 * max_label_height));
    assert_eq!(p.z, 0.0);
}

#[test]
fn empty_title_is_never_laid_out() {
    let mut axis = x_axis();
    axis.build(&front(), true);
    assert_eq!(axis.counters().title_layouts, 0);

    axis.set_title("Distance");
    axis.build(&front(), false);
    assert_eq!(axis.counters().title_layouts, 1);
    assert!(axis.compute_title_length() > 0.0);
}

#[test]
fn title_set_while_hidden_is_laid_out_once_shown() {
    let mut shown = x_axis();
    shown.set_title("Time");
    shown.build(&front(), false);

    let mut axis = x_axis();
    axis.update_visibility(|v| v.title = false);
    axis.set_title("Time");
    axis.build(&front(), false);
    assert_eq!(axis.counters().title_layouts, 0);

    axis.update_visibility(|v| v.title = true);
    axis.build(&front(), false);
    assert_eq!(axis.counters().title_layouts, 1);
    assert_eq!(axis.title().billboard.position, shown.title().billboard.position);
    assert_eq!(axis.title().billboard.position.x, 5.0);
}

#[test]
fn title_text_change_relays_title_only() {
    let mut axis = x_axis();
    axis.set_labels(&["0", "2"]);
    axis.set_title("Distance");
    axis.build(&front(), false);
    axis.set_title("Depth");
    axis.build(&front(), false);
    let c = axis.counters();
    assert_eq!(c.title_layouts, 2);
    assert_eq!(c.label_layouts, 1);
    assert_eq!(c.tick_generations, 1);
}

// =============================================================================
// 2D mode
// =============================================================================

fn x_axis_2d() -> AxisActor {
    let mut axis = x_axis().with_text_measure(FixedBox { w: 20.0, h: 10.0 });
    axis.set_use_2d_mode(true);
    axis.set_labels(&["0", "2", "4", "6", "8", "10"]);
    axis.set_title("Distance");
    axis
}

#[test]
fn two_d_labels_sit_below_their_ticks() {
    let mut axis = x_axis_2d();
    let vp = front();
    axis.build(&vp, false);
    assert_eq!(axis.counters().label_layouts_2d, 1);

    // tick at x = 4 -> display x = 160; pushed 0.5 world units below y = 0
    // -> display y = -20; then half the width left and the full height down
    let label = axis.labels().get(2).unwrap();
    assert!((label.overlay.position - dvec2(150.0, -30.0)).length() < EPS);
}

#[test]
fn two_d_lines_keep_one_face() {
    let mut axis = x_axis_2d();
    axis.update_visibility(|v| v.minor_ticks = false);
    axis.build(&front(), false);
    // 6 majors × 2 points, plus the axis line
    assert_eq!(axis.geometry().lines.points.len(), 12 + 2);
}

#[test]
fn two_d_labels_follow_projected_bounds_not_stamps() {
    let mut axis = x_axis_2d();
    let mut vp = front();
    axis.build(&vp, false);

    // a title change rebuilds, but the projection is unchanged
    axis.set_title("Depth");
    axis.build(&vp, false);
    assert_eq!(axis.counters().label_layouts_2d, 1);
    assert_eq!(axis.counters().title_layouts_2d, 2);

    vp.set_size(800.0, 800.0);
    axis.build(&vp, false);
    assert_eq!(axis.counters().label_layouts_2d, 2);
}

#[test]
fn hidden_2d_labels_are_laid_out_once_shown() {
    let mut axis = x_axis_2d();
    axis.update_visibility(|v| v.labels = false);
    let vp = front();
    axis.build(&vp, false);
    assert_eq!(axis.counters().label_layouts_2d, 0);

    axis.update_visibility(|v| v.labels = true);
    axis.build(&vp, false);
    assert_eq!(axis.counters().label_layouts_2d, 1);
}

#[test]
fn two_d_title_is_nudged_below_the_axis() {
    let mut axis = x_axis_2d();
    axis.set_calculate_title_offset(false);
    axis.build(&front(), false);
    // midpoint (5, 0, 0) -> (200, 0); 12 px down, then clamped to 10
    assert!((axis.title().overlay.position - dvec2(200.0, 10.0)).length() < EPS);
    assert_eq!(axis.title().overlay.orientation, 0.0);
}

#[test]
fn long_y_titles_turn_vertical() {
    let mut axis = AxisActor::with_spec(
        AxisSpec::default()
            .with_points(DVec3::ZERO, dvec3(0.0, 10.0, 0.0))
            .with_bounds(bounds_0_10())
            .with_type(AxisType::Y, AxisPosition::MinMin)
            .with_2d_mode(true),
    )
    .unwrap();
    axis.set_title("Height");
    axis.build(&front(), false);
    assert_eq!(axis.title().overlay.orientation, 90.0);

    axis.set_title("H");
    axis.build(&front(), false);
    assert_eq!(axis.title().overlay.orientation, 0.0);
}

#[test]
fn locked_title_ignores_camera_until_unlocked() {
    let mut axis = x_axis_2d();
    axis.set_calculate_title_offset(false);
    let mut vp = front();
    axis.lock_title_position();
    axis.build(&vp, false);
    let pinned = axis.title().overlay.position;
    assert_eq!(axis.title().lock, TitleLock::Locked(pinned));

    vp.set_size(800.0, 800.0);
    axis.build(&vp, false);
    assert_eq!(axis.title().overlay.position, pinned);

    axis.unlock_title_position();
    axis.build(&vp, false);
    assert!((axis.title().overlay.position - dvec2(400.0, 10.0)).length() < EPS);
}

// =============================================================================
// Render passes
// =============================================================================

#[test]
fn passes_split_geometry() {
    let mut axis = x_axis_2d();
    axis.update_visibility(|v| {
        v.gridlines = true;
        v.gridpolys = true;
    });
    let vp = front();
    let mut target = RecordingTarget::default();

    let opaque = axis.render_opaque(&vp, &mut target);
    let translucent = axis.render_translucent(&vp, &mut target);
    let overlay = axis.render_overlay(&mut target);

    // minor (5) and major (6) ticks at one face each, plus axis; 12 gridlines
    assert_eq!(opaque, (5 * 2 + 6) + 1 + 12);
    // five bands, two faces
    assert_eq!(translucent, 10);
    // six labels and the title
    assert_eq!(overlay, 7);
    assert!(axis.has_translucent_geometry());
}

#[test]
fn release_hands_back_every_drawable() {
    let mut axis = x_axis();
    axis.set_labels(&["0", "2", "4"]);
    axis.build(&front(), false);
    let mut target = RecordingTarget::default();
    axis.release_graphics_resources(&mut target);
    assert_eq!(target.released.len(), 6 + 2 * 3);
}

// =============================================================================
// Setters
// =============================================================================

#[test]
fn invalid_input_is_rejected() {
    let mut axis = x_axis();
    assert!(axis.set_bounds([0.0, f64::NAN, 0.0, 1.0, 0.0, 1.0]).is_err());
    assert!(axis.set_tick_sizes(-1.0, 0.5).is_err());
    assert!(axis.set_gridline_lengths([1.0, f64::INFINITY, 1.0]).is_err());
    assert!(axis.set_title_scale(-2.0).is_err());
    assert_eq!(axis.spec().bounds, bounds_0_10());
    assert_eq!(axis.spec().major_tick_size, 1.0);
}

#[test]
fn length_queries() {
    let mut axis = x_axis().with_text_measure(FixedBox { w: 3.0, h: 4.0 });
    assert_eq!(axis.compute_max_label_length(), 0.0);
    axis.set_labels(&["1", "22"]);
    axis.set_title("T");
    assert_eq!(axis.compute_max_label_length(), 5.0);
    assert_eq!(axis.compute_title_length(), 5.0);
}
