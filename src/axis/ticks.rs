//! Tick-mark and gridline point generation.
//!
//! One routine serves all three axis types: the [`AxisFrame`] supplies the
//! swept coordinate and the two perpendiculars. Every tick contributes four
//! points, `[inner_a, outer_a, inner_b, outer_b]`, so the pair at `4i..4i+2`
//! is the tick segment along the first perpendicular and `4i+2..4i+4` the one
//! along the second. The label for major tick `i` anchors at `4i + 1`.

use glam::{DVec2, DVec3, dvec2};

use super::defaults::MAX_TICKS;
use super::frame::AxisFrame;
use super::spec::{AxisSpec, TickLocation, TickSpacing};
use crate::log::{trace, warn};

/// Point buffers for one axis, regenerated as a whole.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickPoints {
    pub minor: Vec<DVec3>,
    pub major: Vec<DVec3>,
    pub gridlines: Vec<DVec3>,
    pub inner_gridlines: Vec<DVec3>,
    pub gridpolys: Vec<DVec3>,
}

impl TickPoints {
    /// Number of major ticks (four points each).
    pub fn major_count(&self) -> usize {
        self.major.len() / 4
    }

    pub fn minor_count(&self) -> usize {
        self.minor.len() / 4
    }

    /// Anchor point for the label of major tick `i`.
    pub fn label_anchor(&self, i: usize) -> Option<DVec3> {
        self.major.get(4 * i + 1).copied()
    }

    pub fn clear(&mut self) {
        self.minor.clear();
        self.major.clear();
        self.gridlines.clear();
        self.inner_gridlines.clear();
        self.gridpolys.clear();
    }

    /// Rebuild every buffer for the axis from `point1` to `point2`.
    ///
    /// Inner gridlines and gridpolys are always produced; whether they are
    /// drawn is decided when connectivity is assembled.
    pub fn generate(&mut self, point1: DVec3, point2: DVec3, spec: &AxisSpec) {
        self.clear();
        let frame = AxisFrame::new(spec.axis_type, spec.position);
        let end = point2[frame.sweep];

        let minor_values = sweep(spec.minor, end, Bound::Exclusive, "minor");
        let minor_tick = tick_offsets(&frame, spec.tick_location, spec.minor_tick_size);
        push_groups(&mut self.minor, &frame, point1, &minor_values, &minor_tick);

        let major_values = sweep(spec.major, end, Bound::Inclusive, "major");
        let major_tick = tick_offsets(&frame, spec.tick_location, spec.major_tick_size);
        push_groups(&mut self.major, &frame, point1, &major_values, &major_tick);

        let reach = dvec2(
            -frame.mult_a * spec.gridline_lengths[frame.perp_a],
            -frame.mult_b * spec.gridline_lengths[frame.perp_b],
        );

        let gridline = [dvec2(reach.x, 0.0), DVec2::ZERO, dvec2(0.0, reach.y), DVec2::ZERO];
        push_groups(&mut self.gridlines, &frame, point1, &major_values, &gridline);

        let inner = [dvec2(reach.x, 0.0), reach, dvec2(0.0, reach.y), reach];
        push_groups(&mut self.inner_gridlines, &frame, point1, &major_values, &inner);

        for band in major_values.windows(2) {
            let (v0, v1) = (band[0], band[1]);
            for far in [dvec2(reach.x, 0.0), dvec2(0.0, reach.y)] {
                self.gridpolys.extend([
                    frame.point(point1, v0, DVec2::ZERO),
                    frame.point(point1, v1, DVec2::ZERO),
                    frame.point(point1, v1, far),
                    frame.point(point1, v0, far),
                ]);
            }
        }

        trace!(
            minor = self.minor_count(),
            major = self.major_count(),
            gridpolys = self.gridpolys.len() / 4,
            "generated tick points"
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Exclusive,
    Inclusive,
}

/// Values `start, start + delta, ...` up to `end`, at most [`MAX_TICKS`].
///
/// Values accumulate by repeated addition so floating-point drift matches
/// what a running sum produces.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn sweep(spacing: TickSpacing, end: f64, bound: Bound, what: &str) -> Vec<f64> {
    let mut values = Vec::new();
    let mut x = spacing.start;
    loop {
        let inside = match bound {
            Bound::Exclusive => x < end,
            Bound::Inclusive => x <= end,
        };
        if !inside {
            break;
        }
        if values.len() == MAX_TICKS {
            warn!(what, start = spacing.start, delta = spacing.delta, "tick sweep truncated at {MAX_TICKS}");
            break;
        }
        values.push(x);
        x += spacing.delta;
    }
    values
}

/// Perpendicular offsets of the four points of one tick.
fn tick_offsets(frame: &AxisFrame, location: TickLocation, size: f64) -> [DVec2; 4] {
    let a = frame.mult_a * size;
    let b = frame.mult_b * size;
    let (inward, outward) = match location {
        TickLocation::Inside => (1.0, 0.0),
        TickLocation::Outside => (0.0, 1.0),
        TickLocation::Both => (1.0, 1.0),
    };
    [
        dvec2(-a * inward, 0.0),
        dvec2(a * outward, 0.0),
        dvec2(0.0, -b * inward),
        dvec2(0.0, b * outward),
    ]
}

fn push_groups(out: &mut Vec<DVec3>, frame: &AxisFrame, edge: DVec3, values: &[f64], offsets: &[DVec2; 4]) {
    out.reserve(values.len() * offsets.len());
    for &v in values {
        out.extend(offsets.iter().map(|&o| frame.point(edge, v, o)));
    }
}
