//! Line and polygon connectivity over generated tick points.

use glam::DVec3;

use super::primitives::{LineSet, PolySet};
use super::spec::Visibility;
use super::ticks::TickPoints;
use crate::log::trace;

/// Everything the axis draws apart from text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisGeometry {
    /// Minor ticks, major ticks, then the axis line itself
    pub lines: LineSet,
    pub gridlines: LineSet,
    pub inner_gridlines: LineSet,
    pub gridpolys: PolySet,
}

impl AxisGeometry {
    /// Build connectivity for the current points and visibility.
    ///
    /// In 2D mode only the first-perpendicular half of each tick is kept.
    pub fn assemble(
        ticks: &TickPoints,
        point1: DVec3,
        point2: DVec3,
        visibility: &Visibility,
        use_2d_mode: bool,
    ) -> Self {
        let mut points = Vec::new();
        if visibility.ticks && visibility.minor_ticks {
            points.extend_from_slice(&ticks.minor);
        }
        if visibility.ticks {
            if use_2d_mode {
                points.extend(ticks.major.chunks_exact(4).flat_map(|t| [t[0], t[1]]));
            } else {
                points.extend_from_slice(&ticks.major);
            }
        }
        let mut segments = pairs(points.len());
        if visibility.axis {
            let i = points.len() as u32;
            points.push(point1);
            points.push(point2);
            segments.push([i, i + 1]);
        }

        let gridlines = line_set(&ticks.gridlines, visibility.gridlines);
        let inner_gridlines = line_set(&ticks.inner_gridlines, visibility.inner_gridlines);
        let gridpolys = if visibility.gridpolys {
            let quads = (0..ticks.gridpolys.len() as u32 / 4).map(|q| {
                let i = q * 4;
                [i, i + 1, i + 2, i + 3]
            });
            PolySet::new(ticks.gridpolys.clone(), quads.collect())
        } else {
            PolySet::new(ticks.gridpolys.clone(), Vec::new())
        };

        trace!(
            lines = segments.len(),
            gridlines = gridlines.segments.len(),
            gridpolys = gridpolys.quads.len(),
            "assembled axis geometry"
        );

        Self {
            lines: LineSet::new(points, segments),
            gridlines,
            inner_gridlines,
            gridpolys,
        }
    }
}

/// `[0, 1], [2, 3], ...` over `n` points.
fn pairs(n: usize) -> Vec<[u32; 2]> {
    (0..n as u32 / 2).map(|k| [2 * k, 2 * k + 1]).collect()
}

fn line_set(points: &[DVec3], visible: bool) -> LineSet {
    let segments = if visible { pairs(points.len()) } else { Vec::new() };
    LineSet::new(points.to_vec(), segments)
}
