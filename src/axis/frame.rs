//! Axis-permutation descriptor.
//!
//! X, Y and Z axes share one tick/label algorithm. An [`AxisFrame`] says
//! which world coordinate is swept, which two coordinates are perpendicular
//! to it, and which side of the axis (toward or away from the bounding box)
//! each perpendicular offset points to.

use glam::{DVec2, DVec3};

use super::spec::{AxisPosition, AxisType};

/// First perpendicular multiplier, indexed by [`AxisPosition::index`].
pub const MULTIPLIER_TABLE_1: [f64; 4] = [-1.0, -1.0, 1.0, 1.0];
/// Second perpendicular multiplier, indexed by [`AxisPosition::index`].
pub const MULTIPLIER_TABLE_2: [f64; 4] = [-1.0, 1.0, 1.0, -1.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisFrame {
    /// Coordinate index that varies along the axis
    pub sweep: usize,
    /// Perpendicular coordinate driven by table 1
    pub perp_a: usize,
    /// Perpendicular coordinate driven by table 2
    pub perp_b: usize,
    /// `+1`: outward (away from the box) is the positive `perp_a` direction
    pub mult_a: f64,
    pub mult_b: f64,
}

impl AxisFrame {
    pub fn new(axis_type: AxisType, position: AxisPosition) -> Self {
        let (sweep, perp_a, perp_b) = match axis_type {
            AxisType::X => (0, 1, 2),
            AxisType::Y => (1, 0, 2),
            AxisType::Z => (2, 0, 1),
        };
        Self {
            sweep,
            perp_a,
            perp_b,
            mult_a: MULTIPLIER_TABLE_1[position.index()],
            mult_b: MULTIPLIER_TABLE_2[position.index()],
        }
    }

    /// `edge` with the swept coordinate set to `value` and the perpendicular
    /// coordinates moved by `offset` (`x` along `perp_a`, `y` along `perp_b`).
    pub fn point(&self, edge: DVec3, value: f64, offset: DVec2) -> DVec3 {
        let mut p = edge;
        p[self.sweep] = value;
        p[self.perp_a] += offset.x;
        p[self.perp_b] += offset.y;
        p
    }

    /// Outward multipliers along world x and y, used to push text off the
    /// axis. Perpendiculars along world z do not move text.
    pub fn text_multipliers(&self) -> DVec2 {
        let mut m = DVec2::ZERO;
        for (axis, mult) in [(self.perp_a, self.mult_a), (self.perp_b, self.mult_b)] {
            if axis < 2 {
                m[axis] = mult;
            }
        }
        m
    }
}
