//! Default sizes and settings for a freshly created axis

use glam::{DVec3, dvec3};

/// Hard cap on the number of ticks a single sweep may emit.
pub const MAX_TICKS: usize = 1000;

pub const POINT1: DVec3 = dvec3(0.0, 0.0, 0.0);
pub const POINT2: DVec3 = dvec3(0.75, 0.0, 0.0);

pub const MAJOR_TICK_SIZE: f64 = 1.0;
pub const MINOR_TICK_SIZE: f64 = 0.5;
pub const GRIDLINE_LENGTH: f64 = 1.0;

pub const TICK_START: f64 = 0.0;
pub const TICK_DELTA: f64 = 1.0;

/// Em height of 3D vector text before scaling, in world units.
pub const VECTOR_FONT_SIZE: f64 = 1.0;
pub const LABEL_SCALE: f64 = 1.0;
pub const TITLE_SCALE: f64 = 1.0;

/// 2D overlay text sizes in pixels.
pub const LABEL_FONT_SIZE_2D: f64 = 14.0;
pub const TITLE_FONT_SIZE_2D: f64 = 18.0;

/// Display-space nudge applied to a 2D X-type title (down).
pub const TITLE_2D_X_NUDGE: f64 = -12.0;
/// Display-space nudge applied to a 2D Y-type title (left).
pub const TITLE_2D_Y_NUDGE: f64 = -20.0;
/// Minimum distance of a 2D title from the bottom/left display edges.
pub const TITLE_2D_EDGE_MARGIN: f64 = 10.0;
/// A 2D Y-type title longer than this many characters is drawn vertically.
pub const TITLE_2D_ROTATE_AFTER: usize = 2;
