//! Axis parameters supplied by the owning plot.

use glam::DVec3;

use super::defaults;
use crate::errors::{Endpoint, SpecError};
use crate::types::{Bounds, ValueRange, try_finite, try_non_negative};

/// Which world coordinate the axis runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AxisType {
    #[default]
    X,
    Y,
    Z,
}

impl AxisType {
    pub const ALL: [AxisType; 3] = [AxisType::X, AxisType::Y, AxisType::Z];

    /// Index of the swept coordinate.
    pub fn index(self) -> usize {
        match self {
            AxisType::X => 0,
            AxisType::Y => 1,
            AxisType::Z => 2,
        }
    }
}

/// Where the axis sits on the bounding box, as (first perpendicular,
/// second perpendicular) extremes. An X-type axis at `MinMin` runs along
/// minimum y and minimum z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AxisPosition {
    #[default]
    MinMin,
    MinMax,
    MaxMax,
    MaxMin,
}

impl AxisPosition {
    pub const ALL: [AxisPosition; 4] = [
        AxisPosition::MinMin,
        AxisPosition::MinMax,
        AxisPosition::MaxMax,
        AxisPosition::MaxMin,
    ];

    /// Index into the multiplier tables.
    pub fn index(self) -> usize {
        match self {
            AxisPosition::MinMin => 0,
            AxisPosition::MinMax => 1,
            AxisPosition::MaxMax => 2,
            AxisPosition::MaxMin => 3,
        }
    }
}

impl TryFrom<usize> for AxisPosition {
    type Error = SpecError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        AxisPosition::ALL
            .get(index)
            .copied()
            .ok_or(SpecError::InvalidPosition { index })
    }
}

/// Which side of the axis tick marks are drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TickLocation {
    /// Toward the body of the bounding box
    #[default]
    Inside,
    /// Away from the bounding box
    Outside,
    Both,
}

impl TickLocation {
    pub const ALL: [TickLocation; 3] = [TickLocation::Inside, TickLocation::Outside, TickLocation::Both];
}

/// Start and step of one tick sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSpacing {
    pub start: f64,
    pub delta: f64,
}

impl TickSpacing {
    pub const fn new(start: f64, delta: f64) -> Self {
        TickSpacing { start, delta }
    }

    fn validate(self, start_name: &'static str, delta_name: &'static str) -> Result<Self, SpecError> {
        try_finite(self.start).map_err(|source| SpecError::InvalidSpacing { what: start_name, source })?;
        try_non_negative(self.delta).map_err(|source| SpecError::InvalidSpacing { what: delta_name, source })?;
        Ok(self)
    }
}

impl Default for TickSpacing {
    fn default() -> Self {
        TickSpacing::new(defaults::TICK_START, defaults::TICK_DELTA)
    }
}

/// Visibility switches for every drawable part of the axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub axis: bool,
    pub ticks: bool,
    pub minor_ticks: bool,
    pub labels: bool,
    pub title: bool,
    pub gridlines: bool,
    pub inner_gridlines: bool,
    pub gridpolys: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            axis: true,
            ticks: true,
            minor_ticks: true,
            labels: true,
            title: true,
            gridlines: false,
            inner_gridlines: false,
            gridpolys: false,
        }
    }
}

/// The flags whose change forces line connectivity to be rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickFlags {
    pub axis: bool,
    pub ticks: bool,
    pub minor_ticks: bool,
    pub gridlines: bool,
    pub inner_gridlines: bool,
    pub gridpolys: bool,
}

impl Visibility {
    pub fn tick_flags(&self) -> TickFlags {
        TickFlags {
            axis: self.axis,
            ticks: self.ticks,
            minor_ticks: self.minor_ticks,
            gridlines: self.gridlines,
            inner_gridlines: self.inner_gridlines,
            gridpolys: self.gridpolys,
        }
    }
}

/// Everything the owner configures on a single axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec {
    pub point1: DVec3,
    pub point2: DVec3,
    pub range: ValueRange,
    pub bounds: Bounds,
    pub axis_type: AxisType,
    pub position: AxisPosition,
    pub tick_location: TickLocation,
    pub major_tick_size: f64,
    pub minor_tick_size: f64,
    /// Major/minor sweeps in world units along the axis.
    pub major: TickSpacing,
    pub minor: TickSpacing,
    /// Major/minor sweeps in value-range units.
    pub major_range: TickSpacing,
    pub minor_range: TickSpacing,
    /// Gridline extent along world x, y and z.
    pub gridline_lengths: [f64; 3],
    pub visibility: Visibility,
    pub calculate_label_offset: bool,
    pub calculate_title_offset: bool,
    /// Screen-space labels and title instead of world-space billboards.
    pub use_2d_mode: bool,
}

impl Default for AxisSpec {
    fn default() -> Self {
        Self {
            point1: defaults::POINT1,
            point2: defaults::POINT2,
            range: ValueRange::default(),
            bounds: Bounds::default(),
            axis_type: AxisType::X,
            position: AxisPosition::MinMin,
            tick_location: TickLocation::Inside,
            major_tick_size: defaults::MAJOR_TICK_SIZE,
            minor_tick_size: defaults::MINOR_TICK_SIZE,
            major: TickSpacing::default(),
            minor: TickSpacing::default(),
            major_range: TickSpacing::default(),
            minor_range: TickSpacing::default(),
            gridline_lengths: [defaults::GRIDLINE_LENGTH; 3],
            visibility: Visibility::default(),
            calculate_label_offset: true,
            calculate_title_offset: true,
            use_2d_mode: false,
        }
    }
}

impl AxisSpec {
    pub fn with_points(mut self, point1: DVec3, point2: DVec3) -> Self {
        self.point1 = point1;
        self.point2 = point2;
        self
    }

    pub fn with_range(mut self, lo: f64, hi: f64) -> Self {
        self.range = ValueRange::new(lo, hi);
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_type(mut self, axis_type: AxisType, position: AxisPosition) -> Self {
        self.axis_type = axis_type;
        self.position = position;
        self
    }

    pub fn with_tick_location(mut self, tick_location: TickLocation) -> Self {
        self.tick_location = tick_location;
        self
    }

    pub fn with_tick_sizes(mut self, major: f64, minor: f64) -> Self {
        self.major_tick_size = major;
        self.minor_tick_size = minor;
        self
    }

    pub fn with_major(mut self, start: f64, delta: f64) -> Self {
        self.major = TickSpacing::new(start, delta);
        self
    }

    pub fn with_minor(mut self, start: f64, delta: f64) -> Self {
        self.minor = TickSpacing::new(start, delta);
        self
    }

    pub fn with_major_range(mut self, start: f64, delta: f64) -> Self {
        self.major_range = TickSpacing::new(start, delta);
        self
    }

    pub fn with_minor_range(mut self, start: f64, delta: f64) -> Self {
        self.minor_range = TickSpacing::new(start, delta);
        self
    }

    pub fn with_gridline_lengths(mut self, lengths: [f64; 3]) -> Self {
        self.gridline_lengths = lengths;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_2d_mode(mut self, use_2d_mode: bool) -> Self {
        self.use_2d_mode = use_2d_mode;
        self
    }

    /// Check every numeric field, returning the first problem found.
    pub fn validate(&self) -> Result<(), SpecError> {
        validate_point(self.point1, Endpoint::First)?;
        validate_point(self.point2, Endpoint::Second)?;
        ValueRange::try_new(self.range.lo, self.range.hi).map_err(|_| SpecError::NonFiniteRange)?;
        Bounds::try_new(self.bounds.0).map_err(|(index, _)| SpecError::NonFiniteBounds { index })?;
        validate_size(self.major_tick_size, "major_tick_size")?;
        validate_size(self.minor_tick_size, "minor_tick_size")?;
        for (len, name) in self.gridline_lengths.iter().zip(GRIDLINE_NAMES) {
            validate_size(*len, name)?;
        }
        self.major.validate("major_start", "delta_major")?;
        self.minor.validate("minor_start", "delta_minor")?;
        self.major_range.validate("major_range_start", "delta_range_major")?;
        self.minor_range.validate("minor_range_start", "delta_range_minor")?;
        Ok(())
    }

    /// True when both endpoints coincide; such an axis draws nothing.
    pub fn has_zero_length(&self) -> bool {
        self.point1 == self.point2
    }
}

const GRIDLINE_NAMES: [&str; 3] = ["gridline_x_length", "gridline_y_length", "gridline_z_length"];

pub(crate) fn validate_point(p: DVec3, which: Endpoint) -> Result<DVec3, SpecError> {
    if p.is_finite() {
        Ok(p)
    } else {
        Err(SpecError::NonFiniteEndpoint { which })
    }
}

pub(crate) fn validate_size(v: f64, what: &'static str) -> Result<f64, SpecError> {
    try_non_negative(v).map_err(|source| SpecError::InvalidTickSize { what, source })
}

pub(crate) fn validate_spacing(
    spacing: TickSpacing,
    start_name: &'static str,
    delta_name: &'static str,
) -> Result<TickSpacing, SpecError> {
    spacing.validate(start_name, delta_name)
}

pub(crate) fn gridline_name(axis: usize) -> &'static str {
    GRIDLINE_NAMES[axis]
}
