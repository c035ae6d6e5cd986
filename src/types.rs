//! Numeric value types shared by the axis pipeline.
//!
//! Caller-facing values are validated once at the setter boundary
//! (see [`crate::errors::SpecError`]); everything downstream works on
//! plain `f64`/`glam` values that are known to be finite.

use std::fmt;

use glam::{DVec2, DVec3, dvec3};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when non-negative required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Reject NaN and infinities.
#[inline]
pub fn try_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Reject NaN, infinities and negative values. Zero is accepted.
#[inline]
pub fn try_non_negative(val: f64) -> Result<f64, NumericError> {
    let val = try_finite(val)?;
    if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Reject NaN, infinities, zero and negative values.
#[inline]
pub fn try_positive(val: f64) -> Result<f64, NumericError> {
    let val = try_non_negative(val)?;
    if val == 0.0 {
        Err(NumericError::Zero)
    } else {
        Ok(val)
    }
}

/// Value range `[lo, hi]` of the quantity shown along an axis.
///
/// `lo > hi` is allowed (reversed axes); only finiteness is enforced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub lo: f64,
    pub hi: f64,
}

impl ValueRange {
    pub const fn new(lo: f64, hi: f64) -> Self {
        ValueRange { lo, hi }
    }

    /// Create a range with validation (rejects NaN/infinite ends)
    pub fn try_new(lo: f64, hi: f64) -> Result<Self, NumericError> {
        Ok(ValueRange {
            lo: try_finite(lo)?,
            hi: try_finite(hi)?,
        })
    }

    pub fn span(self) -> f64 {
        self.hi - self.lo
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        ValueRange::new(0.0, 1.0)
    }
}

/// World-space bounding box the axis is placed against:
/// `[xmin, xmax, ymin, ymax, zmin, zmax]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds(pub [f64; 6]);

impl Bounds {
    pub const fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64, zmin: f64, zmax: f64) -> Self {
        Bounds([xmin, xmax, ymin, ymax, zmin, zmax])
    }

    /// Validate all six scalars, reporting the index of the first bad one.
    pub fn try_new(b: [f64; 6]) -> Result<Self, (usize, NumericError)> {
        for (i, v) in b.iter().enumerate() {
            try_finite(*v).map_err(|e| (i, e))?;
        }
        Ok(Bounds(b))
    }

    /// Corner with all minimum coordinates.
    pub fn min_corner(&self) -> DVec3 {
        dvec3(self.0[0], self.0[2], self.0[4])
    }

    /// Corner with all maximum coordinates.
    pub fn max_corner(&self) -> DVec3 {
        dvec3(self.0[1], self.0[3], self.0[5])
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::new(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0)
    }
}

/// The bounding box's min and max corners after projection to display space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayBox {
    pub min: DVec3,
    pub max: DVec3,
}

impl DisplayBox {
    /// Sign used to push labels away from the plot body along display x:
    /// `-1` when the box's min corner projects to the right of its max corner.
    pub fn x_adjust(&self) -> f64 {
        if self.min.x > self.max.x { -1.0 } else { 1.0 }
    }

    /// Same as [`DisplayBox::x_adjust`] for display y.
    pub fn y_adjust(&self) -> f64 {
        if self.min.y > self.max.y { -1.0 } else { 1.0 }
    }
}

/// Measured extent of a piece of text: `[xmin, xmax, ymin, ymax]`.
///
/// Pixels for 2D text, unscaled world units for 3D (vector) text.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct TextBox {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl TextBox {
    pub const EMPTY: TextBox = TextBox { xmin: 0.0, xmax: 0.0, ymin: 0.0, ymax: 0.0 };

    pub const fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        TextBox { xmin, xmax, ymin, ymax }
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width(), self.height())
    }

    /// Length of the box diagonal.
    pub fn diagonal(&self) -> f64 {
        self.size().length()
    }
}
