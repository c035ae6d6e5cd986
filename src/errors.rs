//! Error types for rejected caller input, with miette diagnostics.
//!
//! Building and rendering an axis never fails; only the setters that take
//! numbers from the caller validate them and report a [`SpecError`].

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

/// Which endpoint of the axis a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    First,
    Second,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::First => write!(f, "point1"),
            Endpoint::Second => write!(f, "point2"),
        }
    }
}

// ============================================================================
// Spec Errors
// ============================================================================

/// Errors raised when an axis parameter is rejected
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum SpecError {
    #[error("{which} has a NaN or infinite coordinate")]
    #[diagnostic(code(axial::spec::non_finite_endpoint))]
    NonFiniteEndpoint { which: Endpoint },

    #[error("value range is NaN or infinite")]
    #[diagnostic(code(axial::spec::non_finite_range))]
    NonFiniteRange,

    #[error("bounds[{index}] is NaN or infinite")]
    #[diagnostic(
        code(axial::spec::non_finite_bounds),
        help("bounds are ordered xmin, xmax, ymin, ymax, zmin, zmax")
    )]
    NonFiniteBounds { index: usize },

    #[error("invalid {what}: {source}")]
    #[diagnostic(
        code(axial::spec::invalid_spacing),
        help("tick starts must be finite; deltas must be finite and >= 0 (0 is capped, not looped)")
    )]
    InvalidSpacing {
        what: &'static str,
        #[source]
        source: NumericError,
    },

    #[error("invalid {what}: {source}")]
    #[diagnostic(
        code(axial::spec::invalid_tick_size),
        help("tick sizes and gridline lengths must be finite and >= 0")
    )]
    InvalidTickSize {
        what: &'static str,
        #[source]
        source: NumericError,
    },

    #[error("invalid scale: {value}")]
    #[diagnostic(code(axial::spec::invalid_scale), help("scales must be finite and > 0"))]
    InvalidScale { value: f64 },

    #[error("axis position index {index} out of range")]
    #[diagnostic(
        code(axial::spec::invalid_position),
        help("positions are 0 = min-min, 1 = min-max, 2 = max-max, 3 = max-min")
    )]
    InvalidPosition { index: usize },
}
