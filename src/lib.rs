//! Incremental tick, gridline, label and title geometry for plot axes.
//!
//! An [`AxisActor`] turns two endpoints, a value range and a bounding box
//! into tick marks, gridlines, grid polygons, positioned tick labels and a
//! positioned title. Builds happen lazily on the render path and only the
//! stages invalidated since the last build are redone.
//!
//! Text measurement, projection and drawing are collaborators behind the
//! [`TextMeasure`], [`Viewport`] and [`RenderTarget`] traits.

pub mod axis;
pub mod errors;
pub mod log;
pub mod stamp;
pub mod text;
pub mod types;
pub mod viewport;

pub use axis::{
    AxisActor, AxisGeometry, AxisPosition, AxisSpec, AxisStatus, AxisType, BuildCounters, Drawable,
    RenderPass, RenderTarget, TickLocation, TickPoints, Visibility,
};
pub use errors::SpecError;
pub use stamp::Stamp;
pub use text::{ProportionalText, TextMeasure, TextStyle};
pub use types::{Bounds, DisplayBox, TextBox, ValueRange};
pub use viewport::{MatrixViewport, Viewport};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::RecordingTarget;
    use glam::{DMat4, dvec3};

    #[test]
    fn default_axis_builds() {
        let mut axis = AxisActor::new();
        let vp = MatrixViewport::new(DMat4::IDENTITY, 100.0, 100.0);
        let mut target = RecordingTarget::default();
        let drawn = axis.build_and_render(&vp, &mut target, false);
        assert_eq!(axis.status(), AxisStatus::Built);
        // one minor and one major tick at 0, two segments each, plus the axis line
        assert_eq!(axis.tick_points().major_count(), 1);
        assert_eq!(drawn, 2 * 2 + 1);
    }

    #[test]
    fn spec_errors_are_diagnostics() {
        use miette::Diagnostic;
        let err = AxisActor::with_spec(AxisSpec::default().with_range(f64::NAN, 1.0)).unwrap_err();
        assert_eq!(err, SpecError::NonFiniteRange);
        assert_eq!(err.code().map(|c| c.to_string()).as_deref(), Some("axial::spec::non_finite_range"));
    }

    #[test]
    fn endpoints_out_of_order_still_build() {
        let mut axis = AxisActor::new();
        axis.set_points(dvec3(5.0, 0.0, 0.0), dvec3(0.0, 0.0, 0.0)).unwrap();
        let vp = MatrixViewport::new(DMat4::IDENTITY, 100.0, 100.0);
        axis.build(&vp, true);
        // the sweep starts at 0 and runs toward point2.x, which it already meets
        assert_eq!(axis.tick_points().major_count(), 1);
    }
}
