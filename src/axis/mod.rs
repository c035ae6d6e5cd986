//! A single plot axis with incremental geometry builds
//!
//! This module is organized into submodules:
//! - `defaults`: Default sizes and settings
//! - `spec`: Caller-facing parameters (`AxisSpec` and its enums)
//! - `frame`: Axis-permutation descriptor shared by X, Y and Z axes
//! - `ticks`: Tick, gridline and grid polygon point generation
//! - `assembler`: Line/quad connectivity over the generated points
//! - `labels`: Tick labels, 3D and 2D placement
//! - `title`: Axis title, 3D and 2D placement
//! - `state`: Build snapshots and the stage dependency table
//! - `primitives`: Drawables and the renderer seam

pub mod assembler;
pub mod defaults;
pub mod frame;
pub mod labels;
pub mod primitives;
pub mod spec;
pub mod state;
pub mod ticks;
pub mod title;

use std::fmt;

use glam::DVec3;

pub use assembler::AxisGeometry;
pub use frame::AxisFrame;
pub use labels::{Label, LabelSet};
pub use primitives::{
    BillboardText, Drawable, LineSet, OverlayText, PolySet, Primitive, RecordingTarget, RenderPass,
    RenderTarget,
};
pub use spec::{AxisPosition, AxisSpec, AxisType, TickFlags, TickLocation, TickSpacing, Visibility};
pub use state::{BuildInputs, BuildState, Stage, Trigger};
pub use ticks::TickPoints;
pub use title::{Title, TitleLock};

use crate::errors::{Endpoint, SpecError};
use crate::log::{debug, trace};
use crate::stamp::Stamp;
use crate::text::{ProportionalText, TextMeasure, TextStyle};
use crate::types::{Bounds, ValueRange, try_positive};
use crate::viewport::Viewport;
use spec::{gridline_name, validate_point, validate_size, validate_spacing};

/// Lifecycle of an axis between builds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisStatus {
    #[default]
    Unbuilt,
    Built,
    /// Endpoints coincide; nothing is built or drawn
    ZeroLength,
}

/// How often each build stage has actually run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildCounters {
    /// Builds that got past the full short-circuit
    pub builds: u64,
    /// Builds skipped entirely because nothing changed
    pub short_circuits: u64,
    pub tick_generations: u64,
    pub line_assemblies: u64,
    pub label_layouts: u64,
    pub label_layouts_2d: u64,
    pub title_layouts: u64,
    pub title_layouts_2d: u64,
}

/// Modification stamps of the independently tracked field groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Stamps {
    params: Stamp,
    bounds: Stamp,
    label_text: Stamp,
    title_text: Stamp,
}

impl Stamps {
    fn new() -> Self {
        Self {
            params: Stamp::next(),
            bounds: Stamp::next(),
            label_text: Stamp::NEVER,
            title_text: Stamp::NEVER,
        }
    }

    /// Overall modification time. Bounds and text changes count as
    /// modifications of the axis itself.
    fn actor(&self) -> Stamp {
        self.params.max(self.bounds).max(self.label_text).max(self.title_text)
    }
}

/// One axis of a plot: owns its parameters, the generated geometry, its
/// labels and its title, and rebuilds only what a change invalidated.
///
/// Parameters are set between render calls; geometry is built lazily by
/// [`AxisActor::build`] or any of the render passes.
pub struct AxisActor {
    spec: AxisSpec,
    label_style: TextStyle,
    title_style: TextStyle,
    label_scale: f64,
    labels: LabelSet,
    labels_built: usize,
    labels_built_2d: usize,
    title: Title,
    ticks: TickPoints,
    geometry: AxisGeometry,
    state: BuildState,
    status: AxisStatus,
    stamps: Stamps,
    counters: BuildCounters,
    measure: Box<dyn TextMeasure>,
}

impl fmt::Debug for AxisActor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisActor")
            .field("spec", &self.spec)
            .field("status", &self.status)
            .field("labels", &self.labels.len())
            .field("title", &self.title.text)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Default for AxisActor {
    fn default() -> Self {
        Self::new()
    }
}

impl AxisActor {
    /// An axis with default parameters, measuring text with [`ProportionalText`].
    pub fn new() -> Self {
        let label_style = TextStyle::default().with_font_size(defaults::VECTOR_FONT_SIZE);
        let title_style = label_style.clone();
        let title = Title::new(title_style.clone(), title::style_2d(&title_style), defaults::TITLE_SCALE);
        Self {
            spec: AxisSpec::default(),
            label_style,
            title_style,
            label_scale: defaults::LABEL_SCALE,
            labels: LabelSet::default(),
            labels_built: 0,
            labels_built_2d: 0,
            title,
            ticks: TickPoints::default(),
            geometry: AxisGeometry::default(),
            state: BuildState::default(),
            status: AxisStatus::Unbuilt,
            stamps: Stamps::new(),
            counters: BuildCounters::default(),
            measure: Box::new(ProportionalText),
        }
    }

    /// An axis configured from `spec`, rejecting it if any value is invalid.
    pub fn with_spec(spec: AxisSpec) -> Result<Self, SpecError> {
        spec.validate()?;
        let mut axis = Self::new();
        axis.spec = spec;
        Ok(axis)
    }

    /// Measure text with `measure` instead of the bundled proportional table.
    pub fn with_text_measure(mut self, measure: impl TextMeasure + 'static) -> Self {
        self.measure = Box::new(measure);
        self.remeasure_labels();
        self.remeasure_title();
        self
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn spec(&self) -> &AxisSpec {
        &self.spec
    }

    pub fn status(&self) -> AxisStatus {
        self.status
    }

    pub fn has_zero_length(&self) -> bool {
        self.spec.has_zero_length()
    }

    pub fn tick_points(&self) -> &TickPoints {
        &self.ticks
    }

    pub fn geometry(&self) -> &AxisGeometry {
        &self.geometry
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    /// Labels placed by the last 3D label layout.
    pub fn labels_built(&self) -> usize {
        self.labels_built
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn build_state(&self) -> &BuildState {
        &self.state
    }

    pub fn counters(&self) -> BuildCounters {
        self.counters
    }

    pub fn label_style(&self) -> &TextStyle {
        &self.label_style
    }

    pub fn title_style(&self) -> &TextStyle {
        &self.title_style
    }

    /// Stamp of the most recent change to anything the axis depends on.
    pub fn modified(&self) -> Stamp {
        self.stamps.actor()
    }

    /// Major tick values in value-range units, one per generated major tick.
    pub fn major_tick_values(&self) -> Vec<f64> {
        let TickSpacing { start, delta } = self.spec.major_range;
        (0..self.ticks.major_count()).map(|i| start + i as f64 * delta).collect()
    }

    /// Longest unscaled 3D label diagonal; 0 without labels.
    pub fn compute_max_label_length(&self) -> f64 {
        self.labels.max_diagonal()
    }

    /// Unscaled 3D title diagonal.
    pub fn compute_title_length(&self) -> f64 {
        self.title.extent.diagonal()
    }

    /// Grid polygons are drawn in the translucent pass.
    pub fn has_translucent_geometry(&self) -> bool {
        true
    }

    // ------------------------------------------------------------------
    // Setters
    // ------------------------------------------------------------------

    fn touch(&mut self) {
        self.stamps.params.touch();
    }

    pub fn set_point1(&mut self, p: DVec3) -> Result<(), SpecError> {
        let p = validate_point(p, Endpoint::First)?;
        if self.spec.point1 != p {
            self.spec.point1 = p;
            self.touch();
        }
        Ok(())
    }

    pub fn set_point2(&mut self, p: DVec3) -> Result<(), SpecError> {
        let p = validate_point(p, Endpoint::Second)?;
        if self.spec.point2 != p {
            self.spec.point2 = p;
            self.touch();
        }
        Ok(())
    }

    /// Set both endpoints; neither changes if either is rejected.
    pub fn set_points(&mut self, point1: DVec3, point2: DVec3) -> Result<(), SpecError> {
        validate_point(point1, Endpoint::First)?;
        validate_point(point2, Endpoint::Second)?;
        self.set_point1(point1)?;
        self.set_point2(point2)
    }

    pub fn set_range(&mut self, lo: f64, hi: f64) -> Result<(), SpecError> {
        let range = ValueRange::try_new(lo, hi).map_err(|_| SpecError::NonFiniteRange)?;
        if self.spec.range != range {
            self.spec.range = range;
            self.touch();
        }
        Ok(())
    }

    /// Set the bounding box as `[xmin, xmax, ymin, ymax, zmin, zmax]`.
    pub fn set_bounds(&mut self, bounds: [f64; 6]) -> Result<(), SpecError> {
        let bounds = Bounds::try_new(bounds).map_err(|(index, _)| SpecError::NonFiniteBounds { index })?;
        if self.spec.bounds != bounds {
            self.spec.bounds = bounds;
            self.stamps.bounds.touch();
        }
        Ok(())
    }

    pub fn set_axis_type_and_position(&mut self, axis_type: AxisType, position: AxisPosition) {
        if self.spec.axis_type != axis_type || self.spec.position != position {
            self.spec.axis_type = axis_type;
            self.spec.position = position;
            self.touch();
        }
    }

    pub fn set_axis_position(&mut self, position: AxisPosition) {
        self.set_axis_type_and_position(self.spec.axis_type, position);
    }

    pub fn set_tick_location(&mut self, location: TickLocation) {
        if self.spec.tick_location != location {
            self.spec.tick_location = location;
            self.touch();
        }
    }

    pub fn set_tick_sizes(&mut self, major: f64, minor: f64) -> Result<(), SpecError> {
        let major = validate_size(major, "major_tick_size")?;
        let minor = validate_size(minor, "minor_tick_size")?;
        if self.spec.major_tick_size != major || self.spec.minor_tick_size != minor {
            self.spec.major_tick_size = major;
            self.spec.minor_tick_size = minor;
            self.touch();
        }
        Ok(())
    }

    /// Major sweep in world units along the axis.
    pub fn set_major_spacing(&mut self, start: f64, delta: f64) -> Result<(), SpecError> {
        let spacing = validate_spacing(TickSpacing::new(start, delta), "major_start", "delta_major")?;
        self.replace_spacing(|s| &mut s.major, spacing);
        Ok(())
    }

    /// Minor sweep in world units along the axis.
    pub fn set_minor_spacing(&mut self, start: f64, delta: f64) -> Result<(), SpecError> {
        let spacing = validate_spacing(TickSpacing::new(start, delta), "minor_start", "delta_minor")?;
        self.replace_spacing(|s| &mut s.minor, spacing);
        Ok(())
    }

    /// Major sweep in value-range units.
    pub fn set_major_range_spacing(&mut self, start: f64, delta: f64) -> Result<(), SpecError> {
        let spacing = validate_spacing(
            TickSpacing::new(start, delta),
            "major_range_start",
            "delta_range_major",
        )?;
        self.replace_spacing(|s| &mut s.major_range, spacing);
        Ok(())
    }

    /// Minor sweep in value-range units.
    pub fn set_minor_range_spacing(&mut self, start: f64, delta: f64) -> Result<(), SpecError> {
        let spacing = validate_spacing(
            TickSpacing::new(start, delta),
            "minor_range_start",
            "delta_range_minor",
        )?;
        self.replace_spacing(|s| &mut s.minor_range, spacing);
        Ok(())
    }

    fn replace_spacing(&mut self, field: impl FnOnce(&mut AxisSpec) -> &mut TickSpacing, spacing: TickSpacing) {
        let slot = field(&mut self.spec);
        if *slot != spacing {
            *slot = spacing;
            self.touch();
        }
    }

    /// Gridline extents along world x, y and z.
    pub fn set_gridline_lengths(&mut self, lengths: [f64; 3]) -> Result<(), SpecError> {
        for (axis, len) in lengths.iter().enumerate() {
            validate_size(*len, gridline_name(axis))?;
        }
        if self.spec.gridline_lengths != lengths {
            self.spec.gridline_lengths = lengths;
            self.touch();
        }
        Ok(())
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        if self.spec.visibility != visibility {
            self.spec.visibility = visibility;
            self.touch();
        }
    }

    /// Change some visibility flags in place.
    pub fn update_visibility(&mut self, f: impl FnOnce(&mut Visibility)) {
        let mut visibility = self.spec.visibility;
        f(&mut visibility);
        self.set_visibility(visibility);
    }

    pub fn set_calculate_label_offset(&mut self, on: bool) {
        if self.spec.calculate_label_offset != on {
            self.spec.calculate_label_offset = on;
            self.touch();
        }
    }

    pub fn set_calculate_title_offset(&mut self, on: bool) {
        if self.spec.calculate_title_offset != on {
            self.spec.calculate_title_offset = on;
            self.touch();
        }
    }

    pub fn set_use_2d_mode(&mut self, on: bool) {
        if self.spec.use_2d_mode != on {
            self.spec.use_2d_mode = on;
            self.touch();
        }
    }

    /// Replace the label texts, one per major tick.
    ///
    /// A different count reallocates every label; the same count rewrites
    /// texts in place. Either way labels and title are laid out again on the
    /// next build.
    pub fn set_labels<S: AsRef<str>>(&mut self, texts: &[S]) {
        let style_2d = labels::style_2d(&self.label_style);
        let reallocated = self.labels.replace(
            texts,
            self.measure.as_ref(),
            &self.label_style,
            &style_2d,
            self.label_scale,
        );
        if reallocated {
            self.labels_built = 0;
            self.labels_built_2d = 0;
        }
        trace!(count = texts.len(), reallocated, "labels set");
        self.stamps.label_text.touch();
        // New text has never been projected.
        self.state.display_bounds = None;
    }

    pub fn set_title(&mut self, text: &str) {
        if self.title.set_text(text, self.measure.as_ref()) {
            self.stamps.title_text.touch();
            self.touch();
        }
    }

    pub fn title_text(&self) -> &str {
        &self.title.text
    }

    pub fn set_label_style(&mut self, style: TextStyle) {
        if self.label_style != style {
            self.label_style = style;
            self.remeasure_labels();
        }
    }

    pub fn set_title_style(&mut self, style: TextStyle) {
        if self.title_style != style {
            self.title_style = style;
            self.remeasure_title();
        }
    }

    fn remeasure_labels(&mut self) {
        let style_2d = labels::style_2d(&self.label_style);
        self.labels.restyle(self.measure.as_ref(), &self.label_style, &style_2d);
        self.stamps.label_text.touch();
        self.state.display_bounds = None;
    }

    fn remeasure_title(&mut self) {
        let style_2d = title::style_2d(&self.title_style);
        self.title.restyle(self.measure.as_ref(), self.title_style.clone(), style_2d);
        self.stamps.title_text.touch();
    }

    /// Scale applied to every 3D label.
    pub fn set_label_scale(&mut self, scale: f64) -> Result<(), SpecError> {
        let scale = try_positive(scale).map_err(|_| SpecError::InvalidScale { value: scale })?;
        if self.label_scale != scale {
            self.label_scale = scale;
            self.labels.set_scale(scale);
            self.stamps.label_text.touch();
        }
        Ok(())
    }

    pub fn label_scale(&self) -> f64 {
        self.label_scale
    }

    /// Scale applied to the 3D title.
    pub fn set_title_scale(&mut self, scale: f64) -> Result<(), SpecError> {
        let scale = try_positive(scale).map_err(|_| SpecError::InvalidScale { value: scale })?;
        if self.title.billboard.scale != scale {
            self.title.billboard.scale = scale;
            self.stamps.title_text.touch();
        }
        Ok(())
    }

    pub fn title_scale(&self) -> f64 {
        self.title.billboard.scale
    }

    /// Freeze the 2D title where the next 2D title layout puts it.
    ///
    /// Calling this while already locked re-arms the lock.
    pub fn lock_title_position(&mut self) {
        self.title.lock = TitleLock::Armed;
        self.stamps.title_text.touch();
    }

    /// Let the 2D title follow the axis again.
    pub fn unlock_title_position(&mut self) {
        if self.title.lock != TitleLock::Free {
            self.title.lock = TitleLock::Free;
            self.stamps.title_text.touch();
        }
    }

    /// Copy endpoints, range, title, main visibility flags and offset
    /// settings from `other`.
    pub fn copy_settings_from(&mut self, other: &AxisActor) {
        self.spec.point1 = other.spec.point1;
        self.spec.point2 = other.spec.point2;
        self.spec.range = other.spec.range;
        let from = other.spec.visibility;
        self.spec.visibility.axis = from.axis;
        self.spec.visibility.ticks = from.ticks;
        self.spec.visibility.labels = from.labels;
        self.spec.visibility.title = from.title;
        self.spec.calculate_label_offset = other.spec.calculate_label_offset;
        self.spec.calculate_title_offset = other.spec.calculate_title_offset;
        self.set_title(&other.title.text);
        self.touch();
    }

    // ------------------------------------------------------------------
    // Build
    // ------------------------------------------------------------------

    fn inputs(&self, viewport: &dyn Viewport, force: bool) -> BuildInputs {
        BuildInputs {
            force,
            actor_modified: self.stamps.actor(),
            viewport_modified: viewport.modified(),
            bounds_modified: self.stamps.bounds,
            label_text_modified: self.stamps.label_text,
            title_text_modified: self.stamps.title_text,
            position: self.spec.position,
            tick_location: self.spec.tick_location,
            range: self.spec.range,
            tick_flags: self.spec.visibility.tick_flags(),
            labels_visible: self.spec.visibility.labels,
            title_visible: self.spec.visibility.title,
            use_2d_mode: self.spec.use_2d_mode,
            display_bounds: self
                .spec
                .use_2d_mode
                .then(|| viewport.project_bounds(&self.spec.bounds)),
            ticks_rebuilt: false,
            title_rebuilt: false,
            hold_display_bounds: false,
        }
    }

    fn frame(&self) -> AxisFrame {
        AxisFrame::new(self.spec.axis_type, self.spec.position)
    }

    /// Bring ticks, lines, labels and title up to date for `viewport`.
    ///
    /// Each stage runs only when one of its triggers fired since the last
    /// build; `force` fires every stage. A zero-length axis drops all built
    /// state and builds nothing.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn build(&mut self, viewport: &dyn Viewport, force: bool) {
        if self.spec.has_zero_length() {
            if self.status != AxisStatus::ZeroLength {
                debug!("axis has zero length, not building");
                self.ticks.clear();
                self.geometry = AxisGeometry::default();
                self.labels_built = 0;
                self.labels_built_2d = 0;
                self.state = BuildState::default();
                self.status = AxisStatus::ZeroLength;
            }
            return;
        }

        let mut inputs = self.inputs(viewport, force);
        let Some(reason) = self.state.stale(Stage::Axis, &inputs) else {
            trace!("axis up to date");
            self.counters.short_circuits += 1;
            return;
        };
        debug!(%reason, axis = ?self.spec.axis_type, "building axis");
        self.counters.builds += 1;

        inputs.ticks_rebuilt = self.build_ticks(&inputs);
        self.build_lines(&inputs);
        self.build_labels(viewport, &inputs);
        if self.spec.use_2d_mode {
            self.build_labels_2d(viewport, &mut inputs);
        }
        if !self.title.is_empty() {
            inputs.title_rebuilt = self.build_title(&inputs);
            if self.spec.use_2d_mode {
                self.build_title_2d(viewport, &inputs);
            }
        }

        self.state = self.state.commit(&inputs);
        self.status = AxisStatus::Built;
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn build_ticks(&mut self, inputs: &BuildInputs) -> bool {
        let Some(reason) = self.state.stale(Stage::Ticks, inputs) else {
            return false;
        };
        trace!(%reason, "generating ticks");
        self.ticks.generate(self.spec.point1, self.spec.point2, &self.spec);
        self.counters.tick_generations += 1;
        true
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn build_lines(&mut self, inputs: &BuildInputs) {
        let Some(reason) = self.state.stale(Stage::Lines, inputs) else {
            return;
        };
        trace!(%reason, "assembling lines");
        self.geometry = AxisGeometry::assemble(
            &self.ticks,
            self.spec.point1,
            self.spec.point2,
            &self.spec.visibility,
            self.spec.use_2d_mode,
        );
        self.counters.line_assemblies += 1;
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn build_labels(&mut self, viewport: &dyn Viewport, inputs: &BuildInputs) {
        if !inputs.force && !self.spec.visibility.labels {
            return;
        }
        if !self.spec.calculate_label_offset {
            self.labels.set_auto_center(true);
        }
        let Some(reason) = self.state.stale(Stage::Labels, inputs) else {
            return;
        };
        if self.labels.is_empty() {
            self.labels_built = 0;
            return;
        }
        trace!(%reason, "laying out labels");
        let display = viewport.project_bounds(&self.spec.bounds);
        let frame = self.frame();
        self.labels_built = labels::layout_3d(
            &mut self.labels,
            &self.ticks,
            &frame,
            &display,
            self.spec.minor_tick_size,
            self.spec.calculate_label_offset,
        );
        self.counters.label_layouts += 1;
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn build_labels_2d(&mut self, viewport: &dyn Viewport, inputs: &mut BuildInputs) {
        if !inputs.force && (!self.spec.visibility.labels || self.labels.is_empty()) {
            inputs.hold_display_bounds = true;
            return;
        }
        let Some(reason) = self.state.stale(Stage::Labels2D, inputs) else {
            return;
        };
        let Some(display) = inputs.display_bounds else {
            return;
        };
        trace!(%reason, "laying out 2D labels");
        let frame = self.frame();
        self.labels_built_2d = labels::layout_2d(
            &mut self.labels,
            &self.ticks,
            self.spec.axis_type,
            &frame,
            viewport,
            &display,
            self.spec.minor_tick_size,
            self.measure.as_ref(),
        );
        self.counters.label_layouts_2d += 1;
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn build_title(&mut self, inputs: &BuildInputs) -> bool {
        if !inputs.force && !self.spec.visibility.title {
            return false;
        }
        let Some(reason) = self.state.stale(Stage::Title, inputs) else {
            return false;
        };
        trace!(%reason, "laying out title");
        let frame = self.frame();
        title::layout_3d(
            &mut self.title,
            &self.labels,
            self.labels_built,
            self.spec.point1,
            self.spec.point2,
            &frame,
            self.spec.calculate_title_offset,
        );
        self.counters.title_layouts += 1;
        true
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn build_title_2d(&mut self, viewport: &dyn Viewport, inputs: &BuildInputs) {
        if !inputs.force && !self.spec.visibility.title {
            return;
        }
        let Some(reason) = self.state.stale(Stage::Title2D, inputs) else {
            return;
        };
        trace!(%reason, "laying out 2D title");
        title::layout_2d(&mut self.title, self.spec.axis_type, viewport);
        self.counters.title_layouts_2d += 1;
    }

    // ------------------------------------------------------------------
    // Render
    // ------------------------------------------------------------------

    /// Build with `force`, then draw the opaque pass.
    pub fn build_and_render(
        &mut self,
        viewport: &dyn Viewport,
        target: &mut dyn RenderTarget,
        force: bool,
    ) -> usize {
        self.build(viewport, force);
        self.draw_opaque(target)
    }

    /// Axis line, ticks, gridlines and (3D mode) title and labels.
    pub fn render_opaque(&mut self, viewport: &dyn Viewport, target: &mut dyn RenderTarget) -> usize {
        self.build_and_render(viewport, target, false)
    }

    /// Grid polygons.
    pub fn render_translucent(&mut self, viewport: &dyn Viewport, target: &mut dyn RenderTarget) -> usize {
        self.build(viewport, false);
        if self.status != AxisStatus::Built || !self.spec.visibility.gridpolys {
            return 0;
        }
        target.draw(&self.geometry.gridpolys.clone().into(), RenderPass::Translucent)
    }

    /// 2D title and labels, drawn over the scene. Renders what is built.
    pub fn render_overlay(&self, target: &mut dyn RenderTarget) -> usize {
        if self.status != AxisStatus::Built || !self.spec.use_2d_mode {
            return 0;
        }
        let visibility = &self.spec.visibility;
        let mut drawn = 0;
        if visibility.title && !self.title.is_empty() {
            drawn += target.draw(&self.title.overlay.clone().into(), RenderPass::Overlay);
        }
        if visibility.labels {
            for label in self.labels.iter().take(self.labels_built_2d) {
                drawn += target.draw(&label.overlay.clone().into(), RenderPass::Overlay);
            }
        }
        drawn
    }

    fn draw_opaque(&self, target: &mut dyn RenderTarget) -> usize {
        if self.status != AxisStatus::Built {
            return 0;
        }
        let visibility = &self.spec.visibility;
        let three_d = !self.spec.use_2d_mode;
        let mut drawn = 0;

        if three_d && visibility.title && !self.title.is_empty() {
            drawn += target.draw(&self.title.billboard.clone().into(), RenderPass::Opaque);
        }
        if visibility.axis || visibility.ticks {
            drawn += target.draw(&self.geometry.lines.clone().into(), RenderPass::Opaque);
        }
        if visibility.gridlines {
            drawn += target.draw(&self.geometry.gridlines.clone().into(), RenderPass::Opaque);
        }
        if visibility.inner_gridlines {
            drawn += target.draw(&self.geometry.inner_gridlines.clone().into(), RenderPass::Opaque);
        }
        if three_d && visibility.labels {
            for label in self.labels.iter().take(self.labels_built) {
                drawn += target.draw(&label.billboard.clone().into(), RenderPass::Opaque);
            }
        }
        drawn
    }

    /// Hand every owned drawable to `target` for release.
    pub fn release_graphics_resources(&self, target: &mut dyn RenderTarget) {
        let drawables: [Drawable; 6] = [
            self.title.billboard.clone().into(),
            self.title.overlay.clone().into(),
            self.geometry.lines.clone().into(),
            self.geometry.gridlines.clone().into(),
            self.geometry.inner_gridlines.clone().into(),
            self.geometry.gridpolys.clone().into(),
        ];
        for d in &drawables {
            target.release(d);
        }
        for label in &self.labels {
            target.release(&label.billboard.clone().into());
            target.release(&label.overlay.clone().into());
        }
    }
}
