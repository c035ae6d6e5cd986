//! Tick labels and their placement.
//!
//! Each label carries a world-space billboard (3D mode) and a display-space
//! overlay (2D mode); both are kept current so switching modes only needs a
//! rebuild, not new label text.

use std::sync::Arc;

use glam::{DVec2, dvec2, dvec3};

use super::defaults;
use super::frame::AxisFrame;
use super::primitives::{BillboardText, OverlayText};
use super::spec::AxisType;
use super::ticks::TickPoints;
use crate::log::trace;
use crate::text::{Justify, TextMeasure, TextStyle, VJustify};
use crate::types::{DisplayBox, TextBox};
use crate::viewport::Viewport;

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: Arc<str>,
    /// Unscaled 3D extent of the text
    pub extent: TextBox,
    pub billboard: BillboardText,
    pub overlay: OverlayText,
}

impl Label {
    fn new(text: &str, measure: &dyn TextMeasure, style: &TextStyle, style_2d: &TextStyle, scale: f64) -> Self {
        let text: Arc<str> = Arc::from(text);
        Self {
            extent: measure.measure(&text, style),
            billboard: BillboardText::new(text.clone(), scale, style.clone()),
            overlay: OverlayText::new(text.clone(), style_2d.clone()),
            text,
        }
    }

    fn set_text(&mut self, text: &str, measure: &dyn TextMeasure) {
        if &*self.text == text {
            return;
        }
        let text: Arc<str> = Arc::from(text);
        self.extent = measure.measure(&text, &self.billboard.style);
        self.billboard.text = text.clone();
        self.overlay.text = text.clone();
        self.text = text;
    }

    /// 3D extent after the billboard scale.
    pub fn scaled_size(&self) -> DVec2 {
        self.extent.size() * self.billboard.scale
    }
}

/// The ordered labels of one axis, one per major tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelSet {
    labels: Vec<Label>,
}

impl LabelSet {
    /// Replace the label texts.
    ///
    /// A different count discards every label and starts fresh. The same
    /// count rewrites texts in place, keeping positions and styles. Returns
    /// `true` when the set was reallocated.
    pub fn replace<S: AsRef<str>>(
        &mut self,
        texts: &[S],
        measure: &dyn TextMeasure,
        style: &TextStyle,
        style_2d: &TextStyle,
        scale: f64,
    ) -> bool {
        if texts.len() != self.labels.len() {
            self.labels = texts
                .iter()
                .map(|t| Label::new(t.as_ref(), measure, style, style_2d, scale))
                .collect();
            return true;
        }
        for (label, text) in self.labels.iter_mut().zip(texts) {
            label.set_text(text.as_ref(), measure);
        }
        false
    }

    /// Apply new text styles and re-measure.
    pub fn restyle(&mut self, measure: &dyn TextMeasure, style: &TextStyle, style_2d: &TextStyle) {
        for label in &mut self.labels {
            label.billboard.style = style.clone();
            label.overlay.style = style_2d.clone();
            label.extent = measure.measure(&label.text, style);
        }
    }

    pub fn set_scale(&mut self, scale: f64) {
        for label in &mut self.labels {
            label.billboard.scale = scale;
        }
    }

    pub fn set_auto_center(&mut self, auto_center: bool) {
        for label in &mut self.labels {
            label.billboard.auto_center = auto_center;
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&Label> {
        self.labels.get(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Label> {
        self.labels.iter()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(|l| &*l.text)
    }

    /// Largest scaled width and height over the first `count` labels.
    pub fn max_scaled_size(&self, count: usize) -> DVec2 {
        self.labels
            .iter()
            .take(count)
            .fold(DVec2::ZERO, |m, l| m.max(l.scaled_size()))
    }

    /// Longest unscaled 3D diagonal over all labels.
    pub fn max_diagonal(&self) -> f64 {
        self.labels.iter().map(|l| l.extent.diagonal()).fold(0.0, f64::max)
    }
}

impl<'a> IntoIterator for &'a LabelSet {
    type Item = &'a Label;
    type IntoIter = std::slice::Iter<'a, Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}

/// Place 3D billboards next to their major ticks, pushed away from the
/// plot body by half their size plus the minor tick size.
///
/// Only `min(labels, major ticks)` labels are placed. With
/// `calculate_offset` off each label sits on its anchor and is centred by
/// the renderer. Returns the number of labels placed.
pub fn layout_3d(
    labels: &mut LabelSet,
    ticks: &TickPoints,
    frame: &AxisFrame,
    display: &DisplayBox,
    minor_tick_size: f64,
    calculate_offset: bool,
) -> usize {
    let mult = frame.text_multipliers();
    let adjust = dvec2(display.x_adjust(), display.y_adjust());
    let n = labels.len().min(ticks.major_count());

    for (i, label) in labels.labels.iter_mut().take(n).enumerate() {
        let Some(anchor) = ticks.label_anchor(i) else { break };
        if !calculate_offset {
            label.billboard.position = anchor;
            label.billboard.auto_center = true;
            continue;
        }
        let half = label.scaled_size() * 0.5;
        let push = mult * (half + DVec2::splat(minor_tick_size));
        let center = anchor + dvec3(push.x, push.y, 0.0);
        let corner = adjust * half;
        label.billboard.position = center - dvec3(corner.x, corner.y, 0.0);
        label.billboard.auto_center = false;
    }

    trace!(placed = n, "laid out 3D labels");
    n
}

/// The 2D counterpart of a 3D label style.
pub fn style_2d(base: &TextStyle) -> TextStyle {
    base.clone()
        .with_font_size(defaults::LABEL_FONT_SIZE_2D)
        .with_justify(Justify::Left, VJustify::Bottom)
}

/// Fraction of the measured 2D box subtracted to anchor a label, per
/// display axis.
fn justification_2d(axis_type: AxisType) -> DVec2 {
    match axis_type {
        AxisType::X => dvec2(0.5, 1.0),
        AxisType::Y => dvec2(1.0, 0.5),
        AxisType::Z => dvec2(0.5, 0.5),
    }
}

/// Place 2D overlay labels in display space.
///
/// Each anchor is pushed out by the minor tick size in world space,
/// projected, and shifted by the measured text box so the text clears the
/// tick. Returns the number of labels placed.
#[allow(clippy::too_many_arguments)]
pub fn layout_2d(
    labels: &mut LabelSet,
    ticks: &TickPoints,
    axis_type: AxisType,
    frame: &AxisFrame,
    viewport: &dyn Viewport,
    display: &DisplayBox,
    minor_tick_size: f64,
    measure: &dyn TextMeasure,
) -> usize {
    let mult = frame.text_multipliers();
    let adjust = dvec2(display.x_adjust(), display.y_adjust());
    let coeff = justification_2d(axis_type);
    let n = labels.len().min(ticks.major_count());

    for (i, label) in labels.labels.iter_mut().take(n).enumerate() {
        let Some(anchor) = ticks.label_anchor(i) else { break };
        let push = mult * minor_tick_size;
        let projected = viewport.world_to_display(anchor + dvec3(push.x, push.y, 0.0));
        let size = measure.measure(&label.text, &label.overlay.style).size();
        label.overlay.position = projected.truncate() - adjust * size * coeff;
    }

    trace!(placed = n, "laid out 2D labels");
    n
}
