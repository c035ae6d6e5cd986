//! The axis title.

use std::sync::Arc;

use glam::{DVec2, DVec3, dvec3};

use super::defaults;
use super::frame::AxisFrame;
use super::labels::LabelSet;
use super::primitives::{BillboardText, OverlayText};
use super::spec::AxisType;
use crate::log::trace;
use crate::text::{Justify, TextMeasure, TextStyle, VJustify};
use crate::types::TextBox;
use crate::viewport::Viewport;

/// Pinning of the 2D title position
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TitleLock {
    /// Follow the axis every layout
    #[default]
    Free,
    /// Capture the next computed position and keep it
    Armed,
    Locked(DVec2),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Title {
    pub text: Arc<str>,
    /// Unscaled 3D extent of the text
    pub extent: TextBox,
    pub billboard: BillboardText,
    pub overlay: OverlayText,
    pub lock: TitleLock,
}

impl Title {
    pub fn new(style: TextStyle, style_2d: TextStyle, scale: f64) -> Self {
        let text: Arc<str> = Arc::from("");
        Self {
            extent: TextBox::EMPTY,
            billboard: BillboardText::new(text.clone(), scale, style),
            overlay: OverlayText::new(text.clone(), style_2d),
            lock: TitleLock::Free,
            text,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns `false` when `text` equals the current title.
    pub fn set_text(&mut self, text: &str, measure: &dyn TextMeasure) -> bool {
        if &*self.text == text {
            return false;
        }
        let text: Arc<str> = Arc::from(text);
        self.extent = measure.measure(&text, &self.billboard.style);
        self.billboard.text = text.clone();
        self.overlay.text = text.clone();
        self.text = text;
        true
    }

    pub fn restyle(&mut self, measure: &dyn TextMeasure, style: TextStyle, style_2d: TextStyle) {
        self.extent = measure.measure(&self.text, &style);
        self.billboard.style = style;
        self.overlay.style = style_2d;
    }

    pub fn scaled_size(&self) -> DVec2 {
        self.extent.size() * self.billboard.scale
    }
}

/// Centre the title on the axis, pushed outward past the widest/tallest of
/// the first `labels_built` labels.
pub fn layout_3d(
    title: &mut Title,
    labels: &LabelSet,
    labels_built: usize,
    point1: DVec3,
    point2: DVec3,
    frame: &AxisFrame,
    calculate_offset: bool,
) {
    let mut center = point1 + (point2 - point1) * 0.5;
    if calculate_offset {
        let max_label = labels.max_scaled_size(labels_built);
        let half = title.scaled_size() * 0.5;
        let mult = frame.text_multipliers();
        center += dvec3(
            mult.x * (half.x + max_label.x),
            mult.y * (half.y + 2.0 * max_label.y),
            0.0,
        );
    }
    title.billboard.position = center;
    title.billboard.auto_center = !calculate_offset;
    trace!(?center, "laid out 3D title");
}

/// Project the 3D title position and nudge it clear of the labels.
///
/// The result is clamped away from the bottom and left display edges. A
/// locked title keeps the position captured when the lock was armed.
pub fn layout_2d(title: &mut Title, axis_type: AxisType, viewport: &dyn Viewport) {
    let mut pos = viewport.world_to_display(title.billboard.position).truncate();
    match axis_type {
        AxisType::X => pos.y += defaults::TITLE_2D_X_NUDGE,
        AxisType::Y => pos.x += defaults::TITLE_2D_Y_NUDGE,
        AxisType::Z => {}
    }
    pos = pos.max(DVec2::splat(defaults::TITLE_2D_EDGE_MARGIN));

    title.overlay.position = match title.lock {
        TitleLock::Free => pos,
        TitleLock::Armed => {
            title.lock = TitleLock::Locked(pos);
            pos
        }
        TitleLock::Locked(fixed) => fixed,
    };

    if axis_type == AxisType::Y {
        let long = title.text.chars().count() > defaults::TITLE_2D_ROTATE_AFTER;
        title.overlay.orientation = if long { 90.0 } else { 0.0 };
    }
    trace!(position = ?title.overlay.position, "laid out 2D title");
}

/// The 2D counterpart of a 3D title style: larger and centred on both axes.
pub fn style_2d(base: &TextStyle) -> TextStyle {
    base.clone()
        .with_font_size(defaults::TITLE_FONT_SIZE_2D)
        .with_justify(Justify::Center, VJustify::Center)
}
