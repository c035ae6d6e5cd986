//! Retained drawables handed to the renderer.
//!
//! Point and index storage is reference counted, so a frame that skips the
//! rebuild hands the renderer the exact same buffers as the frame before.

use std::sync::Arc;

use enum_dispatch::enum_dispatch;
use glam::{DVec2, DVec3};

use crate::text::TextStyle;

/// Which render pass a draw call belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderPass {
    Opaque,
    Translucent,
    /// Screen-space text drawn over the scene
    Overlay,
}

/// Shared behaviour of every drawable
#[enum_dispatch]
pub trait Primitive {
    /// Number of elements (segments, quads or text runs) that would be drawn.
    fn element_count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.element_count() == 0
    }

    fn kind(&self) -> &'static str;
}

/// Points plus pairs of indices into them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineSet {
    pub points: Arc<[DVec3]>,
    pub segments: Arc<[[u32; 2]]>,
}

impl LineSet {
    pub fn new(points: Vec<DVec3>, segments: Vec<[u32; 2]>) -> Self {
        Self { points: points.into(), segments: segments.into() }
    }

    /// World-space endpoints of every segment.
    pub fn segment_points(&self) -> impl Iterator<Item = (DVec3, DVec3)> + '_ {
        self.segments
            .iter()
            .map(|&[a, b]| (self.points[a as usize], self.points[b as usize]))
    }
}

impl Primitive for LineSet {
    fn element_count(&self) -> usize {
        self.segments.len()
    }

    fn kind(&self) -> &'static str {
        "lines"
    }
}

/// Points plus quads of indices into them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolySet {
    pub points: Arc<[DVec3]>,
    pub quads: Arc<[[u32; 4]]>,
}

impl PolySet {
    pub fn new(points: Vec<DVec3>, quads: Vec<[u32; 4]>) -> Self {
        Self { points: points.into(), quads: quads.into() }
    }
}

impl Primitive for PolySet {
    fn element_count(&self) -> usize {
        self.quads.len()
    }

    fn kind(&self) -> &'static str {
        "polys"
    }
}

/// World-space text that always faces the camera
#[derive(Debug, Clone, PartialEq)]
pub struct BillboardText {
    pub text: Arc<str>,
    /// Lower-left corner, or the centre when `auto_center` is set
    pub position: DVec3,
    pub scale: f64,
    /// Let the renderer centre the text on `position`
    pub auto_center: bool,
    pub style: TextStyle,
}

impl BillboardText {
    pub fn new(text: Arc<str>, scale: f64, style: TextStyle) -> Self {
        Self { text, position: DVec3::ZERO, scale, auto_center: false, style }
    }
}

impl Primitive for BillboardText {
    fn element_count(&self) -> usize {
        usize::from(!self.text.is_empty())
    }

    fn kind(&self) -> &'static str {
        "billboard"
    }
}

/// Display-space text
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayText {
    pub text: Arc<str>,
    /// Display coordinates of the justification anchor
    pub position: DVec2,
    pub style: TextStyle,
    /// Counter-clockwise rotation in degrees
    pub orientation: f64,
}

impl OverlayText {
    pub fn new(text: Arc<str>, style: TextStyle) -> Self {
        Self { text, position: DVec2::ZERO, style, orientation: 0.0 }
    }
}

impl Primitive for OverlayText {
    fn element_count(&self) -> usize {
        usize::from(!self.text.is_empty())
    }

    fn kind(&self) -> &'static str {
        "overlay"
    }
}

/// Anything the axis can ask a renderer to draw
#[enum_dispatch(Primitive)]
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Lines(LineSet),
    Polys(PolySet),
    Billboard(BillboardText),
    Overlay(OverlayText),
}

/// Renderer seam. Implementations decide how drawables reach the screen.
pub trait RenderTarget {
    /// Draw one primitive in `pass`, returning how many elements were drawn.
    fn draw(&mut self, drawable: &Drawable, pass: RenderPass) -> usize;

    /// Free any renderer-side resources held for `drawable`.
    fn release(&mut self, _drawable: &Drawable) {}
}

/// A [`RenderTarget`] that records every call, for inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingTarget {
    pub draws: Vec<(RenderPass, Drawable)>,
    pub released: Vec<Drawable>,
}

impl RecordingTarget {
    pub fn clear(&mut self) {
        self.draws.clear();
        self.released.clear();
    }

    pub fn in_pass(&self, pass: RenderPass) -> impl Iterator<Item = &Drawable> + '_ {
        self.draws.iter().filter(move |(p, _)| *p == pass).map(|(_, d)| d)
    }
}

impl RenderTarget for RecordingTarget {
    fn draw(&mut self, drawable: &Drawable, pass: RenderPass) -> usize {
        let n = drawable.element_count();
        self.draws.push((pass, drawable.clone()));
        n
    }

    fn release(&mut self, drawable: &Drawable) {
        self.released.push(drawable.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec3;

    #[test]
    fn line_set_segments_resolve_points() {
        let lines = LineSet::new(vec![DVec3::ZERO, dvec3(1.0, 0.0, 0.0)], vec![[0, 1]]);
        let segs: Vec<_> = lines.segment_points().collect();
        assert_eq!(segs, vec![(DVec3::ZERO, dvec3(1.0, 0.0, 0.0))]);
    }

    #[test]
    fn dispatch_through_drawable() {
        let d: Drawable = PolySet::new(vec![DVec3::ZERO; 4], vec![[0, 1, 2, 3]]).into();
        assert_eq!(d.element_count(), 1);
        assert_eq!(d.kind(), "polys");

        let empty: Drawable = OverlayText::new(Arc::from(""), TextStyle::default()).into();
        assert!(empty.is_empty());
    }

    #[test]
    fn release_is_optional() {
        struct DrawOnly(usize);
        impl RenderTarget for DrawOnly {
            fn draw(&mut self, drawable: &Drawable, _pass: RenderPass) -> usize {
                self.0 += 1;
                drawable.element_count()
            }
        }

        let mut target = DrawOnly(0);
        let lines: Drawable = LineSet::new(vec![DVec3::ZERO; 2], vec![[0, 1]]).into();
        assert_eq!(target.draw(&lines, RenderPass::Opaque), 1);
        target.release(&lines);
        assert_eq!(target.0, 1);
    }

    #[test]
    fn recording_target_counts_elements() {
        let mut target = RecordingTarget::default();
        let lines: Drawable = LineSet::new(vec![DVec3::ZERO; 4], vec![[0, 1], [2, 3]]).into();
        assert_eq!(target.draw(&lines, RenderPass::Opaque), 2);
        assert_eq!(target.in_pass(RenderPass::Opaque).count(), 1);
        assert_eq!(target.in_pass(RenderPass::Overlay).count(), 0);
    }
}
