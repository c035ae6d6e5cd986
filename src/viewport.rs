//! Projection collaborator.
//!
//! Display space follows the usual render-window convention: origin at the
//! bottom-left corner, x to the right, y up, in pixels; z is the depth in
//! `[0, 1]`.

use glam::{DMat4, DVec3, dvec3};

use crate::stamp::Stamp;
use crate::types::{Bounds, DisplayBox};

/// World → display transform plus a modification stamp
pub trait Viewport {
    /// Project a world-space point to display coordinates.
    fn world_to_display(&self, world: DVec3) -> DVec3;

    /// Stamp of the last change that can move projected points (camera, size).
    fn modified(&self) -> Stamp;

    /// Project the bounding box's min and max corners.
    fn project_bounds(&self, bounds: &Bounds) -> DisplayBox {
        DisplayBox {
            min: self.world_to_display(bounds.min_corner()),
            max: self.world_to_display(bounds.max_corner()),
        }
    }
}

/// A viewport described by a view-projection matrix and a pixel size.
#[derive(Debug, Clone)]
pub struct MatrixViewport {
    view_projection: DMat4,
    width: f64,
    height: f64,
    stamp: Stamp,
}

impl MatrixViewport {
    pub fn new(view_projection: DMat4, width: f64, height: f64) -> Self {
        Self {
            view_projection,
            width,
            height,
            stamp: Stamp::next(),
        }
    }

    /// Orthographic front view (looking down -z) framing `bounds` in a
    /// `width × height` window.
    pub fn front(bounds: &Bounds, width: f64, height: f64) -> Self {
        let b = bounds.0;
        let depth = (b[5] - b[4]).abs().max(1.0);
        let proj = DMat4::orthographic_rh_gl(b[0], b[1], b[2], b[3], -b[5] - depth, -b[4] + depth);
        Self::new(proj, width, height)
    }

    pub fn view_projection(&self) -> DMat4 {
        self.view_projection
    }

    pub fn set_view_projection(&mut self, m: DMat4) {
        if self.view_projection != m {
            self.view_projection = m;
            self.stamp.touch();
        }
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        if self.width != width || self.height != height {
            self.width = width;
            self.height = height;
            self.stamp.touch();
        }
    }
}

impl Viewport for MatrixViewport {
    fn world_to_display(&self, world: DVec3) -> DVec3 {
        let ndc = self.view_projection.project_point3(world);
        dvec3(
            (ndc.x + 1.0) * 0.5 * self.width,
            (ndc.y + 1.0) * 0.5 * self.height,
            (ndc.z + 1.0) * 0.5,
        )
    }

    fn modified(&self) -> Stamp {
        self.stamp
    }
}
