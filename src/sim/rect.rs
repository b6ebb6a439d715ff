//! Axis-aligned rectangle geometry
//!
//! Screen coordinates: origin at the top-left, y increases downward.
//! A rectangle spans `[x, x + w]` horizontally and `[y, y + h]` vertically.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle with its top-left corner at `pos`
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    /// Square box of side `side` at `pos` (the ball's collision box)
    pub fn square(pos: Vec2, side: f32) -> Self {
        Self::new(pos.x, pos.y, side, side)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict AABB overlap; touching edges do not count
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Whether `x` lies outside the horizontal span `[x, x + w]`
    #[inline]
    pub fn outside_x_span(&self, x: f32) -> bool {
        x < self.x || x > self.right()
    }

    /// Same rectangle grown by `factor` of its size, keeping the center fixed
    pub fn scaled_about_center(&self, factor: f32) -> Self {
        let c = self.center();
        let w = self.w * factor;
        let h = self.h * factor;
        Self::new(c.x - w / 2.0, c.y - h / 2.0, w, h)
    }
}
