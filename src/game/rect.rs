//! Axis-aligned rectangle in world space
//!
//! World space is bottom-left origin, y up: `y` is the bottom edge and
//! `top()` is `y + h`.

/// A rectangle defined by its bottom-left corner and size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
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

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Top edge
    pub fn top(&self) -> f32 {
        self.y + self.h
    }

    /// Strict AABB intersection: the overlap must have non-zero area on both
    /// axes, so rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.top()
            && self.top() > other.y
    }

    /// Entirely below the bottom edge of the screen
    pub fn is_below_screen(&self) -> bool {
        self.top() < 0.0
    }

    /// Clamp x so the rectangle stays within `[0, max_width]` horizontally.
    /// When the rectangle is wider than `max_width`, it sticks to 0.
    pub fn clamp_x(&mut self, max_width: f32) {
        let max_x = (max_width - self.w).max(0.0);
        self.x = self.x.clamp(0.0, max_x);
    }
}
