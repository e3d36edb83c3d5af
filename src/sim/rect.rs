//! Axis-aligned rectangle geometry
//!
//! Every collider in the game is a `Rect` in integer screen pixels:
//! - x, y: top-left corner (y grows downward)
//! - width, height: extents, never negative
//!
//! Edge setters move the rectangle without resizing it, which is how the
//! collision resolver clamps the player against a platform.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        debug_assert!(width >= 0 && height >= 0, "negative rect extent");
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    #[inline]
    pub fn set_left(&mut self, left: i32) {
        self.x = left;
    }

    #[inline]
    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.width;
    }

    #[inline]
    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    #[inline]
    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.height;
    }

    /// Move by an offset
    pub fn translate(&mut self, offset: IVec2) {
        self.x += offset.x;
        self.y += offset.y;
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Check whether two rectangles overlap
///
/// Half-open intervals on both axes: rectangles that only share an edge do not
/// collide, and an empty rectangle never collides with anything.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.left() < b.right() && b.left() < a.right() && a.top() < b.bottom() && b.top() < a.bottom()
}
