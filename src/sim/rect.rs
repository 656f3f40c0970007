//! Axis-aligned rectangle geometry for the bird and pipes
//!
//! Screen space: x grows right, y grows down. A rectangle is its top-left
//! corner plus width and height.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
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

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Horizontal center, halving the width with integer division
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + (self.w / 2.0).floor()
    }

    /// Strict AABB overlap; rectangles that only share an edge do not intersect
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Shift left by `dx` pixels
    #[inline]
    pub fn shift_left(&mut self, dx: f32) {
        self.x -= dx;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let bird = Rect::new(50.0, 200.0, 34.0, 24.0);
        let pipe = Rect::new(50.0, 190.0, 52.0, 320.0);
        assert!(bird.intersects(&pipe));
        assert!(pipe.intersects(&bird));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_center_uses_integer_half_width() {
        assert_eq!(Rect::new(100.0, 0.0, 52.0, 320.0).center_x(), 126.0);
        assert_eq!(Rect::new(50.0, 0.0, 35.0, 24.0).center_x(), 67.0);
    }
}
