//! Geometry primitives shared by image space and screen space.
//!
//! # Coordinate System
//!
//! - Image space: native image pixels, origin at the top-left corner
//! - Screen space: display pixels, origin at the top-left of the display area
//!
//! Both spaces grow rightwards and downwards.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle with floating point edges.
///
/// `right` and `bottom` are derived from the stored edges, never stored
/// themselves. Width and height are allowed to be zero or negative; callers
/// that clip rectangles rely on that (a fully off-screen image produces a
/// degenerate clipped rect rather than an error).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its left/top corner and size.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Create a rectangle of the given size anchored at the origin.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Right edge (`left + width`).
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge (`top + height`).
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_size_anchors_at_origin() {
        let r = Rect::from_size(100.0, 50.0);
        assert_eq!(r.left, 0.0);
        assert_eq!(r.top, 0.0);
        assert_eq!(r.width, 100.0);
        assert_eq!(r.height, 50.0);
    }

    #[test]
    fn test_derived_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 70.0);
    }

    #[test]
    fn test_negative_size_allowed() {
        let r = Rect::new(10.0, 10.0, -5.0, -5.0);
        assert_eq!(r.right(), 5.0);
        assert_eq!(r.bottom(), 5.0);
    }

    #[test]
    fn test_default_is_empty() {
        let r = Rect::default();
        assert_eq!(r, Rect::from_size(0.0, 0.0));
    }
}
