//! Typed visual-transform descriptors.
//!
//! The viewport describes how the displayed image element should be moved,
//! rotated and scaled as an ordered list of operations instead of a
//! pre-rendered string. Consumers compose and inspect the ops; the `Display`
//! impls render the CSS-style textual form at the presentation boundary.
//!
//! # Composition Order
//!
//! Operations apply left to right: a descriptor of
//! `[Translate, Rotate, Scale]` translates first, then rotates, then scales.
//! The chained descriptor variants produced by the viewport (shift,
//! inverse-rotation, inverse-crop, screen-rect-fit) prefix their extra ops
//! before the base ops, and consumers rely on that ordering for correct
//! visual composition.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single visual-transform operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TransformOp {
    /// Translate by `(dx, dy)` screen pixels.
    Translate { dx: f64, dy: f64 },
    /// Translate along the X axis only, in screen pixels.
    TranslateX { dx: f64 },
    /// Rotate clockwise by `degrees`.
    Rotate { degrees: f64 },
    /// Uniform scale.
    Scale { factor: f64 },
    /// Per-axis scale.
    ScaleAxes { sx: f64, sy: f64 },
}

impl fmt::Display for TransformOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TransformOp::Translate { dx, dy } => write!(f, "translate({dx}px, {dy}px)"),
            TransformOp::TranslateX { dx } => write!(f, "translateX({dx}px)"),
            TransformOp::Rotate { degrees } => write!(f, "rotate({degrees}deg)"),
            TransformOp::Scale { factor } => write!(f, "scale({factor})"),
            TransformOp::ScaleAxes { sx, sy } => write!(f, "scale({sx}, {sy})"),
        }
    }
}

/// An ordered sequence of transform operations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Transform {
    ops: Vec<TransformOp>,
}

impl Transform {
    /// Build a descriptor from ops in application order.
    pub fn new(ops: Vec<TransformOp>) -> Self {
        Self { ops }
    }

    /// The operations in application order.
    pub fn ops(&self) -> &[TransformOp] {
        &self.ops
    }

    /// Consume the descriptor, yielding its ops.
    pub fn into_ops(self) -> Vec<TransformOp> {
        self.ops
    }
}

impl fmt::Display for Transform {
    /// Renders the space-joined textual form, e.g.
    /// `translate(10px, 0px) rotate(90deg) scale(2)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{op}")?;
        }
        Ok(())
    }
}
