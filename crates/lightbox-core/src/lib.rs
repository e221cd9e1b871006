//! Lightbox Core - Viewport and coordinate-transform state
//!
//! This crate provides the view-state management for the Lightbox image
//! viewer: mapping between image space and screen space under user zoom,
//! pan and 90°-step rotation, with all derived geometry recomputed as a
//! unit on every change.
//!
//! # Module Structure
//!
//! - `viewport` - The viewport state machine (zoom, pan, rotation, derived
//!   bounds, cache generation, transform descriptors)
//! - `geometry` - The `Rect` primitive shared by both coordinate spaces
//! - `transform` - Typed transform descriptors and their textual rendering
//! - `display` - Injected host display parameters (device pixel ratio)
//!
//! # Usage
//!
//! ```ignore
//! use lightbox_core::{DisplayEnvironment, Viewport};
//!
//! let mut viewport = Viewport::new(DisplayEnvironment::new(2.0));
//! viewport.set_screen_size(500.0, 500.0);
//! viewport.set_image_size(1000.0, 500.0);
//! viewport.zoom_in();
//!
//! // Position the displayed element.
//! let css = viewport.transformation().to_string();
//!
//! // Rebuild the off-screen cache only when this changes.
//! let generation = viewport.cache_generation();
//! ```

pub mod display;
pub mod geometry;
pub mod transform;
pub mod viewport;

pub use display::DisplayEnvironment;
pub use geometry::Rect;
pub use transform::{Transform, TransformOp};
pub use viewport::Viewport;
