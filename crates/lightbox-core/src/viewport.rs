//! Viewport state for the image display surface.
//!
//! The [`Viewport`] maps between image space (native bitmap pixels) and
//! screen space (the display rectangle), applying user zoom, pan offset and
//! 90°-step rotation. Every mutator ends with a single synchronous recompute
//! of all derived geometry, so callers never observe a half-updated state.
//!
//! # Cache Generation
//!
//! Rendering layers keep an off-screen cache sized to the fitted image
//! element. [`Viewport::cache_generation`] increments only when that
//! element's pixel footprint changes size; pure pan, zoom and rotation
//! changes leave it untouched so caches are rebuilt only when they must be.

use crate::display::DisplayEnvironment;
use crate::geometry::Rect;
use crate::transform::{Transform, TransformOp};

/// View state for one displayed image.
///
/// Single-threaded by design: mutators rewrite several fields in sequence
/// with no lock, so callers must serialize access through a single owning
/// session.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    /// Size of the full resolution image, anchored at the origin.
    image_bounds: Rect,
    /// Size of the display area, anchored at the origin.
    screen_bounds: Rect,
    /// Bounds of the image element on screen without zoom and offset.
    /// `None` only before the constructor's initial recompute.
    image_element_bounds_on_screen: Option<Rect>,
    /// Bounds of the image on screen with zoom and offset applied.
    image_bounds_on_screen: Rect,
    /// `image_bounds_on_screen` clipped to the screen bounds.
    image_bounds_on_screen_clipped: Rect,
    /// Scale from the full resolution image to the fitted on-screen image.
    /// This is not the user-operated zoom.
    scale: f64,
    /// Zoom ratio from user operations.
    zoom: f64,
    /// Pan offset from user operations, in screen pixels.
    offset_x: f64,
    offset_y: f64,
    /// Rotation in units of 90° clockwise. Stored raw: only parity feeds the
    /// geometry math, the raw value feeds the descriptor angle.
    rotation: i32,
    /// Generation of the screen-size image cache. Incremented whenever the
    /// cache's pixel footprint changes size.
    generation: u64,
    /// Host display parameters.
    environment: DisplayEnvironment,
}

impl Viewport {
    /// Allowed zoom ratios, ascending. `set_zoom` clamps to the table's
    /// bounds; `zoom_in`/`zoom_out` step between entries.
    pub const ZOOM_RATIOS: [f64; 4] = [1.0, 1.5, 2.0, 3.0];

    /// Create a viewport with empty bounds and an identity view.
    pub fn new(environment: DisplayEnvironment) -> Self {
        let mut viewport = Self {
            image_bounds: Rect::default(),
            screen_bounds: Rect::default(),
            image_element_bounds_on_screen: None,
            image_bounds_on_screen: Rect::default(),
            image_bounds_on_screen_clipped: Rect::default(),
            scale: 1.0,
            zoom: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            rotation: 0,
            generation: 0,
            environment,
        };
        viewport.update();
        viewport
    }

    /// Set the native size of the displayed image.
    pub fn set_image_size(&mut self, width: f64, height: f64) {
        self.image_bounds = Rect::from_size(width, height);
        self.update();
    }

    /// Set the size of the display area.
    pub fn set_screen_size(&mut self, width: f64, height: f64) {
        self.screen_bounds = Rect::from_size(width, height);
        self.update();
    }

    /// Replace the host display parameters.
    pub fn set_environment(&mut self, environment: DisplayEnvironment) {
        self.environment = environment;
        self.update();
    }

    /// Set the zoom ratio, clamped to the bounds of [`Self::ZOOM_RATIOS`].
    pub fn set_zoom(&mut self, zoom: f64) {
        let zoom_min = Self::ZOOM_RATIOS[0];
        let zoom_max = Self::ZOOM_RATIOS[Self::ZOOM_RATIOS.len() - 1];
        self.zoom = zoom.clamp(zoom_min, zoom_max);
        self.update();
    }

    /// Step to the nearest strictly larger entry of [`Self::ZOOM_RATIOS`].
    /// At or beyond the maximum this is idempotent.
    pub fn zoom_in(&mut self) {
        let mut zoom = Self::ZOOM_RATIOS[0];
        for &ratio in &Self::ZOOM_RATIOS {
            zoom = ratio;
            if ratio > self.zoom {
                break;
            }
        }
        self.set_zoom(zoom);
    }

    /// Step to the nearest strictly smaller entry of [`Self::ZOOM_RATIOS`].
    /// At or below the minimum this is idempotent.
    pub fn zoom_out(&mut self) {
        let mut zoom = Self::ZOOM_RATIOS[Self::ZOOM_RATIOS.len() - 1];
        for &ratio in Self::ZOOM_RATIOS.iter().rev() {
            zoom = ratio;
            if ratio < self.zoom {
                break;
            }
        }
        self.set_zoom(zoom);
    }

    /// Current zoom ratio.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Whether the user has zoomed away from the fitted view.
    pub fn is_zoomed(&self) -> bool {
        self.zoom != 1.0
    }

    /// Set the rotation, in units of 90° clockwise. The value is stored as
    /// given; it is not normalized mod 4.
    pub fn set_rotation(&mut self, rotation: i32) {
        self.rotation = rotation;
        self.update();
    }

    /// Current rotation, in units of 90° clockwise.
    pub fn rotation(&self) -> i32 {
        self.rotation
    }

    /// Set the pan offset in screen pixels. A no-op when both values equal
    /// the stored offsets; otherwise the offsets are stored and re-clamped
    /// by the recompute.
    pub fn set_offset(&mut self, x: f64, y: f64) {
        if self.offset_x == x && self.offset_y == y {
            return;
        }
        self.offset_x = x;
        self.offset_y = y;
        self.update();
    }

    /// X pan offset in screen pixels.
    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    /// Y pan offset in screen pixels.
    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    /// The image bounds in image coordinates.
    pub fn image_bounds(&self) -> Rect {
        self.image_bounds
    }

    /// The screen bounds in screen coordinates.
    pub fn screen_bounds(&self) -> Rect {
        self.screen_bounds
    }

    /// The host display parameters in use.
    pub fn environment(&self) -> DisplayEnvironment {
        self.environment
    }

    /// The image bounds on screen with zoom and offset applied.
    pub fn image_bounds_on_screen(&self) -> Rect {
        self.image_bounds_on_screen
    }

    /// The fitted image element bounds on screen, before zoom and offset.
    pub fn image_element_bounds_on_screen(&self) -> Rect {
        self.image_element_bounds_on_screen.unwrap_or_default()
    }

    /// The image bounds on screen clipped to the screen bounds. Width or
    /// height may be zero or negative when the image lies off-screen.
    pub fn image_bounds_on_screen_clipped(&self) -> Rect {
        self.image_bounds_on_screen_clipped
    }

    /// Size of the screen cache buffer in physical device pixels.
    pub fn device_bounds(&self) -> Rect {
        let size = self.image_element_bounds_on_screen();
        Rect::from_size(
            size.width * self.environment.device_pixel_ratio,
            size.height * self.environment.device_pixel_ratio,
        )
    }

    /// Cache invalidation counter. Incremented each time the size of the
    /// screen cache changes; never decremented. Clients that cache pixels
    /// sized to the fitted element should rebuild when this changes.
    pub fn cache_generation(&self) -> u64 {
        self.generation
    }

    /// The fitted display scale for an image of the given size.
    ///
    /// Scales above `1 / device_pixel_ratio` are not used: they look soft,
    /// and there are no pixel-level operations that would benefit from them.
    fn fitting_scale_for_image_size(&self, width: f64, height: f64) -> f64 {
        let scale_x = self.screen_bounds.width / width;
        let scale_y = self.screen_bounds.height / height;
        (1.0 / self.environment.device_pixel_ratio)
            .min(scale_x)
            .min(scale_y)
    }

    /// Convert a size in screen coordinates to image coordinates.
    pub fn screen_to_image_size(&self, size: f64) -> f64 {
        size / self.scale
    }

    /// Convert an X coordinate on screen to image coordinates.
    pub fn screen_to_image_x(&self, x: f64) -> f64 {
        ((x - self.image_bounds_on_screen.left) / self.scale).round()
    }

    /// Convert a Y coordinate on screen to image coordinates.
    pub fn screen_to_image_y(&self, y: f64) -> f64 {
        ((y - self.image_bounds_on_screen.top) / self.scale).round()
    }

    /// Convert a rectangle in screen coordinates to image coordinates.
    /// Width and height are converted directly, not derived from converted
    /// corners.
    pub fn screen_to_image_rect(&self, rect: Rect) -> Rect {
        Rect::new(
            self.screen_to_image_x(rect.left),
            self.screen_to_image_y(rect.top),
            self.screen_to_image_size(rect.width),
            self.screen_to_image_size(rect.height),
        )
    }

    /// Convert a size in image coordinates to screen coordinates.
    pub fn image_to_screen_size(&self, size: f64) -> f64 {
        size * self.scale
    }

    /// Convert an X coordinate in the image to screen coordinates.
    pub fn image_to_screen_x(&self, x: f64) -> f64 {
        (self.image_bounds_on_screen.left + x * self.scale).round()
    }

    /// Convert a Y coordinate in the image to screen coordinates.
    pub fn image_to_screen_y(&self, y: f64) -> f64 {
        (self.image_bounds_on_screen.top + y * self.scale).round()
    }

    /// Convert a rectangle in image coordinates to screen coordinates.
    /// Width and height are rounded independently of the corners, so a
    /// screen→image→screen round trip of a rect is not guaranteed bit-exact.
    pub fn image_to_screen_rect(&self, rect: Rect) -> Rect {
        Rect::new(
            self.image_to_screen_x(rect.left),
            self.image_to_screen_y(rect.top),
            self.image_to_screen_size(rect.width).round(),
            self.image_to_screen_size(rect.height).round(),
        )
    }

    /// A rect of the given size centered in the screen, shifted by the
    /// given offset. Position truncates toward zero.
    fn centered_rect(&self, width: f64, height: f64, offset_x: f64, offset_y: f64) -> Rect {
        Rect::new(
            ((self.screen_bounds.width - width) / 2.0).trunc() + offset_x,
            ((self.screen_bounds.height - height) / 2.0).trunc() + offset_y,
            width,
            height,
        )
    }

    /// Restore the identity view: zoom 1, no offset, no rotation.
    pub fn reset_view(&mut self) {
        self.zoom = 1.0;
        self.offset_x = 0.0;
        self.offset_y = 0.0;
        self.rotation = 0;
        self.update();
    }

    /// Recompute all derived geometry from the current inputs.
    ///
    /// Runs at the end of every mutator so callers never observe stale or
    /// partially updated state.
    fn update(&mut self) {
        self.scale =
            self.fitting_scale_for_image_size(self.image_bounds.width, self.image_bounds.height);

        // Zoomed pixel footprint. An odd rotation transposes the on-screen
        // aspect ratio, so it gets its own best-fit scale for the swapped
        // dimensions.
        let (zoomed_width, zoomed_height) = if self.rotation % 2 == 0 {
            (
                (self.image_bounds.width * self.scale * self.zoom).trunc(),
                (self.image_bounds.height * self.scale * self.zoom).trunc(),
            )
        } else {
            let scale = self
                .fitting_scale_for_image_size(self.image_bounds.height, self.image_bounds.width);
            (
                (self.image_bounds.height * scale * self.zoom).trunc(),
                (self.image_bounds.width * scale * self.zoom).trunc(),
            )
        };

        // Limit offsets so the image cannot pan entirely off-screen.
        let dx = (zoomed_width - self.screen_bounds.width).max(0.0) / 2.0;
        let dy = (zoomed_height - self.screen_bounds.height).max(0.0) / 2.0;
        self.offset_x = self.offset_x.clamp(-dx, dx);
        self.offset_y = self.offset_y.clamp(-dy, dy);

        self.image_bounds_on_screen =
            self.centered_rect(zoomed_width, zoomed_height, self.offset_x, self.offset_y);

        // Element bounds (no zoom, no offset) drive the cache generation:
        // the screen cache must be rebuilt only when this footprint resizes.
        let old_bounds = self.image_element_bounds_on_screen;
        let element_bounds = self.centered_rect(
            (self.image_bounds.width * self.scale).trunc(),
            (self.image_bounds.height * self.scale).trunc(),
            0.0,
            0.0,
        );
        self.image_element_bounds_on_screen = Some(element_bounds);
        if old_bounds.is_none_or(|old| {
            element_bounds.width != old.width || element_bounds.height != old.height
        }) {
            self.generation += 1;
        }

        // Clip to the screen. Width/height may go negative when the image
        // is fully off-screen; that is left as-is.
        let left = self.image_bounds_on_screen.left.max(0.0);
        let top = self.image_bounds_on_screen.top.max(0.0);
        let right = self.image_bounds_on_screen.right().min(self.screen_bounds.width);
        let bottom = self
            .image_bounds_on_screen
            .bottom()
            .min(self.screen_bounds.height);
        self.image_bounds_on_screen_clipped = Rect::new(left, top, right - left, bottom - top);
    }

    /// Ops of the base transform, in application order.
    fn base_transform_ops(&self) -> Vec<TransformOp> {
        // `scale` was fitted to the unrotated orientation; for odd rotations
        // the displayed element must be corrected by the ratio between the
        // swapped-orientation fit and the stored scale.
        let rotation_scale_adjustment = if self.rotation % 2 != 0 {
            self.fitting_scale_for_image_size(self.image_bounds.height, self.image_bounds.width)
                / self.scale
        } else {
            1.0
        };
        vec![
            TransformOp::Translate {
                dx: self.offset_x,
                dy: self.offset_y,
            },
            TransformOp::Rotate {
                degrees: f64::from(self.rotation) * 90.0,
            },
            TransformOp::Scale {
                factor: self.zoom * rotation_scale_adjustment,
            },
        ]
    }

    /// The transform that positions the screen image for the current view:
    /// translate by the pan offset, rotate, then scale.
    pub fn transformation(&self) -> Transform {
        Transform::new(self.base_transform_ops())
    }

    /// The base transform prefixed with a horizontal shift. Used for slide
    /// transitions between images.
    pub fn shift_transformation(&self, dx: f64) -> Transform {
        let mut ops = vec![TransformOp::TranslateX { dx }];
        ops.extend(self.base_transform_ops());
        Transform::new(ops)
    }

    /// The transform that makes a freshly rotated image (now stored at
    /// swapped dimensions) look like the image did before the rotation.
    /// Applied while a rotation commit animates.
    ///
    /// `clockwise` is the direction the image content was rotated in.
    pub fn inverse_transform_for_rotated_image(&self, clockwise: bool) -> Transform {
        let previous_image_width = self.image_bounds.height;
        let previous_image_height = self.image_bounds.width;
        let old_scale =
            self.fitting_scale_for_image_size(previous_image_width, previous_image_height);
        let degrees = if clockwise { -90.0 } else { 90.0 };
        let mut ops = vec![
            TransformOp::Scale {
                factor: old_scale / self.scale,
            },
            TransformOp::Rotate { degrees },
        ];
        ops.extend(self.base_transform_ops());
        Transform::new(ops)
    }

    /// The transform that makes a freshly cropped image appear in the same
    /// screen position and size the crop rectangle occupied within the
    /// original image. Applied while a crop commit animates.
    ///
    /// `image_width`/`image_height` are the original image dimensions and
    /// `image_crop_rect` is the crop rectangle in image coordinates.
    pub fn inverse_transform_for_cropped_image(
        &self,
        image_width: f64,
        image_height: f64,
        image_crop_rect: Rect,
    ) -> Transform {
        let whole_scale = self.fitting_scale_for_image_size(image_width, image_height);
        let cropped_scale =
            self.fitting_scale_for_image_size(image_crop_rect.width, image_crop_rect.height);
        let dx =
            (image_crop_rect.left + image_crop_rect.width / 2.0 - image_width / 2.0) * whole_scale;
        let dy =
            (image_crop_rect.top + image_crop_rect.height / 2.0 - image_height / 2.0) * whole_scale;
        let mut ops = vec![
            TransformOp::Translate { dx, dy },
            TransformOp::Scale {
                factor: whole_scale / cropped_scale,
            },
        ];
        ops.extend(self.base_transform_ops());
        Transform::new(ops)
    }

    /// The transform that makes the fitted image element occupy the given
    /// screen rectangle, with independent X/Y scale factors.
    pub fn screen_rect_transform_for_image(&self, screen_rect: Rect) -> Transform {
        let image_bounds = self.image_element_bounds_on_screen();
        let sx = screen_rect.width / image_bounds.width;
        let sy = screen_rect.height / image_bounds.height;
        let dx = screen_rect.left + screen_rect.width / 2.0 - self.screen_bounds.width / 2.0;
        let dy = screen_rect.top + screen_rect.height / 2.0 - self.screen_bounds.height / 2.0;
        let mut ops = vec![
            TransformOp::Translate { dx, dy },
            TransformOp::ScaleAxes { sx, sy },
        ];
        ops.extend(self.base_transform_ops());
        Transform::new(ops)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DisplayEnvironment::default())
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for image and screen dimensions.
    fn dimensions_strategy() -> impl Strategy<Value = (f64, f64, f64, f64)> {
        (
            10.0f64..=4000.0, // image width
            10.0f64..=4000.0, // image height
            50.0f64..=2000.0, // screen width
            50.0f64..=2000.0, // screen height
        )
    }

    fn viewport_strategy() -> impl Strategy<Value = Viewport> {
        (dimensions_strategy(), 1.0f64..=2.0).prop_map(
            |((image_w, image_h, screen_w, screen_h), ratio)| {
                let mut viewport = Viewport::new(DisplayEnvironment::new(ratio));
                viewport.set_screen_size(screen_w, screen_h);
                viewport.set_image_size(image_w, image_h);
                viewport
            },
        )
    }

    /// A single user-driven mutation, for sequence properties.
    #[derive(Debug, Clone)]
    enum Mutation {
        Zoom(f64),
        ZoomIn,
        ZoomOut,
        Rotate(i32),
        Offset(f64, f64),
        ScreenSize(f64, f64),
        ImageSize(f64, f64),
        Reset,
    }

    fn mutation_strategy() -> impl Strategy<Value = Mutation> {
        prop_oneof![
            (0.0f64..=5.0).prop_map(Mutation::Zoom),
            Just(Mutation::ZoomIn),
            Just(Mutation::ZoomOut),
            (-4i32..=8).prop_map(Mutation::Rotate),
            (-3000.0f64..=3000.0, -3000.0f64..=3000.0)
                .prop_map(|(x, y)| Mutation::Offset(x, y)),
            (50.0f64..=2000.0, 50.0f64..=2000.0)
                .prop_map(|(w, h)| Mutation::ScreenSize(w, h)),
            (10.0f64..=4000.0, 10.0f64..=4000.0)
                .prop_map(|(w, h)| Mutation::ImageSize(w, h)),
            Just(Mutation::Reset),
        ]
    }

    fn apply(viewport: &mut Viewport, mutation: &Mutation) {
        match *mutation {
            Mutation::Zoom(z) => viewport.set_zoom(z),
            Mutation::ZoomIn => viewport.zoom_in(),
            Mutation::ZoomOut => viewport.zoom_out(),
            Mutation::Rotate(r) => viewport.set_rotation(r),
            Mutation::Offset(x, y) => viewport.set_offset(x, y),
            Mutation::ScreenSize(w, h) => viewport.set_screen_size(w, h),
            Mutation::ImageSize(w, h) => viewport.set_image_size(w, h),
            Mutation::Reset => viewport.reset_view(),
        }
    }

    /// The maximum pan magnitude implied by the current state, recomputed
    /// from the public accessors.
    fn pan_limits(viewport: &Viewport) -> (f64, f64) {
        let footprint = viewport.image_bounds_on_screen();
        let screen = viewport.screen_bounds();
        (
            (footprint.width - screen.width).max(0.0) / 2.0,
            (footprint.height - screen.height).max(0.0) / 2.0,
        )
    }

    proptest! {
        /// Property: `set_zoom` always lands within the ratio table bounds,
        /// and preserves in-range values exactly.
        #[test]
        fn prop_zoom_clamped(mut viewport in viewport_strategy(), z in -10.0f64..=10.0) {
            viewport.set_zoom(z);
            let zoom = viewport.zoom();
            prop_assert!(zoom >= 1.0 && zoom <= 3.0);
            if (1.0..=3.0).contains(&z) {
                prop_assert_eq!(zoom, z);
            }
        }

        /// Property: offsets always lie within the pan range implied by the
        /// current footprint, whatever was requested.
        #[test]
        fn prop_offsets_within_pan_range(
            mut viewport in viewport_strategy(),
            z in 0.0f64..=5.0,
            rotation in -4i32..=8,
            x in -10000.0f64..=10000.0,
            y in -10000.0f64..=10000.0,
        ) {
            viewport.set_zoom(z);
            viewport.set_rotation(rotation);
            viewport.set_offset(x, y);
            let (dx, dy) = pan_limits(&viewport);
            prop_assert!(viewport.offset_x() >= -dx && viewport.offset_x() <= dx);
            prop_assert!(viewport.offset_y() >= -dy && viewport.offset_y() <= dy);
        }

        /// Property: the cache generation never decreases, across any
        /// sequence of mutations.
        #[test]
        fn prop_generation_monotonic(
            mut viewport in viewport_strategy(),
            mutations in prop::collection::vec(mutation_strategy(), 1..30),
        ) {
            let mut previous = viewport.cache_generation();
            for mutation in &mutations {
                apply(&mut viewport, mutation);
                let current = viewport.cache_generation();
                prop_assert!(current >= previous);
                previous = current;
            }
        }

        /// Property: pan, zoom and rotation alone never bump the generation.
        #[test]
        fn prop_generation_ignores_view_changes(
            mut viewport in viewport_strategy(),
            z in 0.0f64..=5.0,
            rotation in -4i32..=8,
            x in -10000.0f64..=10000.0,
            y in -10000.0f64..=10000.0,
        ) {
            let generation = viewport.cache_generation();
            viewport.set_zoom(z);
            viewport.set_rotation(rotation);
            viewport.set_offset(x, y);
            viewport.reset_view();
            prop_assert_eq!(viewport.cache_generation(), generation);
        }

        /// Property: x-coordinate round trips within one unit when the image
        /// fits without downscaling.
        #[test]
        fn prop_round_trip_within_one_unit(
            image_w in 10.0f64..=300.0,
            image_h in 10.0f64..=300.0,
            px in 0u32..=300,
        ) {
            let mut viewport = Viewport::default();
            viewport.set_screen_size(400.0, 400.0);
            viewport.set_image_size(image_w, image_h);
            let x = f64::from(px).min(image_w);
            let round_trip = viewport.screen_to_image_x(viewport.image_to_screen_x(x));
            prop_assert!((round_trip - x).abs() <= 1.0);
        }

        /// Property: repeated `zoom_in` reaches the maximum ratio and stays
        /// there; symmetric for `zoom_out` at the minimum.
        #[test]
        fn prop_zoom_ladder_saturates(mut viewport in viewport_strategy(), z in 0.0f64..=5.0) {
            viewport.set_zoom(z);
            for _ in 0..Viewport::ZOOM_RATIOS.len() + 1 {
                viewport.zoom_in();
            }
            prop_assert_eq!(viewport.zoom(), 3.0);
            viewport.zoom_in();
            prop_assert_eq!(viewport.zoom(), 3.0);

            for _ in 0..Viewport::ZOOM_RATIOS.len() + 1 {
                viewport.zoom_out();
            }
            prop_assert_eq!(viewport.zoom(), 1.0);
            viewport.zoom_out();
            prop_assert_eq!(viewport.zoom(), 1.0);
        }

        /// Property: `reset_view` restores the plain fitted state.
        #[test]
        fn prop_reset_restores_fitted_state(
            mut viewport in viewport_strategy(),
            mutations in prop::collection::vec(mutation_strategy(), 1..10),
        ) {
            let fitted = viewport.image_bounds_on_screen();
            for mutation in &mutations {
                // Size changes move the fitted state itself; skip them here.
                match mutation {
                    Mutation::ScreenSize(..) | Mutation::ImageSize(..) => continue,
                    _ => apply(&mut viewport, mutation),
                }
            }
            viewport.reset_view();
            prop_assert_eq!(viewport.zoom(), 1.0);
            prop_assert_eq!(viewport.offset_x(), 0.0);
            prop_assert_eq!(viewport.offset_y(), 0.0);
            prop_assert_eq!(viewport.rotation(), 0);
            prop_assert_eq!(viewport.image_bounds_on_screen(), fitted);
        }

        /// Property: a clone matches the source exactly at clone time and
        /// diverges independently afterwards.
        #[test]
        fn prop_clone_matches_then_diverges(mut viewport in viewport_strategy()) {
            let mut copy = viewport.clone();
            prop_assert_eq!(&copy, &viewport);
            copy.set_zoom(3.0);
            copy.set_screen_size(64.0, 64.0);
            prop_assert_eq!(viewport.zoom(), 1.0);
        }
    }
}
