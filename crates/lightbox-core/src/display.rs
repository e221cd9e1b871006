//! Host display parameters.
//!
//! The viewport math depends on the physical pixel density of the display it
//! renders to. That value is injected here as plain data rather than read
//! from ambient global state, so the viewport can be driven headlessly in
//! tests and so hosts with multiple displays can report the ratio of
//! whichever display currently shows the image.

use serde::{Deserialize, Serialize};

/// Display parameters supplied by the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayEnvironment {
    /// Physical device pixels per logical screen pixel. Positive, typically
    /// `>= 1.0` (e.g. `2.0` on a HiDPI display).
    pub device_pixel_ratio: f64,
}

impl DisplayEnvironment {
    /// Create an environment with the given device pixel ratio.
    pub fn new(device_pixel_ratio: f64) -> Self {
        Self { device_pixel_ratio }
    }
}

impl Default for DisplayEnvironment {
    fn default() -> Self {
        Self {
            device_pixel_ratio: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ratio_is_one() {
        assert_eq!(DisplayEnvironment::default().device_pixel_ratio, 1.0);
    }

    #[test]
    fn test_new_stores_ratio() {
        assert_eq!(DisplayEnvironment::new(2.0).device_pixel_ratio, 2.0);
    }
}
