// SPDX-License-Identifier: MPL-2.0
//! Mounted-surface handle.
//!
//! The host hands the engine an explicit [`Surface`] at mount time: the
//! natural pixel dimensions of the decoded image plus the viewport the
//! image is rendered into. All layout-dependent math (fit-to-viewport
//! scale, pan limits) lives here.

use super::rotation::RotationStep;
use iced_core::{Size, Vector};

/// The rendered image surface the engine currently owns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    /// Natural pixel dimensions of the image.
    natural: Size<u32>,
    /// Viewport dimensions in pixels.
    viewport: Size,
}

impl Surface {
    /// Creates a surface handle from natural image dimensions and the
    /// current viewport.
    #[must_use]
    pub fn new(natural: Size<u32>, viewport: Size) -> Self {
        Self { natural, viewport }
    }

    /// Returns the natural image dimensions.
    #[must_use]
    pub fn natural(&self) -> Size<u32> {
        self.natural
    }

    /// Returns the current viewport dimensions.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Updates the viewport after a host layout change.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Natural dimensions adjusted for rotation: width and height swap
    /// when the rotation step is odd.
    #[must_use]
    pub fn oriented_natural(&self, rotation: RotationStep) -> Size {
        let (w, h) = if rotation.swaps_dimensions() {
            (self.natural.height, self.natural.width)
        } else {
            (self.natural.width, self.natural.height)
        };
        Size::new(w as f32, h as f32)
    }

    /// The largest scale at which the rotation-adjusted image fits
    /// entirely within the viewport, preserving aspect ratio.
    ///
    /// Returns `None` for degenerate geometry (zero-area image or
    /// viewport), in which case the caller must leave the scale unchanged.
    #[must_use]
    pub fn fit_scale(&self, rotation: RotationStep) -> Option<f32> {
        if self.natural.width == 0 || self.natural.height == 0 {
            return None;
        }
        if self.viewport.width <= 0.0 || self.viewport.height <= 0.0 {
            return None;
        }

        let oriented = self.oriented_natural(rotation);
        let scale_x = self.viewport.width / oriented.width;
        let scale_y = self.viewport.height / oriented.height;
        let scale = scale_x.min(scale_y);

        if scale.is_finite() && scale > 0.0 {
            Some(scale)
        } else {
            None
        }
    }

    /// Per-axis pan limits at the given scale and rotation.
    ///
    /// Each component is `max(0, (scaled_dim - viewport_dim) / 2)`: the
    /// furthest the image center may move from the viewport center while
    /// still covering it. An axis where the image fits yields 0, pinning
    /// the image centered on that axis.
    #[must_use]
    pub fn pan_limits(&self, scale: f32, rotation: RotationStep) -> Vector {
        let oriented = self.oriented_natural(rotation);
        Vector::new(
            ((oriented.width * scale - self.viewport.width) / 2.0).max(0.0),
            ((oriented.height * scale - self.viewport.height) / 2.0).max(0.0),
        )
    }
}
