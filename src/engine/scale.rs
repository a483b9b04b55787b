// SPDX-License-Identifier: MPL-2.0
//! Scale domain types.
//!
//! Newtypes guarantee that a scale factor and its zoom step are always
//! within their configured ranges, so usage sites never clamp manually.

use crate::config::defaults::{
    DEFAULT_SCALE, DEFAULT_ZOOM_STEP_FACTOR, MAX_SCALE, MAX_ZOOM_STEP_FACTOR, MIN_SCALE,
    MIN_ZOOM_STEP_FACTOR,
};

/// Bounds a scale factor may be clamped into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleBounds {
    min: f32,
    max: f32,
}

impl ScaleBounds {
    /// Creates sanitized bounds: non-finite or non-positive inputs fall
    /// back to the defaults, and an inverted pair is reordered.
    #[must_use]
    pub fn new(min: f32, max: f32) -> Self {
        let min = if min.is_finite() && min > 0.0 {
            min
        } else {
            MIN_SCALE
        };
        let max = if max.is_finite() && max > 0.0 {
            max
        } else {
            MAX_SCALE
        };
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    #[must_use]
    pub fn min(self) -> f32 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f32 {
        self.max
    }
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self {
            min: MIN_SCALE,
            max: MAX_SCALE,
        }
    }
}

/// Scale factor, guaranteed to be within its [`ScaleBounds`].
///
/// 1.0 means natural pixel size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactor(f32);

impl ScaleFactor {
    /// Creates a new scale factor, clamping the value into `bounds`.
    #[must_use]
    pub fn new(value: f32, bounds: ScaleBounds) -> Self {
        if value.is_finite() {
            Self(value.clamp(bounds.min, bounds.max))
        } else {
            Self(DEFAULT_SCALE.clamp(bounds.min, bounds.max))
        }
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the scale sits at the lower bound.
    #[must_use]
    pub fn is_min(self, bounds: ScaleBounds) -> bool {
        self.0 <= bounds.min
    }

    /// Returns whether the scale sits at the upper bound.
    #[must_use]
    pub fn is_max(self, bounds: ScaleBounds) -> bool {
        self.0 >= bounds.max
    }

    /// Multiplies by the zoom step, clamping to the upper bound.
    #[must_use]
    pub fn zoom_in(self, step: ZoomStepFactor, bounds: ScaleBounds) -> Self {
        Self::new(self.0 * step.value(), bounds)
    }

    /// Divides by the zoom step, clamping to the lower bound.
    #[must_use]
    pub fn zoom_out(self, step: ZoomStepFactor, bounds: ScaleBounds) -> Self {
        Self::new(self.0 / step.value(), bounds)
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self(DEFAULT_SCALE)
    }
}

/// Multiplicative zoom step, guaranteed to be within its valid range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomStepFactor(f32);

impl ZoomStepFactor {
    /// Creates a new step factor, clamping the value to the valid range.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        if factor.is_finite() {
            Self(factor.clamp(MIN_ZOOM_STEP_FACTOR, MAX_ZOOM_STEP_FACTOR))
        } else {
            Self(DEFAULT_ZOOM_STEP_FACTOR)
        }
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ZoomStepFactor {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_STEP_FACTOR)
    }
}
