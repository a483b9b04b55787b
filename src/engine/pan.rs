// SPDX-License-Identifier: MPL-2.0
//! Pan state management
//!
//! Handles the translation offset of the image center relative to the
//! viewport center, and the pointer-drag gesture that mutates it.

use iced_core::{Point, Vector};

/// Manages the pan offset and the active drag gesture, if any.
///
/// The gesture is a two-state machine: idle (no tracked pointer) and
/// panning (last pointer position tracked). Every update accumulates the
/// pointer delta since the previous event, so the final offset reflects
/// total pointer movement regardless of how events were chunked.
#[derive(Debug, Clone, Default)]
pub struct PanState {
    /// Offset of the image center from the viewport center, in viewport
    /// pixels.
    offset: Vector,
    /// Last pointer position while a gesture is active.
    last_position: Option<Point>,
}

impl PanState {
    /// Returns the current pan offset.
    #[must_use]
    pub fn offset(&self) -> Vector {
        self.offset
    }

    /// Whether a pan gesture is currently active.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.last_position.is_some()
    }

    /// Starts a pan gesture at the given pointer position.
    pub fn begin(&mut self, position: Point) {
        self.last_position = Some(position);
    }

    /// Accumulates pointer movement into the offset.
    ///
    /// Returns true if the offset changed; ignored while idle.
    pub fn update(&mut self, position: Point) -> bool {
        let Some(last) = self.last_position else {
            return false;
        };
        let delta = position - last;
        self.last_position = Some(position);
        if delta == Vector::new(0.0, 0.0) {
            return false;
        }
        self.offset = self.offset + delta;
        true
    }

    /// Ends the active gesture, keeping the accumulated offset.
    pub fn end(&mut self) {
        self.last_position = None;
    }

    /// Cancels any active gesture and resets the offset to zero.
    pub fn reset(&mut self) {
        self.offset = Vector::new(0.0, 0.0);
        self.last_position = None;
    }

    /// Clamps the offset per axis to `±limits`.
    ///
    /// Returns true if the offset changed. `limits` components must be
    /// non-negative; an axis limit of 0 pins the offset on that axis.
    pub fn clamp_to(&mut self, limits: Vector) -> bool {
        let clamped = Vector::new(
            self.offset.x.clamp(-limits.x, limits.x),
            self.offset.y.clamp(-limits.y, limits.y),
        );
        if clamped == self.offset {
            false
        } else {
            self.offset = clamped;
            true
        }
    }
}
