// SPDX-License-Identifier: MPL-2.0
//! Rotation step domain type.
//!
//! Orientation is always axis-aligned: a rotation is a discrete number of
//! 90° steps, never an arbitrary angle. The newtype enforces the mod-4
//! invariant at the type level.

/// Rotation in clockwise 90° steps (0–3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RotationStep(u8);

impl RotationStep {
    /// No rotation.
    pub const ZERO: Self = Self(0);

    /// Creates a rotation step, wrapping any value modulo 4.
    #[must_use]
    pub fn new(steps: u8) -> Self {
        Self(steps % 4)
    }

    /// Returns the number of clockwise 90° steps (0–3).
    #[must_use]
    pub fn steps(self) -> u8 {
        self.0
    }

    /// Returns the angle in degrees (0, 90, 180 or 270).
    #[must_use]
    pub fn degrees(self) -> u16 {
        u16::from(self.0) * 90
    }

    /// Returns the angle in radians.
    #[must_use]
    pub fn radians(self) -> f32 {
        f32::from(self.0) * std::f32::consts::FRAC_PI_2
    }

    /// Rotates 90° clockwise.
    #[must_use]
    pub fn clockwise(self) -> Self {
        Self((self.0 + 1) % 4)
    }

    /// Rotates 90° counter-clockwise.
    #[must_use]
    pub fn counterclockwise(self) -> Self {
        Self((self.0 + 3) % 4)
    }

    /// Returns true if the image is rotated away from its natural
    /// orientation.
    #[must_use]
    pub fn is_rotated(self) -> bool {
        self.0 != 0
    }

    /// Returns true if width and height swap when laying the image out.
    ///
    /// This is the case for 90° and 270° rotations.
    #[must_use]
    pub fn swaps_dimensions(self) -> bool {
        self.0 % 2 == 1
    }
}
