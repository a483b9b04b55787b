// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module is the single source of truth for the tunable constants of
//! the transform engine. Constants are organized by category.

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Default scale when an image is first displayed (1.0 = natural pixel size).
pub const DEFAULT_SCALE: f32 = 1.0;

/// Minimum allowed scale factor.
pub const MIN_SCALE: f32 = 0.1;

/// Maximum allowed scale factor.
pub const MAX_SCALE: f32 = 8.0;

// ==========================================================================
// Zoom Step Defaults
// ==========================================================================

/// Default multiplicative step applied by zoom in/out operations.
///
/// Multiplicative rather than additive so that repeated presses feel
/// geometric across the whole scale range.
pub const DEFAULT_ZOOM_STEP_FACTOR: f32 = 1.2;

/// Minimum allowed zoom step factor (must stay above 1.0 to make progress).
pub const MIN_ZOOM_STEP_FACTOR: f32 = 1.01;

/// Maximum allowed zoom step factor.
pub const MAX_ZOOM_STEP_FACTOR: f32 = 4.0;

// ==========================================================================
// Pan Defaults
// ==========================================================================

/// Whether pan offsets are clamped so the image keeps covering the
/// viewport center.
pub const DEFAULT_CLAMP_PAN: bool = true;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default capacity of the diagnostic event buffer.
pub const DEFAULT_DIAGNOSTIC_CAPACITY: usize = 256;

/// Minimum diagnostic buffer capacity.
pub const MIN_DIAGNOSTIC_CAPACITY: usize = 16;

/// Maximum diagnostic buffer capacity.
pub const MAX_DIAGNOSTIC_CAPACITY: usize = 10_000;
