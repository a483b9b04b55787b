// SPDX-License-Identifier: MPL-2.0
//! Transform engine cluster - scale, rotation and pan managed together.
//!
//! This cluster groups the transform operations of the currently mounted
//! image surface. They have strong internal coupling: rotating swaps the
//! axes the pan clamp works against, and fitting recomputes the scale from
//! the surface geometry.
//!
//! ## Composition
//!
//! - [`scale::ScaleFactor`]: clamped scale newtype
//! - [`rotation::RotationStep`]: mod-4 rotation newtype
//! - [`pan::PanState`]: pan offset + drag gesture
//! - [`surface::Surface`]: mounted-surface handle with the layout math

use iced_core::{Point, Size, Vector};

pub mod pan;
pub mod rotation;
pub mod scale;
pub mod surface;

pub use pan::PanState;
pub use rotation::RotationStep;
pub use scale::{ScaleBounds, ScaleFactor, ZoomStepFactor};
pub use surface::Surface;

use crate::config::Config;
use crate::config::defaults::{DEFAULT_CLAMP_PAN, DEFAULT_ZOOM_STEP_FACTOR};

/// Engine tunables resolved from a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    /// Scale clamp range.
    pub bounds: ScaleBounds,
    /// Multiplicative zoom step.
    pub zoom_step: ZoomStepFactor,
    /// Whether pan offsets are clamped to keep the image covering the
    /// viewport center.
    pub clamp_pan: bool,
}

impl Options {
    /// Resolves options from a configuration, falling back to defaults for
    /// unset fields.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let default_bounds = ScaleBounds::default();
        Self {
            bounds: ScaleBounds::new(
                config.min_scale.unwrap_or(default_bounds.min()),
                config.max_scale.unwrap_or(default_bounds.max()),
            ),
            zoom_step: ZoomStepFactor::new(
                config.zoom_step_factor.unwrap_or(DEFAULT_ZOOM_STEP_FACTOR),
            ),
            clamp_pan: config.clamp_pan.unwrap_or(DEFAULT_CLAMP_PAN),
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            bounds: ScaleBounds::default(),
            zoom_step: ZoomStepFactor::default(),
            clamp_pan: DEFAULT_CLAMP_PAN,
        }
    }
}

/// The visual transform of the mounted image, as exposed to the host.
///
/// The host applies this to the rendered surface after every mutation;
/// the engine never renders pixels itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Scale factor (1.0 = natural pixel size).
    pub scale: f32,
    /// Clockwise rotation in 90° steps.
    pub rotation: RotationStep,
    /// Offset of the image center from the viewport center.
    pub pan: Vector,
}

impl Transform {
    /// Identity transform: natural size, unrotated, centered.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        rotation: RotationStep::ZERO,
        pan: Vector::new(0.0, 0.0),
    };

    /// Composed 2D affine matrix `[a, b, c, d, tx, ty]` mapping image-local
    /// coordinates to viewport coordinates (CSS `matrix()` argument order).
    ///
    /// Rotation is axis-aligned, so the coefficients are exact rather than
    /// computed through `sin`/`cos`.
    #[must_use]
    pub fn matrix(&self) -> [f32; 6] {
        let (cos, sin) = match self.rotation.steps() {
            0 => (1.0, 0.0),
            1 => (0.0, 1.0),
            2 => (-1.0, 0.0),
            _ => (0.0, -1.0),
        };
        [
            self.scale * cos,
            self.scale * sin,
            -self.scale * sin,
            self.scale * cos,
            self.pan.x,
            self.pan.y,
        ]
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Transform engine state for one mounted image surface.
#[derive(Debug, Clone, Default)]
pub struct State {
    options: Options,
    scale: ScaleFactor,
    rotation: RotationStep,
    pan: PanState,
    surface: Option<Surface>,
}

/// Messages for the transform engine.
#[derive(Debug, Clone)]
pub enum Message {
    /// Multiply the scale by the zoom step.
    ZoomIn,
    /// Divide the scale by the zoom step.
    ZoomOut,
    /// Rotate 90° clockwise.
    Rotate,
    /// Fit the (rotation-adjusted) image inside the viewport and center it.
    ZoomBest,
    /// Return to natural size, centered; rotation is preserved.
    ZoomOriginal,
    /// Full reset to the identity transform. Issued whenever the active
    /// image changes.
    Reset,
    /// Start a pan gesture at the given pointer position.
    BeginPan(Point),
    /// Accumulate pointer movement into the pan offset.
    UpdatePan(Point),
    /// End the active pan gesture.
    EndPan,
    /// Bind the engine to a rendered surface.
    Mount(Surface),
    /// Release the surface binding; subsequent operations no-op.
    Unmount,
    /// The host viewport changed size.
    ViewportResized(Size),
}

/// Effects produced by engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// The transform changed - the host should re-apply it to the surface.
    TransformChanged,
}

impl State {
    /// Creates an engine with the given options, not yet bound to a
    /// surface.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Handle an engine message.
    ///
    /// Operations that need a mounted surface no-op gracefully while
    /// unmounted: input events may race with lifecycle boundaries in an
    /// event-driven host, and the widget must never fail for it.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::ZoomIn => {
                if self.surface.is_none() {
                    return Effect::None;
                }
                self.scale = self.scale.zoom_in(self.options.zoom_step, self.options.bounds);
                self.reclamp_pan();
                Effect::TransformChanged
            }
            Message::ZoomOut => {
                if self.surface.is_none() {
                    return Effect::None;
                }
                self.scale = self.scale.zoom_out(self.options.zoom_step, self.options.bounds);
                self.reclamp_pan();
                Effect::TransformChanged
            }
            Message::Rotate => {
                if self.surface.is_none() {
                    return Effect::None;
                }
                self.rotation = self.rotation.clockwise();
                // The clamp axes rotate with the image.
                self.reclamp_pan();
                Effect::TransformChanged
            }
            Message::ZoomBest => {
                let Some(fit) = self.fit_scale() else {
                    // Degenerate geometry or unmounted: leave the scale
                    // untouched.
                    return Effect::None;
                };
                self.scale = ScaleFactor::new(fit, self.options.bounds);
                self.pan.reset();
                Effect::TransformChanged
            }
            Message::ZoomOriginal => {
                if self.surface.is_none() {
                    return Effect::None;
                }
                self.scale = ScaleFactor::new(1.0, self.options.bounds);
                self.pan.reset();
                Effect::TransformChanged
            }
            Message::Reset => {
                // Total: works whether or not a surface is mounted, since
                // navigation resets the engine between unmount and mount.
                self.scale = ScaleFactor::new(1.0, self.options.bounds);
                self.rotation = RotationStep::ZERO;
                self.pan.reset();
                Effect::TransformChanged
            }
            Message::BeginPan(position) => {
                if self.surface.is_none() {
                    return Effect::None;
                }
                self.pan.begin(position);
                Effect::None
            }
            Message::UpdatePan(position) => {
                if self.surface.is_none() {
                    return Effect::None;
                }
                let moved = self.pan.update(position);
                self.reclamp_pan();
                if moved {
                    Effect::TransformChanged
                } else {
                    Effect::None
                }
            }
            Message::EndPan => {
                self.pan.end();
                Effect::None
            }
            Message::Mount(surface) => {
                self.surface = Some(surface);
                Effect::None
            }
            Message::Unmount => {
                self.surface = None;
                self.pan.end();
                Effect::None
            }
            Message::ViewportResized(viewport) => {
                let Some(surface) = self.surface.as_mut() else {
                    return Effect::None;
                };
                surface.set_viewport(viewport);
                if self.reclamp_pan() {
                    Effect::TransformChanged
                } else {
                    Effect::None
                }
            }
        }
    }

    /// Re-applies the pan clamp against the current scale, rotation and
    /// viewport. Returns true if the offset moved.
    fn reclamp_pan(&mut self) -> bool {
        if !self.options.clamp_pan {
            return false;
        }
        let Some(surface) = &self.surface else {
            return false;
        };
        let limits = surface.pan_limits(self.scale.value(), self.rotation);
        self.pan.clamp_to(limits)
    }

    // ═══════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════

    /// The current transform triple for the render contract.
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform {
            scale: self.scale.value(),
            rotation: self.rotation,
            pan: self.pan.offset(),
        }
    }

    /// Whether the engine currently owns a rendered surface.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    /// The mounted surface, if any.
    #[must_use]
    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    /// Whether a pan gesture is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_panning()
    }

    /// The fit-to-viewport scale for the current rotation, when computable.
    #[must_use]
    pub fn fit_scale(&self) -> Option<f32> {
        self.surface
            .as_ref()
            .and_then(|surface| surface.fit_scale(self.rotation))
    }

    /// Whether further zooming out is a no-op.
    #[must_use]
    pub fn at_min_scale(&self) -> bool {
        self.scale.is_min(self.options.bounds)
    }

    /// Whether further zooming in is a no-op.
    #[must_use]
    pub fn at_max_scale(&self) -> bool {
        self.scale.is_max(self.options.bounds)
    }

    /// The resolved engine options.
    #[must_use]
    pub fn options(&self) -> Options {
        self.options
    }
}
