// SPDX-License-Identifier: MPL-2.0
//! `preview_kit` is the headless core of an image-preview widget: gallery
//! navigation over an ordered image list, plus a transform engine owning
//! the scale, rotation and pan of the currently displayed image.
//!
//! The crate renders nothing. A host mounts a [`engine::Surface`] handle,
//! forwards logical [`input::Command`]s, and applies the resulting
//! [`engine::Transform`] to its own rendered surface.
//!
//! # Example
//!
//! ```
//! use preview_kit::config::Config;
//! use preview_kit::engine::Surface;
//! use preview_kit::input::Command;
//! use preview_kit::session::PreviewSession;
//! use iced_core::Size;
//!
//! let items = vec!["a.png".to_string(), "b.png".to_string()];
//! let mut session = PreviewSession::open(items, "a.png", &Config::default()).unwrap();
//! session.mount(Surface::new(Size::new(1600, 1200), Size::new(800.0, 600.0)));
//!
//! session.handle(Command::ZoomBest);
//! assert_eq!(session.transform().scale, 0.5);
//! ```

#![doc(html_root_url = "https://docs.rs/preview_kit/0.1.0")]

pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod gallery;
pub mod input;
pub mod session;

#[cfg(test)]
mod test_utils;

pub use engine::{Surface, Transform};
pub use error::{Error, Result};
pub use input::Command;
pub use session::PreviewSession;
