// SPDX-License-Identifier: MPL-2.0
//! Logical input commands.
//!
//! The host forwards its raw input (keyboard events, toolbar button
//! activations, pointer gestures) as values of a closed [`Command`] set.
//! Routing over an explicit enum keeps the core testable without a live
//! UI surface.

use iced_core::Point;

/// A logical command the session knows how to route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Close the viewer session.
    Close,
    /// Activate the next image, wrapping at the end of the list.
    Next,
    /// Activate the previous image, wrapping at the start of the list.
    Previous,
    /// Multiply the scale by the zoom step.
    ZoomIn,
    /// Divide the scale by the zoom step.
    ZoomOut,
    /// Rotate 90° clockwise.
    Rotate,
    /// Fit the image to the viewport.
    ZoomBest,
    /// Return to natural size.
    ZoomOriginal,
    /// Start a pan gesture.
    BeginPan(Point),
    /// Continue a pan gesture.
    UpdatePan(Point),
    /// End a pan gesture.
    EndPan,
}

impl Command {
    /// Maps a keyboard key name (DOM `KeyboardEvent.code` vocabulary) to a
    /// command. Unrecognized keys map to `None` and are ignored without
    /// error.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Close),
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_closes() {
        assert_eq!(Command::from_key("Escape"), Some(Command::Close));
    }

    #[test]
    fn arrows_navigate() {
        assert_eq!(Command::from_key("ArrowLeft"), Some(Command::Previous));
        assert_eq!(Command::from_key("ArrowRight"), Some(Command::Next));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        assert_eq!(Command::from_key("ArrowUp"), None);
        assert_eq!(Command::from_key("Enter"), None);
        assert_eq!(Command::from_key(""), None);
    }
}
