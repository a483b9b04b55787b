// SPDX-License-Identifier: MPL-2.0
//! Viewer session: the explicit handle tying a gallery to a transform
//! engine.
//!
//! A [`PreviewSession`] is returned to the caller that opened the viewer;
//! closing it is a method on the handle, not a process-wide call. The
//! session enforces the binding contract between its two components:
//! every successful navigation resets the engine, so a new image always
//! starts from the identity transform.

use crate::config::Config;
use crate::diagnostics::{self, Recorder};
use crate::engine::{self, Options, Surface, Transform};
use crate::error::{Error, Result};
use crate::gallery::{self, Gallery};
use crate::input::Command;
use iced_core::Size;

/// Effects a session hands back to its host after routing a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Nothing to do.
    None,
    /// The active image changed. The host should swap the rendered image
    /// and, once the new surface is laid out, mount it again.
    ImageChanged {
        /// Reference of the newly active image.
        url: String,
        /// 1-based position indicator `(position, total)` for display.
        position: (usize, usize),
    },
    /// The transform changed. The host should re-apply
    /// [`PreviewSession::transform`] to the surface.
    TransformChanged,
    /// The caller asked to close the viewer. The host tears down the
    /// surface and drops the session.
    CloseRequested,
}

/// One open image-preview viewer.
#[derive(Debug, Clone)]
pub struct PreviewSession {
    gallery: Gallery,
    engine: engine::State,
    diagnostics: Recorder,
    closed: bool,
}

impl PreviewSession {
    /// Opens a session over `items` with `active` as the initially
    /// displayed image.
    ///
    /// Returns [`Error::EmptyGallery`] for an empty list. An `active`
    /// reference that is not in the list is recovered by starting at the
    /// first item and recording a diagnostic.
    pub fn open(items: Vec<String>, active: &str, config: &Config) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::EmptyGallery);
        }

        let mut recorder = Recorder::default();
        let index = match gallery::initial_index(&items, active) {
            Ok(index) => index,
            Err(Error::ActiveImageNotFound(url)) => {
                recorder.record(diagnostics::Event::ActiveImageNotFound { url });
                0
            }
            Err(err) => return Err(err),
        };

        Ok(Self {
            gallery: Gallery::new_at(items, index)?,
            engine: engine::State::new(Options::from_config(config)),
            diagnostics: recorder,
            closed: false,
        })
    }

    /// Binds the engine to the rendered surface of the active image.
    pub fn mount(&mut self, surface: Surface) {
        if self.closed {
            return;
        }
        self.engine.handle(engine::Message::Mount(surface));
    }

    /// Releases the surface binding. Transform commands no-op until the
    /// next mount.
    pub fn unmount(&mut self) {
        self.engine.handle(engine::Message::Unmount);
    }

    /// Informs the engine of a host layout change.
    pub fn viewport_resized(&mut self, viewport: Size) -> Effect {
        if self.closed {
            return Effect::None;
        }
        convert_engine_effect(self.engine.handle(engine::Message::ViewportResized(viewport)))
    }

    /// Routes a logical command.
    ///
    /// A closed session drops every command (recording a diagnostic), so
    /// input events racing with teardown cannot reach a destroyed viewer.
    pub fn handle(&mut self, command: Command) -> Effect {
        if self.closed {
            self.diagnostics
                .record(diagnostics::Event::CommandAfterClose);
            return Effect::None;
        }

        match command {
            Command::Close => {
                self.close();
                Effect::CloseRequested
            }
            Command::Next => {
                self.gallery.next();
                self.activate_current()
            }
            Command::Previous => {
                self.gallery.previous();
                self.activate_current()
            }
            Command::ZoomIn => convert_engine_effect(self.engine.handle(engine::Message::ZoomIn)),
            Command::ZoomOut => convert_engine_effect(self.engine.handle(engine::Message::ZoomOut)),
            Command::Rotate => convert_engine_effect(self.engine.handle(engine::Message::Rotate)),
            Command::ZoomBest => {
                let effect = self.engine.handle(engine::Message::ZoomBest);
                if effect == engine::Effect::None {
                    self.record_degenerate_fit();
                }
                convert_engine_effect(effect)
            }
            Command::ZoomOriginal => {
                convert_engine_effect(self.engine.handle(engine::Message::ZoomOriginal))
            }
            Command::BeginPan(position) => {
                convert_engine_effect(self.engine.handle(engine::Message::BeginPan(position)))
            }
            Command::UpdatePan(position) => {
                convert_engine_effect(self.engine.handle(engine::Message::UpdatePan(position)))
            }
            Command::EndPan => convert_engine_effect(self.engine.handle(engine::Message::EndPan)),
        }
    }

    /// Records why a mounted fit-to-viewport computation was skipped.
    fn record_degenerate_fit(&mut self) {
        let Some(surface) = self.engine.surface() else {
            return;
        };
        let natural = surface.natural();
        if natural.width == 0 || natural.height == 0 {
            self.diagnostics.record(diagnostics::Event::DegenerateImage);
        } else {
            self.diagnostics
                .record(diagnostics::Event::DegenerateViewport);
        }
    }

    /// Navigation side of the binding contract: the engine is unbound from
    /// the old surface and fully reset for the new image.
    fn activate_current(&mut self) -> Effect {
        self.engine.handle(engine::Message::Unmount);
        self.engine.handle(engine::Message::Reset);
        Effect::ImageChanged {
            url: self.gallery.current().to_string(),
            position: self.gallery.position(),
        }
    }

    /// Closes the session. Idempotent.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.engine.handle(engine::Message::Unmount);
        self.closed = true;
    }

    /// Whether the session has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Reference of the currently active image.
    #[must_use]
    pub fn current_url(&self) -> &str {
        self.gallery.current()
    }

    /// 1-based position indicator `(position, total)` for host display.
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        self.gallery.position()
    }

    /// The current transform triple for the render contract.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.engine.transform()
    }

    /// Read access to the transform engine.
    #[must_use]
    pub fn engine(&self) -> &engine::State {
        &self.engine
    }

    /// Recorded non-fatal anomalies.
    #[must_use]
    pub fn diagnostics(&self) -> &Recorder {
        &self.diagnostics
    }
}

fn convert_engine_effect(effect: engine::Effect) -> Effect {
    match effect {
        engine::Effect::None => Effect::None,
        engine::Effect::TransformChanged => Effect::TransformChanged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use iced_core::Point;

    fn urls(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    fn open_session() -> PreviewSession {
        let mut session =
            PreviewSession::open(urls(&["a.png", "b.png", "c.png"]), "b.png", &Config::default())
                .expect("session");
        session.mount(Surface::new(
            iced_core::Size::new(1600, 400),
            iced_core::Size::new(800.0, 600.0),
        ));
        session
    }

    #[test]
    fn open_positions_at_active_image() {
        let session = open_session();
        assert_eq!(session.current_url(), "b.png");
        assert_eq!(session.position(), (2, 3));
        assert!(session.diagnostics().is_empty());
    }

    #[test]
    fn open_with_empty_list_fails() {
        let result = PreviewSession::open(Vec::new(), "a.png", &Config::default());
        assert_eq!(result.err(), Some(Error::EmptyGallery));
    }

    #[test]
    fn unknown_active_image_falls_back_to_first() {
        let session =
            PreviewSession::open(urls(&["a.png", "b.png"]), "zz.png", &Config::default())
                .expect("session");
        assert_eq!(session.current_url(), "a.png");
        assert_eq!(session.diagnostics().len(), 1);
    }

    #[test]
    fn navigation_wraps_and_resets_transform() {
        let mut session = open_session();
        session.handle(Command::ZoomIn);
        session.handle(Command::Rotate);

        let effect = session.handle(Command::Next);
        assert_eq!(
            effect,
            Effect::ImageChanged {
                url: "c.png".to_string(),
                position: (3, 3),
            }
        );
        assert_eq!(session.transform(), Transform::IDENTITY);

        // Wraps past the end, then back.
        assert!(matches!(
            session.handle(Command::Next),
            Effect::ImageChanged { ref url, .. } if url == "a.png"
        ));
        assert!(matches!(
            session.handle(Command::Previous),
            Effect::ImageChanged { ref url, .. } if url == "c.png"
        ));
    }

    #[test]
    fn navigation_cancels_active_pan_gesture() {
        let mut session = open_session();
        session.handle(Command::BeginPan(Point::new(0.0, 0.0)));
        session.handle(Command::UpdatePan(Point::new(80.0, 0.0)));

        session.handle(Command::Next);
        assert!(!session.engine().is_panning());
        assert_abs_diff_eq!(session.transform().pan.x, 0.0);
    }

    #[test]
    fn transform_commands_require_mount() {
        let mut session =
            PreviewSession::open(urls(&["a.png"]), "a.png", &Config::default()).expect("session");
        assert_eq!(session.handle(Command::ZoomIn), Effect::None);
        assert_eq!(session.transform(), Transform::IDENTITY);
    }

    #[test]
    fn close_is_terminal() {
        let mut session = open_session();
        assert_eq!(session.handle(Command::Close), Effect::CloseRequested);
        assert!(session.is_closed());

        assert_eq!(session.handle(Command::ZoomIn), Effect::None);
        assert_eq!(session.handle(Command::Next), Effect::None);
        assert!(session
            .diagnostics()
            .entries()
            .any(|e| e.event == crate::diagnostics::Event::CommandAfterClose));
    }

    #[test]
    fn degenerate_viewport_skips_fit_and_records_diagnostic() {
        let mut session =
            PreviewSession::open(urls(&["a.png"]), "a.png", &Config::default()).expect("session");
        session.mount(Surface::new(
            iced_core::Size::new(1600, 400),
            iced_core::Size::new(0.0, 0.0),
        ));

        assert_eq!(session.handle(Command::ZoomBest), Effect::None);
        assert_abs_diff_eq!(session.transform().scale, 1.0);
        assert!(session
            .diagnostics()
            .entries()
            .any(|e| e.event == crate::diagnostics::Event::DegenerateViewport));
    }

    #[test]
    fn zoom_commands_respect_configured_step() {
        let config = Config {
            zoom_step_factor: Some(2.0),
            ..Config::default()
        };
        let mut session =
            PreviewSession::open(urls(&["a.png"]), "a.png", &config).expect("session");
        session.mount(Surface::new(
            iced_core::Size::new(100, 100),
            iced_core::Size::new(800.0, 600.0),
        ));

        session.handle(Command::ZoomIn);
        assert_abs_diff_eq!(session.transform().scale, 2.0);
    }
}
