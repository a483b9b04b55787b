// SPDX-License-Identifier: MPL-2.0
//! In-memory diagnostics for non-fatal anomalies.
//!
//! The core never surfaces errors to the user beyond "nothing happens";
//! anomalies that indicate caller or data inconsistency are recorded here
//! instead so hosts can export them when investigating issues.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod buffer;

pub use buffer::{BufferCapacity, CircularBuffer};

/// Non-fatal anomalies the core recovers from locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// The supplied active image reference was not in the gallery list;
    /// the session fell back to the first item.
    ActiveImageNotFound {
        /// The reference that failed to resolve.
        url: String,
    },
    /// A fit-to-viewport computation was skipped because the viewport had
    /// zero area.
    DegenerateViewport,
    /// A fit-to-viewport computation was skipped because the image had
    /// zero-area natural dimensions.
    DegenerateImage,
    /// A command reached the session after it was closed and was dropped.
    CommandAfterClose,
}

/// A recorded diagnostic event with its capture time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    /// When the event was recorded.
    pub timestamp: DateTime<Utc>,
    /// The recorded event.
    #[serde(flatten)]
    pub event: Event,
}

/// Bounded recorder for diagnostic events.
#[derive(Debug, Clone)]
pub struct Recorder {
    entries: CircularBuffer<Entry>,
}

impl Recorder {
    /// Creates a recorder with the given buffer capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            entries: CircularBuffer::new(capacity),
        }
    }

    /// Records an event with the current timestamp.
    pub fn record(&mut self, event: Event) {
        self.entries.push(Entry {
            timestamp: Utc::now(),
            event,
        });
    }

    /// Iterates over recorded entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Returns the number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_stores_event_with_timestamp() {
        let mut recorder = Recorder::default();
        recorder.record(Event::DegenerateViewport);

        assert_eq!(recorder.len(), 1);
        let entry = recorder.entries().next().expect("entry");
        assert_eq!(entry.event, Event::DegenerateViewport);
    }

    #[test]
    fn events_serialize_with_tag() {
        let event = Event::ActiveImageNotFound {
            url: "b.png".to_string(),
        };
        let toml = toml::to_string(&event).expect("serialize");
        assert!(toml.contains("active_image_not_found"));
        assert!(toml.contains("b.png"));
    }

    #[test]
    fn recorder_is_bounded() {
        let mut recorder = Recorder::new(BufferCapacity::new(16));
        for _ in 0..40 {
            recorder.record(Event::DegenerateImage);
        }
        assert_eq!(recorder.len(), 16);
    }
}
