// SPDX-License-Identifier: MPL-2.0
//! Gallery navigation: an ordered, non-empty list of image references with
//! a current index and circular next/previous movement.
//!
//! The index arithmetic lives in free functions so it can be tested (and
//! reused) without a `Gallery` instance; the struct adds the stateful
//! current-index bookkeeping shared with the session.

use crate::error::{Error, Result};

/// Returns the position of `active` within `items`.
///
/// Fails with [`Error::ActiveImageNotFound`] when the reference is absent;
/// callers are expected to recover by defaulting to the first item.
pub fn initial_index(items: &[String], active: &str) -> Result<usize> {
    items
        .iter()
        .position(|url| url == active)
        .ok_or_else(|| Error::ActiveImageNotFound(active.to_string()))
}

/// Next index with wrap-around. Defined for `len >= 1` only.
#[must_use]
pub fn next_index(current: usize, len: usize) -> usize {
    debug_assert!(len >= 1, "navigation is undefined for empty lists");
    if current >= len - 1 {
        0
    } else {
        current + 1
    }
}

/// Previous index with wrap-around. Defined for `len >= 1` only.
#[must_use]
pub fn previous_index(current: usize, len: usize) -> usize {
    debug_assert!(len >= 1, "navigation is undefined for empty lists");
    if current == 0 {
        len - 1
    } else {
        current - 1
    }
}

/// An ordered list of image references with a valid current index.
///
/// The list is fixed for the lifetime of the viewer session; only the
/// current index changes, and it is always within bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    items: Vec<String>,
    current_index: usize,
}

impl Gallery {
    /// Creates a gallery positioned at `index`.
    ///
    /// Returns [`Error::EmptyGallery`] when `items` is empty. An
    /// out-of-range `index` is brought back into bounds rather than
    /// rejected, since the caller may already have recovered from a failed
    /// [`initial_index`] lookup.
    pub fn new_at(items: Vec<String>, index: usize) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::EmptyGallery);
        }
        let current_index = index.min(items.len() - 1);
        Ok(Self {
            items,
            current_index,
        })
    }

    /// Creates a gallery positioned at the given active reference.
    ///
    /// Fails with [`Error::EmptyGallery`] or [`Error::ActiveImageNotFound`].
    pub fn new(items: Vec<String>, active: &str) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::EmptyGallery);
        }
        let index = initial_index(&items, active)?;
        Self::new_at(items, index)
    }

    /// Advances to the next image, wrapping to the first, and returns it.
    pub fn next(&mut self) -> &str {
        self.current_index = next_index(self.current_index, self.items.len());
        self.current()
    }

    /// Retreats to the previous image, wrapping to the last, and returns it.
    pub fn previous(&mut self) -> &str {
        self.current_index = previous_index(self.current_index, self.items.len());
        self.current()
    }

    /// Returns the currently active image reference.
    #[must_use]
    pub fn current(&self) -> &str {
        &self.items[self.current_index]
    }

    /// Returns the current index in the list.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Returns the 1-based position indicator `(position, total)` for
    /// host display.
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        (self.current_index + 1, self.items.len())
    }

    /// Returns the total number of images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: an empty gallery cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn initial_index_finds_active_reference() {
        let items = urls(&["a.png", "b.png", "c.png"]);
        assert_eq!(initial_index(&items, "b.png"), Ok(1));
    }

    #[test]
    fn initial_index_reports_missing_reference() {
        let items = urls(&["a.png", "b.png"]);
        let result = initial_index(&items, "z.png");
        assert_eq!(result, Err(Error::ActiveImageNotFound("z.png".to_string())));
    }

    #[test]
    fn next_and_previous_are_inverses() {
        for len in 1..6 {
            for i in 0..len {
                assert_eq!(next_index(previous_index(i, len), len), i);
                assert_eq!(previous_index(next_index(i, len), len), i);
            }
        }
    }

    #[test]
    fn navigation_stays_in_bounds() {
        for len in 1..6 {
            for i in 0..len {
                assert!(next_index(i, len) < len);
                assert!(previous_index(i, len) < len);
            }
        }
    }

    #[test]
    fn single_item_wraps_onto_itself() {
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(previous_index(0, 1), 0);
    }

    #[test]
    fn empty_list_cannot_become_a_gallery() {
        assert_eq!(Gallery::new_at(Vec::new(), 0), Err(Error::EmptyGallery));
    }

    #[test]
    fn sequence_from_middle_wraps_both_ways() {
        let mut gallery = Gallery::new(urls(&["a", "b", "c"]), "b").expect("gallery");
        assert_eq!(gallery.current_index(), 1);

        assert_eq!(gallery.next(), "c");
        assert_eq!(gallery.next(), "a"); // wraps forward
        assert_eq!(gallery.previous(), "c"); // wraps backward
        assert_eq!(gallery.current_index(), 2);
    }

    #[test]
    fn position_is_one_based() {
        let gallery = Gallery::new(urls(&["a", "b", "c"]), "a").expect("gallery");
        assert_eq!(gallery.position(), (1, 3));
    }

    #[test]
    fn out_of_range_start_index_is_pulled_into_bounds() {
        let gallery = Gallery::new_at(urls(&["a", "b"]), 99).expect("gallery");
        assert_eq!(gallery.current_index(), 1);
    }
}
