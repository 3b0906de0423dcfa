//! Segmentation of text into atomic units.
//!
//! A [`Segmenter`] partitions a string into an ordered sequence of
//! [`Segment`]s that must never be split by truncation.
//!
//! # Segment kinds
//!
//! - **ANSI**: a whole escape sequence (CSI, OSC, DCS/PM/APC, two-char)
//! - **URL**: a whole URL, when `safe_urls` is enabled
//! - **Word**: a UAX #29 word-boundary piece (word, space run, punctuation),
//!   when `safe_words` is enabled
//! - **Grapheme**: an extended grapheme cluster (emoji sequences, flags,
//!   combining marks stay together)
//!
//! # Implementation
//!
//! Uses `unicode-segmentation` (UAX #29 grapheme and word boundaries) for
//! text, `regex` for URL detection and a byte scanner for escape sequences.

mod ansi;
mod text;
mod url;

use serde::Deserialize;

pub use ansi::{AnsiRun, AnsiRuns, ansi_runs};
pub use text::{SegmentFlags, TextSegmenter};
pub use url::{UrlRun, url_runs};

// =============================================================================
// Types
// =============================================================================

/// What a segment holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Ansi,
    Url,
    Word,
    Grapheme,
}

/// An atomic slice of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Contiguous slice of the segmented text.
    pub value: &'a str,
    pub kind: SegmentKind,
}

impl<'a> Segment<'a> {
    pub fn new(value: &'a str, kind: SegmentKind) -> Self {
        Self { value, kind }
    }

    /// Length in `char`s.
    #[inline]
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Segmentation policy.
///
/// `locales` is carried for custom segmenters; [`TextSegmenter`] applies the
/// root UAX #29 rules for every locale.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SegmenterOptions {
    pub locales: Vec<String>,
    #[serde(alias = "removeANSI")]
    pub remove_ansi: bool,
    #[serde(alias = "safeURLs")]
    pub safe_urls: bool,
    #[serde(alias = "safeWords")]
    pub safe_words: bool,
}

impl Default for SegmenterOptions {
    fn default() -> Self {
        Self {
            locales: Vec::new(),
            remove_ansi: false,
            safe_urls: true,
            safe_words: true,
        }
    }
}

// =============================================================================
// Segmenter
// =============================================================================

/// Partitions text into ordered, contiguous, non-overlapping segments.
///
/// Concatenating the values of the returned segments must reproduce `text`,
/// except for content a segmenter is configured to drop (ANSI removal).
pub trait Segmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<Segment<'a>>;
}

impl<S: Segmenter + ?Sized> Segmenter for &S {
    fn segment<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        (**self).segment(text)
    }
}

impl<S: Segmenter + ?Sized> Segmenter for Box<S> {
    fn segment<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        (**self).segment(text)
    }
}
