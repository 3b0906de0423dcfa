//! Default segmenter.
//!
//! Escape sequences are split off first, then URLs are carved out of the
//! remaining text, then whatever is left is broken into word pieces or
//! grapheme clusters.

use unicode_segmentation::UnicodeSegmentation;

use super::ansi::{AnsiRun, ansi_runs};
use super::url::{UrlRun, url_runs};
use super::{Segment, SegmentKind, Segmenter, SegmenterOptions};

bitflags::bitflags! {
    /// Segmentation policy compiled from [`SegmenterOptions`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SegmentFlags: u8 {
        const NONE        = 0;
        const REMOVE_ANSI = 1 << 0;
        const SAFE_URLS   = 1 << 1;
        const SAFE_WORDS  = 1 << 2;
    }
}

impl From<&SegmenterOptions> for SegmentFlags {
    fn from(options: &SegmenterOptions) -> Self {
        let mut flags = Self::NONE;
        flags.set(Self::REMOVE_ANSI, options.remove_ansi);
        flags.set(Self::SAFE_URLS, options.safe_urls);
        flags.set(Self::SAFE_WORDS, options.safe_words);
        flags
    }
}

/// UAX #29 based segmenter with ANSI and URL awareness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSegmenter {
    flags: SegmentFlags,
    locales: Vec<String>,
}

impl TextSegmenter {
    pub fn new(options: &SegmenterOptions) -> Self {
        Self {
            flags: SegmentFlags::from(options),
            locales: options.locales.clone(),
        }
    }

    pub fn flags(&self) -> SegmentFlags {
        self.flags
    }

    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    fn segment_text<'a>(&self, text: &'a str, out: &mut Vec<Segment<'a>>) {
        if !self.flags.contains(SegmentFlags::SAFE_URLS) {
            self.segment_plain(text, out);
            return;
        }

        for run in url_runs(text) {
            match run {
                UrlRun::Url(url) => out.push(Segment::new(url, SegmentKind::Url)),
                UrlRun::Text(rest) => self.segment_plain(rest, out),
            }
        }
    }

    fn segment_plain<'a>(&self, text: &'a str, out: &mut Vec<Segment<'a>>) {
        if self.flags.contains(SegmentFlags::SAFE_WORDS) {
            out.extend(
                text.split_word_bounds()
                    .map(|piece| Segment::new(piece, SegmentKind::Word)),
            );
        } else {
            out.extend(
                text.graphemes(true)
                    .map(|grapheme| Segment::new(grapheme, SegmentKind::Grapheme)),
            );
        }
    }
}

impl Default for TextSegmenter {
    fn default() -> Self {
        Self::new(&SegmenterOptions::default())
    }
}

impl Segmenter for TextSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        let mut segments = Vec::new();

        for run in ansi_runs(text) {
            match run {
                AnsiRun::Escape(seq) => {
                    if !self.flags.contains(SegmentFlags::REMOVE_ANSI) {
                        segments.push(Segment::new(seq, SegmentKind::Ansi));
                    }
                }
                AnsiRun::Text(plain) => self.segment_text(plain, &mut segments),
            }
        }

        segments
    }
}
