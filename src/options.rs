//! Truncator options and deserializable configuration.
//!
//! [`TruncatorOptions`] is the flat option bag a truncator is built from:
//! ellipsis settings plus the segmentation policy. Only the segmentation
//! fields are forwarded to the segmenter.
//!
//! [`TruncatorConfig`] pairs a maximum length with options so a whole
//! truncator can be described in a config document (JSON, TOML, ...).
//! Both accept snake_case keys and the camelCase spellings
//! (`ellipsisMark`, `removeANSI`, `safeURLs`, ...).

use serde::Deserialize;

use crate::length::MaximumLength;
use crate::position::EllipsisPosition;
use crate::segment::SegmenterOptions;

/// Ellipsis mark used when none is configured.
pub const DEFAULT_ELLIPSIS_MARK: &str = "...";

/// Options for building a [`Truncator`](crate::Truncator).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TruncatorOptions {
    /// Defaults to `"..."`.
    #[serde(alias = "ellipsisMark")]
    pub ellipsis_mark: Option<String>,
    /// Defaults to [`EllipsisPosition::End`].
    #[serde(alias = "ellipsisPosition")]
    pub ellipsis_position: Option<EllipsisPosition>,
    pub locales: Vec<String>,
    #[serde(alias = "removeANSI")]
    pub remove_ansi: bool,
    #[serde(alias = "safeURLs")]
    pub safe_urls: bool,
    #[serde(alias = "safeWords")]
    pub safe_words: bool,
}

impl Default for TruncatorOptions {
    fn default() -> Self {
        let segmenter = SegmenterOptions::default();
        Self {
            ellipsis_mark: None,
            ellipsis_position: None,
            locales: segmenter.locales,
            remove_ansi: segmenter.remove_ansi,
            safe_urls: segmenter.safe_urls,
            safe_words: segmenter.safe_words,
        }
    }
}

impl TruncatorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ellipsis_mark(mut self, mark: impl Into<String>) -> Self {
        self.ellipsis_mark = Some(mark.into());
        self
    }

    pub fn with_ellipsis_position(mut self, position: EllipsisPosition) -> Self {
        self.ellipsis_position = Some(position);
        self
    }

    pub fn with_locales<I, L>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        self.locales = locales.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_remove_ansi(mut self, remove_ansi: bool) -> Self {
        self.remove_ansi = remove_ansi;
        self
    }

    pub fn with_safe_urls(mut self, safe_urls: bool) -> Self {
        self.safe_urls = safe_urls;
        self
    }

    pub fn with_safe_words(mut self, safe_words: bool) -> Self {
        self.safe_words = safe_words;
        self
    }

    /// The configured ellipsis mark, or the default.
    pub fn ellipsis_mark(&self) -> &str {
        self.ellipsis_mark.as_deref().unwrap_or(DEFAULT_ELLIPSIS_MARK)
    }

    /// The configured ellipsis position, or the default.
    pub fn ellipsis_position(&self) -> EllipsisPosition {
        self.ellipsis_position.unwrap_or_default()
    }

    /// The segmentation subset of these options. Ellipsis settings are not
    /// part of it.
    pub fn segmenter_options(&self) -> SegmenterOptions {
        SegmenterOptions {
            locales: self.locales.clone(),
            remove_ansi: self.remove_ansi,
            safe_urls: self.safe_urls,
            safe_words: self.safe_words,
        }
    }
}

/// A complete truncator description.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TruncatorConfig {
    #[serde(alias = "maximumLength")]
    pub maximum_length: MaximumLength,
    #[serde(default)]
    pub options: TruncatorOptions,
}
