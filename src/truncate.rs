//! Segment-aware truncation with a positioned ellipsis.
//!
//! Truncates text to fit within a maximum length (counted in `char`s),
//! inserting an ellipsis mark at the start, middle or end. Only whole
//! segments are kept, so grapheme clusters, URLs, escape sequences and
//! (optionally) words are never cut.
//!
//! The prefix and suffix are accumulated independently over the same
//! segment list. When the segmenter yields fewer or larger segments than
//! the raw length suggests (ANSI removal, a single huge segment), the two
//! sides may pick up the same segments. The assembled string is not
//! re-measured afterwards.

use tracing::{debug, trace};

use crate::error::Result;
use crate::length::{MaximumLength, check_length};
use crate::options::{TruncatorConfig, TruncatorOptions};
use crate::position::EllipsisPosition;
use crate::segment::{Segmenter, TextSegmenter};

/// Truncates strings to a fixed maximum length.
///
/// Configuration is validated once at construction and never changes;
/// [`truncate_with`](Self::truncate_with) applies a per-call maximum length
/// without touching it. A truncator can be shared across threads when its
/// segmenter can.
#[derive(Debug, Clone)]
pub struct Truncator<S = TextSegmenter> {
    ellipsis_mark: String,
    ellipsis_len: usize,
    ellipsis_position: EllipsisPosition,
    maximum_length: MaximumLength,
    result_length_maximum: usize,
    segmenter: S,
}

impl Truncator<TextSegmenter> {
    /// Build a truncator using the default [`TextSegmenter`].
    ///
    /// Fails with `InvalidArgument` when `maximum_length` exceeds
    /// [`MAX_SAFE_LENGTH`](crate::MAX_SAFE_LENGTH), or `Configuration` when
    /// the ellipsis mark is longer than `maximum_length`.
    pub fn new(maximum_length: usize, options: TruncatorOptions) -> Result<Self> {
        let maximum_length = MaximumLength::try_from(maximum_length)?;
        Self::build(maximum_length, &options)
    }

    /// Build a truncator from a deserialized config.
    pub fn from_config(config: &TruncatorConfig) -> Result<Self> {
        Self::build(config.maximum_length, &config.options)
    }

    /// Build a truncator and truncate `item` once.
    pub fn once(item: &str, maximum_length: usize, options: TruncatorOptions) -> Result<String> {
        Ok(Self::new(maximum_length, options)?.truncate(item))
    }

    fn build(maximum_length: MaximumLength, options: &TruncatorOptions) -> Result<Self> {
        let segmenter = TextSegmenter::new(&options.segmenter_options());
        Self::configure(maximum_length, options, segmenter)
    }
}

impl<S: Segmenter> Truncator<S> {
    /// Build a truncator around a custom segmenter.
    ///
    /// Only the ellipsis settings of `options` are used; segmentation is
    /// entirely up to `segmenter`.
    pub fn with_segmenter(
        maximum_length: usize,
        options: &TruncatorOptions,
        segmenter: S,
    ) -> Result<Self> {
        let maximum_length = MaximumLength::try_from(maximum_length)?;
        Self::configure(maximum_length, options, segmenter)
    }

    fn configure(
        maximum_length: MaximumLength,
        options: &TruncatorOptions,
        segmenter: S,
    ) -> Result<Self> {
        let ellipsis_mark = options.ellipsis_mark().to_string();
        let ellipsis_len = ellipsis_mark.chars().count();
        let ellipsis_position = options.ellipsis_position();
        let result_length_maximum = check_length(maximum_length, ellipsis_len)?;

        debug!(
            maximum_length = maximum_length.get(),
            ellipsis_len,
            position = %ellipsis_position,
            "truncator configured"
        );

        Ok(Self {
            ellipsis_mark,
            ellipsis_len,
            ellipsis_position,
            maximum_length,
            result_length_maximum,
            segmenter,
        })
    }

    pub fn maximum_length(&self) -> usize {
        self.maximum_length.get()
    }

    pub fn ellipsis_mark(&self) -> &str {
        &self.ellipsis_mark
    }

    pub fn ellipsis_position(&self) -> EllipsisPosition {
        self.ellipsis_position
    }

    /// Room left for original content: maximum length minus ellipsis length.
    pub fn result_length_maximum(&self) -> usize {
        self.result_length_maximum
    }

    pub fn segmenter(&self) -> &S {
        &self.segmenter
    }

    /// Truncate `item` to the configured maximum length.
    ///
    /// Returns `item` unchanged when it already fits.
    pub fn truncate(&self, item: &str) -> String {
        self.truncate_within(item, self.maximum_length.get(), self.result_length_maximum)
    }

    /// Truncate `item` to `maximum_length_override` instead of the
    /// configured maximum. The ellipsis and segmentation settings stay as
    /// configured.
    pub fn truncate_with(&self, item: &str, maximum_length_override: usize) -> Result<String> {
        let maximum_length = MaximumLength::try_from(maximum_length_override)?;
        let result_length_maximum = check_length(maximum_length, self.ellipsis_len)?;
        Ok(self.truncate_within(item, maximum_length.get(), result_length_maximum))
    }

    fn truncate_within(
        &self,
        item: &str,
        maximum_length: usize,
        result_length_maximum: usize,
    ) -> String {
        // Byte length bounds char length, so short items skip the count.
        if item.len() <= maximum_length || item.chars().count() <= maximum_length {
            trace!(maximum_length, "item fits, returned unchanged");
            return item.to_string();
        }

        let (start_budget, end_budget) =
            split_budget(self.ellipsis_position, result_length_maximum);

        let segments: Vec<(&str, usize)> = self
            .segmenter
            .segment(item)
            .into_iter()
            .map(|segment| (segment.value, segment.len()))
            .collect();

        let start = accumulate_front(&segments, start_budget);
        let end = accumulate_back(&segments, end_budget);

        trace!(
            maximum_length,
            start_budget,
            end_budget,
            segments = segments.len(),
            "item truncated"
        );

        let mut result =
            String::with_capacity(start.len() + self.ellipsis_mark.len() + end.len());
        result.push_str(&start);
        result.push_str(&self.ellipsis_mark);
        result.push_str(&end);
        result
    }
}

/// Split the result budget into `(start, end)` budgets.
///
/// The middle split floors, so an odd budget leaves one unit unused.
fn split_budget(position: EllipsisPosition, result_length_maximum: usize) -> (usize, usize) {
    match position {
        EllipsisPosition::End => (result_length_maximum, 0),
        EllipsisPosition::Start => (0, result_length_maximum),
        EllipsisPosition::Middle => {
            let half = result_length_maximum / 2;
            (half, half)
        }
    }
}

/// Longest run of whole segments from the front that fits in `budget`.
fn accumulate_front(segments: &[(&str, usize)], budget: usize) -> String {
    let mut result = String::new();
    let mut len = 0;

    for &(value, seg_len) in segments {
        if len + seg_len > budget {
            break;
        }
        result.push_str(value);
        len += seg_len;
    }

    result
}

/// Longest run of whole segments from the back that fits in `budget`.
fn accumulate_back(segments: &[(&str, usize)], budget: usize) -> String {
    let mut taken = 0;
    let mut len = 0;

    for &(_, seg_len) in segments.iter().rev() {
        if len + seg_len > budget {
            break;
        }
        len += seg_len;
        taken += 1;
    }

    segments[segments.len() - taken..]
        .iter()
        .map(|&(value, _)| value)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::error::TruncateError;
    use crate::segment::{Segment, SegmentKind};

    fn chars_only() -> TruncatorOptions {
        TruncatorOptions::new().with_safe_words(false)
    }

    fn positioned(position: EllipsisPosition) -> TruncatorOptions {
        chars_only().with_ellipsis_position(position)
    }

    /// Splits on `|`; counts how often it is asked.
    #[derive(Default)]
    struct PipeSegmenter {
        calls: AtomicUsize,
    }

    impl Segmenter for PipeSegmenter {
        fn segment<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            text.split('|')
                .map(|piece| Segment::new(piece, SegmentKind::Word))
                .collect()
        }
    }

    // ── split_budget ──

    #[test]
    fn budget_by_position() {
        assert_eq!(split_budget(EllipsisPosition::End, 7), (7, 0));
        assert_eq!(split_budget(EllipsisPosition::Start, 7), (0, 7));
        assert_eq!(split_budget(EllipsisPosition::Middle, 7), (3, 3));
        assert_eq!(split_budget(EllipsisPosition::Middle, 8), (4, 4));
        assert_eq!(split_budget(EllipsisPosition::Middle, 0), (0, 0));
    }

    // ── accumulation ──

    #[test]
    fn front_stops_at_first_overflow() {
        let segments = [("ab", 2), ("c", 1), ("defg", 4), ("h", 1)];
        assert_eq!(accumulate_front(&segments, 4), "abc");
        // "h" would fit but comes after the segment that did not.
        assert_eq!(accumulate_front(&segments, 5), "abc");
        assert_eq!(accumulate_front(&segments, 0), "");
    }

    #[test]
    fn back_stops_at_first_overflow() {
        let segments = [("ab", 2), ("c", 1), ("defg", 4), ("h", 1)];
        assert_eq!(accumulate_back(&segments, 5), "defgh");
        assert_eq!(accumulate_back(&segments, 4), "h");
        assert_eq!(accumulate_back(&segments, 0), "");
    }

    #[test]
    fn accumulate_empty_sequence() {
        assert_eq!(accumulate_front(&[], 3), "");
        assert_eq!(accumulate_back(&[], 3), "");
    }

    // ── construction ──

    #[test]
    fn stores_derived_budget() {
        let t = Truncator::new(10, TruncatorOptions::default()).unwrap();
        assert_eq!(t.maximum_length(), 10);
        assert_eq!(t.ellipsis_mark(), "...");
        assert_eq!(t.ellipsis_position(), EllipsisPosition::End);
        assert_eq!(t.result_length_maximum(), 7);
    }

    #[test]
    fn ellipsis_counted_in_chars() {
        let t = Truncator::new(1, TruncatorOptions::new().with_ellipsis_mark("…")).unwrap();
        assert_eq!(t.result_length_maximum(), 0);
    }

    #[test]
    fn ellipsis_too_long() {
        let err = Truncator::new(3, TruncatorOptions::new().with_ellipsis_mark("....")).unwrap_err();
        assert_eq!(
            err,
            TruncateError::Configuration {
                ellipsis_len: 4,
                maximum_length: 3,
            }
        );
    }

    #[test]
    fn unsafe_maximum_length() {
        let err = Truncator::new(usize::MAX, TruncatorOptions::default()).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn segmenter_receives_segmentation_options() {
        let t = Truncator::new(
            10,
            TruncatorOptions::new()
                .with_ellipsis_mark("~")
                .with_locales(["ja"])
                .with_safe_urls(false),
        )
        .unwrap();
        assert_eq!(t.segmenter().locales(), ["ja"]);
        assert!(!t
            .segmenter()
            .flags()
            .contains(crate::segment::SegmentFlags::SAFE_URLS));
    }

    // ── truncate ──

    #[test]
    fn fits_unchanged() {
        let t = Truncator::new(5, TruncatorOptions::default()).unwrap();
        assert_eq!(t.truncate("hello"), "hello");
        assert_eq!(t.truncate(""), "");
    }

    #[test]
    fn multibyte_fits_by_chars() {
        // 4 chars, 12 bytes
        let t = Truncator::new(4, TruncatorOptions::default()).unwrap();
        assert_eq!(t.truncate("你好世界"), "你好世界");
    }

    #[test]
    fn end_position() {
        let t = Truncator::new(8, chars_only()).unwrap();
        assert_eq!(t.truncate("hello world"), "hello...");
    }

    #[test]
    fn start_position() {
        let t = Truncator::new(8, positioned(EllipsisPosition::Start)).unwrap();
        assert_eq!(t.truncate("hello world"), "...world");
    }

    #[test]
    fn middle_position() {
        let t = Truncator::new(9, positioned(EllipsisPosition::Middle)).unwrap();
        assert_eq!(t.truncate("abcdefghijkl"), "abc...jkl");
    }

    #[test]
    fn middle_odd_budget_floors() {
        // budget 7 → 3 + 3, one unit unused
        let t = Truncator::new(10, positioned(EllipsisPosition::Middle)).unwrap();
        let result = t.truncate("abcdefghijkl");
        assert_eq!(result, "abc...jkl");
        assert_eq!(result.chars().count(), 9);
    }

    #[test]
    fn word_boundaries() {
        let t = Truncator::new(10, TruncatorOptions::default()).unwrap();
        assert_eq!(t.truncate("Hello world foo"), "Hello ...");

        let t = Truncator::new(
            10,
            TruncatorOptions::new().with_ellipsis_position(EllipsisPosition::Start),
        )
        .unwrap();
        assert_eq!(t.truncate("Hello world foo"), "... foo");
    }

    #[test]
    fn zero_budget_yields_ellipsis_only() {
        let t = Truncator::new(3, chars_only()).unwrap();
        assert_eq!(t.truncate("abcdef"), "...");
    }

    #[test]
    fn oversized_segment_is_dropped() {
        let t = Truncator::new(10, TruncatorOptions::default()).unwrap();
        assert_eq!(t.truncate("https://example.com/very/long/path"), "...");
    }

    #[test]
    fn grapheme_never_split() {
        // "e\u{0301}" is two chars but one grapheme: it cannot fit a budget of 1.
        let t = Truncator::new(4, chars_only()).unwrap();
        assert_eq!(t.truncate("e\u{0301}xyzw"), "...");

        let t = Truncator::new(5, chars_only()).unwrap();
        assert_eq!(t.truncate("e\u{0301}xyzw"), "e\u{0301}...");
    }

    #[test]
    fn emoji_sequence_never_split() {
        let family = "👨\u{200D}👩\u{200D}👧"; // 5 chars
        let text = format!("{family}{family}");
        let t = Truncator::new(8, chars_only()).unwrap();
        assert_eq!(t.truncate(&text), format!("{family}..."));
        let t = Truncator::new(7, chars_only()).unwrap();
        assert_eq!(t.truncate(&text), "...");
    }

    #[test]
    fn ansi_sequence_never_split() {
        let t = Truncator::new(6, chars_only()).unwrap();
        // budget 3: the 5-char escape does not fit, nothing after it is taken
        assert_eq!(t.truncate("\x1b[31mabcdef"), "...");
        let t = Truncator::new(9, chars_only()).unwrap();
        assert_eq!(t.truncate("\x1b[31mabcdef"), "\x1b[31ma...");
    }

    #[test]
    fn sides_may_share_segments() {
        // With escapes removed only "a" and "b" remain, so both the prefix
        // and the suffix take the same two segments.
        let t = Truncator::new(
            5,
            positioned(EllipsisPosition::Middle)
                .with_ellipsis_mark("-")
                .with_remove_ansi(true),
        )
        .unwrap();
        assert_eq!(t.truncate("\x1b[31mab\x1b[0m"), "ab-ab");
    }

    // ── overrides ──

    #[test]
    fn override_applies_to_call_only() {
        let t = Truncator::new(100, chars_only()).unwrap();
        assert_eq!(t.truncate_with("hello world", 8).unwrap(), "hello...");
        assert_eq!(t.truncate("hello world"), "hello world");
        assert_eq!(t.maximum_length(), 100);
        assert_eq!(t.result_length_maximum(), 97);
    }

    #[test]
    fn override_can_raise_limit() {
        let t = Truncator::new(5, chars_only()).unwrap();
        assert_eq!(t.truncate_with("hello world", 11).unwrap(), "hello world");
    }

    #[test]
    fn override_validated() {
        let t = Truncator::new(100, TruncatorOptions::default()).unwrap();
        assert!(t.truncate_with("hello", 2).unwrap_err().is_configuration());
        assert!(t.truncate_with("hello", usize::MAX).unwrap_err().is_invalid_argument());
    }

    // ── custom segmenter ──

    #[test]
    fn fast_path_skips_segmenter() {
        let t = Truncator::with_segmenter(20, &TruncatorOptions::default(), PipeSegmenter::default())
            .unwrap();
        assert_eq!(t.truncate("short|text"), "short|text");
        assert_eq!(t.segmenter().calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn custom_segments_are_whole() {
        let t = Truncator::with_segmenter(12, &TruncatorOptions::default(), PipeSegmenter::default())
            .unwrap();
        // segments "alpha", "beta", "gamma" (separators dropped by the segmenter)
        assert_eq!(t.truncate("alpha|beta|gamma"), "alphabeta...");
        assert_eq!(t.segmenter().calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn once_matches_instance() {
        let options = chars_only().with_ellipsis_position(EllipsisPosition::Start);
        let instance = Truncator::new(8, options.clone()).unwrap();
        assert_eq!(
            Truncator::once("hello world", 8, options).unwrap(),
            instance.truncate("hello world")
        );
    }

    #[test]
    fn from_config() {
        let config: TruncatorConfig = serde_json::from_str(
            r#"{"maximumLength": 8, "options": {"safeWords": false, "ellipsisPosition": "Start"}}"#,
        )
        .unwrap();
        let t = Truncator::from_config(&config).unwrap();
        assert_eq!(t.truncate("hello world"), "...world");
    }

    #[test]
    fn shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Truncator>();
    }
}
