//! Segment-aware string truncation.
//!
//! Truncates a string to a maximum length without ever splitting an
//! indivisible unit, and marks the cut with a configurable ellipsis placed
//! at the start, middle or end of the result.
//!
//! # Capabilities
//!
//! - **Grapheme safety**: emoji ZWJ sequences, flags, skin tones and
//!   combining marks are kept whole
//! - **Word safety**: cuts fall on UAX #29 word boundaries (optional)
//! - **URL safety**: URLs are kept whole or dropped entirely (optional)
//! - **ANSI awareness**: escape sequences are kept whole, or removed
//! - **Ellipsis position**: `start`, `middle` or `end`
//!
//! Lengths are counted in `char`s, not terminal cells.
//!
//! ```text
//! input: "Vel ex sit est sit est tempor enim", maximum length 20
//!
//! end     "Vel ex sit est ..."
//! start   "... est tempor enim"
//! middle  "Vel ex ... enim"
//! ```
//!
//! # Example
//!
//! ```
//! use string_truncator::{EllipsisPosition, Truncator, TruncatorOptions};
//!
//! let truncator = Truncator::new(
//!     15,
//!     TruncatorOptions::new().with_ellipsis_position(EllipsisPosition::Middle),
//! )?;
//! assert_eq!(truncator.truncate("Hello brave new world"), "Hello ... world");
//! # Ok::<(), string_truncator::TruncateError>(())
//! ```

pub mod error;
pub mod length;
pub mod options;
pub mod position;
pub mod segment;
pub mod truncate;

pub use error::{Result, TruncateError};
pub use length::{MAX_SAFE_LENGTH, MaximumLength};
pub use options::{DEFAULT_ELLIPSIS_MARK, TruncatorConfig, TruncatorOptions};
pub use position::EllipsisPosition;
pub use segment::{Segment, SegmentKind, Segmenter, SegmenterOptions, TextSegmenter};
pub use truncate::Truncator;

/// Truncate `item` to `maximum_length` in one call.
///
/// Same as building a [`Truncator`] and calling
/// [`truncate`](Truncator::truncate) once.
pub fn truncate(item: &str, maximum_length: usize, options: TruncatorOptions) -> Result<String> {
    Truncator::once(item, maximum_length, options)
}
