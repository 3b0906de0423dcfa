//! Error types for truncator construction and per-call overrides.
//!
//! Two failure kinds are kept distinct so callers can react differently:
//! - `InvalidArgument`: a maximum length that is not a non-negative safe
//!   integer, or an unknown ellipsis position name
//! - `Configuration`: an ellipsis mark longer than the maximum length
//!
//! Both are raised before any segmentation work happens.

/// Errors raised while validating truncator configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TruncateError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("ellipsis mark is too long: {ellipsis_len} exceeds maximum length {maximum_length}")]
    Configuration {
        ellipsis_len: usize,
        maximum_length: usize,
    },
}

impl TruncateError {
    /// True for `InvalidArgument`.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// True for `Configuration` (ellipsis too long).
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TruncateError>;
