//! Maximum length validation.
//!
//! A maximum length must be a non-negative integer no larger than
//! [`MAX_SAFE_LENGTH`]. Lengths arriving from loosely typed sources (config
//! documents, `f64` values, signed integers) go through `TryFrom`, which
//! rejects negative, fractional, non-finite and oversized values.

use std::fmt;

use serde::Deserialize;

use crate::error::{Result, TruncateError};

/// Largest accepted maximum length: `2^53 - 1`, the largest integer an
/// IEEE 754 double represents exactly.
pub const MAX_SAFE_LENGTH: u64 = 9_007_199_254_740_991;

/// A validated maximum length, counted in `char`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "RawLength")]
pub struct MaximumLength(usize);

impl MaximumLength {
    /// The validated length.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for MaximumLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

fn not_safe(value: impl fmt::Display) -> TruncateError {
    TruncateError::InvalidArgument(format!(
        "maximum length `{value}` is not a non-negative safe integer"
    ))
}

impl TryFrom<u64> for MaximumLength {
    type Error = TruncateError;

    fn try_from(value: u64) -> Result<Self> {
        if value > MAX_SAFE_LENGTH {
            return Err(not_safe(value));
        }
        usize::try_from(value)
            .map(Self)
            .map_err(|_| not_safe(value))
    }
}

impl TryFrom<usize> for MaximumLength {
    type Error = TruncateError;

    fn try_from(value: usize) -> Result<Self> {
        Self::try_from(value as u64)
    }
}

impl TryFrom<i64> for MaximumLength {
    type Error = TruncateError;

    fn try_from(value: i64) -> Result<Self> {
        match u64::try_from(value) {
            Ok(v) => Self::try_from(v),
            Err(_) => Err(not_safe(value)),
        }
    }
}

impl TryFrom<i32> for MaximumLength {
    type Error = TruncateError;

    fn try_from(value: i32) -> Result<Self> {
        Self::try_from(i64::from(value))
    }
}

impl TryFrom<f64> for MaximumLength {
    type Error = TruncateError;

    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() || value.fract() != 0.0 || value < 0.0 {
            return Err(not_safe(value));
        }
        if value > MAX_SAFE_LENGTH as f64 {
            return Err(not_safe(value));
        }
        Self::try_from(value as u64)
    }
}

/// Wire form accepted when deserializing: an integer or a float.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLength {
    Integer(i64),
    Float(f64),
}

impl TryFrom<RawLength> for MaximumLength {
    type Error = TruncateError;

    fn try_from(raw: RawLength) -> Result<Self> {
        match raw {
            RawLength::Integer(v) => Self::try_from(v),
            RawLength::Float(v) => Self::try_from(v),
        }
    }
}

/// Check an ellipsis length against a maximum length.
///
/// Returns the result length budget, `maximum_length - ellipsis_len`, or a
/// `Configuration` error when the ellipsis alone does not fit.
pub fn check_length(maximum_length: MaximumLength, ellipsis_len: usize) -> Result<usize> {
    let maximum_length = maximum_length.get();
    if ellipsis_len > maximum_length {
        return Err(TruncateError::Configuration {
            ellipsis_len,
            maximum_length,
        });
    }
    Ok(maximum_length - ellipsis_len)
}
