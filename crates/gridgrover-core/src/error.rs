//! Error taxonomy for configuration loading, variation lookup, and aggregation.
//!
//! Resolution misses (a measurement key whose decoded index falls outside the
//! positions list) are deliberately *not* errors anywhere in this crate; every
//! consumer skips them. See [`crate::position::resolve`].

use std::fmt;

use crate::position::Position;

/// Errors raised while loading or validating a search configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    /// Grid width declared as zero.
    ZeroWidth,
    /// Per-cell bit width declared as zero.
    ZeroByteSize,
    /// Map token count is not an exact multiple of `width × byte_size`.
    MisalignedMap { tokens: usize, row_stride: usize },
    /// Map contains a character other than `0`, `1`, `X`, or whitespace.
    BadMapToken(char),
    /// Pattern entry is not a single `0` or `1` digit.
    BadPatternDigit { axis: &'static str, digit: String },
    /// Externally supplied positions list has the wrong length.
    PositionsLength { expected: usize, actual: usize },
    /// Externally supplied positions list is not in row-major order.
    PositionsOrder {
        index: usize,
        found: Position,
        expected: Position,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Json(e) => write!(f, "config JSON error: {e}"),
            ConfigError::ZeroWidth => write!(f, "grid width must be at least 1"),
            ConfigError::ZeroByteSize => write!(f, "per-cell bit width must be at least 1"),
            ConfigError::MisalignedMap { tokens, row_stride } => write!(
                f,
                "map has {tokens} binary tokens, which is not a multiple of \
                 width × byte_size = {row_stride}"
            ),
            ConfigError::BadMapToken(c) => {
                write!(f, "map contains invalid character {c:?} (expected 0/1/X)")
            }
            ConfigError::BadPatternDigit { axis, digit } => write!(
                f,
                "{axis} pattern entry {digit:?} is not a binary digit (\"0\" or \"1\")"
            ),
            ConfigError::PositionsLength { expected, actual } => write!(
                f,
                "positions list has {actual} entries, expected height × width = {expected}"
            ),
            ConfigError::PositionsOrder {
                index,
                found,
                expected,
            } => write!(
                f,
                "positions list is not row-major at index {index}: found \
                 ({}, {}), expected ({}, {})",
                found.row, found.col, expected.row, expected.col
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

/// Errors raised by the variation switcher catalog.
#[derive(Debug)]
pub enum VariationError {
    /// The requested name is not in the catalog. Carries every known name so
    /// callers can list the alternatives instead of failing silently.
    UnknownName {
        name: String,
        known: Vec<&'static str>,
    },
}

impl fmt::Display for VariationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariationError::UnknownName { name, known } => write!(
                f,
                "unknown variation {name:?}; available variations: {}",
                known.join(", ")
            ),
        }
    }
}

impl std::error::Error for VariationError {}

/// Errors raised by the statistics aggregator.
#[derive(Debug, PartialEq, Eq)]
pub enum AggregateError {
    /// Counts mapping has zero total shots; probabilities are undefined.
    EmptyCounts,
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregateError::EmptyCounts => {
                write!(f, "empty result set: counts mapping has no shots")
            }
        }
    }
}

impl std::error::Error for AggregateError {}
