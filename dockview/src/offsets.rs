use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseOffsetsError {
    #[error("expected 1, 2 or 4 offset values, got {0}")]
    InvalidCount(usize),
    #[error("invalid offset value `{0}`")]
    InvalidNumber(String),
}

/// Four-sided inset vector, in CSS pixels.
///
/// Built from a CSS-shorthand-style list:
/// - `[v]` → `(v, v, v, v)`
/// - `[v0, v1]` → `(v0, v1, v0, v1)`
/// - `[t, r, b, l]` → as-is
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offsets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Offsets {
    pub const ZERO: Self = Self::uniform(0.0);

    pub const fn uniform(v: f64) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn from_values(values: &[f64]) -> Result<Self, ParseOffsetsError> {
        match *values {
            [v] => Ok(Self::uniform(v)),
            [v0, v1] => Ok(Self::new(v0, v1, v0, v1)),
            [t, r, b, l] => Ok(Self::new(t, r, b, l)),
            _ => Err(ParseOffsetsError::InvalidCount(values.len())),
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl FromStr for Offsets {
    type Err = ParseOffsetsError;

    /// Parses a space-separated list of numbers. Blank input yields [`Offsets::ZERO`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(|token| match token.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(v),
                _ => Err(ParseOffsetsError::InvalidNumber(token.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()?;
        if values.is_empty() {
            return Ok(Self::ZERO);
        }
        Self::from_values(&values)
    }
}
