//! Core domain types for the coin toss simulator.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod session;
pub mod ui;

pub use session::{SessionHistory, SessionRecord, SessionSummary, percentage};

use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use thiserror::Error;

// ============================================================================
// Face
// ============================================================================

/// One side of the coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Heads,
    Tails,
}

impl Face {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Face::Heads => "Heads",
            Face::Tails => "Tails",
        }
    }

    /// Map a fair bit onto a face. `true` is heads.
    #[must_use]
    pub const fn from_bit(bit: bool) -> Self {
        if bit { Face::Heads } else { Face::Tails }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Flip count + input validation
// ============================================================================

/// Rejection reasons for the flip-count text field.
///
/// The display strings are shown to the user verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid input. Please enter a valid number.")]
    NotANumber,
    #[error("Please enter a positive number.")]
    NotPositive,
}

/// A validated, strictly positive number of flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlipCount(NonZeroU64);

impl FlipCount {
    #[must_use]
    pub const fn new(value: u64) -> Option<Self> {
        match NonZeroU64::new(value) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Parse raw user input.
    ///
    /// Surrounding whitespace and one leading sign are accepted, as are single
    /// underscores between digits (`1_000`). Any negative integer, however
    /// long, reports [`InputError::NotPositive`]. Positive values beyond
    /// `u64::MAX` report [`InputError::NotANumber`].
    pub fn parse(raw: &str) -> Result<Self, InputError> {
        let trimmed = raw.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let digits = strip_digit_separators(unsigned).ok_or(InputError::NotANumber)?;

        if negative {
            return Err(InputError::NotPositive);
        }
        let value = digits.parse::<u64>().map_err(|_| InputError::NotANumber)?;
        Self::new(value).ok_or(InputError::NotPositive)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

/// ASCII digits with `_` allowed only between two digits. Returns the digits alone.
fn strip_digit_separators(raw: &str) -> Option<String> {
    let mut digits = String::with_capacity(raw.len());
    let mut prev_was_digit = false;
    for c in raw.chars() {
        match c {
            '0'..='9' => {
                digits.push(c);
                prev_was_digit = true;
            }
            '_' if prev_was_digit => prev_was_digit = false,
            _ => return None,
        }
    }
    (prev_was_digit && !digits.is_empty()).then_some(digits)
}

impl FromStr for FlipCount {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FlipCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_labels() {
        assert_eq!(Face::Heads.to_string(), "Heads");
        assert_eq!(Face::Tails.to_string(), "Tails");
        assert_eq!(Face::from_bit(true), Face::Heads);
        assert_eq!(Face::from_bit(false), Face::Tails);
    }

    #[test]
    fn parse_accepts_positive_integers() {
        assert_eq!(FlipCount::parse("10").map(FlipCount::get), Ok(10));
        assert_eq!(FlipCount::parse("  7\n").map(FlipCount::get), Ok(7));
        assert_eq!(FlipCount::parse("+3").map(FlipCount::get), Ok(3));
        assert_eq!("1".parse::<FlipCount>().map(FlipCount::get), Ok(1));
    }

    #[test]
    fn parse_rejects_non_integers() {
        for raw in [
            "", "   ", "abc", "3.5", "1e3", "ten", "5 5", "0x10", "--1", "+-1", "+", "-",
        ] {
            assert_eq!(
                FlipCount::parse(raw),
                Err(InputError::NotANumber),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn parse_rejects_non_positive_integers() {
        for raw in ["0", "-0", "-1", "-250", "-99999999999999999999999"] {
            assert_eq!(
                FlipCount::parse(raw),
                Err(InputError::NotPositive),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn parse_accepts_digit_separators() {
        assert_eq!(FlipCount::parse("1_000").map(FlipCount::get), Ok(1000));
        assert_eq!(FlipCount::parse(" +2_5 ").map(FlipCount::get), Ok(25));
        assert_eq!(FlipCount::parse("-1_0"), Err(InputError::NotPositive));
        assert_eq!(FlipCount::parse("0_0"), Err(InputError::NotPositive));
        for raw in ["_1", "1_", "1__0", "+_1", "_"] {
            assert_eq!(
                FlipCount::parse(raw),
                Err(InputError::NotANumber),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn parse_covers_the_full_u64_range() {
        assert_eq!(
            FlipCount::parse("18446744073709551615").map(FlipCount::get),
            Ok(u64::MAX)
        );
        assert_eq!(
            FlipCount::parse("18446744073709551616"),
            Err(InputError::NotANumber)
        );
    }

    #[test]
    fn input_error_messages() {
        assert_eq!(
            InputError::NotANumber.to_string(),
            "Invalid input. Please enter a valid number."
        );
        assert_eq!(
            InputError::NotPositive.to_string(),
            "Please enter a positive number."
        );
    }

    #[test]
    fn flip_count_rejects_zero() {
        assert!(FlipCount::new(0).is_none());
        assert_eq!(FlipCount::new(4).map(FlipCount::get), Some(4));
    }
}
