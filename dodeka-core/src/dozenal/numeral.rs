//! Signed integer to dozenal digit string conversion and back
//!
//! Digit alphabet: 0-9, then X for ten and E for eleven.

use heapless::{String, Vec};

/// Maximum digits in the dozenal rendering of an `i32` magnitude
/// (12^9 exceeds `u32::MAX`)
pub const MAX_DIGITS: usize = 9;

/// Maximum rendered length in bytes: sign plus digits
pub const MAX_NUMERAL_LEN: usize = MAX_DIGITS + 1;

/// A single dozenal digit, value 0..=11
///
/// Each value maps bijectively to exactly one display symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    /// Create a digit, refusing values outside 0..=11
    pub const fn new(value: u8) -> Option<Self> {
        if value < 12 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Numeric value, 0..=11
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Display symbol: 0-9, X for ten, E for eleven
    pub const fn to_char(self) -> char {
        match self.0 {
            10 => 'X',
            11 => 'E',
            units => (b'0' + units) as char,
        }
    }

    /// Digit for a display symbol
    pub const fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            '0'..='9' => Some(Self(symbol as u8 - b'0')),
            'X' => Some(Self(10)),
            'E' => Some(Self(11)),
            _ => None,
        }
    }
}

/// Errors from parsing a dozenal string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// No digits in the input
    Empty,
    /// A character outside the digit alphabet
    InvalidDigit,
    /// Value does not fit the target integer
    Overflow,
}

/// A signed dozenal numeral: sign flag plus most-significant-first digits
///
/// Never empty; no leading zero digits except the numeral for zero itself.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Numeral {
    negative: bool,
    digits: Vec<Digit, MAX_DIGITS>,
}

impl Numeral {
    /// Convert a decimal integer by repeated truncating division by twelve
    ///
    /// The magnitude is widened before negation, so `i32::MIN` converts
    /// without overflow. The sign convention is a single leading `-` for
    /// the whole numeral, never per-digit signs.
    pub fn from_decimal(value: i32) -> Self {
        let mut magnitude = value.unsigned_abs();
        let mut digits: Vec<Digit, MAX_DIGITS> = Vec::new();
        loop {
            // capacity covers every u32 magnitude, push cannot fail
            let _ = digits.push(Digit((magnitude % 12) as u8));
            magnitude /= 12;
            if magnitude == 0 {
                break;
            }
        }
        digits.reverse();
        Self {
            negative: value < 0,
            digits,
        }
    }

    /// Parse a rendered numeral (inverse of `render`)
    ///
    /// Redundant leading zeros are accepted and normalized away.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        if body.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut digits: Vec<Digit, MAX_DIGITS> = Vec::new();
        for symbol in body.chars() {
            let digit = Digit::from_char(symbol).ok_or(ParseError::InvalidDigit)?;
            if digits.is_empty() && digit.value() == 0 {
                continue;
            }
            digits.push(digit).map_err(|_| ParseError::Overflow)?;
        }
        if digits.is_empty() {
            // all zeros collapse to the zero numeral
            let _ = digits.push(Digit(0));
        }

        Ok(Self { negative, digits })
    }

    /// Whether the numeral carries a negative sign
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Digits, most significant first
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Decimal value, widened so every `i32` input round-trips
    pub fn to_decimal(&self) -> i64 {
        let mut value: i64 = 0;
        for digit in &self.digits {
            value = value * 12 + i64::from(digit.value());
        }
        if self.negative {
            -value
        } else {
            value
        }
    }

    /// Last two digits of the magnitude, left-padded with '0'
    ///
    /// Used for the year on the date line; defined over the digit
    /// sequence, not over any fixed-width decimal rendering.
    pub fn last_two(&self) -> String<2> {
        let mut out = String::new();
        if self.digits.len() < 2 {
            let _ = out.push('0');
        }
        let tail = &self.digits[self.digits.len().saturating_sub(2)..];
        for digit in tail {
            let _ = out.push(digit.to_char());
        }
        out
    }

    /// Render as a minimal-length digit string with at most one leading '-'
    pub fn render(&self) -> String<MAX_NUMERAL_LEN> {
        let mut out = String::new();
        if self.negative {
            let _ = out.push('-');
        }
        for digit in &self.digits {
            let _ = out.push(digit.to_char());
        }
        out
    }
}

/// Render a decimal integer as a dozenal string
pub fn to_dozenal(value: i32) -> String<MAX_NUMERAL_LEN> {
    Numeral::from_decimal(value).render()
}

/// Parse a dozenal string back to a decimal integer
pub fn parse_dozenal(text: &str) -> Result<i32, ParseError> {
    let value = Numeral::parse(text)?.to_decimal();
    i32::try_from(value).map_err(|_| ParseError::Overflow)
}
