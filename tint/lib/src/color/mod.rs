//! Hex color parsing and conversion to ANSI true-color sequences.
//!
//! A hex color is six hexadecimal digits, optionally preceded by a single
//! `#`. The digits are read in pairs as the red, green and blue channels.
//!
//! ## Examples
//!
//! ```
//! use tint::color::{background, foreground, parse_hex, reset, Rgb};
//!
//! let rgb = parse_hex("#ff8000").unwrap();
//! assert_eq!(rgb, Rgb::new(255, 128, 0));
//!
//! assert_eq!(foreground("00ff00").unwrap(), "\x1b[38;2;0;255;0m");
//! assert_eq!(background("#000000").unwrap(), "\x1b[48;2;0;0;0m");
//! assert_eq!(reset(), "\x1b[0m");
//!
//! assert!(parse_hex("fff").is_err());
//! ```

pub mod ansi;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use ansi::{reset, RESET};

/// Number of hex digits in a color, after the optional `#` is removed.
const HEX_DIGITS: usize = 6;

/// Errors produced while parsing a hex color.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The input was not six hexadecimal digits (with an optional leading `#`).
    #[error("Invalid hex color: '{0}'")]
    InvalidColorFormat(String),
}

/// A red/green/blue triple.
///
/// Only produced by parsing a hex color (see [`parse_hex`]) or by
/// [`Rgb::new`]; each channel is a full byte so the 0-255 range holds by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// The foreground escape sequence for this color.
    pub fn fg_sequence(&self) -> String {
        ansi::fg_rgb(self.red, self.green, self.blue)
    }

    /// The background escape sequence for this color.
    pub fn bg_sequence(&self) -> String {
        ansi::bg_rgb(self.red, self.green, self.blue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl TryFrom<&str> for Rgb {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_hex(value)
    }
}

/// Parses a hex color (`RRGGBB` or `#RRGGBB`) into an [`Rgb`] triple.
///
/// Exactly one leading `#` is stripped. What remains must be six ASCII hex
/// digits (either case).
///
/// ## Errors
///
/// Returns [`ColorError::InvalidColorFormat`] when the stripped input is not
/// six characters long or contains a non-hexadecimal character.
pub fn parse_hex(input: &str) -> Result<Rgb, ColorError> {
    let digits = input.strip_prefix('#').unwrap_or(input);

    // `from_str_radix` accepts a leading '+', so check the digits up front
    if digits.len() != HEX_DIGITS || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidColorFormat(input.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| ColorError::InvalidColorFormat(input.to_string()))
    };

    Ok(Rgb {
        red: channel(0..2)?,
        green: channel(2..4)?,
        blue: channel(4..6)?,
    })
}

/// Returns the foreground sequence `\x1b[38;2;R;G;Bm` for a hex color.
///
/// ## Errors
///
/// Fails with [`ColorError::InvalidColorFormat`] under the same rules as
/// [`parse_hex`].
pub fn foreground(input: &str) -> Result<String, ColorError> {
    parse_hex(input).map(|rgb| rgb.fg_sequence())
}

/// Returns the background sequence `\x1b[48;2;R;G;Bm` for a hex color.
///
/// ## Errors
///
/// Fails with [`ColorError::InvalidColorFormat`] under the same rules as
/// [`parse_hex`].
pub fn background(input: &str) -> Result<String, ColorError> {
    parse_hex(input).map(|rgb| rgb.bg_sequence())
}
