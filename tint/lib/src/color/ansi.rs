//! ANSI true-color escape sequences.
//!
//! Uses the 24-bit SGR forms:
//!
//! ```text
//! \x1b[38;2;R;G;Bm   foreground
//! \x1b[48;2;R;G;Bm   background
//! \x1b[0m            reset
//! ```
//!
//! ## Examples
//!
//! ```
//! use tint::color::ansi::{fg_rgb, bg_rgb, RESET};
//!
//! assert_eq!(fg_rgb(255, 0, 0), "\x1b[38;2;255;0;0m");
//! assert_eq!(bg_rgb(40, 40, 40), "\x1b[48;2;40;40;40m");
//! assert_eq!(RESET, "\x1b[0m");
//! ```

/// Resets all SGR attributes.
pub const RESET: &str = "\x1b[0m";

/// Foreground sequence for the given channel values.
#[inline]
pub fn fg_rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// Background sequence for the given channel values.
#[inline]
pub fn bg_rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[48;2;{};{};{}m", r, g, b)
}

/// Returns the reset sequence.
#[inline]
pub fn reset() -> &'static str {
    RESET
}
