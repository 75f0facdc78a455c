//! # tint
//!
//! True-color helpers for terminal output.
//!
//! This crate provides:
//!
//! - **Hex Colors**: Parse `RRGGBB` / `#RRGGBB` strings into RGB triples
//! - **Escape Codes**: Build 24-bit foreground, background and reset sequences
//! - **Capability Probe**: Check `COLORTERM` for true-color support
//! - **Console Output**: Error/warning/info/debug printers, a custom-color
//!   printer and a plain-text table printer
//!
//! ## Quick Start
//!
//! ```
//! use tint::color::{foreground, reset};
//! use tint::console::{Console, ConsoleConfig};
//!
//! let orange = foreground("#ff8000").unwrap();
//! println!("{}orange{}", orange, reset());
//!
//! let mut console = Console::new(Vec::new(), ConsoleConfig::from_env());
//! console.info("System ready").unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`color`] - Hex parsing and ANSI sequences
//!   - [`color::ansi`] - Raw sequence builders
//! - [`terminal`] - `COLORTERM` true-color probe
//! - [`console`] - Styled line writers
//!   - [`console::table`] - Table layout

pub mod color;
pub mod console;
pub mod terminal;

pub use color::{background, foreground, parse_hex, reset, ColorError, Rgb};
pub use console::{ColorChoice, Console, ConsoleConfig, ConsoleError, ConsoleResult};
pub use terminal::supports_true_color;
