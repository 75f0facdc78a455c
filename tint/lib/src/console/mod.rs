//! Styled console output.
//!
//! [`Console`] writes categorized, colored lines to any [`Write`] sink. The
//! free functions in this module ([`error`], [`warning`], [`info`],
//! [`debug`], [`custom_color`], [`table`], [`table_value`]) write to
//! standard output with [`ConsoleConfig::default`].
//!
//! | Operation      | Foreground | Background | Trailing reset |
//! |----------------|------------|------------|----------------|
//! | `error`        | `ff0000`   | -          | no             |
//! | `warning`      | `ffff00`   | -          | no             |
//! | `info`         | `008000`   | -          | no             |
//! | `debug`        | -          | -          | no             |
//! | `custom_color` | caller     | optional   | yes            |
//!
//! The leveled printers leave the color set after the line; the next write
//! or the terminal default takes over from there.
//!
//! ## Examples
//!
//! ```
//! use tint::console::{Console, ConsoleConfig};
//!
//! let mut console = Console::new(Vec::new(), ConsoleConfig::default());
//! console.custom_color("00ff00", "ok", None).unwrap();
//!
//! let out = String::from_utf8(console.into_inner()).unwrap();
//! assert_eq!(out, "\x1b[38;2;0;255;0mok\x1b[0m\n");
//! ```

pub mod table;

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::color::{parse_hex, ColorError, Rgb, RESET};
use crate::terminal::supports_true_color;
use table::{render_table, rows_from_value, TableRow, INVALID_TABLE_DATA};

/// Foreground used by [`Console::error`].
pub const ERROR_COLOR: Rgb = Rgb::new(0xff, 0x00, 0x00);
/// Foreground used by [`Console::warning`].
pub const WARNING_COLOR: Rgb = Rgb::new(0xff, 0xff, 0x00);
/// Foreground used by [`Console::info`].
pub const INFO_COLOR: Rgb = Rgb::new(0x00, 0x80, 0x00);

/// Errors that can occur while writing console output.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// A caller-supplied color was not a valid hex color.
    #[error(transparent)]
    InvalidColor(#[from] ColorError),

    /// Writing to the output sink failed.
    #[error("Failed to write console output: {0}")]
    Io(#[from] io::Error),
}

/// Result type for console operations.
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// When escape sequences are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Emit only when the configuration reports true-color support
    Auto,
    /// Always emit
    #[default]
    Always,
    /// Never emit; colors are still validated
    Never,
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorChoice::Auto => "auto",
            ColorChoice::Always => "always",
            ColorChoice::Never => "never",
        };
        f.write_str(name)
    }
}

impl FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            other => Err(format!(
                "unknown color choice '{}' (expected auto, always or never)",
                other
            )),
        }
    }
}

/// Configuration injected into a [`Console`].
///
/// `true_color` is the capability flag. Nothing reads the environment
/// unless [`ConsoleConfig::from_env`] is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub color: ColorChoice,
    pub true_color: bool,
}

impl ConsoleConfig {
    /// Default configuration with `true_color` probed from `COLORTERM`.
    pub fn from_env() -> Self {
        Self {
            true_color: supports_true_color(),
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    pub fn with_true_color(mut self, true_color: bool) -> Self {
        self.true_color = true_color;
        self
    }

    /// Whether escape sequences should be written under this configuration.
    pub fn emits_color(&self) -> bool {
        match self.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.true_color,
        }
    }
}

/// A styled line writer over any [`Write`] sink.
#[derive(Debug)]
pub struct Console<W: Write> {
    out: W,
    config: ConsoleConfig,
}

impl Console<io::Stdout> {
    /// A console bound to the process's standard output.
    pub fn stdout(config: ConsoleConfig) -> Self {
        Console::new(io::stdout(), config)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, config: ConsoleConfig) -> Self {
        Self { out, config }
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Consumes the console and hands back its sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes `message` in red. No reset follows the text.
    pub fn error<T: Into<String>>(&mut self, message: T) -> ConsoleResult<()> {
        self.leveled(ERROR_COLOR, message.into())
    }

    /// Writes `message` in yellow. No reset follows the text.
    pub fn warning<T: Into<String>>(&mut self, message: T) -> ConsoleResult<()> {
        self.leveled(WARNING_COLOR, message.into())
    }

    /// Writes `message` in green. No reset follows the text.
    pub fn info<T: Into<String>>(&mut self, message: T) -> ConsoleResult<()> {
        self.leveled(INFO_COLOR, message.into())
    }

    /// Writes `message` as-is.
    pub fn debug<T: Into<String>>(&mut self, message: T) -> ConsoleResult<()> {
        self.write_line(&message.into())
    }

    /// Writes `message` in the `fg` color, optionally on a `bg` background,
    /// followed by a reset.
    ///
    /// An empty `bg` counts as no background. Both colors are validated
    /// before anything is written.
    ///
    /// ## Errors
    ///
    /// [`ConsoleError::InvalidColor`] for a malformed `fg` or `bg`, and
    /// [`ConsoleError::Io`] if the write fails.
    pub fn custom_color<T: Into<String>>(
        &mut self,
        fg: &str,
        message: T,
        bg: Option<&str>,
    ) -> ConsoleResult<()> {
        let fg = parse_hex(fg)?;
        let bg = bg.filter(|bg| !bg.is_empty()).map(parse_hex).transpose()?;
        let message = message.into();

        if !self.config.emits_color() {
            return self.write_line(&message);
        }

        let mut line = fg.fg_sequence();
        if let Some(bg) = bg {
            line.push_str(&bg.bg_sequence());
        }
        line.push_str(&message);
        line.push_str(RESET);
        self.write_line(&line)
    }

    /// Writes `rows` as an aligned plain-text table.
    ///
    /// An empty slice writes the `Invalid table data.` line instead; that is
    /// not an error.
    pub fn table(&mut self, rows: &[TableRow]) -> ConsoleResult<()> {
        match render_table(rows) {
            Some(lines) => {
                let mut block = lines.join("\n");
                block.push('\n');
                self.out.write_all(block.as_bytes())?;
                self.out.flush()?;
                Ok(())
            }
            None => self.invalid_table(),
        }
    }

    /// Writes JSON table data (an array of objects) as a table.
    ///
    /// Anything other than a non-empty array of objects writes the
    /// `Invalid table data.` line instead.
    pub fn table_value(&mut self, data: &Value) -> ConsoleResult<()> {
        match rows_from_value(data) {
            Some(rows) => self.table(&rows),
            None => self.invalid_table(),
        }
    }

    fn leveled(&mut self, color: Rgb, message: String) -> ConsoleResult<()> {
        if self.config.emits_color() {
            let line = format!("{}{}", color.fg_sequence(), message);
            self.write_line(&line)
        } else {
            self.write_line(&message)
        }
    }

    fn invalid_table(&mut self) -> ConsoleResult<()> {
        tracing::warn!("Table input was not a non-empty list of rows");
        self.write_line(INVALID_TABLE_DATA)
    }

    fn write_line(&mut self, line: &str) -> ConsoleResult<()> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        self.out.write_all(buf.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Writes `message` in red to standard output.
pub fn error<T: Into<String>>(message: T) -> ConsoleResult<()> {
    Console::stdout(ConsoleConfig::default()).error(message)
}

/// Writes `message` in yellow to standard output.
pub fn warning<T: Into<String>>(message: T) -> ConsoleResult<()> {
    Console::stdout(ConsoleConfig::default()).warning(message)
}

/// Writes `message` in green to standard output.
pub fn info<T: Into<String>>(message: T) -> ConsoleResult<()> {
    Console::stdout(ConsoleConfig::default()).info(message)
}

/// Writes `message` unstyled to standard output.
pub fn debug<T: Into<String>>(message: T) -> ConsoleResult<()> {
    Console::stdout(ConsoleConfig::default()).debug(message)
}

/// Writes `message` in custom colors to standard output.
pub fn custom_color<T: Into<String>>(fg: &str, message: T, bg: Option<&str>) -> ConsoleResult<()> {
    Console::stdout(ConsoleConfig::default()).custom_color(fg, message, bg)
}

/// Writes `rows` as a table to standard output.
pub fn table(rows: &[TableRow]) -> ConsoleResult<()> {
    Console::stdout(ConsoleConfig::default()).table(rows)
}

/// Writes JSON table data to standard output.
pub fn table_value(data: &Value) -> ConsoleResult<()> {
    Console::stdout(ConsoleConfig::default()).table_value(data)
}

#[cfg(test)]
mod tests;
