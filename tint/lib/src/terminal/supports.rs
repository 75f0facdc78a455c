//! True-color detection from the `COLORTERM` environment variable.
//!
//! The probe is advisory: nothing in this crate refuses to emit a 24-bit
//! sequence because of it. Writers only consult it when configured with
//! [`ColorChoice::Auto`](crate::console::ColorChoice::Auto).

use std::env;

/// Name of the environment variable that advertises true-color support.
pub const COLORTERM: &str = "COLORTERM";

/// Returns whether the terminal advertises 24-bit color via `COLORTERM`.
///
/// ## Returns
///
/// - `true` if `COLORTERM` is exactly `truecolor` or `24bit`
/// - `false` if it is unset, empty, not valid unicode or anything else
///
/// The comparison is case-sensitive.
///
/// ## Examples
///
/// ```
/// use tint::terminal::supports_true_color;
///
/// if supports_true_color() {
///     println!("\x1b[38;2;255;128;0mOrange!\x1b[0m");
/// }
/// ```
pub fn supports_true_color() -> bool {
    let value = env::var(COLORTERM).ok();
    let supported = true_color_from(value.as_deref());

    tracing::debug!(
        source = COLORTERM,
        colorterm = value.as_deref().unwrap_or("<unset>"),
        supported,
        "Probed true-color support"
    );

    supported
}

/// Decides true-color support from a `COLORTERM` value.
///
/// ```
/// use tint::terminal::true_color_from;
///
/// assert!(true_color_from(Some("truecolor")));
/// assert!(true_color_from(Some("24bit")));
/// assert!(!true_color_from(Some("TrueColor")));
/// assert!(!true_color_from(None));
/// ```
pub fn true_color_from(colorterm: Option<&str>) -> bool {
    matches!(colorterm, Some("truecolor" | "24bit"))
}
