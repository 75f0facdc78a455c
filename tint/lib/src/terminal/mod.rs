//! Terminal capability probing.
//!
//! Only true-color support is probed, and only through `COLORTERM`.

pub mod supports;

pub use supports::{supports_true_color, true_color_from, COLORTERM};
