//! Tests for the console writers
//!
//! Every test writes into an in-memory sink so output can be compared
//! byte for byte.

use super::*;
use serde_json::json;

fn capture(config: ConsoleConfig, write: impl FnOnce(&mut Console<Vec<u8>>)) -> String {
    let mut console = Console::new(Vec::new(), config);
    write(&mut console);
    String::from_utf8(console.into_inner()).expect("console output is utf-8")
}

fn plain() -> ConsoleConfig {
    ConsoleConfig::default().with_color(ColorChoice::Never)
}

// =============================================================================
// Leveled printers
// =============================================================================

#[test]
fn test_error_is_red_without_reset() {
    let out = capture(ConsoleConfig::default(), |c| c.error("boom").unwrap());
    assert_eq!(out, "\x1b[38;2;255;0;0mboom\n");
}

#[test]
fn test_warning_is_yellow_without_reset() {
    let out = capture(ConsoleConfig::default(), |c| c.warning("careful").unwrap());
    assert_eq!(out, "\x1b[38;2;255;255;0mcareful\n");
}

#[test]
fn test_info_is_green_without_reset() {
    let out = capture(ConsoleConfig::default(), |c| c.info("ready").unwrap());
    assert_eq!(out, "\x1b[38;2;0;128;0mready\n");
}

#[test]
fn test_debug_is_unstyled() {
    let out = capture(ConsoleConfig::default(), |c| c.debug("x = 42").unwrap());
    assert_eq!(out, "x = 42\n");
}

#[test]
fn test_leveled_printers_accept_owned_strings() {
    let message = format!("{} items", 3);
    let out = capture(plain(), |c| c.info(message).unwrap());
    assert_eq!(out, "3 items\n");
}

#[test]
fn test_lines_are_written_in_call_order() {
    let out = capture(plain(), |c| {
        c.error("one").unwrap();
        c.warning("two").unwrap();
        c.debug("three").unwrap();
    });
    assert_eq!(out, "one\ntwo\nthree\n");
}

// =============================================================================
// custom_color
// =============================================================================

#[test]
fn test_custom_color_foreground_only() {
    let out = capture(ConsoleConfig::default(), |c| {
        c.custom_color("00ff00", "ok", None).unwrap()
    });
    assert_eq!(out, "\x1b[38;2;0;255;0mok\x1b[0m\n");
}

#[test]
fn test_custom_color_with_background() {
    let out = capture(ConsoleConfig::default(), |c| {
        c.custom_color("#ffffff", "white on black", Some("000000"))
            .unwrap()
    });
    assert_eq!(
        out,
        "\x1b[38;2;255;255;255m\x1b[48;2;0;0;0mwhite on black\x1b[0m\n"
    );
}

#[test]
fn test_custom_color_empty_background_is_ignored() {
    let out = capture(ConsoleConfig::default(), |c| {
        c.custom_color("00ffff", "cyan", Some("")).unwrap()
    });
    assert_eq!(out, "\x1b[38;2;0;255;255mcyan\x1b[0m\n");
}

#[test]
fn test_custom_color_invalid_foreground_writes_nothing() {
    let mut console = Console::new(Vec::new(), ConsoleConfig::default());
    let err = console.custom_color("green", "nope", None).unwrap_err();
    assert!(matches!(
        err,
        ConsoleError::InvalidColor(ColorError::InvalidColorFormat(ref s)) if s == "green"
    ));
    assert!(console.into_inner().is_empty());
}

#[test]
fn test_custom_color_invalid_background_writes_nothing() {
    let mut console = Console::new(Vec::new(), ConsoleConfig::default());
    let result = console.custom_color("ffffff", "nope", Some("#12"));
    assert!(matches!(result, Err(ConsoleError::InvalidColor(_))));
    assert!(console.into_inner().is_empty());
}

#[test]
fn test_invalid_color_error_message() {
    let mut console = Console::new(Vec::new(), ConsoleConfig::default());
    let err = console.custom_color("xyz", "nope", None).unwrap_err();
    assert_eq!(err.to_string(), "Invalid hex color: 'xyz'");
}

// =============================================================================
// Color choice
// =============================================================================

#[test]
fn test_never_writes_no_escape_codes() {
    let out = capture(plain(), |c| {
        c.error("e").unwrap();
        c.warning("w").unwrap();
        c.info("i").unwrap();
        c.custom_color("123456", "c", Some("abcdef")).unwrap();
    });
    assert_eq!(out, "e\nw\ni\nc\n");
    assert!(!out.contains('\x1b'));
}

#[test]
fn test_never_still_validates_colors() {
    let mut console = Console::new(Vec::new(), plain());
    assert!(console.custom_color("not-a-color", "x", None).is_err());
}

#[test]
fn test_auto_follows_true_color_flag() {
    let auto = ConsoleConfig::default().with_color(ColorChoice::Auto);

    let without = capture(auto.with_true_color(false), |c| c.error("e").unwrap());
    assert_eq!(without, "e\n");

    let with = capture(auto.with_true_color(true), |c| c.error("e").unwrap());
    assert_eq!(with, "\x1b[38;2;255;0;0me\n");
}

#[test]
fn test_always_ignores_true_color_flag() {
    let config = ConsoleConfig::default().with_true_color(false);
    let out = capture(config, |c| c.info("i").unwrap());
    assert!(out.starts_with("\x1b[38;2;"));
}

#[test]
fn test_color_choice_parsing() {
    assert_eq!("auto".parse::<ColorChoice>(), Ok(ColorChoice::Auto));
    assert_eq!("always".parse::<ColorChoice>(), Ok(ColorChoice::Always));
    assert_eq!("never".parse::<ColorChoice>(), Ok(ColorChoice::Never));
    assert!("sometimes".parse::<ColorChoice>().is_err());
    assert_eq!(ColorChoice::Never.to_string(), "never");
}

#[test]
fn test_config_deserializes_with_defaults() {
    let config: ConsoleConfig = serde_json::from_str(r#"{"color": "auto"}"#).unwrap();
    assert_eq!(config.color, ColorChoice::Auto);
    assert!(!config.true_color);

    let config: ConsoleConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, ConsoleConfig::default());
}

// =============================================================================
// Tables
// =============================================================================

#[test]
fn test_table_output() {
    let rows = vec![
        TableRow::from([("name", "Alice"), ("age", "25")]),
        TableRow::from([("name", "Bob"), ("age", "30")]),
    ];
    let out = capture(ConsoleConfig::default(), |c| c.table(&rows).unwrap());
    assert_eq!(out, "name  | age\n------+----\nAlice | 25 \nBob   | 30 \n");
}

#[test]
fn test_table_empty_is_soft_failure() {
    let out = capture(ConsoleConfig::default(), |c| c.table(&[]).unwrap());
    assert_eq!(out, "Invalid table data.\n");
}

#[test]
fn test_table_value_soft_failures() {
    for data in [json!(null), json!([]), json!([1, 2, 3]), json!("rows"), json!({"a": 1})] {
        let out = capture(ConsoleConfig::default(), |c| c.table_value(&data).unwrap());
        assert_eq!(out, "Invalid table data.\n", "input: {}", data);
    }
}

#[test]
fn test_table_value_renders_json_rows() {
    let data = json!([{ "name": "Alice", "age": 25 }, { "name": "Bob", "age": 30 }]);
    let out = capture(ConsoleConfig::default(), |c| c.table_value(&data).unwrap());
    assert_eq!(out, "name  | age\n------+----\nAlice | 25 \nBob   | 30 \n");
}

#[test]
fn test_table_has_no_escape_codes_even_when_colored() {
    let data = json!([{ "k": "v" }]);
    let out = capture(ConsoleConfig::default(), |c| c.table_value(&data).unwrap());
    assert!(!out.contains('\x1b'));
}

// =============================================================================
// Sink failures
// =============================================================================

struct FailingSink;

impl Write for FailingSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_failures_propagate() {
    let mut console = Console::new(FailingSink, ConsoleConfig::default());
    assert!(matches!(console.debug("x"), Err(ConsoleError::Io(_))));
    assert!(matches!(console.table(&[]), Err(ConsoleError::Io(_))));
}
