//! Example: Print a few swatches and the console printers
//!
//! Run with: cargo run -p tint --example palette

use serde_json::json;
use tint::color::{background, foreground, reset};
use tint::console::{self, ColorChoice, Console, ConsoleConfig};
use tint::terminal::supports_true_color;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== True Color ===\n");
    println!(
        "COLORTERM advertises 24-bit color: {}",
        if supports_true_color() { "yes" } else { "no" }
    );

    println!("\n=== Swatches ===\n");
    for hex in ["#ff0000", "#ffff00", "#008000", "#00ffff", "#8a2be2"] {
        println!("{}{}        {} {}", background(hex)?, foreground("000000")?, reset(), hex);
    }

    println!("\n=== Printers ===\n");
    console::error("error: something broke")?;
    console::warning("warning: this might break")?;
    console::info("info: all good")?;
    print!("{}", reset());
    console::debug("debug: x = 42")?;
    console::custom_color("ffffff", "custom: white on blue", Some("0000ff"))?;

    println!("\n=== Table ===\n");
    console::table_value(&json!([
        { "name": "Alice", "age": 25 },
        { "name": "Bob", "age": 30 }
    ]))?;

    println!("\n=== Auto (only colored on true-color terminals) ===\n");
    let config = ConsoleConfig::from_env().with_color(ColorChoice::Auto);
    let mut out = Console::stdout(config);
    out.info("info under --color auto")?;
    print!("{}", reset());

    Ok(())
}
