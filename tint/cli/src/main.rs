//! Command-line front end for the tint console printers.
//!
//! ## Usage
//!
//! ```bash
//! # Leveled messages
//! tint error "Disk full"
//! tint warn "Low memory"
//! tint info "System ready"
//! tint debug "x = 42"
//!
//! # Custom colors
//! tint color --fg 00ffff "Cyan text"
//! tint color --fg ffffff --bg 000000 "White on black"
//!
//! # Tables from a JSON array of objects
//! echo '[{"name":"Alice","age":25}]' | tint table
//! tint table people.json
//!
//! # Does COLORTERM advertise 24-bit color?
//! tint probe
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand, ValueHint};
use clap_complete::Shell;
use color_eyre::eyre::{Context, Result};
use serde_json::Value;
use tint::console::{ColorChoice, Console, ConsoleConfig};
use tint::terminal::supports_true_color;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Print true-color console messages and simple tables
#[derive(Parser, Debug)]
#[command(name = "tint", version, about, long_about = None)]
#[command(after_help = AFTER_HELP)]
struct Args {
    /// When to emit color escape codes (auto, always, never)
    #[arg(long, value_name = "WHEN", default_value = "always", value_parser = parse_color_choice, global = true)]
    color: ColorChoice,

    /// Increase verbosity (-v INFO, -vv DEBUG, -vvv TRACE)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a message in red
    Error {
        #[arg(value_name = "MESSAGE", required = true)]
        message: Vec<String>,
    },

    /// Print a message in yellow
    #[command(alias = "warning")]
    Warn {
        #[arg(value_name = "MESSAGE", required = true)]
        message: Vec<String>,
    },

    /// Print a message in green
    Info {
        #[arg(value_name = "MESSAGE", required = true)]
        message: Vec<String>,
    },

    /// Print a message without styling
    Debug {
        #[arg(value_name = "MESSAGE", required = true)]
        message: Vec<String>,
    },

    /// Print a message in a custom foreground (and optional background) color
    ///
    /// Colors are six hex digits with an optional leading '#'.
    Color {
        /// Foreground color (e.g. "ff0000" or "#ff0000")
        #[arg(long, value_name = "HEX")]
        fg: String,

        /// Background color
        #[arg(long, value_name = "HEX")]
        bg: Option<String>,

        #[arg(value_name = "MESSAGE", required = true)]
        message: Vec<String>,
    },

    /// Print a JSON array of objects as a table
    ///
    /// Reads from FILE, or from stdin when FILE is omitted or "-".
    Table {
        #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Report whether COLORTERM advertises true-color support
    Probe,
}

const AFTER_HELP: &str = "\
SHELL COMPLETIONS:
  Bash (~/.bashrc):
    tint --completions bash >> ~/.bashrc

  Zsh (ensure fpath includes the directory):
    tint --completions zsh > ~/.zfunc/_tint

  Fish:
    tint --completions fish > ~/.config/fish/completions/tint.fish

EXAMPLES:
  tint error \"Disk full\"
  tint color --fg 00ffff --bg 000000 \"Cyan on black\"
  echo '[{\"name\":\"Alice\",\"age\":25}]' | tint table
";

fn parse_color_choice(s: &str) -> Result<ColorChoice, String> {
    s.parse()
}

/// Initialize tracing subscriber based on verbosity level.
///
/// Silent unless `-v` is given or `RUST_LOG` is set. Logs go to stderr so
/// they never mix with the printed lines.
fn init_tracing(verbose: u8) {
    let from_env = std::env::var("RUST_LOG").ok();
    if verbose == 0 && from_env.is_none() {
        return;
    }

    let base_filter = from_env.unwrap_or_else(|| {
        match verbose {
            1 => "warn,tint=info",
            2 => "warn,tint=debug",
            _ => "debug,tint=trace",
        }
        .to_string()
    });

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Some(shell) = args.completions {
        let mut cmd = Args::command();
        clap_complete::generate(shell, &mut cmd, "tint", &mut io::stdout());
        return Ok(());
    }

    let Some(command) = args.command else {
        Args::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = ConsoleConfig::from_env().with_color(args.color);
    tracing::debug!(?config, "Console configured");
    let mut console = Console::stdout(config);

    match command {
        Command::Error { message } => console.error(message.join(" "))?,
        Command::Warn { message } => console.warning(message.join(" "))?,
        Command::Info { message } => console.info(message.join(" "))?,
        Command::Debug { message } => console.debug(message.join(" "))?,
        Command::Color { fg, bg, message } => {
            console.custom_color(&fg, message.join(" "), bg.as_deref())?
        }
        Command::Table { file } => {
            let data = read_table_input(file.as_ref())?;
            console.table_value(&data)?;
        }
        Command::Probe => {
            let label = if supports_true_color() { "truecolor" } else { "no truecolor" };
            println!("{}", label);
        }
    }

    Ok(())
}

/// Reads and parses table JSON from a file or stdin.
fn read_table_input(file: Option<&PathBuf>) -> Result<Value> {
    let raw = match file {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read table data from {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .wrap_err("Failed to read table data from stdin")?;
            buf
        }
    };

    serde_json::from_str(&raw).wrap_err("Table data is not valid JSON")
}
