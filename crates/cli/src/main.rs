#![deny(unsafe_code)]
//! CLI driver for the color picker state core.
//!
//! Subcommands:
//! - `convert <color>` — print a color in every (or one) display format
//! - `grid <x> <y>` — click the grid at normalized coordinates
//! - `keys <key>...` — replay grid keyboard commands
//! - `field <name> <value>` — type a number into one numeric field
//! - `formats` — list the whitelisted display formats

mod error;

use clap::{Parser, Subcommand};
use color_picker_core::{ColorEvent, ColorState, DisplayFormat, Field, KeyCommand, PickerConfig};
use error::CliError;
use std::process;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "color-picker", about = "Color picker state core CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log every notification the picker emits.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Picker configuration as a JSON string.
    #[arg(long, global = true, default_value = "{}")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a color in every display format, or only in --to.
    Convert {
        /// Color string (hex, rgb(), hsl(), hsv()).
        color: String,

        /// Target format (hex, hex8, rgb, hsv, hsl).
        #[arg(long)]
        to: Option<String>,
    },
    /// Click the grid at normalized (x, y), origin top-left.
    Grid {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,

        /// Starting color.
        #[arg(short, long)]
        color: Option<String>,

        /// Display format, which selects the grid axes.
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Replay grid key presses (ArrowUp, Home, PageDown, ...).
    Keys {
        #[arg(required = true)]
        keys: Vec<String>,

        /// Starting color.
        #[arg(short, long)]
        color: Option<String>,

        /// Display format, which selects the grid axes.
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Enter a number into a numeric field (h, s, v, l, r, g, b, a).
    Field {
        name: String,
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Starting color.
        #[arg(short, long)]
        color: Option<String>,

        /// Display format, which decides whether `s` is HSV or HSL saturation.
        #[arg(short, long)]
        format: Option<String>,
    },
    /// List the whitelisted display formats.
    Formats,
}

fn build_state(
    config: &str,
    color: Option<&str>,
    format: Option<&str>,
) -> Result<ColorState, CliError> {
    let config = PickerConfig::from_json(config)?;
    let mut state = ColorState::with_config(&config)?;
    if let Some(color) = color {
        state.set_color(color)?;
    }
    if let Some(format) = format {
        state.set_format_str(format)?;
    }
    state.on_input(|e: &ColorEvent| log_event(e));
    state.on_change(|e: &ColorEvent| log_event(e));
    Ok(state)
}

fn log_event(e: &ColorEvent) {
    debug!(
        kind = e.kind.name(),
        color = %e.color.to_format_string(e.format),
        "picker notification"
    );
}

fn summary(state: &ColorState) -> serde_json::Value {
    let thumb = state.grid_thumb();
    serde_json::json!({
        "format": state.format(),
        "value": state.display_string(),
        "hex8": state.color(DisplayFormat::Hex8),
        "grid": thumb,
    })
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Formats => {
            let state = build_state(&cli.config, None, None)?;
            let names: Vec<&str> = state.formats().iter().map(|f| f.name()).collect();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&names)?);
            } else {
                for name in names {
                    println!("{name}");
                }
            }
        }
        Command::Convert { color, to } => {
            let state = build_state(&cli.config, Some(&color), None)?;
            let formats: Vec<DisplayFormat> = match to {
                Some(name) => vec![name.parse()?],
                None => state.formats().to_vec(),
            };
            if cli.json {
                let map: serde_json::Map<String, serde_json::Value> = formats
                    .iter()
                    .map(|&f| (f.name().to_string(), state.color(f).into()))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&map)?);
            } else {
                for format in formats {
                    println!("{:<5} {}", format.name(), state.color(format));
                }
            }
        }
        Command::Grid {
            x,
            y,
            color,
            format,
        } => {
            let mut state = build_state(&cli.config, color.as_deref(), format.as_deref())?;
            state.click_grid(x, y);
            info!(x, y, "clicked grid");
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&summary(&state))?);
            } else {
                println!("{}", state.display_string());
            }
        }
        Command::Field {
            name,
            value,
            color,
            format,
        } => {
            let field: Field = name.parse()?;
            let mut state = build_state(&cli.config, color.as_deref(), format.as_deref())?;
            state.set_field(field, value)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&summary(&state))?);
            } else {
                println!("{}", state.display_string());
            }
        }
        Command::Keys {
            keys,
            color,
            format,
        } => {
            let commands = keys
                .iter()
                .map(|k| k.parse::<KeyCommand>())
                .collect::<Result<Vec<_>, _>>()?;
            let mut state = build_state(&cli.config, color.as_deref(), format.as_deref())?;
            let mut steps = Vec::with_capacity(commands.len());
            for key in commands {
                state.adjust_axis(key);
                steps.push((key, state.display_string()));
            }
            if cli.json {
                let trace: Vec<_> = steps
                    .iter()
                    .map(|(key, value)| serde_json::json!({"key": key.name(), "value": value}))
                    .collect();
                let out = serde_json::json!({"steps": trace, "final": summary(&state)});
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                for (key, value) in steps {
                    println!("{:<10} {value}", key.name());
                }
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
