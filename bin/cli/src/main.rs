//! Command line front end for hueshift.
//!
//! Subcommands:
//! - `convert <HEX>`: show a color as RGB, HSL and hex
//! - `hsl <H> <S> <L>`: build a color from HSL
//! - `diff <A> <B>`: per-channel difference
//! - `sass <A> <B>`: Sass expression that turns A into B
//! - `adjust <HEX>`: apply relative HSL deltas
//! - `slide <HEX> <H> <S> <L>`: apply slider positions in `[0, 1]`
//! - `swatch <A> <B>`: write a PNG comparing A, the adjusted A and B

mod error;
mod swatch;

use std::{fs, path::PathBuf, process};

use clap::{ArgAction, Parser, Subcommand};
use error::CliError;
use hueshift::{ColorModel, ColorValue, Difference, Options, SliderRanges};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "hueshift", version, about = "Color difference and HSL adjustment tool")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// JSON file with model options.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Use the legacy edge cases (hue 0 is black, raw negative hues).
    #[arg(long, global = true, conflicts_with = "config")]
    legacy: bool,

    /// Increase log output, may be repeated.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show a hex color as RGB, HSL and hex.
    Convert {
        /// Color as #RGB or #RRGGBB.
        hex: String,
    },
    /// Build a color from hue, saturation and lightness.
    Hsl {
        /// Hue in degrees.
        #[arg(allow_negative_numbers = true)]
        h: f64,
        /// Saturation in [0, 1].
        s: f64,
        /// Lightness in [0, 1].
        l: f64,
        /// Divide components greater than 1 by 100 first.
        #[arg(long)]
        loose: bool,
    },
    /// Show the difference B - A.
    Diff {
        /// Base color.
        a: String,
        /// Target color.
        b: String,
    },
    /// Print the Sass expression that turns A into B.
    Sass {
        /// Base color.
        a: String,
        /// Target color.
        b: String,
    },
    /// Adjust a color by relative HSL amounts.
    Adjust {
        /// Color as #RGB or #RRGGBB.
        hex: String,
        /// Hue rotation in degrees.
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        hue: f64,
        /// Saturation change in percentage points.
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        saturation: f64,
        /// Lightness change in percentage points.
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        lightness: f64,
    },
    /// Adjust a color from slider positions in [0, 1], 0.5 being neutral.
    Slide {
        /// Color as #RGB or #RRGGBB.
        hex: String,
        /// Hue slider position.
        hue: f64,
        /// Saturation slider position.
        saturation: f64,
        /// Lightness slider position.
        lightness: f64,
    },
    /// Write a PNG with bands for A, A adjusted towards B, and B.
    Swatch {
        /// Base color.
        a: String,
        /// Target color.
        b: String,
        /// Output file path.
        #[arg(short, long, default_value = "swatch.png")]
        output: PathBuf,
        /// Image width in pixels.
        #[arg(short = 'W', long, default_value_t = 300)]
        width: u32,
        /// Height of each band in pixels.
        #[arg(short = 'H', long, default_value_t = 100)]
        band_height: u32,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_options(cli: &Cli) -> Result<Options, CliError> {
    let Some(path) = &cli.config else {
        return Ok(if cli.legacy {
            Options::legacy()
        } else {
            Options::default()
        });
    };

    let text = fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("could not read {}: {e}", path.display())))?;
    let options = serde_json::from_str(&text)
        .map_err(|e| CliError::Input(format!("invalid config {}: {e}", path.display())))?;
    log::info!("loaded options from {}", path.display());
    Ok(options)
}

fn print_color(c: &ColorValue, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(c)?);
    } else {
        println!("hex {}", c.hex());
        println!("rgb {} {} {}", c.r(), c.g(), c.b());
        println!("hsl {} {} {}", c.h(), c.s(), c.l());
    }
    Ok(())
}

fn print_difference(d: &Difference, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(d)?);
    } else {
        println!("rgb {} {} {}", d.r(), d.g(), d.b());
        println!("hsl {} {} {}", d.h(), d.s(), d.l());
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let model = ColorModel::new(load_options(&cli)?)?;
    log::debug!("using {:?}", model.options());

    match cli.command {
        Command::Convert { hex } => print_color(&model.from_hex(&hex)?, cli.json)?,
        Command::Hsl { h, s, l, loose } => {
            let c = if loose {
                model.from_hsl_loose(h, s, l)?
            } else {
                model.from_hsl(h, s, l)?
            };
            print_color(&c, cli.json)?;
        }
        Command::Diff { a, b } => print_difference(&model.difference(&a, &b)?, cli.json)?,
        Command::Sass { a, b } => {
            let sass = model.sass_difference(&a, &b)?;
            if cli.json {
                let j = serde_json::json!({ "base": a, "target": b, "sass": sass });
                println!("{}", serde_json::to_string_pretty(&j)?);
            } else {
                println!("{sass}");
            }
        }
        Command::Adjust {
            hex,
            hue,
            saturation,
            lightness,
        } => print_color(&model.adjust_hsl(&hex, hue, saturation, lightness)?, cli.json)?,
        Command::Slide {
            hex,
            hue,
            saturation,
            lightness,
        } => {
            let adjustment = SliderRanges::default().adjustment(hue, saturation, lightness);
            log::info!("slider positions map to {adjustment:?}");
            print_color(&model.apply(&hex, &adjustment)?, cli.json)?;
        }
        Command::Swatch {
            a,
            b,
            output,
            width,
            band_height,
        } => {
            let colors = swatch::write(&model, &a, &b, &output, width, band_height)?;
            if cli.json {
                let j = serde_json::json!({
                    "output": output.display().to_string(),
                    "colors": colors,
                });
                println!("{}", serde_json::to_string_pretty(&j)?);
            } else {
                let hexes: Vec<&str> = colors.iter().map(ColorValue::hex).collect();
                eprintln!("{} -> {}", hexes.join(" "), output.display());
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

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
