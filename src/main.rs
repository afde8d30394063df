// src/main.rs
//! nmea-fields - decode individual NMEA fields from the command line

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use nmea_fields::{
    config::DecoderConfig, CenturyWindow, Coordinate, CoordinateKind, Hemisphere, NmeaDate,
    NmeaTime,
};
use serde_json::json;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "nmea-fields",
    about = "Decode NMEA date, time and coordinate fields",
    version
)]
struct Args {
    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Config file (defaults to ~/.config/nmea-fields/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Expand two-digit years as CENTURY + YY (base century for --pivot)
    #[arg(long)]
    century: Option<i32>,

    /// Years at or above this two-digit value fall in the previous century
    #[arg(long)]
    pivot: Option<u8>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a DDMMYY date field
    Date { field: String },
    /// Decode an HHMMSS time field
    Time { field: String },
    /// Decode a DDMM.mmmm latitude field
    Lat {
        field: String,
        /// N or S
        hemisphere: Option<String>,
    },
    /// Decode a DDDMM.ssss longitude field
    Lon {
        field: String,
        /// E or W
        hemisphere: Option<String>,
    },
}

fn main() -> Result<()> {
    logger_init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => DecoderConfig::load_from(path),
        None => DecoderConfig::load(),
    }
    .context("Failed to load configuration")?;
    let window = century_window(&args, &config);
    log::debug!("Using century window {:?}", window);

    match &args.command {
        Command::Date { field } => {
            let date = NmeaDate::decode_with(field, window)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&date)?);
            } else {
                println!("{}", date.value());
            }
        }
        Command::Time { field } => {
            let time = NmeaTime::decode(field)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&time)?);
            } else {
                println!("{}", time.value());
            }
        }
        Command::Lat { field, hemisphere } => {
            print_coordinate(CoordinateKind::Latitude, field, hemisphere.as_deref(), args.json)?;
        }
        Command::Lon { field, hemisphere } => {
            print_coordinate(CoordinateKind::Longitude, field, hemisphere.as_deref(), args.json)?;
        }
    }

    Ok(())
}

/// Command line flags override the configured window
fn century_window(args: &Args, config: &DecoderConfig) -> CenturyWindow {
    let century = args.century.unwrap_or(config.century_window.century());
    match (args.pivot, args.century) {
        (Some(pivot), _) => CenturyWindow::pivot(pivot, century),
        (None, Some(century)) => CenturyWindow::fixed(century),
        (None, None) => config.century_window,
    }
}

fn print_coordinate(
    kind: CoordinateKind,
    field: &str,
    hemisphere: Option<&str>,
    as_json: bool,
) -> Result<()> {
    let coordinate = Coordinate::decode(kind, field)?;
    let hemisphere = hemisphere.map(str::parse::<Hemisphere>).transpose()?;
    let degrees = match hemisphere {
        Some(h) => coordinate.signed(h)?,
        None => coordinate.value(),
    };

    if as_json {
        let output = json!({
            "coordinate": coordinate,
            "hemisphere": hemisphere,
            "degrees": degrees,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{:.6}", degrees);
    }

    Ok(())
}

fn logger_init() {
    let log_level = std::env::var("RUST_LOG").unwrap_or("warn".to_string());
    let log_level = match log_level.as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Warn,
    };

    if let Err(e) = TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to initialise logger: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_for(flags: &[&str], config: &DecoderConfig) -> CenturyWindow {
        let mut argv = vec!["nmea-fields"];
        argv.extend_from_slice(flags);
        argv.extend_from_slice(&["date", "010180"]);
        let args = Args::try_parse_from(argv).unwrap();
        century_window(&args, config)
    }

    #[test]
    fn test_config_window_without_flags() {
        let config = DecoderConfig {
            century_window: CenturyWindow::pivot(70, 2000),
        };
        assert_eq!(window_for(&[], &config), CenturyWindow::pivot(70, 2000));
    }

    #[test]
    fn test_pivot_uses_configured_century() {
        let config = DecoderConfig {
            century_window: CenturyWindow::fixed(2100),
        };
        assert_eq!(
            window_for(&["--pivot", "80"], &config),
            CenturyWindow::pivot(80, 2100)
        );
    }

    #[test]
    fn test_century_flag_overrides_config() {
        let config = DecoderConfig {
            century_window: CenturyWindow::pivot(70, 2100),
        };
        assert_eq!(
            window_for(&["--century", "1900"], &config),
            CenturyWindow::fixed(1900)
        );
        assert_eq!(
            window_for(&["--pivot", "80", "--century", "2000"], &config),
            CenturyWindow::pivot(80, 2000)
        );
    }
}
