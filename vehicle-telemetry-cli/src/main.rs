//! Vehicle Telemetry Dashboard CLI
//!
//! This is the terminal front end for the vehicle telemetry simulator.
//! It uses the vehicle-telemetry library and adds:
//! - A periodic tick source (one sample per tick while monitoring)
//! - Operator commands on stdin (start, stop, export, ...)
//! - Text rendering of metrics, trend charts and the sample table
//! - CSV/JSON export to disk
//! - TOML configuration

use anyhow::{bail, Result};
use clap::Parser;
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use vehicle_telemetry::Generator;

mod commands;
mod config;
mod monitor;
mod report;

use config::{AppConfig, ExportFormat};
use monitor::{Monitor, MonitorSettings};

/// Vehicle Telemetry Dashboard - simulate and monitor vehicle sensor data
#[derive(Parser, Debug)]
#[command(name = "vehicle-telemetry-cli")]
#[command(about = "Simulate vehicle telemetry and monitor it live", long_about = None)]
#[command(version)]
struct Args {
    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Tick interval in milliseconds
    #[arg(long, value_name = "MS")]
    interval_ms: Option<u64>,

    /// RNG seed for reproducible runs
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Number of recent samples shown in charts and the table
    #[arg(long, value_name = "COUNT")]
    window: Option<usize>,

    /// Start monitoring immediately
    #[arg(long)]
    autostart: bool,

    /// Stop after this many samples, export, and exit
    #[arg(long, value_name = "COUNT")]
    max_ticks: Option<usize>,

    /// Export file (default: vehicle_logs.csv in the configured output directory)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Export format
    #[arg(long, value_enum)]
    format: Option<ExportFormat>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Vehicle Telemetry CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using telemetry library v{}", vehicle_telemetry::VERSION);

    let config = resolve_config(&args)?;
    let settings = resolve_settings(&args, &config);
    log::debug!("Resolved settings: {:?}", settings);

    let generator = Generator::new(config.generator.clone())?;
    let input = spawn_input_reader();

    let mut stdout = io::stdout();
    let session = Monitor::new(generator, settings).run(input, &mut stdout)?;

    log::info!("Session ended with {} samples", session.log().len());
    Ok(())
}

/// Load the config file (if any) and apply command line overrides
fn resolve_config(args: &Args) -> Result<AppConfig> {
    if args.max_ticks == Some(0) {
        bail!("--max-ticks must be greater than zero");
    }

    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    if let Some(seed) = args.seed {
        config.generator.seed = Some(seed);
    }
    if let Some(interval) = args.interval_ms {
        config.dashboard.tick_interval_ms = interval;
    }
    if let Some(window) = args.window {
        config.dashboard.window = window;
    }
    if let Some(format) = args.format {
        config.export.format = format;
    }

    config.validate()?;
    Ok(config)
}

fn resolve_settings(args: &Args, config: &AppConfig) -> MonitorSettings {
    let mut settings = MonitorSettings::from_config(config);
    settings.autostart = args.autostart;
    settings.max_ticks = args.max_ticks;
    settings.clear_screen = io::stdout().is_terminal();
    if let Some(output) = &args.output {
        settings.export_path = output.clone();
    }
    settings
}

/// Forward stdin lines to the control loop; the channel closes on EOF
fn spawn_input_reader() -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    log::warn!("Failed to read command input: {}", e);
                    break;
                }
            }
        }
    });
    rx
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_args_override_config() {
        let args = Args::try_parse_from([
            "vehicle-telemetry-cli",
            "--seed",
            "5",
            "--interval-ms",
            "250",
            "--window",
            "10",
            "--format",
            "json",
            "--max-ticks",
            "3",
            "--autostart",
            "-o",
            "out/run.json",
        ])
        .unwrap();

        let config = resolve_config(&args).unwrap();
        assert_eq!(config.generator.seed, Some(5));
        assert_eq!(config.dashboard.window, 10);
        assert_eq!(config.export.format, ExportFormat::Json);

        let settings = resolve_settings(&args, &config);
        assert_eq!(settings.tick_interval, Duration::from_millis(250));
        assert_eq!(settings.max_ticks, Some(3));
        assert!(settings.autostart);
        assert_eq!(settings.export_path, PathBuf::from("out/run.json"));
    }

    #[test]
    fn test_defaults_without_arguments() {
        let args = Args::try_parse_from(["vehicle-telemetry-cli"]).unwrap();
        let config = resolve_config(&args).unwrap();
        let settings = resolve_settings(&args, &config);

        assert_eq!(settings.tick_interval, Duration::from_secs(1));
        assert_eq!(settings.window, 20);
        assert!(!settings.autostart);
        assert_eq!(settings.export_path, PathBuf::from(".").join("vehicle_logs.csv"));
    }

    #[test]
    fn test_zero_window_is_rejected() {
        let args = Args::try_parse_from(["vehicle-telemetry-cli", "--window", "0"]).unwrap();
        assert!(resolve_config(&args).is_err());
    }

    #[test]
    fn test_zero_max_ticks_is_rejected() {
        let args =
            Args::try_parse_from(["vehicle-telemetry-cli", "--autostart", "--max-ticks", "0"]).unwrap();
        let err = resolve_config(&args).unwrap_err();
        assert!(err.to_string().contains("--max-ticks"));
    }
}
