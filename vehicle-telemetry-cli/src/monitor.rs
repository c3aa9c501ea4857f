//! Dashboard control loop
//!
//! Owns the session and the generator, turns the tick interval into tick events
//! and applies operator commands between ticks. Commands arrive as raw lines over
//! a channel so that every state change happens on this loop.

use crate::commands::{Command, HELP_TEXT};
use crate::config::{AppConfig, ExportFormat};
use crate::report;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};
use vehicle_telemetry::{export_to_writer, Generator, Session};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Runtime settings resolved from the config file and command line
#[derive(Debug, Clone)]
pub struct MonitorSettings {
    pub tick_interval: Duration,
    pub window: usize,
    pub autostart: bool,
    /// Export and exit once this many samples have been logged
    pub max_ticks: Option<usize>,
    pub export_path: PathBuf,
    pub export_format: ExportFormat,
    /// Redraw the dashboard in place instead of appending
    pub clear_screen: bool,
}

impl MonitorSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            tick_interval: Duration::from_millis(config.dashboard.tick_interval_ms),
            window: config.dashboard.window,
            autostart: false,
            max_ticks: None,
            export_path: config.export.path(),
            export_format: config.export.format,
            clear_screen: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Monitor {
    session: Session,
    generator: Generator,
    settings: MonitorSettings,
}

impl Monitor {
    pub fn new(generator: Generator, settings: MonitorSettings) -> Self {
        let session = if settings.autostart {
            log::info!("Monitoring started automatically");
            Session::new().start()
        } else {
            Session::new()
        };

        Self {
            session,
            generator,
            settings,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run until `quit`, the input closes while stopped, or `max_ticks` is reached
    pub fn run(mut self, input: Receiver<String>, out: &mut dyn Write) -> Result<Session> {
        let interval = self.settings.tick_interval;
        let mut next_tick = Instant::now() + interval;
        let mut input_open = true;

        writeln!(out, "{}", report::render_status(&self.session))?;
        writeln!(out, "Type `help` for commands.")?;

        loop {
            let wait = next_tick.saturating_duration_since(Instant::now());

            let line = if input_open {
                match input.recv_timeout(wait) {
                    Ok(line) => Some(line),
                    Err(RecvTimeoutError::Timeout) => None,
                    Err(RecvTimeoutError::Disconnected) => {
                        log::debug!("Command input closed");
                        input_open = false;
                        continue;
                    }
                }
            } else {
                if !self.session.is_running() {
                    log::info!("Input closed while stopped, exiting");
                    break;
                }
                thread::sleep(wait);
                None
            };

            match line {
                Some(line) => {
                    if self.handle_line(&line, out)? == Flow::Quit {
                        break;
                    }
                }
                None => {
                    next_tick += interval;
                    if self.on_tick(out)? == Flow::Quit {
                        break;
                    }
                }
            }
        }

        Ok(self.session)
    }

    fn handle_line(&mut self, line: &str, out: &mut dyn Write) -> Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }
        match line.parse::<Command>() {
            Ok(command) => self.handle_command(command, out),
            Err(e) => {
                writeln!(out, "{}\n{}", e, HELP_TEXT)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn handle_command(&mut self, command: Command, out: &mut dyn Write) -> Result<Flow> {
        log::debug!("Command: {:?}", command);
        match command {
            Command::Start => {
                self.session = std::mem::take(&mut self.session).start();
                log::info!("Monitoring started");
                writeln!(out, "▶️  Monitoring started")?;
            }
            Command::Stop => {
                self.session = std::mem::take(&mut self.session).stop();
                log::info!("Monitoring stopped");
                writeln!(out, "⏹️  Monitoring stopped")?;
            }
            Command::Export(path) => {
                let path = path.unwrap_or_else(|| self.settings.export_path.clone());
                self.export(&path, out)?;
            }
            Command::Table => {
                let log = self.session.log();
                if log.is_empty() {
                    writeln!(out, "{}", report::NO_SAMPLES)?;
                } else {
                    write!(out, "{}", report::render_table(log.as_slice()))?;
                }
            }
            Command::Status => {
                writeln!(out, "{}", report::render_status(&self.session))?;
            }
            Command::Help => {
                writeln!(out, "{}", HELP_TEXT)?;
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// One timer tick: sample while running, then redraw
    fn on_tick(&mut self, out: &mut dyn Write) -> Result<Flow> {
        if !self.session.is_running() {
            return Ok(Flow::Continue);
        }

        // The limit may already be met before this tick appends anything
        if self.limit_reached() {
            return self.finish(out);
        }

        self.session = std::mem::take(&mut self.session).tick(&mut self.generator);

        if self.settings.clear_screen {
            write!(out, "{}", CLEAR_SCREEN)?;
        }
        write!(out, "{}", report::render_dashboard(&self.session, self.settings.window))?;
        out.flush()?;

        if self.limit_reached() {
            return self.finish(out);
        }
        Ok(Flow::Continue)
    }

    fn limit_reached(&self) -> bool {
        self.settings
            .max_ticks
            .is_some_and(|max| self.session.log().len() >= max)
    }

    /// Stop, export, and leave the loop once `max_ticks` is met
    fn finish(&mut self, out: &mut dyn Write) -> Result<Flow> {
        log::info!("Reached {} samples", self.session.log().len());
        self.session = std::mem::take(&mut self.session).stop();
        let path = self.settings.export_path.clone();
        self.export(&path, out)?;
        Ok(Flow::Quit)
    }

    fn export(&self, path: &Path, out: &mut dyn Write) -> Result<()> {
        let log = self.session.log();
        if log.is_empty() {
            writeln!(out, "Nothing to export yet")?;
            return Ok(());
        }

        write_export(self.session(), path, self.settings.export_format)?;
        log::info!("Exported {} samples to {:?}", log.len(), path);
        writeln!(out, "📤 Exported {} samples to {}", log.len(), path.display())?;
        Ok(())
    }
}

/// Write the session log to `path` in the requested format
pub fn write_export(session: &Session, path: &Path, format: ExportFormat) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create export directory: {:?}", parent))?;
    }

    let file =
        File::create(path).with_context(|| format!("Failed to create export file: {:?}", path))?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => export_to_writer(session.log(), &mut writer)
            .with_context(|| format!("Failed to write CSV export: {:?}", path))?,
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, session.log().as_slice())
                .with_context(|| format!("Failed to write JSON export: {:?}", path))?;
            writer.write_all(b"\n")?;
        }
    }
    writer.flush()?;
    Ok(())
}
