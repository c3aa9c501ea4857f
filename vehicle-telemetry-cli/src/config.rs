//! Configuration loading and parsing

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use vehicle_telemetry::{GeneratorConfig, EXPORT_FILE_NAME};

/// Main application configuration (loaded from config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardConfig {
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
    /// Number of trailing samples shown in charts and the table
    #[serde(default = "default_window")]
    pub window: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval(),
            window: default_window(),
        }
    }
}

fn default_tick_interval() -> u64 {
    1000
}

fn default_window() -> usize {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_file_name")]
    pub file_name: String,
    #[serde(default)]
    pub format: ExportFormat,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            file_name: default_file_name(),
            format: ExportFormat::default(),
        }
    }
}

impl ExportConfig {
    /// Full path the export is written to
    pub fn path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_file_name() -> String {
    EXPORT_FILE_NAME.to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl AppConfig {
    /// Reject settings the dashboard cannot run with
    pub fn validate(&self) -> Result<()> {
        self.generator
            .validate()
            .context("Invalid [generator] section")?;

        if self.dashboard.tick_interval_ms == 0 {
            bail!("dashboard.tick_interval_ms must be greater than zero");
        }
        if self.dashboard.window == 0 {
            bail!("dashboard.window must be greater than zero");
        }
        if self.export.file_name.trim().is_empty() {
            bail!("export.file_name must not be empty");
        }
        Ok(())
    }
}

/// Parse configuration from TOML text
pub fn parse_config(content: &str) -> Result<AppConfig> {
    let config: AppConfig = toml::from_str(content).context("Failed to parse configuration")?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    parse_config(&content).with_context(|| format!("Invalid config file: {:?}", path))
}
