//! Configuration loading and parsing
//!
//! Every section is optional; command-line flags override whatever the file
//! sets.

use anyhow::{Context, Result};
use philo_log_decoder::DecoderConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration (loaded from config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub decoder: DecoderConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InputConfig {
    /// Read the log from stdin
    #[serde(default)]
    pub from_pipe: bool,
    /// Read the log from a file
    pub log_file: Option<PathBuf>,
    /// Keep a copy of the raw log
    #[serde(default)]
    pub save: bool,
}

/// Parameters passed to the simulator binary
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimulationConfig {
    pub binary: Option<PathBuf>,
    #[serde(default = "default_philosophers")]
    pub philosophers: u32,
    #[serde(default = "default_time_to_die")]
    pub time_to_die: u64,
    #[serde(default = "default_time_to_eat")]
    pub time_to_eat: u64,
    #[serde(default = "default_time_to_sleep")]
    pub time_to_sleep: u64,
    /// No limit when absent
    pub max_meals: Option<u32>,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_philosophers() -> u32 {
    5
}

fn default_time_to_die() -> u64 {
    800
}

fn default_time_to_eat() -> u64 {
    200
}

fn default_time_to_sleep() -> u64 {
    200
}

fn default_timeout() -> u64 {
    10
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            binary: None,
            philosophers: default_philosophers(),
            time_to_die: default_time_to_die(),
            time_to_eat: default_time_to_eat(),
            time_to_sleep: default_time_to_sleep(),
            max_meals: None,
            timeout_secs: default_timeout(),
        }
    }
}

impl SimulationConfig {
    /// Arguments in the order the simulator expects them
    pub fn arguments(&self) -> Vec<String> {
        let mut args = vec![
            self.philosophers.to_string(),
            self.time_to_die.to_string(),
            self.time_to_eat.to_string(),
            self.time_to_sleep.to_string(),
        ];
        if let Some(meals) = self.max_meals {
            args.push(meals.to_string());
        }
        args
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Report destination (stdout when absent)
    pub path: Option<PathBuf>,
    /// Directory for saved raw logs
    pub save_dir: Option<PathBuf>,
    #[serde(default = "default_legend")]
    pub legend: bool,
}

fn default_legend() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            path: None,
            save_dir: None,
            legend: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Txt,
    Html,
    Json,
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    if config.simulation.philosophers == 0 {
        anyhow::bail!("Invalid config {:?}: simulation.philosophers must be at least 1", path);
    }

    Ok(config)
}
