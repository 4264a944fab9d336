//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.spacex-dash.toml` files.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".spacex-dash.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Dataset location.
    #[serde(default)]
    pub data: DataConfig,

    /// Payload range slider settings.
    #[serde(default)]
    pub slider: SliderConfig,

    /// Page settings.
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Resolve the configured host and port into a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .with_context(|| format!("Invalid listen host: {}", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8051
}

/// Dataset settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to the launch records CSV.
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("spacex_launch_dash.csv")
}

/// Payload range slider settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Lower end of the slider domain (kg).
    #[serde(default = "default_slider_min")]
    pub min: u32,

    /// Upper end of the slider domain (kg).
    #[serde(default = "default_slider_max")]
    pub max: u32,

    /// Step between selectable values (kg).
    #[serde(default = "default_slider_step")]
    pub step: u32,

    /// Spacing of labelled tick marks (kg).
    #[serde(default = "default_mark_interval")]
    pub mark_interval: u32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: default_slider_min(),
            max: default_slider_max(),
            step: default_slider_step(),
            mark_interval: default_mark_interval(),
        }
    }
}

fn default_slider_min() -> u32 {
    0
}

fn default_slider_max() -> u32 {
    10_000
}

fn default_slider_step() -> u32 {
    500
}

fn default_mark_interval() -> u32 {
    2500
}

/// Page settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Heading shown at the top of the page.
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

fn default_title() -> String {
    "SpaceX Launch Records Dashboard".to_string()
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(DEFAULT_CONFIG_FILE);

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence, but only when they were given.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref data) = args.data {
            self.data.path = data.clone();
        }
        if let Some(ref host) = args.host {
            self.server.host = host.clone();
        }
        if let Some(port) = args.port {
            self.server.port = port;
        }
    }

    /// Check settings that serde cannot enforce on its own.
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            bail!("Server port must be non-zero");
        }
        if self.slider.step == 0 {
            bail!("Slider step must be at least 1");
        }
        if self.slider.mark_interval == 0 {
            bail!("Slider mark interval must be at least 1");
        }
        if self.slider.min >= self.slider.max {
            bail!(
                "Slider min ({}) must be below slider max ({})",
                self.slider.min,
                self.slider.max
            );
        }
        Ok(())
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}
