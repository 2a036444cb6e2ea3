//! # Arm, Server and Controller Configuration
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! working setup with the standard 100-unit links.
//!
//! ## Example: TOML Configuration
//!
//! ```toml
//! [arm]
//! link_length = 100.0
//! angle_tolerance = 0.5
//!
//! [server]
//! host = "127.0.0.1"
//! port = 5000
//!
//! [controller]
//! step = 10.0
//! ```

// src/config.rs - Single configuration file
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::kinematics::{ANGLE_TOLERANCE, LINK_LENGTH};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration struct for the arm geometry, HTTP server and keyboard controller.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub arm: ArmConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub controller: ControllerConfig,
}

/// Arm geometry.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ArmConfig {
    #[serde(default = "default_link_length")]
    pub link_length: f64,
    /// Degrees.
    #[serde(default = "default_angle_tolerance")]
    pub angle_tolerance: f64,
}

impl Default for ArmConfig {
    fn default() -> Self {
        Self {
            link_length: default_link_length(),
            angle_tolerance: default_angle_tolerance(),
        }
    }
}

/// HTTP listener.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
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
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Interactive controller.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ControllerConfig {
    /// Distance the target moves per key press.
    #[serde(default = "default_step")]
    pub step: f64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self { step: default_step() }
    }
}

impl Config {
    /// Validate value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.arm.link_length.is_finite() || self.arm.link_length <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "arm.link_length must be > 0, got {}",
                self.arm.link_length
            )));
        }
        if !self.arm.angle_tolerance.is_finite() || self.arm.angle_tolerance < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "arm.angle_tolerance must be >= 0, got {}",
                self.arm.angle_tolerance
            )));
        }
        if !self.controller.step.is_finite() || self.controller.step <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "controller.step must be > 0, got {}",
                self.controller.step
            )));
        }
        Ok(())
    }
}

// Default value functions
fn default_link_length() -> f64 { LINK_LENGTH }
fn default_angle_tolerance() -> f64 { ANGLE_TOLERANCE }
fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 5000 }
fn default_step() -> f64 { 10.0 }

/// Load and validate configuration from a TOML file at the given path.
pub fn load_config(path: &str) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        tracing::error!("Failed to read config file '{}': {}", path, e);
        ConfigError::Io(e)
    })?;
    let config: Config = toml::from_str(&contents).map_err(|e| {
        tracing::error!("Failed to parse config TOML: {}", e);
        ConfigError::Toml(e)
    })?;
    config.validate()?;
    Ok(config)
}
