// ABOUTME: Configuration module for the carousel crate
// ABOUTME: Per-slider settings plus page-wide defaults loaded from the environment

use crate::errors::{Result, SliderError};
use std::env;
use std::time::Duration;

pub const DEFAULT_INTERVAL_MS: u64 = 6000;
pub const DEFAULT_SLIDER_CLASS: &str = "slider";
pub const DEFAULT_AUTO_PLAY_CLASS: &str = "auto-play";

/// Settings for one controller, fixed for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderConfig {
    pub auto_play: bool,
    pub auto_play_interval: Duration,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            auto_play: false,
            auto_play_interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
        }
    }
}

impl SliderConfig {
    pub fn new(auto_play: bool, interval_ms: u64) -> Self {
        Self {
            auto_play,
            auto_play_interval: Duration::from_millis(interval_ms),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.auto_play_interval.is_zero() {
            return Err(SliderError::InvalidInterval(
                "auto-play interval must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// How the bootstrap routine discovers sliders in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapOptions {
    pub slider_class: String,
    pub auto_play_class: String,
    pub default_interval: Duration,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Config::default().get_bootstrap_options(None)
    }
}

/// Global configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    pub slider_class: String,
    pub auto_play_class: String,
    pub default_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slider_class: DEFAULT_SLIDER_CLASS.to_string(),
            auto_play_class: DEFAULT_AUTO_PLAY_CLASS.to_string(),
            default_interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let slider_class =
            env::var("SLIDER_CLASS").unwrap_or_else(|_| DEFAULT_SLIDER_CLASS.to_string());
        let auto_play_class = env::var("SLIDER_AUTOPLAY_CLASS")
            .unwrap_or_else(|_| DEFAULT_AUTO_PLAY_CLASS.to_string());
        let default_interval_ms = match env::var("SLIDER_INTERVAL_MS") {
            Ok(raw) => parse_interval_ms(&raw)?,
            Err(_) => DEFAULT_INTERVAL_MS,
        };

        Ok(Self {
            slider_class,
            auto_play_class,
            default_interval_ms,
        })
    }

    /// Bootstrap options, with an optional interval override from the CLI
    pub fn get_bootstrap_options(&self, interval_ms: Option<u64>) -> BootstrapOptions {
        BootstrapOptions {
            slider_class: self.slider_class.clone(),
            auto_play_class: self.auto_play_class.clone(),
            default_interval: Duration::from_millis(
                interval_ms.unwrap_or(self.default_interval_ms),
            ),
        }
    }
}

/// Parse a positive millisecond count.
pub fn parse_interval_ms(raw: &str) -> Result<u64> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(SliderError::InvalidInterval(
            "auto-play interval must be positive".to_string(),
        )),
        Ok(ms) => Ok(ms),
        Err(e) => Err(SliderError::ConfigError(format!(
            "invalid interval {:?}: {}",
            raw, e
        ))),
    }
}
