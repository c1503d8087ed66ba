// ABOUTME: Error types for the carousel crate
// ABOUTME: Covers navigation contract violations, markup parsing and the file/watch pipeline

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SliderError {
    #[error("Slide index {index} is out of range (slider has {total} slides)")]
    IndexOutOfRange { index: usize, total: usize },

    #[error("Page has {count} slider(s), no slider at position {position}")]
    UnknownSlider { position: usize, count: usize },

    #[error("Slider has no slides")]
    NoSlides,

    #[error("Slider container has no .slides-container element")]
    MissingSlidesContainer,

    #[error("Invalid auto-play interval: {0}")]
    InvalidInterval(String),

    #[error("Markup error at byte {position}: {message}")]
    MarkupError { position: usize, message: String },

    #[error("Script error: {0}")]
    ScriptError(String),

    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Path not found: {0}")]
    PathNotFoundError(PathBuf),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Watch error: {0}")]
    WatchError(String),

    #[error("Unknown error: {0}")]
    UnknownError(String),
}

impl From<anyhow::Error> for SliderError {
    fn from(err: anyhow::Error) -> Self {
        SliderError::UnknownError(err.to_string())
    }
}

// Position is unknown at this level; the parser attaches it where it can.
impl From<quick_xml::Error> for SliderError {
    fn from(err: quick_xml::Error) -> Self {
        SliderError::MarkupError {
            position: 0,
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SliderError>;
