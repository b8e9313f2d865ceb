//! Custom error types for the OCR-RS system

use thiserror::Error;

/// Main error type for the OCR-RS system
#[derive(Error, Debug)]
pub enum OcrError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    #[error("Inference engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Input shape violations raised by the tensor decoder
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    #[error("Timestep sequence is empty")]
    EmptySequence,

    #[error("Vocabulary is empty")]
    EmptyVocabulary,

    #[error("Timestep {timestep} has {found} class scores, vocabulary has {expected} symbols")]
    ClassCountMismatch {
        timestep: usize,
        expected: usize,
        found: usize,
    },

    #[error("Expected 3 output dimensions [batch, sequence, classes], got {0:?}")]
    InvalidShape(Vec<usize>),

    #[error("Output buffer holds {found} values, dimensions require {expected}")]
    BufferLength { expected: usize, found: usize },

    #[error("Blank index {index} is outside the vocabulary of {size} symbols")]
    BlankOutOfRange { index: usize, size: usize },
}

/// Inference engine errors
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Recorded output not found: {0}")]
    OutputNotFound(String),

    #[error("Failed to parse recorded output: {0}")]
    OutputParse(String),

    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Session already closed")]
    Closed,
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Invalid configuration value: {field} = {value}")]
    InvalidValue { field: String, value: String },

    #[error("Missing required field: {0}")]
    MissingField(String),
}

impl ConfigError {
    /// Classify a failed read of `path`: missing files stay distinct from
    /// permission and other IO failures
    pub fn from_read(path: &std::path::Path, error: std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound(path.display().to_string()),
            _ => ConfigError::Read {
                path: path.display().to_string(),
                message: error.to_string(),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, OcrError>;
