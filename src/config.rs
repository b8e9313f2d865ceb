//! Configuration structures for the OCR-RS system

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::decode::vocab::{Vocabulary, DEFAULT_CHARSET};
use crate::error::ConfigError;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub vocabulary: VocabularyConfig,
    pub decoder: DecoderConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::from_read(path, e))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Vocabulary source configuration
///
/// Precedence: `metadata_path`, then `symbols`, then `charset`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// One symbol per character, in model class order
    pub charset: String,
    /// Explicit symbol list (allows multi-character symbols)
    pub symbols: Option<Vec<String>>,
    /// JSON model metadata carrying `charlist` or `vocab`
    pub metadata_path: Option<PathBuf>,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            charset: DEFAULT_CHARSET.to_string(),
            symbols: None,
            metadata_path: None,
        }
    }
}

impl VocabularyConfig {
    /// Resolve the configured source into a vocabulary
    pub fn load(&self) -> Result<Vocabulary, ConfigError> {
        if let Some(ref path) = self.metadata_path {
            return Vocabulary::from_metadata_file(path);
        }

        let vocabulary = match self.symbols {
            Some(ref symbols) => Vocabulary::new(symbols.iter().cloned()),
            None => Vocabulary::from_charset(&self.charset),
        };

        vocabulary.map_err(|e| ConfigError::InvalidValue {
            field: "vocabulary".to_string(),
            value: e.to_string(),
        })
    }
}

/// Decoder configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// End-of-text marker; output is cut at its first occurrence
    pub end_marker: Option<String>,
    /// Collapse consecutive duplicate characters
    pub collapse_repeats: bool,
    /// Class index of the CTC blank, enables blank-aware decoding
    pub blank_index: Option<usize>,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            end_marker: Some("EOT".to_string()),
            collapse_repeats: true,
            blank_index: None,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: OutputFormat,
    /// Output file path (None = console only)
    pub output_path: Option<PathBuf>,
    /// Enable console output
    pub enable_console: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            output_path: None,
            enable_console: true,
        }
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text
    Text,
    /// JSON with the raw stream and timestep count
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::InvalidValue {
                field: "format".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.decoder.end_marker.as_deref(), Some("EOT"));
        assert!(config.decoder.collapse_repeats);
        assert_eq!(config.decoder.blank_index, None);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.vocabulary.charset, DEFAULT_CHARSET);
    }

    #[test]
    fn test_parse_config() {
        let toml_str = r#"
            [vocabulary]
            symbols = ["a", "b", "<eot>"]

            [decoder]
            end_marker = "<eot>"
            collapse_repeats = false

            [output]
            format = "json"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.decoder.end_marker.as_deref(), Some("<eot>"));
        assert!(!config.decoder.collapse_repeats);
        assert_eq!(config.output.format, OutputFormat::Json);

        let vocab = config.vocabulary.load().unwrap();
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.get(2), Some("<eot>"));
    }

    #[test]
    fn test_empty_charset_rejected() {
        let config = VocabularyConfig {
            charset: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            config.load(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("srt".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let err = Config::from_file(&PathBuf::from("/nonexistent/ocr.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_unreadable_config_keeps_io_message() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(&dir.path().to_path_buf()).unwrap_err();
        match err {
            ConfigError::Read { path, message } => {
                assert_eq!(path, dir.path().display().to_string());
                assert!(!message.is_empty());
            }
            other => panic!("expected read error, got {:?}", other),
        }
    }
}
