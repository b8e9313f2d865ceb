//! Model vocabulary: class index to output symbol

use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, InvalidInputError};

/// Character set of the bundled ONNX recognition model, one symbol per char.
pub const DEFAULT_CHARSET: &str =
    "z9k5ijq.EOTPr_LcFDyumotYKO-QJjd:BmPb8lMMH14s6'g7U11a3)pwcVHWGF\"GZvaxdh(szc";

/// Ordered, 0-indexed symbol table matching a model's output classes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    symbols: Vec<String>,
}

/// Model metadata as written next to exported models
#[derive(Debug, Deserialize)]
struct ModelMetadata {
    #[serde(default)]
    charlist: Option<CharList>,
    #[serde(default)]
    vocab: Option<CharList>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CharList {
    Chars(String),
    Symbols(Vec<String>),
}

impl CharList {
    fn into_symbols(self) -> Vec<String> {
        match self {
            CharList::Chars(chars) => chars.chars().map(String::from).collect(),
            CharList::Symbols(symbols) => symbols,
        }
    }
}

impl Vocabulary {
    /// Build a vocabulary from an explicit symbol list
    pub fn new<I, S>(symbols: I) -> Result<Self, InvalidInputError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();
        if symbols.is_empty() {
            return Err(InvalidInputError::EmptyVocabulary);
        }
        Ok(Self { symbols })
    }

    /// Build a vocabulary with one symbol per character of `charset`
    pub fn from_charset(charset: &str) -> Result<Self, InvalidInputError> {
        Self::new(charset.chars().map(String::from))
    }

    /// Load a vocabulary from a JSON metadata file.
    ///
    /// The file must carry either a `charlist` or a `vocab` key, holding
    /// a string (one symbol per char) or a list of symbols.
    pub fn from_metadata_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::from_read(path, e))?;
        Self::from_metadata_str(&content)
    }

    /// Parse a vocabulary from JSON metadata text
    pub fn from_metadata_str(content: &str) -> Result<Self, ConfigError> {
        let metadata: ModelMetadata =
            serde_json::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let list = metadata
            .charlist
            .or(metadata.vocab)
            .ok_or_else(|| ConfigError::MissingField("charlist".to_string()))?;

        Self::new(list.into_symbols()).map_err(|e| ConfigError::InvalidValue {
            field: "charlist".to_string(),
            value: e.to_string(),
        })
    }

    /// Symbol at `index`, if any
    pub fn get(&self, index: usize) -> Option<&str> {
        self.symbols.get(index).map(String::as_str)
    }

    /// Number of symbols (V)
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for a constructed vocabulary
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_CHARSET.chars().map(String::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_charset() {
        let vocab = Vocabulary::from_charset("abc").unwrap();
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.get(0), Some("a"));
        assert_eq!(vocab.get(2), Some("c"));
        assert_eq!(vocab.get(3), None);
    }

    #[test]
    fn test_multi_char_symbols() {
        let vocab = Vocabulary::new(["a", "b", "<eot>"]).unwrap();
        assert_eq!(vocab.get(2), Some("<eot>"));
    }

    #[test]
    fn test_empty_vocabulary_rejected() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(
            Vocabulary::new(empty),
            Err(InvalidInputError::EmptyVocabulary)
        );
        assert!(Vocabulary::from_charset("").is_err());
    }

    #[test]
    fn test_default_matches_charset() {
        let vocab = Vocabulary::default();
        assert_eq!(vocab.len(), DEFAULT_CHARSET.chars().count());
        assert_eq!(vocab.get(8), Some("E"));
    }

    #[test]
    fn test_metadata_charlist_list() {
        let vocab = Vocabulary::from_metadata_str(r#"{"charlist": ["", "a", "b"]}"#).unwrap();
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.get(1), Some("a"));
    }

    #[test]
    fn test_metadata_vocab_string() {
        let vocab = Vocabulary::from_metadata_str(r#"{"vocab": "xyz", "height": 32}"#).unwrap();
        assert_eq!(vocab.symbols(), &["x", "y", "z"]);
    }

    #[test]
    fn test_metadata_missing_key() {
        let err = Vocabulary::from_metadata_str(r#"{"height": 32}"#).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(_)));
    }

    #[test]
    fn test_metadata_file_not_found() {
        let err = Vocabulary::from_metadata_file("/nonexistent/metadata.json").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_metadata_unreadable_is_not_reported_missing() {
        let dir = tempfile::tempdir().unwrap();
        // A directory exists but cannot be read as a file
        let err = Vocabulary::from_metadata_file(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }), "got {:?}", err);
    }
}
