//! OCR Output Decoding
//!
//! A Rust library for turning the raw output tensors of text-recognition
//! models into clean text ready to become a note.
//!
//! # Architecture
//!
//! The system is organized into the following modules:
//!
//! - `decode`: Tensor shape validation, greedy arg-max decoding, post-processing
//! - `engine`: Inference engine trait and the recognition session that owns it
//! - `output`: Output formatting and writing
//! - `config`: Configuration structures
//! - `error`: Error types
//!
//! Greedy decoding collapses repeated characters unless a CTC blank index is
//! configured, so without a blank class a real double letter ("ll") is folded.
//!
//! # Example
//!
//! ```
//! use ocr_rs::{DecoderConfig, TextDecoder, Vocabulary};
//!
//! let vocabulary = Vocabulary::new(["a", "b", "c"]).unwrap();
//! let decoder = TextDecoder::new(
//!     vocabulary,
//!     DecoderConfig {
//!         end_marker: Some("c".to_string()),
//!         ..Default::default()
//!     },
//! )
//! .unwrap();
//!
//! let scores = vec![
//!     vec![0.9, 0.1, 0.0],
//!     vec![0.9, 0.1, 0.0],
//!     vec![0.0, 0.9, 0.1],
//!     vec![0.0, 0.0, 1.0],
//! ];
//! assert_eq!(decoder.decode(&scores).unwrap(), "ab");
//! ```

pub mod config;
pub mod decode;
pub mod engine;
pub mod error;
pub mod output;

// Re-exports for convenience
pub use config::{Config, DecoderConfig, OutputConfig, OutputFormat, VocabularyConfig};
pub use decode::{
    OutputShape, Recognition, Tensor, TextDecoder, TimestepSequence, Vocabulary,
};
pub use engine::{InferenceEngine, RecognitionSession, ReplayEngine};
pub use error::{ConfigError, EngineError, InvalidInputError, OcrError, Result};
pub use output::OutputWriter;
