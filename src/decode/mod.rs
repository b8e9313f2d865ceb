//! Model output decoding: tensors to text

pub mod greedy;
pub mod postprocess;
pub mod tensor;
pub mod vocab;

pub use greedy::{argmax, decode_ctc, decode_greedy};
pub use postprocess::{collapse_repeats, normalize_whitespace, postprocess, truncate_at_marker};
pub use tensor::{reshape, ClassScoreVector, OutputShape, Tensor, TimestepSequence};
pub use vocab::{Vocabulary, DEFAULT_CHARSET};

use crate::config::DecoderConfig;
use crate::error::InvalidInputError;

/// Decoded text together with the stream it was cleaned from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recognition {
    /// Final text
    pub text: String,
    /// Symbol stream before post-processing
    pub raw: String,
    /// Number of timesteps decoded
    pub timesteps: usize,
}

/// Configured decoder: vocabulary plus post-processing options
#[derive(Debug, Clone)]
pub struct TextDecoder {
    vocabulary: Vocabulary,
    config: DecoderConfig,
}

impl TextDecoder {
    /// Create a decoder, checking the blank index against the vocabulary
    pub fn new(vocabulary: Vocabulary, config: DecoderConfig) -> Result<Self, InvalidInputError> {
        if let Some(blank) = config.blank_index {
            if blank >= vocabulary.len() {
                return Err(InvalidInputError::BlankOutOfRange {
                    index: blank,
                    size: vocabulary.len(),
                });
            }
        }
        Ok(Self { vocabulary, config })
    }

    /// Decode per-timestep scores into text
    pub fn decode(&self, scores: &[ClassScoreVector]) -> Result<String, InvalidInputError> {
        self.decode_detailed(scores).map(|r| r.text)
    }

    /// Decode per-timestep scores, keeping the raw stream
    pub fn decode_detailed(
        &self,
        scores: &[ClassScoreVector],
    ) -> Result<Recognition, InvalidInputError> {
        let (raw, collapse) = match self.config.blank_index {
            // Repeats are already resolved by class index
            Some(blank) => (decode_ctc(scores, &self.vocabulary, blank)?, false),
            None => (
                decode_greedy(scores, &self.vocabulary)?,
                self.config.collapse_repeats,
            ),
        };

        let text = postprocess(&raw, self.config.end_marker.as_deref(), collapse);

        Ok(Recognition {
            text,
            raw,
            timesteps: scores.len(),
        })
    }

    /// Validate and reshape a flat engine output, then decode batch item 0
    pub fn decode_tensor(&self, tensor: &Tensor) -> Result<Recognition, InvalidInputError> {
        let (_, scores) = reshape(tensor)?;
        self.decode_detailed(&scores)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }
}
