//! Recognition session: one engine handle plus its decoder

use tracing::{debug, info, warn};

use super::InferenceEngine;
use crate::config::Config;
use crate::decode::{reshape, Recognition, Tensor, TextDecoder};
use crate::error::{EngineError, Result};

/// Owns an inference engine for its lifetime and decodes its outputs.
///
/// Create once, pass by reference to whatever needs recognition, and call
/// [`close`](Self::close) to tear the engine down. Dropping an open session
/// closes it as well.
pub struct RecognitionSession<E: InferenceEngine> {
    engine: Option<E>,
    decoder: TextDecoder,
}

impl<E: InferenceEngine> RecognitionSession<E> {
    pub fn new(engine: E, decoder: TextDecoder) -> Self {
        info!("Opened recognition session on engine: {}", engine.name());
        Self {
            engine: Some(engine),
            decoder,
        }
    }

    /// Build the decoder from configuration and open a session
    pub fn from_config(engine: E, config: &Config) -> Result<Self> {
        let vocabulary = config.vocabulary.load()?;
        debug!("Vocabulary loaded: {} symbols", vocabulary.len());

        let decoder = TextDecoder::new(vocabulary, config.decoder.clone())?;
        Ok(Self::new(engine, decoder))
    }

    /// Run the engine on `input` and decode its output
    pub fn recognize(&mut self, input: &Tensor) -> Result<Recognition> {
        let engine = self.engine.as_mut().ok_or(EngineError::Closed)?;
        let output = engine.run(input)?;

        let (shape, scores) = reshape(&output)?;
        if shape.batch > 1 {
            warn!(
                "Engine returned batch of {}, decoding only the first item",
                shape.batch
            );
        }

        let result = self.decoder.decode_detailed(&scores)?;
        debug!(
            "Decoded {} timesteps: raw {} chars, text {} chars",
            result.timesteps,
            result.raw.chars().count(),
            result.text.chars().count()
        );

        Ok(result)
    }

    /// Decode an output that was produced outside this session
    pub fn decode(&self, output: &Tensor) -> Result<Recognition> {
        Ok(self.decoder.decode_tensor(output)?)
    }

    /// Shut the engine down; later calls to `recognize` fail
    pub fn close(&mut self) -> Result<()> {
        if let Some(mut engine) = self.engine.take() {
            info!("Closing recognition session on engine: {}", engine.name());
            engine.shutdown()?;
        }
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.engine.is_some()
    }

    pub fn decoder(&self) -> &TextDecoder {
        &self.decoder
    }
}

impl<E: InferenceEngine> Drop for RecognitionSession<E> {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("Engine shutdown failed: {}", e);
        }
    }
}
