//! Inference engine integration

pub mod replay;
pub mod session;

pub use replay::ReplayEngine;
pub use session::RecognitionSession;

use crate::decode::Tensor;
use crate::error::EngineError;

/// A recognition model runtime producing `[batch, sequence, classes]` scores
pub trait InferenceEngine {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    /// Run the model on a preprocessed input tensor
    fn run(&mut self, input: &Tensor) -> Result<Tensor, EngineError>;

    /// Release runtime resources
    fn shutdown(&mut self) -> Result<(), EngineError> {
        Ok(())
    }
}
