//! Engine that serves a recorded model output

use std::path::Path;
use tracing::{debug, info};

use super::InferenceEngine;
use crate::decode::Tensor;
use crate::error::EngineError;

/// Returns the same recorded output tensor for every input
pub struct ReplayEngine {
    output: Tensor,
    runs: u64,
}

impl ReplayEngine {
    pub fn new(output: Tensor) -> Self {
        Self { output, runs: 0 }
    }

    /// Load a recorded output from a JSON file: `{"dims": [..], "data": [..]}`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(EngineError::OutputNotFound(path.display().to_string()));
        }

        info!("Loading recorded output from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .map_err(|e| EngineError::OutputParse(e.to_string()))?;
        let output: Tensor =
            serde_json::from_str(&content).map_err(|e| EngineError::OutputParse(e.to_string()))?;

        debug!("Recorded output dims: {:?}", output.dims);

        Ok(Self::new(output))
    }

    /// Number of completed runs
    pub fn runs(&self) -> u64 {
        self.runs
    }
}

impl InferenceEngine for ReplayEngine {
    fn name(&self) -> &str {
        "replay"
    }

    fn run(&mut self, _input: &Tensor) -> Result<Tensor, EngineError> {
        self.runs += 1;
        Ok(self.output.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_returns_recording() {
        let recorded = Tensor::new(vec![1, 1, 2], vec![0.3, 0.7]);
        let mut engine = ReplayEngine::new(recorded.clone());

        let input = Tensor::new(vec![1], vec![0.5]);
        assert_eq!(engine.run(&input).unwrap(), recorded);
        assert_eq!(engine.run(&input).unwrap(), recorded);
        assert_eq!(engine.runs(), 2);
    }

    #[test]
    fn test_replay_missing_file() {
        let result = ReplayEngine::from_file("/nonexistent/output.json");
        assert!(matches!(result, Err(EngineError::OutputNotFound(_))));
    }
}
