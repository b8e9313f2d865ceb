//! Engine output tensors and their validated shape

use serde::{Deserialize, Serialize};

use crate::error::InvalidInputError;

/// Scores of every vocabulary class for one timestep
pub type ClassScoreVector = Vec<f32>;

/// Per-timestep class scores for a single batch item
pub type TimestepSequence = Vec<ClassScoreVector>;

/// Flat numeric tensor as produced by an inference engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tensor {
    pub dims: Vec<usize>,
    pub data: Vec<f32>,
}

impl Tensor {
    pub fn new(dims: Vec<usize>, data: Vec<f32>) -> Self {
        Self { dims, data }
    }

    /// Build a `[1, S, V]` tensor from nested per-timestep scores
    pub fn from_sequence(scores: &[ClassScoreVector]) -> Self {
        let classes = scores.first().map_or(0, Vec::len);
        Self {
            dims: vec![1, scores.len(), classes],
            data: scores.iter().flatten().copied().collect(),
        }
    }
}

/// Dimensions of a recognition model output: `[batch, sequence, classes]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputShape {
    pub batch: usize,
    pub sequence: usize,
    pub classes: usize,
}

impl OutputShape {
    /// Validate declared dimensions against the flat buffer length
    pub fn from_dims(dims: &[usize], buffer_len: usize) -> Result<Self, InvalidInputError> {
        let &[batch, sequence, classes] = dims else {
            return Err(InvalidInputError::InvalidShape(dims.to_vec()));
        };

        if batch == 0 {
            return Err(InvalidInputError::InvalidShape(dims.to_vec()));
        }

        let expected = batch
            .checked_mul(sequence)
            .and_then(|n| n.checked_mul(classes))
            .ok_or_else(|| InvalidInputError::InvalidShape(dims.to_vec()))?;

        if expected != buffer_len {
            return Err(InvalidInputError::BufferLength {
                expected,
                found: buffer_len,
            });
        }

        Ok(Self {
            batch,
            sequence,
            classes,
        })
    }

    /// Values per batch item
    pub fn batch_stride(&self) -> usize {
        self.sequence * self.classes
    }
}

/// Reshape a flat engine output into the timestep sequence of batch item 0
pub fn reshape(tensor: &Tensor) -> Result<(OutputShape, TimestepSequence), InvalidInputError> {
    let shape = OutputShape::from_dims(&tensor.dims, tensor.data.len())?;

    if shape.sequence == 0 {
        return Err(InvalidInputError::EmptySequence);
    }
    if shape.classes == 0 {
        return Err(InvalidInputError::InvalidShape(tensor.dims.clone()));
    }

    let first = &tensor.data[..shape.batch_stride()];
    let scores = first
        .chunks_exact(shape.classes)
        .map(<[f32]>::to_vec)
        .collect();

    Ok((shape, scores))
}
