//! Greedy arg-max decoding of per-timestep class scores

use crate::decode::tensor::ClassScoreVector;
use crate::decode::vocab::Vocabulary;
use crate::error::InvalidInputError;

/// Index of the highest score, lowest index on ties.
///
/// NaN never beats a number. Returns `None` only for an empty slice.
pub fn argmax(scores: &[f32]) -> Option<usize> {
    let mut iter = scores.iter().enumerate();
    let (mut best_idx, mut best) = iter.next().map(|(i, &s)| (i, s))?;

    for (i, &score) in iter {
        if score > best || (best.is_nan() && !score.is_nan()) {
            best_idx = i;
            best = score;
        }
    }

    Some(best_idx)
}

/// Arg-max class index of every timestep, after validating the shape
pub fn best_path(
    scores: &[ClassScoreVector],
    vocabulary: &Vocabulary,
) -> Result<Vec<usize>, InvalidInputError> {
    if scores.is_empty() {
        return Err(InvalidInputError::EmptySequence);
    }
    if vocabulary.is_empty() {
        return Err(InvalidInputError::EmptyVocabulary);
    }

    scores
        .iter()
        .enumerate()
        .map(|(timestep, vector)| {
            if vector.len() != vocabulary.len() {
                return Err(InvalidInputError::ClassCountMismatch {
                    timestep,
                    expected: vocabulary.len(),
                    found: vector.len(),
                });
            }
            // Non-empty: vocabulary has at least one symbol
            Ok(argmax(vector).unwrap_or_default())
        })
        .collect()
}

/// Decode scores into the raw symbol stream, one symbol per timestep
pub fn decode_greedy(
    scores: &[ClassScoreVector],
    vocabulary: &Vocabulary,
) -> Result<String, InvalidInputError> {
    let path = best_path(scores, vocabulary)?;
    Ok(path.iter().filter_map(|&i| vocabulary.get(i)).collect())
}

/// Decode scores with CTC reduction around the `blank` class.
///
/// A symbol is emitted when its index is not `blank` and differs from the
/// previous timestep's index, so repeats separated by a blank survive.
pub fn decode_ctc(
    scores: &[ClassScoreVector],
    vocabulary: &Vocabulary,
    blank: usize,
) -> Result<String, InvalidInputError> {
    if blank >= vocabulary.len() {
        return Err(InvalidInputError::BlankOutOfRange {
            index: blank,
            size: vocabulary.len(),
        });
    }

    let path = best_path(scores, vocabulary)?;
    let mut text = String::new();
    let mut previous = None;

    for idx in path {
        if Some(idx) != previous && idx != blank {
            if let Some(symbol) = vocabulary.get(idx) {
                text.push_str(symbol);
            }
        }
        previous = Some(idx);
    }

    Ok(text)
}
