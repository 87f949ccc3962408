// Vector fusion — weighted concatenation of the topic and psychometric
// sub-vectors into one profile vector per user.

use crate::error::{RapportError, Result};

/// Fuse both users' sub-vectors into their combined profile vectors.
///
/// Per user: `[topic_weight * topic, psych_weight * psych]`, topic segment
/// first. Weights scale, never resize, a sub-vector, so the fused
/// dimensionality is fixed by the vocabulary and psych length alone.
/// Concatenation order is per-user, which makes swapping the two users
/// symmetric under cosine similarity downstream.
///
/// A weight of 0 fully disables that signal; negative weights are rejected.
pub fn fuse(
    topic_a: &[f64],
    topic_b: &[f64],
    psych_a: &[f64],
    psych_b: &[f64],
    topic_weight: f64,
    psych_weight: f64,
) -> Result<(Vec<f64>, Vec<f64>)> {
    validate_weights(topic_weight, psych_weight)?;

    Ok((
        fuse_one(topic_a, psych_a, topic_weight, psych_weight),
        fuse_one(topic_b, psych_b, topic_weight, psych_weight),
    ))
}

/// Check both fusion weights are non-negative. The design enumerates no
/// bound beyond non-negativity.
pub fn validate_weights(topic_weight: f64, psych_weight: f64) -> Result<()> {
    let valid = |w: f64| w.is_finite() && w >= 0.0;
    if !valid(topic_weight) || !valid(psych_weight) {
        return Err(RapportError::Validation(format!(
            "weights must be non-negative, got topic_weight={topic_weight} psych_weight={psych_weight}"
        )));
    }
    Ok(())
}

fn fuse_one(topic: &[f64], psych: &[f64], topic_weight: f64, psych_weight: f64) -> Vec<f64> {
    let mut fused = Vec::with_capacity(topic.len() + psych.len());
    fused.extend(topic.iter().map(|x| x * topic_weight));
    fused.extend(psych.iter().map(|x| x * psych_weight));
    fused
}
