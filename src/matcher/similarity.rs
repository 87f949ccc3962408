// Cosine similarity with degenerate-input guards.

/// Cosine similarity between two equal-length vectors.
///
/// Defined as 0.0 when either vector has zero magnitude — a profile with no
/// signal is treated as unrelated rather than an error. NaN and infinity
/// (which can only arise from pathological inputs) also collapse to 0.0.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "cosine inputs must be the same length");

    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let mag_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let mag_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }

    let score = dot / (mag_a * mag_b);
    if score.is_finite() {
        score
    } else {
        0.0
    }
}
