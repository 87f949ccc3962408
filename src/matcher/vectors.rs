// Profile vector construction.
//
// Two component vectors per user: a bag-of-words topic vector over a fixed
// shared vocabulary, and a psychometric vector normalized to [0, 1] and
// resampled to a common length. Both are pure functions of their inputs.

use std::collections::BTreeSet;

use crate::profiles::UserProfile;

/// The two sub-vectors for one user, pre-fusion.
#[derive(Debug, Clone)]
pub struct ProfileVectors {
    pub topic: Vec<f64>,
    pub psych: Vec<f64>,
}

/// Builds comparable vector pairs for two users.
///
/// The topic vocabulary is the union of both users' interest lists and the
/// request topics (lowercased, deduped, sorted), fixed for the lifetime of
/// one match request. Each user's topic vector counts, over that vocabulary,
/// the terms present in their own interests combined with the request topics.
pub struct ProfileVectorBuilder {
    vocabulary: Vec<String>,
    psych_dims: usize,
}

impl ProfileVectorBuilder {
    /// Fix the vocabulary and psych dimensionality from the two profiles and
    /// the request topic list.
    pub fn new(a: &UserProfile, b: &UserProfile, request_topics: &[String], min_psych_dims: usize) -> Self {
        // BTreeSet gives a deterministic (sorted) vocabulary ordering.
        let vocabulary: Vec<String> = a
            .interests
            .iter()
            .chain(b.interests.iter())
            .chain(request_topics.iter())
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let psych_dims = a
            .psychometrics
            .len()
            .max(b.psychometrics.len())
            .max(min_psych_dims);

        Self {
            vocabulary,
            psych_dims,
        }
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Build both sub-vectors for one user.
    pub fn build(&self, user: &UserProfile, request_topics: &[String]) -> ProfileVectors {
        ProfileVectors {
            topic: self.topic_vector(user, request_topics),
            psych: resample(&normalize(&user.psychometrics), self.psych_dims),
        }
    }

    /// Bag-of-words counts over the fixed vocabulary. The user's document is
    /// their own interest list plus the request topics.
    fn topic_vector(&self, user: &UserProfile, request_topics: &[String]) -> Vec<f64> {
        let terms: Vec<String> = user
            .interests
            .iter()
            .chain(request_topics.iter())
            .map(|t| t.trim().to_lowercase())
            .collect();

        self.vocabulary
            .iter()
            .map(|word| terms.iter().filter(|t| *t == word).count() as f64)
            .collect()
    }
}

/// Min-max normalize to [0, 1]. An all-equal (or single-value) vector maps
/// to neutral 0.5s rather than collapsing to zeros.
pub fn normalize(psych: &[f64]) -> Vec<f64> {
    if psych.is_empty() {
        return Vec::new();
    }
    let min = psych.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = psych.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if max == min {
        return vec![0.5; psych.len()];
    }
    psych
        .iter()
        .map(|v| ((v - min) / (max - min)).clamp(0.0, 1.0))
        .collect()
}

/// Linearly resample a vector to `target_len` points.
///
/// Empty input yields neutral 0.5s, a single value is replicated, and equal
/// lengths pass through untouched.
pub fn resample(values: &[f64], target_len: usize) -> Vec<f64> {
    match values.len() {
        n if n == target_len => values.to_vec(),
        0 => vec![0.5; target_len],
        1 => vec![values[0]; target_len],
        n => {
            if target_len == 1 {
                return vec![values[0]];
            }
            // Interpolate over a unit interval sampled at both lengths.
            (0..target_len)
                .map(|i| {
                    let x = i as f64 / (target_len - 1) as f64;
                    let pos = x * (n - 1) as f64;
                    let lo = pos.floor() as usize;
                    let hi = pos.ceil() as usize;
                    if lo == hi {
                        values[lo]
                    } else {
                        let frac = pos - lo as f64;
                        values[lo] * (1.0 - frac) + values[hi] * frac
                    }
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, psych: &[f64], interests: &[&str]) -> UserProfile {
        UserProfile {
            id: id.to_string(),
            name: id.to_string(),
            psychometrics: psych.to_vec(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn vocabulary_is_sorted_union_of_interests_and_topics() {
        let a = user("a", &[0.5], &["Hiking", "music"]);
        let b = user("b", &[0.5], &["music", "cooking"]);
        let builder =
            ProfileVectorBuilder::new(&a, &b, &["travel".to_string()], 5);
        assert_eq!(builder.vocabulary(), ["cooking", "hiking", "music", "travel"]);
    }

    #[test]
    fn topic_vectors_share_request_topics_but_differ_on_interests() {
        let a = user("a", &[0.5], &["hiking"]);
        let b = user("b", &[0.5], &["cooking"]);
        let topics = vec!["travel".to_string()];
        let builder = ProfileVectorBuilder::new(&a, &b, &topics, 5);

        let va = builder.build(&a, &topics);
        let vb = builder.build(&b, &topics);
        // vocabulary: [cooking, hiking, travel]
        assert_eq!(va.topic, vec![0.0, 1.0, 1.0]);
        assert_eq!(vb.topic, vec![1.0, 0.0, 1.0]);
    }

    #[test]
    fn psych_vectors_resampled_to_common_length() {
        let a = user("a", &[0.1, 0.9], &[]);
        let b = user("b", &[0.2, 0.4, 0.6, 0.8, 1.0, 0.3, 0.7], &[]);
        let builder = ProfileVectorBuilder::new(&a, &b, &[], 5);
        let va = builder.build(&a, &[]);
        let vb = builder.build(&b, &[]);
        assert_eq!(va.psych.len(), 7);
        assert_eq!(vb.psych.len(), 7);
    }

    #[test]
    fn normalize_maps_to_unit_range() {
        let n = normalize(&[2.0, 6.0, 10.0]);
        assert_eq!(n, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn normalize_all_equal_gives_neutral_values() {
        assert_eq!(normalize(&[3.0, 3.0, 3.0]), vec![0.5, 0.5, 0.5]);
    }

    #[test]
    fn normalize_empty_stays_empty() {
        assert!(normalize(&[]).is_empty());
    }

    #[test]
    fn resample_passthrough_on_equal_length() {
        let v = vec![0.1, 0.2, 0.3];
        assert_eq!(resample(&v, 3), v);
    }

    #[test]
    fn resample_empty_fills_neutral() {
        assert_eq!(resample(&[], 4), vec![0.5; 4]);
    }

    #[test]
    fn resample_single_value_replicates() {
        assert_eq!(resample(&[0.8], 3), vec![0.8, 0.8, 0.8]);
    }

    #[test]
    fn resample_interpolates_linearly() {
        let r = resample(&[0.0, 1.0], 3);
        assert!((r[0] - 0.0).abs() < 1e-9);
        assert!((r[1] - 0.5).abs() < 1e-9);
        assert!((r[2] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn resample_preserves_endpoints() {
        let r = resample(&[0.2, 0.9, 0.4, 0.6], 9);
        assert!((r[0] - 0.2).abs() < 1e-9);
        assert!((r[8] - 0.6).abs() < 1e-9);
    }
}
