// Matcher pipeline: ProfileVectorBuilder -> VectorFusion -> SimilarityScorer
// -> Interpreter.
//
// Consumes two user records and an optional topic list with two scalar
// weights, produces a compatibility score in [0, 1] and a bucket label.

pub mod fusion;
pub mod interpret;
pub mod similarity;
pub mod vectors;

use tracing::debug;

use crate::config::MatchConfig;
use crate::error::Result;
use crate::profiles::ProfileStore;

pub use interpret::Compatibility;

/// A match request after transport-level marshaling.
#[derive(Debug, Clone)]
pub struct MatchRequest {
    pub user1_id: String,
    pub user2_id: String,
    /// Discussion topics shared by both users, optional.
    pub topics: Vec<String>,
    pub topic_weight: f64,
    pub psych_weight: f64,
}

/// The matcher's output: a clamped score and its interpretation.
#[derive(Debug, Clone, serde::Serialize)]
pub struct MatchOutcome {
    pub score: f64,
    pub interpretation: &'static str,
    #[serde(skip)]
    pub compatibility: Compatibility,
}

impl MatchOutcome {
    fn from_score(score: f64) -> Self {
        let score = score.clamp(0.0, 1.0);
        let compatibility = Compatibility::from_score(score);
        Self {
            score,
            interpretation: compatibility.as_str(),
            compatibility,
        }
    }
}

/// The matcher facade. Reads profiles from the store, never mutates them.
pub struct Matcher<'a> {
    store: &'a ProfileStore,
    config: MatchConfig,
}

impl<'a> Matcher<'a> {
    pub fn new(store: &'a ProfileStore, config: MatchConfig) -> Self {
        Self { store, config }
    }

    /// Compute the compatibility between two users.
    ///
    /// Symmetric in the two user ids. Fails with `UnknownUser` when either id
    /// is not in the store and `Validation` on a negative weight; degenerate
    /// profile data (no psychometrics, unvectorizable topics) degrades to a
    /// defined score instead of erroring.
    pub fn match_users(&self, request: &MatchRequest) -> Result<MatchOutcome> {
        fusion::validate_weights(request.topic_weight, request.psych_weight)?;

        let user1 = self.store.get(&request.user1_id)?;
        let user2 = self.store.get(&request.user2_id)?;

        // Same user on both sides is a perfect match by definition.
        if user1.id == user2.id {
            return Ok(MatchOutcome::from_score(1.0));
        }

        // Without psychometric data on either side there is no base signal
        // to compare; the pair scores zero rather than failing.
        if user1.psychometrics.is_empty() || user2.psychometrics.is_empty() {
            debug!(
                user1 = %user1.id,
                user2 = %user2.id,
                "Missing psychometric data, scoring 0"
            );
            return Ok(MatchOutcome::from_score(0.0));
        }

        let topics: Vec<String> = request
            .topics
            .iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();

        let builder =
            vectors::ProfileVectorBuilder::new(user1, user2, &topics, self.config.min_psych_dims);
        let v1 = builder.build(user1, &topics);
        let v2 = builder.build(user2, &topics);

        // All-zero psych vectors would make cosine degenerate; treat like
        // missing data.
        if is_zero(&v1.psych) || is_zero(&v2.psych) {
            return Ok(MatchOutcome::from_score(0.0));
        }

        // Fall back to psychometric-only comparison when there is no topic
        // signal to fuse.
        let score = if topics.is_empty() || (is_zero(&v1.topic) && is_zero(&v2.topic)) {
            similarity::cosine_similarity(&v1.psych, &v2.psych)
        } else {
            let (fused1, fused2) = fusion::fuse(
                &v1.topic,
                &v2.topic,
                &v1.psych,
                &v2.psych,
                request.topic_weight,
                request.psych_weight,
            )?;
            similarity::cosine_similarity(&fused1, &fused2)
        };

        debug!(
            user1 = %user1.id,
            user2 = %user2.id,
            score,
            vocabulary = builder.vocabulary().len(),
            "Computed compatibility"
        );

        Ok(MatchOutcome::from_score(score))
    }
}

fn is_zero(v: &[f64]) -> bool {
    v.iter().all(|x| *x == 0.0)
}
