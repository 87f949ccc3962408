// Summary selection — the single best-scoring sentence.
//
// The design deliberately commits to a top-1 summary, trading coverage for
// assured coherence. Ties break toward the earliest sentence in the source.

use crate::error::{RapportError, Result};
use crate::summarizer::score::ScoredSentence;

/// Pick the maximum-scoring sentence; ties broken by earliest ordinal
/// position. Errors with `EmptyInput` when nothing survived filtering —
/// never a silent empty summary.
pub fn select(scored: &[ScoredSentence]) -> Result<ScoredSentence> {
    let mut best: Option<&ScoredSentence> = None;
    for candidate in scored {
        let better = match best {
            None => true,
            // Strict comparison keeps the earliest sentence on equal scores,
            // since candidates arrive in source order.
            Some(current) => candidate.score > current.score,
        };
        if better {
            best = Some(candidate);
        }
    }
    best.cloned().ok_or(RapportError::EmptyInput)
}
