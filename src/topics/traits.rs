// Topic extractor trait — swap-ready abstraction.
//
// The summarizer and matcher only depend on the output contract: an ordered
// list of short, case-normalized, deduplicated topic strings. The default
// implementation uses TF-IDF; a heavier model can replace it without
// touching either pipeline.

use crate::error::Result;

/// Trait for extracting discussion topics from a transcript.
pub trait TopicExtractor {
    /// Produce up to `top_n` topics, most salient first.
    fn extract(&self, transcript: &str, top_n: usize) -> Result<Vec<String>>;
}
