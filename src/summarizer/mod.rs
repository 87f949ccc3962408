// Summarizer pipeline: Preprocessor -> SentenceSplitter -> SentenceScorer -> Selector.
//
// Consumes a transcript and a topic list, produces one representative
// sentence. The pipeline is pure and synchronous: no I/O, no shared state,
// deterministic for identical inputs.

pub mod preprocess;
pub mod score;
pub mod select;
pub mod split;

use tracing::debug;

use crate::config::SummaryConfig;
use crate::error::{RapportError, Result};

pub use split::Sentence;

/// The summarizer facade. Construct once with a config, call
/// [`Summarizer::summarize`] per transcript.
pub struct Summarizer {
    config: SummaryConfig,
    preprocessor: preprocess::Preprocessor,
    splitter: split::SentenceSplitter,
}

impl Summarizer {
    pub fn new(config: SummaryConfig) -> Self {
        let preprocessor = preprocess::Preprocessor::new(&config);
        let splitter = split::SentenceSplitter::new(&config);
        Self {
            config,
            preprocessor,
            splitter,
        }
    }

    /// Produce a single-sentence extractive summary of a conversational
    /// transcript, guided by the supplied topic list.
    ///
    /// Topics are case-normalized before matching. Fails with `Validation`
    /// on an empty transcript and `EmptyInput` when no sentence survives
    /// filler removal and the minimum-length filter.
    pub fn summarize(&self, transcript: &str, topics: &[String]) -> Result<String> {
        if transcript.trim().is_empty() {
            return Err(RapportError::Validation(
                "transcript is empty".to_string(),
            ));
        }

        let topics = normalize_topics(topics)?;

        let cleaned = self.preprocessor.clean(transcript);
        let sentences = self.splitter.split(&cleaned);
        debug!(
            sentences = sentences.len(),
            topics = topics.len(),
            "Split transcript into candidate sentences"
        );

        let scorer = score::SentenceScorer::new(&self.config);
        let scored = scorer.score_all(&sentences, &topics);

        let best = select::select(&scored)?;
        debug!(index = best.index, score = best.score, "Selected summary sentence");

        Ok(finalize(&best.sentence.text))
    }
}

/// Lowercase and trim topic strings, dropping blanks. A topic that is blank
/// after trimming signals a malformed request.
fn normalize_topics(topics: &[String]) -> Result<Vec<String>> {
    let mut out = Vec::with_capacity(topics.len());
    for topic in topics {
        let t = topic.trim().to_lowercase();
        if t.is_empty() {
            return Err(RapportError::Validation(
                "topic list contains a blank entry".to_string(),
            ));
        }
        out.push(t);
    }
    Ok(out)
}

/// Ensure the summary reads as a sentence: terminal punctuation added when
/// the splitter's fallback path produced a chunk without one.
fn finalize(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.ends_with(['.', '!', '?']) {
        trimmed.to_string()
    } else {
        format!("{trimmed}.")
    }
}
