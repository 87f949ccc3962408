// TF-IDF topic extraction.
//
// Uses the `keyword_extraction` crate with each sentence of the transcript
// treated as a separate document for IDF computation — words that appear in
// every sentence get downweighted, while words distinctive to parts of the
// conversation get boosted.

use keyword_extraction::tf_idf::{TfIdf, TfIdfParams};
use stop_words::{get, LANGUAGE};
use tracing::info;

use crate::error::{RapportError, Result};
use crate::topics::traits::TopicExtractor;

/// TF-IDF based topic extractor — the default collaborator.
///
/// Zero API calls, runs locally, no cost.
pub struct TfIdfExtractor;

impl TopicExtractor for TfIdfExtractor {
    fn extract(&self, transcript: &str, top_n: usize) -> Result<Vec<String>> {
        if transcript.trim().is_empty() {
            return Err(RapportError::Validation(
                "cannot extract topics from an empty transcript".to_string(),
            ));
        }

        // Each sentence becomes a document so IDF has something to contrast.
        let documents: Vec<String> = transcript
            .split(['.', '!', '?'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        let stop_words: Vec<String> = get(LANGUAGE::English);

        // Over-fetch so deduplication still leaves top_n candidates.
        let params = TfIdfParams::UnprocessedDocuments(&documents, &stop_words, None);
        let tfidf = TfIdf::new(params);
        let ranked: Vec<(String, f32)> = tfidf.get_ranked_word_scores(top_n * 3);

        if ranked.is_empty() {
            return Err(RapportError::Collaborator(format!(
                "TF-IDF produced no keywords from {} sentences",
                documents.len()
            )));
        }

        let topics = diversify(ranked, top_n);

        info!(
            topics = topics.len(),
            top_topic = topics.first().map(String::as_str).unwrap_or(""),
            "Extracted topics"
        );

        Ok(topics)
    }
}

/// Keep ranked keywords distinct: lowercase them and drop any that is a
/// substring (or superstring) of an already-kept topic, so "launch" and
/// "launches" don't both make the list.
fn diversify(ranked: Vec<(String, f32)>, top_n: usize) -> Vec<String> {
    let mut kept: Vec<String> = Vec::with_capacity(top_n);
    for (word, _score) in ranked {
        let word = word.to_lowercase();
        if word.is_empty() {
            continue;
        }
        let near_duplicate = kept
            .iter()
            .any(|k| k.contains(&word) || word.contains(k.as_str()));
        if !near_duplicate {
            kept.push(word);
        }
        if kept.len() == top_n {
            break;
        }
    }
    kept
}
