// Sentence boundary detection for conversational transcripts.
//
// Speech-to-text output often lacks reliable terminal punctuation, so the
// splitter works in two stages: split on runs of [.!?] first, then break any
// punctuation-free chunk that exceeds a bounded window on coordinating
// conjunctions and pause markers. Short fragments are dropped.

use regex_lite::Regex;

use crate::config::SummaryConfig;

/// A candidate sentence with its derived attributes.
#[derive(Debug, Clone)]
pub struct Sentence {
    /// Sentence text, terminal punctuation retained when the source had one.
    pub text: String,
    /// Ordinal position in the cleaned transcript, 0-based.
    pub index: usize,
    /// Normalized position in [0, 1): index / total.
    pub position: f64,
}

impl Sentence {
    /// Character length (not byte length — transcripts may contain
    /// multi-byte characters).
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Word count on whitespace boundaries.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Pattern-based sentence splitter tolerant of missing punctuation.
pub struct SentenceSplitter {
    min_chars: usize,
    window_chars: usize,
    conjunction_re: Regex,
}

impl SentenceSplitter {
    pub fn new(config: &SummaryConfig) -> Self {
        Self {
            min_chars: config.min_sentence_chars,
            window_chars: config.split_window_chars,
            conjunction_re: Regex::new(r",?\s+(?:and|but|so|because|then)\s+")
                .expect("conjunction pattern is valid"),
        }
    }

    /// Split a cleaned transcript into candidate sentences.
    ///
    /// The returned Vec is a finite, restartable sequence: iterate it as
    /// often as needed, positions stay monotonic with source order.
    pub fn split(&self, cleaned: &str) -> Vec<Sentence> {
        let mut raw: Vec<String> = Vec::new();

        for chunk in split_terminal(cleaned) {
            let trimmed = chunk.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.chars().count() > self.window_chars && !has_terminal(trimmed) {
                // No punctuation within the window: fall back to breaking on
                // conjunctions and pause markers.
                for piece in self.conjunction_re.split(trimmed) {
                    let piece = piece.trim();
                    if !piece.is_empty() {
                        raw.push(piece.to_string());
                    }
                }
            } else {
                raw.push(trimmed.to_string());
            }
        }

        let kept: Vec<String> = raw
            .into_iter()
            .filter(|s| substantial_len(s) >= self.min_chars)
            .collect();

        let total = kept.len();
        kept.into_iter()
            .enumerate()
            .map(|(index, text)| Sentence {
                text,
                index,
                position: index as f64 / total.max(1) as f64,
            })
            .collect()
    }
}

/// Split on runs of terminal punctuation, keeping the first terminal char of
/// each run attached to the sentence it ends. Question detection downstream
/// relies on the `?` surviving the split.
fn split_terminal(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut in_run = false;

    for c in text.chars() {
        if matches!(c, '.' | '!' | '?') {
            if !in_run {
                current.push(c);
                out.push(std::mem::take(&mut current));
                in_run = true;
            }
            // Later chars of a "?!..." run are dropped.
        } else {
            in_run = false;
            current.push(c);
        }
    }
    if !current.trim().is_empty() {
        out.push(current);
    }
    out
}

fn has_terminal(s: &str) -> bool {
    s.contains(['.', '!', '?'])
}

/// Content length excluding the terminal punctuation char, so the minimum
/// threshold measures substance rather than punctuation.
fn substantial_len(s: &str) -> usize {
    s.trim_end_matches(['.', '!', '?']).chars().count()
}
