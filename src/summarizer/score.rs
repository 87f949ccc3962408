// Six-factor sentence scoring.
//
// A hand-tuned weighted sum, not a learned model. Each factor is a small
// strategy implementing `ScoringFactor`, so weights and factors can be
// swapped and tested independently instead of living in one inline branch
// ladder. Four weighted factors combine additively; two penalties apply
// multiplicatively afterwards.

use crate::config::SummaryConfig;
use crate::summarizer::split::Sentence;

/// Markers that signal a forward-looking statement.
const FUTURE_MARKERS: [&str; 5] = ["plan", "next", "future", "will", "going to"];

/// Conjunctions that signal a truncated thought when they end a sentence.
const DANGLING_WORDS: [&str; 5] = ["and", "but", "so", "because", "the"];

/// Everything a factor may look at besides the sentence itself.
pub struct ScoringContext<'a> {
    /// Case-normalized topic strings, earlier = more salient.
    pub topics: &'a [String],
    /// Total sentence count of the document, for position-aware factors.
    pub total_sentences: usize,
}

/// One weighted scoring rule. `evaluate` returns a value in [0, 1] which the
/// scorer multiplies by `weight`.
pub trait ScoringFactor {
    fn weight(&self) -> f64;
    fn evaluate(&self, sentence: &Sentence, ctx: &ScoringContext) -> f64;
}

/// Fraction of the provided topics that appear in the sentence
/// (case-insensitive substring match). Zero when the topic list is empty.
/// Adding a matching topic never decreases this factor.
pub struct TopicRelevance {
    weight: f64,
}

impl ScoringFactor for TopicRelevance {
    fn weight(&self) -> f64 {
        self.weight
    }

    fn evaluate(&self, sentence: &Sentence, ctx: &ScoringContext) -> f64 {
        if ctx.topics.is_empty() {
            return 0.0;
        }
        let lower = sentence.text.to_lowercase();
        let matches = ctx.topics.iter().filter(|t| lower.contains(t.as_str())).count();
        matches as f64 / ctx.topics.len() as f64
    }
}

/// Saturating word-count measure: substantial sentences score higher, but
/// the factor caps at 1.0 so sheer length stops paying off.
pub struct ContentDensity {
    weight: f64,
    saturation_words: usize,
}

impl ScoringFactor for ContentDensity {
    fn weight(&self) -> f64 {
        self.weight
    }

    fn evaluate(&self, sentence: &Sentence, _ctx: &ScoringContext) -> f64 {
        (sentence.word_count() as f64 / self.saturation_words as f64).min(1.0)
    }
}

/// Bell over normalized position peaking in the middle of the document.
/// Mid-discussion content is least likely to be introductory throat-clearing
/// or closing pleasantries.
pub struct PositionWeighting {
    weight: f64,
}

impl ScoringFactor for PositionWeighting {
    fn weight(&self) -> f64 {
        self.weight
    }

    fn evaluate(&self, sentence: &Sentence, _ctx: &ScoringContext) -> f64 {
        let p = sentence.position;
        if (0.3..=0.7).contains(&p) {
            1.0
        } else if p < 0.1 || p > 0.8 {
            0.6
        } else {
            0.4
        }
    }
}

/// Flat bonus for questions and future-tense statements: inquisitive and
/// forward-looking sentences carry discussion intent.
pub struct ConversationalBonus {
    weight: f64,
}

impl ScoringFactor for ConversationalBonus {
    fn weight(&self) -> f64 {
        self.weight
    }

    fn evaluate(&self, sentence: &Sentence, _ctx: &ScoringContext) -> f64 {
        if sentence.text.contains('?') {
            return 1.0;
        }
        let lower = sentence.text.to_lowercase();
        if FUTURE_MARKERS.iter().any(|m| lower.contains(m)) {
            1.0
        } else {
            0.0
        }
    }
}

/// A sentence together with its combined score.
#[derive(Debug, Clone)]
pub struct ScoredSentence {
    pub sentence: Sentence,
    pub score: f64,
    /// Copied from the sentence for tie-breaking without reaching through.
    pub index: usize,
}

/// Combines the weighted factors and applies the multiplicative penalties.
///
/// Scoring is a pure function of its inputs: no randomness, no state across
/// calls. Identical inputs always produce identical scores.
pub struct SentenceScorer {
    factors: Vec<Box<dyn ScoringFactor>>,
    short_chars: usize,
    long_chars: usize,
    short_penalty: f64,
    long_penalty: f64,
    incomplete_penalty: f64,
}

impl SentenceScorer {
    pub fn new(config: &SummaryConfig) -> Self {
        let factors: Vec<Box<dyn ScoringFactor>> = vec![
            Box::new(TopicRelevance {
                weight: config.topic_weight,
            }),
            Box::new(ContentDensity {
                weight: config.density_weight,
                saturation_words: config.density_saturation_words,
            }),
            Box::new(PositionWeighting {
                weight: config.position_weight,
            }),
            Box::new(ConversationalBonus {
                weight: config.conversational_weight,
            }),
        ];
        Self {
            factors,
            short_chars: config.short_sentence_chars,
            long_chars: config.long_sentence_chars,
            short_penalty: config.short_penalty,
            long_penalty: config.long_penalty,
            incomplete_penalty: config.incomplete_penalty,
        }
    }

    /// Score one sentence against the topic list.
    pub fn score(&self, sentence: &Sentence, topics: &[String], total_sentences: usize) -> f64 {
        let ctx = ScoringContext {
            topics,
            total_sentences,
        };

        let combined: f64 = self
            .factors
            .iter()
            .map(|f| f.weight() * f.evaluate(sentence, &ctx))
            .sum();

        combined * self.length_multiplier(sentence) * self.completeness_multiplier(sentence)
    }

    /// Score every sentence of a document.
    pub fn score_all(&self, sentences: &[Sentence], topics: &[String]) -> Vec<ScoredSentence> {
        let total = sentences.len();
        sentences
            .iter()
            .map(|s| ScoredSentence {
                score: self.score(s, topics, total),
                index: s.index,
                sentence: s.clone(),
            })
            .collect()
    }

    fn length_multiplier(&self, sentence: &Sentence) -> f64 {
        let len = sentence.char_len();
        if len < self.short_chars {
            self.short_penalty
        } else if len > self.long_chars {
            self.long_penalty
        } else {
            1.0
        }
    }

    fn completeness_multiplier(&self, sentence: &Sentence) -> f64 {
        let last_word = sentence
            .text
            .trim_end_matches(['.', '!', '?', ','])
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or("")
            .to_lowercase();
        if DANGLING_WORDS.contains(&last_word.as_str()) {
            self.incomplete_penalty
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(text: &str, index: usize, position: f64) -> Sentence {
        Sentence {
            text: text.to_string(),
            index,
            position,
        }
    }

    fn scorer() -> SentenceScorer {
        SentenceScorer::new(&SummaryConfig::default())
    }

    #[test]
    fn topic_relevance_is_a_fraction_of_matches() {
        let s = sentence("The ship design is reusable by default.", 1, 0.5);
        let ctx = ScoringContext {
            topics: &["ship".to_string(), "mars".to_string()],
            total_sentences: 3,
        };
        let factor = TopicRelevance { weight: 0.4 };
        assert!((factor.evaluate(&s, &ctx) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn topic_relevance_zero_without_topics() {
        let s = sentence("The ship design is reusable by default.", 1, 0.5);
        let ctx = ScoringContext {
            topics: &[],
            total_sentences: 3,
        };
        let factor = TopicRelevance { weight: 0.4 };
        assert_eq!(factor.evaluate(&s, &ctx), 0.0);
    }

    #[test]
    fn adding_a_matching_topic_never_decreases_relevance() {
        let s = sentence("Mars entry requires a reusable ship design.", 1, 0.5);
        let factor = TopicRelevance { weight: 0.4 };
        let base_topics = vec!["ship".to_string()];
        let more_topics = vec!["ship".to_string(), "mars".to_string()];
        let base = factor.evaluate(
            &s,
            &ScoringContext {
                topics: &base_topics,
                total_sentences: 3,
            },
        );
        let more = factor.evaluate(
            &s,
            &ScoringContext {
                topics: &more_topics,
                total_sentences: 3,
            },
        );
        assert!(more >= base);
    }

    #[test]
    fn density_saturates_at_one() {
        let long_text = "word ".repeat(80);
        let s = sentence(long_text.trim(), 0, 0.5);
        let factor = ContentDensity {
            weight: 0.2,
            saturation_words: 50,
        };
        let ctx = ScoringContext {
            topics: &[],
            total_sentences: 1,
        };
        assert_eq!(factor.evaluate(&s, &ctx), 1.0);
    }

    #[test]
    fn position_peaks_in_the_middle() {
        let factor = PositionWeighting { weight: 0.25 };
        let ctx = ScoringContext {
            topics: &[],
            total_sentences: 10,
        };
        let middle = factor.evaluate(&sentence("x", 5, 0.5), &ctx);
        let opener = factor.evaluate(&sentence("x", 0, 0.0), &ctx);
        let closer = factor.evaluate(&sentence("x", 9, 0.9), &ctx);
        let shoulder = factor.evaluate(&sentence("x", 2, 0.2), &ctx);
        assert!(middle > shoulder);
        assert!(shoulder < 1.0);
        assert!(opener < middle);
        assert!(closer < middle);
    }

    #[test]
    fn question_mark_earns_the_bonus() {
        let factor = ConversationalBonus { weight: 0.1 };
        let ctx = ScoringContext {
            topics: &[],
            total_sentences: 2,
        };
        assert_eq!(
            factor.evaluate(&sentence("What happens after the launch?", 0, 0.0), &ctx),
            1.0
        );
        assert_eq!(
            factor.evaluate(&sentence("We are going to expand the team.", 0, 0.0), &ctx),
            1.0
        );
        assert_eq!(
            factor.evaluate(&sentence("The launch happened yesterday.", 0, 0.0), &ctx),
            0.0
        );
    }

    #[test]
    fn short_sentences_are_discounted_multiplicatively() {
        let sc = scorer();
        let short = sentence("Quite brief line here", 1, 0.5);
        assert!(short.char_len() < 30);
        let long_enough = sentence("This sentence carries enough material to avoid it.", 1, 0.5);
        let topics: Vec<String> = vec![];
        let short_score = sc.score(&short, &topics, 3);
        let full_score = sc.score(&long_enough, &topics, 3);
        assert!(short_score < full_score);
    }

    #[test]
    fn dangling_conjunction_is_penalized() {
        let sc = scorer();
        let complete = sentence("The rollout finishes by the end of March.", 1, 0.5);
        let dangling = sentence("The rollout finishes by the end of March and", 1, 0.5);
        let topics: Vec<String> = vec![];
        assert!(sc.score(&dangling, &topics, 3) < sc.score(&complete, &topics, 3));
    }

    #[test]
    fn score_is_deterministic() {
        let sc = scorer();
        let s = sentence("Will the ship be ready for the next window?", 2, 0.5);
        let topics = vec!["ship".to_string()];
        let first = sc.score(&s, &topics, 5);
        for _ in 0..10 {
            assert_eq!(sc.score(&s, &topics, 5), first);
        }
    }
}
