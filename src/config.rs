use std::env;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Everything
/// here has a default so `rapport summarise` works out of the box.
pub struct Config {
    /// Path to the JSON file of sample user profiles.
    pub users_path: String,
    /// How many topics the extraction collaborator should return.
    pub topic_count: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let topic_count = match env::var("RAPPORT_TOPIC_COUNT") {
            Ok(v) => v
                .parse()
                .map_err(|_| anyhow::anyhow!("RAPPORT_TOPIC_COUNT must be a positive integer, got '{v}'"))?,
            Err(_) => 5,
        };

        Ok(Self {
            users_path: env::var("RAPPORT_USERS_PATH")
                .unwrap_or_else(|_| "./sample_data/users.json".to_string()),
            topic_count,
        })
    }
}

/// Fixed constants of the summarizer design: filler vocabulary, factor
/// weights, and length bounds. Modeled as an explicit immutable value passed
/// into each component at construction, so tests can run with alternate
/// configurations deterministically.
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    /// Disfluency words stripped before scoring, matched whole-word only.
    pub fillers: Vec<String>,
    /// Candidates shorter than this (chars) are dropped by the splitter.
    pub min_sentence_chars: usize,
    /// A punctuation-free chunk longer than this window is split on
    /// conjunction markers instead.
    pub split_window_chars: usize,
    /// Weight of the topic relevance factor.
    pub topic_weight: f64,
    /// Weight of the content density factor.
    pub density_weight: f64,
    /// Weight of the position factor.
    pub position_weight: f64,
    /// Weight of the question / future-marker bonus.
    pub conversational_weight: f64,
    /// Word count at which content density saturates.
    pub density_saturation_words: usize,
    /// Sentences below this length (chars) are multiplicatively discounted.
    pub short_sentence_chars: usize,
    /// Sentences above this length (chars) are multiplicatively discounted.
    pub long_sentence_chars: usize,
    /// Multiplier applied to too-short sentences.
    pub short_penalty: f64,
    /// Multiplier applied to too-long sentences.
    pub long_penalty: f64,
    /// Multiplier applied when a sentence ends on a dangling conjunction.
    pub incomplete_penalty: f64,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            fillers: ["yeah", "uh", "um", "like", "you know", "so", "well"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            min_sentence_chars: 15,
            split_window_chars: 200,
            topic_weight: 0.40,
            density_weight: 0.20,
            position_weight: 0.25,
            conversational_weight: 0.10,
            density_saturation_words: 50,
            short_sentence_chars: 30,
            long_sentence_chars: 300,
            short_penalty: 0.25,
            long_penalty: 0.5,
            incomplete_penalty: 0.5,
        }
    }
}

/// Fixed constants of the matcher design.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Minimum psychometric vector length after resampling.
    pub min_psych_dims: usize,
    /// Default weight for the topic sub-vector.
    pub default_topic_weight: f64,
    /// Default weight for the psychometric sub-vector.
    pub default_psych_weight: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            min_psych_dims: 5,
            default_topic_weight: 0.5,
            default_psych_weight: 1.0,
        }
    }
}
