// Rapport: topic-guided conversation summarization and user matching.
//
// This is the library root. Each module corresponds to a major subsystem:
// the summarizer pipeline, the matcher pipeline, the topic extraction
// collaborator, and the profile store they read from.

pub mod config;
pub mod error;
pub mod matcher;
pub mod output;
pub mod profiles;
pub mod summarizer;
pub mod topics;

pub use error::{RapportError, Result};
