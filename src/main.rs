use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use rapport::config::{Config, MatchConfig, SummaryConfig};
use rapport::matcher::{MatchRequest, Matcher};
use rapport::profiles::ProfileStore;
use rapport::summarizer::Summarizer;
use rapport::topics::tfidf::TfIdfExtractor;
use rapport::topics::traits::TopicExtractor;

/// Rapport: topic-guided conversation summarization and user matching.
///
/// Turns a conversational transcript into a one-sentence extractive summary,
/// and scores the compatibility of two user profiles by blending topic
/// overlap with psychometric traits.
#[derive(Parser)]
#[command(name = "rapport", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Emit results as JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a transcript file (topics extracted unless supplied)
    Summarise {
        /// Path to a plain-text transcript
        file: PathBuf,

        /// Comma-separated topics to guide the summary (skips extraction)
        #[arg(long, value_delimiter = ',')]
        topics: Option<Vec<String>>,
    },

    /// Extract discussion topics from a transcript file
    Topics {
        /// Path to a plain-text transcript
        file: PathBuf,
    },

    /// Compute the compatibility score between two sample users
    Match {
        /// First user id
        user1: String,

        /// Second user id
        user2: String,

        /// Comma-separated discussion topics to blend in
        #[arg(long, value_delimiter = ',')]
        topics: Option<Vec<String>>,

        /// Weight of the topic signal (non-negative; 0 disables it)
        #[arg(long, default_value = "0.5")]
        topic_weight: f64,

        /// Weight of the psychometric signal (non-negative; 0 disables it)
        #[arg(long, default_value = "1.0")]
        psych_weight: f64,
    },

    /// List the sample users available for matching
    Users,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("rapport=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Summarise { file, topics } => {
            let transcript = read_transcript(&file)?;

            let topics = match topics {
                Some(topics) => topics,
                None => {
                    info!("No topics supplied, extracting from the transcript");
                    TfIdfExtractor.extract(&transcript, config.topic_count)?
                }
            };

            let summarizer = Summarizer::new(SummaryConfig::default());
            let summary = summarizer.summarize(&transcript, &topics)?;

            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({ "topics": topics, "summary": summary })
                );
            } else {
                rapport::output::terminal::display_summary(&summary, &topics);
            }
        }

        Commands::Topics { file } => {
            let transcript = read_transcript(&file)?;
            let topics = TfIdfExtractor.extract(&transcript, config.topic_count)?;

            if cli.json {
                println!("{}", serde_json::json!({ "topics": topics }));
            } else {
                rapport::output::terminal::display_topics(&topics);
            }
        }

        Commands::Match {
            user1,
            user2,
            topics,
            topic_weight,
            psych_weight,
        } => {
            let store = open_store(&config)?;
            let matcher = Matcher::new(&store, MatchConfig::default());

            let request = MatchRequest {
                user1_id: user1.clone(),
                user2_id: user2.clone(),
                topics: topics.unwrap_or_default(),
                topic_weight,
                psych_weight,
            };

            let outcome = matcher.match_users(&request)?;

            if cli.json {
                println!("{}", serde_json::to_string(&outcome)?);
            } else {
                rapport::output::terminal::display_match(&user1, &user2, &outcome);
            }
        }

        Commands::Users => {
            let store = open_store(&config)?;
            let users = store.all();

            if cli.json {
                println!("{}", serde_json::to_string(&users)?);
            } else {
                rapport::output::terminal::display_users(&users);
            }
        }
    }

    Ok(())
}

/// Read a transcript file, with a helpful error when the path is wrong.
fn read_transcript(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("failed to read transcript from {}", path.display()))
}

/// Open the sample user store configured by RAPPORT_USERS_PATH.
fn open_store(config: &Config) -> Result<ProfileStore> {
    let path = Path::new(&config.users_path);
    ProfileStore::load(path).with_context(|| {
        format!(
            "failed to load users from {} (set RAPPORT_USERS_PATH to override)",
            path.display()
        )
    })
}
