// Terminal display for summaries, topics, and match results.

use colored::Colorize;

use crate::matcher::{Compatibility, MatchOutcome};
use crate::output::truncate_chars;
use crate::profiles::UserProfile;

/// Print a summary with its guiding topics.
pub fn display_summary(summary: &str, topics: &[String]) {
    println!("\n{}", "=== Summary ===".bold());
    println!("  {summary}");
    if !topics.is_empty() {
        println!("\n  {} {}", "Topics:".bold(), topics.join(", ").dimmed());
    }
}

/// Print an extracted topic list, most salient first.
pub fn display_topics(topics: &[String]) {
    println!("\n{}", "=== Topics ===".bold());
    for (i, topic) in topics.iter().enumerate() {
        println!("  {:>2}. {topic}", i + 1);
    }
}

/// Print a match result as a score bar plus the bucket label.
pub fn display_match(user1: &str, user2: &str, outcome: &MatchOutcome) {
    println!("\n{}", format!("=== Compatibility: {user1} / {user2} ===").bold());

    let bar_width: usize = 20;
    let filled = (outcome.score * bar_width as f64).round() as usize;
    let empty = bar_width.saturating_sub(filled);
    let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

    let colored_bar = match outcome.compatibility {
        Compatibility::Exceptional | Compatibility::High => bar.bright_green(),
        Compatibility::Very | Compatibility::Moderate => bar.bright_yellow(),
        _ => bar.bright_blue(),
    };

    println!("  {} {:.3}", colored_bar, outcome.score);
    println!("  {}", outcome.interpretation.bold());
}

/// Print the sample user roster.
pub fn display_users(users: &[&UserProfile]) {
    println!("\n{}", "=== Sample Users ===".bold());
    for user in users {
        let interests = if user.interests.is_empty() {
            "-".to_string()
        } else {
            truncate_chars(&user.interests.join(", "), 60)
        };
        println!(
            "  {:<10} {:<16} traits: {:<2}  interests: {}",
            user.id.bold(),
            user.name,
            user.psychometrics.len(),
            interests.dimmed()
        );
    }
}
