// Transcript preprocessing — filler removal and whitespace normalization.
//
// Speech transcripts are full of disfluencies ("yeah", "um", "you know")
// that carry no content and inflate sentence lengths. They are stripped as
// whole words only: "um" disappears, "umbrella" is untouched.

use regex_lite::Regex;

use crate::config::SummaryConfig;

/// Removes a fixed vocabulary of filler tokens and collapses whitespace.
///
/// Cleaning is idempotent: `clean(clean(s)) == clean(s)` for any input.
pub struct Preprocessor {
    filler_re: Regex,
    whitespace_re: Regex,
}

impl Preprocessor {
    pub fn new(config: &SummaryConfig) -> Self {
        // Longer phrases first so "you know" wins over a bare "you" ever
        // being added to the vocabulary.
        let mut fillers: Vec<String> = config.fillers.iter().map(|f| regex_escape(f)).collect();
        fillers.sort_by_key(|f| std::cmp::Reverse(f.len()));
        let pattern = format!(r"(?i)\b(?:{})\b", fillers.join("|"));

        Self {
            // The vocabulary is fixed at construction; a malformed pattern
            // would be a bug in regex_escape, not a runtime condition.
            filler_re: Regex::new(&pattern).expect("filler vocabulary forms a valid pattern"),
            whitespace_re: Regex::new(r"\s+").expect("whitespace pattern is valid"),
        }
    }

    /// Strip fillers and collapse whitespace runs to single spaces.
    ///
    /// Filler removal repeats to a fixed point: deleting a word can juxtapose
    /// its neighbours into a new filler phrase ("you uh know" -> "you know"),
    /// and idempotence requires that second-order fillers vanish too.
    pub fn clean(&self, transcript: &str) -> String {
        let mut current = transcript.to_string();
        loop {
            let stripped = self.filler_re.replace_all(&current, " ");
            let collapsed = self
                .whitespace_re
                .replace_all(stripped.trim(), " ")
                .to_string();
            // Punctuation left behind by removed words ("yeah, so." -> ", .")
            // is tolerated; the splitter treats it as an empty candidate.
            if collapsed == current {
                return collapsed;
            }
            current = collapsed;
        }
    }
}

/// Escape regex metacharacters in a filler token. The vocabulary is plain
/// words today, but config is caller-supplied.
fn regex_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii_alphanumeric() || c == ' ' || c == '\'' {
            out.push(c);
        } else {
            out.push('\\');
            out.push(c);
        }
    }
    out
}
