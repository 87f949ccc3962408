// Score interpretation — fixed compatibility buckets.

use serde::{Deserialize, Serialize};

/// Compatibility buckets with fixed lower bounds. Seven ordered,
/// non-overlapping, right-open ranges; a boundary value belongs to the
/// higher bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compatibility {
    VeryLow,
    Low,
    Somewhat,
    Moderate,
    Very,
    High,
    Exceptional,
}

impl Compatibility {
    /// Determine the bucket from a similarity score.
    ///
    /// Scores below 0 (degenerate in practice) fall through to the lowest
    /// bucket, as does NaN, which fails every comparison.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 0.9 => Compatibility::Exceptional,
            s if s >= 0.8 => Compatibility::High,
            s if s >= 0.7 => Compatibility::Very,
            s if s >= 0.6 => Compatibility::Moderate,
            s if s >= 0.4 => Compatibility::Somewhat,
            s if s >= 0.2 => Compatibility::Low,
            _ => Compatibility::VeryLow,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Compatibility::Exceptional => "Exceptionally compatible",
            Compatibility::High => "Highly compatible",
            Compatibility::Very => "Very compatible",
            Compatibility::Moderate => "Moderately compatible",
            Compatibility::Somewhat => "Somewhat compatible",
            Compatibility::Low => "Low compatibility",
            Compatibility::VeryLow => "Very low compatibility",
        }
    }
}

impl std::fmt::Display for Compatibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
