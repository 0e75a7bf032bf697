//! Quality-analysis report types.
//!
//! The report is produced entirely by the quality service; this layer
//! just gives its JSON a typed shape. Fields the service omits fall back
//! to defaults so partial reports still deserialize.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Overall quality verdict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OverallStatus {
    /// Meets the highest quality bar.
    Excellent,
    /// Solid with minor issues.
    Good,
    /// Needs revision before submission.
    NeedsImprovement,
    /// Substantial problems found.
    Poor,
    /// Anything the service reports that this client does not know.
    #[default]
    #[serde(other)]
    Unknown,
}

impl OverallStatus {
    /// The wire-format name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallStatus::Excellent => "EXCELLENT",
            OverallStatus::Good => "GOOD",
            OverallStatus::NeedsImprovement => "NEEDS_IMPROVEMENT",
            OverallStatus::Poor => "POOR",
            OverallStatus::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Human form: underscores read as spaces.
        write!(f, "{}", self.as_str().replace('_', " "))
    }
}

/// Aggregate citation counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStatistics {
    /// Distinct citation labels found in the document.
    #[serde(default)]
    pub unique_citations: u64,

    /// Citations that resolve to a reference entry.
    #[serde(default)]
    pub valid_citations: u64,

    /// Citations with problems.
    #[serde(default)]
    pub citation_issues: u64,
}

/// Structured quality report for an uploaded document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QualityReport {
    /// Overall verdict.
    #[serde(default)]
    pub overall_status: OverallStatus,

    /// One-line summary accompanying the verdict.
    #[serde(default)]
    pub status_message: String,

    /// Numeric quality score, when the service computed one.
    #[serde(default)]
    pub quality_score: Option<f64>,

    /// Total words in the document.
    #[serde(default)]
    pub word_count: u64,

    /// Total sentences in the document.
    #[serde(default)]
    pub total_sentences: u64,

    /// Citation label -> whether it resolves to a reference.
    #[serde(default)]
    pub citation_validation: BTreeMap<String, bool>,

    /// Textual insights and recommendations.
    #[serde(default)]
    pub insights: Vec<String>,

    /// Aggregate citation counters.
    #[serde(default)]
    pub statistics: ReportStatistics,

    /// Plain-message fallback used by older service responses.
    #[serde(default)]
    pub message: Option<String>,
}

impl QualityReport {
    /// Average words per sentence, rounded; zero when no sentences were
    /// counted.
    pub fn avg_words_per_sentence(&self) -> u64 {
        if self.total_sentences == 0 {
            return 0;
        }
        (self.word_count as f64 / self.total_sentences as f64).round() as u64
    }
}
