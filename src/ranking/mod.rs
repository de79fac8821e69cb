pub mod match_count;
pub mod overlap;

use std::str::FromStr;

use crate::core::{AttributeSet, GameRecord};
use crate::error::RecommenderError;

pub use match_count::MatchCountScorer;
pub use overlap::OverlapScorer;

/// Trait for similarity implementations
pub trait Scorer: Send + Sync {
    /// Similarity of `candidate` to `reference` over the selected attributes.
    /// Zero means "nothing in common".
    fn score(&self, reference: &GameRecord, candidate: &GameRecord, attributes: &AttributeSet) -> f64;

    /// Get scorer name for logging
    fn name(&self) -> &str;
}

/// Candidate with similarity score
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'a> {
    pub game: &'a GameRecord,
    pub score: f64,
}

impl<'a> ScoredCandidate<'a> {
    pub fn new(game: &'a GameRecord, score: f64) -> Self {
        Self { game, score }
    }
}

/// Scorer selection for configuration surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScorerKind {
    #[default]
    MatchCount,
    Overlap,
}

impl ScorerKind {
    pub fn build(self) -> Box<dyn Scorer> {
        match self {
            ScorerKind::MatchCount => Box::new(MatchCountScorer::new()),
            ScorerKind::Overlap => Box::new(OverlapScorer::new()),
        }
    }
}

impl FromStr for ScorerKind {
    type Err = RecommenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "match-count" | "match_count" | "count" => Ok(ScorerKind::MatchCount),
            "overlap" | "jaccard" => Ok(ScorerKind::Overlap),
            other => Err(RecommenderError::InvalidInput(format!(
                "unknown scorer '{}', expected match-count or overlap",
                other
            ))),
        }
    }
}
