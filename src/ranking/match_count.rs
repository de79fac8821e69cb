use crate::core::{AttributeSet, GameRecord};
use crate::ranking::Scorer;

/// Counts selected attributes whose values are exactly equal.
///
/// Scores are whole numbers in `0..=attributes.len()`.
pub struct MatchCountScorer;

impl MatchCountScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn matches(reference: &GameRecord, candidate: &GameRecord, attributes: &AttributeSet) -> usize {
        attributes
            .iter()
            .filter(|&attr| reference.attribute(attr) == candidate.attribute(attr))
            .count()
    }
}

impl Default for MatchCountScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for MatchCountScorer {
    fn score(&self, reference: &GameRecord, candidate: &GameRecord, attributes: &AttributeSet) -> f64 {
        Self::matches(reference, candidate, attributes) as f64
    }

    fn name(&self) -> &str {
        "match-count"
    }
}
