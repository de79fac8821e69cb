use std::collections::HashSet;

use crate::core::{Attribute, AttributeSet, GameRecord};
use crate::ranking::Scorer;

/// Set-overlap scorer for multi-valued fields (`Action;Indie`, `Valve/Hidden Path`).
///
/// Each selected attribute is split into values; the score is
/// |shared values| / |all values| over every selected attribute (0.0 - 1.0).
pub struct OverlapScorer;

impl OverlapScorer {
    pub fn new() -> Self {
        Self
    }

    fn values(game: &GameRecord, attributes: &AttributeSet) -> HashSet<(Attribute, String)> {
        attributes
            .iter()
            .flat_map(|attr| {
                game.attribute(attr)
                    .split([';', '/'])
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(move |v| (attr, v.to_string()))
            })
            .collect()
    }
}

impl Default for OverlapScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for OverlapScorer {
    fn score(&self, reference: &GameRecord, candidate: &GameRecord, attributes: &AttributeSet) -> f64 {
        let ours = Self::values(reference, attributes);
        let theirs = Self::values(candidate, attributes);

        let union = ours.union(&theirs).count();
        if union == 0 {
            return 0.0;
        }
        ours.intersection(&theirs).count() as f64 / union as f64
    }

    fn name(&self) -> &str {
        "overlap"
    }
}
