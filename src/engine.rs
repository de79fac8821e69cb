use std::cmp::Ordering;
use std::collections::HashMap;
use std::time::Instant;

use crate::core::{AttributeSet, GameRecord, Recommendation, RecommendationReport};
use crate::dataset::GameDataset;
use crate::error::{RecommenderError, Result};
use crate::filter::Filters;
use crate::ranking::{MatchCountScorer, ScoredCandidate, Scorer};

/// Everything a recommendation run needs from the user
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendQuery {
    /// Games the user has played; exact names
    pub references: Vec<String>,
    pub attributes: AttributeSet,
    pub filters: Filters,
    /// Maximum number of results, `None` for all
    pub limit: Option<usize>,
}

impl RecommendQuery {
    pub fn new(reference: impl Into<String>, attributes: AttributeSet) -> Self {
        Self {
            references: vec![reference.into()],
            attributes,
            filters: Filters::default(),
            limit: None,
        }
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.references.push(reference.into());
        self
    }

    pub fn with_filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Similarity-based recommender over a loaded dataset
pub struct Recommender {
    dataset: GameDataset,
    scorer: Box<dyn Scorer>,
}

/// Per-candidate totals across reference games
struct Tally<'a> {
    game: &'a GameRecord,
    frequency: usize,
    score: f64,
}

impl Recommender {
    /// Create a recommender using exact attribute match counting
    pub fn new(dataset: GameDataset) -> Self {
        Self::with_scorer(dataset, Box::new(MatchCountScorer::new()))
    }

    pub fn with_scorer(dataset: GameDataset, scorer: Box<dyn Scorer>) -> Self {
        Self { dataset, scorer }
    }

    pub fn dataset(&self) -> &GameDataset {
        &self.dataset
    }

    /// Score every game other than `reference`, in dataset order, zeros included
    pub fn score_candidates(
        &self,
        reference: &str,
        attributes: &AttributeSet,
    ) -> Result<Vec<ScoredCandidate<'_>>> {
        let reference = self.dataset.find(reference)?;

        Ok(self
            .dataset
            .iter()
            .filter(|game| game.name != reference.name)
            .map(|game| ScoredCandidate::new(game, self.scorer.score(reference, game, attributes)))
            .collect())
    }

    /// Candidates that pass `filters` and share something with `reference`,
    /// highest score first, ties by name
    pub fn rank(
        &self,
        reference: &str,
        attributes: &AttributeSet,
        filters: &Filters,
    ) -> Result<Vec<ScoredCandidate<'_>>> {
        let mut ranked: Vec<ScoredCandidate<'_>> = self
            .score_candidates(reference, attributes)?
            .into_iter()
            .filter(|c| c.score > 0.0 && filters.accepts(c.game))
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.game.name.cmp(&b.game.name))
        });

        Ok(ranked)
    }

    /// Run a full query: validate, rank per reference, merge, truncate
    pub fn recommend(&self, query: &RecommendQuery) -> Result<RecommendationReport> {
        let start = Instant::now();

        query.filters.validate()?;

        let mut references: Vec<&str> = Vec::new();
        for name in &query.references {
            if !references.contains(&name.as_str()) {
                references.push(name.as_str());
            }
        }
        if references.is_empty() {
            return Err(RecommenderError::InvalidInput(
                "at least one reference game is required".to_string(),
            ));
        }
        // Fail on the first unknown name before doing any work
        for name in &references {
            self.dataset.find(name)?;
        }

        let mut order: HashMap<&str, usize> = HashMap::new();
        let mut tallies: Vec<Tally<'_>> = Vec::new();

        for reference in &references {
            let ranked = self.rank(reference, &query.attributes, &query.filters)?;
            tracing::debug!(
                "{} candidates similar to '{}' ({})",
                ranked.len(),
                reference,
                self.scorer.name()
            );

            for candidate in ranked {
                if references.contains(&candidate.game.name.as_str()) {
                    continue;
                }
                match order.get(candidate.game.name.as_str()) {
                    Some(&idx) => {
                        tallies[idx].frequency += 1;
                        tallies[idx].score += candidate.score;
                    }
                    None => {
                        order.insert(candidate.game.name.as_str(), tallies.len());
                        tallies.push(Tally {
                            game: candidate.game,
                            frequency: 1,
                            score: candidate.score,
                        });
                    }
                }
            }
        }

        tallies.sort_by(|a, b| {
            b.frequency
                .cmp(&a.frequency)
                .then_with(|| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal))
                .then_with(|| a.game.name.cmp(&b.game.name))
        });

        if let Some(limit) = query.limit {
            tallies.truncate(limit);
        }

        let recommendations: Vec<Recommendation> = tallies
            .iter()
            .map(|t| Recommendation::new(t.game, t.score, t.frequency))
            .collect();

        tracing::debug!(
            "Recommended {} games in {:.2}ms",
            recommendations.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(RecommendationReport {
            references: references.iter().map(|r| r.to_string()).collect(),
            attributes: query.attributes.clone(),
            scorer: self.scorer.name().to_string(),
            recommendations,
        })
    }
}
