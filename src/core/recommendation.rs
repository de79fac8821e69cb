use serde::{Deserialize, Serialize};

use crate::core::{AttributeSet, GameRecord, Platform};

/// One recommended game with the numbers that put it there
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,

    /// Similarity summed over every reference game that recommended this one
    pub score: f64,

    /// Number of reference games that recommended this one
    pub frequency: usize,

    pub price: f64,

    /// Positive rating percentage, `None` when unrated
    pub rating_score: Option<f64>,

    #[serde(default)]
    pub platforms: Vec<Platform>,
}

impl Recommendation {
    pub fn new(game: &GameRecord, score: f64, frequency: usize) -> Self {
        Self {
            name: game.name.clone(),
            score,
            frequency,
            price: game.price,
            rating_score: game.rating_score(),
            platforms: game.platforms.clone(),
        }
    }
}

/// Full answer to a recommendation query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationReport {
    /// Reference games the recommendations are based on
    pub references: Vec<String>,

    pub attributes: AttributeSet,

    /// Scorer used (match-count, overlap)
    pub scorer: String,

    /// Best first
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

impl RecommendationReport {
    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.recommendations.len()
    }

    pub fn names(&self) -> Vec<&str> {
        self.recommendations.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
