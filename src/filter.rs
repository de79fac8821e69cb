//! Candidate constraints: price ceiling, rating floor, platforms.

use crate::core::{GameRecord, Platform};
use crate::error::{RecommenderError, Result};

/// Optional constraints a candidate must satisfy. `None` / empty disables a check.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    /// Inclusive upper bound on price
    pub max_price: Option<f64>,

    /// Inclusive lower bound on rating score (0-100)
    pub min_rating: Option<f64>,

    /// Candidate must support at least one of these
    pub platforms: Vec<Platform>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    pub fn with_platforms(mut self, platforms: Vec<Platform>) -> Self {
        self.platforms = platforms;
        self
    }

    /// Reject out-of-range bounds
    pub fn validate(&self) -> Result<()> {
        if let Some(price) = self.max_price {
            if !price.is_finite() || price < 0.0 {
                return Err(RecommenderError::InvalidInput(format!(
                    "maximum price must be a non-negative number, got {}",
                    price
                )));
            }
        }
        if let Some(rating) = self.min_rating {
            if !(0.0..=100.0).contains(&rating) {
                return Err(RecommenderError::InvalidInput(format!(
                    "minimum rating score must be between 0 and 100, got {}",
                    rating
                )));
            }
        }
        Ok(())
    }

    /// Whether `game` passes every supplied constraint.
    ///
    /// Unrated games count as a rating score of 0.
    pub fn accepts(&self, game: &GameRecord) -> bool {
        if let Some(max_price) = self.max_price {
            if game.price > max_price {
                return false;
            }
        }
        if let Some(min_rating) = self.min_rating {
            if game.rating_score().unwrap_or(0.0) < min_rating {
                return false;
            }
        }
        if !self.platforms.is_empty() && !game.supports_any(&self.platforms) {
            return false;
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        self.max_price.is_none() && self.min_rating.is_none() && self.platforms.is_empty()
    }
}
