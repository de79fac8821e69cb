//! # Steam Recommender
//!
//! Recommends Steam games similar to the ones a player already knows:
//! - CSV dataset loading into validated, read-only records
//! - Similarity by shared category, genre, tag and developer
//! - Price, rating score and platform filters
//! - Ranking across one or several reference games
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use steam_recommender::{
//!     AttributeSet, Filters, GameDataset, LoadOptions, RecommendQuery, Recommender,
//! };
//!
//! fn main() -> anyhow::Result<()> {
//!     let dataset = GameDataset::load("datasets/steam.csv", &LoadOptions::default())?;
//!     let recommender = Recommender::new(dataset);
//!
//!     let query = RecommendQuery::new("Counter-Strike", AttributeSet::parse("genre,tag")?)
//!         .with_filters(Filters::new().with_max_price(10.0).with_min_rating(80.0))
//!         .with_limit(5);
//!
//!     for rec in recommender.recommend(&query)?.recommendations {
//!         println!("{} - {}", rec.name, rec.score);
//!     }
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod dataset;
pub mod display;
pub mod engine;
pub mod error;
pub mod filter;
pub mod interactive;
pub mod ranking;

// Re-export primary types
pub use crate::core::{Attribute, AttributeSet, GameRecord, Platform, Recommendation, RecommendationReport};
pub use dataset::{GameDataset, LoadOptions};
pub use display::OutputFormat;
pub use engine::{RecommendQuery, Recommender};
pub use error::{RecommenderError, Result};
pub use filter::Filters;
pub use ranking::{Scorer, ScorerKind};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
