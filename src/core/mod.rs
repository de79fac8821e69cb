pub mod attribute;
pub mod game_record;
pub mod recommendation;

pub use attribute::{Attribute, AttributeSet};
pub use game_record::{GameRecord, Platform};
pub use recommendation::{Recommendation, RecommendationReport};
