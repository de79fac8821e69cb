use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::Attribute;
use crate::error::RecommenderError;

/// Platform a game runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    Mac,
    Linux,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Windows, Platform::Mac, Platform::Linux];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Mac => "mac",
            Platform::Linux => "linux",
        }
    }

    /// Parse a `;` or `,` separated platform list, e.g. `windows;mac;linux`
    pub fn parse_list(raw: &str) -> Result<Vec<Platform>, RecommenderError> {
        let mut platforms = Vec::new();
        for part in raw.split([';', ',']).map(str::trim).filter(|p| !p.is_empty()) {
            let platform: Platform = part.parse()?;
            if !platforms.contains(&platform) {
                platforms.push(platform);
            }
        }
        Ok(platforms)
    }
}

impl FromStr for Platform {
    type Err = RecommenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "windows" => Ok(Platform::Windows),
            "mac" | "macos" | "osx" => Ok(Platform::Mac),
            "linux" => Ok(Platform::Linux),
            other => Err(RecommenderError::InvalidInput(format!(
                "unknown platform '{}', expected windows, mac or linux",
                other
            ))),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One game row of the dataset, validated at load time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Game name, unique within a dataset
    pub name: String,

    pub category: String,
    pub genre: String,
    pub tag: String,
    pub developer: String,

    /// Price, never negative
    pub price: f64,

    pub positive_ratings: u64,
    pub negative_ratings: u64,

    /// Supported platforms (empty when the dataset has no platform column)
    #[serde(default)]
    pub platforms: Vec<Platform>,
}

impl GameRecord {
    /// Create a record with empty attributes, zero price and no ratings
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: String::new(),
            genre: String::new(),
            tag: String::new(),
            developer: String::new(),
            price: 0.0,
            positive_ratings: 0,
            negative_ratings: 0,
            platforms: Vec::new(),
        }
    }

    /// Value of a similarity attribute
    pub fn attribute(&self, attribute: Attribute) -> &str {
        match attribute {
            Attribute::Category => &self.category,
            Attribute::Genre => &self.genre,
            Attribute::Tag => &self.tag,
            Attribute::Developer => &self.developer,
        }
    }

    /// Percentage of positive ratings (0-100), `None` when the game has no ratings
    pub fn rating_score(&self) -> Option<f64> {
        // summed as f64, counts near u64::MAX must not overflow
        let positive = self.positive_ratings as f64;
        let total = positive + self.negative_ratings as f64;
        if total == 0.0 {
            None
        } else {
            Some(positive / total * 100.0)
        }
    }

    pub fn supports_any(&self, platforms: &[Platform]) -> bool {
        self.platforms.iter().any(|p| platforms.contains(p))
    }
}
