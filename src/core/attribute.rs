use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RecommenderError;

/// Game attribute that similarity can be computed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Category,
    Genre,
    Tag,
    Developer,
}

impl Attribute {
    pub const ALL: [Attribute; 4] = [
        Attribute::Category,
        Attribute::Genre,
        Attribute::Tag,
        Attribute::Developer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Category => "category",
            Attribute::Genre => "genre",
            Attribute::Tag => "tag",
            Attribute::Developer => "developer",
        }
    }
}

impl FromStr for Attribute {
    type Err = RecommenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "category" | "categories" => Ok(Attribute::Category),
            "genre" | "genres" => Ok(Attribute::Genre),
            "tag" | "tags" => Ok(Attribute::Tag),
            "developer" | "developers" => Ok(Attribute::Developer),
            other => Err(RecommenderError::InvalidInput(format!(
                "unknown attribute '{}', expected category, genre, tag or developer",
                other
            ))),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selected attributes, without duplicates, in selection order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSet(Vec<Attribute>);

impl AttributeSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// All four attributes
    pub fn all() -> Self {
        Self(Attribute::ALL.to_vec())
    }

    /// Parse a comma separated attribute list.
    ///
    /// Unknown names are rejected. An empty list yields an empty set; callers
    /// that want "everything" on empty input use [`AttributeSet::parse_or_all`].
    pub fn parse(raw: &str) -> Result<Self, RecommenderError> {
        let mut set = Self::new();
        for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            set.insert(part.parse()?);
        }
        Ok(set)
    }

    /// Like [`AttributeSet::parse`], but an empty list selects all attributes
    pub fn parse_or_all(raw: &str) -> Result<Self, RecommenderError> {
        let set = Self::parse(raw)?;
        Ok(if set.is_empty() { Self::all() } else { set })
    }

    pub fn insert(&mut self, attribute: Attribute) {
        if !self.0.contains(&attribute) {
            self.0.push(attribute);
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Attribute> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Attribute> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut set = Self::new();
        for attribute in iter {
            set.insert(attribute);
        }
        set
    }
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(Attribute::as_str).collect();
        f.write_str(&names.join(", "))
    }
}
