pub mod csv_loader;

use rapidfuzz::distance::jaro_winkler;
use std::collections::HashMap;
use std::path::Path;

use crate::core::GameRecord;
use crate::error::{RecommenderError, Result};

pub use csv_loader::{load_path, load_reader, LoadOptions};

/// Minimum Jaro-Winkler similarity (0.0 - 1.0) for a name to be suggested
const SUGGESTION_THRESHOLD: f64 = 0.85;
const MAX_SUGGESTIONS: usize = 3;

/// Read-only table of games, indexed by exact name
#[derive(Debug, Clone, Default)]
pub struct GameDataset {
    games: Vec<GameRecord>,
    index: HashMap<String, usize>,
}

impl GameDataset {
    /// Build a dataset, keeping the first record for any repeated name
    pub fn from_records(records: impl IntoIterator<Item = GameRecord>) -> Self {
        let mut games = Vec::new();
        let mut index = HashMap::new();

        for record in records {
            if index.contains_key(&record.name) {
                tracing::warn!("Skipping duplicate game name: {}", record.name);
                continue;
            }
            index.insert(record.name.clone(), games.len());
            games.push(record);
        }

        Self { games, index }
    }

    /// Load a dataset from a CSV file
    pub fn load(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        let dataset = Self::from_records(load_path(path, options)?);
        tracing::info!("Loaded {} games from {}", dataset.len(), path.display());
        Ok(dataset)
    }

    /// Exact (case and symbol sensitive) lookup
    pub fn get(&self, name: &str) -> Option<&GameRecord> {
        self.index.get(name).map(|&idx| &self.games[idx])
    }

    /// Exact lookup, failing with `NotFound` and close-name suggestions
    pub fn find(&self, name: &str) -> Result<&GameRecord> {
        self.get(name).ok_or_else(|| RecommenderError::NotFound {
            name: name.to_string(),
            suggestions: self.suggest(name),
        })
    }

    /// Names that look like `name` (case-insensitive Jaro-Winkler), best first
    pub fn suggest(&self, name: &str) -> Vec<String> {
        let query = name.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(f64, &str)> = self
            .games
            .iter()
            .map(|game| {
                let score = jaro_winkler::normalized_similarity(
                    query.chars(),
                    game.name.to_lowercase().chars(),
                );
                (score, game.name.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.1.cmp(b.1))
        });

        scored
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(_, name)| name.to_string())
            .collect()
    }

    /// Split a comma separated list of exact names.
    ///
    /// Names may themselves contain commas ("Warhammer 40,000: Dawn of War"),
    /// so at each position the longest run of pieces forming a known name wins.
    /// The first piece that starts no known name fails with `NotFound`.
    pub fn resolve_names(&self, line: &str) -> Result<Vec<String>> {
        let parts: Vec<&str> = line.split(',').collect();
        let mut names = Vec::new();
        let mut start = 0;

        while start < parts.len() {
            if parts[start].trim().is_empty() {
                start += 1;
                continue;
            }

            let matched = (start + 1..=parts.len()).rev().find_map(|end| {
                let candidate = parts[start..end].join(",");
                let candidate = candidate.trim();
                self.get(candidate).map(|game| (end, game.name.clone()))
            });

            match matched {
                Some((end, name)) => {
                    if !names.contains(&name) {
                        names.push(name);
                    }
                    start = end;
                }
                None => {
                    let name = parts[start].trim();
                    return Err(RecommenderError::NotFound {
                        name: name.to_string(),
                        suggestions: self.suggest(name),
                    });
                }
            }
        }

        Ok(names)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameRecord> {
        self.games.iter()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
