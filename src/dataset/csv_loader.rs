use serde::Deserialize;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::core::{GameRecord, Platform};
use crate::error::{RecommenderError, Result};

/// Required columns and the header names accepted for each
const REQUIRED_COLUMNS: &[(&str, &[&str])] = &[
    ("name", &["name"]),
    ("category", &["category", "categories"]),
    ("genre", &["genre", "genres"]),
    ("tag", &["tag", "tags", "steamspy_tags"]),
    ("developer", &["developer"]),
    ("price", &["price"]),
    ("positive_ratings", &["positive_ratings"]),
    ("negative_ratings", &["negative_ratings"]),
];

/// Loader settings
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Drop rows whose `english` column is 0 (no-op when the column is absent)
    pub english_only: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { english_only: true }
    }
}

/// Row as it appears in the file, before validation
#[derive(Debug, Deserialize)]
struct RawRow {
    name: String,
    #[serde(alias = "categories")]
    category: String,
    #[serde(alias = "genres")]
    genre: String,
    #[serde(alias = "tags", alias = "steamspy_tags")]
    tag: String,
    developer: String,
    price: f64,
    positive_ratings: u64,
    negative_ratings: u64,
    #[serde(default)]
    platforms: Option<String>,
    #[serde(default)]
    english: Option<u8>,
}

impl RawRow {
    fn into_record(self, line: usize) -> std::result::Result<GameRecord, String> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(format!("line {}: empty game name", line));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(format!("line {}: invalid price {} for '{}'", line, self.price, name));
        }

        let platforms = self
            .platforms
            .as_deref()
            .unwrap_or_default()
            .split(';')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .filter_map(|p| match p.parse::<Platform>() {
                Ok(platform) => Some(platform),
                Err(_) => {
                    tracing::debug!("line {}: ignoring unknown platform '{}'", line, p);
                    None
                }
            })
            .collect();

        Ok(GameRecord {
            name,
            category: self.category,
            genre: self.genre,
            tag: self.tag,
            developer: self.developer,
            price: self.price,
            positive_ratings: self.positive_ratings,
            negative_ratings: self.negative_ratings,
            platforms,
        })
    }
}

/// Load game records from a CSV file
pub fn load_path(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Vec<GameRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        let message = match e.kind() {
            io::ErrorKind::NotFound => {
                "file not found, please ensure the dataset is in the right location".to_string()
            }
            _ => format!("cannot open file: {}", e),
        };
        RecommenderError::data_load(path, message)
    })?;

    load_reader(file, path, options)
}

/// Load game records from any CSV source; `source` only labels errors
pub fn load_reader<R: Read>(
    reader: R,
    source: impl AsRef<Path>,
    options: &LoadOptions,
) -> Result<Vec<GameRecord>> {
    let source = source.as_ref();
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| RecommenderError::data_load(source, format!("unreadable header: {}", e)))?
        .clone();
    check_columns(&headers).map_err(|message| RecommenderError::data_load(source, message))?;

    let mut records = Vec::new();
    let mut skipped_non_english = 0usize;

    for (idx, row) in csv_reader.deserialize::<RawRow>().enumerate() {
        // header is line 1
        let line = idx + 2;
        let row = row.map_err(|e| {
            RecommenderError::data_load(source, format!("malformed row at line {}: {}", line, e))
        })?;

        if options.english_only && row.english == Some(0) {
            skipped_non_english += 1;
            continue;
        }

        let record = row
            .into_record(line)
            .map_err(|message| RecommenderError::data_load(source, message))?;
        records.push(record);
    }

    tracing::debug!(
        "Parsed {} rows from {} ({} non-English rows skipped)",
        records.len(),
        source.display(),
        skipped_non_english
    );

    Ok(records)
}

/// Every required column must be present exactly once (under any accepted name)
fn check_columns(headers: &csv::StringRecord) -> std::result::Result<(), String> {
    for (column, accepted) in REQUIRED_COLUMNS {
        let found = headers.iter().filter(|h| accepted.contains(h)).count();
        match found {
            0 => return Err(format!("missing required column '{}'", column)),
            1 => {}
            _ => return Err(format!("column '{}' appears more than once", column)),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "name,developer,categories,genres,steamspy_tags,platforms,english,positive_ratings,negative_ratings,price";

    fn load(body: &str, options: &LoadOptions) -> Result<Vec<GameRecord>> {
        let csv = format!("{}\n{}", HEADER, body);
        load_reader(csv.as_bytes(), "test.csv", options)
    }

    #[test]
    fn test_load_steam_layout() {
        let records = load(
            "Counter-Strike,Valve,Multi-player,Action,Action,windows;mac;linux,1,124534,3339,7.19\n",
            &LoadOptions::default(),
        )
        .unwrap();

        assert_eq!(records.len(), 1);
        let cs = &records[0];
        assert_eq!(cs.name, "Counter-Strike");
        assert_eq!(cs.developer, "Valve");
        assert_eq!(cs.category, "Multi-player");
        assert_eq!(cs.genre, "Action");
        assert_eq!(cs.tag, "Action");
        assert_eq!(cs.price, 7.19);
        assert_eq!(cs.positive_ratings, 124534);
        assert_eq!(cs.negative_ratings, 3339);
        assert_eq!(cs.platforms, Platform::ALL.to_vec());
    }

    #[test]
    fn test_load_minimal_layout() {
        let csv = "name,category,genre,tag,developer,price,positive_ratings,negative_ratings\n\
                   A,Single-player,X,Indie,Dev,10,80,20\n";
        let records = load_reader(csv.as_bytes(), "min.csv", &LoadOptions::default()).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].platforms.is_empty());
    }

    #[test]
    fn test_english_filter() {
        let body = "English Game,Dev,Single-player,RPG,RPG,windows,1,10,0,0\n\
                    Other Game,Dev,Single-player,RPG,RPG,windows,0,10,0,0\n";

        let english = load(body, &LoadOptions::default()).unwrap();
        assert_eq!(english.len(), 1);
        assert_eq!(english[0].name, "English Game");

        let all = load(body, &LoadOptions { english_only: false }).unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_missing_column() {
        let csv = "name,category,genre,developer,price,positive_ratings,negative_ratings\n";
        let err = load_reader(csv.as_bytes(), "bad.csv", &LoadOptions::default()).unwrap_err();
        match err {
            RecommenderError::DataLoad { path, message } => {
                assert_eq!(path, "bad.csv");
                assert!(message.contains("'tag'"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_alias_columns_rejected() {
        let csv = "name,genre,genres,category,tag,developer,price,positive_ratings,negative_ratings\n";
        let err = load_reader(csv.as_bytes(), "dup.csv", &LoadOptions::default()).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_malformed_numbers() {
        let err = load(
            "Broken,Dev,Single-player,RPG,RPG,windows,1,lots,0,0\n",
            &LoadOptions::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("line 2"));

        let err = load(
            "Negative,Dev,Single-player,RPG,RPG,windows,1,1,0,-3\n",
            &LoadOptions::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("invalid price"));
    }

    #[test]
    fn test_unknown_platform_ignored() {
        let records = load(
            "Retro,Dev,Single-player,RPG,RPG,windows;dos,1,1,0,0\n",
            &LoadOptions::default(),
        )
        .unwrap();
        assert_eq!(records[0].platforms, vec![Platform::Windows]);
    }

    #[test]
    fn test_missing_file() {
        let err = load_path("does/not/exist.csv", &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, RecommenderError::DataLoad { .. }));
        assert!(err.to_string().contains("file not found"));
    }
}
