//! Console question/answer session.
//!
//! Reads one [`RecommendQuery`] at a time from any `BufRead`, so the
//! prompting can be driven by stdin or by a test buffer.

use std::io::{BufRead, Write};

use crate::core::{AttributeSet, Platform};
use crate::dataset::GameDataset;
use crate::display::{self, OutputFormat};
use crate::engine::{RecommendQuery, Recommender};
use crate::error::{RecommenderError, Result};
use crate::filter::Filters;

pub const SEPARATOR: &str = "=================================================";

pub struct Session<R, W> {
    input: R,
    output: W,
    default_limit: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, default_limit: usize) -> Self {
        Self {
            input,
            output,
            default_limit,
        }
    }

    /// Ask questions and print results until the user says "no" or input ends.
    ///
    /// An unknown game name ends the session with `NotFound`.
    pub fn run(&mut self, recommender: &Recommender, format: OutputFormat) -> Result<()> {
        writeln!(self.output, "Welcome to Steam games recommendation app!")?;

        loop {
            let query = match self.read_query(recommender.dataset())? {
                Some(query) => query,
                None => break,
            };

            match recommender.recommend(&query) {
                Ok(report) => writeln!(self.output, "{}", display::render(&report, format)?)?,
                Err(e) if !e.is_fatal() => writeln!(self.output, "{}", e)?,
                Err(e) => return Err(e),
            }

            if !self.ask_continue()? {
                break;
            }
        }

        Ok(())
    }

    /// Prompt for every query field; `None` when input ends first
    pub fn read_query(&mut self, dataset: &GameDataset) -> Result<Option<RecommendQuery>> {
        let references = match self.ask(
            "Please type in the games you have played (comma separated): ",
            |line| parse_games(line, dataset),
        )? {
            Some(references) => references,
            None => return Ok(None),
        };

        let attributes = match self.ask(
            "Which attributes do you want to compare? [category, genre, tag, developer] (enter for all): ",
            AttributeSet::parse_or_all,
        )? {
            Some(attributes) => attributes,
            None => return Ok(None),
        };

        let default_limit = self.default_limit;
        let limit = match self.ask("How many games would you like to see? ", |line| {
            if line.is_empty() {
                return Ok(default_limit);
            }
            line.parse::<usize>().map_err(|_| {
                RecommenderError::InvalidInput(format!(
                    "Please type in a whole number, got '{}'.",
                    line
                ))
            })
        })? {
            Some(limit) => limit,
            None => return Ok(None),
        };

        let max_price = match self.ask(
            "Is there a maximum price you would like to set? If not press enter. ",
            |line| parse_optional_number(line, 0.0, f64::MAX, "maximum price"),
        )? {
            Some(max_price) => max_price,
            None => return Ok(None),
        };

        let platforms = match self.ask(
            "Which platforms are you playing on? [windows, mac, linux] If any press enter. ",
            Platform::parse_list,
        )? {
            Some(platforms) => platforms,
            None => return Ok(None),
        };

        let min_rating = match self.ask(
            "Is there a minimum rating score (0-100) you would like to set? If not press enter. ",
            |line| parse_optional_number(line, 0.0, 100.0, "minimum rating score"),
        )? {
            Some(min_rating) => min_rating,
            None => return Ok(None),
        };

        Ok(Some(RecommendQuery {
            references,
            attributes,
            filters: Filters {
                max_price,
                min_rating,
                platforms,
            },
            limit: Some(limit),
        }))
    }

    /// "Do you want to continue?" until a yes or no; end of input means no
    pub fn ask_continue(&mut self) -> Result<bool> {
        let answer = self.ask("Do you want to continue? [yes or no] ", |line| {
            match line.to_lowercase().as_str() {
                "yes" | "y" => Ok(true),
                "no" | "n" => Ok(false),
                _ => Err(RecommenderError::InvalidInput(
                    "Sorry, I don't understand your input".to_string(),
                )),
            }
        })?;

        let again = answer.unwrap_or(false);
        if again {
            writeln!(self.output, "{}", SEPARATOR)?;
        }
        Ok(again)
    }

    /// Print `prompt`, read a trimmed line and parse it.
    ///
    /// `InvalidInput` is shown and asked again; any other error is returned.
    fn ask<T>(&mut self, prompt: &str, parse: impl Fn(&str) -> Result<T>) -> Result<Option<T>> {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(None);
            }

            match parse(line.trim()) {
                Ok(value) => return Ok(Some(value)),
                Err(RecommenderError::InvalidInput(message)) => {
                    writeln!(self.output, "{}", message)?
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Comma separated exact game names; an unknown one is `NotFound`
fn parse_games(line: &str, dataset: &GameDataset) -> Result<Vec<String>> {
    let names = dataset.resolve_names(line)?;
    if names.is_empty() {
        return Err(RecommenderError::InvalidInput(
            "Please type in at least one game.".to_string(),
        ));
    }
    Ok(names)
}

fn parse_optional_number(line: &str, min: f64, max: f64, what: &str) -> Result<Option<f64>> {
    if line.is_empty() {
        return Ok(None);
    }
    match line.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= min && value <= max => Ok(Some(value)),
        _ => Err(RecommenderError::InvalidInput(format!(
            "Please type in a number for the {} (digits, not words), got '{}'.",
            what, line
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Attribute, GameRecord};
    use std::io::Cursor;

    fn dataset() -> GameDataset {
        let mut a = GameRecord::new("A");
        a.genre = "X".to_string();
        a.price = 10.0;
        let mut b = GameRecord::new("B");
        b.genre = "X".to_string();
        b.price = 5.0;
        b.positive_ratings = 50;
        b.negative_ratings = 50;
        GameDataset::from_records(vec![a, b])
    }

    fn session(input: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        Session::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), 10)
    }

    #[test]
    fn test_read_full_query() {
        let mut s = session("A, B\ngenre\n3\n6\nlinux\n40\n");
        let query = s.read_query(&dataset()).unwrap().unwrap();

        assert_eq!(query.references, vec!["A", "B"]);
        assert_eq!(query.attributes.iter().collect::<Vec<_>>(), vec![Attribute::Genre]);
        assert_eq!(query.limit, Some(3));
        assert_eq!(query.filters.max_price, Some(6.0));
        assert_eq!(query.filters.platforms, vec![Platform::Linux]);
        assert_eq!(query.filters.min_rating, Some(40.0));
    }

    #[test]
    fn test_defaults_on_enter() {
        let mut s = session("A\n\n\n\n\n\n");
        let query = s.read_query(&dataset()).unwrap().unwrap();

        assert_eq!(query.attributes, AttributeSet::all());
        assert_eq!(query.limit, Some(10));
        assert!(query.filters.is_empty());
    }

    #[test]
    fn test_reprompts_on_bad_input() {
        let mut s = session("\nA\nprice\ngenre\nfive\n5\n-1\n\n\n101\n50\n");
        let query = s.read_query(&dataset()).unwrap().unwrap();
        assert_eq!(query.references, vec!["A"]);
        assert_eq!(query.limit, Some(5));
        assert_eq!(query.filters.min_rating, Some(50.0));

        let out = String::from_utf8(s.output).unwrap();
        assert!(out.contains("Please type in at least one game."));
        assert!(!out.contains("Invalid input:"));
        assert!(out.contains("unknown attribute 'price'"));
        assert!(out.contains("got 'five'"));
        assert!(out.contains("got '-1'"));
        assert!(out.contains("got '101'"));
    }

    #[test]
    fn test_unknown_game_ends_query() {
        let mut s = session("a\nA\ngenre\n\n\n\n\n");
        match s.read_query(&dataset()) {
            Err(RecommenderError::NotFound { name, suggestions }) => {
                assert_eq!(name, "a");
                assert_eq!(suggestions, vec!["A"]);
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_run_stops_on_unknown_game() {
        let recommender = Recommender::new(dataset());
        let mut s = session("Nonexistent Game 123\nA\ngenre\n\n6\n\n\nno\n");
        let err = s.run(&recommender, OutputFormat::Text).unwrap_err();
        assert!(matches!(err, RecommenderError::NotFound { .. }));
        assert!(err.is_fatal());

        let out = String::from_utf8(s.output).unwrap();
        assert!(!out.contains("1 B"));
        assert_eq!(out.matches("games you have played").count(), 1);
    }

    #[test]
    fn test_game_name_with_comma() {
        let mut dow = GameRecord::new("Warhammer 40,000: Dawn of War");
        dow.genre = "X".to_string();
        let mut records: Vec<GameRecord> = dataset().iter().cloned().collect();
        records.push(dow);
        let data = GameDataset::from_records(records);

        let mut s = session("Warhammer 40,000: Dawn of War, B\ngenre\n\n\n\n\n");
        let query = s.read_query(&data).unwrap().unwrap();
        assert_eq!(query.references, vec!["Warhammer 40,000: Dawn of War", "B"]);

        let report = Recommender::new(data).recommend(&query).unwrap();
        assert_eq!(report.names(), vec!["A"]);
    }

    #[test]
    fn test_eof_ends_query() {
        let mut s = session("A\ngenre\n");
        assert!(s.read_query(&dataset()).unwrap().is_none());
    }

    #[test]
    fn test_ask_continue() {
        let mut s = session("maybe\nyes\n");
        assert!(s.ask_continue().unwrap());
        let out = String::from_utf8(s.output).unwrap();
        assert!(out.contains("Sorry, I don't understand your input"));
        assert!(out.contains(SEPARATOR));

        let mut s = session("NO\n");
        assert!(!s.ask_continue().unwrap());
        let mut s = session("");
        assert!(!s.ask_continue().unwrap());
    }

    #[test]
    fn test_run_prints_results() {
        let recommender = Recommender::new(dataset());
        let mut s = session("A\ngenre\n\n6\n\n\nno\n");
        s.run(&recommender, OutputFormat::Text).unwrap();

        let out = String::from_utf8(s.output).unwrap();
        assert!(out.starts_with("Welcome"));
        assert!(out.contains("1 B\n\tprice: 5.00\n\trating_score: 50.0"));
    }

    #[test]
    fn test_run_reports_empty_result() {
        let recommender = Recommender::new(dataset());
        let mut s = session("A\ngenre\n\n1\n\n\nno\n");
        s.run(&recommender, OutputFormat::Text).unwrap();

        let out = String::from_utf8(s.output).unwrap();
        assert!(out.contains(display::NO_RESULTS));
    }
}
