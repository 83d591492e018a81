//! Ordered score tables.
//!
//! A `Scoreboard` maps model names to error scores and remembers the order
//! the entries were written in, so selection over its keys breaks ties the
//! same way on every run. Scoreboards load from JSON objects or TOML tables:
//!
//! ```text
//! # scores.toml
//! arima = 4.21
//! prophet = 3.87
//! lstm = 3.12
//! ```
//!
//! A name repeated in a JSON document keeps its first position and takes the
//! last value. TOML forbids repeated keys, so a TOML document with one fails
//! to load with [`DeployError::Config`].

use std::borrow::Borrow;
use std::hash::Hash;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{DeployError, Result};
use crate::selector::ScoreLookup;

/// Insertion-ordered model name -> score mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scoreboard {
    entries: IndexMap<String, f64>,
}

impl Scoreboard {
    /// Create an empty scoreboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object of `"name": score` pairs
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a TOML table of `name = score` pairs
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a scoreboard, picking the format from the file extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            DeployError::Config(format!(
                "Failed to read score file {}: {e}",
                path.display()
            ))
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let board = match extension.as_deref() {
            Some("json") => Self::from_json_str(&content)?,
            Some("toml") => Self::from_toml_str(&content)?,
            _ => {
                return Err(DeployError::Config(format!(
                    "Unsupported score file format: {} (expected .json or .toml)",
                    path.display()
                )))
            }
        };

        tracing::debug!(path = %path.display(), models = board.len(), "loaded scoreboard");
        Ok(board)
    }

    /// Record a score, replacing any previous one in place
    pub fn insert(&mut self, model: impl Into<String>, score: f64) -> Option<f64> {
        self.entries.insert(model.into(), score)
    }

    /// Score for a model
    pub fn get(&self, model: &str) -> Option<f64> {
        self.entries.get(model).copied()
    }

    /// Check if a model has a score
    pub fn contains(&self, model: &str) -> bool {
        self.entries.contains_key(model)
    }

    /// Number of scored models
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the scoreboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Model names in insertion order
    pub fn ids(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// `(name, score)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(String, f64)> for Scoreboard {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<Q> ScoreLookup<Q> for Scoreboard
where
    String: Borrow<Q>,
    Q: Eq + Hash + ?Sized,
{
    fn score(&self, id: &Q) -> Option<f64> {
        self.entries.get(id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_json_preserves_order() {
        let board = Scoreboard::from_json_str(r#"{"zeta": 1.5, "alpha": 0.5, "mid": 1.0}"#).unwrap();
        let ids: Vec<&str> = board.ids().map(String::as_str).collect();
        assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
        assert_eq!(board.get("alpha"), Some(0.5));
    }

    #[test]
    fn test_toml_preserves_order() {
        let board = Scoreboard::from_toml_str("zeta = 1.5\nalpha = 0.5\nmid = 1\n").unwrap();
        let ids: Vec<&str> = board.ids().map(String::as_str).collect();
        assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
        assert_eq!(board.get("mid"), Some(1.0));
    }

    #[test]
    fn test_rejects_non_numeric_scores() {
        assert!(Scoreboard::from_json_str(r#"{"a": "low"}"#).is_err());
        assert!(matches!(
            Scoreboard::from_toml_str("a = \"low\""),
            Err(DeployError::Config(_))
        ));
    }

    #[test]
    fn test_json_duplicate_last_wins_first_position() {
        let board = Scoreboard::from_json_str(r#"{"a": 5.0, "b": 1.0, "a": 0.5}"#).unwrap();
        let entries: Vec<(&str, f64)> = board.iter().collect();
        assert_eq!(entries, vec![("a", 0.5), ("b", 1.0)]);
    }

    #[test]
    fn test_toml_duplicate_is_config_error() {
        let err = Scoreboard::from_toml_str("a = 5.0\nb = 1.0\na = 0.5\n").unwrap_err();
        assert!(matches!(err, DeployError::Config(_)));
        assert!(err.to_string().contains("duplicate key"));
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut board = Scoreboard::new();
        board.insert("a", 2.0);
        board.insert("b", 1.0);
        assert_eq!(board.insert("a", 0.5), Some(2.0));

        let entries: Vec<(&str, f64)> = board.iter().collect();
        assert_eq!(entries, vec![("a", 0.5), ("b", 1.0)]);
    }

    #[test]
    fn test_from_file_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"ridge": 0.8, "lasso": 0.7}}"#).unwrap();

        let board = Scoreboard::from_file(file.path()).unwrap();
        assert_eq!(board.len(), 2);
        assert!(board.contains("lasso"));
    }

    #[test]
    fn test_from_file_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        let err = Scoreboard::from_file(file.path()).unwrap_err();
        assert!(matches!(err, DeployError::Config(_)));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Scoreboard::from_file("/nonexistent/scores.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read score file"));
    }
}
