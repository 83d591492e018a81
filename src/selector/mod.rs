//! Least-error model selection.
//!
//! Given the identifiers of a set of candidate models and a mapping from
//! identifier to error score (RMSE or any other lower-is-better metric), the
//! selector performs a single linear scan and returns the identifier with the
//! lowest score.
//!
//! # Tie-break
//!
//! Scores are compared with strict less-than, so when several models share
//! the minimum score the *first* one yielded by the model iterator wins.
//! Iteration order is the caller's container order: pass keys from an
//! ordered container ([`Scoreboard`](crate::Scoreboard), `IndexMap`,
//! `BTreeMap`, a slice) when ties must resolve deterministically. Ties over
//! `HashMap` keys resolve to whichever key the hasher happens to yield first.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use rmse_deploy::selector::select_best_model;
//!
//! let scores: BTreeMap<&str, f64> = [("a", 5.0), ("b", 2.0), ("c", 9.0)].into_iter().collect();
//! let best = select_best_model(scores.keys(), &scores).unwrap();
//! assert_eq!(best, Some(&"b"));
//! ```

mod lookup;

use std::fmt;

use crate::error::{DeployError, Result};

pub use lookup::ScoreLookup;

/// Winning model together with its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection<T> {
    /// Identifier of the selected model
    pub id: T,
    /// Score of the selected model
    pub score: f64,
}

/// Scan `models` and return the one with the strictly lowest score.
///
/// Returns `Ok(None)` when `models` is empty, or when no score is strictly
/// below positive infinity (NaN scores never win). Fails with
/// [`DeployError::MissingScore`] on the first model that `scores` has no
/// entry for.
pub fn best_candidate<'a, K, I, S>(models: I, scores: &S) -> Result<Option<Selection<&'a K>>>
where
    I: IntoIterator<Item = &'a K>,
    K: fmt::Display + ?Sized + 'a,
    S: ScoreLookup<K> + ?Sized,
{
    let mut min_score = f64::INFINITY;
    let mut selected = None;
    let mut candidates = 0usize;

    for model in models {
        candidates += 1;
        let score = scores
            .score(model)
            .ok_or_else(|| DeployError::MissingScore(model.to_string()))?;

        tracing::trace!(model = %model, score, min_score, "comparing candidate");

        if score < min_score {
            selected = Some(model);
            min_score = score;
        }
    }

    tracing::debug!(candidates, "selection scan complete");

    Ok(selected.map(|id| Selection {
        id,
        score: min_score,
    }))
}

/// Identifier of the model with the lowest score, if any.
///
/// See [`best_candidate`] for the scan semantics.
pub fn select_best_model<'a, K, I, S>(models: I, scores: &S) -> Result<Option<&'a K>>
where
    I: IntoIterator<Item = &'a K>,
    K: fmt::Display + ?Sized + 'a,
    S: ScoreLookup<K> + ?Sized,
{
    Ok(best_candidate(models, scores)?.map(|selection| selection.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use std::collections::HashMap;

    fn ordered(entries: &[(&str, f64)]) -> IndexMap<String, f64> {
        entries
            .iter()
            .map(|(name, score)| ((*name).to_string(), *score))
            .collect()
    }

    #[test]
    fn test_selects_lowest_score() {
        let models: HashMap<&str, ()> = [("a", ()), ("b", ()), ("c", ())].into_iter().collect();
        let scores: HashMap<&str, f64> = [("a", 5.0), ("b", 2.0), ("c", 9.0)].into_iter().collect();

        let best = select_best_model(models.keys(), &scores).unwrap();
        assert_eq!(best, Some(&"b"));
    }

    #[test]
    fn test_empty_models_yields_none() {
        let models: HashMap<String, ()> = HashMap::new();
        let scores: HashMap<String, f64> = HashMap::new();

        let best = select_best_model(models.keys(), &scores).unwrap();
        assert!(best.is_none());
    }

    #[test]
    fn test_missing_score_is_error() {
        let models = ["a"];
        let scores: HashMap<&str, f64> = HashMap::new();

        let err = select_best_model(models.iter(), &scores).unwrap_err();
        assert!(matches!(err, DeployError::MissingScore(ref id) if id == "a"));
    }

    #[test]
    fn test_missing_score_fails_even_after_winner() {
        let scores = ordered(&[("a", 1.0), ("b", 2.0)]);
        let models = ["a", "b", "c"];

        let err = select_best_model(models.iter().copied(), &scores).unwrap_err();
        assert!(matches!(err, DeployError::MissingScore(ref id) if id == "c"));
    }

    #[test]
    fn test_tie_first_encountered_wins() {
        let scores = ordered(&[("a", 1.0), ("b", 1.0)]);
        assert_eq!(
            select_best_model(scores.keys(), &scores).unwrap(),
            Some(&"a".to_string())
        );

        let reversed = ordered(&[("b", 1.0), ("a", 1.0)]);
        assert_eq!(
            select_best_model(reversed.keys(), &reversed).unwrap(),
            Some(&"b".to_string())
        );
    }

    #[test]
    fn test_best_candidate_reports_score() {
        let scores = ordered(&[("arima", 4.2), ("lstm", 3.1), ("ets", 3.9)]);
        let selection = best_candidate(scores.keys(), &scores).unwrap().unwrap();

        assert_eq!(selection.id, "lstm");
        assert_eq!(selection.score, 3.1);
    }

    #[test]
    fn test_models_subset_of_scores() {
        let scores = ordered(&[("a", 0.5), ("b", 2.0), ("c", 1.0)]);
        let models = ["b", "c"];

        let best = select_best_model(models.iter().copied(), &scores).unwrap();
        assert_eq!(best, Some("c"));
    }

    #[test]
    fn test_nan_never_selected() {
        let scores = ordered(&[("a", f64::NAN), ("b", 7.0)]);
        let best = select_best_model(scores.keys(), &scores).unwrap();
        assert_eq!(best.map(String::as_str), Some("b"));

        let only_nan = ordered(&[("a", f64::NAN)]);
        assert!(select_best_model(only_nan.keys(), &only_nan)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_infinite_score_never_selected() {
        let scores = ordered(&[("a", f64::INFINITY)]);
        assert!(select_best_model(scores.keys(), &scores).unwrap().is_none());
    }

    #[test]
    fn test_negative_scores() {
        let scores = ordered(&[("a", -1.0), ("b", -3.5), ("c", 0.0)]);
        let best = select_best_model(scores.keys(), &scores).unwrap();
        assert_eq!(best.map(String::as_str), Some("b"));
    }
}
