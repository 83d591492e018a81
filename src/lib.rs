//! # rmse-deploy - Least-Error Model Selection
//!
//! Picks, from a set of candidate models and their error scores, the model
//! with the lowest score and reports it as the one to deploy. Nothing is
//! actually deployed: "deploy" is the label on the report line.
//!
//! ## Overview
//!
//! ```text
//!   models (ids) ──┐
//!                  ├──> selector ──> Option<id> ──> report line
//!   scores (id→f64)┘        │
//!                           └── MissingScore(id) if an id has no score
//! ```
//!
//! Selection is a single linear scan with strict less-than comparison: on a
//! tie the first model yielded by the iterator wins. An empty collection
//! selects nothing and is not an error.
//!
//! ## Quick Start
//!
//! ```
//! use rmse_deploy::{select_best_model, report_line, Scoreboard};
//!
//! let board = Scoreboard::from_json_str(r#"{"a": 5.0, "b": 2.0, "c": 9.0}"#).unwrap();
//! let best = select_best_model(board.ids(), &board).unwrap();
//!
//! assert_eq!(best.map(String::as_str), Some("b"));
//! assert_eq!(report_line(best), "The model with least RMSE is deployed which is b");
//! ```
//!
//! ## Modules
//!
//! - [`selector`]: Least-score scan and the [`ScoreLookup`] abstraction
//! - [`report`]: Report line formatting and the one-shot deploy helper
//! - [`scoreboard`]: Ordered score tables loaded from JSON/TOML
//! - [`config`]: Configuration management
//! - [`error`]: Error types and result aliases

pub mod config;
pub mod error;
pub mod report;
pub mod scoreboard;
pub mod selector;

// Re-exports for convenience
pub use config::Config;
pub use error::{DeployError, Result};
pub use report::{deploy_least_rmse_model, report_line, write_report};
pub use scoreboard::Scoreboard;
pub use selector::{best_candidate, select_best_model, ScoreLookup, Selection};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
