//! rmse-deploy CLI binary.
//!
//! Reports which model has the lowest error score.
//!
//! # Commands
//!
//! - `select` - Pick the least-RMSE model and print the deployment line
//! - `show` - List a score file in order, marking the winner

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rmse_deploy::{
    best_candidate,
    config::{Config, LoggingConfig},
    deploy_least_rmse_model, Scoreboard, VERSION,
};

#[derive(Parser)]
#[command(name = "rmse-deploy")]
#[command(version = VERSION)]
#[command(about = "Pick the model with the lowest error score", long_about = None)]
struct Cli {
    /// Config file (default: <config_dir>/rmse-deploy/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Select the least-RMSE model and report it
    Select {
        /// Score file (.json or .toml)
        #[arg(short, long)]
        scores: Option<PathBuf>,

        /// Candidate model (repeatable; default: every model in the score file)
        #[arg(short, long = "model")]
        models: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List scores in file order
    Show {
        /// Score file (.json or .toml)
        #[arg(short, long)]
        scores: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file_config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load_default()?,
    };
    let config = file_config.merge(Config::from_env());

    init_logging(&config.logging, cli.verbose);

    match cli.command {
        Commands::Select {
            scores,
            models,
            json,
        } => cmd_select(&config, scores, models, json),

        Commands::Show { scores } => cmd_show(&config, scores),
    }
}

fn cmd_select(
    config: &Config,
    scores: Option<PathBuf>,
    models: Vec<String>,
    json_output: bool,
) -> anyhow::Result<()> {
    let board = load_scoreboard(config, scores)?;

    let models = if models.is_empty() {
        config.selection.models.clone()
    } else {
        models
    };

    // No explicit candidates: every scored model competes, in file order
    let candidates: Vec<&str> = if models.is_empty() {
        board.ids().map(String::as_str).collect()
    } else {
        models.iter().map(String::as_str).collect()
    };

    tracing::debug!(candidates = candidates.len(), "running selection");

    if json_output {
        let selection = best_candidate(candidates.iter().copied(), &board)?;
        let output = serde_json::json!({
            "selected": selection.map(|s| s.id),
            "score": selection.map(|s| s.score),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        deploy_least_rmse_model(candidates.iter().copied(), &board)?;
    }

    Ok(())
}

fn cmd_show(config: &Config, scores: Option<PathBuf>) -> anyhow::Result<()> {
    let board = load_scoreboard(config, scores)?;
    let winner = best_candidate(board.ids(), &board)?.map(|s| s.id.as_str());

    println!("Scores ({}):", board.len());
    println!();
    println!("  {:<40} {:>12}", "Model", "Score");
    println!("  {}", "-".repeat(53));

    for (model, score) in board.iter() {
        let marker = if Some(model) == winner { "*" } else { " " };
        println!("{marker} {model:<40} {score:>12.4}");
    }

    Ok(())
}

// Helper functions

fn load_scoreboard(config: &Config, scores: Option<PathBuf>) -> anyhow::Result<Scoreboard> {
    let path = scores
        .or_else(|| config.selection.scores_file.clone())
        .context("No score file given; pass --scores or set RMSE_DEPLOY_SCORES")?;

    Scoreboard::from_file(&path).with_context(|| format!("loading {}", path.display()))
}

fn init_logging(logging: &LoggingConfig, verbose: bool) {
    let log_level = if verbose { "debug" } else { logging.level.as_str() };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    // Logs go to stderr; stdout carries only the report
    if logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
