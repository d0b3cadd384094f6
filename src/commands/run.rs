//! The umbrella pipeline command.

use crate::cli::types::{GameTypeId, Sport};
use crate::core::http::RetryClient;
use crate::error::Result;
use crate::scrape::pipeline::{self, PipelineConfig, SkipStages};

use super::print_json;

pub struct RunParams {
    pub sports: Vec<Sport>,
    pub game_type_ids: Option<Vec<GameTypeId>>,
    pub slate_types: Option<Vec<String>>,
    pub game_set_tags: Option<Vec<String>>,
    pub skip: SkipStages,
    pub strict: bool,
    pub as_json: bool,
    pub verbose: bool,
}

/// Run the full scraping pipeline for one or more sports.
pub async fn handle_run(params: RunParams) -> Result<()> {
    let Some(first_sport) = params.sports.first() else {
        println!("No sports provided.");
        return Ok(());
    };

    let client = RetryClient::new()?;
    let base = PipelineConfig {
        sport: first_sport.clone(),
        game_type_ids: params.game_type_ids.clone(),
        slate_types: params.slate_types.clone(),
        game_set_tags: params.game_set_tags.clone(),
        skip: params.skip,
        strict: params.strict,
        verbose: params.verbose,
    };

    let outcomes = pipeline::run_all(&client, &params.sports, &base).await?;

    if params.as_json {
        return print_json(&outcomes);
    }

    for outcome in &outcomes {
        println!("{}", outcome.summary());

        if !outcome.failures.is_empty() {
            println!(
                "⚠ {}: skipped {} records due to validation errors",
                outcome.sport,
                outcome.failures.len()
            );
            if params.verbose {
                for failure in &outcome.failures {
                    println!("  [{}] {}: {}", failure.stage, failure.id, failure.message);
                }
            }
        }

        for stage in &outcome.suppressed {
            println!("⚠ {}: {} suppressed (no input IDs)", outcome.sport, stage);
        }
    }

    Ok(())
}
