//! Game type scraping command.

use crate::cli::types::Sport;
use crate::core::http::RetryClient;
use crate::dk::LobbySnapshot;
use crate::error::Result;
use crate::scrape::game_types::parse_game_types;

use super::{print_json, report_skipped};

pub async fn handle_game_types(sport: Sport, as_json: bool, verbose: bool) -> Result<()> {
    let client = RetryClient::new()?;

    if verbose {
        println!("Fetching lobby data for {sport}...");
    }
    let lobby = LobbySnapshot::fetch(&client, &sport).await?;

    if lobby.game_types().is_empty() {
        println!("No game types found in lobby for {sport}.");
        return Ok(());
    }

    let outcome = parse_game_types(&lobby);
    report_skipped("game types", &outcome.failures, verbose);

    if as_json {
        print_json(&outcome.records)?;
    } else {
        println!("Scraped {} game types for {}", outcome.records.len(), sport);
    }

    Ok(())
}
