//! Game set scraping command.

use crate::cli::types::Sport;
use crate::core::http::RetryClient;
use crate::dk::LobbySnapshot;
use crate::error::Result;
use crate::scrape::game_sets::parse_game_sets;

use super::{print_json, report_skipped};

pub async fn handle_game_sets(
    sport: Sport,
    tags: Option<Vec<String>>,
    as_json: bool,
    verbose: bool,
) -> Result<()> {
    let client = RetryClient::new()?;

    if verbose {
        println!("Fetching lobby data for {sport}...");
    }
    let lobby = LobbySnapshot::fetch(&client, &sport).await?;

    if lobby.game_sets().is_empty() {
        println!("No game sets found in lobby for {sport}.");
        return Ok(());
    }

    let outcome = parse_game_sets(&lobby, tags.as_deref());
    report_skipped("game sets", &outcome.failures, verbose);

    if as_json {
        print_json(&outcome.records)?;
    } else {
        println!("Scraped {} game sets for {}", outcome.records.len(), sport);
        for game_set in &outcome.records {
            println!(
                "  {}: {} competitions, {} game styles",
                game_set.game_set_key,
                game_set.competitions.len(),
                game_set.game_styles.len()
            );
        }
    }

    Ok(())
}
