//! Draft group scraping command.

use crate::cli::types::{GameTypeId, Sport};
use crate::core::http::RetryClient;
use crate::dk::LobbySnapshot;
use crate::error::Result;
use crate::scrape::draft_groups::{parse_draft_groups, DraftGroupFilter};

use super::{print_json, report_skipped};

pub async fn handle_draft_groups(
    sport: Sport,
    game_type_ids: Option<Vec<GameTypeId>>,
    slate_types: Option<Vec<String>>,
    as_json: bool,
    verbose: bool,
) -> Result<()> {
    let client = RetryClient::new()?;

    if verbose {
        println!("Fetching lobby data for {sport}...");
    }
    let lobby = LobbySnapshot::fetch(&client, &sport).await?;

    if lobby.draft_groups().is_empty() {
        println!("No draft groups found in lobby for {sport}.");
        return Ok(());
    }

    let filter = DraftGroupFilter {
        game_type_ids,
        slate_types,
    };
    let outcome = parse_draft_groups(&lobby, &filter);
    report_skipped("draft groups", &outcome.failures, verbose);

    if as_json {
        print_json(&outcome.records)?;
    } else {
        println!("Scraped {} draft groups for {}", outcome.records.len(), sport);
    }

    Ok(())
}
