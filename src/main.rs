//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use dk_scrape::{
    cli::{Commands, DkScrape},
    commands::{
        contests::{handle_contest_status, handle_contests},
        draft_groups::handle_draft_groups,
        entries::{handle_entries, EntriesParams},
        entry_history::{handle_entry_history, EntryHistoryParams},
        game_sets::handle_game_sets,
        game_types::handle_game_types,
        payouts::handle_payouts,
        player_salaries::handle_player_salaries,
        run::{handle_run, RunParams},
        sports::handle_sports,
    },
    scrape::pipeline::SkipStages,
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = DkScrape::parse();

    match app.command {
        Commands::Run {
            sports,
            game_type_ids,
            slate_types,
            game_set_tags,
            skip_contests,
            skip_game_types,
            skip_draft_groups,
            skip_game_sets,
            skip_payouts,
            skip_player_salaries,
            strict,
            json,
            verbose,
        } => {
            handle_run(RunParams {
                sports,
                game_type_ids,
                slate_types,
                game_set_tags,
                skip: SkipStages {
                    contests: skip_contests,
                    draft_groups: skip_draft_groups,
                    game_types: skip_game_types,
                    game_sets: skip_game_sets,
                    payouts: skip_payouts,
                    player_salaries: skip_player_salaries,
                },
                strict,
                as_json: json,
                verbose,
            })
            .await?
        }

        Commands::Contests {
            sport,
            draft_group_ids,
            json,
            verbose,
        } => handle_contests(sport, draft_group_ids, json, verbose).await?,

        Commands::ContestStatus {
            contest_ids,
            json,
            verbose,
        } => handle_contest_status(contest_ids, json, verbose).await?,

        Commands::DraftGroups {
            sport,
            game_type_ids,
            slate_types,
            json,
            verbose,
        } => handle_draft_groups(sport, game_type_ids, slate_types, json, verbose).await?,

        Commands::GameTypes {
            sport,
            json,
            verbose,
        } => handle_game_types(sport, json, verbose).await?,

        Commands::GameSets {
            sport,
            tags,
            json,
            verbose,
        } => handle_game_sets(sport, tags, json, verbose).await?,

        Commands::Payouts {
            contest_ids,
            json,
            verbose,
        } => handle_payouts(contest_ids, json, verbose).await?,

        Commands::PlayerSalaries {
            draft_group_ids,
            json,
            verbose,
        } => handle_player_salaries(draft_group_ids, json, verbose).await?,

        Commands::Sports { json, verbose } => handle_sports(json, verbose).await?,

        Commands::Entries {
            contest_ids,
            reuse_downloads,
            json,
            verbose,
        } => {
            handle_entries(EntriesParams {
                contest_ids: contest_ids.unwrap_or_default(),
                reuse_downloads,
                as_json: json,
                verbose,
            })
            .await?
        }

        Commands::EntryHistory {
            wait_secs,
            skip_download,
            json,
            verbose,
        } => {
            handle_entry_history(EntryHistoryParams {
                wait_secs,
                skip_download,
                as_json: json,
                verbose,
            })
            .await?
        }
    }

    Ok(())
}
