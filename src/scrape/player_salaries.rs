//! Player salary scraping from draftable CSV exports.

use std::collections::HashMap;

use csv::StringRecord;

use crate::cli::types::{DraftGroupId, PlayerId};
use crate::core::http::RetryClient;
use crate::dk::urls::draftable_csv_url;
use crate::models::PlayerSalary;

use super::{is_not_found, ParseOutcome, ValidationFailure};

/// Column headers of the draftable CSV.
const REQUIRED_HEADERS: [&str; 9] = [
    "Position",
    "Name + ID",
    "Name",
    "ID",
    "Roster Position",
    "Salary",
    "Game Info",
    "TeamAbbrev",
    "AvgPointsPerGame",
];

/// Fetch and parse the draftable CSV for each draft group, sequentially.
///
/// 404s (expired groups) are recorded and skipped; each group's rows are
/// validated independently.
pub async fn scrape_player_salaries(
    client: &RetryClient,
    draft_group_ids: &[DraftGroupId],
) -> ParseOutcome<PlayerSalary> {
    let mut outcome = ParseOutcome::new();

    for &draft_group_id in draft_group_ids {
        let text = match client.get_text(&draftable_csv_url(draft_group_id)).await {
            Ok(text) => text,
            Err(err) if is_not_found(&err) => {
                outcome.failures.push(ValidationFailure::new(
                    draft_group_id,
                    "draft group not found (404)",
                ));
                continue;
            }
            Err(err) => {
                outcome
                    .failures
                    .push(ValidationFailure::from_error(draft_group_id, &err));
                continue;
            }
        };

        let parsed = parse_salary_csv(draft_group_id, &text);
        outcome.records.extend(parsed.records);
        outcome.failures.extend(parsed.failures);
    }

    outcome
}

/// Parse one draft group's CSV export.
///
/// The export carries preamble rows above the real header, and the
/// `Game Info` field occasionally splits into an extra column; both quirks
/// are handled here so rows reach validation well-formed.
pub fn parse_salary_csv(draft_group_id: DraftGroupId, text: &str) -> ParseOutcome<PlayerSalary> {
    let mut outcome = ParseOutcome::new();

    let Some(header_line) = text.lines().position(|line| line.contains("Position")) else {
        outcome.failures.push(ValidationFailure::new(
            draft_group_id,
            "no header row found in draftable CSV",
        ));
        return outcome;
    };

    let body: String = text
        .lines()
        .skip(header_line)
        .map(|line| line.trim_start_matches(','))
        .collect::<Vec<_>>()
        .join("\n");

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(body.as_bytes());

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(err) => {
            outcome
                .failures
                .push(ValidationFailure::new(draft_group_id, err.to_string()));
            return outcome;
        }
    };

    let index: HashMap<&str, usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h, i))
        .collect();
    for required in REQUIRED_HEADERS {
        if !index.contains_key(required) {
            outcome.failures.push(ValidationFailure::new(
                draft_group_id,
                format!("draftable CSV is missing the {required:?} column"),
            ));
            return outcome;
        }
    }
    let game_info_idx = index["Game Info"];

    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                outcome
                    .failures
                    .push(ValidationFailure::new(draft_group_id, err.to_string()));
                continue;
            }
        };

        let fields = normalize_row(&record, headers.len(), game_info_idx);
        if fields.len() != headers.len() {
            // Ragged trailing rows in the export; nothing to salvage.
            continue;
        }

        match parse_salary_row(draft_group_id, &index, &fields) {
            Ok(salary) => outcome.records.push(salary),
            Err(message) => {
                let name = fields[index["Name"]].clone();
                outcome.failures.push(ValidationFailure::new(
                    format!("{draft_group_id}/{name}"),
                    message,
                ));
            }
        }
    }

    outcome
}

/// Re-join a `Game Info` value that leaked across two columns.
fn normalize_row(record: &StringRecord, expected: usize, game_info_idx: usize) -> Vec<String> {
    let mut fields: Vec<String> = record.iter().map(str::to_string).collect();

    if fields.len() == expected + 1 && game_info_idx + 1 < fields.len() {
        let spill = fields.remove(game_info_idx + 1);
        fields[game_info_idx].push_str(&spill);
    }

    fields
}

fn parse_salary_row(
    draft_group_id: DraftGroupId,
    index: &HashMap<&str, usize>,
    fields: &[String],
) -> std::result::Result<PlayerSalary, String> {
    let field = |name: &str| fields[index[name]].trim();

    let player_id: u64 = field("ID")
        .parse()
        .map_err(|_| format!("unparseable player ID {:?}", field("ID")))?;
    if player_id == 0 {
        return Err("missing player ID".to_string());
    }

    let salary: f64 = {
        let raw = field("Salary");
        if raw.is_empty() {
            0.0
        } else {
            raw.parse()
                .map_err(|_| format!("unparseable salary {raw:?}"))?
        }
    };

    let avg_points_per_game: f64 = field("AvgPointsPerGame")
        .parse()
        .map_err(|_| format!("unparseable AvgPointsPerGame {:?}", field("AvgPointsPerGame")))?;

    Ok(PlayerSalary {
        draft_group_id,
        player_id: PlayerId::new(player_id),
        name: field("Name").to_string(),
        name_and_id: field("Name + ID").to_string(),
        position: field("Position").to_string(),
        roster_position: field("Roster Position").to_string(),
        salary,
        game_info: field("Game Info").to_string(),
        team_abbrev: field("TeamAbbrev").to_string(),
        avg_points_per_game,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALARY_CSV: &str = "\
,,,,,,,,
Position,Name + ID,Name,ID,Roster Position,Salary,Game Info,TeamAbbrev,AvgPointsPerGame
QB,Josh Allen (11111111),Josh Allen,11111111,QB,8200,BUF@MIA 09/07/2025 01:00PM ET,BUF,24.3
RB,Saquon Barkley (22222222),Saquon Barkley,22222222,RB/FLEX,7800,PHI@DAL 09/07/2025 04:25PM ET,PHI,21.1
";

    #[test]
    fn test_parse_salary_csv_skips_preamble() {
        let outcome = parse_salary_csv(DraftGroupId::new(90001), SALARY_CSV);
        assert_eq!(outcome.records.len(), 2);
        assert!(outcome.failures.is_empty());

        let allen = &outcome.records[0];
        assert_eq!(allen.player_id, PlayerId::new(11111111));
        assert_eq!(allen.salary, 8200.0);
        assert_eq!(allen.avg_points_per_game, 24.3);
        assert_eq!(allen.draft_group_id, DraftGroupId::new(90001));
    }

    #[test]
    fn test_parse_salary_csv_merges_split_game_info() {
        let csv = "\
Position,Name + ID,Name,ID,Roster Position,Salary,Game Info,TeamAbbrev,AvgPointsPerGame
QB,Josh Allen (11111111),Josh Allen,11111111,QB,8200,BUF@MIA 09/07/2025, 01:00PM ET,BUF,24.3
";
        let outcome = parse_salary_csv(DraftGroupId::new(90001), csv);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].game_info, "BUF@MIA 09/07/2025 01:00PM ET");
        assert_eq!(outcome.records[0].team_abbrev, "BUF");
    }

    #[test]
    fn test_parse_salary_csv_records_bad_rows() {
        let csv = "\
Position,Name + ID,Name,ID,Roster Position,Salary,Game Info,TeamAbbrev,AvgPointsPerGame
QB,Bad Row (x),Bad Row,notanid,QB,8200,BUF@MIA,BUF,24.3
QB,Josh Allen (11111111),Josh Allen,11111111,QB,8200,BUF@MIA,BUF,24.3
";
        let outcome = parse_salary_csv(DraftGroupId::new(90001), csv);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.skipped(), 1);
        assert!(outcome.failures[0].message.contains("player ID"));
    }

    #[test]
    fn test_parse_salary_csv_without_header_is_failure() {
        let outcome = parse_salary_csv(DraftGroupId::new(90001), "no,real,content\n");
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.skipped(), 1);
    }

    #[test]
    fn test_empty_salary_defaults_to_zero() {
        let csv = "\
Position,Name + ID,Name,ID,Roster Position,Salary,Game Info,TeamAbbrev,AvgPointsPerGame
QB,Josh Allen (11111111),Josh Allen,11111111,QB,,BUF@MIA,BUF,24.3
";
        let outcome = parse_salary_csv(DraftGroupId::new(90001), csv);
        assert_eq!(outcome.records[0].salary, 0.0);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let first = parse_salary_csv(DraftGroupId::new(90001), SALARY_CSV);
        let second = parse_salary_csv(DraftGroupId::new(90001), SALARY_CSV);
        assert_eq!(first.records, second.records);
    }
}
