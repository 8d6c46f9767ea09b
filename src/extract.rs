use scraper::{ElementRef, Html, Selector};
use tracing::{info, warn};

use crate::error::ExtractError;
use crate::records::{PlayerRecord, ResultSet};

const ROW: &str = "tr";
const PLAYER_CELL: &str = r#"td[data-stat="player"]"#;
const CHAMP_CELL: &str = r#"td[data-stat="champ_count"]"#;

/// What to do with a row that has a player cell but no `champ_count` cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingCellPolicy {
    /// Fail the whole extraction.
    #[default]
    Abort,
    /// Drop the row and keep going.
    Skip,
}

/// Scan every `tr` in document order and collect player -> championships.
///
/// Rows without a `td[data-stat="player"]` cell (header rows, spacers) are
/// ignored. A later row for the same name overwrites the earlier count.
pub fn extract_players(html: &str, policy: MissingCellPolicy) -> Result<ResultSet, ExtractError> {
    let document = Html::parse_document(html);
    let row_sel = selector(ROW)?;
    let player_sel = selector(PLAYER_CELL)?;
    let champ_sel = selector(CHAMP_CELL)?;

    let mut players = ResultSet::new();
    let mut scanned = 0usize;

    for (i, row) in document.select(&row_sel).enumerate() {
        scanned += 1;
        let Some(player_cell) = row.select(&player_sel).next() else {
            continue;
        };
        let name = strip_marker(&cell_text(&player_cell)).to_string();

        let Some(champ_cell) = row.select(&champ_sel).next() else {
            match policy {
                MissingCellPolicy::Abort => {
                    return Err(ExtractError::MissingCell {
                        row: i + 1,
                        field: "champ_count",
                    })
                }
                MissingCellPolicy::Skip => {
                    warn!("Skipping row {} ({}): no champ_count cell", i + 1, name);
                    continue;
                }
            }
        };

        players.insert(PlayerRecord::new(name, cell_text(&champ_cell)));
    }

    if players.is_empty() {
        warn!("No player rows found in {} rows", scanned);
    } else {
        info!("Scanned {} rows, extracted {} players", scanned, players.len());
    }
    Ok(players)
}

fn selector(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::Selector(format!("{css}: {e}")))
}

fn cell_text(cell: &ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Hall of Fame players carry a trailing `*`, sometimes after a space.
fn strip_marker(name: &str) -> &str {
    name.strip_suffix('*').unwrap_or(name).trim_end()
}
