use std::io::Write;
use std::path::PathBuf;

use reqwest::StatusCode;
use tracing::warn;

use crate::error::ScrapeError;
use crate::extract;
use crate::fetch::{FetchOutcome, Fetcher};
use crate::output;
use crate::settings::Settings;

pub const FETCH_FAILED_MSG: &str = "Failed to retrieve the webpage";

/// What a completed run did.
pub struct RunSummary {
    pub players: usize,
    /// Set when the page came back with a status other than 200.
    pub unavailable: Option<StatusCode>,
    pub output: PathBuf,
}

/// Fetch -> extract -> write, once.
///
/// A non-200 response writes the diagnostic line to `console` and still
/// writes a header-only CSV. Every other failure is returned.
pub async fn run<W: Write>(settings: &Settings, console: &mut W) -> Result<RunSummary, ScrapeError> {
    let fetcher = Fetcher::new(&settings.user_agent, settings.timeout())?;

    let outcome = fetcher.fetch(&settings.url).await?;
    let unavailable = match &outcome {
        FetchOutcome::Page(_) => None,
        FetchOutcome::Unavailable(status) => {
            if let Err(e) = writeln!(console, "{}", FETCH_FAILED_MSG) {
                warn!("Could not report fetch failure: {}", e);
            }
            Some(*status)
        }
    };

    let players = extract::extract_players(&outcome.into_html(), settings.missing_cell_policy())?;
    let written = output::write_csv(&settings.output, &players)?;

    Ok(RunSummary {
        players: written,
        unavailable,
        output: settings.output.clone(),
    })
}
