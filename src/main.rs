mod error;
mod extract;
mod fetch;
mod output;
mod pipeline;
mod records;
mod settings;

#[cfg(test)]
mod testing;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use settings::Settings;

#[derive(Parser)]
#[command(
    name = "champ_scraper",
    about = "Scrape the NBA most-championships leaderboard into a CSV file"
)]
struct Cli {
    /// Leaderboard page to fetch
    #[arg(long)]
    url: Option<String>,
    /// CSV file to write (overwritten if present)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// HTTP request timeout in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: Option<u64>,
    /// Drop player rows with no championship cell instead of failing
    #[arg(long)]
    skip_incomplete: bool,
}

impl Cli {
    fn apply(self, settings: &mut Settings) {
        if let Some(url) = self.url {
            settings.url = url;
        }
        if let Some(output) = self.output {
            settings.output = output;
        }
        if let Some(secs) = self.timeout_secs {
            settings.timeout_secs = secs;
        }
        if self.skip_incomplete {
            settings.skip_incomplete = true;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let mut settings = Settings::load().context("Failed to load settings")?;
    cli.apply(&mut settings);

    let summary = pipeline::run(&settings, &mut std::io::stdout()).await?;
    match summary.unavailable {
        Some(status) => println!(
            "Page returned {}; wrote header only to {}",
            status,
            summary.output.display()
        ),
        None => println!(
            "Wrote {} players to {}",
            summary.players,
            summary.output.display()
        ),
    }
    info!("Done in {:.1}s", t0.elapsed().as_secs_f64());

    Ok(())
}
