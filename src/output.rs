use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use tracing::info;

use crate::error::OutputError;
use crate::records::ResultSet;

pub const HEADER: [&str; 2] = ["Player Name", "Total"];

/// Write header + one row per player to any sink, in result-set order.
pub fn write_records<W: Write>(sink: W, players: &ResultSet) -> csv::Result<()> {
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(sink);

    wtr.write_record(HEADER)?;
    for record in players.iter() {
        wtr.write_record([record.name.as_str(), record.championships.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Create or truncate `path` and write the players to it. Returns the number
/// of data rows written.
pub fn write_csv(path: &Path, players: &ResultSet) -> Result<usize, OutputError> {
    let file = File::create(path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_records(file, players).map_err(|source| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Wrote {} rows to {}", players.len(), path.display());
    Ok(players.len())
}
