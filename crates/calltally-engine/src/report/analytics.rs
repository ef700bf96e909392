use super::{CsvOptions, create_writer};
use crate::{Error, Result};
use calltally_index::Database;
use std::path::Path;
use tracing::info;

const HEADER: [&str; 3] = ["userId", "avgDuration", "numCalls"];

/// Write `userId,avgDuration,numCalls` for every user that has call logs.
///
/// Returns the number of data rows written.
pub fn write_user_analytics(db: &Database, path: &Path, options: &CsvOptions) -> Result<usize> {
    let rows = db.user_analytics()?;

    let mut wtr = create_writer(path, options)?;
    wtr.write_record(HEADER)
        .map_err(|err| Error::write(path, err))?;

    for row in &rows {
        wtr.write_record([
            row.user_id.to_string(),
            format_duration(row.avg_duration),
            row.num_calls.to_string(),
        ])
        .map_err(|err| Error::write(path, err))?;
    }

    wtr.flush().map_err(|err| Error::write(path, err))?;

    info!(path = %path.display(), rows = rows.len(), "wrote user analytics");
    Ok(rows.len())
}

// Always one decimal digit: 40.0 rather than 40
fn format_duration(value: f64) -> String {
    format!("{:.1}", value)
}
