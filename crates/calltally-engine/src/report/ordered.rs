use super::{CsvOptions, create_writer};
use crate::{Error, Result};
use calltally_index::Database;
use std::path::Path;
use tracing::info;

const HEADER: [&str; 6] = [
    "callId",
    "phoneNumber",
    "startTime",
    "endTime",
    "direction",
    "userId",
];

/// Write every stored call log ordered by `userId`, then `startTime`.
///
/// Returns the number of data rows written.
pub fn write_ordered_calls(db: &Database, path: &Path, options: &CsvOptions) -> Result<usize> {
    let calls = db.ordered_call_logs()?;

    let mut wtr = create_writer(path, options)?;
    wtr.write_record(HEADER)
        .map_err(|err| Error::write(path, err))?;

    for call in &calls {
        wtr.write_record([
            call.call_id.to_string().as_str(),
            call.phone_number.as_str(),
            call.start_time.to_string().as_str(),
            call.end_time.to_string().as_str(),
            call.direction.as_str(),
            call.user_id.to_string().as_str(),
        ])
        .map_err(|err| Error::write(path, err))?;
    }

    wtr.flush().map_err(|err| Error::write(path, err))?;

    info!(path = %path.display(), rows = calls.len(), "wrote ordered calls");
    Ok(calls.len())
}
