use super::{LoadSummary, line_of, open_reader};
use crate::validate::validate_call_log;
use crate::{Error, Result};
use calltally_index::Database;
use std::path::Path;
use tracing::{debug, info, trace};

/// Load `phoneNumber,startTime,endTime,direction,userId` rows into `callLogs`.
///
/// Rows with the wrong shape, an empty field, or a non-integer time or user
/// id are skipped and counted. `userId` is not checked against `users`, and
/// `endTime` may precede `startTime`.
pub fn load_call_logs(db: &mut Database, path: &Path) -> Result<LoadSummary> {
    let mut reader = open_reader(path)?;

    let summary = db.with_transaction(|batch| -> Result<LoadSummary> {
        let mut summary = LoadSummary::new(path);

        for record in reader.records() {
            let record = record.map_err(|err| Error::read(path, err))?;

            match validate_call_log(&record) {
                Ok(call) => {
                    let call_id = batch.insert_call_log(&call)?;
                    trace!(call_id, line = line_of(&record), "inserted call log");
                    summary.inserted += 1;
                }
                Err(rejection) => {
                    debug!(line = line_of(&record), %rejection, "skipping call log row");
                    summary.reject_call_log(rejection);
                }
            }
        }

        Ok(summary)
    })?;

    info!(
        path = %path.display(),
        inserted = summary.inserted,
        skipped = summary.skipped(),
        "loaded call logs"
    );
    Ok(summary)
}
