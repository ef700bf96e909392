//! CSV loaders.
//!
//! Each loader reads its whole file inside one store transaction: a fatal
//! read error rolls back every row already inserted from that file.

mod call_logs;
mod users;

pub use call_logs::load_call_logs;
pub use users::load_users;

use crate::validate::{CallLogRejection, UserRejection};
use crate::{Error, Result};
use csv::{Reader, ReaderBuilder, StringRecord};
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Outcome of loading one CSV file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub source: PathBuf,
    pub inserted: usize,
    pub rejected_field_count: usize,
    pub rejected_empty: usize,
    pub rejected_not_integer: usize,
}

impl LoadSummary {
    fn new(source: &Path) -> Self {
        Self {
            source: source.to_path_buf(),
            ..Self::default()
        }
    }

    /// Rows dropped for any reason.
    pub fn skipped(&self) -> usize {
        self.rejected_field_count + self.rejected_empty + self.rejected_not_integer
    }

    /// Data rows read, header excluded.
    pub fn rows_read(&self) -> usize {
        self.inserted + self.skipped()
    }

    fn reject_user(&mut self, rejection: UserRejection) {
        match rejection {
            UserRejection::FieldCount(_) => self.rejected_field_count += 1,
            UserRejection::BlankField => self.rejected_empty += 1,
        }
    }

    fn reject_call_log(&mut self, rejection: CallLogRejection) {
        match rejection {
            CallLogRejection::FieldCount(_) => self.rejected_field_count += 1,
            CallLogRejection::EmptyField => self.rejected_empty += 1,
            CallLogRejection::NotInteger { .. } => self.rejected_not_integer += 1,
        }
    }
}

// The header row is consumed by the reader and must be present. Rows may
// have any number of fields; shape checks happen in validation, not here.
fn open_reader(path: &Path) -> Result<Reader<File>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|err| Error::read(path, err))?;

    let headers = reader.headers().map_err(|err| Error::read(path, err))?;
    if headers.is_empty() {
        return Err(Error::MissingHeader {
            path: path.to_path_buf(),
        });
    }

    Ok(reader)
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|pos| pos.line()).unwrap_or_default()
}
