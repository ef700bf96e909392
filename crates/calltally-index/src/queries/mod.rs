pub mod call_log;
pub mod report;
pub mod user;

use crate::{Error, Result};

/// Convert a SQLite `COUNT(*)` into a row count.
pub(crate) fn to_count(value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| Error::Query(format!("invalid row count: {}", value)))
}
