//! CSV report writers.

mod analytics;
mod ordered;

pub use analytics::write_user_analytics;
pub use ordered::write_ordered_calls;

use crate::{Error, Result};
use csv::{Terminator, Writer, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// Line ending used for written reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineTerminator {
    #[default]
    Crlf,
    Lf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CsvOptions {
    pub line_terminator: LineTerminator,
}

// Truncates an existing file.
fn create_writer(path: &Path, options: &CsvOptions) -> Result<Writer<File>> {
    let terminator = match options.line_terminator {
        LineTerminator::Crlf => Terminator::CRLF,
        LineTerminator::Lf => Terminator::Any(b'\n'),
    };

    WriterBuilder::new()
        .terminator(terminator)
        .from_path(path)
        .map_err(|err| Error::write(path, err))
}
