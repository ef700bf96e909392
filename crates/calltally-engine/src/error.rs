use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read CSV file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("CSV file {} has no header row", .path.display())]
    MissingHeader { path: PathBuf },

    #[error("Failed to write CSV file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Store error")]
    Index(#[from] calltally_index::Error),
}

impl Error {
    pub(crate) fn read(path: &Path, source: impl Into<csv::Error>) -> Self {
        Error::Read {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }

    pub(crate) fn write(path: &Path, source: impl Into<csv::Error>) -> Self {
        Error::Write {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }

    /// True when the underlying failure is a missing file.
    pub fn is_not_found(&self) -> bool {
        let source = match self {
            Error::Read { source, .. } | Error::Write { source, .. } => source,
            Error::MissingHeader { .. } | Error::Index(_) => return false,
        };
        matches!(source.kind(), csv::ErrorKind::Io(err) if err.kind() == std::io::ErrorKind::NotFound)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_read_error_names_the_file() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::read(Path::new("resources/users.csv"), io);

        assert_eq!(err.to_string(), "Failed to read CSV file resources/users.csv");
        assert!(err.source().is_some());
        assert!(err.is_not_found());
    }

    #[test]
    fn test_missing_header_names_the_file() {
        let err = Error::MissingHeader {
            path: PathBuf::from("resources/callLogs.csv"),
        };

        assert_eq!(
            err.to_string(),
            "CSV file resources/callLogs.csv has no header row"
        );
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_permission_error_is_not_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::write(Path::new("out.csv"), io);

        assert!(!err.is_not_found());
    }
}
