use super::{LoadSummary, line_of, open_reader};
use crate::validate::validate_user;
use crate::{Error, Result};
use calltally_index::Database;
use std::path::Path;
use tracing::{debug, info, trace};

/// Load `firstName,lastName` rows into the `users` table.
///
/// Invalid rows are skipped and counted in the returned summary. Nothing is
/// visible in the store until the whole file has been read.
pub fn load_users(db: &mut Database, path: &Path) -> Result<LoadSummary> {
    let mut reader = open_reader(path)?;

    let summary = db.with_transaction(|batch| -> Result<LoadSummary> {
        let mut summary = LoadSummary::new(path);

        for record in reader.records() {
            let record = record.map_err(|err| Error::read(path, err))?;

            match validate_user(&record) {
                Ok(user) => {
                    let user_id = batch.insert_user(&user)?;
                    trace!(user_id, line = line_of(&record), "inserted user");
                    summary.inserted += 1;
                }
                Err(rejection) => {
                    debug!(line = line_of(&record), %rejection, "skipping user row");
                    summary.reject_user(rejection);
                }
            }
        }

        Ok(summary)
    })?;

    info!(
        path = %path.display(),
        inserted = summary.inserted,
        skipped = summary.skipped(),
        "loaded users"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("users.csv");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_users_skips_invalid_rows() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "firstName,lastName\n  Jo ,Lee\n,Smith\nA,B,C\n");
        let mut db = Database::open_in_memory().unwrap();

        let summary = load_users(&mut db, &path).unwrap();

        assert_eq!(summary.inserted, 1);
        assert_eq!(summary.rejected_empty, 1);
        assert_eq!(summary.rejected_field_count, 1);
        assert_eq!(summary.rows_read(), 3);

        let users = db.list_users().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].first_name, "Jo");
        assert_eq!(users[0].last_name, "Lee");
    }

    #[test]
    fn test_header_only_file_loads_nothing() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "firstName,lastName\n");
        let mut db = Database::open_in_memory().unwrap();

        let summary = load_users(&mut db, &path).unwrap();

        assert_eq!(summary.rows_read(), 0);
        assert_eq!(db.count_users().unwrap(), 0);
    }

    #[test]
    fn test_empty_file_without_header_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "");
        let mut db = Database::open_in_memory().unwrap();

        let err = load_users(&mut db, &path).unwrap_err();

        assert!(matches!(err, Error::MissingHeader { .. }));
        assert_eq!(db.count_users().unwrap(), 0);
    }
}
