use rusqlite::Connection;

use crate::Result;

// Column names follow the CSV headers so reports can select them verbatim.
// userId on callLogs is an advisory reference: foreign key enforcement is
// switched off and rows pointing at unknown users are stored as-is.

/// Create the `users` and `callLogs` tables if they do not exist yet.
///
/// Safe to call any number of times on the same connection; existing rows
/// are left untouched.
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        PRAGMA foreign_keys = OFF;

        CREATE TABLE IF NOT EXISTS users (
            userId INTEGER PRIMARY KEY,
            firstName TEXT NOT NULL,
            lastName TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS callLogs (
            callId INTEGER PRIMARY KEY,
            phoneNumber TEXT NOT NULL,
            startTime INTEGER NOT NULL,
            endTime INTEGER NOT NULL,
            direction TEXT NOT NULL,
            userId INTEGER NOT NULL,
            FOREIGN KEY (userId) REFERENCES users(userId)
        );

        CREATE INDEX IF NOT EXISTS idx_call_logs_user_start ON callLogs(userId, startTime);
        "#,
    )?;

    Ok(())
}
