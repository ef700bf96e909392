use rusqlite::Connection;

use crate::queries::{call_log, report, user};
use crate::records::{
    CallLogRecord, IntegrityReport, NewCallLog, NewUser, UserAnalytics, UserRecord,
};
use crate::{Error, Result, schema};

/// The run-scoped store.
///
/// Owns the only connection; dropping the value closes it, whichever way the
/// run ends.
pub struct Database {
    conn: Connection,
}

/// Write access to the store for the duration of one transaction.
///
/// Handed out by [`Database::with_transaction`]; nothing inserted through it
/// is visible to readers until the closure returns `Ok`.
pub struct LoadBatch<'a> {
    conn: &'a Connection,
}

impl Database {
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn init_schema(&self) -> Result<()> {
        schema::init_schema(&self.conn)
    }

    /// Run `f` inside a single transaction.
    ///
    /// Commits once when `f` succeeds. On error the transaction is dropped,
    /// which rolls back every insert made through the batch.
    pub fn with_transaction<T, E, F>(&mut self, f: F) -> std::result::Result<T, E>
    where
        F: FnOnce(&LoadBatch<'_>) -> std::result::Result<T, E>,
        E: From<Error>,
    {
        let tx = self.conn.transaction().map_err(Error::from)?;
        let batch = LoadBatch { conn: &tx };
        let value = f(&batch)?;
        tx.commit().map_err(Error::from)?;
        Ok(value)
    }

    pub fn list_users(&self) -> Result<Vec<UserRecord>> {
        user::get_all(&self.conn)
    }

    pub fn list_call_logs(&self) -> Result<Vec<CallLogRecord>> {
        call_log::get_all(&self.conn)
    }

    pub fn count_users(&self) -> Result<usize> {
        user::count(&self.conn)
    }

    pub fn count_call_logs(&self) -> Result<usize> {
        call_log::count(&self.conn)
    }

    pub fn user_analytics(&self) -> Result<Vec<UserAnalytics>> {
        report::user_analytics(&self.conn)
    }

    pub fn ordered_call_logs(&self) -> Result<Vec<CallLogRecord>> {
        call_log::get_ordered(&self.conn)
    }

    pub fn integrity_report(&self) -> Result<IntegrityReport> {
        report::integrity(&self.conn)
    }
}

impl LoadBatch<'_> {
    pub fn insert_user(&self, user: &NewUser) -> Result<i64> {
        user::insert(self.conn, user)
    }

    pub fn insert_call_log(&self, call: &NewCallLog) -> Result<i64> {
        call_log::insert(self.conn, call)
    }
}
