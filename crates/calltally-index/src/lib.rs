// SQLite store for one pipeline run
// Rebuilt from the CSV inputs on every execution, never persisted

mod db;
mod error;
mod queries;
mod records;
mod schema;

// Public API
pub use db::{Database, LoadBatch};
pub use error::{Error, Result};
pub use records::{CallLogRecord, IntegrityReport, NewCallLog, NewUser, UserAnalytics, UserRecord};
pub use schema::init_schema;
