use crate::Result;
use crate::ingest::{LoadSummary, load_call_logs, load_users};
use crate::report::{CsvOptions, write_ordered_calls, write_user_analytics};
use calltally_index::{Database, IntegrityReport};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

/// Input and output locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelinePaths {
    pub users: PathBuf,
    pub call_logs: PathBuf,
    pub user_analytics: PathBuf,
    pub ordered_calls: PathBuf,
}

impl Default for PipelinePaths {
    fn default() -> Self {
        let resources = PathBuf::from("resources");
        Self {
            users: resources.join("users.csv"),
            call_logs: resources.join("callLogs.csv"),
            user_analytics: resources.join("userAnalytics.csv"),
            ordered_calls: resources.join("orderedCalls.csv"),
        }
    }
}

/// A freshly built store together with what loading it skipped.
pub struct LoadedStore {
    pub db: Database,
    pub users: LoadSummary,
    pub call_logs: LoadSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub users: LoadSummary,
    pub call_logs: LoadSummary,
    pub integrity: IntegrityReport,
    pub analytics_rows: usize,
    pub ordered_rows: usize,
}

/// Build a new in-memory store and load both input files into it.
pub fn load_all(paths: &PipelinePaths) -> Result<LoadedStore> {
    let mut db = Database::open_in_memory()?;

    let users = load_users(&mut db, &paths.users)?;
    let call_logs = load_call_logs(&mut db, &paths.call_logs)?;

    Ok(LoadedStore {
        db,
        users,
        call_logs,
    })
}

/// Run every step in order: load users, load call logs, write both reports.
///
/// The store lives only for the duration of this call.
pub fn run_pipeline(paths: &PipelinePaths, options: &CsvOptions) -> Result<RunSummary> {
    let LoadedStore {
        db,
        users,
        call_logs,
    } = load_all(paths)?;

    let integrity = db.integrity_report()?;
    if integrity.orphaned_call_logs > 0 {
        warn!(
            count = integrity.orphaned_call_logs,
            "call logs reference users that were not loaded"
        );
    }
    if integrity.negative_durations > 0 {
        warn!(
            count = integrity.negative_durations,
            "call logs end before they start"
        );
    }

    let analytics_rows = write_user_analytics(&db, &paths.user_analytics, options)?;
    let ordered_rows = write_ordered_calls(&db, &paths.ordered_calls, options)?;

    info!(
        users = users.inserted,
        call_logs = call_logs.inserted,
        skipped = users.skipped() + call_logs.skipped(),
        "pipeline finished"
    );

    Ok(RunSummary {
        users,
        call_logs,
        integrity,
        analytics_rows,
        ordered_rows,
    })
}
