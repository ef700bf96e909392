use super::explain;
use crate::output;
use crate::types::OutputFormat;
use anyhow::Result;
use calltally_engine::{PipelinePaths, load_all};

pub fn handle(paths: &PipelinePaths, format: OutputFormat) -> Result<()> {
    let store = load_all(paths).map_err(explain)?;

    let users = store.db.list_users()?;
    let call_logs = store.db.list_call_logs()?;

    output::print_dump(&users, &call_logs, format)
}
