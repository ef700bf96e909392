pub mod dump;
pub mod run;

// Missing files are the common failure; point at where paths come from.
fn explain(err: calltally_engine::Error) -> anyhow::Error {
    let not_found = err.is_not_found();
    let err = anyhow::Error::new(err);
    if not_found {
        err.context(
            "File or directory not found (see --users, --call-logs, --analytics-out, --ordered-out or [paths] in calltally.toml)",
        )
    } else {
        err
    }
}
