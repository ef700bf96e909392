//! calltally-engine - clean and report on user and call log CSVs
//!
//! Loaders read a CSV, drop rows that fail validation, and insert the rest
//! into a [`Database`] in one transaction. Reporters query the store and
//! write the derived CSV files.
//!
//! # Example
//!
//! ```no_run
//! use calltally_engine::{CsvOptions, PipelinePaths, run_pipeline};
//!
//! let summary = run_pipeline(&PipelinePaths::default(), &CsvOptions::default())?;
//! println!("{} call logs skipped", summary.call_logs.skipped());
//! # Ok::<(), calltally_engine::Error>(())
//! ```

pub mod error;
pub mod ingest;
pub mod pipeline;
pub mod report;
pub mod validate;

pub use calltally_index::Database;
pub use error::{Error, Result};
pub use ingest::{LoadSummary, load_call_logs, load_users};
pub use pipeline::{LoadedStore, PipelinePaths, RunSummary, load_all, run_pipeline};
pub use report::{CsvOptions, LineTerminator, write_ordered_calls, write_user_analytics};
