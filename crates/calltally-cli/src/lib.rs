// calltally CLI
//
// One invocation is one run: a fresh in-memory store is built from the input
// CSVs, both reports are written, and the store is discarded on exit.

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
mod output;
pub mod types;

pub use args::{Cli, Commands, PathArgs};
pub use commands::run;
