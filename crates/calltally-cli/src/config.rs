use crate::args::PathArgs;
use anyhow::{Context, Result};
use calltally_engine::{CsvOptions, LineTerminator, PipelinePaths};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings read from `calltally.toml`
///
/// Every key is optional. Command-line flags win over the file, the file
/// wins over the built-in `resources/` locations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PathsConfig {
    pub users: Option<PathBuf>,
    pub call_logs: Option<PathBuf>,
    pub user_analytics: Option<PathBuf>,
    pub ordered_calls: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub line_terminator: LineTerminator,
}

impl Config {
    /// Load config from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // Return default config if file doesn't exist
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    pub fn pipeline_paths(&self, overrides: &PathArgs) -> PipelinePaths {
        let defaults = PipelinePaths::default();
        PipelinePaths {
            users: pick(&overrides.users, &self.paths.users, defaults.users),
            call_logs: pick(&overrides.call_logs, &self.paths.call_logs, defaults.call_logs),
            user_analytics: pick(
                &overrides.analytics_out,
                &self.paths.user_analytics,
                defaults.user_analytics,
            ),
            ordered_calls: pick(
                &overrides.ordered_out,
                &self.paths.ordered_calls,
                defaults.ordered_calls,
            ),
        }
    }

    pub fn csv_options(&self) -> CsvOptions {
        CsvOptions {
            line_terminator: self.output.line_terminator,
        }
    }
}

fn pick(flag: &Option<PathBuf>, file: &Option<PathBuf>, default: PathBuf) -> PathBuf {
    flag.clone().or_else(|| file.clone()).unwrap_or(default)
}
