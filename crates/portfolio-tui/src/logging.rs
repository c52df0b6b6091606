//! File logging. The terminal belongs to the UI, so tracing output goes to
//! `<cache_dir>/portfolio/portfolio.log` instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding an `EnvFilter` directive, e.g. `portfolio=debug`
pub const LOG_ENV: &str = "PORTFOLIO_LOG";

pub fn default_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("portfolio")
}

fn default_filter() -> EnvFilter {
    format!("{}=info,portfolio_core=info", env!("CARGO_CRATE_NAME")).into()
}

/// Install the global subscriber writing to `dir/portfolio.log`.
pub fn init(dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("creating log dir {}", dir.display()))?;
    let path = dir.join("portfolio.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| default_filter()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .try_init()
        .context("installing tracing subscriber")?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_log_file_and_writes() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("nested");

        let path = init(&log_dir).unwrap();
        tracing::info!("hello from the test");

        assert!(path.exists());
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("hello from the test"));

        // Only one global subscriber per process
        assert!(init(&log_dir).is_err());
    }
}
