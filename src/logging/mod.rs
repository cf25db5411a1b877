//! Diagnostic logging setup.
//!
//! Installs a `tracing_subscriber::fmt` subscriber writing to stderr, or to a
//! daily file `haikuname_<date>.log` under the configured log directory
//! (default: `~/.local/share/haikuname/logs/`).

use anyhow::{anyhow, Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;
use tracing_subscriber::filter::LevelFilter;

use crate::config::LoggingConfig;

/// Parse the configured level, then raise it once per `-v`.
pub fn effective_level(configured: &str, verbosity: u8) -> Result<LevelFilter> {
    let base = LevelFilter::from_str(configured)
        .map_err(|_| anyhow!("Unknown log level {configured:?}"))?;
    const LADDER: [LevelFilter; 6] = [
        LevelFilter::OFF,
        LevelFilter::ERROR,
        LevelFilter::WARN,
        LevelFilter::INFO,
        LevelFilter::DEBUG,
        LevelFilter::TRACE,
    ];
    let start = LADDER.iter().position(|l| *l == base).unwrap_or(2);
    let index = (start + usize::from(verbosity)).min(LADDER.len() - 1);
    Ok(LADDER[index])
}

/// Expand a leading `~` to the home directory.
pub fn expand_log_dir(log_dir: &str) -> PathBuf {
    match log_dir.strip_prefix('~') {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
            None => PathBuf::from(log_dir),
        },
        None => PathBuf::from(log_dir),
    }
}

/// Today's log file inside `log_dir`.
pub fn log_file_path(log_dir: &str) -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    expand_log_dir(log_dir).join(format!("haikuname_{}.log", date))
}

/// Install the global subscriber. Call once, at startup.
pub fn init(config: &LoggingConfig, verbosity: u8) -> Result<()> {
    let level = effective_level(&config.level, verbosity)?;
    let builder = tracing_subscriber::fmt().with_max_level(level);

    if config.to_file {
        let path = log_file_path(&config.log_dir);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
            .map_err(|e| anyhow!("Failed to install logger: {e}"))
    } else {
        builder
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow!("Failed to install logger: {e}"))
    }
}
