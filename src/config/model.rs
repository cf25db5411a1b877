//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so the tool works without a config file.

use serde::{Deserialize, Serialize};

use super::merge::NameConfig;
use crate::generator::bulk::DEFAULT_RETRY_FACTOR;
use crate::generator::entropy::EntropyPolicy;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Caller defaults, layered between the built-ins and per-call options.
    #[serde(default)]
    pub defaults: NameConfig,
    #[serde(default)]
    pub words: WordsConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Replacement word lists. Empty lists mean "use the built-ins".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordsConfig {
    #[serde(default)]
    pub adjectives: Vec<String>,
    #[serde(default)]
    pub nouns: Vec<String>,
}

/// Randomness and bulk generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default)]
    pub entropy: EntropyPolicy,
    /// Permit the predictable clock-based source when the OS source is gone.
    #[serde(default)]
    pub allow_weak_entropy: bool,
    #[serde(default = "default_retry_factor")]
    pub retry_factor: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            entropy: EntropyPolicy::default(),
            allow_weak_entropy: false,
            retry_factor: default_retry_factor(),
        }
    }
}

/// Diagnostic logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub to_file: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            to_file: false,
            log_dir: default_log_dir(),
        }
    }
}

fn default_retry_factor() -> usize {
    DEFAULT_RETRY_FACTOR
}
fn default_level() -> String {
    "warn".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/haikuname/logs".to_string()
}
