//! Configuration system for the PW-700 simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! simulation. It provides:
//! 1. **Defaults:** Baseline values for tracing, start PC, and the bulk-run budget.
//! 2. **Structures:** `general` (CPU construction) and `run` (driver) sections.
//! 3. **Loading:** JSON parsing from strings or files; missing keys take defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants::{DEFAULT_DUMP_WORDS, DEFAULT_MAX_CYCLES};

    /// First address fetched after reset.
    pub const START_PC: u16 = 0;

    /// Cycles executed by a bulk run.
    pub const MAX_CYCLES: u64 = DEFAULT_MAX_CYCLES;

    /// Data memory words printed after a run.
    pub const DUMP_WORDS: usize = DEFAULT_DUMP_WORDS;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use pw700_core::config::Config;
///
/// let json = r#"{ "general": { "trace_instructions": true }, "run": { "max_cycles": 64 } }"#;
/// let config = Config::from_json_str(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.start_pc, 0);
/// assert_eq!(config.run.max_cycles, 64);
/// assert_eq!(config.run.dump_words, 10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// CPU construction settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Bulk-run settings.
    #[serde(default)]
    pub run: RunConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// CPU construction settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Print per-stage activity and a pipeline diagram to stderr every cycle.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value.
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u16,

    /// Keep every committed instruction in `Cpu::commit_log`.
    #[serde(default)]
    pub commit_log: bool,
}

impl GeneralConfig {
    const fn default_start_pc() -> u16 {
        defaults::START_PC
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: defaults::START_PC,
            commit_log: false,
        }
    }
}

/// Bulk-run settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RunConfig {
    /// Cycles executed by a bulk run.
    #[serde(default = "RunConfig::default_max_cycles")]
    pub max_cycles: u64,

    /// Data memory words printed after a run.
    #[serde(default = "RunConfig::default_dump_words")]
    pub dump_words: usize,
}

impl RunConfig {
    const fn default_max_cycles() -> u64 {
        defaults::MAX_CYCLES
    }

    const fn default_dump_words() -> usize {
        defaults::DUMP_WORDS
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_cycles: defaults::MAX_CYCLES,
            dump_words: defaults::DUMP_WORDS,
        }
    }
}
