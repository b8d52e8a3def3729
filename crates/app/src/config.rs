//! Simulation configuration: the starting layout and loop limits.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_TICK_LIMIT: u32 = 20;
const DEFAULT_TICK_DELAY_MS: u64 = 2000;

/// The stock half-court drive: a carrier flanked by teammates, defenders
/// screening the left side, rings on both baselines.
const DEFAULT_LAYOUT: [&str; 5] = [
    ".D.D.......",
    "..A........",
    "RDBA......R",
    ".ADA.......",
    ".D.........",
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Starting board as rows of the `.DABR` alphabet.
    pub layout: Vec<String>,
    pub tick_limit: u32,
    pub tick_delay_ms: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            layout: DEFAULT_LAYOUT.iter().map(|row| row.to_string()).collect(),
            tick_limit: DEFAULT_TICK_LIMIT,
            tick_delay_ms: DEFAULT_TICK_DELAY_MS,
        }
    }
}

impl SimConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }
}
