use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing;

/// Whether a failed validation raises immediately or is recorded for later
/// inspection. Immutable for the lifetime of a sanitizer instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultPolicy {
    Throw,
    Collect,
}

impl Default for FaultPolicy {
    fn default() -> Self {
        FaultPolicy::Throw
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoreConfig {
    #[serde(default)]
    pub faults: FaultsConfig,
    #[serde(default)]
    pub patterns: PatternsConfig,
}

impl CoreConfig {
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join("scour.toml");
        let cfg = if path.exists() {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            toml::from_str::<CoreConfig>(&text)
                .with_context(|| format!("parsing config file {}", path.display()))?
        } else {
            tracing::info!(
                "No config file found at {}. Using CoreConfig::default().",
                path.display()
            );
            CoreConfig::default()
        };
        Ok(cfg)
    }

    pub fn with_policy(policy: FaultPolicy) -> Self {
        Self {
            faults: FaultsConfig {
                policy,
                ..FaultsConfig::default()
            },
            patterns: PatternsConfig::default(),
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            faults: FaultsConfig::default(),
            patterns: PatternsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FaultsConfig {
    #[serde(default)]
    pub policy: FaultPolicy,
    #[serde(default = "FaultsConfig::default_max_entries")]
    pub max_entries: usize,
}

impl FaultsConfig {
    fn default_max_entries() -> usize {
        1024
    }
}

impl Default for FaultsConfig {
    fn default() -> Self {
        Self {
            policy: FaultPolicy::default(),
            max_entries: Self::default_max_entries(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatternsConfig {
    /// Compile every grammar once at construction (runtime speed) instead of
    /// evaluating patterns ad hoc per call (startup speed). Results are
    /// identical either way.
    #[serde(default)]
    pub compile_eagerly: bool,
}

impl Default for PatternsConfig {
    fn default() -> Self {
        Self {
            compile_eagerly: false,
        }
    }
}
