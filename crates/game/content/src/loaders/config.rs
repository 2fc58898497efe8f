//! Combat configuration loader.

use std::path::Path;

use skirmish_core::CombatConfig;

use crate::loaders::{LoadResult, read_file};

const EMBEDDED: &str = include_str!("../../data/combat.toml");

/// Loader for combat configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to the built-in balance values.
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        let config: CombatConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        Ok(config)
    }

    /// Config shipped with the crate.
    pub fn embedded() -> LoadResult<CombatConfig> {
        Self::parse(EMBEDDED)
    }
}
