//! Scripted scenario loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

const EMBEDDED: &str = include_str!("../../data/scenario.ron");

/// One scripted action, addressed by character name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Basic strike.
    Attack { actor: String, target: String },
    /// Named ability.
    Use {
        actor: String,
        ability: String,
        target: String,
    },
}

impl Command {
    pub fn actor(&self) -> &str {
        match self {
            Self::Attack { actor, .. } | Self::Use { actor, .. } => actor,
        }
    }

    pub fn target(&self) -> &str {
        match self {
            Self::Attack { target, .. } | Self::Use { target, .. } => target,
        }
    }
}

/// A named list of rounds. Each round is an ordered list of commands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub rounds: Vec<Vec<Command>>,
}

impl Scenario {
    /// Character names referenced by any command, in first-seen order.
    pub fn participants(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for command in self.rounds.iter().flatten() {
            for name in [command.actor(), command.target()] {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }
}

/// Loader for scripted scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;
        debug!(name = %scenario.name, rounds = scenario.rounds.len(), "parsed scenario");
        Ok(scenario)
    }

    /// Scenario shipped with the crate.
    pub fn embedded() -> LoadResult<Scenario> {
        Self::parse(EMBEDDED)
    }
}
