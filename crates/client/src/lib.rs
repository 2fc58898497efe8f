//! Skirmish scenario client.
//!
//! Loads combat content, builds an encounter and replays a scripted scenario
//! round by round. The binary in `main.rs` is a thin composition root over
//! this library.

pub mod config;
pub mod logging;
pub mod report;
pub mod runner;

pub use config::SimConfig;
pub use runner::{RunSummary, ScenarioRunner, StepError};

use anyhow::Result;
use skirmish_content::{ConfigLoader, RosterLoader, Scenario, ScenarioLoader};
use skirmish_core::{Character, CombatConfig};

/// Content selected by a [`SimConfig`].
pub struct Content {
    pub config: CombatConfig,
    pub characters: Vec<Character>,
    pub scenario: Scenario,
}

impl Content {
    /// Loads each file from its configured path, or the embedded default.
    pub fn load(sim: &SimConfig) -> Result<Self> {
        let config = match &sim.config_path {
            Some(path) => ConfigLoader::load(path)?,
            None => ConfigLoader::embedded()?,
        };
        let specs = match &sim.roster_path {
            Some(path) => RosterLoader::load(path)?,
            None => RosterLoader::embedded()?,
        };
        let scenario = match &sim.scenario_path {
            Some(path) => ScenarioLoader::load(path)?,
            None => ScenarioLoader::embedded()?,
        };

        Ok(Self {
            config,
            characters: RosterLoader::build_all(&specs)?,
            scenario,
        })
    }
}
