//! Character roster loader.
//!
//! Rosters are RON lists of [`CharacterSpec`]. Specs describe components by
//! shape and are turned into live [`Character`]s with [`CharacterSpec::build`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use skirmish_core::{
    Ability, ArcaneMana, ArmoredHealth, Attributes, Character, CombatConfig, HealthComponent,
    RageEnergy, ResourceComponent, StandardHealth, Team,
};
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

const EMBEDDED: &str = include_str!("../../data/characters.ron");

/// Health component description.
///
/// `current` defaults to `maximum`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthSpec {
    Standard {
        maximum: u32,
        #[serde(default)]
        current: Option<u32>,
    },
    Armored {
        maximum: u32,
        #[serde(default)]
        current: Option<u32>,
        #[serde(default)]
        mitigation_percent: Option<u8>,
    },
}

/// Resource component description.
///
/// Mana starts full and rage starts empty unless `current` is given.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceSpec {
    Arcane {
        maximum: u32,
        #[serde(default)]
        current: Option<u32>,
        #[serde(default)]
        regen_per_turn: u32,
    },
    Rage {
        maximum: u32,
        #[serde(default)]
        current: Option<u32>,
        #[serde(default)]
        dealt_percent: Option<u32>,
        #[serde(default)]
        taken_percent: Option<u32>,
        #[serde(default)]
        decay_per_turn: Option<u32>,
    },
}

/// One roster entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSpec {
    pub name: String,
    #[serde(default = "first_level")]
    pub level: u32,
    #[serde(default)]
    pub team: u8,
    #[serde(default)]
    pub attributes: Attributes,
    pub health: HealthSpec,
    pub resource: ResourceSpec,
    #[serde(default)]
    pub abilities: Vec<Ability>,
}

fn first_level() -> u32 {
    1
}

impl HealthSpec {
    pub fn build(&self) -> HealthComponent {
        match *self {
            Self::Standard { maximum, current } => {
                StandardHealth::new(current.unwrap_or(maximum), maximum).into()
            }
            Self::Armored {
                maximum,
                current,
                mitigation_percent,
            } => ArmoredHealth::with_mitigation(
                current.unwrap_or(maximum),
                maximum,
                mitigation_percent.unwrap_or(ArmoredHealth::DEFAULT_MITIGATION_PERCENT),
            )
            .into(),
        }
    }
}

impl ResourceSpec {
    pub fn build(&self) -> ResourceComponent {
        match *self {
            Self::Arcane {
                maximum,
                current,
                regen_per_turn,
            } => ArcaneMana::new(current.unwrap_or(maximum), maximum)
                .with_regen(regen_per_turn)
                .into(),
            Self::Rage {
                maximum,
                current,
                dealt_percent,
                taken_percent,
                decay_per_turn,
            } => RageEnergy::new(current.unwrap_or(0), maximum)
                .with_rates(
                    dealt_percent.unwrap_or(RageEnergy::DEFAULT_DEALT_PERCENT),
                    taken_percent.unwrap_or(RageEnergy::DEFAULT_TAKEN_PERCENT),
                )
                .with_decay(decay_per_turn.unwrap_or(RageEnergy::DEFAULT_DECAY_PER_TURN))
                .into(),
        }
    }
}

impl CharacterSpec {
    /// Builds the live character.
    ///
    /// Fails when more than [`CombatConfig::MAX_ABILITIES`] abilities are
    /// listed.
    pub fn build(&self) -> LoadResult<Character> {
        if self.abilities.len() > CombatConfig::MAX_ABILITIES {
            anyhow::bail!(
                "Character '{}' has {} abilities (limit {})",
                self.name,
                self.abilities.len(),
                CombatConfig::MAX_ABILITIES
            );
        }

        let character = self.abilities.iter().cloned().fold(
            Character::new(
                self.name.clone(),
                self.level,
                self.health.build(),
                self.resource.build(),
            )
            .with_team(Team(self.team))
            .with_attributes(self.attributes),
            Character::with_ability,
        );
        Ok(character)
    }
}

/// Loader for character rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load roster specs from a RON file.
    ///
    /// RON format: `Vec<CharacterSpec>`
    pub fn load(path: &Path) -> LoadResult<Vec<CharacterSpec>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Vec<CharacterSpec>> {
        let specs: Vec<CharacterSpec> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;
        debug!(count = specs.len(), "parsed roster");
        Ok(specs)
    }

    /// Roster shipped with the crate.
    pub fn embedded() -> LoadResult<Vec<CharacterSpec>> {
        Self::parse(EMBEDDED)
    }

    /// Parses and builds every character.
    pub fn build_all(specs: &[CharacterSpec]) -> LoadResult<Vec<Character>> {
        specs.iter().map(CharacterSpec::build).collect()
    }
}
