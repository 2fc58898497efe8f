//! Encounter driver.
//!
//! The [`Encounter`] is the authoritative owner of a combat session: it holds
//! the roster, the two resolution services and the round counter. Actions are
//! addressed by [`CharacterId`] and routed through the same activation
//! pipeline as character-level calls; round bookkeeping lives in [`turns`].

mod turns;

pub use turns::RoundSummary;

use tracing::debug;

use crate::ability::{CombatServices, activation};
use crate::combat::{ActivationReport, DamageCalculator, TargetSelection};
use crate::config::CombatConfig;
use crate::error::CombatError;
use crate::state::{Character, CharacterId, Combatants, Roster};

/// Combat session over a growable roster.
#[derive(Clone, Debug)]
pub struct Encounter {
    roster: Roster,
    damage: DamageCalculator,
    targeting: TargetSelection,
    round: u32,
}

impl Encounter {
    pub fn new(config: &CombatConfig) -> Self {
        Self {
            roster: Roster::new(),
            damage: DamageCalculator::from_config(config),
            targeting: TargetSelection::new(),
            round: 1,
        }
    }

    /// Adds a character and returns its id.
    pub fn add(&mut self, character: Character) -> CharacterId {
        let id = self.roster.add(character);
        debug!(%id, "joined encounter");
        id
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        self.roster.get(id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<CharacterId> {
        self.roster.find_by_name(name)
    }

    pub fn damage_calculator(&self) -> &DamageCalculator {
        &self.damage
    }

    /// Current round, starting at 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Basic strike from `attacker` against `target`.
    pub fn attack(
        &mut self,
        attacker: CharacterId,
        target: CharacterId,
    ) -> Result<ActivationReport, CombatError> {
        let services = CombatServices::new(&self.damage, &self.targeting);
        activation::attack(&mut self.roster, attacker, target, &services)
    }

    /// Uses `caster`'s first ability named `name` against `target`.
    pub fn use_ability(
        &mut self,
        caster: CharacterId,
        name: &str,
        target: CharacterId,
    ) -> Result<ActivationReport, CombatError> {
        let services = CombatServices::new(&self.damage, &self.targeting);
        activation::use_ability(&mut self.roster, caster, name, target, &services)
    }
}
