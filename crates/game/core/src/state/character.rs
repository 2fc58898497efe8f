//! Character aggregate.

use tracing::info;

use super::{Duel, HealthComponent, ResourceComponent, StatusEffect, StatusEffects, Team};
use crate::ability::{Ability, CombatServices, activation};
use crate::combat::ActivationReport;
use crate::error::CombatError;
use crate::state::status::Installed;
use crate::stats::Attributes;

/// A combatant.
///
/// # Invariants
///
/// - A character always owns exactly one health and one resource component.
/// - Effective attributes are derived from `attributes` plus the active
///   modifiers in `effects`; nothing caches them.
/// - Abilities keep insertion order; lookups by name return the first match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Character {
    pub name: String,
    pub level: u32,
    pub team: Team,
    /// Base attributes, before timed modifiers.
    pub attributes: Attributes,
    pub health: HealthComponent,
    pub resource: ResourceComponent,
    abilities: Vec<Ability>,
    effects: StatusEffects,
}

/// What changed on a character during [`Character::end_turn`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnSummary {
    /// Modifiers that ran out and were reverted.
    pub expired: Vec<StatusEffect>,
    /// Abilities whose cooldown finished this turn.
    pub ready: Vec<String>,
}

impl Character {
    /// Creates a character with no abilities. Levels below 1 are raised to 1.
    pub fn new(
        name: impl Into<String>,
        level: u32,
        health: impl Into<HealthComponent>,
        resource: impl Into<ResourceComponent>,
    ) -> Self {
        Self {
            name: name.into(),
            level: level.max(1),
            team: Team::default(),
            attributes: Attributes::default(),
            health: health.into(),
            resource: resource.into(),
            abilities: Vec::new(),
            effects: StatusEffects::new(),
        }
    }

    pub fn with_team(mut self, team: Team) -> Self {
        self.team = team;
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.learn(ability);
        self
    }

    /// Appends an ability. Duplicate names are kept; lookups return the first.
    pub fn learn(&mut self, ability: Ability) {
        self.abilities.push(ability);
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health.is_alive()
    }

    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }

    pub fn find_ability(&self, name: &str) -> Option<&Ability> {
        self.abilities.iter().find(|ability| ability.name == name)
    }

    pub fn find_ability_index(&self, name: &str) -> Option<usize> {
        self.abilities.iter().position(|ability| ability.name == name)
    }

    pub(crate) fn ability_mut(&mut self, index: usize) -> Option<&mut Ability> {
        self.abilities.get_mut(index)
    }

    pub fn effects(&self) -> &StatusEffects {
        &self.effects
    }

    /// Base attributes with every active modifier applied.
    pub fn effective_attributes(&self) -> Attributes {
        self.attributes.with_modifiers(self.effects.modifiers())
    }

    /// Installs a timed modifier. Used by buffs and debuffs.
    pub fn install_effect(&mut self, effect: StatusEffect) -> Installed {
        self.effects.install(effect)
    }

    /// Reverts the modifier installed under `source`.
    pub fn remove_effect(&mut self, source: &str) -> Option<StatusEffect> {
        self.effects.remove(source)
    }

    /// Basic strike against `target` using the unarmed damage from the calculator's table.
    pub fn attack(
        &mut self,
        target: &mut Character,
        services: &CombatServices<'_>,
    ) -> Result<ActivationReport, CombatError> {
        let mut duel = Duel::new(self, target);
        activation::attack(&mut duel, Duel::CASTER, Duel::TARGET, services)
    }

    /// Uses the first ability named `name` against `target`.
    pub fn use_ability(
        &mut self,
        name: &str,
        target: &mut Character,
        services: &CombatServices<'_>,
    ) -> Result<ActivationReport, CombatError> {
        let mut duel = Duel::new(self, target);
        activation::use_ability(&mut duel, Duel::CASTER, name, Duel::TARGET, services)
    }

    /// Advances this character by one turn.
    ///
    /// Expired modifiers are reverted, cooldowns count down and the resource
    /// pool regenerates or decays.
    pub fn end_turn(&mut self) -> TurnSummary {
        let expired = self.effects.tick();
        for effect in &expired {
            info!(character = %self.name, effect = %effect.source, "effect expired");
        }

        let ready = self
            .abilities
            .iter_mut()
            .filter_map(|ability| ability.tick_cooldown().then(|| ability.name.clone()))
            .collect();

        self.resource.on_turn_end();

        TurnSummary { expired, ready }
    }
}
