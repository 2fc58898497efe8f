//! Target selection.
//!
//! Resolves the set of characters an ability affects from its targeting rule,
//! its disposition (offensive or supportive) and the caster's explicit choice:
//! - SelfOnly: the caster
//! - Single: the explicitly chosen character
//! - Area: every eligible character on the relevant side
//!
//! Dead characters are never selected. Offensive abilities never select the
//! caster unless the rule is `SelfOnly`.

use tracing::debug;

use crate::ability::Ability;
use crate::error::CombatError;
use crate::state::{CharacterId, Combatants};

// ============================================================================
// Targeting Rule
// ============================================================================

/// How an ability selects targets.
///
/// Parses from `"self"`, `"single"` and `"area"` so content and front ends
/// can pass a target type override as text.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum TargetRule {
    /// Caster only (self-buffs, meditation).
    #[strum(serialize = "self")]
    SelfOnly,

    /// One explicitly chosen character.
    #[default]
    #[strum(serialize = "single")]
    Single,

    /// Every eligible character on the affected side.
    #[strum(serialize = "area")]
    Area,
}

/// Which side an ability is meant for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Disposition {
    /// Hurts enemies: attacks, damaging spells, debuffs.
    Offensive,
    /// Helps the caster's side: heals, buffs.
    Supportive,
}

// ============================================================================
// Target Selection
// ============================================================================

/// Stateless target resolution service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TargetSelection;

impl TargetSelection {
    pub const fn new() -> Self {
        Self
    }

    /// Resolves targets using the ability's own rule.
    pub fn select_targets<C: Combatants + ?Sized>(
        &self,
        combatants: &C,
        caster: CharacterId,
        ability: &Ability,
        explicit: CharacterId,
    ) -> Result<Vec<CharacterId>, CombatError> {
        self.select_targets_as(combatants, caster, ability, explicit, ability.targeting)
    }

    /// Resolves targets with an explicit rule override.
    ///
    /// Returns `InvalidTarget` when nothing eligible remains.
    pub fn select_targets_as<C: Combatants + ?Sized>(
        &self,
        combatants: &C,
        caster: CharacterId,
        ability: &Ability,
        explicit: CharacterId,
        rule: TargetRule,
    ) -> Result<Vec<CharacterId>, CombatError> {
        let caster_team = combatants
            .get(caster)
            .ok_or(CombatError::CharacterNotFound(caster))?
            .team;
        let disposition = ability.disposition();

        let targets: Vec<CharacterId> = match rule {
            TargetRule::SelfOnly => vec![caster],
            TargetRule::Single => vec![explicit],
            TargetRule::Area => combatants
                .iter()
                .filter(|(_, character)| match disposition {
                    Disposition::Offensive => character.team != caster_team,
                    Disposition::Supportive => character.team == caster_team,
                })
                .map(|(id, _)| id)
                .collect(),
        };

        let targets: Vec<CharacterId> = targets
            .into_iter()
            .filter(|&id| {
                let Some(character) = combatants.get(id) else {
                    return false;
                };
                if !character.is_alive() {
                    return false;
                }
                match (disposition, rule) {
                    (_, TargetRule::SelfOnly) => true,
                    (Disposition::Offensive, _) => id != caster,
                    (Disposition::Supportive, _) => character.team == caster_team,
                }
            })
            .collect();

        debug!(
            ability = %ability.name,
            %caster,
            %rule,
            count = targets.len(),
            "resolved targets"
        );

        if targets.is_empty() {
            return Err(CombatError::InvalidTarget);
        }
        Ok(targets)
    }
}
