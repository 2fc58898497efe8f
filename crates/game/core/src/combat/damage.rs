//! Damage and healing calculation.

use crate::ability::Ability;
use crate::config::{CombatConfig, DamageTable};
use crate::state::Character;

// ============================================================================
// Damage Type
// ============================================================================

/// Damage type of a hit.
///
/// Only `True` changes the formula (it ignores defense); the others label
/// hits for reports and content.
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DamageType {
    /// Physical damage (melee, projectiles).
    #[default]
    Physical,
    /// Fire damage (burns, explosions).
    Fire,
    /// Cold damage (ice, frost).
    Cold,
    /// Lightning damage (electricity, storms).
    Lightning,
    /// Poison damage (toxins, venom).
    Poison,
    /// Arcane damage (pure magic).
    Arcane,
    /// True damage (ignores defense).
    True,
}

// ============================================================================
// Damage Calculator
// ============================================================================

/// Stateless damage formula service.
///
/// Holds only the immutable [`DamageTable`]; every method is a pure function
/// of its arguments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DamageCalculator {
    table: DamageTable,
}

impl DamageCalculator {
    pub const fn new(table: DamageTable) -> Self {
        Self { table }
    }

    pub fn from_config(config: &CombatConfig) -> Self {
        Self::new(config.damage)
    }

    pub fn table(&self) -> &DamageTable {
        &self.table
    }

    /// Base damage of the ability-less strike.
    pub fn unarmed_damage(&self) -> u32 {
        self.table.unarmed_damage
    }

    /// Calculate the damage `ability` used by `caster` deals to `target`.
    ///
    /// # Formula
    ///
    /// ```text
    /// scaled  = base + base * level_scaling_percent * (level - 1) / 100
    /// raw     = scaled + caster power
    /// reduced = raw - target defense / defense_divisor   (skipped for True damage)
    /// final   = max(reduced, minimum_damage)
    /// ```
    ///
    /// Attributes are the effective ones (buffs and debuffs included).
    /// Abilities without a damage component return 0.
    pub fn calculate_damage(&self, ability: &Ability, caster: &Character, target: &Character) -> u32 {
        let Some(base) = ability.base_damage() else {
            return 0;
        };

        let power = caster.effective_attributes().power;
        let raw = self.scaled(base, caster.level).saturating_add(power);

        let reduction = match ability.damage_type() {
            DamageType::True => 0,
            _ => target.effective_attributes().defense / self.table.defense_divisor.max(1),
        };

        raw.saturating_sub(reduction).max(self.table.minimum_damage)
    }

    /// Calculate the healing `ability` used by `caster` restores.
    ///
    /// `scaled + power / 2`, with the same level scaling as damage.
    pub fn calculate_healing(&self, ability: &Ability, caster: &Character) -> u32 {
        let Some(base) = ability.base_damage() else {
            return 0;
        };
        let power = caster.effective_attributes().power;
        self.scaled(base, caster.level).saturating_add(power / 2)
    }

    fn scaled(&self, base: u32, level: u32) -> u32 {
        let levels_above_first = u64::from(level.saturating_sub(1));
        let bonus = u64::from(base)
            .saturating_mul(u64::from(self.table.level_scaling_percent))
            .saturating_mul(levels_above_first)
            / 100;
        u32::try_from(u64::from(base).saturating_add(bonus)).unwrap_or(u32::MAX)
    }
}
