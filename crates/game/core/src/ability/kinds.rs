//! Damage-dealing ability payloads.

use crate::combat::DamageType;

/// Single-target physical hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeleeAttack {
    pub base_damage: u32,
}

impl MeleeAttack {
    pub const fn new(base_damage: u32) -> Self {
        Self { base_damage }
    }
}

/// What a spell does to its targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpellMode {
    /// Runs the damage pipeline.
    #[default]
    Damage,
    /// Restores health on allies.
    Heal,
}

/// Named spell effect.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellCast {
    /// Effect name shown in reports ("fireball", "mend wounds").
    pub effect: String,
    /// Base damage, or base healing for `SpellMode::Heal`.
    pub base_power: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage_type: DamageType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mode: SpellMode,
}

impl SpellCast {
    pub fn damage(effect: impl Into<String>, base_power: u32, damage_type: DamageType) -> Self {
        Self {
            effect: effect.into(),
            base_power,
            damage_type,
            mode: SpellMode::Damage,
        }
    }

    pub fn heal(effect: impl Into<String>, base_power: u32) -> Self {
        Self {
            effect: effect.into(),
            base_power,
            damage_type: DamageType::Arcane,
            mode: SpellMode::Heal,
        }
    }
}
