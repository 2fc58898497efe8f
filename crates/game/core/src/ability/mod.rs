//! Abilities: named combat actions with a cost and an effect.
//!
//! An [`Ability`] carries the data shared by every action (name, resource
//! cost, cooldown, targeting rule) and an [`AbilityKind`] holding the
//! variant-specific payload. The variant set is closed:
//!
//! - [`MeleeAttack`]: single-target physical hit
//! - [`SpellCast`]: named spell that either damages or heals
//! - [`Buff`] / [`Debuff`]: timed attribute modifiers
//!
//! Activation lives in [`activation`]; it borrows the damage and targeting
//! services through [`CombatServices`].

pub mod activation;
pub mod kinds;
pub mod modifier;

pub use activation::CombatServices;
pub use kinds::{MeleeAttack, SpellCast, SpellMode};
pub use modifier::{Buff, Debuff};

use crate::combat::{DamageType, Disposition, TargetRule};

/// Variant-specific ability payload.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityKind {
    MeleeAttack(MeleeAttack),
    SpellCast(SpellCast),
    Buff(Buff),
    Debuff(Debuff),
}

/// A combat action owned by a character.
///
/// When deserialized without a `targeting` key, the rule defaults by kind
/// exactly as in [`Ability::new`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "AbilityDef")
)]
pub struct Ability {
    /// Lookup key. Not required to be unique; the first match wins.
    pub name: String,
    pub resource_cost: u32,
    /// Turns before the ability can be used again. Zero means no cooldown.
    pub cooldown: u32,
    pub targeting: TargetRule,
    pub kind: AbilityKind,
    #[cfg_attr(feature = "serde", serde(skip))]
    cooldown_remaining: u32,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct AbilityDef {
    name: String,
    #[serde(default)]
    resource_cost: u32,
    #[serde(default)]
    cooldown: u32,
    #[serde(default)]
    targeting: Option<TargetRule>,
    kind: AbilityKind,
}

#[cfg(feature = "serde")]
impl From<AbilityDef> for Ability {
    fn from(def: AbilityDef) -> Self {
        let ability = Self::new(def.name, def.resource_cost, def.kind).with_cooldown(def.cooldown);
        match def.targeting {
            Some(rule) => ability.with_targeting(rule),
            None => ability,
        }
    }
}

impl Ability {
    pub const BASIC_ATTACK: &'static str = "Attack";

    /// Creates an ability with the default targeting rule for its kind.
    pub fn new(name: impl Into<String>, resource_cost: u32, kind: AbilityKind) -> Self {
        let targeting = match &kind {
            AbilityKind::Buff(_) => TargetRule::SelfOnly,
            _ => TargetRule::Single,
        };
        Self {
            name: name.into(),
            resource_cost,
            cooldown: 0,
            targeting,
            kind,
            cooldown_remaining: 0,
        }
    }

    pub fn melee(name: impl Into<String>, resource_cost: u32, base_damage: u32) -> Self {
        Self::new(
            name,
            resource_cost,
            AbilityKind::MeleeAttack(MeleeAttack::new(base_damage)),
        )
    }

    pub fn spell(name: impl Into<String>, resource_cost: u32, spell: SpellCast) -> Self {
        Self::new(name, resource_cost, AbilityKind::SpellCast(spell))
    }

    pub fn buff(name: impl Into<String>, resource_cost: u32, buff: Buff) -> Self {
        Self::new(name, resource_cost, AbilityKind::Buff(buff))
    }

    pub fn debuff(name: impl Into<String>, resource_cost: u32, debuff: Debuff) -> Self {
        Self::new(name, resource_cost, AbilityKind::Debuff(debuff))
    }

    /// The ability-less strike behind `Character::attack`.
    pub fn basic_attack(base_damage: u32) -> Self {
        Self::melee(Self::BASIC_ATTACK, 0, base_damage)
    }

    pub fn with_cooldown(mut self, cooldown: u32) -> Self {
        self.cooldown = cooldown;
        self
    }

    pub fn with_targeting(mut self, targeting: TargetRule) -> Self {
        self.targeting = targeting;
        self
    }

    pub fn disposition(&self) -> Disposition {
        match &self.kind {
            AbilityKind::MeleeAttack(_) | AbilityKind::Debuff(_) => Disposition::Offensive,
            AbilityKind::SpellCast(spell) => match spell.mode {
                SpellMode::Damage => Disposition::Offensive,
                SpellMode::Heal => Disposition::Supportive,
            },
            AbilityKind::Buff(_) => Disposition::Supportive,
        }
    }

    /// Base value fed to the damage calculator, if this ability has one.
    pub fn base_damage(&self) -> Option<u32> {
        match &self.kind {
            AbilityKind::MeleeAttack(melee) => Some(melee.base_damage),
            AbilityKind::SpellCast(spell) => Some(spell.base_power),
            AbilityKind::Buff(_) | AbilityKind::Debuff(_) => None,
        }
    }

    pub fn damage_type(&self) -> DamageType {
        match &self.kind {
            AbilityKind::SpellCast(spell) => spell.damage_type,
            _ => DamageType::Physical,
        }
    }

    // ===== cooldown tracking =====

    pub fn cooldown_remaining(&self) -> u32 {
        self.cooldown_remaining
    }

    pub fn is_ready(&self) -> bool {
        self.cooldown_remaining == 0
    }

    pub(crate) fn start_cooldown(&mut self) {
        self.cooldown_remaining = self.cooldown;
    }

    /// Counts the cooldown down by one turn; true when it just finished.
    pub(crate) fn tick_cooldown(&mut self) -> bool {
        if self.cooldown_remaining == 0 {
            return false;
        }
        self.cooldown_remaining -= 1;
        self.cooldown_remaining == 0
    }
}
