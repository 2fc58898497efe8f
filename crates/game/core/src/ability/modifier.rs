//! Buffs and debuffs.
//!
//! Both install a [`StatusEffect`] keyed by their description on the target
//! and revert it on removal. Expiry is driven by `Character::end_turn`; the
//! ability itself keeps no per-target state.

use crate::state::{Character, Installed, StatusEffect};
use crate::stats::StatModifier;

/// Helpful timed modifier for the caster or an ally.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Buff {
    pub description: String,
    /// Turns the modifier stays active.
    pub duration: u32,
    pub modifier: StatModifier,
}

/// Harmful timed modifier for an enemy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Debuff {
    pub description: String,
    pub duration: u32,
    pub modifier: StatModifier,
}

impl Buff {
    pub fn new(description: impl Into<String>, duration: u32, modifier: StatModifier) -> Self {
        Self {
            description: description.into(),
            duration,
            modifier,
        }
    }

    pub fn apply(&self, target: &mut Character) -> Installed {
        install(target, &self.description, self.duration, self.modifier, false)
    }

    /// Reverts the modifier; false if it was not active.
    pub fn remove(&self, target: &mut Character) -> bool {
        target.remove_effect(&self.description).is_some()
    }
}

impl Debuff {
    pub fn new(description: impl Into<String>, duration: u32, modifier: StatModifier) -> Self {
        Self {
            description: description.into(),
            duration,
            modifier,
        }
    }

    pub fn apply(&self, target: &mut Character) -> Installed {
        install(target, &self.description, self.duration, self.modifier, true)
    }

    pub fn remove(&self, target: &mut Character) -> bool {
        target.remove_effect(&self.description).is_some()
    }
}

fn install(
    target: &mut Character,
    source: &str,
    duration: u32,
    modifier: StatModifier,
    harmful: bool,
) -> Installed {
    target.install_effect(StatusEffect {
        source: source.to_string(),
        modifier,
        harmful,
        remaining: duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ArmoredHealth, RageEnergy};
    use crate::stats::Attributes;

    fn ogre() -> Character {
        Character::new("Ogre", 3, ArmoredHealth::full(150), RageEnergy::empty(100))
            .with_attributes(Attributes::new(8, 10))
    }

    #[test]
    fn debuff_apply_and_remove_restore_baseline() {
        let mut target = ogre();
        let sunder = Debuff::new("Sunder Armor", 3, StatModifier::defense(-6));

        assert_eq!(sunder.apply(&mut target), Installed::Added);
        assert_eq!(target.effective_attributes().defense, 4);
        assert!(target.effects().get("Sunder Armor").is_some_and(|e| e.harmful));

        assert!(sunder.remove(&mut target));
        assert_eq!(target.effective_attributes(), target.attributes);
        assert!(!sunder.remove(&mut target));
    }

    #[test]
    fn buff_reapplication_refreshes() {
        let mut target = ogre();
        let roar = Buff::new("Battle Roar", 2, StatModifier::power(4));

        assert_eq!(roar.apply(&mut target), Installed::Added);
        assert_eq!(roar.apply(&mut target), Installed::Refreshed);
        assert_eq!(target.effective_attributes().power, 12);
    }
}
