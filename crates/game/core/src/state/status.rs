//! Timed modifier registry for characters.
//!
//! Buffs and debuffs install a [`StatusEffect`] on their target. Each effect
//! carries the number of turns it has left; [`StatusEffects::tick`] is called
//! once per turn by the surrounding driver and returns the effects that ran
//! out so the caller can report them.

use arrayvec::ArrayVec;

use crate::config::CombatConfig;
use crate::stats::StatModifier;

/// Active timed modifiers on one character.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusEffects {
    effects: ArrayVec<StatusEffect, { CombatConfig::MAX_STATUS_EFFECTS }>,
}

/// A single modifier with its remaining duration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    /// Effect description; also the identity used for refresh and removal.
    pub source: String,
    pub modifier: StatModifier,
    /// Whether the effect came from a debuff.
    pub harmful: bool,
    /// Turns left before the effect is removed. Always at least 1 while stored.
    pub remaining: u32,
}

/// Result of installing an effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Installed {
    /// A new entry was added.
    Added,
    /// An entry with the same source existed; its duration was extended.
    Refreshed,
    /// The registry is full and the effect was dropped.
    Rejected,
}

impl StatusEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `effect`.
    ///
    /// If an effect with the same source is already active, it takes the new
    /// modifier and the longer of the two remaining durations.
    pub fn install(&mut self, mut effect: StatusEffect) -> Installed {
        effect.remaining = effect.remaining.max(1);

        if let Some(existing) = self.effects.iter_mut().find(|e| e.source == effect.source) {
            existing.remaining = existing.remaining.max(effect.remaining);
            existing.modifier = effect.modifier;
            existing.harmful = effect.harmful;
            return Installed::Refreshed;
        }

        match self.effects.try_push(effect) {
            Ok(()) => Installed::Added,
            Err(_) => Installed::Rejected,
        }
    }

    /// Whether installing under `source` would add or refresh an entry.
    pub fn has_room_for(&self, source: &str) -> bool {
        self.has(source) || !self.effects.is_full()
    }

    /// Removes the effect installed under `source`, returning it if present.
    pub fn remove(&mut self, source: &str) -> Option<StatusEffect> {
        let position = self.effects.iter().position(|e| e.source == source)?;
        Some(self.effects.remove(position))
    }

    /// Advances every effect by one turn and removes the ones that expire.
    pub fn tick(&mut self) -> Vec<StatusEffect> {
        let mut expired = Vec::new();
        let mut index = 0;
        while index < self.effects.len() {
            let effect = &mut self.effects[index];
            effect.remaining = effect.remaining.saturating_sub(1);
            if effect.remaining == 0 {
                expired.push(self.effects.remove(index));
            } else {
                index += 1;
            }
        }
        expired
    }

    pub fn get(&self, source: &str) -> Option<&StatusEffect> {
        self.effects.iter().find(|e| e.source == source)
    }

    pub fn has(&self, source: &str) -> bool {
        self.get(source).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    pub fn modifiers(&self) -> impl Iterator<Item = &StatModifier> {
        self.effects.iter().map(|e| &e.modifier)
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
