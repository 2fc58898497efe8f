use std::fmt;

/// Position of a character inside a [`super::Combatants`] set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterId(pub u32);

impl CharacterId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Allegiance used by area targeting and supportive abilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team(pub u8);

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "team {}", self.0)
    }
}

/// Bounded integer pool shared by health and resource components.
///
/// Invariant: `current <= maximum`. Every mutator clamps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Meter {
    current: u32,
    maximum: u32,
}

impl Meter {
    /// Creates a meter, clamping `current` to `maximum`.
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    pub fn empty(maximum: u32) -> Self {
        Self::new(0, maximum)
    }

    #[inline]
    pub fn current(&self) -> u32 {
        self.current
    }

    #[inline]
    pub fn maximum(&self) -> u32 {
        self.maximum
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    pub fn is_full(&self) -> bool {
        self.current == self.maximum
    }

    /// Removes up to `amount`, returning how much was removed.
    pub fn drain(&mut self, amount: u32) -> u32 {
        let removed = amount.min(self.current);
        self.current -= removed;
        removed
    }

    /// Adds up to `amount` without exceeding the maximum, returning how much was added.
    pub fn fill(&mut self, amount: u32) -> u32 {
        let added = amount.min(self.maximum - self.current);
        self.current += added;
        added
    }

    /// Removes exactly `amount` or nothing.
    pub fn try_spend(&mut self, amount: u32) -> bool {
        if self.current < amount {
            return false;
        }
        self.current -= amount;
        true
    }
}
