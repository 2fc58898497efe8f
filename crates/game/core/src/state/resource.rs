//! Resource components that gate ability use.
//!
//! Both variants share the consume/regenerate contract: consumption is
//! all-or-nothing and regeneration clamps at the maximum. They differ in what
//! refills them. Arcane mana regenerates passively every turn; rage is fed by
//! the damage events the combat loop reports and decays between turns.

use super::Meter;

/// Resource pool owned by a character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResourceComponent {
    Arcane(ArcaneMana),
    Rage(RageEnergy),
}

impl ResourceComponent {
    /// Spends exactly `amount`, or nothing when the pool is short.
    pub fn consume_mana(&mut self, amount: u32) -> bool {
        match self {
            Self::Arcane(mana) => mana.consume_mana(amount),
            Self::Rage(rage) => rage.consume_mana(amount),
        }
    }

    /// Adds up to `amount` and returns what was actually added.
    pub fn regenerate_mana(&mut self, amount: u32) -> u32 {
        match self {
            Self::Arcane(mana) => mana.regenerate_mana(amount),
            Self::Rage(rage) => rage.regenerate_mana(amount),
        }
    }

    /// Reports that this character dealt `amount` damage.
    pub fn on_damage_dealt(&mut self, amount: u32) -> u32 {
        match self {
            Self::Arcane(_) => 0,
            Self::Rage(rage) => rage.on_damage_dealt(amount),
        }
    }

    /// Reports that this character received `amount` damage.
    pub fn on_damage_taken(&mut self, amount: u32) -> u32 {
        match self {
            Self::Arcane(_) => 0,
            Self::Rage(rage) => rage.on_damage_taken(amount),
        }
    }

    /// Passive per-turn change: regeneration for mana, decay for rage.
    pub fn on_turn_end(&mut self) {
        match self {
            Self::Arcane(mana) => {
                mana.regenerate_mana(mana.regen_per_turn);
            }
            Self::Rage(rage) => {
                rage.meter.drain(rage.decay_per_turn);
            }
        }
    }

    pub fn current(&self) -> u32 {
        self.meter().current()
    }

    pub fn maximum(&self) -> u32 {
        self.meter().maximum()
    }

    /// Short label for logs and status tables.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Arcane(_) => "mana",
            Self::Rage(_) => "rage",
        }
    }

    fn meter(&self) -> &Meter {
        match self {
            Self::Arcane(mana) => &mana.meter,
            Self::Rage(rage) => &rage.meter,
        }
    }
}

impl From<ArcaneMana> for ResourceComponent {
    fn from(mana: ArcaneMana) -> Self {
        Self::Arcane(mana)
    }
}

impl From<RageEnergy> for ResourceComponent {
    fn from(rage: RageEnergy) -> Self {
        Self::Rage(rage)
    }
}

/// Mana pool with optional passive regeneration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArcaneMana {
    meter: Meter,
    regen_per_turn: u32,
}

impl ArcaneMana {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            meter: Meter::new(current, maximum),
            regen_per_turn: 0,
        }
    }

    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    pub fn with_regen(mut self, regen_per_turn: u32) -> Self {
        self.regen_per_turn = regen_per_turn;
        self
    }

    pub fn consume_mana(&mut self, amount: u32) -> bool {
        self.meter.try_spend(amount)
    }

    pub fn regenerate_mana(&mut self, amount: u32) -> u32 {
        self.meter.fill(amount)
    }
}

/// Rage pool fed by combat events.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RageEnergy {
    meter: Meter,
    dealt_percent: u32,
    taken_percent: u32,
    decay_per_turn: u32,
}

impl RageEnergy {
    pub const DEFAULT_DEALT_PERCENT: u32 = 50;
    pub const DEFAULT_TAKEN_PERCENT: u32 = 100;
    pub const DEFAULT_DECAY_PER_TURN: u32 = 5;

    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            meter: Meter::new(current, maximum),
            dealt_percent: Self::DEFAULT_DEALT_PERCENT,
            taken_percent: Self::DEFAULT_TAKEN_PERCENT,
            decay_per_turn: Self::DEFAULT_DECAY_PER_TURN,
        }
    }

    /// Rage starts empty.
    pub fn empty(maximum: u32) -> Self {
        Self::new(0, maximum)
    }

    pub fn with_rates(mut self, dealt_percent: u32, taken_percent: u32) -> Self {
        self.dealt_percent = dealt_percent;
        self.taken_percent = taken_percent;
        self
    }

    pub fn with_decay(mut self, decay_per_turn: u32) -> Self {
        self.decay_per_turn = decay_per_turn;
        self
    }

    pub fn consume_mana(&mut self, amount: u32) -> bool {
        self.meter.try_spend(amount)
    }

    pub fn regenerate_mana(&mut self, amount: u32) -> u32 {
        self.meter.fill(amount)
    }

    pub fn on_damage_dealt(&mut self, amount: u32) -> u32 {
        self.regenerate_mana(percent_of(amount, self.dealt_percent))
    }

    pub fn on_damage_taken(&mut self, amount: u32) -> u32 {
        self.regenerate_mana(percent_of(amount, self.taken_percent))
    }
}

fn percent_of(amount: u32, percent: u32) -> u32 {
    (u64::from(amount) * u64::from(percent) / 100).min(u64::from(u32::MAX)) as u32
}
