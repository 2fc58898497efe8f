//! Health components.
//!
//! A character owns exactly one [`HealthComponent`]. The variant decides how
//! incoming damage is reduced; healing and the alive check are shared.

use super::Meter;

/// Health pool with a damage-reduction policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HealthComponent {
    /// Takes damage at face value.
    Standard(StandardHealth),
    /// Mitigates a fixed percentage of every hit.
    Armored(ArmoredHealth),
}

impl HealthComponent {
    /// Applies `amount` damage and returns the health actually removed.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        match self {
            Self::Standard(health) => health.take_damage(amount),
            Self::Armored(health) => health.take_damage(amount),
        }
    }

    /// Restores up to `amount` health, never above the maximum.
    ///
    /// Returns the health actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        self.meter_mut().fill(amount)
    }

    pub fn is_alive(&self) -> bool {
        self.current() > 0
    }

    pub fn current(&self) -> u32 {
        self.meter().current()
    }

    pub fn maximum(&self) -> u32 {
        self.meter().maximum()
    }

    fn meter(&self) -> &Meter {
        match self {
            Self::Standard(health) => &health.meter,
            Self::Armored(health) => &health.meter,
        }
    }

    fn meter_mut(&mut self) -> &mut Meter {
        match self {
            Self::Standard(health) => &mut health.meter,
            Self::Armored(health) => &mut health.meter,
        }
    }
}

impl From<StandardHealth> for HealthComponent {
    fn from(health: StandardHealth) -> Self {
        Self::Standard(health)
    }
}

impl From<ArmoredHealth> for HealthComponent {
    fn from(health: ArmoredHealth) -> Self {
        Self::Armored(health)
    }
}

/// Unmitigated health pool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StandardHealth {
    meter: Meter,
}

impl StandardHealth {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            meter: Meter::new(current, maximum),
        }
    }

    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    /// `current = max(0, current - amount)`.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.meter.drain(amount)
    }
}

/// Health pool that mitigates a percentage of every hit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArmoredHealth {
    meter: Meter,
    mitigation_percent: u8,
}

impl ArmoredHealth {
    pub const DEFAULT_MITIGATION_PERCENT: u8 = 25;

    pub fn new(current: u32, maximum: u32) -> Self {
        Self::with_mitigation(current, maximum, Self::DEFAULT_MITIGATION_PERCENT)
    }

    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    /// Creates an armored pool; `mitigation_percent` is clamped to 100.
    pub fn with_mitigation(current: u32, maximum: u32, mitigation_percent: u8) -> Self {
        Self {
            meter: Meter::new(current, maximum),
            mitigation_percent: mitigation_percent.min(100),
        }
    }

    pub fn mitigation_percent(&self) -> u8 {
        self.mitigation_percent
    }

    /// Damage that gets through the armor. Rounds down, so it never exceeds `amount`.
    pub fn mitigate(&self, amount: u32) -> u32 {
        let kept = u64::from(100 - self.mitigation_percent);
        (u64::from(amount) * kept / 100) as u32
    }

    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let reduced = self.mitigate(amount);
        self.meter.drain(reduced)
    }
}
