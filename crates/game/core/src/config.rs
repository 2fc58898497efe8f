/// Combat balance parameters and compile-time limits.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Parameters consumed by [`crate::combat::DamageCalculator`].
    pub damage: DamageTable,
}

impl CombatConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of timed modifiers active on one character.
    pub const MAX_STATUS_EFFECTS: usize = 8;
    /// Soft limit on abilities per character; loaders reject longer lists.
    pub const MAX_ABILITIES: usize = 16;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_damage(damage: DamageTable) -> Self {
        Self { damage }
    }
}

/// Damage formula parameters.
///
/// ```text
/// scaled = base + base * level_scaling_percent * (level - 1) / 100
/// final  = max(scaled + power - defense / defense_divisor, minimum_damage)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DamageTable {
    /// Percentage of base damage gained per caster level above 1.
    pub level_scaling_percent: u32,
    /// Target defense is divided by this before being subtracted. Zero is treated as 1.
    pub defense_divisor: u32,
    /// Floor applied to every computed hit.
    pub minimum_damage: u32,
    /// Base damage of the ability-less strike used by `attack`.
    pub unarmed_damage: u32,
}

impl DamageTable {
    pub const DEFAULT_LEVEL_SCALING_PERCENT: u32 = 10;
    pub const DEFAULT_DEFENSE_DIVISOR: u32 = 2;
    pub const DEFAULT_MINIMUM_DAMAGE: u32 = 0;
    pub const DEFAULT_UNARMED_DAMAGE: u32 = 5;

    pub const fn new() -> Self {
        Self {
            level_scaling_percent: Self::DEFAULT_LEVEL_SCALING_PERCENT,
            defense_divisor: Self::DEFAULT_DEFENSE_DIVISOR,
            minimum_damage: Self::DEFAULT_MINIMUM_DAMAGE,
            unarmed_damage: Self::DEFAULT_UNARMED_DAMAGE,
        }
    }
}

impl Default for DamageTable {
    fn default() -> Self {
        Self::new()
    }
}
