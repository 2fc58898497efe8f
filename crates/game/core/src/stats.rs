//! Character attributes and the flat modifiers that buffs and debuffs install.
//!
//! Base attributes are stored on the character; effective attributes are
//! always recomputed as `base + sum(active modifiers)`, floored at zero. Since
//! nothing caches the effective value, removing a modifier restores the
//! baseline exactly.

/// Base combat attributes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Attributes {
    /// Added to every damaging hit; half of it is added to healing.
    pub power: u32,
    /// Subtracted (after division) from incoming non-true damage.
    pub defense: u32,
}

impl Attributes {
    pub const fn new(power: u32, defense: u32) -> Self {
        Self { power, defense }
    }

    pub const fn get(&self, stat: StatKind) -> u32 {
        match stat {
            StatKind::Power => self.power,
            StatKind::Defense => self.defense,
        }
    }

    /// Applies modifiers on top of these attributes.
    pub fn with_modifiers<'a>(self, modifiers: impl IntoIterator<Item = &'a StatModifier>) -> Self {
        let mut power = i64::from(self.power);
        let mut defense = i64::from(self.defense);

        for modifier in modifiers {
            match modifier.stat {
                StatKind::Power => power += i64::from(modifier.delta),
                StatKind::Defense => defense += i64::from(modifier.delta),
            }
        }

        Self {
            power: clamp_to_u32(power),
            defense: clamp_to_u32(defense),
        }
    }
}

fn clamp_to_u32(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}

/// Attribute a modifier targets.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatKind {
    Power,
    Defense,
}

/// Flat signed change to one attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatModifier {
    pub stat: StatKind,
    pub delta: i32,
}

impl StatModifier {
    pub const fn new(stat: StatKind, delta: i32) -> Self {
        Self { stat, delta }
    }

    pub const fn power(delta: i32) -> Self {
        Self::new(StatKind::Power, delta)
    }

    pub const fn defense(delta: i32) -> Self {
        Self::new(StatKind::Defense, delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_sum_and_floor_at_zero() {
        let base = Attributes::new(4, 6);
        let modifiers = [
            StatModifier::power(3),
            StatModifier::defense(-10),
            StatModifier::power(-1),
        ];

        let effective = base.with_modifiers(&modifiers);

        assert_eq!(effective, Attributes::new(6, 0));
        assert_eq!(effective.get(StatKind::Power), 6);
    }

    #[test]
    fn stat_kind_parses_case_insensitively() {
        assert_eq!("DEFENSE".parse::<StatKind>().unwrap(), StatKind::Defense);
        assert_eq!(StatKind::Power.to_string(), "power");
    }
}
