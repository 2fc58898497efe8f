//! Activation result types.

use crate::state::CharacterId;

/// Value actually applied to one target.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AppliedValue {
    /// Damage dealt. `planned` is the calculator output; `actual` is what the
    /// health component removed after mitigation and flooring.
    Damage {
        planned: u32,
        actual: u32,
        defeated: bool,
    },

    /// Health restored (capped at the maximum).
    Healing { planned: u32, actual: u32 },

    /// A timed modifier was installed or refreshed.
    Modifier {
        source: String,
        duration: u32,
        refreshed: bool,
    },
}

/// Outcome for one resolved target.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetOutcome {
    pub target: CharacterId,
    pub value: AppliedValue,
}

/// Result of a successful attack or ability activation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivationReport {
    pub ability: String,
    pub caster: CharacterId,
    /// Resource paid by the caster.
    pub resource_spent: u32,
    pub outcomes: Vec<TargetOutcome>,
}

impl ActivationReport {
    /// Sum of damage actually dealt across all targets.
    pub fn total_damage(&self) -> u32 {
        self.outcomes
            .iter()
            .map(|outcome| match outcome.value {
                AppliedValue::Damage { actual, .. } => actual,
                _ => 0,
            })
            .sum()
    }

    /// Targets brought to zero health by this activation.
    pub fn defeated(&self) -> impl Iterator<Item = CharacterId> + '_ {
        self.outcomes.iter().filter_map(|outcome| match outcome.value {
            AppliedValue::Damage { defeated: true, .. } => Some(outcome.target),
            _ => None,
        })
    }
}
