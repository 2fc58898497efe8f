//! Deterministic turn-based combat rules.
//!
//! `skirmish-core` defines the combat data model (characters built from
//! health and resource components plus a list of abilities) and the
//! resolution logic shared by every front end. Abilities are resolved through
//! two stateless services, [`combat::DamageCalculator`] and
//! [`combat::TargetSelection`], which are lent to each activation as
//! [`ability::CombatServices`].
//!
//! Session-level state (the roster and the round counter) lives in
//! [`engine::Encounter`]; a single pair of characters can also fight directly
//! through [`Character::attack`] and [`Character::use_ability`].
pub mod ability;
pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod state;
pub mod stats;

pub use ability::{
    Ability, AbilityKind, Buff, CombatServices, Debuff, MeleeAttack, SpellCast, SpellMode,
};
pub use combat::{
    ActivationReport, AppliedValue, DamageCalculator, DamageType, Disposition, TargetOutcome,
    TargetRule, TargetSelection,
};
pub use config::{CombatConfig, DamageTable};
pub use engine::{Encounter, RoundSummary};
pub use error::{CombatError, ErrorSeverity, GameError};
pub use state::{
    ArcaneMana, ArmoredHealth, Character, CharacterId, Combatants, Duel, HealthComponent, Meter,
    RageEnergy, ResourceComponent, Roster, StandardHealth, StatusEffect, StatusEffects, Team,
    TurnSummary,
};
pub use stats::{Attributes, StatKind, StatModifier};
