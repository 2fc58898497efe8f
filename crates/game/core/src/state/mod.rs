//! Combatant state: characters and the components they own.
//!
//! - [`Character`]: aggregate root owning one health component, one resource
//!   component, its abilities and its active timed modifiers
//! - [`HealthComponent`] / [`ResourceComponent`]: replaceable pools
//! - [`StatusEffects`]: remaining-turn registry for buffs and debuffs
//! - [`Combatants`]: id-addressed view used by ability activation

pub mod character;
pub mod common;
pub mod health;
pub mod resource;
pub mod roster;
pub mod status;

pub use character::{Character, TurnSummary};
pub use common::{CharacterId, Meter, Team};
pub use health::{ArmoredHealth, HealthComponent, StandardHealth};
pub use resource::{ArcaneMana, RageEnergy, ResourceComponent};
pub use roster::{Combatants, Duel, Roster};
pub use status::{Installed, StatusEffect, StatusEffects};
