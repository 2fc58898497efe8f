//! Combat resolution services.
//!
//! This module provides the two stateless services every ability activation
//! goes through, plus the report types an activation returns.
//!
//! # Architecture
//!
//! - **Pure Functions**: calculators never mutate characters
//! - **Used by Abilities**: `Ability::activate` borrows both services through
//!   [`crate::ability::CombatServices`]
//! - **Deterministic**: identical inputs always produce identical results
//!
//! # Core Types
//!
//! - `DamageCalculator`: damage and healing values from ability + stats
//! - `TargetSelection`: resolves the characters an ability affects
//! - `ActivationReport`: what an activation did to each target

pub mod damage;
pub mod result;
pub mod targeting;

pub use damage::{DamageCalculator, DamageType};
pub use result::{ActivationReport, AppliedValue, TargetOutcome};
pub use targeting::{Disposition, TargetRule, TargetSelection};
