//! Data-driven content definitions and loaders.
//!
//! This crate houses the default combat content and provides loaders for
//! RON/TOML data files:
//! - Combat balance configuration (TOML)
//! - Character rosters (RON)
//! - Scripted scenarios (RON)
//!
//! Every loader can read from a path, parse a string, or fall back to the
//! content embedded in the binary.

pub mod loaders;

pub use loaders::{
    CharacterSpec, Command, ConfigLoader, HealthSpec, LoadResult, ResourceSpec, RosterLoader,
    Scenario, ScenarioLoader,
};
