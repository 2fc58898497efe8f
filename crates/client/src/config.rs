//! Client runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Settings for one scripted run.
///
/// Content paths are optional; `None` selects the content embedded in
/// `skirmish-content`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimConfig {
    pub config_path: Option<PathBuf>,
    pub roster_path: Option<PathBuf>,
    pub scenario_path: Option<PathBuf>,
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl SimConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SKIRMISH_CONFIG` - Combat balance TOML (default: embedded)
    /// - `SKIRMISH_ROSTER` - Roster RON (default: embedded)
    /// - `SKIRMISH_SCENARIO` - Scenario RON (default: embedded)
    /// - `SKIRMISH_SESSION_ID` - Log session name (default: timestamp)
    /// - `SKIRMISH_LOG_DIR` - Log root (default: platform cache dir)
    pub fn from_env() -> Self {
        Self {
            config_path: read_path("SKIRMISH_CONFIG"),
            roster_path: read_path("SKIRMISH_ROSTER"),
            scenario_path: read_path("SKIRMISH_SCENARIO"),
            session_id: env::var("SKIRMISH_SESSION_ID")
                .ok()
                .filter(|id| !id.is_empty()),
            log_dir: read_path("SKIRMISH_LOG_DIR"),
        }
    }
}

fn read_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
