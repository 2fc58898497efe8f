//! Skirmish client binary.
//!
//! Composition root:
//! 1. Configuration from the environment (`.env` supported)
//! 2. Logging to stderr and a per-session file
//! 3. Content (config, roster, scenario) from files or embedded defaults
//! 4. Scripted replay on stdout
//!
//! ```bash
//! SKIRMISH_SCENARIO=my_fight.ron RUST_LOG=skirmish_core=debug cargo run -p skirmish-client
//! ```

use anyhow::Result;
use skirmish_client::{Content, ScenarioRunner, SimConfig, logging};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let sim = SimConfig::from_env();

    let log_dir = sim.log_dir.clone().unwrap_or_else(logging::default_log_dir);
    let session_id = sim
        .session_id
        .clone()
        .unwrap_or_else(logging::generated_session_id);
    let _guard = logging::setup_logging(&log_dir, &session_id)?;

    tracing::info!("Starting skirmish client");
    let content = Content::load(&sim)?;
    tracing::info!(
        scenario = %content.scenario.name,
        characters = content.characters.len(),
        "content loaded"
    );

    let mut runner = ScenarioRunner::new(&content.config, content.characters);
    let stdout = std::io::stdout();
    runner.run(&content.scenario, &mut stdout.lock())?;

    Ok(())
}
