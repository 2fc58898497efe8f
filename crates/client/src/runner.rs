//! Scripted scenario driver.

use std::io::{self, Write};

use skirmish_content::{Command, Scenario};
use skirmish_core::{
    ActivationReport, Character, CharacterId, CombatConfig, CombatError, Encounter, GameError,
};
use tracing::{info, warn};

use crate::report;

/// Why a scripted command did not run.
#[derive(Debug, thiserror::Error)]
pub enum StepError {
    #[error("no character named '{0}'")]
    UnknownCharacter(String),

    #[error(transparent)]
    Combat(#[from] CombatError),
}

/// Totals for a finished run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub rounds_played: u32,
    pub succeeded: usize,
    pub failed: usize,
}

/// Replays a [`Scenario`] against an [`Encounter`].
pub struct ScenarioRunner {
    encounter: Encounter,
}

impl ScenarioRunner {
    pub fn new(config: &CombatConfig, characters: impl IntoIterator<Item = Character>) -> Self {
        let mut encounter = Encounter::new(config);
        for character in characters {
            encounter.add(character);
        }
        Self { encounter }
    }

    pub fn encounter(&self) -> &Encounter {
        &self.encounter
    }

    /// Runs every round in order, writing one line per command.
    ///
    /// Gameplay failures are printed and counted; only output errors abort.
    /// Stops early once a single team is left standing.
    pub fn run(&mut self, scenario: &Scenario, out: &mut impl Write) -> io::Result<RunSummary> {
        let mut summary = RunSummary::default();
        writeln!(out, "== {} ==", scenario.name)?;

        for commands in &scenario.rounds {
            if self.encounter.is_over() {
                break;
            }
            writeln!(out, "-- Round {} --", self.encounter.round())?;

            for command in commands {
                match self.execute(command) {
                    Ok(outcome) => {
                        summary.succeeded += 1;
                        writeln!(out, "{}", report::describe(&outcome, &self.encounter))?;
                    }
                    Err(error) => {
                        summary.failed += 1;
                        log_failure(command, &error);
                        writeln!(out, "{} fails: {}", describe_command(command), error)?;
                    }
                }
            }

            let closed = self.encounter.end_round();
            summary.rounds_played += 1;
            for line in report::round_notes(&closed, &self.encounter) {
                writeln!(out, "{line}")?;
            }
        }

        writeln!(out)?;
        write!(out, "{}", report::standings(&self.encounter))?;
        match self.encounter.living_teams().as_slice() {
            [winner] => writeln!(out, "{winner} wins")?,
            [] => writeln!(out, "no one is left standing")?,
            _ => writeln!(out, "the fight goes on")?,
        }

        info!(
            rounds = summary.rounds_played,
            succeeded = summary.succeeded,
            failed = summary.failed,
            "scenario finished"
        );
        Ok(summary)
    }

    /// Resolves names and runs one command.
    pub fn execute(&mut self, command: &Command) -> Result<ActivationReport, StepError> {
        let actor = self.resolve(command.actor())?;
        let target = self.resolve(command.target())?;

        let report = match command {
            Command::Attack { .. } => self.encounter.attack(actor, target)?,
            Command::Use { ability, .. } => self.encounter.use_ability(actor, ability, target)?,
        };
        Ok(report)
    }

    fn resolve(&self, name: &str) -> Result<CharacterId, StepError> {
        self.encounter
            .find_by_name(name)
            .ok_or_else(|| StepError::UnknownCharacter(name.to_string()))
    }
}

fn describe_command(command: &Command) -> String {
    match command {
        Command::Attack { actor, target } => format!("{actor} attacking {target}"),
        Command::Use {
            actor,
            ability,
            target,
        } => format!("{actor} using {ability} on {target}"),
    }
}

fn log_failure(command: &Command, error: &StepError) {
    match error {
        StepError::Combat(combat) => warn!(
            actor = command.actor(),
            code = combat.error_code(),
            severity = combat.severity().as_str(),
            "command failed: {combat}"
        ),
        StepError::UnknownCharacter(name) => {
            warn!(actor = command.actor(), "unknown character {name}")
        }
    }
}
