use std::collections::BTreeSet;

use tracing::info;

use super::Encounter;
use crate::state::{CharacterId, Combatants, Team, TurnSummary};

/// What changed when a round closed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoundSummary {
    /// The round that just ended.
    pub round: u32,
    /// Per-character turn results, living characters only.
    pub turns: Vec<(CharacterId, TurnSummary)>,
}

/// Round bookkeeping for Encounter.
impl Encounter {
    /// Closes the current round: every living character ends its turn, then
    /// the round counter advances.
    pub fn end_round(&mut self) -> RoundSummary {
        let round = self.round;
        let turns = self
            .roster
            .characters_mut()
            .iter_mut()
            .enumerate()
            .filter(|(_, character)| character.is_alive())
            .map(|(index, character)| (CharacterId(index as u32), character.end_turn()))
            .collect();

        self.round += 1;
        info!(round, "round ended");

        RoundSummary { round, turns }
    }

    /// Teams with at least one living member, in ascending order.
    pub fn living_teams(&self) -> Vec<Team> {
        self.roster
            .iter()
            .filter(|(_, character)| character.is_alive())
            .map(|(_, character)| character.team)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// True once at most one team is left standing.
    pub fn is_over(&self) -> bool {
        self.living_teams().len() <= 1
    }
}
