//! Plain-text rendering of activation results and encounter state.

use skirmish_core::{ActivationReport, AppliedValue, CharacterId, Combatants, Encounter, RoundSummary};

fn name_of(encounter: &Encounter, id: CharacterId) -> &str {
    encounter
        .character(id)
        .map(|character| character.name.as_str())
        .unwrap_or("?")
}

/// One line per activation, e.g. `Aria uses Fireball: Grub takes 24 (21/45)`.
pub fn describe(report: &ActivationReport, encounter: &Encounter) -> String {
    let caster = name_of(encounter, report.caster);
    let effects: Vec<String> = report
        .outcomes
        .iter()
        .map(|outcome| {
            let target = name_of(encounter, outcome.target);
            match &outcome.value {
                AppliedValue::Damage {
                    actual, defeated, ..
                } => {
                    let health = encounter
                        .character(outcome.target)
                        .map(|c| format!("{}/{}", c.health.current(), c.health.maximum()))
                        .unwrap_or_default();
                    let suffix = if *defeated { ", defeated" } else { "" };
                    format!("{target} takes {actual} ({health}{suffix})")
                }
                AppliedValue::Healing { actual, .. } => format!("{target} recovers {actual}"),
                AppliedValue::Modifier {
                    source,
                    duration,
                    refreshed,
                } => {
                    let verb = if *refreshed { "refreshed" } else { "gains" };
                    format!("{target} {verb} {source} ({duration} turns)")
                }
            }
        })
        .collect();

    let spent = if report.resource_spent > 0 {
        format!(" [-{}]", report.resource_spent)
    } else {
        String::new()
    };
    format!("{caster} uses {}{spent}: {}", report.ability, effects.join(", "))
}

/// Expirations and finished cooldowns from a closed round.
pub fn round_notes(summary: &RoundSummary, encounter: &Encounter) -> Vec<String> {
    let mut notes = Vec::new();
    for (id, turn) in &summary.turns {
        let name = name_of(encounter, *id);
        for effect in &turn.expired {
            notes.push(format!("  {name}: {} wears off", effect.source));
        }
        for ability in &turn.ready {
            notes.push(format!("  {name}: {ability} is ready"));
        }
    }
    notes
}

/// Final standing table.
pub fn standings(encounter: &Encounter) -> String {
    let mut table = format!(
        "{:<12} {:<7} {:>9} {:>13}\n",
        "Name", "Team", "Health", "Resource"
    );
    for (_, character) in encounter.roster().iter() {
        let health = if character.is_alive() {
            format!("{}/{}", character.health.current(), character.health.maximum())
        } else {
            "down".to_string()
        };
        let resource = format!(
            "{} {}/{}",
            character.resource.label(),
            character.resource.current(),
            character.resource.maximum()
        );
        table.push_str(&format!(
            "{:<12} {:<7} {:>9} {:>13}\n",
            character.name,
            character.team.to_string(),
            health,
            resource
        ));
    }
    table
}
