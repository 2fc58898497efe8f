//! Ability activation pipeline.
//!
//! This module coordinates the execution flow:
//! 1. Validate the caster (exists, alive)
//! 2. Check the cooldown
//! 3. Validate the explicit target
//! 4. Resolve targets through [`TargetSelection`], dropping characters whose
//!    modifier registry cannot take a buff or debuff
//! 5. Pay the resource cost
//! 6. Apply the effect to every resolved target
//!
//! ## Design Principles
//!
//! - **Fail before mutate**: every check that can reject the request runs
//!   before the cost is paid, so an `Err` leaves all characters untouched
//! - **Borrowed services**: the calculator and selector are lent per call
//!   through [`CombatServices`], never stored on a character

use tracing::{debug, info, warn};

use super::{Ability, AbilityKind, SpellMode};
use crate::combat::{
    ActivationReport, AppliedValue, DamageCalculator, TargetOutcome, TargetRule, TargetSelection,
};
use crate::error::CombatError;
use crate::state::{CharacterId, Combatants, Installed};

/// Stateless services an activation borrows for its duration.
#[derive(Clone, Copy, Debug)]
pub struct CombatServices<'a> {
    pub damage: &'a DamageCalculator,
    pub targeting: &'a TargetSelection,
}

impl<'a> CombatServices<'a> {
    pub fn new(damage: &'a DamageCalculator, targeting: &'a TargetSelection) -> Self {
        Self { damage, targeting }
    }
}

// ============================================================================
// Entry Points
// ============================================================================

/// Basic strike: a zero-cost melee hit with the table's unarmed damage.
pub fn attack<C: Combatants + ?Sized>(
    combatants: &mut C,
    attacker: CharacterId,
    target: CharacterId,
    services: &CombatServices<'_>,
) -> Result<ActivationReport, CombatError> {
    Ability::basic_attack(services.damage.unarmed_damage()).activate(
        combatants,
        attacker,
        target,
        services,
    )
}

/// Looks up the caster's first ability named `name`, activates it and starts
/// its cooldown.
pub fn use_ability<C: Combatants + ?Sized>(
    combatants: &mut C,
    caster: CharacterId,
    name: &str,
    target: CharacterId,
    services: &CombatServices<'_>,
) -> Result<ActivationReport, CombatError> {
    let owner = combatants
        .get(caster)
        .ok_or(CombatError::CharacterNotFound(caster))?;
    let index = owner
        .find_ability_index(name)
        .ok_or_else(|| CombatError::ability_not_found(name))?;
    let ability = owner.abilities()[index].clone();

    let report = ability.activate(combatants, caster, target, services)?;

    if let Some(owned) = combatants
        .get_mut(caster)
        .and_then(|character| character.ability_mut(index))
    {
        owned.start_cooldown();
    }

    Ok(report)
}

// ============================================================================
// Pipeline
// ============================================================================

impl Ability {
    /// Runs the activation pipeline.
    ///
    /// The cooldown is checked but not started; [`use_ability`] starts it
    /// on the caster's own copy.
    ///
    /// ## Errors
    /// - `CharacterNotFound`: caster or explicit target id is unknown
    /// - `DeadActor`: caster is dead, or the single explicit target is dead
    /// - `OnCooldown`: the ability was used too recently
    /// - `InvalidTarget`: no eligible target remains, including when every
    ///   selected target's modifier registry is full
    /// - `InsufficientResource`: the caster cannot pay
    pub fn activate<C: Combatants + ?Sized>(
        &self,
        combatants: &mut C,
        caster: CharacterId,
        target: CharacterId,
        services: &CombatServices<'_>,
    ) -> Result<ActivationReport, CombatError> {
        // 1. Caster
        let owner = combatants
            .get(caster)
            .ok_or(CombatError::CharacterNotFound(caster))?;
        if !owner.is_alive() {
            return Err(CombatError::DeadActor);
        }

        // 2. Cooldown
        if !self.is_ready() {
            return Err(CombatError::OnCooldown {
                remaining: self.cooldown_remaining(),
            });
        }

        // 3. Explicit target
        let chosen = combatants
            .get(target)
            .ok_or(CombatError::CharacterNotFound(target))?;
        if self.targeting == TargetRule::Single && !chosen.is_alive() {
            return Err(CombatError::DeadActor);
        }

        // 4. Targets
        let mut targets = services
            .targeting
            .select_targets(&*combatants, caster, self, target)?;
        if let Some(source) = self.modifier_source() {
            targets.retain(|&id| {
                let room = combatants
                    .get(id)
                    .is_some_and(|character| character.effects().has_room_for(source));
                if !room {
                    warn!(ability = %self.name, target = %id, effect = source, "modifier registry full");
                }
                room
            });
            if targets.is_empty() {
                return Err(CombatError::InvalidTarget);
            }
        }

        // 5. Cost
        let pool = &mut combatants
            .get_mut(caster)
            .ok_or(CombatError::CharacterNotFound(caster))?
            .resource;
        let available = pool.current();
        if !pool.consume_mana(self.resource_cost) {
            debug!(ability = %self.name, required = self.resource_cost, available, "cannot pay");
            return Err(CombatError::InsufficientResource {
                required: self.resource_cost,
                available,
            });
        }

        // 6. Effects
        let outcomes = targets
            .into_iter()
            .filter_map(|id| {
                self.apply_to(combatants, caster, id, services)
                    .map(|value| TargetOutcome { target: id, value })
            })
            .collect();

        Ok(ActivationReport {
            ability: self.name.clone(),
            caster,
            resource_spent: self.resource_cost,
            outcomes,
        })
    }

    fn apply_to<C: Combatants + ?Sized>(
        &self,
        combatants: &mut C,
        caster: CharacterId,
        target: CharacterId,
        services: &CombatServices<'_>,
    ) -> Option<AppliedValue> {
        match &self.kind {
            AbilityKind::MeleeAttack(_) => self.strike(combatants, caster, target, services),
            AbilityKind::SpellCast(spell) => match spell.mode {
                SpellMode::Damage => self.strike(combatants, caster, target, services),
                SpellMode::Heal => self.mend(combatants, caster, target, services),
            },
            AbilityKind::Buff(buff) => {
                let installed = buff.apply(combatants.get_mut(target)?);
                self.modifier_outcome(&buff.description, buff.duration, installed, target)
            }
            AbilityKind::Debuff(debuff) => {
                let installed = debuff.apply(combatants.get_mut(target)?);
                self.modifier_outcome(&debuff.description, debuff.duration, installed, target)
            }
        }
    }

    fn modifier_source(&self) -> Option<&str> {
        match &self.kind {
            AbilityKind::Buff(buff) => Some(&buff.description),
            AbilityKind::Debuff(debuff) => Some(&debuff.description),
            _ => None,
        }
    }

    fn strike<C: Combatants + ?Sized>(
        &self,
        combatants: &mut C,
        caster: CharacterId,
        target: CharacterId,
        services: &CombatServices<'_>,
    ) -> Option<AppliedValue> {
        let planned = services.damage.calculate_damage(
            self,
            combatants.get(caster)?,
            combatants.get(target)?,
        );

        let victim = combatants.get_mut(target)?;
        let actual = victim.health.take_damage(planned);
        victim.resource.on_damage_taken(actual);
        let defeated = !victim.is_alive();
        info!(
            ability = %self.name,
            %caster,
            %target,
            planned,
            actual,
            remaining = victim.health.current(),
            "damage dealt"
        );
        if defeated {
            info!(character = %victim.name, "defeated");
        }

        if let Some(attacker) = combatants.get_mut(caster) {
            attacker.resource.on_damage_dealt(actual);
        }

        Some(AppliedValue::Damage {
            planned,
            actual,
            defeated,
        })
    }

    fn mend<C: Combatants + ?Sized>(
        &self,
        combatants: &mut C,
        caster: CharacterId,
        target: CharacterId,
        services: &CombatServices<'_>,
    ) -> Option<AppliedValue> {
        let planned = services
            .damage
            .calculate_healing(self, combatants.get(caster)?);
        let actual = combatants.get_mut(target)?.health.heal(planned);
        info!(ability = %self.name, %caster, %target, planned, actual, "healed");

        Some(AppliedValue::Healing { planned, actual })
    }

    fn modifier_outcome(
        &self,
        source: &str,
        duration: u32,
        installed: Installed,
        target: CharacterId,
    ) -> Option<AppliedValue> {
        // Targets without room were dropped before payment.
        if installed == Installed::Rejected {
            return None;
        }
        info!(ability = %self.name, %target, effect = source, duration, "modifier applied");
        Some(AppliedValue::Modifier {
            source: source.to_string(),
            duration,
            refreshed: installed == Installed::Refreshed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::{Buff, Debuff, SpellCast};
    use crate::combat::DamageType;
    use crate::config::CombatConfig;
    use crate::state::{
        ArcaneMana, ArmoredHealth, Character, RageEnergy, Roster, StandardHealth, StatusEffect,
        Team,
    };
    use crate::stats::StatModifier;

    struct Fixture {
        damage: DamageCalculator,
        targeting: TargetSelection,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                damage: DamageCalculator::default(),
                targeting: TargetSelection::new(),
            }
        }

        fn services(&self) -> CombatServices<'_> {
            CombatServices::new(&self.damage, &self.targeting)
        }
    }

    fn mage() -> Character {
        Character::new("Mage", 1, StandardHealth::full(60), ArcaneMana::full(50))
            .with_ability(Ability::spell(
                "Fireball",
                30,
                SpellCast::damage("fireball", 15, DamageType::Fire),
            ))
            .with_ability(Ability::spell("Mend", 10, SpellCast::heal("mend", 10)))
    }

    fn berserker() -> Character {
        Character::new("Berserker", 1, ArmoredHealth::full(100), RageEnergy::empty(100))
            .with_team(Team(1))
            .with_ability(Ability::melee("Rend", 20, 12).with_cooldown(2))
    }

    #[test]
    fn spell_spends_mana_and_damages() {
        let fixture = Fixture::new();
        let mut roster: Roster = [mage(), berserker()].into_iter().collect();

        let report = use_ability(
            &mut roster,
            CharacterId(0),
            "Fireball",
            CharacterId(1),
            &fixture.services(),
        )
        .unwrap();

        assert_eq!(report.resource_spent, 30);
        // 15 damage, armored mitigation 25% floors to 11
        assert_eq!(report.total_damage(), 11);
        assert_eq!(roster.characters()[0].resource.current(), 20);
        assert_eq!(roster.characters()[1].health.current(), 89);
    }

    #[test]
    fn rage_builds_on_both_sides() {
        let fixture = Fixture::new();
        let mut roster: Roster = [
            berserker(),
            berserker().with_team(Team(2)),
        ]
        .into_iter()
        .collect();

        attack(&mut roster, CharacterId(0), CharacterId(1), &fixture.services()).unwrap();

        // unarmed 5 mitigated to 3: dealer gains 1, victim gains 3
        assert_eq!(roster.characters()[0].resource.current(), 1);
        assert_eq!(roster.characters()[1].resource.current(), 3);
    }

    #[test]
    fn insufficient_resource_changes_nothing() {
        let fixture = Fixture::new();
        let mut roster: Roster = [berserker(), mage()].into_iter().collect();
        let before = roster.clone();

        let result = use_ability(
            &mut roster,
            CharacterId(0),
            "Rend",
            CharacterId(1),
            &fixture.services(),
        );

        assert_eq!(
            result,
            Err(CombatError::InsufficientResource {
                required: 20,
                available: 0
            })
        );
        assert_eq!(roster, before);
    }

    #[test]
    fn cooldown_blocks_reuse_until_ticked() {
        let fixture = Fixture::new();
        let mut roster: Roster = [
            Character::new("Brute", 1, StandardHealth::full(100), RageEnergy::new(100, 100))
                .with_ability(Ability::melee("Rend", 20, 12).with_cooldown(1)),
            mage().with_team(Team(1)),
        ]
        .into_iter()
        .collect();
        let services = fixture.services();

        use_ability(&mut roster, CharacterId(0), "Rend", CharacterId(1), &services).unwrap();
        assert_eq!(
            use_ability(&mut roster, CharacterId(0), "Rend", CharacterId(1), &services),
            Err(CombatError::OnCooldown { remaining: 1 })
        );

        let summary = roster.characters_mut()[0].end_turn();
        assert_eq!(summary.ready, vec!["Rend".to_string()]);
        assert!(use_ability(&mut roster, CharacterId(0), "Rend", CharacterId(1), &services).is_ok());
    }

    #[test]
    fn dead_caster_and_dead_target_are_rejected() {
        let fixture = Fixture::new();
        let corpse = Character::new("Corpse", 1, StandardHealth::new(0, 50), ArcaneMana::full(50))
            .with_team(Team(1));
        let mut roster: Roster = [mage(), corpse].into_iter().collect();
        let services = fixture.services();

        assert_eq!(
            attack(&mut roster, CharacterId(1), CharacterId(0), &services),
            Err(CombatError::DeadActor)
        );
        assert_eq!(
            use_ability(&mut roster, CharacterId(0), "Fireball", CharacterId(1), &services),
            Err(CombatError::DeadActor)
        );
        assert_eq!(roster.characters()[0].resource.current(), 50);
    }

    #[test]
    fn heal_caps_at_maximum() {
        let fixture = Fixture::new();
        let mut wounded = mage();
        wounded.health.take_damage(5);
        let mut roster: Roster = [wounded].into_iter().collect();

        let report = use_ability(
            &mut roster,
            CharacterId(0),
            "Mend",
            CharacterId(0),
            &fixture.services(),
        )
        .unwrap();

        assert_eq!(
            report.outcomes[0].value,
            AppliedValue::Healing {
                planned: 10,
                actual: 5
            }
        );
        assert_eq!(roster.characters()[0].health.current(), 60);
    }

    #[test]
    fn debuff_reports_refresh() {
        let fixture = Fixture::new();
        let hexer = mage().with_ability(Ability::debuff(
            "Hex",
            5,
            Debuff::new("hexed", 2, StatModifier::defense(-2)),
        ));
        let mut roster: Roster = [hexer, berserker()].into_iter().collect();
        let services = fixture.services();

        let first =
            use_ability(&mut roster, CharacterId(0), "Hex", CharacterId(1), &services).unwrap();
        let second =
            use_ability(&mut roster, CharacterId(0), "Hex", CharacterId(1), &services).unwrap();

        assert!(matches!(
            first.outcomes[0].value,
            AppliedValue::Modifier { refreshed: false, .. }
        ));
        assert!(matches!(
            second.outcomes[0].value,
            AppliedValue::Modifier { refreshed: true, .. }
        ));
        assert_eq!(roster.characters()[1].effects().len(), 1);
    }

    fn saturated(mut character: Character) -> Character {
        for i in 0..CombatConfig::MAX_STATUS_EFFECTS {
            character.install_effect(StatusEffect {
                source: format!("Curse {i}"),
                modifier: StatModifier::power(-1),
                harmful: true,
                remaining: 5,
            });
        }
        character
    }

    #[test]
    fn full_registry_rejects_modifier_before_payment() {
        let fixture = Fixture::new();
        let hexer = mage().with_ability(Ability::debuff(
            "Hex",
            5,
            Debuff::new("hexed", 2, StatModifier::defense(-2)),
        ));
        let mut roster: Roster = [hexer, saturated(berserker())].into_iter().collect();
        let before = roster.clone();

        let result = use_ability(
            &mut roster,
            CharacterId(0),
            "Hex",
            CharacterId(1),
            &fixture.services(),
        );

        assert_eq!(result, Err(CombatError::InvalidTarget));
        assert_eq!(roster, before);
        assert!(roster.characters()[0].abilities()[2].is_ready());
    }

    #[test]
    fn area_modifier_skips_full_registries() {
        let fixture = Fixture::new();
        let rally = mage().with_ability(
            Ability::buff("Rally", 10, Buff::new("rallied", 2, StatModifier::power(3)))
                .with_targeting(TargetRule::Area),
        );
        let mut roster: Roster = [rally, saturated(mage()), berserker()]
            .into_iter()
            .collect();

        let report = use_ability(
            &mut roster,
            CharacterId(0),
            "Rally",
            CharacterId(0),
            &fixture.services(),
        )
        .unwrap();

        assert_eq!(report.outcomes.len(), 1);
        assert_eq!(report.outcomes[0].target, CharacterId(0));
        assert!(!roster.characters()[1].effects().has("rallied"));
    }

    #[test]
    fn self_buff_ignores_explicit_target() {
        let fixture = Fixture::new();
        let guard = mage().with_ability(Ability::buff(
            "Barrier",
            0,
            Buff::new("barrier", 1, StatModifier::defense(5)),
        ));
        let mut roster: Roster = [guard, berserker()].into_iter().collect();

        let report = use_ability(
            &mut roster,
            CharacterId(0),
            "Barrier",
            CharacterId(1),
            &fixture.services(),
        )
        .unwrap();

        assert_eq!(report.outcomes[0].target, CharacterId(0));
        assert!(roster.characters()[0].effects().has("barrier"));
        assert!(roster.characters()[1].effects().is_empty());
    }
}
