use skirmish_core::{
    Ability, AppliedValue, ArcaneMana, ArmoredHealth, Attributes, Buff, Character, CharacterId,
    CombatConfig, CombatError, CombatServices, DamageCalculator, DamageType, Debuff, Encounter,
    RageEnergy, SpellCast, StandardHealth, StatModifier, TargetRule, TargetSelection, Team,
};

fn services<'a>(
    damage: &'a DamageCalculator,
    targeting: &'a TargetSelection,
) -> CombatServices<'a> {
    CombatServices::new(damage, targeting)
}

fn dummy(name: &str) -> Character {
    Character::new(name, 1, StandardHealth::new(100, 100), ArcaneMana::full(0)).with_team(Team(1))
}

#[test]
fn melee_hit_reduces_standard_health() {
    let damage = DamageCalculator::default();
    let targeting = TargetSelection::new();
    let mut fighter = Character::new("Fighter", 1, StandardHealth::full(100), ArcaneMana::full(0))
        .with_ability(Ability::melee("Slash", 0, 20));
    let mut target = dummy("Target");

    let report = fighter
        .use_ability("Slash", &mut target, &services(&damage, &targeting))
        .unwrap();

    assert_eq!(target.health.current(), 80);
    assert_eq!(report.total_damage(), 20);
}

#[test]
fn second_spell_fails_without_mana() {
    let damage = DamageCalculator::default();
    let targeting = TargetSelection::new();
    let services = services(&damage, &targeting);
    let mut mage = Character::new("Mage", 1, StandardHealth::full(60), ArcaneMana::new(50, 50))
        .with_ability(Ability::spell(
            "Fireball",
            30,
            SpellCast::damage("fireball", 10, DamageType::Fire),
        ));
    let mut target = dummy("Target");

    mage.use_ability("Fireball", &mut target, &services).unwrap();
    assert_eq!(mage.resource.current(), 20);
    assert_eq!(target.health.current(), 90);

    let second = mage.use_ability("Fireball", &mut target, &services);
    assert_eq!(
        second,
        Err(CombatError::InsufficientResource {
            required: 30,
            available: 20
        })
    );
    assert_eq!(mage.resource.current(), 20);
    assert_eq!(target.health.current(), 90);
}

#[test]
fn unknown_ability_leaves_both_untouched() {
    let damage = DamageCalculator::default();
    let targeting = TargetSelection::new();
    let mut caster = Character::new("Caster", 1, StandardHealth::full(50), ArcaneMana::full(40));
    let mut target = dummy("Target");
    let (caster_before, target_before) = (caster.clone(), target.clone());

    let result = caster.use_ability("Meteor", &mut target, &services(&damage, &targeting));

    assert_eq!(result, Err(CombatError::ability_not_found("Meteor")));
    assert_eq!(caster, caster_before);
    assert_eq!(target, target_before);
}

#[test]
fn debuff_reverts_after_its_duration() {
    let damage = DamageCalculator::default();
    let targeting = TargetSelection::new();
    let mut hexer = Character::new("Hexer", 1, StandardHealth::full(50), ArcaneMana::full(40))
        .with_ability(Ability::debuff(
            "Weaken",
            10,
            Debuff::new("weakened", 3, StatModifier::power(-4)),
        ));
    let mut target = dummy("Target").with_attributes(Attributes::new(10, 5));

    hexer
        .use_ability("Weaken", &mut target, &services(&damage, &targeting))
        .unwrap();
    assert_eq!(target.effective_attributes().power, 6);

    target.end_turn();
    target.end_turn();
    assert_eq!(target.effective_attributes().power, 6);

    let third = target.end_turn();
    assert_eq!(third.expired.len(), 1);
    assert_eq!(target.effective_attributes(), Attributes::new(10, 5));
}

#[test]
fn buff_applies_and_removes_symmetrically() {
    let mut knight = dummy("Knight").with_attributes(Attributes::new(4, 4));
    let ward = Buff::new("Ward", 5, StatModifier::defense(8));

    ward.apply(&mut knight);
    assert_eq!(knight.effective_attributes().defense, 12);
    assert!(ward.remove(&mut knight));
    assert_eq!(knight.effective_attributes(), knight.attributes);
}

#[test]
fn armored_health_takes_less_than_standard() {
    let damage = DamageCalculator::default();
    let targeting = TargetSelection::new();
    let services = services(&damage, &targeting);
    let mut attacker = Character::new("Brute", 1, StandardHealth::full(100), ArcaneMana::full(0))
        .with_ability(Ability::melee("Smash", 0, 40));
    let mut plain = dummy("Plain");
    let mut plated = Character::new("Plated", 1, ArmoredHealth::full(100), ArcaneMana::full(0))
        .with_team(Team(1));

    attacker.use_ability("Smash", &mut plain, &services).unwrap();
    attacker.use_ability("Smash", &mut plated, &services).unwrap();

    assert_eq!(plain.health.current(), 60);
    assert_eq!(plated.health.current(), 70);
}

#[test]
fn lethal_hit_floors_health_at_zero() {
    let damage = DamageCalculator::default();
    let targeting = TargetSelection::new();
    let services = services(&damage, &targeting);
    let mut executioner =
        Character::new("Executioner", 1, StandardHealth::full(100), ArcaneMana::full(0))
            .with_ability(Ability::melee("Behead", 0, 500));
    let mut target = dummy("Target");

    let report = executioner.use_ability("Behead", &mut target, &services).unwrap();

    assert_eq!(target.health.current(), 0);
    assert!(!target.is_alive());
    assert_eq!(report.defeated().collect::<Vec<_>>(), vec![CharacterId(1)]);
    assert_eq!(
        executioner.attack(&mut target, &services),
        Err(CombatError::DeadActor)
    );
}

#[test]
fn area_spell_hits_every_living_enemy() {
    let mut encounter = Encounter::new(&CombatConfig::default());
    let sorcerer = encounter.add(
        Character::new("Sorcerer", 1, StandardHealth::full(50), ArcaneMana::full(100))
            .with_ability(
                Ability::spell("Blizzard", 40, SpellCast::damage("blizzard", 12, DamageType::Cold))
                    .with_targeting(TargetRule::Area),
            ),
    );
    let ally = encounter.add(Character::new("Ally", 1, StandardHealth::full(50), ArcaneMana::full(0)));
    let wolf = encounter.add(dummy("Wolf"));
    let bear = encounter.add(dummy("Bear"));
    let fallen = encounter.add(
        Character::new("Fallen", 1, StandardHealth::new(0, 50), ArcaneMana::full(0))
            .with_team(Team(1)),
    );

    let report = encounter.use_ability(sorcerer, "Blizzard", wolf).unwrap();

    let hit: Vec<_> = report.outcomes.iter().map(|o| o.target).collect();
    assert_eq!(hit, vec![wolf, bear]);
    assert_eq!(report.resource_spent, 40);
    assert_eq!(encounter.character(ally).map(|c| c.health.current()), Some(50));
    assert_eq!(encounter.character(fallen).map(|c| c.health.current()), Some(0));
}

#[test]
fn cooldown_spans_turns() {
    let mut encounter = Encounter::new(&CombatConfig::default());
    let warrior = encounter.add(
        Character::new("Warrior", 1, StandardHealth::full(100), RageEnergy::new(100, 100))
            .with_ability(Ability::melee("Whirlwind", 10, 8).with_cooldown(2)),
    );
    let post = encounter.add(dummy("Post"));

    encounter.use_ability(warrior, "Whirlwind", post).unwrap();
    encounter.end_round();
    assert_eq!(
        encounter.use_ability(warrior, "Whirlwind", post),
        Err(CombatError::OnCooldown { remaining: 1 })
    );

    let summary = encounter.end_round();
    assert_eq!(summary.turns[0].1.ready, vec!["Whirlwind".to_string()]);
    assert!(encounter.use_ability(warrior, "Whirlwind", post).is_ok());
}

#[test]
fn rage_fills_from_combat_and_decays() {
    let mut encounter = Encounter::new(&CombatConfig::default());
    let berserker = encounter.add(
        Character::new("Berserker", 1, StandardHealth::full(100), RageEnergy::empty(100))
            .with_ability(Ability::melee("Cleave", 0, 20)),
    );
    let raider = encounter.add(
        Character::new("Raider", 1, StandardHealth::full(100), RageEnergy::empty(100))
            .with_team(Team(1)),
    );

    encounter.use_ability(berserker, "Cleave", raider).unwrap();
    assert_eq!(encounter.character(berserker).map(|c| c.resource.current()), Some(10));
    assert_eq!(encounter.character(raider).map(|c| c.resource.current()), Some(20));

    encounter.end_round();
    assert_eq!(encounter.character(berserker).map(|c| c.resource.current()), Some(5));
    assert_eq!(encounter.character(raider).map(|c| c.resource.current()), Some(15));
}

#[test]
fn heal_on_enemy_is_an_invalid_target() {
    let mut encounter = Encounter::new(&CombatConfig::default());
    let cleric = encounter.add(
        Character::new("Cleric", 1, StandardHealth::full(50), ArcaneMana::full(50))
            .with_ability(Ability::spell("Renew", 15, SpellCast::heal("renew", 10))),
    );
    let enemy = encounter.add(dummy("Enemy"));

    assert_eq!(
        encounter.use_ability(cleric, "Renew", enemy),
        Err(CombatError::InvalidTarget)
    );
    assert_eq!(encounter.character(cleric).map(|c| c.resource.current()), Some(50));
}

#[test]
fn services_drive_identical_results() {
    let damage = DamageCalculator::default();
    let targeting = TargetSelection::new();
    let services = services(&damage, &targeting);
    let build = || {
        Character::new("Twin", 3, StandardHealth::full(200), ArcaneMana::full(0))
            .with_attributes(Attributes::new(5, 3))
            .with_ability(Ability::melee("Jab", 0, 11))
    };

    let (mut left, mut right) = (build(), build().with_team(Team(1)));
    let first = left.use_ability("Jab", &mut right, &services).unwrap();
    let (mut left, mut right) = (build(), build().with_team(Team(1)));
    let second = left.use_ability("Jab", &mut right, &services).unwrap();

    assert_eq!(first, second);
    assert!(matches!(
        first.outcomes[0].value,
        AppliedValue::Damage { planned, .. } if planned == 17
    ));
}
