use proptest::prelude::*;
use skirmish_core::{
    ArcaneMana, ArmoredHealth, HealthComponent, RageEnergy, ResourceComponent, StandardHealth,
};

#[derive(Clone, Debug)]
enum HealthOp {
    Damage(u32),
    Heal(u32),
}

fn health_op() -> impl Strategy<Value = HealthOp> {
    prop_oneof![
        (0u32..500).prop_map(HealthOp::Damage),
        (0u32..500).prop_map(HealthOp::Heal),
    ]
}

fn health_component() -> impl Strategy<Value = HealthComponent> {
    (1u32..1000, any::<bool>()).prop_map(|(maximum, armored)| {
        if armored {
            ArmoredHealth::full(maximum).into()
        } else {
            StandardHealth::full(maximum).into()
        }
    })
}

proptest! {
    #[test]
    fn health_stays_within_bounds(
        mut health in health_component(),
        ops in prop::collection::vec(health_op(), 0..40),
    ) {
        for op in ops {
            let before = health.current();
            match op {
                HealthOp::Damage(amount) => {
                    let taken = health.take_damage(amount);
                    prop_assert!(taken <= amount);
                    prop_assert_eq!(health.current(), before - taken);
                }
                HealthOp::Heal(amount) => {
                    let restored = health.heal(amount);
                    prop_assert!(restored <= amount);
                    prop_assert_eq!(health.current(), before + restored);
                }
            }
            prop_assert!(health.current() <= health.maximum());
            prop_assert_eq!(health.is_alive(), health.current() > 0);
        }
    }

    #[test]
    fn armored_never_takes_more_than_standard(maximum in 1u32..1000, amount in 0u32..2000) {
        let mut standard = StandardHealth::full(maximum);
        let mut armored = ArmoredHealth::full(maximum);

        let standard_taken = standard.take_damage(amount);
        let armored_taken = armored.take_damage(amount);

        prop_assert!(armored_taken <= standard_taken);
    }

    #[test]
    fn failed_consume_changes_nothing(
        current in 0u32..200,
        maximum in 0u32..200,
        cost in 0u32..400,
        rage in any::<bool>(),
    ) {
        let mut pool: ResourceComponent = if rage {
            RageEnergy::new(current, maximum).into()
        } else {
            ArcaneMana::new(current, maximum).into()
        };
        let before = pool.current();

        if pool.consume_mana(cost) {
            prop_assert!(cost <= before);
            prop_assert_eq!(pool.current(), before - cost);
        } else {
            prop_assert!(cost > before);
            prop_assert_eq!(pool.current(), before);
        }
        prop_assert!(pool.current() <= pool.maximum());
    }

    #[test]
    fn resource_hooks_respect_maximum(
        maximum in 0u32..200,
        events in prop::collection::vec((0u32..300, 0u32..300), 0..20),
    ) {
        let mut pool: ResourceComponent = RageEnergy::empty(maximum).into();

        for (dealt, taken) in events {
            pool.on_damage_dealt(dealt);
            pool.on_damage_taken(taken);
            prop_assert!(pool.current() <= pool.maximum());
            pool.on_turn_end();
            prop_assert!(pool.current() <= pool.maximum());
        }
    }
}
