#[cfg(test)]
mod tests {
    use crate::battle::resolver::{ActionOutcome, resolve_action};
    use crate::battle::rng::{RandomSource, ScriptedRng};
    use crate::battle::state::{BattleEvent, EventBus};
    use crate::battle::tests::common::{TestCombatantBuilder, growl};
    use pretty_assertions::assert_eq;
    use schema::{ElementType, MoveCategory, MoveData};

    #[test]
    fn test_status_move_fails_without_damage() {
        // Arrange
        let attacker = TestCombatantBuilder::new("Charmander")
            .with_types(vec![ElementType::Fire])
            .with_all_stats(30)
            .build();
        let mut defender = TestCombatantBuilder::new("Squirtle")
            .with_types(vec![ElementType::Water])
            .with_max_health(19)
            .build();
        let mut bus = EventBus::new();

        // Act
        let outcome = resolve_action(&attacker, &mut defender, &growl(), &mut ScriptedRng::max_rolls(), &mut bus);

        // Assert
        assert_eq!(outcome, ActionOutcome::none());
        assert_eq!(defender.current_health(), 19);
        assert_eq!(
            bus.drain_messages(),
            vec![
                "Charmander used Growl!".to_string(),
                "But it failed!".to_string(),
                "Squirtle has 19/19 HP remaining.".to_string(),
            ]
        );
    }

    #[test]
    fn test_status_move_skips_effectiveness_even_against_immune_target() {
        // Arrange: a powerless Normal move aimed at a Ghost
        let attacker = TestCombatantBuilder::new("Eevee").build();
        let mut defender = TestCombatantBuilder::new("Gastly")
            .with_types(vec![ElementType::Ghost, ElementType::Poison])
            .build();
        let mut bus = EventBus::new();

        // Act
        let outcome = resolve_action(&attacker, &mut defender, &growl(), &mut ScriptedRng::max_rolls(), &mut bus);

        // Assert
        assert_eq!(outcome.effectiveness, 1.0);
        assert!(!bus.events().iter().any(|e| matches!(e, BattleEvent::Effectiveness { .. })));
        assert!(bus.events().contains(&BattleEvent::MoveFailed));
    }

    #[test]
    fn test_missing_power_is_a_status_move_whatever_the_category() {
        // Arrange
        let attacker = TestCombatantBuilder::new("Eevee").build();
        let mut defender = TestCombatantBuilder::new("Rattata").build();
        let odd_move = MoveData::new("Splash", ElementType::Water, MoveCategory::Physical, None);
        let mut rng = ScriptedRng::new(vec![0.85], vec![]);
        let mut bus = EventBus::new();

        // Act
        let outcome = resolve_action(&attacker, &mut defender, &odd_move, &mut rng, &mut bus);

        // Assert
        assert_eq!(outcome.damage_dealt, 0);
        assert_eq!(defender.current_health(), 20);
        assert!(bus.events().contains(&BattleEvent::MoveFailed));
        // No damage roll was consumed
        assert_eq!(rng.damage_roll(), 0.85);
    }
}
