use crate::battle::calculators::calculate_damage;
use crate::battle::rng::RandomSource;
use crate::battle::state::{BattleEvent, EventBus};
use crate::combatant::Combatant;
use schema::MoveData;
use tracing::debug;

/// What one action did to its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionOutcome {
    pub damage_dealt: u16,
    pub effectiveness: f64,
}

impl ActionOutcome {
    /// Outcome of an action that did not connect.
    pub fn none() -> Self {
        Self {
            damage_dealt: 0,
            effectiveness: 1.0,
        }
    }
}

/// Execute a single attack and narrate it into `bus`.
///
/// Narration order: move used, then either the effectiveness qualifier and
/// the damage line, or the failure line when nothing was dealt, and finally
/// the defender's remaining health. The outcome still carries the real type
/// multiplier when the move fails.
/// A fainted attacker does not act and a fainted defender is not targeted;
/// both cases produce no narration.
pub fn resolve_action(
    attacker: &Combatant,
    defender: &mut Combatant,
    move_data: &MoveData,
    rng: &mut impl RandomSource,
    bus: &mut EventBus,
) -> ActionOutcome {
    if !attacker.is_alive() || !defender.is_alive() {
        return ActionOutcome::none();
    }

    bus.push(BattleEvent::MoveUsed {
        attacker: attacker.name.clone(),
        move_name: move_data.name.clone(),
    });

    let calc = calculate_damage(attacker, defender, move_data, rng);
    debug!(
        attacker = %attacker.name,
        defender = %defender.name,
        move_name = %move_data.name,
        damage = calc.damage,
        type_multiplier = calc.type_multiplier,
        stab = calc.stab,
        roll = calc.roll,
        "resolved action"
    );

    // Nothing dealt means the move failed, whatever the reason
    if calc.damage > 0 {
        if let Some(event) = BattleEvent::effectiveness(&defender.name, calc.type_multiplier) {
            bus.push(event);
        }
        bus.push(BattleEvent::DamageDealt { damage: calc.damage });
        defender.apply_damage(calc.damage);
    } else {
        bus.push(BattleEvent::MoveFailed);
    }

    bus.push(BattleEvent::HealthRemaining {
        name: defender.name.clone(),
        current: defender.current_health(),
        max: defender.max_health(),
    });

    ActionOutcome {
        damage_dealt: calc.damage,
        effectiveness: calc.type_multiplier,
    }
}
