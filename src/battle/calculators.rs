use crate::battle::rng::RandomSource;
use crate::battle::type_chart::effectiveness;
use crate::combatant::Combatant;
use schema::{MoveCategory, MoveData};

/// Same-type attack bonus.
pub const STAB_MULTIPLIER: f64 = 1.5;

/// Every factor that went into one damage roll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageCalculation {
    pub damage: u16,
    pub type_multiplier: f64,
    pub stab: f64,
    pub roll: f64,
}

impl DamageCalculation {
    /// Result for a move without power: no damage, neutral multiplier.
    pub fn status() -> Self {
        Self {
            damage: 0,
            type_multiplier: 1.0,
            stab: 1.0,
            roll: 1.0,
        }
    }
}

/// Select the attacking and defending stat for a move category.
/// Physical moves use Attack/Defense; everything else uses the special pair.
pub fn attack_and_defense(attacker: &Combatant, defender: &Combatant, category: MoveCategory) -> (u16, u16) {
    match category {
        MoveCategory::Physical => (attacker.stats.attack, defender.stats.defense),
        MoveCategory::Special | MoveCategory::Status => {
            (attacker.stats.special_attack, defender.stats.special_defense)
        }
    }
}

/// (((2 * Level / 5 + 2) * Power * Attack / Defense) / 50) + 2, in real arithmetic.
pub fn base_damage(level: u8, power: u16, attack: u16, defense: u16) -> f64 {
    let level = level as f64;
    let defense = defense.max(1) as f64;
    (((2.0 * level / 5.0 + 2.0) * power as f64 * attack as f64 / defense) / 50.0) + 2.0
}

/// Apply the multipliers to a base value and truncate.
pub fn final_damage(base: f64, stab: f64, type_multiplier: f64, roll: f64) -> u16 {
    let damage = (base * stab * type_multiplier * roll).floor();
    // Float to int casts saturate, so oversized values clamp to u16::MAX
    damage as u16
}

/// Calculate the damage a move would deal, drawing the random roll only for
/// moves that have power.
pub fn calculate_damage(
    attacker: &Combatant,
    defender: &Combatant,
    move_data: &MoveData,
    rng: &mut impl RandomSource,
) -> DamageCalculation {
    let Some(power) = move_data.power else {
        return DamageCalculation::status();
    };

    let (attack, defense) = attack_and_defense(attacker, defender, move_data.category);
    let base = base_damage(attacker.level, power, attack, defense);

    let stab = if attacker.has_type(move_data.move_type) {
        STAB_MULTIPLIER
    } else {
        1.0
    };
    let type_multiplier = effectiveness(move_data.move_type, &defender.types);
    let roll = rng.damage_roll();

    DamageCalculation {
        damage: final_damage(base, stab, type_multiplier, roll),
        type_multiplier,
        stab,
        roll,
    }
}
