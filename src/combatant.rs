use schema::{CreatureTemplate, ElementType, MoveData, StatKind};
use serde::{Deserialize, Serialize};

/// Every combatant fights at this level. There is no progression.
pub const BATTLE_LEVEL: u8 = 5;

/// Level-scaled stats used by the damage formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatStats {
    pub attack: u16,
    pub defense: u16,
    pub special_attack: u16,
    pub special_defense: u16,
    pub speed: u16,
}

/// A creature instance taking part in a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub types: Vec<ElementType>,
    pub level: u8,
    pub stats: CombatStats,
    pub moves: Vec<MoveData>,
    pub sprite_front: Option<String>,
    pub sprite_back: Option<String>,
    max_health: u16,
    current_health: u16,
}

/// Derive a stat from its base value at the given level.
///
/// HP = floor(2 * Base * Level / 100) + Level + 10
/// Other Stat = floor(2 * Base * Level / 100) + 5
pub fn derive_stat(base: u16, level: u8, stat: StatKind) -> u16 {
    let scaled = (2 * base as u32 * level as u32) / 100;
    let value = match stat {
        StatKind::Hp => scaled + level as u32 + 10,
        _ => scaled + 5,
    };
    value.min(u16::MAX as u32) as u16
}

impl Combatant {
    /// Instantiate a combatant from its template at the fixed battle level.
    pub fn from_template(template: &CreatureTemplate) -> Self {
        Self::new(template, BATTLE_LEVEL)
    }

    pub fn new(template: &CreatureTemplate, level: u8) -> Self {
        let base = &template.base_stats;
        let stat = |kind: StatKind| derive_stat(base.get(kind), level, kind);

        let max_health = stat(StatKind::Hp);

        Combatant {
            name: template.name.clone(),
            types: template.types.clone(),
            level,
            stats: CombatStats {
                attack: stat(StatKind::Attack),
                defense: stat(StatKind::Defense),
                special_attack: stat(StatKind::SpecialAttack),
                special_defense: stat(StatKind::SpecialDefense),
                speed: stat(StatKind::Speed),
            },
            moves: template.moves.clone(),
            sprite_front: template.sprite_front.clone(),
            sprite_back: template.sprite_back.clone(),
            max_health,
            current_health: max_health,
        }
    }

    pub fn current_health(&self) -> u16 {
        self.current_health
    }

    pub fn max_health(&self) -> u16 {
        self.max_health
    }

    /// Subtract damage from current health, stopping at zero.
    /// Returns the health left afterwards.
    pub fn apply_damage(&mut self, amount: u16) -> u16 {
        self.current_health = self.current_health.saturating_sub(amount);
        self.current_health
    }

    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    pub fn has_type(&self, element: ElementType) -> bool {
        self.types.contains(&element)
    }

    #[cfg(test)]
    pub(crate) fn set_health(&mut self, health: u16) {
        self.current_health = health.min(self.max_health);
    }

    #[cfg(test)]
    pub(crate) fn set_max_health(&mut self, max_health: u16) {
        self.max_health = max_health;
        self.current_health = max_health;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{BaseStats, MoveCategory};

    fn template(base: u16) -> CreatureTemplate {
        CreatureTemplate {
            id: None,
            name: "Testmon".to_string(),
            types: vec![ElementType::Normal],
            base_stats: BaseStats {
                hp: base,
                attack: base,
                defense: base,
                special_attack: base,
                special_defense: base,
                speed: base,
            },
            moves: vec![MoveData::new("Tackle", ElementType::Normal, MoveCategory::Physical, Some(40))],
            sprite_front: None,
            sprite_back: None,
        }
    }

    #[rstest]
    #[case(45, StatKind::Hp, 19)] // Bulbasaur HP
    #[case(39, StatKind::Hp, 18)] // Charmander HP
    #[case(49, StatKind::Attack, 9)]
    #[case(65, StatKind::SpecialAttack, 11)]
    #[case(1, StatKind::Speed, 5)]
    #[case(1, StatKind::Hp, 15)]
    #[case(255, StatKind::Defense, 30)]
    fn test_derive_stat_at_battle_level(#[case] base: u16, #[case] stat: StatKind, #[case] expected: u16) {
        assert_eq!(derive_stat(base, BATTLE_LEVEL, stat), expected);
    }

    #[test]
    fn test_derived_stats_always_positive() {
        for base in [1u16, 5, 10, 50, 100, 255] {
            let combatant = Combatant::from_template(&template(base));
            assert!(combatant.max_health() > 0);
            let s = combatant.stats;
            for value in [s.attack, s.defense, s.special_attack, s.special_defense, s.speed] {
                assert!(value > 0, "base {} produced a zero stat", base);
            }
        }
    }

    #[test]
    fn test_new_combatant_starts_at_full_health() {
        let combatant = Combatant::from_template(&template(45));
        assert_eq!(combatant.level, BATTLE_LEVEL);
        assert_eq!(combatant.current_health(), combatant.max_health());
        assert!(combatant.is_alive());
    }

    #[test]
    fn test_apply_damage_clamps_at_zero() {
        let mut combatant = Combatant::from_template(&template(45));
        let max = combatant.max_health();

        assert_eq!(combatant.apply_damage(4), max - 4);
        assert!(combatant.is_alive());

        assert_eq!(combatant.apply_damage(max), 0);
        assert!(!combatant.is_alive());

        // Further damage keeps health at exactly zero
        assert_eq!(combatant.apply_damage(50), 0);
        assert_eq!(combatant.apply_damage(u16::MAX), 0);
        assert_eq!(combatant.current_health(), 0);
    }

    #[test]
    fn test_zero_damage_is_a_no_op() {
        let mut combatant = Combatant::from_template(&template(45));
        let before = combatant.current_health();
        assert_eq!(combatant.apply_damage(0), before);
    }
}
