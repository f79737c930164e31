use crate::battle::rng::ScriptedRng;
use crate::battle::runner::MatchController;
use crate::combatant::{CombatStats, Combatant};
use schema::{BaseStats, CreatureTemplate, ElementType, MoveCategory, MoveData};

pub fn tackle() -> MoveData {
    MoveData::new("Tackle", ElementType::Normal, MoveCategory::Physical, Some(40))
}

pub fn scratch() -> MoveData {
    MoveData::new("Scratch", ElementType::Normal, MoveCategory::Physical, Some(40))
}

pub fn growl() -> MoveData {
    MoveData::new("Growl", ElementType::Normal, MoveCategory::Status, None)
}

pub fn ember() -> MoveData {
    MoveData::new("Ember", ElementType::Fire, MoveCategory::Special, Some(40))
}

pub fn water_gun() -> MoveData {
    MoveData::new("Water Gun", ElementType::Water, MoveCategory::Special, Some(40))
}

pub fn vine_whip() -> MoveData {
    MoveData::new("Vine Whip", ElementType::Grass, MoveCategory::Physical, Some(45))
}

pub fn thunder_shock() -> MoveData {
    MoveData::new("Thunder Shock", ElementType::Electric, MoveCategory::Special, Some(40))
}

/// Builds a template from base stats in record order
/// (hp, attack, defense, special-attack, special-defense, speed).
pub fn test_template(name: &str, types: Vec<ElementType>, base: [u16; 6], moves: Vec<MoveData>) -> CreatureTemplate {
    CreatureTemplate {
        id: None,
        name: name.to_string(),
        types,
        base_stats: BaseStats {
            hp: base[0],
            attack: base[1],
            defense: base[2],
            special_attack: base[3],
            special_defense: base[4],
            speed: base[5],
        },
        moves,
        sprite_front: Some(format!("data/sprites/{}_front.gif", name.to_lowercase())),
        sprite_back: Some(format!("data/sprites/{}_back.gif", name.to_lowercase())),
    }
}

/// The three classic starters.
/// At level 5 they derive to: Bulbasaur 19 HP, Charmander 18 HP, Squirtle 19 HP.
pub fn starter_roster() -> Vec<CreatureTemplate> {
    vec![
        test_template(
            "Bulbasaur",
            vec![ElementType::Grass, ElementType::Poison],
            [45, 49, 49, 65, 65, 45],
            vec![tackle(), growl(), vine_whip()],
        ),
        test_template(
            "Charmander",
            vec![ElementType::Fire],
            [39, 52, 43, 60, 50, 65],
            vec![scratch(), growl(), ember()],
        ),
        test_template(
            "Squirtle",
            vec![ElementType::Water],
            [44, 48, 65, 50, 64, 43],
            vec![tackle(), growl(), water_gun()],
        ),
    ]
}

/// A match over [`starter_roster`] driven by a scripted random source.
pub fn create_test_match(rng: ScriptedRng) -> MatchController<ScriptedRng> {
    match MatchController::with_rng(starter_roster(), rng) {
        Ok(controller) => controller,
        Err(err) => panic!("Failed to create test match: {}", err),
    }
}

/// A builder for combatants with directly chosen stats, bypassing the
/// level-based derivation.
///
/// # Example
/// ```ignore
/// let combatant = TestCombatantBuilder::new("Pikachu")
///     .with_types(vec![ElementType::Electric])
///     .with_all_stats(12)
///     .with_max_health(20)
///     .build();
/// ```
pub struct TestCombatantBuilder {
    name: String,
    types: Vec<ElementType>,
    stats: CombatStats,
    moves: Vec<MoveData>,
    max_health: u16,
    current_health: Option<u16>,
}

impl TestCombatantBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            types: vec![ElementType::Normal],
            stats: CombatStats {
                attack: 10,
                defense: 10,
                special_attack: 10,
                special_defense: 10,
                speed: 10,
            },
            moves: vec![tackle()],
            max_health: 20,
            current_health: None,
        }
    }

    pub fn with_types(mut self, types: Vec<ElementType>) -> Self {
        self.types = types;
        self
    }

    pub fn with_all_stats(mut self, value: u16) -> Self {
        self.stats = CombatStats {
            attack: value,
            defense: value,
            special_attack: value,
            special_defense: value,
            speed: value,
        };
        self
    }

    pub fn with_attack(mut self, value: u16) -> Self {
        self.stats.attack = value;
        self
    }

    pub fn with_defense(mut self, value: u16) -> Self {
        self.stats.defense = value;
        self
    }

    pub fn with_special_attack(mut self, value: u16) -> Self {
        self.stats.special_attack = value;
        self
    }

    pub fn with_special_defense(mut self, value: u16) -> Self {
        self.stats.special_defense = value;
        self
    }

    pub fn with_moves(mut self, moves: Vec<MoveData>) -> Self {
        self.moves = moves;
        self
    }

    pub fn with_max_health(mut self, max_health: u16) -> Self {
        self.max_health = max_health;
        self
    }

    /// Sets the current health. If not set, health will be max.
    pub fn with_hp(mut self, hp: u16) -> Self {
        self.current_health = Some(hp);
        self
    }

    pub fn build(self) -> Combatant {
        let template = test_template(&self.name, self.types, [10; 6], self.moves);
        let mut combatant = Combatant::from_template(&template);
        combatant.stats = self.stats;
        combatant.set_max_health(self.max_health);
        if let Some(hp) = self.current_health {
            combatant.set_health(hp);
        }
        combatant
    }
}
