use crate::{ElementType, MoveData, MoveRecord};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Base stat substituted when a record omits one.
pub const MISSING_STAT_DEFAULT: u16 = 10;
/// A creature knows at most this many moves.
pub const MAX_MOVES: usize = 4;
/// A creature has one or two types.
pub const MAX_TYPES: usize = 2;

/// A record field that was absent and replaced by its documented default.
///
/// This never aborts loading; it is reported next to the recovered value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{record}: missing `{field}`, using default {default}")]
pub struct MissingField {
    pub record: String,
    pub field: &'static str,
    pub default: String,
}

impl MissingField {
    pub fn new(record: &str, field: &'static str, default: impl fmt::Display) -> Self {
        Self {
            record: record.to_string(),
            field,
            default: default.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl StatKind {
    fn missing_field(self) -> &'static str {
        match self {
            StatKind::Hp => "stats.hp",
            StatKind::Attack => "stats.attack",
            StatKind::Defense => "stats.defense",
            StatKind::SpecialAttack => "stats.special-attack",
            StatKind::SpecialDefense => "stats.special-defense",
            StatKind::Speed => "stats.speed",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsRecord {
    #[serde(default)]
    pub hp: Option<u16>,
    #[serde(default)]
    pub attack: Option<u16>,
    #[serde(default)]
    pub defense: Option<u16>,
    #[serde(default, rename = "special-attack", alias = "special_attack")]
    pub special_attack: Option<u16>,
    #[serde(default, rename = "special-defense", alias = "special_defense")]
    pub special_defense: Option<u16>,
    #[serde(default)]
    pub speed: Option<u16>,
}

impl StatsRecord {
    fn get(&self, stat: StatKind) -> Option<u16> {
        match stat {
            StatKind::Hp => self.hp,
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::SpecialAttack => self.special_attack,
            StatKind::SpecialDefense => self.special_defense,
            StatKind::Speed => self.speed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    #[serde(rename = "special-attack")]
    pub special_attack: u16,
    #[serde(rename = "special-defense")]
    pub special_defense: u16,
    pub speed: u16,
}

impl BaseStats {
    pub fn get(&self, stat: StatKind) -> u16 {
        match stat {
            StatKind::Hp => self.hp,
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::SpecialAttack => self.special_attack,
            StatKind::SpecialDefense => self.special_defense,
            StatKind::Speed => self.speed,
        }
    }

    fn from_record(record: Option<StatsRecord>, owner: &str, issues: &mut Vec<MissingField>) -> Self {
        let record = record.unwrap_or_default();
        let mut resolve = |stat: StatKind| {
            record.get(stat).unwrap_or_else(|| {
                issues.push(MissingField::new(owner, stat.missing_field(), MISSING_STAT_DEFAULT));
                MISSING_STAT_DEFAULT
            })
        };

        Self {
            hp: resolve(StatKind::Hp),
            attack: resolve(StatKind::Attack),
            defense: resolve(StatKind::Defense),
            special_attack: resolve(StatKind::SpecialAttack),
            special_defense: resolve(StatKind::SpecialDefense),
            speed: resolve(StatKind::Speed),
        }
    }
}

/// One creature as written by the asset fetch tool. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatureRecord {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub types: Option<Vec<ElementType>>,
    #[serde(default)]
    pub stats: Option<StatsRecord>,
    #[serde(default)]
    pub moves: Option<Vec<MoveRecord>>,
    #[serde(default)]
    pub sprite_front: Option<String>,
    #[serde(default)]
    pub sprite_back: Option<String>,
}

/// Validated, immutable creature template a combatant is instantiated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureTemplate {
    pub id: Option<u32>,
    pub name: String,
    pub types: Vec<ElementType>,
    pub base_stats: BaseStats,
    pub moves: Vec<MoveData>,
    pub sprite_front: Option<String>,
    pub sprite_back: Option<String>,
}

impl CreatureTemplate {
    /// Validates a raw record field by field.
    ///
    /// Missing fields are replaced with their documented defaults and
    /// reported through `issues`; this never fails.
    pub fn from_record(record: CreatureRecord, issues: &mut Vec<MissingField>) -> Self {
        let name = record.name.unwrap_or_else(|| {
            issues.push(MissingField::new("<unnamed>", "name", "Unknown"));
            "Unknown".to_string()
        });

        let mut types = record.types.unwrap_or_default();
        if types.is_empty() {
            issues.push(MissingField::new(&name, "type", ElementType::Normal));
            types.push(ElementType::Normal);
        }
        types.truncate(MAX_TYPES);

        let base_stats = BaseStats::from_record(record.stats, &name, issues);

        let mut moves: Vec<MoveData> = record
            .moves
            .unwrap_or_default()
            .into_iter()
            .take(MAX_MOVES)
            .map(|m| MoveData::from_record(m, &name, issues))
            .collect();
        if moves.is_empty() {
            let fallback = MoveData::fallback();
            issues.push(MissingField::new(&name, "moves", &fallback.name));
            moves.push(fallback);
        }

        Self {
            id: record.id,
            name,
            types,
            base_stats,
            moves,
            sprite_front: record.sprite_front,
            sprite_back: record.sprite_back,
        }
    }
}
