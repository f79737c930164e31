use crate::creature_data::MissingField;
use crate::ElementType;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

impl From<String> for MoveCategory {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "physical" => MoveCategory::Physical,
            "special" => MoveCategory::Special,
            _ => MoveCategory::Status,
        }
    }
}

impl From<MoveCategory> for String {
    fn from(value: MoveCategory) -> Self {
        value.to_string()
    }
}

impl fmt::Display for MoveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoveCategory::Physical => "physical",
            MoveCategory::Special => "special",
            MoveCategory::Status => "status",
        };
        write!(f, "{}", name)
    }
}

/// A move as it appears in a roster file. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub power: Option<u16>,
    #[serde(default, rename = "type")]
    pub move_type: Option<ElementType>,
    #[serde(default)]
    pub category: Option<MoveCategory>,
}

/// A validated move. `power == None` marks a status move that deals no damage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    pub name: String,
    #[serde(rename = "type")]
    pub move_type: ElementType,
    pub category: MoveCategory,
    pub power: Option<u16>,
}

impl MoveData {
    pub fn new(
        name: impl Into<String>,
        move_type: ElementType,
        category: MoveCategory,
        power: Option<u16>,
    ) -> Self {
        Self {
            name: name.into(),
            move_type,
            category,
            power,
        }
    }

    /// Substituted when a creature record carries no usable moves.
    pub fn fallback() -> Self {
        Self::new("Tackle", ElementType::Normal, MoveCategory::Physical, Some(40))
    }

    pub fn is_status(&self) -> bool {
        self.power.is_none()
    }

    /// Builds a move from its record, substituting documented defaults for
    /// missing fields. Each substitution is appended to `issues`.
    /// A missing power is not an issue: it is how status moves are written.
    pub fn from_record(record: MoveRecord, owner: &str, issues: &mut Vec<MissingField>) -> Self {
        let name = record.name.unwrap_or_else(|| {
            issues.push(MissingField::new(owner, "moves[].name", "Unknown Move"));
            "Unknown Move".to_string()
        });
        let move_type = record.move_type.unwrap_or_else(|| {
            issues.push(MissingField::new(owner, "moves[].type", ElementType::Typeless));
            ElementType::Typeless
        });
        let category = record.category.unwrap_or_else(|| {
            issues.push(MissingField::new(owner, "moves[].category", MoveCategory::Status));
            MoveCategory::Status
        });

        Self {
            name,
            move_type,
            category,
            power: record.power,
        }
    }
}
