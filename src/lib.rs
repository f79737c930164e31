// In: src/lib.rs

//! Starter Duel Battle Engine
//!
//! A small turn-based battle between two creatures: the player picks a
//! starter from a roster, an opponent is drawn at random from the rest, and
//! the two trade moves until one of them faints. The engine performs no I/O;
//! presenters drive it and read its narration from a message queue.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod combatant;
pub mod errors;
pub mod logging;
pub mod roster;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
// Data definitions for roster records and validated templates.
pub use schema::{
    BaseStats, CreatureRecord, CreatureTemplate, ElementType, MissingField, MoveCategory, MoveData, MoveRecord,
    StatKind,
};

// --- From this crate's modules (`src/`) ---

// Match driver and its snapshots.
pub use battle::runner::{BattleInfo, CombatantInfo, MatchController, TurnReport};
pub use battle::state::{BattleEvent, EventBus, MatchOutcome, MatchState};

// Randomness.
pub use battle::rng::{RandomSource, ScriptedRng, TurnRng};

// Combat rules.
pub use battle::calculators::{calculate_damage, DamageCalculation};
pub use battle::resolver::{resolve_action, ActionOutcome};
pub use battle::type_chart::effectiveness;
pub use combatant::{Combatant, BATTLE_LEVEL};

// Diagnostics filter for binaries.
pub use logging::{env_filter, DEFAULT_LOG_FILTER};

// Roster loading.
pub use roster::{load_roster, parse_json_roster, parse_ron_roster, Roster};

// Crate-specific error and result types.
pub use errors::{EngineError, EngineResult, MatchError, MatchResult, RosterError, RosterResult};
