use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall phase of a match. Transitions only move forward:
/// Selection -> Battle -> Over.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchState {
    Selection,
    Battle,
    Over,
}

impl fmt::Display for MatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchState::Selection => "SELECTION",
            MatchState::Battle => "BATTLE",
            MatchState::Over => "OVER",
        };
        write!(f, "{}", name)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Victory,
    Defeat,
}

/// Narration produced by the engine, in the order it happened.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    // Selection
    StarterChosen {
        name: String,
    },
    OpponentChosen {
        name: String,
    },

    // Actions
    MoveUsed {
        attacker: String,
        move_name: String,
    },
    Effectiveness {
        defender: String,
        multiplier: f64,
    },
    DamageDealt {
        damage: u16,
    },
    MoveFailed,
    HealthRemaining {
        name: String,
        current: u16,
        max: u16,
    },

    // Match end
    Victory,
    Defeat,
}

impl BattleEvent {
    /// Effectiveness narration is only produced for hits that connect with a
    /// non-neutral multiplier. An immune target fails instead.
    pub fn effectiveness(defender: &str, multiplier: f64) -> Option<Self> {
        if multiplier == 1.0 || multiplier <= 0.0 {
            return None;
        }
        Some(BattleEvent::Effectiveness {
            defender: defender.to_string(),
            multiplier,
        })
    }
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleEvent::StarterChosen { name } => write!(f, "You chose {}!", name),
            BattleEvent::OpponentChosen { name } => write!(f, "Your opponent chose {}!", name),
            BattleEvent::MoveUsed { attacker, move_name } => {
                write!(f, "{} used {}!", attacker, move_name)
            }
            BattleEvent::Effectiveness { multiplier, .. } => {
                if *multiplier > 1.0 {
                    write!(f, "It's super effective!")
                } else {
                    write!(f, "It's not very effective...")
                }
            }
            BattleEvent::DamageDealt { damage } => write!(f, "It deals {} damage!", damage),
            BattleEvent::MoveFailed => write!(f, "But it failed!"),
            BattleEvent::HealthRemaining { name, current, max } => {
                write!(f, "{} has {}/{} HP remaining.", name, current, max)
            }
            BattleEvent::Victory => write!(f, "You won!"),
            BattleEvent::Defeat => write!(f, "You have been defeated!"),
        }
    }
}

/// FIFO queue of narration between the engine and its presenter.
///
/// Draining hands the queued events over to the caller and leaves the bus
/// empty.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn drain(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }

    /// Drain and render every queued event as text.
    pub fn drain_messages(&mut self) -> Vec<String> {
        self.drain().iter().map(ToString::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
