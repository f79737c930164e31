use crate::battle::resolver::{resolve_action, ActionOutcome};
use crate::battle::rng::{RandomSource, TurnRng};
use crate::battle::state::{BattleEvent, EventBus, MatchOutcome, MatchState};
use crate::combatant::Combatant;
use crate::errors::{MatchError, MatchResult};
use schema::{CreatureTemplate, ElementType, MoveData};
use tracing::{debug, info};

/// Read-only view of one side of the battle for presenters
#[derive(Debug, Clone, PartialEq)]
pub struct CombatantInfo {
    pub name: String,
    pub level: u8,
    pub types: Vec<ElementType>,
    pub current_health: u16,
    pub max_health: u16,
    pub moves: Vec<MoveData>,
    /// Sprite the presenter draws for this side: the back sprite for the
    /// player, the front sprite for the opponent.
    pub sprite: Option<String>,
}

/// Snapshot of a running or finished battle
#[derive(Debug, Clone, PartialEq)]
pub struct BattleInfo {
    pub turn_number: u32,
    pub player: CombatantInfo,
    pub opponent: CombatantInfo,
}

/// Result of one call to [`MatchController::run_turn`]
#[derive(Debug, Clone, PartialEq)]
pub struct TurnReport {
    pub player: ActionOutcome,
    /// `None` when the opponent fainted before it could act
    pub opponent: Option<ActionOutcome>,
    pub state: MatchState,
}

#[derive(Debug, Clone)]
struct Battle {
    player: Combatant,
    opponent: Combatant,
    turn_number: u32,
}

/// Owns a single match from starter selection to its end.
///
/// All narration is queued and handed out through [`drain_messages`]
/// (or [`drain_events`] for typed consumers); nothing here performs I/O.
///
/// [`drain_messages`]: MatchController::drain_messages
/// [`drain_events`]: MatchController::drain_events
#[derive(Debug)]
pub struct MatchController<R = TurnRng> {
    roster: Vec<CreatureTemplate>,
    state: MatchState,
    battle: Option<Battle>,
    outcome: Option<MatchOutcome>,
    messages: EventBus,
    rng: R,
}

impl MatchController<TurnRng> {
    /// Create a match whose randomness comes from OS entropy
    pub fn new(roster: Vec<CreatureTemplate>) -> MatchResult<Self> {
        Self::with_rng(roster, TurnRng::from_os_rng())
    }
}

impl<R: RandomSource> MatchController<R> {
    /// Create a match with an injected random source.
    /// The opponent is drawn from the entries the player does not pick, so
    /// the roster needs at least two templates.
    pub fn with_rng(roster: Vec<CreatureTemplate>, rng: R) -> MatchResult<Self> {
        if roster.len() < 2 {
            return Err(MatchError::InsufficientRoster(roster.len()));
        }

        Ok(Self {
            roster,
            state: MatchState::Selection,
            battle: None,
            outcome: None,
            messages: EventBus::new(),
            rng,
        })
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Names of every roster entry, in roster order
    pub fn starter_names(&self) -> Vec<String> {
        self.roster.iter().map(|t| t.name.clone()).collect()
    }

    /// The result once the match is over
    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    /// Choose the player's starter; the opponent picks at random from the rest.
    pub fn select_starter(&mut self, index: usize) -> MatchResult<()> {
        self.require_state(MatchState::Selection, "select a starter")?;
        if index >= self.roster.len() {
            return Err(MatchError::InvalidSelectionIndex {
                index,
                len: self.roster.len(),
            });
        }

        // Draw among the remaining entries, then skip over the player's slot
        let mut opponent_index = self.rng.choose_index(self.roster.len() - 1);
        if opponent_index >= index {
            opponent_index += 1;
        }

        let player = Combatant::from_template(&self.roster[index]);
        let opponent = Combatant::from_template(&self.roster[opponent_index]);
        info!(player = %player.name, opponent = %opponent.name, "starters chosen");

        self.messages.push(BattleEvent::StarterChosen {
            name: player.name.clone(),
        });
        self.messages.push(BattleEvent::OpponentChosen {
            name: opponent.name.clone(),
        });

        self.battle = Some(Battle {
            player,
            opponent,
            turn_number: 0,
        });
        self.transition(MatchState::Battle);
        Ok(())
    }

    /// Run one full turn: the player's move first, then a random opponent
    /// move if the opponent is still standing.
    pub fn run_turn(&mut self, player_move_index: usize) -> MatchResult<TurnReport> {
        self.require_state(MatchState::Battle, "run a turn")?;
        let battle = self
            .battle
            .as_mut()
            .ok_or(MatchError::InvalidStateTransition {
                action: "run a turn",
                state: self.state,
            })?;
        let Battle {
            player,
            opponent,
            turn_number,
        } = battle;

        let move_count = player.moves.len();
        let Some(player_move) = player.moves.get(player_move_index).cloned() else {
            return Err(MatchError::InvalidSelectionIndex {
                index: player_move_index,
                len: move_count,
            });
        };

        // Chosen up front from the full list; repeats are allowed
        let opponent_move = if opponent.moves.is_empty() {
            None
        } else {
            let pick = self.rng.choose_index(opponent.moves.len());
            Some(opponent.moves[pick].clone())
        };

        *turn_number += 1;
        debug!(turn = *turn_number, "turn started");

        // TODO: order actions by speed instead of always letting the player act first
        let player_outcome = resolve_action(player, opponent, &player_move, &mut self.rng, &mut self.messages);

        let opponent_outcome = match opponent_move {
            Some(opponent_move) if opponent.is_alive() => Some(resolve_action(
                opponent,
                player,
                &opponent_move,
                &mut self.rng,
                &mut self.messages,
            )),
            _ => None,
        };

        let outcome = if !player.is_alive() {
            Some(MatchOutcome::Defeat)
        } else if !opponent.is_alive() {
            Some(MatchOutcome::Victory)
        } else {
            None
        };

        if let Some(outcome) = outcome {
            self.messages.push(match outcome {
                MatchOutcome::Victory => BattleEvent::Victory,
                MatchOutcome::Defeat => BattleEvent::Defeat,
            });
            info!(?outcome, turns = *turn_number, "match over");
            self.outcome = Some(outcome);
            self.transition(MatchState::Over);
        }

        Ok(TurnReport {
            player: player_outcome,
            opponent: opponent_outcome,
            state: self.state,
        })
    }

    /// Snapshot of both sides, or `None` before a starter has been chosen
    pub fn battle_info(&self) -> Option<BattleInfo> {
        self.battle.as_ref().map(|battle| BattleInfo {
            turn_number: battle.turn_number,
            player: Self::combatant_info(&battle.player, battle.player.sprite_back.clone()),
            opponent: Self::combatant_info(&battle.opponent, battle.opponent.sprite_front.clone()),
        })
    }

    /// Take every queued message, leaving the queue empty
    pub fn drain_messages(&mut self) -> Vec<String> {
        self.messages.drain_messages()
    }

    /// Take every queued event, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<BattleEvent> {
        self.messages.drain()
    }

    fn combatant_info(combatant: &Combatant, sprite: Option<String>) -> CombatantInfo {
        CombatantInfo {
            name: combatant.name.clone(),
            level: combatant.level,
            types: combatant.types.clone(),
            current_health: combatant.current_health(),
            max_health: combatant.max_health(),
            moves: combatant.moves.clone(),
            sprite,
        }
    }

    fn require_state(&self, expected: MatchState, action: &'static str) -> MatchResult<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(MatchError::InvalidStateTransition {
                action,
                state: self.state,
            })
        }
    }

    fn transition(&mut self, next: MatchState) {
        debug!(from = %self.state, to = %next, "match state changed");
        self.state = next;
    }
}
