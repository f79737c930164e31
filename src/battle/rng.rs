use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Lower bound of the damage roll.
pub const MIN_DAMAGE_ROLL: f64 = 0.85;
/// Upper bound of the damage roll.
pub const MAX_DAMAGE_ROLL: f64 = 1.0;

/// The only source of nondeterminism in a match.
///
/// Injected into the controller so battles can be replayed from a seed or
/// scripted outright in tests.
pub trait RandomSource {
    /// A damage multiplier drawn uniformly from `[0.85, 1.0]`.
    fn damage_roll(&mut self) -> f64;

    /// An index drawn uniformly from `0..len`. `len` must be non-zero.
    fn choose_index(&mut self, len: usize) -> usize;
}

/// Production random source backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct TurnRng {
    rng: StdRng,
}

impl TurnRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RandomSource for TurnRng {
    fn damage_roll(&mut self) -> f64 {
        self.rng.random_range(MIN_DAMAGE_ROLL..=MAX_DAMAGE_ROLL)
    }

    fn choose_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Replays queued values in order.
///
/// Once a queue runs dry the roll falls back to `1.0` and the pick to `0`.
/// Picks are reduced modulo `len` so a script can never index out of range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    rolls: VecDeque<f64>,
    picks: VecDeque<usize>,
}

impl ScriptedRng {
    pub fn new(rolls: Vec<f64>, picks: Vec<usize>) -> Self {
        Self {
            rolls: rolls.into(),
            picks: picks.into(),
        }
    }

    /// Every roll is the maximum and every pick is the first candidate.
    pub fn max_rolls() -> Self {
        Self::default()
    }
}

impl RandomSource for ScriptedRng {
    fn damage_roll(&mut self) -> f64 {
        self.rolls
            .pop_front()
            .unwrap_or(MAX_DAMAGE_ROLL)
            .clamp(MIN_DAMAGE_ROLL, MAX_DAMAGE_ROLL)
    }

    fn choose_index(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % len.max(1)
    }
}
