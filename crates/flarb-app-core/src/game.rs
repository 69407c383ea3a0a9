// SPDX-License-Identifier: Apache-2.0
//! Pure state and transitions for the Flarb counter game.
//!
//! One play-through is a `GameState`; player input arrives as `GameEvent`s
//! and runs through [`reduce`], which returns the next state plus any side
//! work (`GameEffect`) the caller must perform. Nothing here touches the
//! host bridge or blocks.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Inclusive lower bound for a rolled target.
pub const TARGET_MIN: u32 = 5;
/// Exclusive upper bound for a rolled target.
pub const TARGET_MAX: u32 = 20;

/// One play-through of the counter game.
///
/// Invariant: `won == (count >= target)` in every reachable state, and
/// `target` is fixed until a reset rolls a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    count: u32,
    target: u32,
    won: bool,
}

impl GameState {
    /// Start a fresh play-through with a uniformly rolled target in
    /// `[TARGET_MIN, TARGET_MAX)`.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_target(rng.gen_range(TARGET_MIN..TARGET_MAX))
    }

    /// Start a play-through against a known target (tests, replays).
    pub fn with_target(target: u32) -> Self {
        let mut state = Self {
            count: 0,
            target,
            won: false,
        };
        state.check_win();
        state
    }

    /// Current tap count.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Win threshold for this play-through.
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Whether the threshold has been reached.
    pub fn won(&self) -> bool {
        self.won
    }

    /// Result message offered to the host share action.
    pub fn share_text(&self) -> String {
        format!(
            "I Flarbed {} times and hit the target of {}! Can you Flarb better?",
            self.count, self.target
        )
    }

    // Derived-state update: `won` flips on once `count` reaches `target`;
    // only a reset clears it.
    fn check_win(&mut self) {
        if self.count >= self.target {
            self.won = true;
        }
    }
}

/// Player input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The main button: increments, or starts a new round after a win.
    Tap,
    /// The share button on the win card.
    ShareTapped,
}

/// Side work the caller must run after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEffect {
    /// Invoke the host share action with the given message.
    Share {
        /// Formatted result message.
        text: String,
    },
}

/// Apply one event; returns the next state and any effects to run.
///
/// `rng` is only consulted when a tap after a win rolls a fresh target.
pub fn reduce<R: Rng + ?Sized>(
    state: &GameState,
    ev: GameEvent,
    rng: &mut R,
) -> (GameState, Vec<GameEffect>) {
    let mut next = *state;
    let mut fx = Vec::new();
    match ev {
        GameEvent::Tap => {
            if next.won {
                next = GameState::roll(rng);
            } else {
                next.count += 1;
                next.check_win();
            }
        }
        GameEvent::ShareTapped => {
            // Share is only offered on the win card; stray requests for an
            // unfinished round emit nothing.
            if next.won {
                fx.push(GameEffect::Share {
                    text: next.share_text(),
                });
            }
        }
    }
    (next, fx)
}
