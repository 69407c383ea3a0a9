// SPDX-License-Identifier: Apache-2.0
//! Frame controller: host lifecycle, game events, share effect handling.
//!
//! Owns the per-session state: the loaded flag, the host context, the game
//! state, and the lifetime stats. All host calls go through the injected
//! [`HostPort`].

use flarb_app_core::game::{self, GameEffect, GameEvent, GameState};
use flarb_app_core::host::{HostContext, HostError, HostPort};
use flarb_app_core::stats::FrameStats;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::warn;

pub struct FrameController<H: HostPort> {
    host: H,
    loaded: bool,
    context: Option<HostContext>,
    game: GameState,
    stats: FrameStats,
    rng: StdRng,
}

impl<H: HostPort> FrameController<H> {
    /// Start a controller with a fresh play-through.
    pub fn new(host: H) -> Self {
        Self::with_rng(host, StdRng::from_entropy())
    }

    /// Start with an explicit RNG (deterministic in tests).
    pub fn with_rng(host: H, mut rng: StdRng) -> Self {
        let game = GameState::roll(&mut rng);
        Self {
            host,
            loaded: false,
            context: None,
            game,
            stats: FrameStats::default(),
            rng,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn context(&self) -> Option<&HostContext> {
        self.context.as_ref()
    }

    #[allow(dead_code)]
    pub fn loaded(&self) -> bool {
        self.loaded
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// Seed stats loaded from config.
    pub fn set_stats(&mut self, stats: FrameStats) {
        self.stats = stats;
    }

    #[cfg(test)]
    fn set_game(&mut self, game: GameState) {
        self.game = game;
    }

    /// Fetch the host context once and signal readiness.
    ///
    /// An absent context is a silent no-op: readiness is never signaled and
    /// the context stays unset. Subsequent calls do nothing either way.
    pub async fn load_host(&mut self) -> Result<(), HostError> {
        if self.loaded {
            return Ok(());
        }
        self.loaded = true;
        let Some(ctx) = self.host.context().await? else {
            return Ok(());
        };
        self.context = Some(ctx);
        self.host.signal_ready().await
    }

    /// Main button: increments, or starts a new round after a win.
    pub fn tap(&mut self) {
        let was_won = self.game.won();
        let (next, _fx) = game::reduce(&self.game, GameEvent::Tap, &mut self.rng);
        if !was_won {
            self.stats.record_tap();
            if next.won() {
                self.stats.record_win();
            }
        }
        self.game = next;
    }

    /// Share button: awaits the host share action once.
    ///
    /// A rejection is logged and swallowed; the game state is untouched.
    /// Pre-win requests are ignored (the card only offers share after a win).
    pub async fn share(&mut self) {
        let (next, fx) = game::reduce(&self.game, GameEvent::ShareTapped, &mut self.rng);
        self.game = next;
        for effect in fx {
            let GameEffect::Share { text } = effect;
            if let Err(err) = self.host.share(&text).await {
                warn!(%err, "share failed");
            }
        }
    }

    /// Best-effort host teardown (listener removal analog).
    pub fn dispose(&mut self) {
        self.host.dispose();
    }
}

impl<H: HostPort> Drop for FrameController<H> {
    fn drop(&mut self) {
        self.host.dispose();
    }
}
