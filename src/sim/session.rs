//! Owned mini-game session
//!
//! The presentation layer creates one `GameSession` when the mini-game
//! section initializes, routes input events through it, and tears it down
//! with the section. Nothing here is global.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::bounds::Bounds;
use super::celebration::celebrate;
use super::evasion::evade;
use super::state::{GameEvent, GameState};
use crate::config::GameConfig;

/// A running mini-game: config, state and the RNG that drives evasion
#[derive(Debug, Clone)]
pub struct GameSession<R = Pcg32> {
    config: GameConfig,
    state: GameState,
    rng: R,
}

impl GameSession<Pcg32> {
    /// Start a session seeded from the OS entropy source
    pub fn new(config: GameConfig) -> Self {
        log::info!("Mini-game session started");
        Self::with_rng(config, Pcg32::from_os_rng())
    }

    /// Start a reproducible session
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        log::info!("Mini-game session started with seed: {}", seed);
        Self::with_rng(config, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> GameSession<R> {
    /// Start a session with a caller-supplied RNG
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self {
            config,
            state: GameState::default(),
            rng,
        }
    }

    /// Decline control approached (pointer-enter / touch-start)
    pub fn evade(&mut self, control: Bounds, container: Bounds) -> Vec<GameEvent> {
        evade(control, container, &mut self.state, &self.config, &mut self.rng)
    }

    /// Accept control fired (click / touch-end)
    pub fn celebrate(&mut self, reduced_motion: bool) -> Vec<GameEvent> {
        celebrate(&mut self.state, &self.config, reduced_motion)
    }

    /// Pleading message shown by the most recent evasion
    pub fn current_message(&self) -> Option<&str> {
        let shown = self.state.message_cursor.checked_sub(1)?;
        self.config.pleading_message(shown).map(|(_, text)| text)
    }

    /// Label the decline control should currently carry
    pub fn decline_label(&self) -> &str {
        if self.state.evasion_count == 0 {
            &self.config.decline_label
        } else {
            &self.config.evading_decline_label
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Back to a fresh state, keeping config and RNG
    pub fn reset(&mut self) {
        self.state = GameState::default();
    }

    /// End the session, handing back the final state
    pub fn teardown(self) -> GameState {
        log::info!(
            "Mini-game session torn down (answered: {}, evasions: {})",
            self.state.answered,
            self.state.evasion_count
        );
        self.state
    }
}
