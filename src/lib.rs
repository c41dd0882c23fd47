//! Love Prompt - engine for the "Do You Love Me?" mini-game
//!
//! Core modules:
//! - `sim`: Deterministic game logic (evasion, shrink, celebration, session)
//! - `config`: Typed game configuration resolved once at startup
//! - `platform`: Browser/native platform abstraction

pub mod config;
pub mod platform;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use sim::{GameEvent, GameSession, GameState};

/// Engine constants
pub mod consts {
    /// Minimum per-axis distance a new decline position should keep from the old one
    pub const MIN_SEPARATION: f32 = 50.0;
    /// Candidate draws before the last one is accepted regardless of separation
    pub const MAX_POSITION_ATTEMPTS: u32 = 10;
    /// Scale lost per evasion past the shrink threshold
    pub const SHRINK_STEP: f32 = 0.1;

    /// Config defaults
    pub const DEFAULT_SHRINK_THRESHOLD: u32 = 5;
    pub const DEFAULT_MIN_SCALE: f32 = 0.3;
    pub const DEFAULT_PARTICLE_COUNT: u32 = 30;
}
