//! Deterministic game logic module
//!
//! All mini-game rules live here. This module must be pure and deterministic:
//! - Randomness only through an injected RNG
//! - State mutated only by `evade` and `celebrate`
//! - No rendering or platform dependencies

pub mod bounds;
pub mod celebration;
pub mod evasion;
pub mod session;
pub mod state;

pub use bounds::{Bounds, max_offset};
pub use celebration::celebrate;
pub use evasion::{compute_position, compute_shrink_scale, evade};
pub use session::GameSession;
pub use state::{AcceptPhase, DeclinePhase, GameEvent, GameState, create_state};
