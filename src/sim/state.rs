//! Game state and core mini-game types
//!
//! One `GameState` lives for one mini-game session.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Where the decline control is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclinePhase {
    /// Never evaded yet
    Idle,
    /// Has evaded at least once, still running away
    Evading,
    /// Answer accepted, decline control no longer moves
    Frozen,
}

/// Accept axis (one-way)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcceptPhase {
    Unanswered,
    Answered,
}

/// Side effects for the presentation layer to apply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameEvent {
    /// Decline control moved to a new top-left offset with a new scale
    DeclineMoved { position: Vec2, scale: f32 },
    /// Show the pleading message at `index`
    Pleading { index: usize, text: String },
    /// Decline control should switch to its evading label (first evasion only)
    DeclineRelabeled { label: String },
    /// Spawn celebration particles
    Particles { count: u32 },
    /// Show the celebration message panel
    MessagePanel { title: String, subtitle: String },
}

/// Complete mini-game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Top-left offset of the decline control inside its container
    pub decline_position: Vec2,
    /// Set once on the first accepted celebration, never reverts
    pub answered: bool,
    /// Successful evasions so far
    pub evasion_count: u32,
    /// Size factor of the decline control, derived from `evasion_count`
    pub decline_scale: f32,
    /// Advances with every evasion; message index is `cursor % messages.len()`
    pub message_cursor: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            decline_position: Vec2::ZERO,
            answered: false,
            evasion_count: 0,
            decline_scale: 1.0,
            message_cursor: 0,
        }
    }
}

impl GameState {
    pub fn decline_phase(&self) -> DeclinePhase {
        if self.answered {
            DeclinePhase::Frozen
        } else if self.evasion_count == 0 {
            DeclinePhase::Idle
        } else {
            DeclinePhase::Evading
        }
    }

    pub fn accept_phase(&self) -> AcceptPhase {
        if self.answered {
            AcceptPhase::Answered
        } else {
            AcceptPhase::Unanswered
        }
    }
}

/// Fresh state for a newly initialized mini-game section
pub fn create_state() -> GameState {
    GameState::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_state_defaults() {
        let state = create_state();
        assert_eq!(state.decline_position, Vec2::ZERO);
        assert!(!state.answered);
        assert_eq!(state.evasion_count, 0);
        assert_eq!(state.decline_scale, 1.0);
        assert_eq!(state.message_cursor, 0);
        assert_eq!(state.decline_phase(), DeclinePhase::Idle);
        assert_eq!(state.accept_phase(), AcceptPhase::Unanswered);
    }

    #[test]
    fn test_phases() {
        let mut state = create_state();
        state.evasion_count = 3;
        assert_eq!(state.decline_phase(), DeclinePhase::Evading);

        state.answered = true;
        assert_eq!(state.decline_phase(), DeclinePhase::Frozen);
        assert_eq!(state.accept_phase(), AcceptPhase::Answered);
    }

    #[test]
    fn test_event_json_shape() {
        let event = GameEvent::Particles { count: 12 };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"particles","count":12}"#);
    }
}
