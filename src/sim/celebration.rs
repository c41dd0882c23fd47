//! Accepting the question

use super::state::{GameEvent, GameState};
use crate::config::GameConfig;

/// Flip the game to answered and signal the celebration.
///
/// The decline axis (position, count, scale) is left untouched. Particles are
/// skipped when `reduced_motion` is set. Calling this again once answered
/// changes nothing and returns no events.
pub fn celebrate(state: &mut GameState, config: &GameConfig, reduced_motion: bool) -> Vec<GameEvent> {
    if state.answered {
        return Vec::new();
    }
    state.answered = true;

    let mut events = Vec::with_capacity(2);
    if !reduced_motion && config.particle_count > 0 {
        events.push(GameEvent::Particles {
            count: config.particle_count,
        });
    }
    events.push(GameEvent::MessagePanel {
        title: config.celebration_title.clone(),
        subtitle: config.celebration_subtitle.clone(),
    });

    log::info!(
        "Answered yes after {} evasion(s){}",
        state.evasion_count,
        if reduced_motion { " (reduced motion)" } else { "" }
    );

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_celebrate_fresh_state() {
        let config = GameConfig::default();
        let mut state = GameState::default();

        let events = celebrate(&mut state, &config, false);
        assert!(state.answered);
        assert_eq!(state.decline_position, Vec2::ZERO);
        assert_eq!(state.evasion_count, 0);
        assert_eq!(state.decline_scale, 1.0);
        assert_eq!(
            events,
            vec![
                GameEvent::Particles {
                    count: config.particle_count
                },
                GameEvent::MessagePanel {
                    title: config.celebration_title.clone(),
                    subtitle: config.celebration_subtitle.clone(),
                },
            ]
        );
    }

    #[test]
    fn test_celebrate_keeps_decline_axis() {
        let config = GameConfig::default();
        let mut state = GameState {
            decline_position: Vec2::new(120.0, 64.0),
            evasion_count: 8,
            decline_scale: 0.7,
            message_cursor: 8,
            ..Default::default()
        };

        celebrate(&mut state, &config, false);
        assert!(state.answered);
        assert_eq!(state.decline_position, Vec2::new(120.0, 64.0));
        assert_eq!(state.evasion_count, 8);
        assert_eq!(state.decline_scale, 0.7);
    }

    #[test]
    fn test_celebrate_twice_is_noop() {
        let config = GameConfig::default();
        let mut state = GameState::default();

        celebrate(&mut state, &config, false);
        let before = state.clone();
        let events = celebrate(&mut state, &config, false);

        assert!(events.is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn test_celebrate_reduced_motion_skips_particles() {
        let config = GameConfig::default();
        let mut state = GameState::default();

        let events = celebrate(&mut state, &config, true);
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], GameEvent::MessagePanel { .. }));
    }
}
