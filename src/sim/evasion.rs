//! Evasive decline control
//!
//! Picks a new position for the decline control inside its container and
//! derives how small it has shrunk from the evasion counter.

use glam::Vec2;
use rand::Rng;

use super::bounds::{Bounds, max_offset};
use super::state::{GameEvent, GameState};
use crate::config::GameConfig;
use crate::consts::*;

/// True when `candidate` is within `MIN_SEPARATION` of `current` on both axes
#[inline]
fn too_close(candidate: Vec2, current: Vec2) -> bool {
    let delta = (candidate - current).abs();
    delta.x < MIN_SEPARATION && delta.y < MIN_SEPARATION
}

/// Uniform draw in `[0, max]`, or exactly 0 for a collapsed axis
#[inline]
fn draw_axis<R: Rng + ?Sized>(rng: &mut R, max: f32) -> f32 {
    if max > 0.0 {
        rng.random_range(0.0..=max)
    } else {
        0.0
    }
}

/// Compute a new top-left offset for the control inside the container.
///
/// Candidates closer than `MIN_SEPARATION` to `current` on both axes are
/// redrawn, up to `MAX_POSITION_ATTEMPTS` draws in total; after that the last
/// candidate is accepted as-is. `current` may be out of range (e.g. after a
/// resize). When the control fills the container this returns `(0, 0)`
/// without touching the RNG.
pub fn compute_position<R: Rng + ?Sized>(
    container: Bounds,
    control: Bounds,
    current: Vec2,
    rng: &mut R,
) -> Vec2 {
    let max = max_offset(container, control);
    if max == Vec2::ZERO {
        return Vec2::ZERO;
    }

    let mut candidate = Vec2::new(draw_axis(rng, max.x), draw_axis(rng, max.y));
    let mut attempts = 1;
    while too_close(candidate, current) {
        if attempts >= MAX_POSITION_ATTEMPTS {
            log::debug!(
                "Separation retries exhausted, accepting ({:.1}, {:.1})",
                candidate.x,
                candidate.y
            );
            break;
        }
        candidate = Vec2::new(draw_axis(rng, max.x), draw_axis(rng, max.y));
        attempts += 1;
    }

    // Float rounding in the sampler must never leak outside the box
    candidate.clamp(Vec2::ZERO, max)
}

/// Scale of the decline control after `evasion_count` evasions.
///
/// Stays at 1.0 below `threshold`, then loses `SHRINK_STEP` per evasion
/// (counting from the threshold itself) down to `min_scale`.
pub fn compute_shrink_scale(evasion_count: u32, threshold: u32, min_scale: f32) -> f32 {
    if evasion_count < threshold {
        return 1.0;
    }
    let past = (evasion_count - threshold) as f32;
    (1.0 - SHRINK_STEP * past).max(min_scale)
}

/// Run one evasion: move, count, shrink, and advance the pleading message.
///
/// Does nothing (and returns no events) once the game has been answered.
pub fn evade<R: Rng + ?Sized>(
    control: Bounds,
    container: Bounds,
    state: &mut GameState,
    config: &GameConfig,
    rng: &mut R,
) -> Vec<GameEvent> {
    if state.answered {
        return Vec::new();
    }

    state.decline_position = compute_position(container, control, state.decline_position, rng);
    state.evasion_count = state.evasion_count.saturating_add(1);
    state.decline_scale =
        compute_shrink_scale(state.evasion_count, config.shrink_threshold, config.min_scale);

    let mut events = vec![GameEvent::DeclineMoved {
        position: state.decline_position,
        scale: state.decline_scale,
    }];

    if let Some((index, text)) = config.pleading_message(state.message_cursor) {
        events.push(GameEvent::Pleading {
            index,
            text: text.to_string(),
        });
    }
    state.message_cursor = state.message_cursor.wrapping_add(1);

    if state.evasion_count == 1 {
        events.push(GameEvent::DeclineRelabeled {
            label: config.evading_decline_label.clone(),
        });
    }

    log::debug!(
        "Evasion #{} -> ({:.1}, {:.1}) scale {:.2}",
        state.evasion_count,
        state.decline_position.x,
        state.decline_position.y,
        state.decline_scale
    );

    events
}
