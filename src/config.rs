//! Mini-game configuration
//!
//! Resolved once when the page starts, either from defaults or from the
//! page's JSON config object. The engine itself never validates it; the
//! collaborator may call [`GameConfig::validate`] before handing it over.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors from loading or checking a [`GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("shrink threshold must be positive")]
    ZeroThreshold,
    #[error("min scale must be in (0, 1], got {0}")]
    MinScaleOutOfRange(f32),
    #[error("pleading message list is empty")]
    NoPleadingMessages,
}

/// Immutable mini-game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    /// Evasions before the decline control starts shrinking
    pub shrink_threshold: u32,
    /// Smallest scale the decline control shrinks to
    pub min_scale: f32,
    /// Shown in order, one per evasion, wrapping around
    pub pleading_messages: Vec<String>,
    pub accept_label: String,
    pub decline_label: String,
    /// Decline label after the first evasion
    pub evading_decline_label: String,
    pub celebration_title: String,
    pub celebration_subtitle: String,
    /// Particles spawned on celebration (skipped under reduced motion)
    pub particle_count: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            shrink_threshold: DEFAULT_SHRINK_THRESHOLD,
            min_scale: DEFAULT_MIN_SCALE,
            pleading_messages: [
                "Are you sure?",
                "Really sure?",
                "Think again!",
                "Pretty please?",
                "Don't break my heart!",
                "I'll be very sad...",
                "You're breaking my heart!",
                "Give it another thought!",
                "Last chance!",
                "You can't catch me anyway!",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            accept_label: "Yes".to_string(),
            decline_label: "No".to_string(),
            evading_decline_label: "Still no?".to_string(),
            celebration_title: "I knew it!".to_string(),
            celebration_subtitle: "I love you too, forever and always.".to_string(),
            particle_count: DEFAULT_PARTICLE_COUNT,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON config; missing fields use defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the constraints the engine relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shrink_threshold == 0 {
            return Err(ConfigError::ZeroThreshold);
        }
        if !(self.min_scale > 0.0 && self.min_scale <= 1.0) {
            return Err(ConfigError::MinScaleOutOfRange(self.min_scale));
        }
        if self.pleading_messages.is_empty() {
            return Err(ConfigError::NoPleadingMessages);
        }
        Ok(())
    }

    /// Message for a cursor value, wrapping modulo the list length
    pub fn pleading_message(&self, cursor: u32) -> Option<(usize, &str)> {
        if self.pleading_messages.is_empty() {
            return None;
        }
        let index = cursor as usize % self.pleading_messages.len();
        Some((index, self.pleading_messages[index].as_str()))
    }
}
