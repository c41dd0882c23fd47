//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Reduced-motion preference
//! - The JS-facing game object (wasm only)

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Whether the user asked the browser to minimize animation
#[cfg(target_arch = "wasm32")]
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Native stub
#[cfg(not(target_arch = "wasm32"))]
pub fn prefers_reduced_motion() -> bool {
    false
}
