//! JS bindings for the page script
//!
//! The page owns one `LoveGame` per mini-game section and feeds it element
//! sizes from `getBoundingClientRect()`. Event lists come back as JSON.

use wasm_bindgen::prelude::*;

use crate::config::{ConfigError, GameConfig};
use crate::sim::{Bounds, GameEvent, GameSession};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
}

fn to_js_error(err: ConfigError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn events_json(events: &[GameEvent]) -> String {
    serde_json::to_string(events).unwrap_or_else(|_| "[]".to_string())
}

#[wasm_bindgen]
pub struct LoveGame {
    session: Option<GameSession>,
}

#[wasm_bindgen]
impl LoveGame {
    /// Build from the page's config object (JSON); omitted means defaults
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<LoveGame, JsValue> {
        let config = match config_json {
            Some(json) => GameConfig::from_json(&json).map_err(to_js_error)?,
            None => GameConfig::default(),
        };
        if let Err(err) = config.validate() {
            log::warn!("Mini-game config: {}", err);
        }
        Ok(Self {
            session: Some(GameSession::new(config)),
        })
    }

    /// Decline control approached; returns the events as a JSON array
    pub fn evade(
        &mut self,
        control_width: f32,
        control_height: f32,
        container_width: f32,
        container_height: f32,
    ) -> String {
        let Some(session) = self.session.as_mut() else {
            return "[]".to_string();
        };
        let events = session.evade(
            Bounds::new(control_width, control_height),
            Bounds::new(container_width, container_height),
        );
        events_json(&events)
    }

    /// Accept control fired; returns the events as a JSON array
    pub fn celebrate(&mut self) -> String {
        let reduced_motion = super::prefers_reduced_motion();
        let Some(session) = self.session.as_mut() else {
            return "[]".to_string();
        };
        events_json(&session.celebrate(reduced_motion))
    }

    #[wasm_bindgen(getter)]
    pub fn answered(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.state().answered)
    }

    #[wasm_bindgen(getter, js_name = evasionCount)]
    pub fn evasion_count(&self) -> u32 {
        self.session.as_ref().map_or(0, |s| s.state().evasion_count)
    }

    #[wasm_bindgen(getter, js_name = declineScale)]
    pub fn decline_scale(&self) -> f32 {
        self.session.as_ref().map_or(1.0, |s| s.state().decline_scale)
    }

    #[wasm_bindgen(getter, js_name = declineX)]
    pub fn decline_x(&self) -> f32 {
        self.session
            .as_ref()
            .map_or(0.0, |s| s.state().decline_position.x)
    }

    #[wasm_bindgen(getter, js_name = declineY)]
    pub fn decline_y(&self) -> f32 {
        self.session
            .as_ref()
            .map_or(0.0, |s| s.state().decline_position.y)
    }

    #[wasm_bindgen(getter, js_name = declineLabel)]
    pub fn decline_label(&self) -> String {
        self.session
            .as_ref()
            .map(|s| s.decline_label().to_string())
            .unwrap_or_default()
    }

    #[wasm_bindgen(getter, js_name = acceptLabel)]
    pub fn accept_label(&self) -> String {
        self.session
            .as_ref()
            .map(|s| s.config().accept_label.clone())
            .unwrap_or_default()
    }

    /// Section torn down; later calls are no-ops
    pub fn teardown(&mut self) {
        if let Some(session) = self.session.take() {
            session.teardown();
        }
    }
}
