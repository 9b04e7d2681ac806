//! Browser binding
//!
//! Thin `wasm-bindgen` wrapper so a JS presentation layer can drive the
//! simulation: call `tick()` from `requestAnimationFrame`, forward key and
//! pointer events, and draw from `snapshot_json()`.

use wasm_bindgen::prelude::*;

use crate::sim::{Command, GameState, tick};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // Only fails if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Balance Dash starting...");
}

/// Game instance owned by the page
#[wasm_bindgen]
pub struct WebGame {
    state: GameState,
}

#[wasm_bindgen]
impl WebGame {
    /// New session on the title screen, seeded from the clock
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        let seed = js_sys::Date::now() as u64;
        WebGame {
            state: GameState::new(seed),
        }
    }

    /// New session with a fixed seed and JSON tuning
    pub fn with_tuning(seed: u64, tuning_json: &str) -> Result<WebGame, JsValue> {
        let tuning = Tuning::from_json(tuning_json).map_err(to_js)?;
        let state = GameState::with_tuning(seed, tuning).map_err(to_js)?;
        Ok(WebGame { state })
    }

    /// Start or restart a run (start/restart buttons)
    pub fn start(&mut self) {
        self.state.start();
    }

    /// One frame
    pub fn tick(&mut self) {
        tick(&mut self.state);
    }

    pub fn move_left(&mut self) -> bool {
        self.state.move_left()
    }

    pub fn move_right(&mut self) -> bool {
        self.state.move_right()
    }

    /// `KeyboardEvent.key` handler. Returns true if the key was consumed.
    pub fn key_down(&mut self, key: &str) -> bool {
        match Command::from_key(key) {
            Some(command) => {
                self.state.apply(command);
                true
            }
            None => false,
        }
    }

    /// Pointer handler, `x` in field coordinates
    pub fn tap(&mut self, x: f32) -> bool {
        self.state.tap(x)
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    /// Logical field size for canvas scaling
    pub fn field_width(&self) -> f32 {
        self.state.tuning.field_width
    }

    pub fn field_height(&self) -> f32 {
        self.state.tuning.field_height
    }

    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.state.snapshot()).map_err(to_js)
    }
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}
