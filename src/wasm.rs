//! Browser-facing engine exported through `wasm-bindgen`.
//!
//! The host page owns DOM event wiring: it forwards pointer, wheel and resize
//! events here in arrival order, suppresses the browser defaults for them, and
//! reacts to the returned actions (a JSON array of [`Action`]). Calling
//! [`Engine::render`] after a `render_needed` action and [`Engine::frame`]
//! from `requestAnimationFrame` after an `animation_frame_requested` action is
//! all the scheduling the engine needs.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::{CanvasConfig, ConfigError};
use crate::engine::{Action, EngineCore};
use crate::input::Button;
use crate::render;
use crate::viewport::Point;

/// The full canvas engine. Wraps [`EngineCore`] and owns the browser canvas element.
#[wasm_bindgen]
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    core: EngineCore,
    dpr: f64,
}

#[wasm_bindgen]
impl Engine {
    /// Bind a new engine to `canvas`. `config_json` may be omitted for defaults.
    ///
    /// # Errors
    ///
    /// Fails when the config is invalid or the canvas has no 2D context.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config_json: Option<String>) -> Result<Engine, JsValue> {
        let mut config = match config_json {
            Some(raw) => CanvasConfig::from_json(&raw).map_err(config_error)?,
            None => CanvasConfig::default(),
        };
        if config.seed.is_none() {
            config.seed = Some(js_sys::Date::now().to_bits());
        }
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let core = EngineCore::try_new(config).map_err(config_error)?;
        Ok(Self { canvas, ctx, core, dpr: 1.0 })
    }

    // --- Viewport ---

    /// Update viewport dimensions (CSS pixels) and device pixel ratio.
    ///
    /// # Errors
    ///
    /// Fails only if the resulting actions cannot be serialized.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn resize(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Result<String, JsValue> {
        self.dpr = dpr.max(1.0);
        self.canvas.set_width((width_css * self.dpr).round() as u32);
        self.canvas.set_height((height_css * self.dpr).round() as u32);
        actions_json(&self.core.on_resize(width_css, height_css))
    }

    // --- Input events ---

    /// # Errors
    ///
    /// Fails only if the resulting actions cannot be serialized.
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f64, y: f64, button: i16) -> Result<String, JsValue> {
        actions_json(&self.core.on_pointer_down(Point::new(x, y), Button::from_dom(button)))
    }

    /// # Errors
    ///
    /// Fails only if the resulting actions cannot be serialized.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Result<String, JsValue> {
        actions_json(&self.core.on_pointer_move(Point::new(x, y)))
    }

    /// # Errors
    ///
    /// Fails only if the resulting actions cannot be serialized.
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self, x: f64, y: f64, button: i16) -> Result<String, JsValue> {
        actions_json(&self.core.on_pointer_up(Point::new(x, y), Button::from_dom(button)))
    }

    /// # Errors
    ///
    /// Fails only if the resulting actions cannot be serialized.
    pub fn wheel(&mut self, x: f64, y: f64, delta_y: f64) -> Result<String, JsValue> {
        actions_json(&self.core.on_wheel(Point::new(x, y), delta_y))
    }

    // --- Requests ---

    /// # Errors
    ///
    /// Fails only if the resulting actions cannot be serialized.
    #[wasm_bindgen(js_name = addObject)]
    pub fn add_object(&mut self) -> Result<String, JsValue> {
        actions_json(&self.core.add_object())
    }

    /// Start the reset-view animation. `now_ms` is `performance.now()`.
    ///
    /// # Errors
    ///
    /// Fails only if the resulting actions cannot be serialized.
    #[wasm_bindgen(js_name = resetView)]
    pub fn reset_view(&mut self, now_ms: f64) -> Result<String, JsValue> {
        actions_json(&self.core.reset_view(now_ms))
    }

    /// Advance animations to the `requestAnimationFrame` timestamp.
    ///
    /// # Errors
    ///
    /// Fails only if the resulting actions cannot be serialized.
    pub fn frame(&mut self, now_ms: f64) -> Result<String, JsValue> {
        actions_json(&self.core.on_animation_frame(now_ms))
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Propagates any failing `Canvas2D` call.
    pub fn render(&self) -> Result<(), JsValue> {
        let pointer = self.core.config.show_pointer.then_some(self.core.pointer_world);
        render::draw(&self.ctx, &self.core.doc, &self.core.viewport, pointer, self.dpr)
    }

    // --- Queries ---

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.core.viewport.zoom()
    }

    #[must_use]
    #[wasm_bindgen(js_name = offsetX)]
    pub fn offset_x(&self) -> f64 {
        self.core.viewport.offset().x
    }

    #[must_use]
    #[wasm_bindgen(js_name = offsetY)]
    pub fn offset_y(&self) -> f64 {
        self.core.viewport.offset().y
    }

    /// All objects, bottom first, as a JSON array.
    ///
    /// # Errors
    ///
    /// Fails only if serialization fails.
    pub fn objects(&self) -> Result<String, JsValue> {
        let objects: Vec<_> = self.core.doc.z_ordered().map(|(_, o)| o).collect();
        serde_json::to_string(&objects).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

fn actions_json(actions: &[Action]) -> Result<String, JsValue> {
    serde_json::to_string(actions).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn config_error(e: ConfigError) -> JsValue {
    JsValue::from_str(&e.to_string())
}
