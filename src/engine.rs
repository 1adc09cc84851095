use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::animation::{AnimationDriver, AnimationHandle, AnimationStep, ViewTarget};
use crate::config::{CanvasConfig, ConfigError};
use crate::consts::{COLOR_HUE_BASE, COLOR_HUE_SPAN, RESET_ZOOM};
use crate::doc::{CanvasObject, Color, ObjectId, ObjectStore, Shape};
use crate::grid;
use crate::hit;
use crate::input::{Button, CursorStyle, InputState};
use crate::viewport::{Point, Viewport, WorldRect};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// State visible to the render pass changed; draw a frame.
    RenderNeeded,
    ObjectCreated { index: usize, id: ObjectId, location: Point },
    ObjectMoved { index: usize, id: ObjectId, location: Point },
    SetCursor { cursor: String },
    /// An animation is running; call [`EngineCore::on_animation_frame`] next frame.
    AnimationFrameRequested,
}

/// A scripted input event. Mirrors the `EngineCore` entry points one to one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown { x: f64, y: f64, button: Button },
    PointerMove { x: f64, y: f64 },
    PointerUp { x: f64, y: f64, button: Button },
    Wheel { x: f64, y: f64, dy: f64 },
    Resize { width: f64, height: f64 },
    AddObject,
    ResetView { now_ms: f64 },
    Frame { now_ms: f64 },
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from the browser-bound [`crate::wasm::Engine`] so it can be tested
/// without WASM/browser dependencies. The viewport and object store are only
/// mutated through the handlers below.
pub struct EngineCore {
    pub config: CanvasConfig,
    pub viewport: Viewport,
    pub doc: ObjectStore,
    pub input: InputState,
    pub animation: AnimationDriver,
    /// Last pointer position in screen space.
    pub pointer_screen: Point,
    /// Last pointer position in world space, refreshed whenever the pointer or the view moves.
    pub pointer_world: Point,
    cursor: CursorStyle,
    /// The running reset transition, whose target follows the screen center.
    reset: Option<AnimationHandle>,
    rng: StdRng,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_valid_config(CanvasConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an engine from `config` after validating it.
    ///
    /// # Errors
    ///
    /// Returns the first invariant the config violates.
    pub fn try_new(config: CanvasConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: CanvasConfig) -> Self {
        let viewport = Viewport::new(config.zoom_min, config.zoom_max, config.grid_cell_size);
        let rng = StdRng::seed_from_u64(config.seed.unwrap_or_default());
        Self {
            config,
            viewport,
            doc: ObjectStore::new(),
            input: InputState::Idle,
            animation: AnimationDriver::new(),
            pointer_screen: Point::default(),
            pointer_world: Point::default(),
            cursor: CursorStyle::Default,
            reset: None,
            rng,
        }
    }

    // --- Input events ---

    /// Start a pan or a drag, depending on `button` and what is under the pointer.
    ///
    /// Ignored while another gesture is in progress.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        let mut actions = Vec::new();
        if !self.input.is_idle() {
            return actions;
        }
        self.pointer_screen = screen_pt;
        self.pointer_world = self.viewport.screen_to_world(screen_pt);

        if button == self.config.pan_button {
            self.animation.stop();
            self.input = InputState::Panning { last_screen: screen_pt, offset_at_start: self.viewport.offset() };
            tracing::debug!(x = screen_pt.x, y = screen_pt.y, "pan started");
        } else if button == self.config.drag_button {
            if let Some(index) = hit::top_hit_at(self.pointer_world, &self.doc) {
                self.input = InputState::DraggingObject { index };
                tracing::debug!(index, "drag started");
            }
        }

        self.push_cursor(&mut actions);
        actions
    }

    /// Advance the active gesture and recompute hover flags.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        let mut actions = Vec::new();
        let mut render = self.config.show_pointer;
        self.pointer_screen = screen_pt;

        match self.input {
            InputState::Panning { last_screen, offset_at_start } => {
                self.viewport.pan(screen_pt - last_screen);
                self.input = InputState::Panning { last_screen: screen_pt, offset_at_start };
                render = true;
            }
            InputState::DraggingObject { index } => {
                let world = self.viewport.screen_to_world(screen_pt);
                let cell = self.viewport.grid_cell_size();
                if let Some(obj) = self.doc.get_mut(index) {
                    let next = grid::snap(world - obj.shape.size() / 2.0, cell);
                    if next != obj.location {
                        obj.location = next;
                        actions.push(Action::ObjectMoved { index, id: obj.id, location: next });
                        render = true;
                    }
                }
            }
            InputState::Idle => {}
        }

        self.pointer_world = self.viewport.screen_to_world(screen_pt);
        if hit::update_hover(self.pointer_world, &mut self.doc) {
            render = true;
        }

        self.push_cursor(&mut actions);
        if render {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    /// End whatever gesture is active, whichever button was released.
    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        let mut actions = Vec::new();
        self.pointer_screen = screen_pt;
        if let Some(delta) = self.input.pan_delta(self.viewport.offset()) {
            tracing::debug!(?button, dx = delta.x, dy = delta.y, "pan ended");
        } else if let Some(index) = self.input.dragged_index() {
            tracing::debug!(?button, index, "drag ended");
        }
        self.input = InputState::Idle;
        self.push_cursor(&mut actions);
        actions
    }

    /// Zoom one step in or out around the pointer. Only the sign of `dy` matters.
    pub fn on_wheel(&mut self, screen_pt: Point, dy: f64) -> Vec<Action> {
        let mut actions = Vec::new();
        self.pointer_screen = screen_pt;
        if dy == 0.0 || dy.is_nan() {
            return actions;
        }

        self.animation.stop();
        let delta = -dy.signum() * self.config.zoom_step;
        let zoomed = self.viewport.zoom_by(delta, screen_pt);
        self.pointer_world = self.viewport.screen_to_world(screen_pt);
        let hover_changed = hit::update_hover(self.pointer_world, &mut self.doc);
        if zoomed {
            tracing::debug!(zoom = self.viewport.zoom(), "zoom changed");
        }

        self.push_cursor(&mut actions);
        if zoomed || hover_changed || self.config.show_pointer {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    /// Record a new screen size. The world origin is recentered on screen.
    pub fn on_resize(&mut self, width: f64, height: f64) -> Vec<Action> {
        self.viewport.resize(width, height);
        if let Some(handle) = self.reset {
            let center = self.viewport.screen_center();
            if self.animation.retarget_offset(handle, center) {
                tracing::debug!(x = center.x, y = center.y, "reset target moved");
            }
        }
        self.pointer_world = self.viewport.screen_to_world(self.pointer_screen);
        hit::update_hover(self.pointer_world, &mut self.doc);
        let mut actions = Vec::new();
        self.push_cursor(&mut actions);
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Placement / view requests ---

    /// Place a default rectangle at a random snapped point on screen.
    ///
    /// The point is drawn from the visible world rect shrunk by one grid cell
    /// on each side; when that leaves no room, the visible top-left is used.
    pub fn add_object(&mut self) -> Vec<Action> {
        let cell = self.viewport.grid_cell_size();
        let visible = self.viewport.visible_world_rect();
        let area = visible.inset(cell);
        let point = if area.is_empty() {
            Point::new(visible.left, visible.top)
        } else {
            Point::new(self.rng.random_range(area.left..area.right), self.rng.random_range(area.top..area.bottom))
        };
        let location = grid::snap(point, cell);
        let hue = COLOR_HUE_BASE + self.rng.random::<f64>() * COLOR_HUE_SPAN;
        let shape = Shape::Rectangle {
            width: self.config.default_object_width,
            height: self.config.default_object_height,
            color: Color::hsl(hue),
        };

        let index = self.doc.add(shape, location);
        let Some(id) = self.doc.get(index).map(|o| o.id) else {
            return Vec::new();
        };
        hit::update_hover(self.pointer_world, &mut self.doc);
        tracing::info!(index, id, x = location.x, y = location.y, "object added");

        let mut actions = vec![Action::ObjectCreated { index, id, location }];
        self.push_cursor(&mut actions);
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Animate back to the world origin at the screen center and zoom 1.0.
    pub fn reset_view(&mut self, now_ms: f64) -> Vec<Action> {
        let (zoom_min, zoom_max) = self.viewport.zoom_range();
        let target = ViewTarget { offset: self.viewport.screen_center(), zoom: RESET_ZOOM.clamp(zoom_min, zoom_max) };
        self.reset = Some(self.animation.animate_to(&self.viewport, target, self.config.reset_duration_ms, now_ms));
        tracing::info!(x = target.offset.x, y = target.offset.y, zoom = target.zoom, "reset view");
        vec![Action::AnimationFrameRequested]
    }

    /// Advance the running animation to `now_ms`.
    pub fn on_animation_frame(&mut self, now_ms: f64) -> Vec<Action> {
        let step = self.animation.tick(now_ms, &mut self.viewport);
        if step == AnimationStep::Idle {
            return Vec::new();
        }

        self.pointer_world = self.viewport.screen_to_world(self.pointer_screen);
        hit::update_hover(self.pointer_world, &mut self.doc);
        let mut actions = Vec::new();
        self.push_cursor(&mut actions);
        actions.push(Action::RenderNeeded);
        if step == AnimationStep::Pending {
            actions.push(Action::AnimationFrameRequested);
        }
        actions
    }

    /// Route a scripted event to its handler.
    pub fn dispatch(&mut self, event: &InputEvent) -> Vec<Action> {
        match *event {
            InputEvent::PointerDown { x, y, button } => self.on_pointer_down(Point::new(x, y), button),
            InputEvent::PointerMove { x, y } => self.on_pointer_move(Point::new(x, y)),
            InputEvent::PointerUp { x, y, button } => self.on_pointer_up(Point::new(x, y), button),
            InputEvent::Wheel { x, y, dy } => self.on_wheel(Point::new(x, y), dy),
            InputEvent::Resize { width, height } => self.on_resize(width, height),
            InputEvent::AddObject => self.add_object(),
            InputEvent::ResetView { now_ms } => self.reset_view(now_ms),
            InputEvent::Frame { now_ms } => self.on_animation_frame(now_ms),
        }
    }

    // --- Queries ---

    /// The current viewport state.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The part of the world currently on screen.
    #[must_use]
    pub fn visible_world_rect(&self) -> WorldRect {
        self.viewport.visible_world_rect()
    }

    /// Look up an object by store index.
    #[must_use]
    pub fn object(&self, index: usize) -> Option<&CanvasObject> {
        self.doc.get(index)
    }

    /// The cursor style last reported through [`Action::SetCursor`].
    #[must_use]
    pub fn cursor(&self) -> CursorStyle {
        self.cursor
    }

    fn push_cursor(&mut self, actions: &mut Vec<Action>) {
        let next = match self.input {
            InputState::Panning { .. } => CursorStyle::Grabbing,
            InputState::DraggingObject { .. } => CursorStyle::Move,
            InputState::Idle if self.doc.z_ordered().any(|(_, o)| o.is_hovered) => CursorStyle::Pointer,
            InputState::Idle => CursorStyle::Default,
        };
        if next != self.cursor {
            self.cursor = next;
            actions.push(Action::SetCursor { cursor: next.as_css().to_string() });
        }
    }
}
