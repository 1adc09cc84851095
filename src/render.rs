//! Rendering: draws the full canvas scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only views of document state and viewport state and produces
//! pixels. It does not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::wasm::Engine::render`]) handles the result.

use std::f64::consts::PI;

use js_sys::Array;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{
    AXIS_DASH_PX, AXIS_STROKE, GRID_STROKE, HOVER_STROKE, HOVER_STROKE_PX, MAX_GRID_LINES, POINTER_FILL,
    POINTER_RADIUS_PX,
};
use crate::doc::{CanvasObject, ObjectStore, Shape};
use crate::grid;
use crate::viewport::{Point, Viewport, WorldRect};

/// Draw the full scene: grid, axes, objects, and the optional pointer marker.
///
/// `dpr` is the device pixel ratio; everything else is in CSS pixels or world
/// units as read from `viewport`.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    doc: &ObjectStore,
    viewport: &Viewport,
    pointer_world: Option<Point>,
    dpr: f64,
) -> Result<(), JsValue> {
    let (screen_w, screen_h) = viewport.screen_size();
    let offset = viewport.offset();
    let zoom = viewport.zoom();

    // Layer 1: clear and set up transforms.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, screen_w, screen_h);
    ctx.translate(offset.x, offset.y)?;
    ctx.scale(zoom, zoom)?;

    // Layer 2: grid and world axes.
    let visible = viewport.visible_world_rect();
    draw_grid(ctx, &visible, viewport.grid_cell_size(), zoom);
    draw_axes(ctx, &visible, zoom)?;

    // Layer 3: objects in z-order (bottom first).
    for (_, obj) in doc.z_ordered() {
        draw_object(ctx, obj, zoom);
    }

    // Layer 4: pointer marker.
    if let Some(p) = pointer_world {
        draw_pointer(ctx, p, zoom)?;
    }

    Ok(())
}

// =============================================================
// Background
// =============================================================

fn draw_grid(ctx: &CanvasRenderingContext2d, visible: &WorldRect, cell: f64, zoom: f64) {
    ctx.set_stroke_style_str(GRID_STROKE);
    ctx.set_line_width(1.0 / zoom);
    ctx.begin_path();

    for x in grid::line_positions(visible.left, visible.right, cell, MAX_GRID_LINES) {
        ctx.move_to(x, visible.top);
        ctx.line_to(x, visible.bottom);
    }
    for y in grid::line_positions(visible.top, visible.bottom, cell, MAX_GRID_LINES) {
        ctx.move_to(visible.left, y);
        ctx.line_to(visible.right, y);
    }

    ctx.stroke();
}

fn draw_axes(ctx: &CanvasRenderingContext2d, visible: &WorldRect, zoom: f64) -> Result<(), JsValue> {
    let dash = JsValue::from_f64(AXIS_DASH_PX / zoom);
    ctx.set_stroke_style_str(AXIS_STROKE);
    ctx.set_line_width(2.0 / zoom);
    ctx.set_line_dash(&Array::of2(&dash, &dash))?;

    ctx.begin_path();
    ctx.move_to(visible.left, 0.0);
    ctx.line_to(visible.right, 0.0);
    ctx.move_to(0.0, visible.top);
    ctx.line_to(0.0, visible.bottom);
    ctx.stroke();

    ctx.set_line_dash(&Array::new())?;
    Ok(())
}

// =============================================================
// Objects
// =============================================================

fn draw_object(ctx: &CanvasRenderingContext2d, obj: &CanvasObject, zoom: f64) {
    match &obj.shape {
        Shape::Rectangle { width, height, color } => {
            let loc = obj.location;
            ctx.set_fill_style_str(color.as_str());
            ctx.fill_rect(loc.x, loc.y, *width, *height);

            if obj.is_hovered {
                ctx.set_stroke_style_str(HOVER_STROKE);
                ctx.set_line_width(HOVER_STROKE_PX / zoom);
                ctx.stroke_rect(loc.x, loc.y, *width, *height);
            }
        }
    }
}

fn draw_pointer(ctx: &CanvasRenderingContext2d, p: Point, zoom: f64) -> Result<(), JsValue> {
    ctx.set_fill_style_str(POINTER_FILL);
    ctx.begin_path();
    ctx.arc(p.x, p.y, POINTER_RADIUS_PX / zoom, 0.0, PI * 2.0)?;
    ctx.fill();
    Ok(())
}
