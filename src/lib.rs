//! Viewport and interaction engine for an infinite, pannable, zoomable grid canvas.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! state of the canvas: translating raw DOM input events into pan, zoom, hover
//! and drag updates, keeping placed objects snapped to the grid, animating the
//! viewport, and rendering the scene. The host JavaScript layer is responsible
//! only for wiring DOM events to the engine and acting on the returned
//! [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::EngineCore`] and the gesture state machine |
//! | [`wasm`] | Browser-bound [`wasm::Engine`] exported through `wasm-bindgen` |
//! | [`viewport`] | Pan/zoom viewport and coordinate conversions |
//! | [`grid`] | Grid snapping |
//! | [`doc`] | Object store and canvas object types |
//! | [`hit`] | Hit-testing and hover tracking |
//! | [`input`] | Buttons, cursor styles and gesture states |
//! | [`animation`] | Eased, cancellable viewport transitions |
//! | [`config`] | Validated engine configuration |
//! | [`render`] | Scene rendering to a 2D canvas context |
//! | [`consts`] | Shared numeric constants and defaults |

pub mod animation;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod grid;
pub mod hit;
pub mod input;
pub mod render;
pub mod viewport;
pub mod wasm;
