//! Browser bridge for `particle-field`.
//!
//! The page owns the animation-frame loop, DOM events and the Fullscreen
//! API. It forwards everything here through the `field_*` exports and calls
//! `field_tick()` once per `requestAnimationFrame`.

pub mod canvas;
pub mod runner;

pub use canvas::CanvasSurface;
pub use runner::FieldRunner;

use std::cell::RefCell;

use particle_field::{
    decode_message, Command, DisplayMode, FieldConfig, InputEvent, ParamUpdate, Viewport,
};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<FieldRunner<CanvasSurface>>> = const { RefCell::new(None) };
}

/// Run `f` against the live runner. Calls made before `field_init` are
/// logged and dropped.
fn with_runner<R>(f: impl FnOnce(&mut FieldRunner<CanvasSurface>) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        match borrow.as_mut() {
            Some(runner) => Some(f(runner)),
            None => {
                log::warn!("particle field not initialized; call field_init() first");
                None
            }
        }
    })
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Attach the field to `<canvas id=canvas_id>`. `config_json` may be empty,
/// in which case defaults are used with a clock-derived seed.
#[wasm_bindgen]
pub fn field_init(canvas_id: &str, width: f32, height: f32, config_json: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = if config_json.trim().is_empty() {
        FieldConfig::default().with_seed(js_sys::Date::now() as u64)
    } else {
        FieldConfig::from_json(config_json).map_err(to_js)?
    };
    let surface = CanvasSurface::from_element_id(canvas_id)?;
    let runner = FieldRunner::new(&config, Viewport::new(width, height), DisplayMode::Normal, surface);

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("particle field: initialized on #{}", canvas_id);
    Ok(())
}

#[wasm_bindgen]
pub fn field_tick() -> bool {
    with_runner(|r| r.tick()).unwrap_or(false)
}

// ---- Input ----

#[wasm_bindgen]
pub fn field_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.submit(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn field_pointer_leave() {
    with_runner(|r| r.submit(InputEvent::PointerLeave));
}

/// Page-level pointer position, in viewport coordinates.
#[wasm_bindgen]
pub fn field_page_pointer_move(x: f32) {
    with_runner(|r| r.submit(InputEvent::PagePointerMove { x }));
}

#[wasm_bindgen]
pub fn field_resize(width: f32, height: f32) {
    with_runner(|r| r.submit(InputEvent::Resize { width, height }));
}

#[wasm_bindgen]
pub fn field_key_down(key_code: u32) {
    with_runner(|r| r.submit(InputEvent::KeyDown { key_code }));
}

/// The host's display mode changed ("normal", "controlsHidden", "fullscreen").
#[wasm_bindgen]
pub fn field_set_display_mode(mode: &str) -> Result<(), JsValue> {
    let mode = DisplayMode::from_name(mode)
        .ok_or_else(|| JsValue::from_str(&format!("unknown display mode '{}'", mode)))?;
    with_runner(|r| r.submit(InputEvent::DisplayMode(mode)));
    Ok(())
}

/// Right edge of the controls panel in viewport px; `None` when it has no
/// on-screen footprint.
#[wasm_bindgen]
pub fn field_set_controls_edge(edge: Option<f32>) {
    with_runner(|r| r.set_controls_edge(edge));
}

// ---- Controls ----

/// Set a named parameter from its raw control value.
#[wasm_bindgen]
pub fn field_set_param(name: &str, value: &str) -> Result<(), JsValue> {
    let update = ParamUpdate::parse(name, value).map_err(to_js)?;
    with_runner(|r| r.submit(InputEvent::Param(update)));
    Ok(())
}

/// Run a button command: "reset", "togglePause" or "toggleFullscreen".
#[wasm_bindgen]
pub fn field_command(name: &str) -> Result<(), JsValue> {
    let command = Command::from_name(name).map_err(to_js)?;
    with_runner(|r| r.submit(InputEvent::Command(command)));
    Ok(())
}

/// Accept any bridge message in its JSON form.
#[wasm_bindgen]
pub fn field_message(json: &str) -> Result<(), JsValue> {
    let event = decode_message(json).map_err(to_js)?;
    with_runner(|r| r.submit(event));
    Ok(())
}

// ---- State for the controls UI ----

/// "enter" or "exit" when the host should change fullscreen state.
#[wasm_bindgen]
pub fn field_take_fullscreen_request() -> Option<String> {
    with_runner(|r| r.take_fullscreen_request())
        .flatten()
        .map(|request| request.as_str().to_string())
}

#[wasm_bindgen]
pub fn field_pause_label() -> String {
    with_runner(|r| r.pause_label().to_string()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn field_fullscreen_label() -> String {
    with_runner(|r| r.fullscreen_label().to_string()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn field_display_mode() -> String {
    with_runner(|r| r.display_mode().to_string()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn field_is_paused() -> bool {
    with_runner(|r| r.field().is_paused()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn field_particle_count() -> u32 {
    with_runner(|r| r.field().particles().len() as u32).unwrap_or(0)
}

#[wasm_bindgen]
pub fn field_width() -> f32 {
    with_runner(|r| r.field().size().x).unwrap_or(0.0)
}

#[wasm_bindgen]
pub fn field_height() -> f32 {
    with_runner(|r| r.field().size().y).unwrap_or(0.0)
}
