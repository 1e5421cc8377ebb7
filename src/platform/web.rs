//! Browser host: canvas lookup, input listeners and the frame loop

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlCanvasElement, KeyboardEvent, PointerEvent};

use super::{is_autopilot_toggle, is_jump_key, is_text_entry};
use crate::consts::SIM_DT;
use crate::engine::Engine;
use crate::renderer::canvas::CanvasSurface;
use crate::tuning::{Tuning, TuningError};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
}

/// State shared between the page handle and the frame/input callbacks
struct Host {
    engine: RefCell<Engine>,
    canvas_id: String,
    active: Cell<bool>,
    last_time: Cell<f64>,
}

impl Host {
    /// Look the canvas up fresh each frame; it may have been unmounted
    fn surface(&self) -> Option<CanvasSurface> {
        let canvas = web_sys::window()?
            .document()?
            .get_element_by_id(&self.canvas_id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;
        CanvasSurface::from_canvas(&canvas)
    }
}

/// Runner game mounted on a page canvas
#[wasm_bindgen]
pub struct RunnerGame {
    host: Rc<Host>,
    canvas: HtmlCanvasElement,
    on_key: Closure<dyn FnMut(KeyboardEvent)>,
    on_pointer: Closure<dyn FnMut(PointerEvent)>,
}

#[wasm_bindgen]
impl RunnerGame {
    /// Mount onto `<canvas id=canvas_id>`, optionally overriding tuning with JSON
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, tuning_json: Option<String>) -> Result<RunnerGame, JsValue> {
        let tuning = match tuning_json {
            Some(json) => Tuning::from_json(&json).map_err(reject_tuning)?,
            None => Tuning::default(),
        };

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()
            .map_err(|_| JsValue::from_str("not a canvas"))?;
        canvas.set_width(tuning.canvas_width as u32);
        canvas.set_height(tuning.canvas_height as u32);

        let seed = js_sys::Date::now() as u64;
        let engine = Engine::new(tuning, seed).map_err(reject_tuning)?;
        let host = Rc::new(Host {
            engine: RefCell::new(engine),
            canvas_id: canvas_id.to_string(),
            active: Cell::new(true),
            last_time: Cell::new(0.0),
        });
        log::info!("Runner game mounted on #{} with seed {}", canvas_id, seed);

        let on_key = {
            let host = host.clone();
            Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let typing = event
                    .target()
                    .and_then(|target| target.dyn_into::<Element>().ok())
                    .is_some_and(|el| is_text_entry(&el.tag_name()));
                if typing {
                    return;
                }
                if is_jump_key(&event.code()) {
                    event.prevent_default();
                    host.engine.borrow_mut().trigger_input();
                } else if is_autopilot_toggle(&event.key()) {
                    let mut engine = host.engine.borrow_mut();
                    let enabled = !engine.autopilot();
                    engine.set_autopilot(enabled);
                }
            })
        };
        window.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;

        let on_pointer = {
            let host = host.clone();
            Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                host.engine.borrow_mut().trigger_input();
            })
        };
        canvas
            .add_event_listener_with_callback("pointerdown", on_pointer.as_ref().unchecked_ref())?;

        request_animation_frame(host.clone());

        Ok(RunnerGame {
            host,
            canvas,
            on_key,
            on_pointer,
        })
    }

    #[wasm_bindgen(js_name = triggerInput)]
    pub fn trigger_input(&self) {
        self.host.engine.borrow_mut().trigger_input();
    }

    pub fn restart(&self) {
        self.host.engine.borrow_mut().restart();
    }

    /// "idle", "running" or "over"
    pub fn phase(&self) -> String {
        self.host.engine.borrow().phase().as_str().to_string()
    }

    pub fn score(&self) -> u32 {
        self.host.engine.borrow().score()
    }

    #[wasm_bindgen(js_name = highScore)]
    pub fn high_score(&self) -> u32 {
        self.host.engine.borrow().high_score()
    }

    #[wasm_bindgen(js_name = setAutopilot)]
    pub fn set_autopilot(&self, enabled: bool) {
        self.host.engine.borrow_mut().set_autopilot(enabled);
    }

    /// Stop requesting frames and detach input listeners
    pub fn stop(&self) {
        if !self.host.active.replace(false) {
            return;
        }
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("keydown", self.on_key.as_ref().unchecked_ref());
        }
        let _ = self.canvas.remove_event_listener_with_callback(
            "pointerdown",
            self.on_pointer.as_ref().unchecked_ref(),
        );
        log::info!("Runner game on #{} stopped", self.host.canvas_id);
    }
}

impl Drop for RunnerGame {
    fn drop(&mut self) {
        self.stop();
    }
}

fn reject_tuning(err: TuningError) -> JsValue {
    log::warn!("Rejected tuning: {}", err);
    JsValue::from_str(&err.to_string())
}

fn request_animation_frame(host: Rc<Host>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    // Frees itself once the frame has run
    let callback = Closure::once_into_js(move |time: f64| {
        game_loop(host, time);
    });
    let _ = window.request_animation_frame(callback.unchecked_ref());
}

fn game_loop(host: Rc<Host>, time: f64) {
    if !host.active.get() {
        return;
    }

    let last = host.last_time.replace(time);
    let dt = if last > 0.0 {
        ((time - last) / 1000.0) as f32
    } else {
        SIM_DT
    };

    let mut surface = host.surface();
    host.engine.borrow_mut().frame(dt, surface.as_mut());

    request_animation_frame(host);
}
