use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Event, EventTarget, HtmlCanvasElement, Window};
use crate::errors::SurfaceError;

pub fn window() -> Result<Window, SurfaceError> {
    web_sys::window().ok_or(SurfaceError::NoWindow)
}

/// Matches the canvas backing store to its laid-out size and returns it.
pub fn fit_to_container(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let w = canvas.offset_width().max(0);
    let h = canvas.offset_height().max(0);
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    (w as f64, h as f64)
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, SurfaceError> {
    canvas
        .get_context("2d")
        .map_err(|_| SurfaceError::ContextUnavailable)?
        .ok_or(SurfaceError::ContextUnavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| SurfaceError::NotCanvas2d)
}

/// An event listener that unregisters itself when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, passive: bool, handler: F) -> Self
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let mut opts = web_sys::AddEventListenerOptions::new();
        opts.set_passive(passive);
        let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            event, closure.as_ref().unchecked_ref(), &opts,
        );
        Listener {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event,
            self.closure.as_ref().unchecked_ref(),
        );
    }
}
