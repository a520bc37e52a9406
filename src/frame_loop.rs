use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;
use crate::canvas;
use crate::errors::SurfaceError;

/// Shared stop flag checked by a loop before and after every tick.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// One unit of per-frame work plus its token. `tick` runs the work and
/// reports whether the loop should be re-enqueued.
pub struct TaskLoop<F: FnMut(f64)> {
    token: CancelToken,
    work: F,
}

impl<F: FnMut(f64)> TaskLoop<F> {
    pub fn new(token: CancelToken, work: F) -> Self {
        TaskLoop { token, work }
    }

    pub fn tick(&mut self, timestamp: f64) -> bool {
        if self.token.is_cancelled() {
            return false;
        }
        (self.work)(timestamp);
        !self.token.is_cancelled()
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A `TaskLoop` driven by `requestAnimationFrame`. Dropping the handle
/// cancels the loop and any frame still pending.
pub struct FrameLoop {
    token: CancelToken,
    pending: Rc<Cell<Option<i32>>>,
    window: Window,
    _callback: FrameCallback,
}

impl FrameLoop {
    pub fn start<F>(work: F) -> Result<FrameLoop, SurfaceError>
    where
        F: FnMut(f64) + 'static,
    {
        let window = canvas::window()?;
        let token = CancelToken::new();
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let mut task = TaskLoop::new(token.clone(), work);
        let this = Rc::downgrade(&callback);
        let pending_tick = pending.clone();
        let window_tick = window.clone();

        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            pending_tick.set(None);
            if !task.tick(timestamp) {
                return;
            }
            // Re-enqueue for the next frame
            if let Some(cb) = this.upgrade() {
                if let Some(cb) = cb.borrow().as_ref() {
                    if let Ok(id) = window_tick.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        pending_tick.set(Some(id));
                    }
                }
            }
        }) as Box<dyn FnMut(f64)>));

        if let Some(cb) = callback.borrow().as_ref() {
            let id = window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .map_err(|_| SurfaceError::NoWindow)?;
            pending.set(Some(id));
        }

        Ok(FrameLoop {
            token,
            pending,
            window,
            _callback: callback,
        })
    }

    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn cancel(&self) {
        self.token.cancel();
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
