use std::cell::{Cell, RefCell};
use std::rc::Rc;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use crate::canvas::{self, Listener};
use crate::errors::SurfaceError;

/// Coalesces scroll events into at most one committed sample per frame.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScrollTracker {
    value: f64,
    pending: bool,
}

impl ScrollTracker {
    pub fn new() -> Self {
        ScrollTracker::default()
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Called for every scroll event. Returns true only for the first event
    /// of a frame, i.e. when the caller has to schedule an update.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Applies the live offset read inside the scheduled frame.
    pub fn commit(&mut self, live: f64) -> f64 {
        self.pending = false;
        if live.is_finite() {
            self.value = live;
        }
        self.value
    }

    pub fn cancel(&mut self) {
        self.pending = false;
    }
}

/// Page scroll offset shared with every parallax consumer.
#[derive(Debug, Clone, Copy)]
pub struct ScrollSample(pub ReadSignal<f64>);

pub fn use_scroll() -> ReadSignal<f64> {
    use_context::<ScrollSample>()
        .map(|s| s.0)
        .unwrap_or_else(|| RwSignal::new(0.0).read_only())
}

/// Live `scroll` listener feeding a `ScrollTracker`. Dropping it removes the
/// listener and cancels a pending frame.
pub struct ScrollSubscription {
    tracker: Rc<RefCell<ScrollTracker>>,
    pending_frame: Rc<Cell<Option<i32>>>,
    window: Window,
    _listener: Listener,
}

impl ScrollSubscription {
    pub fn value(&self) -> f64 {
        self.tracker.borrow().value()
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(id) = self.pending_frame.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        self.tracker.borrow_mut().cancel();
    }
}

pub fn subscribe<F>(on_sample: F) -> Result<ScrollSubscription, SurfaceError>
where
    F: Fn(f64) + 'static,
{
    let window = canvas::window()?;
    let tracker = Rc::new(RefCell::new(ScrollTracker::new()));
    let pending_frame: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let tracker_frame = tracker.clone();
    let pending_apply = pending_frame.clone();
    let window_frame = window.clone();
    let apply = Rc::new(Closure::wrap(Box::new(move |_: f64| {
        pending_apply.set(None);
        let live = window_frame.scroll_y().unwrap_or(0.0);
        let value = tracker_frame.borrow_mut().commit(live);
        on_sample(value);
    }) as Box<dyn FnMut(f64)>));

    let tracker_scroll = tracker.clone();
    let pending_scroll = pending_frame.clone();
    let window_scroll = window.clone();
    let schedule = move || {
        if !tracker_scroll.borrow_mut().request() {
            return;
        }
        match window_scroll.request_animation_frame((*apply).as_ref().unchecked_ref()) {
            Ok(id) => pending_scroll.set(Some(id)),
            Err(_) => tracker_scroll.borrow_mut().cancel(),
        }
    };

    // Initial sample before the first scroll
    schedule();
    let listener = Listener::new(&window, "scroll", true, move |_| schedule());

    Ok(ScrollSubscription {
        tracker,
        pending_frame,
        window,
        _listener: listener,
    })
}
