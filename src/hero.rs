use leptos::prelude::*;
use wasm_bindgen::JsCast;
use crate::canvas::{self, Listener};
use crate::console;
use crate::constants::{HERO_LOAD_TIMEOUT, HERO_SCENE_URL};
use crate::errors::SurfaceError;

/// Load state of the embedded 3D scene. `Ready` and `Failed` are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneStatus {
    Loading,
    Ready,
    Failed,
}

impl SceneStatus {
    pub fn is_final(&self) -> bool {
        !matches!(self, SceneStatus::Loading)
    }

    pub fn loaded(self) -> Self {
        if self.is_final() { self } else { SceneStatus::Ready }
    }

    pub fn failed(self) -> Self {
        if self.is_final() { self } else { SceneStatus::Failed }
    }

    /// The scene stays visible while loading so a slow load is not hidden.
    pub fn shows_scene(&self) -> bool {
        !matches!(self, SceneStatus::Failed)
    }
}

fn watch_scene(status: RwSignal<SceneStatus>) -> Result<(), SurfaceError> {
    let el = canvas::window()?
        .document()
        .ok_or(SurfaceError::NoWindow)?
        .get_element_by_id("heroScene")
        .ok_or_else(|| SurfaceError::MissingElement("heroScene".to_string()))?;
    let target: web_sys::EventTarget = el.unchecked_into();

    let on_load = Listener::new(&target, "load-complete", true, move |_| {
        status.update(|s| *s = s.loaded());
    });
    let on_error = Listener::new(&target, "error", true, move |_| {
        console::warn("hero scene failed to load");
        status.update(|s| *s = s.failed());
    });
    let timeout = gloo_timers::callback::Timeout::new(HERO_LOAD_TIMEOUT, move || {
        if !status.get_untracked().is_final() {
            console::warn("hero scene load timed out");
            status.update(|s| *s = s.failed());
        }
    });

    let guards = send_wrapper::SendWrapper::new((on_load, on_error, timeout));
    on_cleanup(move || drop(guards));
    Ok(())
}

#[component]
pub fn HeroCover() -> impl IntoView {
    let status = RwSignal::new(SceneStatus::Loading);

    Effect::new(move |_| {
        if let Err(e) = watch_scene(status) {
            console::warn(&format!("hero scene unavailable: {}", e));
            status.update(|s| *s = s.failed());
        }
    });

    view! {
        <section class="hero">
            <div class="hero-scene" class:hidden=move || !status.get().shows_scene()>
                <spline-viewer id="heroScene" url=HERO_SCENE_URL></spline-viewer>
            </div>
            <div class="hero-glow"></div>
            <div class="hero-content">
                <div class="badge">"Aerospace-grade showcase"</div>
                <h1>
                    "Rockets & Engines"
                    <span class="gradient-text">"in Cinematic Detail"</span>
                </h1>
                <p class="lede">
                    "Explore ultra-realistic engine mechanisms, precision specs, and interactive systems with parallax motion crafted for performance."
                </p>
                <div class="hero-actions">
                    <a href="#engine" class="btn btn-primary">"Enter Engine Bay \u{2192}"</a>
                    <a href="#parallax" class="btn btn-ghost">"Experience Parallax"</a>
                </div>
                <div class="scroll-hint">"Scroll"</div>
            </div>
        </section>
    }
}
