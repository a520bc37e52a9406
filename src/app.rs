use leptos::prelude::*;
use crate::calculator::ThrustCalculator;
use crate::console;
use crate::gallery::ParallaxGallery;
use crate::hero::HeroCover;
use crate::scroll::{self, ScrollSample};
use crate::showcase::EngineShowcase;

#[component]
pub fn App() -> impl IntoView {
    // Single writer for the page scroll offset; every layer reads it
    let scroll_y = RwSignal::new(0.0_f64);
    provide_context(ScrollSample(scroll_y.read_only()));

    match scroll::subscribe(move |y| scroll_y.set(y)) {
        Ok(sub) => {
            let sub = send_wrapper::SendWrapper::new(sub);
            on_cleanup(move || drop(sub));
        }
        Err(e) => console::error(&format!("scroll tracking unavailable: {}", e)),
    }

    view! {
        <div class="page">
            <HeroCover />
            <EngineShowcase />
            <ParallaxGallery />
            <ThrustCalculator />
            <Footer />
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-row">
                <div class="muted">"Crafted for cinematic aerospace presentations"</div>
                <a href="#">"Back to top \u{2191}"</a>
            </div>
        </footer>
    }
}
