use leptos::html;
use leptos::prelude::*;
use crate::console;
use crate::constants::*;
use crate::parallax::ParallaxLayer;
use crate::scroll::use_scroll;
use crate::starfield;

#[component]
fn StarfieldCanvas() -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let scroll = use_scroll();

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        // A page without a usable canvas simply has no stars
        match starfield::mount(canvas, move || scroll.try_get_untracked().unwrap_or(0.0)) {
            Ok(handle) => {
                let handle = send_wrapper::SendWrapper::new(handle);
                on_cleanup(move || drop(handle));
            }
            Err(e) => console::warn(&format!("starfield disabled: {}", e)),
        }
    });

    view! { <canvas class="starfield" node_ref=canvas_ref></canvas> }
}

#[component]
fn Layer(#[prop(default = 0.1)] speed: f64, children: Children) -> impl IntoView {
    let scroll = use_scroll();
    let layer = ParallaxLayer::new(speed);

    view! {
        <div class="parallax-layer" style:transform=move || layer.transform(scroll.get())>
            {children()}
        </div>
    }
}

#[component]
fn Milestone(title: &'static str, body: &'static str, accent: &'static str) -> impl IntoView {
    view! {
        <div class="glass-panel">
            <h3>{title}</h3>
            <p class="muted">{body}</p>
            <div class=format!("milestone-band {}", accent)></div>
        </div>
    }
}

#[component]
pub fn ParallaxGallery() -> impl IntoView {
    view! {
        <section id="parallax" class="gallery">
            <div class="gallery-stage">
                <div class="gallery-sky">
                    <StarfieldCanvas />
                </div>
                <div class="gallery-glow"></div>

                <div class="container gallery-content">
                    <Layer speed=HEADING_SPEED>
                        <h2>"Parallax Flight Path"</h2>
                        <p class="muted">
                            "Scroll to navigate between launch, max-Q, stage separation, and orbital insertion with smooth depth cues."
                        </p>
                    </Layer>

                    <div class="milestones">
                        <Layer speed=LAUNCH_SPEED>
                            <Milestone
                                title="Launch \u{2014} T+0"
                                body="Thrust vectoring and engine startup transient captured with microsecond precision."
                                accent="accent-ember"
                            />
                        </Layer>
                        <Layer speed=MAX_Q_SPEED>
                            <Milestone
                                title="Max-Q \u{2014} T+70s"
                                body="Dynamic pressure peaks; guidance holds attitude while throttling minimizes aero loads."
                                accent="accent-ice"
                            />
                        </Layer>
                        <Layer speed=STAGE_SEP_SPEED>
                            <Milestone
                                title="Stage Sep \u{2014} T+150s"
                                body="Pneumatic pushers and hot-staging skirt sequence co-optimized for impulse continuity."
                                accent="accent-violet"
                            />
                        </Layer>
                    </div>
                </div>
            </div>
        </section>
    }
}
