use leptos::html;
use leptos::prelude::*;
use crate::tilt;

struct EnginePart {
    title: &'static str,
    stat: &'static str,
    unit: &'static str,
    desc: &'static str,
    accent: &'static str,
}

static PARTS: [EnginePart; 4] = [
    EnginePart {
        title: "Combustion Chamber",
        stat: "21.2",
        unit: "MPa",
        desc: "High-pressure, oxygen-rich combustion stabilized with coaxial injectors and film cooling.",
        accent: "accent-ember",
    },
    EnginePart {
        title: "Turbopump",
        stat: "87k",
        unit: "rpm",
        desc: "Dual-stage axial inducer feeding a high-efficiency centrifugal pump impeller.",
        accent: "accent-ice",
    },
    EnginePart {
        title: "Nozzle",
        stat: "340",
        unit: "s Isp",
        desc: "Expansion ratio tuned for sea-level and vacuum performance using adaptive skirt.",
        accent: "accent-violet",
    },
    EnginePart {
        title: "Gimbal",
        stat: "7.5",
        unit: "deg",
        desc: "Electrohydraulic vectoring with high-bandwidth control loops and fault tolerance.",
        accent: "accent-teal",
    },
];

#[component]
fn PartCard(part: &'static EnginePart) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();

    view! {
        <div
            class="part-card"
            node_ref=card_ref
            on:mousemove=move |e: web_sys::MouseEvent| {
                if let Some(el) = card_ref.get() {
                    tilt::apply_pointer(&el, &e);
                }
            }
            on:mouseleave=move |_| {
                if let Some(el) = card_ref.get() {
                    tilt::reset(&el);
                }
            }
        >
            <div class=format!("part-glow {}", part.accent)></div>
            <h3>{part.title}</h3>
            <div class="part-stat">
                <span class="stat">{part.stat}</span>
                <span class="unit">{part.unit}</span>
            </div>
            <p class="muted">{part.desc}</p>
            <div class="part-footer">
                <span>"Live Telemetry"</span>
                <span class="status"><span class="pulse-dot"></span>" Stable"</span>
            </div>
        </div>
    }
}

#[component]
fn FlowDiagram() -> impl IntoView {
    view! {
        <svg viewBox="0 0 900 360" class="flow-diagram">
            <defs>
                <linearGradient id="flowStroke" x1="0" x2="1" y1="0" y2="0">
                    <stop offset="0%" stop-color="#60A5FA" />
                    <stop offset="100%" stop-color="#A78BFA" />
                </linearGradient>
            </defs>
            <g fill="none" stroke="url(#flowStroke)" stroke-width="2">
                <circle cx="90" cy="80" r="40" />
                <circle cx="90" cy="280" r="40" />
                <path d="M130,80 C200,80 260,90 320,120" />
                <path d="M130,280 C200,280 260,270 320,240" />
                <rect x="320" y="140" width="120" height="80" rx="12" />
                <path d="M440,180 C520,180 560,160 620,160" />
                <ellipse cx="660" cy="170" rx="26" ry="36" />
                <path d="M690,170 C740,190 790,230 840,280" />
                <path d="M690,170 C740,150 790,110 840,60" />
            </g>
            <g class="flow-label" text-anchor="middle">
                <text x="90" y="85">"LOX"</text>
                <text x="90" y="285">"LCH4"</text>
                <text x="380" y="185">"Turbopump"</text>
                <text x="660" y="175">"Chamber"</text>
                <text x="820" y="185">"Nozzle"</text>
            </g>
        </svg>
    }
}

#[component]
pub fn EngineShowcase() -> impl IntoView {
    view! {
        <section id="engine" class="showcase">
            <div class="container">
                <div class="section-head">
                    <span class="eyebrow">"Propulsion Architecture"</span>
                    <h2>"Open-Cycle Methalox Engine"</h2>
                    <p class="muted">
                        "A precision system of turbopumps, preburners, and regeneratively cooled nozzles. Explore key subsystems with live, interactive cards."
                    </p>
                </div>

                <div class="part-grid">
                    {PARTS.iter().map(|part| view! { <PartCard part=part /> }).collect::<Vec<_>>()}
                </div>

                <div class="glass-panel diagram">
                    <div>
                        <h3>"Exploded Flow Diagram"</h3>
                        <p class="muted">
                            "Trace propellant pathways from cryogenic tanks to the exhaust plume."
                        </p>
                    </div>
                    <FlowDiagram />
                </div>
            </div>
        </section>
    }
}
