use leptos::prelude::*;
use crate::console;
use crate::propulsion::{format_grouped, CalculatorInput, CalculatorState};

#[component]
fn Slider(input: CalculatorInput, state: RwSignal<CalculatorState>) -> impl IntoView {
    let range = input.range();
    let value = move || state.with(|s| s.get(input));

    view! {
        <div class="slider">
            <div class="slider-head">
                <label>{input.label()}</label>
                <span class="slider-value">
                    {move || format!("{} {}", format_grouped(value()), input.unit())}
                </span>
            </div>
            <input
                type="range"
                min=range.min.to_string()
                max=range.max.to_string()
                step=range.step.to_string()
                prop:value=move || value().to_string()
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    state.update(|s| {
                        if let Err(e) = s.set_from_str(input, &raw) {
                            console::warn(&format!("{}: {}", input.label(), e));
                        }
                    });
                }
            />
        </div>
    }
}

#[component]
fn Readout(label: &'static str, unit: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="readout">
            <div class="eyebrow">{label}</div>
            <div class="readout-value">
                <span class="stat">{move || value.get()}</span>
                <span class="unit">{unit}</span>
            </div>
        </div>
    }
}

#[component]
pub fn ThrustCalculator() -> impl IntoView {
    let state = RwSignal::new(CalculatorState::default());
    let outputs = Memo::new(move |_| state.get().outputs());

    let thrust = Signal::derive(move || outputs.get().thrust_display());
    let isp = Signal::derive(move || outputs.get().specific_impulse_display());
    let chamber = Signal::derive(move || outputs.get().chamber_temperature_display());

    view! {
        <section class="calculator">
            <div class="container">
                <div class="section-head">
                    <span class="eyebrow">"Performance Lab"</span>
                    <h2>"Thrust & Isp Calculator"</h2>
                    <p class="muted">
                        "Adjust mass flow, exhaust velocity, and pressure terms to see real-time thrust and specific impulse in SI units."
                    </p>
                </div>

                <div class="calc-grid">
                    <div class="glass-panel sliders">
                        {CalculatorInput::ALL
                            .into_iter()
                            .map(|input| view! { <Slider input=input state=state /> })
                            .collect::<Vec<_>>()}
                    </div>
                    <div class="glass-panel readouts">
                        <Readout label="Thrust" unit="N" value=thrust />
                        <Readout label="Specific Impulse" unit="s" value=isp />
                        <Readout label="Chamber Temp (est.)" unit="K" value=chamber />
                    </div>
                </div>
            </div>
        </section>
    }
}
