//! Rocket & engine showcase page.
//!
//! A Leptos CSR app: hero with an embedded 3D scene, tilt cards, a
//! scroll-driven parallax gallery over an animated starfield, and a
//! thrust / specific impulse calculator.

pub mod app;
pub mod calculator;
pub mod canvas;
pub mod console;
pub mod constants;
pub mod errors;
pub mod frame_loop;
pub mod gallery;
pub mod hero;
pub mod parallax;
pub mod propulsion;
pub mod scroll;
pub mod showcase;
pub mod starfield;
pub mod tilt;

pub use parallax::ParallaxLayer;
pub use propulsion::{CalculatorInput, CalculatorState, PropulsionOutputs};
pub use scroll::ScrollTracker;
pub use starfield::{Particle, RandomSource, Starfield};
