use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use crate::canvas::{self, Listener};
use crate::console;
use crate::constants::*;
use crate::errors::SurfaceError;
use crate::frame_loop::FrameLoop;

/// Uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// `Math.random()` from the host page.
pub struct JsRandom;

impl RandomSource for JsRandom {
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
    pub size: f64,
}

impl Particle {
    /// Far stars (low depth) drift less than near ones.
    pub fn scroll_offset(&self, scroll: f64) -> f64 {
        scroll * self.depth * STAR_SCROLL_FACTOR
    }

    /// Vertical draw position, wrapped into `[0, height)`.
    pub fn render_y(&self, scroll: f64, height: f64) -> f64 {
        if height <= 0.0 {
            return self.y;
        }
        (self.y + self.scroll_offset(scroll)).rem_euclid(height)
    }

    pub fn alpha(&self) -> f64 {
        0.5 + 0.5 * self.depth
    }
}

pub fn star_color(alpha: f64) -> String {
    let (r, g, b) = STAR_TINT;
    format!("rgba({},{},{},{})", r, g, b, alpha)
}

pub fn particle_count(width: f64, height: f64) -> usize {
    let area = width * height;
    if !area.is_finite() || width <= 0.0 || height <= 0.0 {
        return 0;
    }
    ((area / AREA_PER_STAR).floor() as usize).min(MAX_STARS)
}

pub fn seed_particles<R: RandomSource + ?Sized>(width: f64, height: f64, rng: &mut R) -> Vec<Particle> {
    (0..particle_count(width, height))
        .map(|_| Particle {
            x: rng.next_f64() * width,
            y: rng.next_f64() * height,
            // 1 - [0,1) keeps the upper bound inclusive
            depth: STAR_DEPTH_MIN + (1.0 - rng.next_f64()) * STAR_DEPTH_SPAN,
            size: STAR_SIZE_MIN + (1.0 - rng.next_f64()) * STAR_SIZE_SPAN,
        })
        .collect()
}

/// Minimal 2D surface the starfield draws onto.
pub trait DrawTarget {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_background(&mut self, color: &str, width: f64, height: f64);
    fn draw_star(&mut self, x: f64, y: f64, radius: f64, color: &str);
}

impl DrawTarget for CanvasRenderingContext2d {
    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_background(&mut self, color: &str, width: f64, height: f64) {
        self.set_fill_style_str(color);
        self.fill_rect(0.0, 0.0, width, height);
    }

    fn draw_star(&mut self, x: f64, y: f64, radius: f64, color: &str) {
        self.begin_path();
        let _ = self.arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0);
        self.set_fill_style_str(color);
        self.fill();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Seeded,
    Running,
    TornDown,
}

pub struct Starfield<R: RandomSource> {
    phase: Phase,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    rng: R,
}

impl<R: RandomSource> Starfield<R> {
    pub fn new(rng: R) -> Self {
        Starfield {
            phase: Phase::Uninitialized,
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
            rng,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Measures the surface and regenerates every particle. Used both for
    /// the first activation and on resize.
    pub fn seed(&mut self, width: f64, height: f64) {
        if self.phase == Phase::TornDown {
            return;
        }
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.particles = seed_particles(self.width, self.height, &mut self.rng);
        self.phase = Phase::Seeded;
    }

    /// Redraws one frame. Returns false when there is nothing to draw on.
    pub fn draw<T: DrawTarget + ?Sized>(&mut self, target: &mut T, scroll: f64) -> bool {
        match self.phase {
            Phase::Uninitialized | Phase::TornDown => return false,
            Phase::Seeded | Phase::Running => self.phase = Phase::Running,
        }
        let (w, h) = (self.width, self.height);
        target.clear(w, h);
        target.fill_background(STAR_BACKGROUND, w, h);
        for star in &self.particles {
            let y = star.render_y(scroll, h);
            target.draw_star(star.x, y, star.size, &star_color(star.alpha()));
        }
        true
    }

    pub fn teardown(&mut self) {
        self.phase = Phase::TornDown;
        self.particles.clear();
    }
}

/// A starfield attached to a live canvas. Dropping it stops the frame loop
/// and detaches the resize listener.
pub struct StarfieldHandle {
    starfield: Rc<RefCell<Starfield<JsRandom>>>,
    _frames: FrameLoop,
    _resize: Listener,
}

impl StarfieldHandle {
    pub fn particle_count(&self) -> usize {
        self.starfield.borrow().particles().len()
    }
}

impl Drop for StarfieldHandle {
    fn drop(&mut self) {
        self.starfield.borrow_mut().teardown();
    }
}

/// Seeds a starfield for `canvas` and starts redrawing it every frame.
/// `scroll` is sampled once per frame.
pub fn mount<S>(canvas: HtmlCanvasElement, scroll: S) -> Result<StarfieldHandle, SurfaceError>
where
    S: Fn() -> f64 + 'static,
{
    let window = canvas::window()?;
    let mut ctx = canvas::context_2d(&canvas)?;

    let starfield = Rc::new(RefCell::new(Starfield::new(JsRandom)));
    let (w, h) = canvas::fit_to_container(&canvas);
    starfield.borrow_mut().seed(w, h);
    console::log(&format!(
        "starfield seeded: {}x{} px, {} stars",
        w, h, starfield.borrow().particles().len()
    ));

    let sf_resize = starfield.clone();
    let canvas_resize = canvas.clone();
    let resize = Listener::new(&window, "resize", true, move |_| {
        let (w, h) = canvas::fit_to_container(&canvas_resize);
        sf_resize.borrow_mut().seed(w, h);
    });

    let sf_frame = starfield.clone();
    let frames = FrameLoop::start(move |_| {
        let y = scroll();
        sf_frame.borrow_mut().draw(&mut ctx, y);
    })?;

    Ok(StarfieldHandle {
        starfield,
        _frames: frames,
        _resize: resize,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Cycles through a fixed list of samples.
    struct Sequence(Vec<f64>, usize);

    impl RandomSource for Sequence {
        fn next_f64(&mut self) -> f64 {
            let v = self.0[self.1 % self.0.len()];
            self.1 += 1;
            v
        }
    }

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear,
        Background(String),
        Star(f64, f64, f64, String),
    }

    #[derive(Default)]
    struct Recorder(Vec<Op>);

    impl DrawTarget for Recorder {
        fn clear(&mut self, _w: f64, _h: f64) {
            self.0.push(Op::Clear);
        }
        fn fill_background(&mut self, color: &str, _w: f64, _h: f64) {
            self.0.push(Op::Background(color.to_string()));
        }
        fn draw_star(&mut self, x: f64, y: f64, radius: f64, color: &str) {
            self.0.push(Op::Star(x, y, radius, color.to_string()));
        }
    }

    #[test]
    fn test_particle_count() {
        assert_eq!(particle_count(0.0, 0.0), 0);
        assert_eq!(particle_count(100.0, 59.0), 0);
        assert_eq!(particle_count(100.0, 60.0), 1);
        assert_eq!(particle_count(800.0, 600.0), 80);
        assert_eq!(particle_count(1920.0, 1080.0), 345);
        assert_eq!(particle_count(3840.0, 2160.0), MAX_STARS);
        assert_eq!(particle_count(-800.0, -600.0), 0);
        assert_eq!(particle_count(f64::INFINITY, 10.0), 0);
    }

    #[test]
    fn test_seed_ranges() {
        let mut rng = Sequence(vec![0.0, 0.5, 0.999_999], 0);
        let stars = seed_particles(600.0, 600.0, &mut rng);
        assert_eq!(stars.len(), 60);
        for s in &stars {
            assert!(s.x >= 0.0 && s.x < 600.0);
            assert!(s.y >= 0.0 && s.y < 600.0);
            assert!(s.depth > 0.2 && s.depth <= 1.2);
            assert!(s.size > 0.2 && s.size <= 1.7);
        }
    }

    #[test]
    fn test_zero_sample_gives_upper_bounds() {
        let mut rng = Sequence(vec![0.0], 0);
        let stars = seed_particles(60.0, 100.0, &mut rng);
        assert_eq!(stars.len(), 1);
        assert_relative_eq!(stars[0].depth, 1.2);
        assert_relative_eq!(stars[0].size, 1.7);
    }

    #[test]
    fn test_render_offset_and_wrap() {
        let star = Particle { x: 10.0, y: 90.0, depth: 1.0, size: 1.0 };
        assert_relative_eq!(star.scroll_offset(1000.0), 60.0);
        assert_relative_eq!(star.render_y(1000.0, 100.0), 50.0);
        assert_eq!(star.render_y(1000.0, 100.0), star.render_y(1000.0, 100.0));
        assert_relative_eq!(star.render_y(0.0, 100.0), 90.0);
        // Negative overscroll still lands inside the surface
        let y = star.render_y(-5000.0, 100.0);
        assert!((0.0..100.0).contains(&y));
    }

    #[test]
    fn test_alpha_tracks_depth() {
        let near = Particle { x: 0.0, y: 0.0, depth: 1.2, size: 1.0 };
        let far = Particle { x: 0.0, y: 0.0, depth: 0.2, size: 1.0 };
        assert_relative_eq!(near.alpha(), 1.1);
        assert_relative_eq!(far.alpha(), 0.6);
        assert_eq!(star_color(0.75), "rgba(200,220,255,0.75)");
    }

    #[test]
    fn test_state_machine() {
        let mut sf = Starfield::new(Sequence(vec![0.25], 0));
        let mut rec = Recorder::default();
        assert_eq!(sf.phase(), Phase::Uninitialized);
        assert!(!sf.draw(&mut rec, 0.0));
        assert!(rec.0.is_empty());

        sf.seed(300.0, 200.0);
        assert_eq!(sf.phase(), Phase::Seeded);
        assert_eq!(sf.particles().len(), 10);

        assert!(sf.draw(&mut rec, 0.0));
        assert_eq!(sf.phase(), Phase::Running);

        sf.seed(120.0, 100.0);
        assert_eq!(sf.phase(), Phase::Seeded);
        assert_eq!(sf.particles().len(), 2);

        sf.teardown();
        assert_eq!(sf.phase(), Phase::TornDown);
        sf.seed(300.0, 200.0);
        assert_eq!(sf.phase(), Phase::TornDown);
        assert!(sf.particles().is_empty());
        assert!(!sf.draw(&mut rec, 0.0));
    }

    #[test]
    fn test_draw_frame() {
        let mut sf = Starfield::new(Sequence(vec![0.5], 0));
        sf.seed(120.0, 100.0);
        let mut rec = Recorder::default();
        sf.draw(&mut rec, 100.0);

        // depth = 0.2 + 0.5 = 0.7, offset = 100 * 0.7 * 0.06 = 4.2
        assert_eq!(rec.0.len(), 4);
        assert_eq!(rec.0[0], Op::Clear);
        assert_eq!(rec.0[1], Op::Background(STAR_BACKGROUND.to_string()));
        match &rec.0[2] {
            Op::Star(x, y, r, color) => {
                assert_relative_eq!(*x, 60.0);
                assert_relative_eq!(*y, 54.2, epsilon = 1e-9);
                assert_relative_eq!(*r, 0.95);
                assert_eq!(color, &star_color(0.5 + 0.5 * 0.7));
            }
            other => panic!("expected a star, got {:?}", other),
        }
    }

    #[test]
    fn test_shrink_to_zero_area() {
        let mut sf = Starfield::new(Sequence(vec![0.3], 0));
        sf.seed(800.0, 600.0);
        sf.seed(0.0, 0.0);
        assert!(sf.particles().is_empty());
        let mut rec = Recorder::default();
        assert!(sf.draw(&mut rec, 250.0));
        assert_eq!(rec.0.len(), 2);
    }
}
