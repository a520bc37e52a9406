// Starfield
pub const MAX_STARS: usize = 400;
pub const AREA_PER_STAR: f64 = 6000.0; // px² per star
pub const STAR_DEPTH_MIN: f64 = 0.2;
pub const STAR_DEPTH_SPAN: f64 = 1.0;
pub const STAR_SIZE_MIN: f64 = 0.2;
pub const STAR_SIZE_SPAN: f64 = 1.5;
pub const STAR_SCROLL_FACTOR: f64 = 0.06;
pub const STAR_BACKGROUND: &str = "#0B0E14";
pub const STAR_TINT: (u8, u8, u8) = (200, 220, 255);

// Parallax gallery, shallow to deep
pub const HEADING_SPEED: f64 = 0.05;
pub const LAUNCH_SPEED: f64 = 0.12;
pub const MAX_Q_SPEED: f64 = 0.2;
pub const STAGE_SEP_SPEED: f64 = 0.28;

// Propulsion
pub const STANDARD_GRAVITY: f64 = 9.80665; // m/s²
pub const CHAMBER_TEMP_BASE: f64 = 3500.0; // K
pub const CHAMBER_TEMP_REF_VELOCITY: f64 = 2500.0; // m/s
pub const CHAMBER_TEMP_SLOPE: f64 = 0.2; // K per m/s

// Card tilt
pub const TILT_PERSPECTIVE: f64 = 900.0; // px
pub const TILT_MAX_DEG: f64 = 6.0;

// Hero
pub const HERO_SCENE_URL: &str = "https://prod.spline.design/er66D6jbuo0hIjmn/scene.splinecode";
pub const HERO_LOAD_TIMEOUT: u32 = 12_000; // ms
