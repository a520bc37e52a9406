/// A content block that trails the page scroll by a fixed coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxLayer {
    pub speed: f64,
}

impl ParallaxLayer {
    pub fn new(speed: f64) -> Self {
        ParallaxLayer { speed }
    }

    /// Vertical translation in whole pixels.
    pub fn translation(&self, scroll: f64) -> f64 {
        (scroll * self.speed).round() + 0.0
    }

    pub fn transform(&self, scroll: f64) -> String {
        format!("translate3d(0, {}px, 0)", self.translation(scroll))
    }
}

impl Default for ParallaxLayer {
    fn default() -> Self {
        ParallaxLayer::new(0.1)
    }
}
