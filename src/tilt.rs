use web_sys::{HtmlElement, MouseEvent};
use crate::constants::{TILT_MAX_DEG, TILT_PERSPECTIVE};

/// Rotation for a pointer at `(x, y)` inside a `width` x `height` card,
/// as `(rotate_x, rotate_y)` in degrees. Centre is flat, edges reach the max.
pub fn tilt_angles(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let px = (x / width) * 2.0 - 1.0;
    let py = (y / height) * 2.0 - 1.0;
    // + 0.0 turns -0.0 into 0.0 so the centre never prints as "-0.00deg"
    (-py * TILT_MAX_DEG + 0.0, px * TILT_MAX_DEG + 0.0)
}

pub fn tilt_transform(x: f64, y: f64, width: f64, height: f64) -> String {
    let (rx, ry) = tilt_angles(x, y, width, height);
    format!(
        "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg)",
        TILT_PERSPECTIVE, rx, ry
    )
}

pub fn rest_transform() -> String {
    format!("perspective({}px) rotateX(0deg) rotateY(0deg)", TILT_PERSPECTIVE)
}

pub fn apply_pointer(el: &HtmlElement, e: &MouseEvent) {
    let rect = el.get_bounding_client_rect();
    let x = e.client_x() as f64 - rect.left();
    let y = e.client_y() as f64 - rect.top();
    let _ = el
        .style()
        .set_property("transform", &tilt_transform(x, y, rect.width(), rect.height()));
}

pub fn reset(el: &HtmlElement) {
    let _ = el.style().set_property("transform", &rest_transform());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centre_is_flat() {
        assert_eq!(tilt_angles(150.0, 100.0, 300.0, 200.0), (0.0, 0.0));
        assert_eq!(
            tilt_transform(150.0, 100.0, 300.0, 200.0),
            "perspective(900px) rotateX(0.00deg) rotateY(0.00deg)"
        );
    }

    #[test]
    fn test_corners_reach_max() {
        assert_eq!(tilt_angles(0.0, 0.0, 300.0, 200.0), (6.0, -6.0));
        assert_eq!(tilt_angles(300.0, 200.0, 300.0, 200.0), (-6.0, 6.0));
        assert_eq!(
            tilt_transform(225.0, 50.0, 300.0, 200.0),
            "perspective(900px) rotateX(3.00deg) rotateY(3.00deg)"
        );
    }

    #[test]
    fn test_zero_sized_card() {
        assert_eq!(tilt_angles(10.0, 10.0, 0.0, 0.0), (0.0, 0.0));
        assert_eq!(rest_transform(), "perspective(900px) rotateX(0deg) rotateY(0deg)");
    }
}
