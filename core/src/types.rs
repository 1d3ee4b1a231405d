use serde::{Deserialize, Serialize};

/// Side length of the square canvas, in logical units.
pub const CANVAS_SIZE: f64 = 384.0;

/// Where shots cluster, and where the target rings are drawn.
pub const TARGET_CENTER: Point = Point::new(200.0, 200.0);

/// Standard deviation of the shot grouping on each axis.
pub const SHOT_SPREAD: f64 = 30.0;

/// How long the pattern stays hidden before the next shot is revealed.
pub const MEMORIZE_DELAY_MS: u32 = 3000;

/// Radii of the decorative target rings, outermost first.
pub const TARGET_RING_RADII: [f64; 5] = [150.0, 120.0, 90.0, 60.0, 30.0];

pub const TARGET_BULLSEYE_RADIUS: f64 = 10.0;

/// Markers are drawn centered on their coordinates.
pub const MARKER_DIAMETER: f64 = 16.0;

/// A single shot on the canvas.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are usable for positioning a marker.
    pub fn is_renderable(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_coordinates_are_not_renderable() {
        assert!(Point::new(12.5, 300.0).is_renderable());
        assert!(Point::new(-40.0, 900.0).is_renderable());
        assert!(!Point::new(f64::NAN, 200.0).is_renderable());
        assert!(!Point::new(200.0, f64::INFINITY).is_renderable());
        assert!(!Point::new(f64::NEG_INFINITY, f64::NAN).is_renderable());
    }

    #[test]
    fn target_center_sits_inside_canvas() {
        assert!(TARGET_CENTER.x < CANVAS_SIZE);
        assert!(TARGET_CENTER.y < CANVAS_SIZE);
        assert!(TARGET_RING_RADII.windows(2).all(|pair| pair[0] > pair[1]));
    }
}
