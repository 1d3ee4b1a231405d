use core::f64::consts::TAU;

use super::*;

/// Scatters shots around a center with an isotropic normal distribution, the way a real grouping looks on paper.
///
/// Shots are not clamped to the canvas, a wild one can land outside of it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GaussianShotGenerator {
    center: Point,
    spread: f64,
}

impl GaussianShotGenerator {
    pub const fn new(center: Point, spread: f64) -> Self {
        Self { center, spread }
    }

    pub const fn center(&self) -> Point {
        self.center
    }

    pub const fn spread(&self) -> f64 {
        self.spread
    }
}

impl Default for GaussianShotGenerator {
    fn default() -> Self {
        Self::new(TARGET_CENTER, SHOT_SPREAD)
    }
}

impl ShotGenerator for GaussianShotGenerator {
    fn generate(&mut self, rng: &mut impl UniformSource) -> Point {
        // Box-Muller
        let u = rng.next_unit();
        let v = rng.next_unit();
        let radius = (-2.0 * u.ln()).sqrt();
        let theta = TAU * v;

        let shot = Point::new(
            self.center.x + self.spread * radius * theta.cos(),
            self.center.y + self.spread * radius * theta.sin(),
        );
        log::trace!("generated shot: ({:.2}, {:.2})", shot.x, shot.y);
        shot
    }
}
