use crate::*;
pub use gaussian::*;

mod gaussian;

/// Source of uniform samples in the half-open interval `(0, 1]`.
///
/// Every [`rand::RngCore`] is a source, tests can script one directly.
pub trait UniformSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: rand::RngCore> UniformSource for R {
    fn next_unit(&mut self) -> f64 {
        use rand::Rng;
        // `random` yields [0, 1), flip it so `ln` never sees zero
        1.0 - self.random::<f64>()
    }
}

pub trait ShotGenerator {
    fn generate(&mut self, rng: &mut impl UniformSource) -> Point;
}
