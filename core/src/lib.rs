pub use controller::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use scene::*;
pub use types::*;

mod controller;
mod engine;
mod error;
mod generator;
mod scene;
mod types;
