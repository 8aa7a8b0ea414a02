pub mod animator;
pub mod camera;
pub mod color;
pub mod constants;
pub mod engine;
pub mod raster;
pub mod shapes;
pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");

pub use animator::*;
pub use camera::*;
pub use constants::*;
pub use engine::*;
pub use raster::*;
pub use shapes::*;
