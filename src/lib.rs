// Library exports for the binary and tests
pub use entities::{Enemy, Flight, Impact, Projectile, Tower};
pub use scenario::Scenario;
pub use surface::{Color, DrawCommand, DrawList, Surface};
pub use world::World;

pub mod app;
pub mod config;
pub mod entities;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod scenario;
pub mod surface;
pub mod world;
