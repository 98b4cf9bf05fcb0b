mod enemy;
mod projectile;
mod tower;

// Re-export all public types
pub use enemy::Enemy;
pub use projectile::{Flight, Impact, Projectile};
pub use tower::Tower;
