use crate::surface::{Color, Surface, VIEWPORT_WIDTH};

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub x: f64,
    pub y: f64,
    /// Horizontal velocity per tick; negative values move left
    pub speed: f64,
    pub health: i32,
    pub radius: f64,
}

impl Enemy {
    pub const RADIUS: f64 = 20.0;

    pub fn new(x: f64, y: f64, speed: f64, health: i32) -> Self {
        Self {
            x,
            y,
            speed,
            health,
            radius: Self::RADIUS,
        }
    }

    /// Moves one tick along the path, wrapping back to the left edge once the
    /// enemy has fully left the right side of the viewport.
    pub fn advance(&mut self) {
        self.x += self.speed;
        if self.x > VIEWPORT_WIDTH + self.radius {
            self.x = -self.radius;
        }
    }

    pub fn take_damage(&mut self, damage: i32) {
        self.health -= damage;
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn render(&self, surface: &mut impl Surface) {
        surface.fill_circle(self.x, self.y, self.radius, Color::Red);
    }
}
