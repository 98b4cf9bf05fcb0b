use super::{Enemy, Projectile};
use crate::geometry::distance;
use crate::surface::{Color, Surface};

#[derive(Debug, Clone, PartialEq)]
pub struct Tower {
    pub x: f64,
    pub y: f64,
    /// Exclusive targeting radius
    pub range: f64,
    pub damage: i32,
    pub radius: f64,
}

impl Tower {
    pub const RADIUS: f64 = 30.0;

    pub fn new(x: f64, y: f64, range: f64, damage: i32) -> Self {
        Self {
            x,
            y,
            range,
            damage,
            radius: Self::RADIUS,
        }
    }

    /// Finds the nearest enemy strictly inside range.
    ///
    /// Only a strictly smaller distance replaces the current pick, so equally
    /// distant enemies resolve to the one that comes first in `enemies`.
    pub fn acquire_target<'a>(&self, enemies: &'a [Enemy]) -> Option<&'a Enemy> {
        let mut nearest: Option<(&Enemy, f64)> = None;
        for enemy in enemies {
            let dist = distance(self.x, self.y, enemy.x, enemy.y);
            if dist >= self.range {
                continue;
            }
            if nearest.is_none_or(|(_, best)| dist < best) {
                nearest = Some((enemy, dist));
            }
        }
        nearest.map(|(enemy, _)| enemy)
    }

    /// Fires at the nearest enemy in range, aiming at where it stands right now.
    pub fn fire(&self, enemies: &[Enemy]) -> Option<Projectile> {
        self.acquire_target(enemies)
            .map(|target| Projectile::new(self.x, self.y, target.x, target.y, self.damage))
    }

    pub fn render(&self, surface: &mut impl Surface) {
        surface.fill_circle(self.x, self.y, self.radius, Color::Blue);
    }
}
