use super::Enemy;
use crate::geometry::distance;
use crate::surface::{Color, Surface};

/// What happened when a projectile reached its aim point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    /// Nothing was standing on the aim point
    Miss,
    /// Damaged the enemy at this index, which survived
    Hit { enemy: usize },
    /// Finished off an enemy; it has already been removed
    Kill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flight {
    InFlight,
    Landed(Impact),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub x: f64,
    pub y: f64,
    /// Aim point, fixed at the moment the tower fired
    pub target_x: f64,
    pub target_y: f64,
    pub damage: i32,
    pub speed: f64,
    pub radius: f64,
}

impl Projectile {
    pub const SPEED: f64 = 10.0;
    pub const RADIUS: f64 = 10.0;

    pub fn new(x: f64, y: f64, target_x: f64, target_y: f64, damage: i32) -> Self {
        Self {
            x,
            y,
            target_x,
            target_y,
            damage,
            speed: Self::SPEED,
            radius: Self::RADIUS,
        }
    }

    /// Moves one tick toward the aim point.
    ///
    /// On arrival the projectile snaps onto the aim point and damages the
    /// first enemy (in collection order) whose body covers it. An enemy whose
    /// health drops to zero or below is removed from `enemies` here. The caller
    /// must discard the projectile once this returns [`Flight::Landed`].
    pub fn advance(&mut self, enemies: &mut Vec<Enemy>) -> Flight {
        let dx = self.target_x - self.x;
        let dy = self.target_y - self.y;
        let remaining = dx.hypot(dy);

        if remaining > self.speed {
            self.x += dx / remaining * self.speed;
            self.y += dy / remaining * self.speed;
            return Flight::InFlight;
        }

        self.x = self.target_x;
        self.y = self.target_y;
        Flight::Landed(self.collide(enemies))
    }

    fn collide(&self, enemies: &mut Vec<Enemy>) -> Impact {
        let Some(idx) = enemies
            .iter()
            .position(|enemy| distance(enemy.x, enemy.y, self.x, self.y) < enemy.radius)
        else {
            return Impact::Miss;
        };

        let enemy = &mut enemies[idx];
        enemy.take_damage(self.damage);
        if enemy.is_alive() {
            Impact::Hit { enemy: idx }
        } else {
            enemies.remove(idx);
            Impact::Kill
        }
    }

    pub fn render(&self, surface: &mut impl Surface) {
        surface.fill_circle(self.x, self.y, self.radius, Color::Green);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projectile_new() {
        let projectile = Projectile::new(100.0, 250.0, 100.0, 300.0, 25);
        assert_eq!(projectile.speed, 10.0);
        assert_eq!(projectile.radius, 10.0);
        assert_eq!(projectile.damage, 25);
    }

    #[test]
    fn test_projectile_moves_by_speed_toward_target() {
        let mut projectile = Projectile::new(0.0, 0.0, 0.0, 100.0, 10);
        let mut enemies = Vec::new();
        assert_eq!(projectile.advance(&mut enemies), Flight::InFlight);
        assert_eq!((projectile.x, projectile.y), (0.0, 10.0));
    }

    #[test]
    fn test_projectile_diagonal_step_length() {
        let mut projectile = Projectile::new(0.0, 0.0, 300.0, 400.0, 10);
        projectile.advance(&mut Vec::new());
        assert!((projectile.x - 6.0).abs() < 1e-9);
        assert!((projectile.y - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_projectile_snaps_when_within_speed() {
        let mut projectile = Projectile::new(0.0, 0.0, 3.0, 4.0, 10);
        let flight = projectile.advance(&mut Vec::new());
        assert_eq!(flight, Flight::Landed(Impact::Miss));
        assert_eq!((projectile.x, projectile.y), (3.0, 4.0));
    }

    #[test]
    fn test_projectile_exactly_speed_away_arrives() {
        let mut projectile = Projectile::new(0.0, 0.0, 10.0, 0.0, 10);
        let mut enemies = vec![Enemy::new(10.0, 0.0, 0.0, 50)];
        assert_eq!(
            projectile.advance(&mut enemies),
            Flight::Landed(Impact::Hit { enemy: 0 })
        );
        assert_eq!(enemies[0].health, 40);
    }

    #[test]
    fn test_projectile_hit_damages_enemy() {
        let mut projectile = Projectile::new(0.0, 0.0, 0.0, 0.0, 25);
        let mut enemies = vec![Enemy::new(10.0, 0.0, 0.0, 50)];
        assert_eq!(
            projectile.advance(&mut enemies),
            Flight::Landed(Impact::Hit { enemy: 0 })
        );
        assert_eq!(enemies[0].health, 25);
    }

    #[test]
    fn test_projectile_kill_removes_enemy() {
        let mut projectile = Projectile::new(0.0, 0.0, 0.0, 0.0, 25);
        let mut enemies = vec![
            Enemy::new(500.0, 500.0, 0.0, 50),
            Enemy::new(5.0, 0.0, 0.0, 25),
        ];
        assert_eq!(projectile.advance(&mut enemies), Flight::Landed(Impact::Kill));
        assert_eq!(enemies.len(), 1);
        assert_eq!(enemies[0].x, 500.0);
    }

    #[test]
    fn test_projectile_hits_first_match_not_nearest() {
        let mut projectile = Projectile::new(0.0, 0.0, 0.0, 0.0, 10);
        let mut enemies = vec![
            Enemy::new(15.0, 0.0, 0.0, 50),
            Enemy::new(1.0, 0.0, 0.0, 50),
        ];
        projectile.advance(&mut enemies);
        assert_eq!(enemies[0].health, 40);
        assert_eq!(enemies[1].health, 50);
    }

    #[test]
    fn test_projectile_edge_of_enemy_radius_misses() {
        let mut projectile = Projectile::new(0.0, 0.0, 0.0, 0.0, 10);
        let mut enemies = vec![Enemy::new(20.0, 0.0, 0.0, 50)];
        assert_eq!(projectile.advance(&mut enemies), Flight::Landed(Impact::Miss));
        assert_eq!(enemies[0].health, 50);
    }

    #[test]
    fn test_projectile_in_flight_never_collides() {
        let mut projectile = Projectile::new(0.0, 0.0, 0.0, 100.0, 10);
        let mut enemies = vec![Enemy::new(0.0, 10.0, 0.0, 50)];
        assert_eq!(projectile.advance(&mut enemies), Flight::InFlight);
        assert_eq!(enemies[0].health, 50);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_projectile_aim_point_is_fixed(
                tx in -500.0f64..500.0,
                ty in -500.0f64..500.0,
                ticks in 1usize..200
            ) {
                let mut projectile = Projectile::new(0.0, 0.0, tx, ty, 10);
                let mut enemies = vec![Enemy::new(tx, ty, 3.0, 1000)];
                for _ in 0..ticks {
                    for enemy in enemies.iter_mut() {
                        enemy.advance();
                    }
                    if let Flight::Landed(_) = projectile.advance(&mut enemies) {
                        prop_assert_eq!((projectile.x, projectile.y), (tx, ty));
                        break;
                    }
                }
                prop_assert_eq!((projectile.target_x, projectile.target_y), (tx, ty));
            }

            #[test]
            fn test_projectile_arrives_after_ceil_distance_over_speed(
                tx in -500.0f64..500.0,
                ty in -500.0f64..500.0
            ) {
                let mut projectile = Projectile::new(0.0, 0.0, tx, ty, 10);
                let dist = distance(0.0, 0.0, tx, ty);
                let mut ticks: usize = 0;
                loop {
                    ticks += 1;
                    if projectile.advance(&mut Vec::new()) != Flight::InFlight {
                        break;
                    }
                    prop_assert!(ticks < 100);
                }
                // Arrival tick is the first where remaining <= speed
                let expected = ((dist - Projectile::SPEED) / Projectile::SPEED).ceil().max(0.0) as usize + 1;
                prop_assert!(ticks.abs_diff(expected) <= 1);
            }
        }
    }
}
