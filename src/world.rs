use log::{debug, trace};

use crate::entities::{Enemy, Flight, Impact, Projectile, Tower};
use crate::surface::{Surface, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};

/// Points awarded for every enemy destroyed
pub const KILL_SCORE: u32 = 100;
pub const STARTING_LIVES: i32 = 10;
pub const HUD_FONT: &str = "24px Arial";

/// Everything the simulation owns: the three entity collections and the
/// score/lives counters.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub enemies: Vec<Enemy>,
    pub towers: Vec<Tower>,
    pub projectiles: Vec<Projectile>,
    pub score: u32,
    /// Shown on the HUD; nothing in the simulation decrements it
    pub lives: i32,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    pub fn new() -> Self {
        Self {
            enemies: Vec::new(),
            towers: Vec::new(),
            projectiles: Vec::new(),
            score: 0,
            lives: STARTING_LIVES,
        }
    }

    pub fn spawn_enemy(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    pub fn place_tower(&mut self, tower: Tower) {
        self.towers.push(tower);
    }

    /// Runs one frame: clears the viewport, then updates and draws enemies,
    /// towers and projectiles in that order, then the HUD.
    pub fn tick(&mut self, surface: &mut impl Surface) {
        surface.clear_rect(0.0, 0.0, VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
        self.update_enemies(surface);
        self.fire_towers(surface);
        self.update_projectiles(surface);
        self.render_hud(surface);
    }

    fn update_enemies(&mut self, surface: &mut impl Surface) {
        for enemy in &mut self.enemies {
            enemy.advance();
            enemy.render(surface);
        }
    }

    fn fire_towers(&mut self, surface: &mut impl Surface) {
        for tower in &self.towers {
            if let Some(projectile) = tower.fire(&self.enemies) {
                trace!(
                    "tower at ({}, {}) fired at ({:.1}, {:.1})",
                    tower.x, tower.y, projectile.target_x, projectile.target_y
                );
                self.projectiles.push(projectile);
            }
            tower.render(surface);
        }
    }

    /// Every projectile, including the ones fired this tick, advances exactly
    /// once. Landed projectiles are dropped after the pass so the collection
    /// is never resized while it is being walked.
    fn update_projectiles(&mut self, surface: &mut impl Surface) {
        let mut landed = vec![false; self.projectiles.len()];

        for (idx, projectile) in self.projectiles.iter_mut().enumerate() {
            if let Flight::Landed(impact) = projectile.advance(&mut self.enemies) {
                landed[idx] = true;
                match impact {
                    Impact::Miss => trace!(
                        "projectile landed on empty ground at ({:.1}, {:.1})",
                        projectile.x, projectile.y
                    ),
                    Impact::Hit { enemy } => debug!(
                        "projectile hit enemy {} for {} damage, {} health left",
                        enemy, projectile.damage, self.enemies[enemy].health
                    ),
                    Impact::Kill => {
                        self.score += KILL_SCORE;
                        debug!("enemy destroyed, score is now {}", self.score);
                    }
                }
            }
            projectile.render(surface);
        }

        let mut landed = landed.into_iter();
        self.projectiles
            .retain(|_| !landed.next().unwrap_or(false));
    }

    fn render_hud(&self, surface: &mut impl Surface) {
        surface.fill_text(&format!("Score: {}", self.score), 10.0, 30.0, HUD_FONT);
        surface.fill_text(&format!("Lives: {}", self.lives), 10.0, 60.0, HUD_FONT);
    }
}
