use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::entities::{Enemy, Tower};
use crate::world::World;

const ENEMY_HEALTHS: [i32; 5] = [50, 75, 100, 125, 150];
const TOWER_DAMAGES: [i32; 3] = [10, 25, 50];

/// Initial populations the game can start from
#[derive(Debug, Clone, PartialEq)]
pub enum Scenario {
    /// Hand-placed lanes of enemies guarded by a handful of towers
    Demo,
    /// Enemies and towers scattered by a seeded generator
    Random {
        seed: u64,
        enemies: usize,
        towers: usize,
    },
}

impl Scenario {
    pub fn populate(&self) -> World {
        match self {
            Scenario::Demo => demo_world(),
            Scenario::Random {
                seed,
                enemies,
                towers,
            } => random_world(*seed, *enemies, *towers),
        }
    }
}

fn demo_world() -> World {
    let mut world = World::new();

    world.spawn_enemy(Enemy::new(100.0, 300.0, 2.0, 50));
    world.spawn_enemy(Enemy::new(-20.0, 300.0, 2.0, 50));
    world.spawn_enemy(Enemy::new(0.0, 150.0, 3.0, 100));
    world.spawn_enemy(Enemy::new(250.0, 150.0, 3.0, 75));
    world.spawn_enemy(Enemy::new(50.0, 450.0, 1.5, 150));
    world.spawn_enemy(Enemy::new(400.0, 450.0, 1.0, 125));

    world.place_tower(Tower::new(100.0, 250.0, 100.0, 25));
    world.place_tower(Tower::new(450.0, 220.0, 120.0, 10));
    world.place_tower(Tower::new(650.0, 380.0, 140.0, 50));

    world
}

fn random_world(seed: u64, enemies: usize, towers: usize) -> World {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut world = World::new();

    for _ in 0..enemies {
        let health = ENEMY_HEALTHS[rng.random_range(0..ENEMY_HEALTHS.len())];
        world.spawn_enemy(Enemy::new(
            rng.random_range(0.0..800.0),
            rng.random_range(60.0..580.0),
            rng.random_range(1.0..3.0),
            health,
        ));
    }

    for _ in 0..towers {
        let damage = TOWER_DAMAGES[rng.random_range(0..TOWER_DAMAGES.len())];
        world.place_tower(Tower::new(
            rng.random_range(50.0..750.0),
            rng.random_range(60.0..580.0),
            rng.random_range(80.0..160.0),
            damage,
        ));
    }

    world
}
