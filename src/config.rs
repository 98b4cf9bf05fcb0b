use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use crate::scenario::Scenario;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScenarioKind {
    Demo,
    Random,
}

/// Command line arguments for the terminal game
#[derive(Debug, Parser)]
#[command(name = "tower-defense", version, about = "Towers versus wrapping enemies, in a terminal")]
pub struct Cli {
    /// Simulation ticks per second
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    /// Starting population
    #[arg(long, value_enum, default_value_t = ScenarioKind::Demo)]
    pub scenario: ScenarioKind,

    /// Seed for the random scenario; drawn at start-up when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Enemies placed by the random scenario
    #[arg(long, default_value_t = 8)]
    pub enemies: usize,

    /// Towers placed by the random scenario
    #[arg(long, default_value_t = 3)]
    pub towers: usize,

    /// File that receives log output (the terminal is taken by the game)
    #[arg(long, default_value = "tower-defense.log")]
    pub log_file: PathBuf,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,
}

/// Resolved settings the app runs with
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub frame_interval: Duration,
    pub scenario: Scenario,
    pub log_file: PathBuf,
    pub verbose: bool,
}

impl Cli {
    pub fn into_config(self) -> GameConfig {
        let scenario = match self.scenario {
            ScenarioKind::Demo => Scenario::Demo,
            ScenarioKind::Random => Scenario::Random {
                seed: self.seed.unwrap_or_else(rand::random),
                enemies: self.enemies,
                towers: self.towers,
            },
        };

        GameConfig {
            frame_interval: Duration::from_secs(1) / self.fps,
            scenario,
            log_file: self.log_file,
            verbose: self.verbose,
        }
    }
}
