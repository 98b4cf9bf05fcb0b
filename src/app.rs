use color_eyre::Result;
use log::info;
use ratatui::{Terminal, backend::Backend};
use std::time::Instant;

use crate::config::GameConfig;
use crate::input::{InputAction, InputManager};
use crate::renderer::{GameRenderer, RenderView};
use crate::surface::DrawList;
use crate::world::World;

/// The terminal host: owns the world and re-runs its tick once per frame
/// until the player quits.
pub struct App {
    running: bool,
    world: World,
    /// Primitives issued by the latest tick, replayed by the renderer
    draw_list: DrawList,
    config: GameConfig,
    /// Frames info
    tick: u64,
    last_frame_time: Instant,
    fps: u32,
    /// internal components
    input_manager: InputManager,
    renderer: GameRenderer,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        let world = config.scenario.populate();
        info!(
            "starting {:?} with {} enemies and {} towers",
            config.scenario,
            world.enemies.len(),
            world.towers.len()
        );

        Self {
            running: true,
            world,
            draw_list: DrawList::new(),
            config,
            tick: 0,
            last_frame_time: Instant::now(),
            fps: 0,
            input_manager: InputManager::new(),
            renderer: GameRenderer::new(),
        }
    }

    /// Run the application's main loop.
    pub fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while self.running {
            let now = Instant::now();
            let frame_time = now.duration_since(self.last_frame_time);
            self.last_frame_time = now;
            if frame_time.as_micros() > 0 {
                self.fps = (1_000_000 / frame_time.as_micros()) as u32;
            }

            self.step();

            terminal.draw(|frame| {
                let view = RenderView {
                    draw_list: &self.draw_list,
                    tick: self.tick,
                    fps: self.fps,
                    area: frame.area(),
                };
                self.renderer.render(frame, &view);
            })?;

            self.input_manager.poll_events()?;
            let actions = self.input_manager.actions().to_vec();
            self.process_actions(&actions);

            std::thread::sleep(self.config.frame_interval);
        }

        info!(
            "stopped after {} ticks with score {}",
            self.tick, self.world.score
        );
        Ok(())
    }

    /// Advances the simulation by one tick, recording a fresh frame.
    fn step(&mut self) {
        self.draw_list.clear();
        self.world.tick(&mut self.draw_list);
        self.tick += 1;
    }

    fn process_actions(&mut self, actions: &[InputAction]) {
        for action in actions {
            match action {
                InputAction::Quit => self.quit(),
            }
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::Scenario;
    use std::path::PathBuf;
    use std::time::Duration;

    fn config(scenario: Scenario) -> GameConfig {
        GameConfig {
            frame_interval: Duration::from_millis(1),
            scenario,
            log_file: PathBuf::from("unused.log"),
            verbose: false,
        }
    }

    #[test]
    fn test_app_new_populates_world() {
        let app = App::new(config(Scenario::Demo));
        assert!(app.running);
        assert_eq!(app.world, Scenario::Demo.populate());
        assert_eq!(app.tick, 0);
    }

    #[test]
    fn test_step_records_one_frame() {
        let mut app = App::new(config(Scenario::Demo));
        app.step();
        app.step();
        assert_eq!(app.tick, 2);
        // Only the latest tick is kept: one clear at the front
        assert_eq!(app.draw_list.visible().len(), app.draw_list.commands().len() - 1);
        assert_eq!(
            app.draw_list.texts().collect::<Vec<_>>(),
            vec!["Score: 0", "Lives: 10"]
        );
    }

    #[test]
    fn test_quit_action_stops_app() {
        let mut app = App::new(config(Scenario::Demo));
        app.process_actions(&[InputAction::Quit]);
        assert!(!app.running);
    }
}
