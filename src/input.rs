use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Semantic actions the terminal host understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Quit,
}

/// Polls input without blocking and translates raw key events into actions
#[derive(Debug, Default)]
pub struct InputManager {
    actions: Vec<InputAction>,
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains every pending terminal event. Call once per frame before
    /// [`InputManager::actions`].
    pub fn poll_events(&mut self) -> color_eyre::Result<()> {
        self.actions.clear();

        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key_event) => self.handle_key_event(key_event),
                // Resizes are picked up from the frame area on the next draw
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        if key_event.kind != KeyEventKind::Press {
            return;
        }

        let quit = matches!(
            key_event.code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
        ) || (key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL));

        if quit {
            self.actions.push(InputAction::Quit);
        }
    }

    /// Actions collected by the last [`InputManager::poll_events`]
    pub fn actions(&self) -> &[InputAction] {
        &self.actions
    }
}
