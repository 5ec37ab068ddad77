//! Keyboard input handling

use game_core::InputSnapshot;
use winit::keyboard::KeyCode;

/// Held-key state for the game window, sampled once per frame
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyState {
    up: bool,
    down: bool,
    quit: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press or release
    pub fn handle_key(&mut self, code: KeyCode, pressed: bool) {
        match code {
            KeyCode::ArrowUp | KeyCode::KeyW => self.up = pressed,
            KeyCode::ArrowDown | KeyCode::KeyS => self.down = pressed,
            // Quit on either edge
            KeyCode::Escape => self.quit = true,
            _ => {}
        }
    }

    /// Drop held directions, e.g. when the window loses focus and releases
    /// would go unreported. A pending quit is kept.
    pub fn release_all(&mut self) {
        self.up = false;
        self.down = false;
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            up: self.up,
            down: self.down,
            quit: self.quit,
        }
    }
}
