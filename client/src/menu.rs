//! Startup resolution picker

use game_core::{Canvas, Color, Resolution};
use winit::keyboard::KeyCode;

pub const MENU_TITLE: &str = "Select Resolution";
pub const MENU_SIZE: (u32, u32) = (600, 300);

const FONT_SIZE: f32 = 28.0;
const LEFT: i32 = 50;
const TOP: i32 = 50;
const LINE_SPACING: i32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Select(Resolution),
    Cancel,
}

/// Map a key press on the menu window to an action
pub fn handle_key(code: KeyCode) -> Option<MenuAction> {
    let index = match code {
        KeyCode::Escape => return Some(MenuAction::Cancel),
        KeyCode::Digit1 | KeyCode::Numpad1 => 0,
        KeyCode::Digit2 | KeyCode::Numpad2 => 1,
        _ => return None,
    };
    Resolution::from_index(index).map(MenuAction::Select)
}

/// Menu lines in display order, e.g. "1. 1280x720"
pub fn lines() -> Vec<String> {
    Resolution::ALL
        .iter()
        .enumerate()
        .map(|(i, res)| format!("{}. {}", i + 1, res.label()))
        .collect()
}

pub fn draw_menu<C: Canvas + ?Sized>(canvas: &mut C) {
    canvas.clear(Color::BLACK);
    for (i, line) in lines().iter().enumerate() {
        canvas.draw_text(line, LEFT, TOP + i as i32 * LINE_SPACING, FONT_SIZE, Color::WHITE);
    }
    canvas.present();
}
