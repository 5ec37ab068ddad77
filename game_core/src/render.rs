//! Drawing seam between the simulation and whatever presents it

use crate::map::Rect;
use crate::params::Params;
use crate::Session;

/// RGBA colour, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Normalized channels for GPU upload
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// Immediate-mode 2D drawing surface in playfield pixels
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_circle(&mut self, center: (i32, i32), radius: i32, color: Color);
    /// Draw one line of text with its top-left corner at (x, y)
    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: f32, color: Color);
    fn present(&mut self);
}

/// Render one frame: scores, paddles, then the ball
pub fn draw_scene<C: Canvas + ?Sized>(session: &Session, canvas: &mut C) {
    let width = session.config().playfield.width;
    let score = session.score();

    canvas.clear(Color::BLACK);

    canvas.draw_text(
        &score.player.to_string(),
        width / 4,
        Params::SCORE_TOP,
        Params::SCORE_FONT_SIZE,
        Color::WHITE,
    );
    canvas.draw_text(
        &score.opponent.to_string(),
        width - width / 4 - Params::SCORE_RIGHT_NUDGE,
        Params::SCORE_TOP,
        Params::SCORE_FONT_SIZE,
        Color::WHITE,
    );

    for paddle in [session.player(), session.opponent()].into_iter().flatten() {
        canvas.fill_rect(paddle.rect(), Color::WHITE);
    }

    if let Some(ball) = session.ball() {
        let rect = ball.rect();
        canvas.fill_circle(rect.center(), rect.w / 2, Color::WHITE);
    }

    canvas.present();
}

/// One recorded call on a [`RecordingCanvas`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    Rect(Rect, Color),
    Circle((i32, i32), i32, Color),
    Text(String, i32, i32, f32, Color),
    Present,
}

/// Canvas that keeps a log of what was drawn, for headless runs and tests
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls since the most recent clear
    pub fn last_frame(&self) -> &[DrawCall] {
        let start = self
            .calls
            .iter()
            .rposition(|c| matches!(c, DrawCall::Clear(_)))
            .unwrap_or(0);
        &self.calls[start..]
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Color) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::Rect(rect, color));
    }

    fn fill_circle(&mut self, center: (i32, i32), radius: i32, color: Color) {
        self.calls.push(DrawCall::Circle(center, radius, color));
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: f32, color: Color) {
        self.calls
            .push(DrawCall::Text(text.to_string(), x, y, size, color));
    }

    fn present(&mut self) {
        self.calls.push(DrawCall::Present);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, GameRng};

    #[test]
    fn test_draw_scene_order() {
        let session = Session::new(Config::new(1280, 720), GameRng::new(1)).unwrap();
        let mut canvas = RecordingCanvas::new();

        draw_scene(&session, &mut canvas);

        assert_eq!(
            canvas.calls,
            vec![
                DrawCall::Clear(Color::BLACK),
                DrawCall::Text("0".into(), 320, 20, 64.0, Color::WHITE),
                DrawCall::Text("0".into(), 920, 20, 64.0, Color::WHITE),
                DrawCall::Rect(Rect::new(20, 310, 20, 144), Color::WHITE),
                DrawCall::Rect(Rect::new(1240, 310, 20, 144), Color::WHITE),
                DrawCall::Circle((640, 360), 10, Color::WHITE),
                DrawCall::Present,
            ]
        );
    }

    #[test]
    fn test_last_frame_slices_from_latest_clear() {
        let session = Session::new(Config::new(1280, 720), GameRng::new(1)).unwrap();
        let mut canvas = RecordingCanvas::new();

        draw_scene(&session, &mut canvas);
        draw_scene(&session, &mut canvas);

        assert_eq!(canvas.calls.len(), 14);
        assert_eq!(canvas.last_frame().len(), 7);
    }

    #[test]
    fn test_color_to_f32() {
        assert_eq!(Color::WHITE.to_f32(), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(Color::BLACK.to_f32(), [0.0, 0.0, 0.0, 1.0]);
    }
}
