use std::time::Duration;

use glam::Vec2;
use rand::Rng;

use crate::map::Rect;
use crate::Config;

/// Which end of the table a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,   // left, keyboard controlled
    Opponent, // right, ball tracking
}

/// Paddle component - represents one side's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: i32,
    pub y: f32, // top edge, clamped to [0, max_y]
    pub width: i32,
    pub height: i32,
    pub speed: f32,
    max_y: f32,
    score: u32,
}

impl Paddle {
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            x: config.paddle_x(side),
            y: config.paddle_spawn_y(),
            width: config.paddle_width,
            height: config.paddle_height,
            speed: config.paddle_speed,
            max_y: config.paddle_max_y(),
            score: 0,
        }
    }

    /// Move towards the top edge. No-op once the paddle touches it.
    pub fn move_up(&mut self, dt: f32) {
        if self.y > 0.0 {
            self.y = (self.y - self.speed * dt).clamp(0.0, self.max_y);
        }
    }

    /// Move towards the bottom edge. No-op once the paddle touches it.
    pub fn move_down(&mut self, dt: f32) {
        if self.y < self.max_y {
            self.y = (self.y + self.speed * dt).clamp(0.0, self.max_y);
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y.round() as i32, self.width, self.height)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn award_point(&mut self) {
        self.score += 1;
    }
}

/// Reset sequencing for the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallState {
    Active,
    /// Frozen after a point; `since` is the clock reading of the scoring frame
    PendingReset { since: Duration },
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // top-left, sub-pixel
    pub vel: Vec2,
    pub size: Vec2,
    pub state: BallState,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self {
            pos,
            vel,
            size: Vec2::splat(size),
            state: BallState::Active,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos(self.pos, self.size)
    }

    pub fn is_active(&self) -> bool {
        self.state == BallState::Active
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Freeze the ball and speed it up for the next rally
    pub fn begin_reset(&mut self, now: Duration, ramp: f32) {
        self.vel *= ramp;
        self.state = BallState::PendingReset { since: now };
    }

    pub fn reset_elapsed(&self, now: Duration, delay: Duration) -> bool {
        match self.state {
            BallState::Active => false,
            BallState::PendingReset { since } => now.saturating_sub(since) >= delay,
        }
    }

    /// Back to `spawn` with random direction on each axis, speed kept
    pub fn respawn(&mut self, spawn: Vec2, rng: &mut crate::GameRng) {
        self.pos = spawn;
        let sign_x = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let sign_y = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(sign_x * self.vel.x.abs(), sign_y * self.vel.y.abs());
        self.state = BallState::Active;
    }
}

/// Movement intent for paddle. Up and down are independent so both may be
/// held in the same frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn up() -> Self {
        Self {
            up: true,
            down: false,
        }
    }

    pub fn down() -> Self {
        Self {
            up: false,
            down: true,
        }
    }

    pub fn is_idle(&self) -> bool {
        !self.up && !self.down
    }
}
