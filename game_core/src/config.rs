use crate::map::Playfield;
use crate::params::Params;
use crate::Side;
use glam::Vec2;
use thiserror::Error;

/// Window resolutions offered at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resolution {
    #[default]
    Hd720,
    Hd1080,
}

impl Resolution {
    pub const ALL: [Resolution; 2] = [Resolution::Hd720, Resolution::Hd1080];

    pub fn size(self) -> (u32, u32) {
        match self {
            Resolution::Hd720 => (1280, 720),
            Resolution::Hd1080 => (1920, 1080),
        }
    }

    /// Zero-based menu index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> String {
        let (w, h) = self.size();
        format!("{}x{}", w, h)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("playfield {width}x{height} has no area")]
    EmptyPlayfield { width: i32, height: i32 },
    #[error("paddle height {0} is not positive")]
    PaddleTooSmall(i32),
    #[error("ball of size {ball} does not fit a {width}x{height} playfield")]
    BallDoesNotFit { ball: i32, width: i32, height: i32 },
    #[error("paddles at x={left} and x={right} overlap or leave the playfield")]
    PaddlesOutOfBounds { left: i32, right: i32 },
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub playfield: Playfield,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_speed: f32,
    pub ball_size: i32,
    pub ball_speed: Vec2,
    pub ball_speed_ramp: f32,
    pub reset_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::for_resolution(Resolution::default())
    }
}

impl Config {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            playfield: Playfield::new(width, height),
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: height / Params::PADDLE_HEIGHT_DIVISOR,
            paddle_speed: Params::PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed: Vec2::new(Params::BALL_SPEED_X, Params::BALL_SPEED_Y),
            ball_speed_ramp: Params::BALL_SPEED_RAMP,
            reset_delay_ms: Params::RESET_DELAY_MS,
        }
    }

    pub fn for_resolution(resolution: Resolution) -> Self {
        let (w, h) = resolution.size();
        Self::new(w as i32, h as i32)
    }

    /// Check that every entity of a session can be built inside the playfield
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Playfield { width, height } = self.playfield;
        if width <= 0 || height <= 0 {
            return Err(ConfigError::EmptyPlayfield { width, height });
        }
        if self.paddle_height <= 0 {
            return Err(ConfigError::PaddleTooSmall(self.paddle_height));
        }
        if self.ball_size <= 0 || self.ball_size >= width || self.ball_size >= height {
            return Err(ConfigError::BallDoesNotFit {
                ball: self.ball_size,
                width,
                height,
            });
        }
        let left = self.paddle_x(Side::Player);
        let right = self.paddle_x(Side::Opponent);
        if left < 0 || left + self.paddle_width > right || right + self.paddle_width > width {
            return Err(ConfigError::PaddlesOutOfBounds { left, right });
        }
        Ok(())
    }

    /// Get X position for paddle based on side
    pub fn paddle_x(&self, side: Side) -> i32 {
        match side {
            Side::Player => Params::PADDLE_MARGIN,
            Side::Opponent => self.playfield.width - Params::PADDLE_MARGIN - self.paddle_width,
        }
    }

    /// Spawn Y for both paddles
    pub fn paddle_spawn_y(&self) -> f32 {
        let y = self.playfield.height / 2 - Params::PADDLE_SPAWN_OFFSET;
        (y as f32).clamp(0.0, self.paddle_max_y())
    }

    /// Lowest allowed top edge for a paddle
    pub fn paddle_max_y(&self) -> f32 {
        (self.playfield.height - self.paddle_height).max(0) as f32
    }

    /// Top-left position that puts the ball centre on the playfield centre
    pub fn ball_spawn(&self) -> Vec2 {
        let half = (self.ball_size / 2) as f32;
        self.playfield.center() - Vec2::splat(half)
    }
}
