/// Game tuning parameters for Pong (pixels, seconds)
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Paddle
    pub const PADDLE_WIDTH: i32 = 20;
    pub const PADDLE_HEIGHT_DIVISOR: i32 = 5; // height = playfield height / 5
    pub const PADDLE_SPEED: f32 = 1000.0;
    pub const PADDLE_MARGIN: i32 = 20; // gap between paddle and its side edge
    pub const PADDLE_SPAWN_OFFSET: i32 = 50; // spawn y = height / 2 - offset

    // Ball
    pub const BALL_SIZE: i32 = 20;
    pub const BALL_SPEED_X: f32 = 400.0;
    pub const BALL_SPEED_Y: f32 = 300.0;
    pub const BALL_SPEED_RAMP: f32 = 1.1; // applied to both axes after every point

    // Scoring
    pub const RESET_DELAY_MS: u64 = 1000;

    // HUD
    pub const SCORE_FONT_SIZE: f32 = 64.0;
    pub const SCORE_TOP: i32 = 20;
    pub const SCORE_RIGHT_NUDGE: i32 = 40;
}
