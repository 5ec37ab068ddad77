use std::time::Duration;

/// Time resource for the current frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Time {
    pub dt: f32,       // Seconds since the previous frame
    pub now: Duration, // Monotonic clock reading for this frame
}

impl Time {
    pub fn new(dt: f32, now: Duration) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 0.0,
            now: Duration::ZERO,
        }
    }
}

/// Score read out of both paddles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn new(player: u32, opponent: u32) -> Self {
        Self { player, opponent }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub player_scored: bool,
    pub opponent_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub ball_respawned: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.player_scored = false;
        self.opponent_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
        self.ball_respawned = false;
    }

    pub fn any_score(&self) -> bool {
        self.player_scored || self.opponent_scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.player_scored = true;
        events.opponent_scored = true;
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;
        events.ball_respawned = true;

        events.clear();

        assert_eq!(events, Events::default());
        assert!(!events.any_score());
    }

    #[test]
    fn test_seeded_rng_is_repeatable() {
        let mut a = GameRng::new(99);
        let mut b = GameRng::new(99);
        let xs: Vec<bool> = (0..16).map(|_| a.0.gen_bool(0.5)).collect();
        let ys: Vec<bool> = (0..16).map(|_| b.0.gen_bool(0.5)).collect();
        assert_eq!(xs, ys);
    }
}
