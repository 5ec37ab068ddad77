//! One game from the first frame until the player quits

use std::time::Duration;

use hecs::{Entity, World};

use crate::clock::{Clock, FrameTimer};
use crate::render::{draw_scene, Canvas};
use crate::{
    create_ball, create_paddle, step, Ball, Config, ConfigError, Entities, Events, GameRng,
    InputSnapshot, Paddle, Score, Side, Time,
};

/// What the caller should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

/// Owns the world and everything a running game needs between frames
pub struct Session {
    world: World,
    entities: Entities,
    config: Config,
    rng: GameRng,
    timer: FrameTimer,
    time: Time,
    events: Events,
}

impl Session {
    pub fn new(config: Config, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        let player = create_paddle(&mut world, Side::Player, &config);
        let opponent = create_paddle(&mut world, Side::Opponent, &config);
        let ball = create_ball(
            &mut world,
            config.ball_spawn(),
            config.ball_speed,
            config.ball_size as f32,
        );
        tracing::debug!(
            width = config.playfield.width,
            height = config.playfield.height,
            "session created"
        );

        Ok(Self {
            world,
            entities: Entities {
                player,
                opponent,
                ball,
            },
            config,
            rng,
            timer: FrameTimer::new(),
            time: Time::default(),
            events: Events::new(),
        })
    }

    /// Advance the simulation by one frame.
    ///
    /// The whole frame runs even when `input.quit` is set, so a point scored
    /// in the last frame still counts; the caller stops after this frame.
    pub fn frame(&mut self, input: &InputSnapshot, now: Duration) -> FrameOutcome {
        self.time = self.timer.tick(now);

        step(
            &mut self.world,
            &self.entities,
            &self.time,
            &self.config,
            input.paddle_intent(),
            &mut self.events,
            &mut self.rng,
        );

        if input.quit {
            FrameOutcome::Quit
        } else {
            FrameOutcome::Continue
        }
    }

    /// Sample the clock, step and draw: one full iteration of the game loop
    pub fn run_frame<K, C>(&mut self, input: &InputSnapshot, clock: &K, canvas: &mut C) -> FrameOutcome
    where
        K: Clock + ?Sized,
        C: Canvas + ?Sized,
    {
        let outcome = self.frame(input, clock.now());
        draw_scene(self, canvas);
        outcome
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn entities(&self) -> &Entities {
        &self.entities
    }

    pub fn player(&self) -> Option<Paddle> {
        self.paddle(self.entities.player)
    }

    pub fn opponent(&self) -> Option<Paddle> {
        self.paddle(self.entities.opponent)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.entities.ball).ok().map(|b| *b)
    }

    pub fn score(&self) -> Score {
        Score::new(
            self.player().map(|p| p.score()).unwrap_or(0),
            self.opponent().map(|p| p.score()).unwrap_or(0),
        )
    }

    /// Direct access for scripted scenarios
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    fn paddle(&self, entity: Entity) -> Option<Paddle> {
        self.world.get::<&Paddle>(entity).ok().map(|p| *p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::render::RecordingCanvas;
    use crate::BallState;
    use glam::Vec2;

    fn session() -> Session {
        Session::new(Config::new(1280, 720), GameRng::new(12345)).unwrap()
    }

    #[test]
    fn test_new_session_layout() {
        let s = session();
        let player = s.player().unwrap();
        let opponent = s.opponent().unwrap();
        let ball = s.ball().unwrap();

        assert_eq!((player.x, player.y), (20, 310.0));
        assert_eq!((opponent.x, opponent.y), (1240, 310.0));
        assert_eq!(ball.pos, Vec2::new(630.0, 350.0));
        assert_eq!(ball.vel, Vec2::new(400.0, 300.0));
        assert_eq!(ball.state, BallState::Active);
        assert_eq!(s.score(), Score::default());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = Session::new(Config::new(0, 0), GameRng::new(1));
        assert!(matches!(result, Err(ConfigError::EmptyPlayfield { .. })));
    }

    #[test]
    fn test_first_frame_does_not_move_anything() {
        let mut s = session();
        let input = InputSnapshot {
            up: true,
            ..Default::default()
        };

        s.frame(&input, Duration::from_millis(1234));

        assert_eq!(s.ball().unwrap().pos, Vec2::new(630.0, 350.0));
        assert_eq!(s.player().unwrap().y, 310.0);
    }

    #[test]
    fn test_quit_still_commits_the_frame() {
        let mut s = session();
        s.frame(&InputSnapshot::new(), Duration::ZERO);

        let input = InputSnapshot {
            quit: true,
            ..Default::default()
        };
        let outcome = s.frame(&input, Duration::from_millis(500));

        assert_eq!(outcome, FrameOutcome::Quit);
        assert_eq!(s.ball().unwrap().pos, Vec2::new(830.0, 500.0));
    }

    #[test]
    fn test_run_frame_draws_after_stepping() {
        let mut s = session();
        let clock = ManualClock::new();
        let mut canvas = RecordingCanvas::new();

        assert_eq!(
            s.run_frame(&InputSnapshot::new(), &clock, &mut canvas),
            FrameOutcome::Continue
        );
        assert_eq!(canvas.last_frame().len(), 7);
    }
}
