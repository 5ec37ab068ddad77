use std::time::Duration;

use hecs::World;

use crate::{Ball, Config, Entities, Events, GameRng, Time};

/// Bring a frozen ball back to the centre once its reset delay has elapsed
pub fn respawn_tick(
    world: &mut World,
    entities: &Entities,
    config: &Config,
    time: &Time,
    rng: &mut GameRng,
    events: &mut Events,
) {
    let Ok(ball) = world.query_one_mut::<&mut Ball>(entities.ball) else {
        return;
    };

    let delay = Duration::from_millis(config.reset_delay_ms);
    if ball.reset_elapsed(time.now, delay) {
        ball.respawn(config.ball_spawn(), rng);
        events.ball_respawned = true;
        tracing::debug!(vel = ?ball.vel, "ball respawned");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, BallState, Side};
    use glam::Vec2;

    fn setup_world() -> (World, Entities, Config, GameRng, Events) {
        let mut world = World::new();
        let config = Config::new(1280, 720);
        let player = create_paddle(&mut world, Side::Player, &config);
        let opponent = create_paddle(&mut world, Side::Opponent, &config);
        let ball = create_ball(
            &mut world,
            Vec2::new(1270.0, 100.0),
            Vec2::new(440.0, -330.0),
            config.ball_size as f32,
        );
        world
            .get::<&mut Ball>(ball)
            .unwrap()
            .begin_reset(Duration::from_millis(2000), 1.0);
        (
            world,
            Entities {
                player,
                opponent,
                ball,
            },
            config,
            GameRng::new(12345), // Fixed seed for deterministic tests
            Events::new(),
        )
    }

    fn at(ms: u64) -> Time {
        Time::new(0.016, Duration::from_millis(ms))
    }

    #[test]
    fn test_ball_stays_frozen_before_delay() {
        let (mut world, entities, config, mut rng, mut events) = setup_world();

        respawn_tick(&mut world, &entities, &config, &at(2999), &mut rng, &mut events);

        let ball = *world.get::<&Ball>(entities.ball).unwrap();
        assert!(!ball.is_active());
        assert_eq!(ball.pos, Vec2::new(1270.0, 100.0));
        assert_eq!(ball.vel, Vec2::new(440.0, -330.0));
        assert!(!events.ball_respawned);
    }

    #[test]
    fn test_ball_respawns_at_center_after_delay() {
        let (mut world, entities, config, mut rng, mut events) = setup_world();

        respawn_tick(&mut world, &entities, &config, &at(3000), &mut rng, &mut events);

        let ball = *world.get::<&Ball>(entities.ball).unwrap();
        assert_eq!(ball.state, BallState::Active);
        assert_eq!(ball.pos, Vec2::new(630.0, 350.0));
        assert_eq!(ball.rect().center(), (640, 360), "Ball centre is the playfield centre");
        assert_eq!(ball.vel.x.abs(), 440.0, "Speed is kept across the reset");
        assert_eq!(ball.vel.y.abs(), 330.0);
        assert!(events.ball_respawned);
    }

    #[test]
    fn test_active_ball_is_untouched() {
        let (mut world, entities, config, mut rng, mut events) = setup_world();
        world.get::<&mut Ball>(entities.ball).unwrap().state = BallState::Active;

        respawn_tick(&mut world, &entities, &config, &at(10_000), &mut rng, &mut events);

        let ball = *world.get::<&Ball>(entities.ball).unwrap();
        assert_eq!(ball.pos, Vec2::new(1270.0, 100.0));
        assert!(!events.ball_respawned);
    }
}
