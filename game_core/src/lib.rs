pub mod clock;
pub mod components;
pub mod config;
pub mod input;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod session;
pub mod systems;

pub use clock::*;
pub use components::*;
pub use config::*;
pub use input::*;
pub use map::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use session::*;

use hecs::{Entity, World};
use systems::*;

/// Handles of the three entities a game is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entities {
    pub player: Entity,
    pub opponent: Entity,
    pub ball: Entity,
}

/// Run one variable-length frame of the Pong simulation
///
/// Order matters: the opponent reacts to last frame's ball, the player's
/// input is applied, then the ball moves, bounces, scores and respawns.
pub fn step(
    world: &mut World,
    entities: &Entities,
    time: &Time,
    config: &Config,
    player_intent: PaddleIntent,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Opponent controller
    drive_opponent(world, entities, time);

    // 2. Player input
    move_paddle(world, entities.player, player_intent, time);

    // 3. Move ball
    move_ball(world, entities.ball, time);

    // 4. Check collisions (ball vs paddles, walls)
    check_collisions(world, entities, config, events);

    // 5. Check scoring (ball exited playfield)
    check_scoring(world, entities, config, time, events);

    // 6. Respawn a frozen ball whose delay has run out
    respawn_tick(world, entities, config, time, rng, events);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> Entity {
    world.spawn((Paddle::new(side, config),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2, size: f32) -> Entity {
    world.spawn((Ball::new(pos, vel, size),))
}
