use crate::{Ball, Paddle, PaddleIntent, Time};
use hecs::{Entity, World};

/// Apply a movement intent to one paddle. Up and down are applied
/// independently, up first, so holding both nets out to the later command.
pub fn move_paddle(world: &mut World, entity: Entity, intent: PaddleIntent, time: &Time) {
    let Ok(paddle) = world.query_one_mut::<&mut Paddle>(entity) else {
        return; // Paddle not in world
    };
    if intent.up {
        paddle.move_up(time.dt);
    }
    if intent.down {
        paddle.move_down(time.dt);
    }
}

/// Move ball based on velocity. A ball waiting for its reset stays frozen.
pub fn move_ball(world: &mut World, entity: Entity, time: &Time) {
    let Ok(ball) = world.query_one_mut::<&mut Ball>(entity) else {
        return;
    };
    if ball.is_active() {
        ball.pos += ball.vel * time.dt;
    }
}
