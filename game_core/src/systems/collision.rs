use crate::{Ball, Config, Entities, Events, Paddle};
use hecs::World;

/// Resolve ball collisions against the paddles, then the top and bottom walls.
///
/// Checks run on the already-integrated position (no sweep), so a fast ball
/// can tunnel through a paddle. Only one paddle branch can fire per frame;
/// the wall checks are independent of it and of each other.
pub fn check_collisions(world: &mut World, entities: &Entities, config: &Config, events: &mut Events) {
    // First, collect paddle rects without holding borrows
    let player_rect = match world.get::<&Paddle>(entities.player) {
        Ok(paddle) => paddle.rect(),
        Err(_) => return,
    };
    let opponent_rect = match world.get::<&Paddle>(entities.opponent) {
        Ok(paddle) => paddle.rect(),
        Err(_) => return,
    };

    let Ok(ball) = world.query_one_mut::<&mut Ball>(entities.ball) else {
        return; // No ball in world
    };
    if !ball.is_active() {
        return;
    }

    let rect = ball.rect();
    if rect.intersects(&player_rect) {
        ball.vel.x = ball.vel.x.abs();
        ball.pos.x = player_rect.right() as f32;
        events.ball_hit_paddle = true;
    } else if rect.intersects(&opponent_rect) {
        ball.vel.x = -ball.vel.x.abs();
        ball.pos.x = (opponent_rect.left() - rect.w) as f32;
        events.ball_hit_paddle = true;
    }

    let height = config.playfield.height as f32;
    if ball.pos.y <= 0.0 {
        ball.pos.y = 0.0;
        ball.vel.y = ball.vel.y.abs();
        events.ball_hit_wall = true;
    }
    if ball.pos.y + ball.size.y >= height {
        ball.pos.y = height - ball.size.y;
        ball.vel.y = -ball.vel.y.abs();
        events.ball_hit_wall = true;
    }
}
