use crate::{Ball, Entities, Paddle, PaddleIntent, Time};
use hecs::World;

use super::move_paddle;

/// Calculate the opponent's command for this frame
///
/// Tracks the ball directly: move up while the ball's centre is above the
/// paddle, move down while the ball's bottom is below it, otherwise hold.
/// The dead zone is the paddle's own span; there is no prediction.
pub fn opponent_intent(ball: &Ball, paddle: &Paddle) -> PaddleIntent {
    let rect = paddle.rect();
    if ball.center_y() < rect.top() as f32 {
        PaddleIntent::up()
    } else if ball.bottom() > rect.bottom() as f32 {
        PaddleIntent::down()
    } else {
        PaddleIntent::new()
    }
}

/// Run the opponent controller and apply its command to the opponent paddle
pub fn drive_opponent(world: &mut World, entities: &Entities, time: &Time) {
    let intent = {
        let ball = world.get::<&Ball>(entities.ball);
        let paddle = world.get::<&Paddle>(entities.opponent);
        match (ball, paddle) {
            (Ok(ball), Ok(paddle)) => opponent_intent(&ball, &paddle),
            _ => return,
        }
    };
    move_paddle(world, entities.opponent, intent, time);
}
