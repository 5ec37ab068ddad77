use crate::{Ball, Config, Entities, Events, Paddle, Side, Time};
use hecs::World;

/// Check if ball left the playfield (scoring)
///
/// Runs after collision resolution and uses the rect recomputed from the
/// resolved position. The scorer's paddle is awarded a point, the ball speeds
/// up and freezes until its reset delay has passed.
pub fn check_scoring(
    world: &mut World,
    entities: &Entities,
    config: &Config,
    time: &Time,
    events: &mut Events,
) {
    let scorer = {
        let Ok(ball) = world.query_one_mut::<&mut Ball>(entities.ball) else {
            return;
        };
        if !ball.is_active() {
            return;
        }

        let rect = ball.rect();
        let scorer = if rect.right() > config.playfield.width {
            Side::Player
        } else if rect.left() < 0 {
            Side::Opponent
        } else {
            return;
        };
        ball.begin_reset(time.now, config.ball_speed_ramp);
        scorer
    };

    let paddle_entity = match scorer {
        Side::Player => entities.player,
        Side::Opponent => entities.opponent,
    };
    if let Ok(paddle) = world.query_one_mut::<&mut Paddle>(paddle_entity) {
        paddle.award_point();
    }

    match scorer {
        Side::Player => events.player_scored = true,
        Side::Opponent => events.opponent_scored = true,
    }

    tracing::info!(
        scorer = ?scorer,
        player = score_of(world, entities.player),
        opponent = score_of(world, entities.opponent),
        "point scored"
    );
}

fn score_of(world: &World, entity: hecs::Entity) -> u32 {
    world.get::<&Paddle>(entity).map(|p| p.score()).unwrap_or(0)
}
