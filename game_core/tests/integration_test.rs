use std::time::Duration;

use game_core::*;
use glam::Vec2;

fn new_session() -> Session {
    Session::new(Config::new(1280, 720), GameRng::new(12345)).unwrap()
}

fn idle() -> InputSnapshot {
    InputSnapshot::new()
}

fn set_ball(session: &mut Session, pos: Vec2, vel: Vec2) {
    let ball = session.entities().ball;
    let mut b = session.world_mut().get::<&mut Ball>(ball).unwrap();
    b.pos = pos;
    b.vel = vel;
}

#[test]
fn test_ball_flies_freely_between_frames() {
    let mut session = new_session();
    let clock = ManualClock::new();

    session.frame(&idle(), clock.now());
    clock.advance_ms(250);
    session.frame(&idle(), clock.now());

    let ball = session.ball().unwrap();
    assert_eq!(ball.pos, Vec2::new(730.0, 425.0));
    assert_eq!(ball.vel, Vec2::new(400.0, 300.0));
}

#[test]
fn test_player_scores_then_ball_resets_after_delay() {
    let mut session = new_session();
    let clock = ManualClock::new();
    session.frame(&idle(), clock.now());

    // Ball at (W - 5, H / 2) heading right
    set_ball(&mut session, Vec2::new(1275.0, 360.0), Vec2::new(400.0, 300.0));
    clock.advance_ms(10);
    session.frame(&idle(), clock.now());

    assert_eq!(session.score(), Score::new(1, 0));
    assert!(session.events().player_scored);
    let frozen = session.ball().unwrap();
    assert!(!frozen.is_active());
    assert!((frozen.vel.x - 440.0).abs() < 1e-3);
    assert!((frozen.vel.y - 330.0).abs() < 1e-3);

    // Still frozen just before the delay runs out
    clock.advance_ms(999);
    session.frame(&idle(), clock.now());
    let ball = session.ball().unwrap();
    assert!(!ball.is_active());
    assert_eq!(ball.pos, frozen.pos);
    assert_eq!(ball.vel, frozen.vel);
    assert_eq!(session.score(), Score::new(1, 0), "No extra point while frozen");

    // Back in the centre once a full second has passed
    clock.advance_ms(1);
    session.frame(&idle(), clock.now());
    let ball = session.ball().unwrap();
    assert!(ball.is_active());
    assert!(session.events().ball_respawned);
    assert_eq!(ball.pos, Vec2::new(630.0, 350.0));
    assert_eq!(ball.vel.x.abs(), frozen.vel.x.abs());
    assert_eq!(ball.vel.y.abs(), frozen.vel.y.abs());
}

#[test]
fn test_opponent_scores_when_player_misses() {
    let mut session = new_session();
    let clock = ManualClock::new();
    session.frame(&idle(), clock.now());

    // Well above the player paddle, heading left and out
    set_ball(&mut session, Vec2::new(5.0, 50.0), Vec2::new(-400.0, 0.0));
    clock.advance_ms(16);
    session.frame(&idle(), clock.now());

    assert_eq!(session.score(), Score::new(0, 1));
    assert!(session.events().opponent_scored);
    assert!(!session.events().player_scored);
}

#[test]
fn test_player_paddle_returns_ball() {
    let mut session = new_session();
    let clock = ManualClock::new();
    session.frame(&idle(), clock.now());

    // Overlapping the player paddle (x 20..40, y 310..454) after integration
    set_ball(&mut session, Vec2::new(45.0, 360.0), Vec2::new(-400.0, 0.0));
    clock.advance_ms(25);
    session.frame(&idle(), clock.now());

    let ball = session.ball().unwrap();
    assert!(session.events().ball_hit_paddle);
    assert_eq!(ball.vel.x, 400.0);
    assert_eq!(ball.rect().left(), session.player().unwrap().rect().right());
    assert_eq!(session.score(), Score::default());
}

#[test]
fn test_ball_lands_exactly_on_top_wall() {
    let mut session = new_session();
    let clock = ManualClock::new();
    session.frame(&idle(), clock.now());

    set_ball(&mut session, Vec2::new(640.0, 75.0), Vec2::new(400.0, -300.0));
    clock.advance_ms(250);
    session.frame(&idle(), clock.now());

    let ball = session.ball().unwrap();
    assert_eq!(ball.pos.y, 0.0);
    assert_eq!(ball.vel.y, 300.0);
    assert!(session.events().ball_hit_wall);
}

#[test]
fn test_opponent_tracks_ball() {
    let mut session = new_session();
    let clock = ManualClock::new();
    session.frame(&idle(), clock.now());

    set_ball(&mut session, Vec2::new(640.0, 40.0), Vec2::new(0.0, 0.0));
    let start = session.opponent().unwrap().y;
    clock.advance_ms(100);
    session.frame(&idle(), clock.now());

    assert_eq!(session.opponent().unwrap().y, start - 100.0);
    assert_eq!(session.player().unwrap().y, 310.0, "Player paddle is not driven");
}

#[test]
fn test_player_input_moves_paddle_and_stays_in_bounds() {
    let mut session = new_session();
    let clock = ManualClock::new();
    session.frame(&idle(), clock.now());

    let up = InputSnapshot {
        up: true,
        ..Default::default()
    };
    for _ in 0..20 {
        clock.advance_ms(50);
        session.frame(&up, clock.now());
        let y = session.player().unwrap().y;
        assert!((0.0..=576.0).contains(&y));
    }
    assert_eq!(session.player().unwrap().y, 0.0);

    let down = InputSnapshot {
        down: true,
        ..Default::default()
    };
    for _ in 0..20 {
        clock.advance_ms(50);
        session.frame(&down, clock.now());
    }
    assert_eq!(session.player().unwrap().y, 576.0);
}

#[test]
fn test_long_rally_keeps_paddles_in_bounds_and_scores_monotonic() {
    let mut session = Session::new(Config::new(1920, 1080), GameRng::new(7)).unwrap();
    let clock = ManualClock::new();
    let mut last = Score::default();
    let max_y = session.config().paddle_max_y();

    for i in 0..5_000u32 {
        clock.advance_ms(7);
        let input = InputSnapshot {
            up: i % 40 < 20,
            down: i % 60 < 15,
            quit: false,
        };
        session.frame(&input, clock.now());

        for paddle in [session.player().unwrap(), session.opponent().unwrap()] {
            assert!(paddle.y >= 0.0 && paddle.y <= max_y);
        }
        let score = session.score();
        assert!(score.player >= last.player && score.opponent >= last.opponent);
        assert!(score.player + score.opponent <= last.player + last.opponent + 1);
        last = score;
    }
}

#[test]
fn test_render_pass_reflects_score() {
    let mut session = new_session();
    let clock = ManualClock::new();
    let mut canvas = RecordingCanvas::new();
    session.run_frame(&idle(), &clock, &mut canvas);

    set_ball(&mut session, Vec2::new(1275.0, 360.0), Vec2::new(400.0, 300.0));
    clock.advance_ms(10);
    session.run_frame(&idle(), &clock, &mut canvas);

    let frame = canvas.last_frame();
    assert_eq!(frame[1], DrawCall::Text("1".into(), 320, 20, 64.0, Color::WHITE));
    assert_eq!(frame[2], DrawCall::Text("0".into(), 920, 20, 64.0, Color::WHITE));
    assert_eq!(frame.last(), Some(&DrawCall::Present));
}

#[test]
fn test_quit_signal_ends_loop_after_frame() {
    let mut session = new_session();
    let clock = ManualClock::new();
    session.frame(&idle(), clock.now());

    set_ball(&mut session, Vec2::new(1275.0, 360.0), Vec2::new(400.0, 300.0));
    clock.advance(Duration::from_millis(10));
    let quit = InputSnapshot {
        quit: true,
        ..Default::default()
    };

    assert_eq!(session.frame(&quit, clock.now()), FrameOutcome::Quit);
    assert_eq!(session.score(), Score::new(1, 0), "Point in the quitting frame counts");
}
