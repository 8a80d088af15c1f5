//! Long-running simulation tests
//!
//! Drives the world the way the frame loop does: configured start state,
//! fixed timestep accumulator, uneven frame times.

use pong3d::config::SimulationConfig;
use pong3d::systems::SimulationSystem;
use pong3d_sim::{FixedTimestep, PongWorld, Side};

const DT: f32 = 0.02;

#[test]
fn test_left_paddle_bounces_once_per_crossing() {
    let mut world = SimulationConfig::default().to_world();
    let mut flips = 0;
    let mut previous = world.left_paddle.velocity.y;

    // 200 ticks covers the first crossing at tick 117 and not a second one
    for _ in 0..200 {
        world.step(DT);
        let current = world.left_paddle.velocity.y;
        if current.signum() != previous.signum() {
            flips += 1;
        }
        previous = current;
    }

    assert_eq!(flips, 1);
    assert!(world.left_paddle.velocity.y < 0.0);
    assert!(world.left_paddle.position.y < 0.7);
}

#[test]
fn test_free_bodies_advance_linearly() {
    let mut world = PongWorld::default();
    let start_ball = world.ball.position;
    let start_right = world.right_paddle.position;

    for _ in 0..500 {
        world.step(DT);
    }

    let elapsed = 500.0 * DT;
    assert!((world.ball.position.x - (start_ball.x - 0.4 * elapsed)).abs() < 0.001);
    assert!((world.ball.position.y - (start_ball.y + 0.3 * elapsed)).abs() < 0.001);
    assert!((world.right_paddle.position.y - (start_right.y - 0.3 * elapsed)).abs() < 0.001);
    assert_eq!(world.ticks(), 500);
}

#[test]
fn test_left_paddle_stays_below_limit_plus_one_step() {
    let mut world = PongWorld::default();
    let overshoot = 0.3 * DT;

    for _ in 0..2000 {
        world.step(DT);
        assert!(world.left_paddle.position.y <= 0.7 + overshoot + 0.0001);
    }
}

#[test]
fn test_flip_before_limit_delays_bounce() {
    let mut world = PongWorld::default();
    for _ in 0..50 {
        world.step(DT);
    }
    world.flip_paddle(Side::Left);
    let turned_at = world.left_paddle.position.y;

    for _ in 0..50 {
        world.step(DT);
    }
    assert!(world.left_paddle.position.y < turned_at);
    assert!(world.left_paddle.velocity.y < 0.0);
}

#[test]
fn test_frame_rate_independent_tick_count() {
    let mut fast = SimulationSystem::new(PongWorld::default(), FixedTimestep::new(DT));
    let mut slow = SimulationSystem::new(PongWorld::default(), FixedTimestep::new(DT));

    // Two seconds at ~240 Hz and at ~20 Hz
    for _ in 0..480 {
        fast.advance(1.0 / 240.0);
    }
    for _ in 0..40 {
        slow.advance(0.05);
    }

    let diff = fast.world().ticks() as i64 - slow.world().ticks() as i64;
    assert!(diff.abs() <= 1, "fast {} vs slow {}", fast.world().ticks(), slow.world().ticks());
    assert!((99..=100).contains(&slow.world().ticks()));
}

#[test]
fn test_long_stall_is_clamped() {
    let mut sim = SimulationSystem::new(PongWorld::default(), FixedTimestep::new(DT));
    let steps = sim.advance(5.0);
    assert!(steps <= pong3d_sim::DEFAULT_MAX_STEPS);
}
