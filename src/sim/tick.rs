//! Per-frame simulation tick
//!
//! One call advances the game by exactly one animation frame. Velocities are
//! in pixels per frame, so there is no timestep parameter.

use super::collision::{
    ball_exited_bottom, paddle_bounce_velocity, paddle_contact, reflect_off_walls,
};
use super::state::{GameEvent, GamePhase, GameState};

/// Latched control state sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left arrow held
    pub left: bool,
    /// Right arrow held
    pub right: bool,
}

/// Advance the game state by one frame
///
/// Does nothing unless the game is running. Order within a frame:
/// brick collision (with win check and speed-up), then ball motion with
/// wall, paddle and bottom-exit handling, then paddle motion.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase != GamePhase::Running {
        return events;
    }

    state.time_ticks += 1;

    collide_bricks(state, &mut events);
    if state.phase != GamePhase::Running {
        return events;
    }

    move_ball(state, &mut events);
    if state.phase != GamePhase::Running {
        return events;
    }

    state.paddle.step(input.left, input.right);

    events
}

/// Resolve at most one brick hit: the first overlapping brick in traversal order
fn collide_bricks(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let Some(index) = state.bricks.first_overlap(&state.ball.bounds()) else {
        return;
    };
    let Some((column, row, center, color)) = state
        .bricks
        .destroy(index)
        .map(|b| (b.column, b.row, b.rect.center(), b.color))
    else {
        return;
    };

    state.ball.vel.y = -state.ball.vel.y;
    state.score += state.config.points_per_brick;
    state
        .particles
        .spawn(center, color, state.config.particles_per_brick);
    events.push(GameEvent::BrickDestroyed {
        column,
        row,
        score: state.score,
    });

    if state.bricks.all_destroyed() {
        state.phase = GamePhase::Won;
        events.push(GameEvent::Won { score: state.score });
    }

    if state.score % state.config.speedup_score_interval == 0 {
        let speed = state.ball.speed * state.config.speedup_factor;
        state.ball.set_speed(speed);
        events.push(GameEvent::SpeedUp { speed });
    }
}

/// Move the ball and resolve walls, paddle and the open bottom edge
fn move_ball(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let ball = &mut state.ball;
    ball.advance();

    let (vel, wall) =
        reflect_off_walls(ball.pos, ball.vel, ball.radius, state.config.surface_width);
    ball.vel = vel;
    if wall.any() {
        events.push(GameEvent::WallBounce);
    }

    if let Some(hit_pos) = paddle_contact(ball.pos, ball.radius, &state.paddle.rect()) {
        ball.vel = paddle_bounce_velocity(hit_pos, ball.speed);
        events.push(GameEvent::PaddleHit { hit_pos });
    }

    if ball_exited_bottom(ball.pos, ball.radius, state.config.surface_height) {
        lose_life(state, events);
    }
}

fn lose_life(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.lives = state.lives.saturating_sub(1);
    events.push(GameEvent::LifeLost { lives: state.lives });

    if state.lives == 0 {
        state.phase = GamePhase::Over;
        events.push(GameEvent::GameOver { score: state.score });
    } else {
        state.reset_positions();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use glam::Vec2;

    fn running_state() -> GameState {
        let mut state = GameState::new(Config::new(), 12345);
        state.start();
        state
    }

    #[test]
    fn test_tick_requires_running() {
        let mut state = GameState::new(Config::new(), 12345);
        let before = state.ball.pos;

        assert!(tick(&mut state, &TickInput::default()).is_empty());
        assert_eq!(state.ball.pos, before);
        assert_eq!(state.time_ticks, 0);

        state.start();
        state.toggle_pause();
        tick(&mut state, &TickInput { left: true, right: false });
        assert_eq!(state.ball.pos, before);
        assert_eq!(state.paddle.x, 350.0);
    }

    #[test]
    fn test_ball_moves_when_running() {
        let mut state = running_state();
        let before = state.ball.pos;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.pos, before + state.ball.vel);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_brick_hit() {
        let mut state = running_state();
        state.ball.pos = Vec2::new(70.0, 85.0);
        state.ball.vel = Vec2::new(0.0, -4.0);

        let events = tick(&mut state, &TickInput::default());

        assert!(!state.bricks.get(0, 0).unwrap().is_alive());
        assert_eq!(state.bricks.alive_count(), 59);
        assert_eq!(state.score, 10);
        assert_eq!(state.ball.vel, Vec2::new(0.0, 4.0));
        assert_eq!(state.particles.len(), 10);
        assert!(state.particles.iter().all(|p| p.pos == Vec2::new(70.0, 70.0)));
        assert_eq!(
            events[0],
            GameEvent::BrickDestroyed {
                column: 0,
                row: 0,
                score: 10
            }
        );
    }

    #[test]
    fn test_only_one_brick_per_frame() {
        let mut state = running_state();
        // Straddles columns 0 and 1 of row 0
        state.ball.pos = Vec2::new(107.5, 70.0);
        state.ball.vel = Vec2::new(0.0, -4.0);

        tick(&mut state, &TickInput::default());

        assert!(!state.bricks.get(0, 0).unwrap().is_alive());
        assert!(state.bricks.get(1, 0).unwrap().is_alive());
        assert_eq!(state.score, 10);
    }

    #[test]
    fn test_speed_up_on_multiple_of_fifty() {
        let mut state = running_state();
        state.score = 40;
        state.ball.pos = Vec2::new(70.0, 85.0);
        state.ball.vel = Vec2::new(1.0, -1.0).normalize() * 4.0;

        let events = tick(&mut state, &TickInput::default());

        assert_eq!(state.score, 50);
        assert!((state.ball.speed - 4.4).abs() < 1e-5);
        assert!((state.ball.vel.length() - state.ball.speed).abs() < 1e-4);
        // dy was flipped by the hit; both signs survive the rescale
        assert!(state.ball.vel.x > 0.0 && state.ball.vel.y > 0.0);
        let speedups = events
            .iter()
            .filter(|e| matches!(e, GameEvent::SpeedUp { .. }))
            .count();
        assert_eq!(speedups, 1);
    }

    #[test]
    fn test_no_speed_up_off_multiple() {
        let mut state = running_state();
        state.score = 50;
        state.ball.pos = Vec2::new(70.0, 85.0);
        state.ball.vel = Vec2::new(0.0, -4.0);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.score, 60);
        assert_eq!(state.ball.speed, 4.0);
    }

    #[test]
    fn test_final_brick_wins() {
        let mut state = running_state();
        state.lives = 1;
        for column in 0..10 {
            for row in 0..6 {
                if (column, row) != (4, 3) {
                    state.bricks.destroy_at(column, row);
                }
            }
        }
        let target = state.bricks.get(4, 3).unwrap().rect.center();
        state.ball.pos = target + Vec2::new(0.0, 12.0);
        state.ball.vel = Vec2::new(0.0, -4.0);

        let events = tick(&mut state, &TickInput::default());

        assert_eq!(state.phase, GamePhase::Won);
        assert!(state.bricks.all_destroyed());
        assert!(events.contains(&GameEvent::Won { score: 10 }));
        assert_eq!(state.lives, 1);

        // Terminal: further ticks are inert
        let pos = state.ball.pos;
        assert!(tick(&mut state, &TickInput::default()).is_empty());
        assert_eq!(state.ball.pos, pos);
    }

    #[test]
    fn test_side_wall_bounce() {
        let mut state = running_state();
        state.ball.pos = Vec2::new(790.0, 300.0);
        state.ball.vel = Vec2::new(1.0, -1.0).normalize() * 4.0;

        let events = tick(&mut state, &TickInput::default());

        assert!(events.contains(&GameEvent::WallBounce));
        assert!(state.ball.vel.x < 0.0);
        assert!((state.ball.vel.length() - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_paddle_bounce_center() {
        let mut state = running_state();
        state.ball.pos = Vec2::new(400.0, 560.0);
        state.ball.vel = Vec2::new(0.0, 4.0);

        let events = tick(&mut state, &TickInput::default());

        assert!(events.contains(&GameEvent::PaddleHit { hit_pos: 0.5 }));
        assert!(state.ball.vel.x.abs() < 1e-5);
        assert!((state.ball.vel.y + 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_three_drops_end_the_game() {
        let mut state = running_state();
        state.bricks.destroy_at(0, 0);
        state.score = 10;

        for expected_lives in [2u8, 1] {
            state.ball.pos = Vec2::new(400.0, 620.0);
            state.ball.vel = Vec2::new(0.0, 4.0);
            state.paddle.set_x(0.0);

            let events = tick(&mut state, &TickInput::default());

            assert!(events.contains(&GameEvent::LifeLost { lives: expected_lives }));
            assert_eq!(state.lives, expected_lives);
            assert_eq!(state.phase, GamePhase::Running);
            assert_eq!(state.ball.pos, Vec2::new(400.0, 500.0));
            assert_eq!(state.paddle.x, 350.0);
            assert_eq!(state.score, 10);
            assert_eq!(state.bricks.alive_count(), 59);
        }

        state.ball.pos = Vec2::new(400.0, 620.0);
        state.ball.vel = Vec2::new(0.0, 4.0);
        let events = tick(&mut state, &TickInput::default());

        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::Over);
        assert!(events.contains(&GameEvent::GameOver { score: 10 }));
    }

    #[test]
    fn test_paddle_follows_input() {
        let mut state = running_state();
        tick(&mut state, &TickInput { left: false, right: true });
        assert_eq!(state.paddle.x, 358.0);
        tick(&mut state, &TickInput { left: true, right: false });
        assert_eq!(state.paddle.x, 350.0);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(Config::new(), 99999);
        let mut state2 = GameState::new(Config::new(), 99999);
        state1.start();
        state2.start();

        let inputs = [
            TickInput { left: true, right: false },
            TickInput::default(),
            TickInput { left: false, right: true },
        ];

        for i in 0..600 {
            let input = &inputs[i % inputs.len()];
            tick(&mut state1, input);
            tick(&mut state2, input);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.ball.pos, state2.ball.pos);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.particles.len(), state2.particles.len());
    }
}
