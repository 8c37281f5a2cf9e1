//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in [`GameState`]; there are no
//! free-floating globals, so the whole game runs headless in tests.

use glam::Vec2;

use super::bricks::BrickGrid;
use super::collision::Rect;
use super::particles::ParticleSystem;
use crate::color::Rgba;
use crate::config::Config;
use crate::consts::{BALL_COLOR, PADDLE_COLOR};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Fresh board, waiting for start
    Idle,
    /// Active gameplay
    Running,
    /// Frozen mid-game
    Paused,
    /// Out of lives
    Over,
    /// Every brick destroyed
    Won,
}

impl GamePhase {
    /// Over and Won only leave through a reset
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Over | GamePhase::Won)
    }
}

/// Things that happened during a tick (for logging and effects)
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    BrickDestroyed { column: usize, row: usize, score: u32 },
    SpeedUp { speed: f32 },
    WallBounce,
    PaddleHit { hit_pos: f32 },
    LifeLost { lives: u8 },
    GameOver { score: u32 },
    Won { score: u32 },
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// |vel| is kept equal to this
    pub speed: f32,
    pub color: Rgba,
}

impl Ball {
    pub fn new(config: &Config) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: config.ball_radius,
            speed: config.ball_speed,
            color: BALL_COLOR,
        };
        ball.respawn(config);
        ball
    }

    /// Back to the start position, heading up and to the right at the
    /// current speed
    pub fn respawn(&mut self, config: &Config) {
        self.pos = Vec2::new(
            config.surface_width / 2.0,
            config.surface_height - config.ball_start_offset,
        );
        self.vel = Vec2::new(1.0, -1.0).normalize() * self.speed;
    }

    /// Change speed without changing direction
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
        self.vel = self.vel.normalize_or_zero() * speed;
    }

    /// Bounding square used for brick overlap tests
    pub fn bounds(&self) -> Rect {
        Rect::around_circle(self.pos, self.radius)
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

/// The player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    /// Left edge (the only moving coordinate)
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Pixels per frame under keyboard control
    pub speed: f32,
    pub color: Rgba,
    max_x: f32,
}

impl Paddle {
    pub fn new(config: &Config) -> Self {
        Self {
            x: config.paddle_start_x(),
            y: config.paddle_y(),
            width: config.paddle_width,
            height: config.paddle_height,
            speed: config.paddle_speed,
            color: PADDLE_COLOR,
            max_x: config.surface_width - config.paddle_width,
        }
    }

    /// Horizontally centred
    pub fn recenter(&mut self) {
        self.x = self.max_x / 2.0;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Set the left edge, clamped so the paddle stays fully on-surface.
    /// Non-finite positions are ignored.
    pub fn set_x(&mut self, x: f32) {
        if !x.is_finite() {
            return;
        }
        self.x = x.clamp(0.0, self.max_x);
    }

    /// One frame of keyboard movement; right wins when both are held
    pub fn step(&mut self, left: bool, right: bool) {
        if right {
            self.set_x(self.x + self.speed);
        } else if left {
            self.set_x(self.x - self.speed);
        }
    }

    /// Centre the paddle under a pointer x coordinate
    pub fn follow_pointer(&mut self, pointer_x: f32) {
        self.set_x(pointer_x - self.width / 2.0);
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: Config,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u8,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    /// Visual particles (not gameplay-affecting)
    pub particles: ParticleSystem,
    /// Simulation ticks since the last reset
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game state; `seed` drives particle randomness only
    pub fn new(config: Config, seed: u64) -> Self {
        Self {
            phase: GamePhase::Idle,
            score: 0,
            lives: config.starting_lives,
            ball: Ball::new(&config),
            paddle: Paddle::new(&config),
            bricks: BrickGrid::new(&config),
            particles: ParticleSystem::new(
                seed,
                config.particle_max_speed,
                config.particle_decay,
                config.particle_shrink,
            ),
            time_ticks: 0,
            config,
        }
    }

    /// Idle → Running. Returns false (and does nothing) from any other phase.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Idle {
            return false;
        }
        self.phase = GamePhase::Running;
        true
    }

    /// Running ⇄ Paused. Returns the new phase, or `None` if ignored.
    pub fn toggle_pause(&mut self) -> Option<GamePhase> {
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            _ => return None,
        };
        Some(self.phase)
    }

    /// Fresh board from any phase: back to Idle
    pub fn reset(&mut self) {
        self.phase = GamePhase::Idle;
        self.score = 0;
        self.lives = self.config.starting_lives;
        self.time_ticks = 0;
        self.bricks.initialize();
        self.particles.clear();
        self.ball.speed = self.config.ball_speed;
        self.reset_positions();
    }

    /// Ball and paddle to their start coordinates (after a lost life)
    pub fn reset_positions(&mut self) {
        self.ball.respawn(&self.config);
        self.paddle.recenter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(Config::new(), 1);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.bricks.alive_count(), 60);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 500.0));
        assert!((state.ball.vel.length() - state.ball.speed).abs() < 1e-5);
        assert!(state.ball.vel.x > 0.0 && state.ball.vel.y < 0.0);
        assert_eq!(state.paddle.x, 350.0);
        assert_eq!(state.paddle.y, 570.0);
    }

    #[test]
    fn test_phase_transitions() {
        let mut state = GameState::new(Config::new(), 1);

        assert_eq!(state.toggle_pause(), None);
        assert!(state.start());
        assert!(!state.start());
        assert_eq!(state.toggle_pause(), Some(GamePhase::Paused));
        assert!(!state.start());
        assert_eq!(state.toggle_pause(), Some(GamePhase::Running));

        state.phase = GamePhase::Over;
        assert_eq!(state.toggle_pause(), None);
        assert!(!state.start());

        state.reset();
        assert_eq!(state.phase, GamePhase::Idle);
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut state = GameState::new(Config::new(), 1);
        state.start();
        state.score = 120;
        state.lives = 1;
        state.ball.set_speed(6.0);
        state.ball.pos = Vec2::new(10.0, 10.0);
        state.paddle.set_x(0.0);
        state.bricks.destroy_at(2, 2);
        state.particles.spawn(Vec2::ZERO, Rgba::WHITE, 10);

        state.reset();

        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.ball.speed, 4.0);
        assert!((state.ball.vel.length() - 4.0).abs() < 1e-5);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 500.0));
        assert_eq!(state.paddle.x, 350.0);
        assert_eq!(state.bricks.alive_count(), 60);
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_paddle_clamping() {
        let mut paddle = Paddle::new(&Config::new());

        paddle.set_x(-20.0);
        assert_eq!(paddle.x, 0.0);
        paddle.step(true, false);
        assert_eq!(paddle.x, 0.0);

        paddle.set_x(696.0);
        paddle.step(false, true);
        assert_eq!(paddle.x, 700.0);

        paddle.follow_pointer(5.0);
        assert_eq!(paddle.x, 0.0);
        paddle.follow_pointer(400.0);
        assert_eq!(paddle.x, 350.0);
        paddle.follow_pointer(10_000.0);
        assert_eq!(paddle.x, 700.0);
    }

    #[test]
    fn test_paddle_ignores_non_finite_positions() {
        let mut paddle = Paddle::new(&Config::new());
        paddle.set_x(120.0);

        for x in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            paddle.follow_pointer(x);
            assert_eq!(paddle.x, 120.0);
            paddle.set_x(x);
            assert_eq!(paddle.x, 120.0);
        }

        paddle.step(false, true);
        assert_eq!(paddle.x, 128.0);
    }

    #[test]
    fn test_paddle_right_wins() {
        let mut paddle = Paddle::new(&Config::new());
        paddle.step(true, true);
        assert_eq!(paddle.x, 358.0);
    }

    #[test]
    fn test_set_speed_keeps_direction() {
        let mut ball = Ball::new(&Config::new());
        ball.vel = Vec2::new(-3.0, 4.0) * (4.0 / 5.0);
        ball.set_speed(4.4);
        assert!(ball.vel.x < 0.0 && ball.vel.y > 0.0);
        assert!((ball.vel.length() - 4.4).abs() < 1e-5);
        assert!((ball.vel.x / ball.vel.y + 0.75).abs() < 1e-5);
    }
}
