//! Brick Breaker - a single-screen ball-and-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bricks, ball, paddle, particles, physics)
//! - `game`: Phase state machine and the frame-driven render loop
//! - `renderer`: Drawing surface abstraction and scene drawing
//! - `platform`: Frame scheduling (requestAnimationFrame on the web)
//! - `config`: Data-driven game tuning

pub mod color;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use color::Rgba;
pub use config::Config;
pub use error::{Error, Result};
pub use game::{Controls, Game, Hud};

/// Game configuration constants
pub mod consts {
    use crate::color::Rgba;

    /// Drawing surface dimensions
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Base ball speed in pixels per frame
    pub const BALL_START_SPEED: f32 = 4.0;
    /// Ball spawns this far above the bottom edge
    pub const BALL_START_OFFSET: f32 = 100.0;
    pub const BALL_COLOR: Rgba = Rgba::hex(0xffd700);

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    /// Paddle top edge sits this far above the bottom edge
    pub const PADDLE_BOTTOM_OFFSET: f32 = 30.0;
    /// Paddle speed in pixels per frame
    pub const PADDLE_SPEED: f32 = 8.0;
    pub const PADDLE_COLOR: Rgba = Rgba::hex(0x4ecdc4);

    /// Brick grid layout
    pub const BRICK_ROWS: usize = 6;
    pub const BRICK_COLUMNS: usize = 10;
    pub const BRICK_WIDTH: f32 = 70.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 5.0;
    pub const BRICK_OFFSET_TOP: f32 = 60.0;
    pub const BRICK_OFFSET_LEFT: f32 = 35.0;

    /// Brick colour per row (cycles if the grid has more rows)
    pub const BRICK_COLORS: [Rgba; 6] = [
        Rgba::hex(0xff6b6b),
        Rgba::hex(0x4ecdc4),
        Rgba::hex(0x45b7d1),
        Rgba::hex(0xf7b731),
        Rgba::hex(0x5f27cd),
        Rgba::hex(0x00d2d3),
    ];

    /// Scoring and lives
    pub const POINTS_PER_BRICK: u32 = 10;
    pub const STARTING_LIVES: u8 = 3;

    /// Ball speeds up every time the score hits a multiple of this
    pub const SPEEDUP_SCORE_INTERVAL: u32 = 50;
    pub const SPEEDUP_FACTOR: f32 = 1.1;

    /// Particle burst on brick destruction
    pub const PARTICLES_PER_BRICK: usize = 10;
    /// Velocity components are drawn from [-max, max)
    pub const PARTICLE_MAX_SPEED: f32 = 2.0;
    pub const PARTICLE_MIN_SIZE: f32 = 1.0;
    pub const PARTICLE_SIZE_RANGE: f32 = 3.0;
    /// Alpha lost per tick
    pub const PARTICLE_DECAY: f32 = 0.02;
    /// Size multiplier per tick
    pub const PARTICLE_SHRINK: f32 = 0.98;
}
