//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per animation frame, velocities in pixels per frame
//! - Seeded RNG only (particles)
//! - Stable iteration order (column-major bricks)
//! - No rendering or platform dependencies

pub mod bricks;
pub mod collision;
pub mod particles;
pub mod state;
pub mod tick;

pub use bricks::{Brick, BrickGrid};
pub use collision::{Rect, WallHit, paddle_bounce_angle, paddle_bounce_velocity};
pub use particles::{Particle, ParticleSystem};
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle};
pub use tick::{TickInput, tick};
