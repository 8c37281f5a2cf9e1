//! Game tuning configuration
//!
//! Every gameplay constant lives here so a run can be reshaped from JSON
//! without touching the simulation. Defaults come from [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Surface ===
    pub surface_width: f32,
    pub surface_height: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Base speed in pixels per frame (restored on full reset)
    pub ball_speed: f32,
    /// Distance from the bottom edge to the ball's start position
    pub ball_start_offset: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance from the bottom edge to the paddle's top edge
    pub paddle_bottom_offset: f32,
    pub paddle_speed: f32,

    // === Bricks ===
    pub brick_rows: usize,
    pub brick_columns: usize,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_offset_top: f32,
    pub brick_offset_left: f32,

    // === Rules ===
    pub points_per_brick: u32,
    pub starting_lives: u8,
    /// Ball speeds up each time the score lands on a multiple of this
    pub speedup_score_interval: u32,
    pub speedup_factor: f32,

    // === Particles ===
    pub particles_per_brick: usize,
    pub particle_max_speed: f32,
    pub particle_decay: f32,
    pub particle_shrink: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_START_SPEED,
            ball_start_offset: BALL_START_OFFSET,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,
            paddle_speed: PADDLE_SPEED,

            brick_rows: BRICK_ROWS,
            brick_columns: BRICK_COLUMNS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_offset_top: BRICK_OFFSET_TOP,
            brick_offset_left: BRICK_OFFSET_LEFT,

            points_per_brick: POINTS_PER_BRICK,
            starting_lives: STARTING_LIVES,
            speedup_score_interval: SPEEDUP_SCORE_INTERVAL,
            speedup_factor: SPEEDUP_FACTOR,

            particles_per_brick: PARTICLES_PER_BRICK,
            particle_max_speed: PARTICLE_MAX_SPEED,
            particle_decay: PARTICLE_DECAY,
            particle_shrink: PARTICLE_SHRINK,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON config; missing fields keep defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file (native runner)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check that every value keeps the simulation well-formed
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("surface_width", self.surface_width),
            ("surface_height", self.surface_height),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
            ("particle_decay", self.particle_decay),
            ("particle_shrink", self.particle_shrink),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{} must be positive, got {}", name, value)));
            }
        }

        if self.brick_padding < 0.0 || self.brick_offset_top < 0.0 || self.brick_offset_left < 0.0 {
            return Err(invalid("brick padding and offsets must not be negative"));
        }
        if self.particle_max_speed < 0.0 {
            return Err(invalid("particle_max_speed must not be negative"));
        }
        if self.paddle_width > self.surface_width {
            return Err(invalid(format!(
                "paddle_width {} exceeds surface_width {}",
                self.paddle_width, self.surface_width
            )));
        }
        if self.paddle_bottom_offset < self.paddle_height
            || self.paddle_bottom_offset > self.surface_height
        {
            return Err(invalid("paddle must sit fully on the surface"));
        }
        if self.ball_start_offset <= self.paddle_bottom_offset
            || self.ball_start_offset > self.surface_height
        {
            return Err(invalid("ball must start between the paddle and the top edge"));
        }
        if self.brick_rows == 0 || self.brick_columns == 0 {
            return Err(invalid("brick grid needs at least one row and one column"));
        }
        let (right, bottom) = self.brick_grid_extent();
        if right > self.surface_width || bottom > self.surface_height - self.ball_start_offset {
            return Err(invalid(format!(
                "brick grid extends to ({}, {}), outside the playfield",
                right, bottom
            )));
        }
        if self.points_per_brick == 0 || self.speedup_score_interval == 0 {
            return Err(invalid("points_per_brick and speedup_score_interval must be non-zero"));
        }
        if !(self.speedup_factor.is_finite() && self.speedup_factor >= 1.0) {
            return Err(invalid("speedup_factor must be at least 1.0"));
        }
        if self.starting_lives == 0 {
            return Err(invalid("starting_lives must be non-zero"));
        }
        if self.particle_shrink > 1.0 {
            return Err(invalid("particle_shrink must not grow particles"));
        }
        Ok(())
    }

    /// Bottom-right corner of the last brick in the grid
    pub fn brick_grid_extent(&self) -> (f32, f32) {
        let cols = self.brick_columns as f32;
        let rows = self.brick_rows as f32;
        (
            self.brick_offset_left + cols * (self.brick_width + self.brick_padding)
                - self.brick_padding,
            self.brick_offset_top + rows * (self.brick_height + self.brick_padding)
                - self.brick_padding,
        )
    }

    /// Y coordinate of the paddle's top edge
    pub fn paddle_y(&self) -> f32 {
        self.surface_height - self.paddle_bottom_offset
    }

    /// Paddle x that centres it horizontally
    pub fn paddle_start_x(&self) -> f32 {
        (self.surface_width - self.paddle_width) / 2.0
    }
}

fn invalid(msg: impl Into<String>) -> Error {
    Error::InvalidConfig(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.paddle_y(), 570.0);
        assert_eq!(config.paddle_start_x(), 350.0);
    }

    #[test]
    fn test_default_grid_fits() {
        let (right, bottom) = Config::new().brick_grid_extent();
        assert_eq!(right, 780.0);
        assert_eq!(bottom, 205.0);
    }

    #[test]
    fn test_from_json_partial() {
        let config = Config::from_json(r#"{ "starting_lives": 5, "paddle_speed": 10.0 }"#)
            .expect("valid partial config");
        assert_eq!(config.starting_lives, 5);
        assert_eq!(config.paddle_speed, 10.0);
        assert_eq!(config.brick_columns, BRICK_COLUMNS);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(Config::from_json("{ nope"), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let cases = [
            r#"{ "paddle_width": 900.0 }"#,
            r#"{ "ball_radius": 0.0 }"#,
            r#"{ "starting_lives": 0 }"#,
            r#"{ "speedup_factor": 0.5 }"#,
            r#"{ "brick_rows": 0 }"#,
            r#"{ "brick_columns": 20 }"#,
            r#"{ "particle_shrink": 1.5 }"#,
        ];
        for json in cases {
            assert!(
                matches!(Config::from_json(json), Err(Error::InvalidConfig(_))),
                "expected rejection for {}",
                json
            );
        }
    }

    #[test]
    fn test_roundtrip_json() {
        let config = Config::new();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(Config::from_json(&json).unwrap(), config);
    }
}
