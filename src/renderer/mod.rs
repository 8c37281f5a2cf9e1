//! Rendering module
//!
//! The game issues draw calls against the [`Surface`] trait; the browser build
//! backs it with a 2D canvas, tests and the native runner with a recorder.

pub mod recording;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use glam::Vec2;

use crate::color::Rgba;
use crate::sim::Rect;

pub use recording::{DrawCommand, RecordingSurface};
pub use scene::{draw_ball, draw_bricks, draw_end_screen, draw_paddle, draw_particles, draw_scene};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

/// How a rectangle is filled
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    Solid(Rgba),
    /// Linear gradient running from `from_y` (top colour) to `to_y` (bottom colour)
    VerticalGradient {
        top: Rgba,
        bottom: Rgba,
        from_y: f32,
        to_y: f32,
    },
}

/// A 2D drawing surface
pub trait Surface {
    /// Clear a region to transparent
    fn clear(&mut self, rect: Rect);

    fn fill_rect(&mut self, rect: Rect, fill: Fill);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba, line_width: f32);

    /// Text horizontally centred on `at`
    fn fill_text(&mut self, text: &str, at: Vec2, font: &str, color: Rgba);
}
