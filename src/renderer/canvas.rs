//! HTML canvas backend for [`Surface`]

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use super::{Fill, Surface};
use crate::color::Rgba;
use crate::sim::Rect;

/// Draws onto a `CanvasRenderingContext2d`
pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(context: CanvasRenderingContext2d) -> Self {
        Self { context }
    }

    fn circle_path(&self, center: Vec2, radius: f32) -> bool {
        self.context.begin_path();
        match self.context.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("arc failed: {:?}", e);
                false
            }
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, rect: Rect) {
        self.context
            .clear_rect(rect.x as f64, rect.y as f64, rect.width as f64, rect.height as f64);
    }

    fn fill_rect(&mut self, rect: Rect, fill: Fill) {
        match fill {
            Fill::Solid(color) => self.context.set_fill_style_str(&color.to_css()),
            Fill::VerticalGradient {
                top,
                bottom,
                from_y,
                to_y,
            } => {
                let gradient = self.context.create_linear_gradient(
                    rect.x as f64,
                    from_y as f64,
                    rect.x as f64,
                    to_y as f64,
                );
                let stops = gradient
                    .add_color_stop(0.0, &top.to_css())
                    .and_then(|_| gradient.add_color_stop(1.0, &bottom.to_css()));
                if let Err(e) = stops {
                    log::warn!("gradient stop rejected: {:?}", e);
                    return;
                }
                self.context.set_fill_style_canvas_gradient(&gradient);
            }
        }
        self.context
            .fill_rect(rect.x as f64, rect.y as f64, rect.width as f64, rect.height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        if self.circle_path(center, radius) {
            self.context.set_fill_style_str(&color.to_css());
            self.context.fill();
        }
        self.context.close_path();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba, line_width: f32) {
        if self.circle_path(center, radius) {
            self.context.set_stroke_style_str(&color.to_css());
            self.context.set_line_width(line_width as f64);
            self.context.stroke();
        }
        self.context.close_path();
    }

    fn fill_text(&mut self, text: &str, at: Vec2, font: &str, color: Rgba) {
        self.context.set_font(font);
        self.context.set_text_align("center");
        self.context.set_fill_style_str(&color.to_css());
        if let Err(e) = self.context.fill_text(text, at.x as f64, at.y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }
}
