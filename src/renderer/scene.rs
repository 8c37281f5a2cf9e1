//! Scene drawing: bricks, ball, paddle, particles and end screens

use glam::Vec2;

use super::{Fill, Surface};
use crate::color::Rgba;
use crate::config::Config;
use crate::sim::{Ball, BrickGrid, GamePhase, GameState, Paddle, ParticleSystem, Rect};

/// Translucent white fading to clear, used for the top-half sheen
const HIGHLIGHT_TOP: Rgba = Rgba {
    r: 255,
    g: 255,
    b: 255,
    a: 0.3,
};
const HIGHLIGHT_BOTTOM: Rgba = Rgba {
    r: 255,
    g: 255,
    b: 255,
    a: 0.0,
};

const GLOW_WIDTH: f32 = 2.0;
const GLOW_ALPHA: f32 = 0.3;

const OVERLAY: Rgba = Rgba {
    r: 0,
    g: 0,
    b: 0,
    a: 0.7,
};
const TITLE_FONT: &str = "bold 48px Arial";
const SCORE_FONT: &str = "24px Arial";
const WIN_COLOR: Rgba = Rgba::hex(0xffd700);

/// Full static scene (no particle advance): clear, bricks, ball, paddle, particles
pub fn draw_scene(surface: &mut impl Surface, state: &GameState) {
    let config = &state.config;
    surface.clear(Rect::new(0.0, 0.0, config.surface_width, config.surface_height));
    draw_bricks(surface, &state.bricks);
    draw_ball(surface, &state.ball);
    draw_paddle(surface, &state.paddle);
    draw_particles(surface, &state.particles);
}

/// Solid body plus a sheen over the upper half
fn draw_highlighted_rect(surface: &mut impl Surface, rect: Rect, color: Rgba) {
    surface.fill_rect(rect, Fill::Solid(color));
    surface.fill_rect(
        Rect::new(rect.x, rect.y, rect.width, rect.height / 2.0),
        Fill::VerticalGradient {
            top: HIGHLIGHT_TOP,
            bottom: HIGHLIGHT_BOTTOM,
            from_y: rect.y,
            to_y: rect.bottom(),
        },
    );
}

pub fn draw_bricks(surface: &mut impl Surface, bricks: &BrickGrid) {
    for brick in bricks.iter_alive() {
        draw_highlighted_rect(surface, brick.rect, brick.color);
    }
}

/// Disk with a faint glow ring just outside it
pub fn draw_ball(surface: &mut impl Surface, ball: &Ball) {
    surface.fill_circle(ball.pos, ball.radius, ball.color);
    surface.stroke_circle(
        ball.pos,
        ball.radius + GLOW_WIDTH,
        ball.color.with_alpha(GLOW_ALPHA),
        GLOW_WIDTH,
    );
}

pub fn draw_paddle(surface: &mut impl Surface, paddle: &Paddle) {
    draw_highlighted_rect(surface, paddle.rect(), paddle.color);
}

pub fn draw_particles(surface: &mut impl Surface, particles: &ParticleSystem) {
    for p in particles.iter() {
        surface.fill_rect(
            Rect::new(p.pos.x, p.pos.y, p.size, p.size),
            Fill::Solid(p.color.with_alpha(p.alpha)),
        );
    }
}

/// Dimmed overlay with the result and final score; nothing for live phases
pub fn draw_end_screen(surface: &mut impl Surface, phase: GamePhase, score: u32, config: &Config) {
    let (title, title_color) = match phase {
        GamePhase::Over => ("GAME OVER", Rgba::WHITE),
        GamePhase::Won => ("YOU WIN!", WIN_COLOR),
        _ => return,
    };

    let center = Vec2::new(config.surface_width / 2.0, config.surface_height / 2.0);
    surface.fill_rect(
        Rect::new(0.0, 0.0, config.surface_width, config.surface_height),
        Fill::Solid(OVERLAY),
    );
    surface.fill_text(title, center - Vec2::new(0.0, 30.0), TITLE_FONT, title_color);
    surface.fill_text(
        &format!("Final score: {}", score),
        center + Vec2::new(0.0, 20.0),
        SCORE_FONT,
        Rgba::WHITE,
    );
}
