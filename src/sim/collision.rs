//! Collision detection and response for axis-aligned geometry
//!
//! Everything on the playfield is a rectangle except the ball, which is
//! tested through its bounding square (centre ± radius). The helpers here
//! are pure; `tick` decides what to do with their answers.

use glam::Vec2;

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bounding square of a circle
    pub fn around_circle(center: Vec2, radius: f32) -> Self {
        Self::new(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Strict overlap test: touching edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right() > other.x
            && self.x < other.right()
            && self.bottom() > other.y
            && self.y < other.bottom()
    }
}

/// Which boundaries a wall check bounced off
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHit {
    pub side: bool,
    pub top: bool,
}

impl WallHit {
    pub fn any(&self) -> bool {
        self.side || self.top
    }
}

/// Reflect a ball's velocity off the left, right and top walls
///
/// Only the sign of the crossing component changes, and it is pointed back
/// into the playfield, so a ball still overlapping a wall on the next frame
/// cannot get stuck flipping back and forth. The bottom is open.
pub fn reflect_off_walls(pos: Vec2, vel: Vec2, radius: f32, width: f32) -> (Vec2, WallHit) {
    let mut vel = vel;
    let mut hit = WallHit::default();

    if pos.x - radius < 0.0 {
        vel.x = vel.x.abs();
        hit.side = true;
    } else if pos.x + radius > width {
        vel.x = -vel.x.abs();
        hit.side = true;
    }

    if pos.y - radius < 0.0 {
        vel.y = vel.y.abs();
        hit.top = true;
    }

    (vel, hit)
}

/// Relative hit position along the paddle (0 = left edge, 1 = right edge)
///
/// Returns `None` unless the ball's vertical extent overlaps the paddle band
/// and the ball centre lies strictly inside the paddle horizontally.
pub fn paddle_contact(ball_pos: Vec2, radius: f32, paddle: &Rect) -> Option<f32> {
    let in_band = ball_pos.y + radius > paddle.y && ball_pos.y - radius < paddle.bottom();
    let in_span = ball_pos.x > paddle.x && ball_pos.x < paddle.right();

    if in_band && in_span {
        Some(((ball_pos.x - paddle.x) / paddle.width).clamp(0.0, 1.0))
    } else {
        None
    }
}

/// Launch angle (radians from +x) for a paddle hit position
///
/// Edges map to 45° and 135°, the centre to straight up.
pub fn paddle_bounce_angle(hit_pos: f32) -> f32 {
    std::f32::consts::PI * (0.25 + 0.5 * hit_pos.clamp(0.0, 1.0))
}

/// Post-bounce velocity for a paddle hit; always points upward
pub fn paddle_bounce_velocity(hit_pos: f32, speed: f32) -> Vec2 {
    let angle = paddle_bounce_angle(hit_pos);
    Vec2::new(speed * angle.cos(), -(speed * angle.sin()).abs())
}

/// Ball has fully left the playfield through the bottom edge
pub fn ball_exited_bottom(ball_pos: Vec2, radius: f32, height: f32) -> bool {
    ball_pos.y - radius > height
}
