//! RGBA colours for display attributes
//!
//! Colours never affect gameplay; they ride along on bricks, particles and
//! the ball so the renderer can style them.

use std::fmt;

/// An sRGB colour with straight (non-premultiplied) alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity (0.0 - 1.0)
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Opaque colour from a 0xRRGGBB literal
    pub const fn hex(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Same colour with a different opacity
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS colour string accepted by canvas fill/stroke styles
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a >= 1.0 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_components() {
        let c = Rgba::hex(0xffd700);
        assert_eq!((c.r, c.g, c.b), (0xff, 0xd7, 0x00));
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_css_output() {
        assert_eq!(Rgba::hex(0x4ecdc4).to_css(), "#4ecdc4");
        assert_eq!(Rgba::WHITE.with_alpha(0.3).to_css(), "rgba(255, 255, 255, 0.3)");
        assert_eq!(Rgba::BLACK.with_alpha(0.0).to_css(), "rgba(0, 0, 0, 0)");
    }

    #[test]
    fn test_with_alpha_clamps() {
        assert_eq!(Rgba::WHITE.with_alpha(-1.0).a, 0.0);
        assert_eq!(Rgba::WHITE.with_alpha(2.0).a, 1.0);
    }
}
