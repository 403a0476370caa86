//! RGBA colors

/// RGBA color with components in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Linear interpolation between two colors
    pub fn lerp(from: &Color, to: &Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    /// CSS-style string: `#rrggbb` when opaque, `rgba(...)` otherwise
    pub fn to_hex(&self) -> String {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        if self.a < 1.0 {
            format!(
                "rgba({},{},{},{})",
                channel(self.r),
                channel(self.g),
                channel(self.b),
                self.a
            )
        } else {
            format!(
                "#{:02x}{:02x}{:02x}",
                channel(self.r),
                channel(self.g),
                channel(self.b)
            )
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip_string() {
        assert_eq!(Color::from_hex(0x2DD4BF).to_hex(), "#2dd4bf");
        assert_eq!(Color::WHITE.to_hex(), "#ffffff");
    }

    #[test]
    fn test_translucent_string() {
        let c = Color::from_hex(0x1F2937).with_alpha(0.5);
        assert_eq!(c.to_hex(), "rgba(31,41,55,0.5)");
    }

    #[test]
    fn test_lerp_endpoints() {
        let from = Color::BLACK;
        let to = Color::WHITE;
        assert_eq!(Color::lerp(&from, &to, 0.0), from);
        assert_eq!(Color::lerp(&from, &to, 1.0), to);
        assert_eq!(Color::lerp(&from, &to, 2.0), to);
    }
}
