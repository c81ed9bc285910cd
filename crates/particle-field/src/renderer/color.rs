/// RGBA color for drawing operations (components 0.0 - 1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a color from RGBA components (0.0 - 1.0).
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from a packed `0xRRGGBB` value.
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as f32 / 255.0,
            g: ((rgb >> 8) & 0xff) as f32 / 255.0,
            b: (rgb & 0xff) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Create a color with the given alpha value.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// 8-bit RGB components.
    pub fn rgb8(&self) -> [u8; 3] {
        let to8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [to8(self.r), to8(self.g), to8(self.b)]
    }

    /// CSS color string: `#rrggbb` when opaque, `rgba(r, g, b, a)` otherwise.
    pub fn to_css(&self) -> String {
        let [r, g, b] = self.rgb8();
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("rgba({}, {}, {}, {})", r, g, b, self.a.max(0.0))
        }
    }

    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT_WHITE: Self = Self::new(1.0, 1.0, 1.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}
