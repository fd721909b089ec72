// Simple color struct, created from an unsigned 32 representing RRGGBBAA
// or from rgb components, and formatted as a CSS rgba() string for the canvas

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 0xff }
    }

    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    // Canvas fill/stroke style with the alpha overridden, alpha is clamped to [0, 1]
    pub fn to_css(&self, alpha: f64) -> String {
        let alpha = if alpha.is_nan() { 0.0 } else { alpha.max(0.0).min(1.0) };
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }

    // Canvas style using the color's own alpha channel
    pub fn to_css_opaque(&self) -> String {
        self.to_css(self.a as f64 / 255.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpacks_rrggbbaa() {
        let c = Color::from_u32(0xfffdc5ff);
        assert_eq!(c, Color::rgb(255, 253, 197));
    }

    #[test]
    fn css_alpha_is_clamped() {
        let c = Color::rgb(100, 200, 255);
        assert_eq!(c.to_css(0.0), "rgba(100, 200, 255, 0)");
        assert_eq!(c.to_css(-0.25), "rgba(100, 200, 255, 0)");
        assert_eq!(c.to_css(1.5), "rgba(100, 200, 255, 1)");
        assert_eq!(c.to_css(0.5), "rgba(100, 200, 255, 0.5)");
    }

    #[test]
    fn opaque_css_uses_own_alpha() {
        assert_eq!(Color::WHITE.to_css_opaque(), "rgba(255, 255, 255, 1)");
    }
}
