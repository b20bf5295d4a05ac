use std::fmt;

/// Straight-alpha RGBA color, channels in `[0, 1]`.
///
/// Channels are kept un-premultiplied so a fully transparent color still
/// carries its RGB and prints back exactly. Renderers that blend in
/// premultiplied space use [`to_premul`](Self::to_premul).
///
/// `Display` produces the canonical CSS form used by shadow serialization:
/// `rgb(R,G,B)` for opaque colors, `rgba(R,G,B,A)` otherwise.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // straight
    pub g: f32, // straight
    pub b: f32, // straight
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    #[inline]
    pub const fn opaque_black() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 }
    }

    /// Creates a color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Creates a color from straight bytes for `rgb` and a fractional
    /// alpha, the shape CSS `rgba(r,g,b,a)` literals come in.
    #[inline]
    pub fn from_css_rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a)
    }

    /// Creates a color from straight alpha components, clamped to `[0, 1]`.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        (self.r, self.g, self.b, self.a)
    }

    /// Returns the premultiplied representation (`rgb * a`, `a`).
    #[inline]
    pub fn to_premul(self) -> (f32, f32, f32, f32) {
        (self.r * self.a, self.g * self.a, self.b * self.a, self.a)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b, a) = self.to_straight();
        let (r, g, b) = (to_byte(r), to_byte(g), to_byte(b));
        if a > 0.999 {
            write!(f, "rgb({},{},{})", r, g, b)
        } else {
            write!(f, "rgba({},{},{},{})", r, g, b, format_alpha(a))
        }
    }
}

#[inline]
fn to_byte(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

/// Six significant digits with trailing zeros trimmed (`0.5`, `0.501961`, `0`).
fn format_alpha(a: f32) -> String {
    if a <= 0.0 {
        return "0".to_string();
    }
    // Widen first so f32 noise (0.3 -> 0.30000001) falls past the sixth digit.
    let a = a as f64;
    let decimals = (5 - a.log10().floor() as i32).max(0) as usize;
    let s = format!("{:.*}", decimals, a);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_uses_rgb_form() {
        assert_eq!(Color::from_srgb_u8(255, 128, 0, 255).to_string(), "rgb(255,128,0)");
    }

    #[test]
    fn translucent_uses_rgba_form() {
        assert_eq!(Color::from_css_rgba(0, 0, 0, 0.5).to_string(), "rgba(0,0,0,0.5)");
        assert_eq!(Color::from_css_rgba(10, 20, 30, 0.3).to_string(), "rgba(10,20,30,0.3)");
    }

    #[test]
    fn byte_alpha_prints_six_digits() {
        assert_eq!(Color::from_srgb_u8(255, 0, 0, 128).to_string(), "rgba(255,0,0,0.501961)");
    }

    #[test]
    fn transparent_prints_zero_alpha() {
        assert_eq!(Color::transparent().to_string(), "rgba(0,0,0,0)");
    }

    #[test]
    fn zero_alpha_keeps_rgb_channels() {
        assert_eq!(Color::from_css_rgba(255, 0, 0, 0.0).to_string(), "rgba(255,0,0,0)");
        assert_eq!(Color::from_srgb_u8(12, 34, 56, 0).to_string(), "rgba(12,34,56,0)");
    }

    #[test]
    fn premul_scales_rgb_by_alpha() {
        assert_eq!(Color::from_straight(1.0, 0.5, 0.0, 0.5).to_premul(), (0.5, 0.25, 0.0, 0.5));
        assert_eq!(Color::from_css_rgba(255, 0, 0, 0.0).to_premul(), (0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn small_alpha_keeps_significant_digits() {
        assert_eq!(format_alpha(0.0125), "0.0125");
        assert_eq!(format_alpha(0.25), "0.25");
    }
}
