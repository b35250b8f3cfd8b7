/// Premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are multiplied by `a` (premultiplied alpha).
///
/// Constructors take straight-alpha input (the way colors are written in
/// `rgba(...)` / hex notation) and premultiply on the way in.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    #[inline]
    pub const fn black() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 }
    }

    #[inline]
    pub const fn white() -> Self {
        Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 }
    }

    /// Creates a premultiplied color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// `rgba(r, g, b, a)` with byte channels and a fractional alpha.
    #[inline]
    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a)
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa` (straight alpha).
    ///
    /// Returns `None` for anything else.
    pub fn from_hex(src: &str) -> Option<Self> {
        let hex = src.trim().strip_prefix('#')?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            3 => {
                let nib = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
                Some(Self::from_srgb_u8(nib(0)?, nib(1)?, nib(2)?, 255))
            }
            6 => Some(Self::from_srgb_u8(byte(0)?, byte(2)?, byte(4)?, 255)),
            8 => Some(Self::from_srgb_u8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Straight-alpha RGBA bytes, as stored in PNG files.
    pub fn to_rgba8(self) -> [u8; 4] {
        let (r, g, b, a) = self.to_straight();
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(r), q(g), q(b), q(a)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_six_digits() {
        assert_eq!(Color::from_hex("#ffffff"), Some(Color::white()));
        assert_eq!(Color::from_hex("#3d7e9a").map(Color::to_rgba8), Some([0x3d, 0x7e, 0x9a, 255]));
    }

    #[test]
    fn hex_short_and_alpha_forms() {
        assert_eq!(Color::from_hex("#000"), Some(Color::black()));
        assert_eq!(Color::from_hex("#ff000080").map(Color::to_rgba8), Some([255, 0, 0, 128]));
    }

    #[test]
    fn hex_rejects_malformed() {
        assert_eq!(Color::from_hex("ffffff"), None);
        assert_eq!(Color::from_hex("#ffff"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
    }

    #[test]
    fn rgba_premultiplies() {
        let c = Color::rgba(88, 46, 155, 0.2);
        assert!((c.a - 0.2).abs() < 1e-6);
        assert!((c.r - 88.0 / 255.0 * 0.2).abs() < 1e-6);
    }
}
