/// An RGBA color with `f32` components in the `0.0..=1.0` range.
///
/// Colors are stored in RGBA order and can be constructed from floats,
/// `u8` values, or hex codes:
///
/// ```
/// use spritebatch_core::Color;
///
/// let red = Color::rgb(1.0, 0.0, 0.0);
/// let semi_transparent = Color::rgba(1.0, 1.0, 1.0, 0.5);
/// let from_hex = Color::from_hex(0xFF8800);
/// assert_eq!(red.to_packed(), 0xFF0000FF);
/// ```
///
/// Sprite vertices carry the [packed](Color::to_packed) form.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    /// Create a color from RGB components with full opacity (alpha = 1.0).
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGBA components.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from 8-bit RGBA values (0–255 mapped to 0.0–1.0).
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create a color from a 24-bit RGB hex value (e.g. `0xFF8800`).
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as u8;
        let g = ((hex >> 8) & 0xFF) as u8;
        let b = (hex & 0xFF) as u8;
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Pack into a `u32` whose little-endian bytes are `[r, g, b, a]`.
    ///
    /// Components are clamped to `0.0..=1.0` and rounded.
    pub fn to_packed(self) -> u32 {
        fn channel(v: f32) -> u32 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u32
        }

        channel(self.r) | channel(self.g) << 8 | channel(self.b) << 16 | channel(self.a) << 24
    }

    /// Inverse of [`Color::to_packed`].
    pub fn from_packed(packed: u32) -> Self {
        let [r, g, b, a] = packed.to_le_bytes();
        Self::from_rgba_u8(r, g, b, a)
    }

    /// Convert to an `[r, g, b, a]` array.
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f32; 4]> for Color {
    fn from(arr: [f32; 4]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
            a: arr[3],
        }
    }
}

impl From<Color> for [f32; 4] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_byte_order() {
        let packed = Color::from_rgba_u8(0x11, 0x22, 0x33, 0x44).to_packed();
        assert_eq!(packed.to_le_bytes(), [0x11, 0x22, 0x33, 0x44]);
        assert_eq!(Color::WHITE.to_packed(), u32::MAX);
    }

    #[test]
    fn test_packed_clamps_out_of_range() {
        let packed = Color::rgba(2.0, -1.0, 0.5, 1.0).to_packed();
        assert_eq!(packed.to_le_bytes(), [255, 0, 128, 255]);
    }

    #[test]
    fn test_from_packed_inverse() {
        let color = Color::from_rgba_u8(10, 20, 30, 40);
        assert_eq!(Color::from_packed(color.to_packed()), color);
    }
}
