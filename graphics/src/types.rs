//! Common graphics value types.

/// Texture format for swapchain surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextureFormat {
    /// 8-bit BGRA, unsigned normalized.
    #[default]
    Bgra8Unorm,
    /// 8-bit BGRA, unsigned normalized, sRGB encoded.
    Bgra8UnormSrgb,
    /// 8-bit RGBA, unsigned normalized.
    Rgba8Unorm,
    /// 8-bit RGBA, unsigned normalized, sRGB encoded.
    Rgba8UnormSrgb,
}

/// A color used for clear operations.
///
/// Components are stored as double-precision values in the 0.0..=1.0 range,
/// matching what GPU APIs expect for clear values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearColor {
    /// Red component.
    pub r: f64,
    /// Green component.
    pub g: f64,
    /// Blue component.
    pub b: f64,
    /// Alpha component.
    pub a: f64,
}

impl ClearColor {
    /// Opaque black.
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Create a clear color from floating point components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create a clear color from 8-bit components.
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }
}

impl Default for ClearColor {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_color_from_rgba8() {
        let color = ClearColor::from_rgba8(20, 20, 30, 255);
        assert_eq!(color.r, 20.0 / 255.0);
        assert_eq!(color.g, 20.0 / 255.0);
        assert_eq!(color.b, 30.0 / 255.0);
        assert_eq!(color.a, 1.0);

        assert_eq!(ClearColor::from_rgba8(0, 0, 0, 255), ClearColor::BLACK);
    }

    #[test]
    fn test_default_format() {
        assert_eq!(TextureFormat::default(), TextureFormat::Bgra8Unorm);
    }
}
