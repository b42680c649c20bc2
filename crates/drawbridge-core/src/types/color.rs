//! RGBA color value in the sRGB space.

/// A native color with four channels in `[0.0, 1.0]`.
///
/// This is a plain value type. It is built by the color converter from
/// script input or supplied by native callers as a default; once
/// constructed it never changes and has no lifecycle of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    /// Opaque black, the fallback when a script supplies nothing at all.
    pub const BLACK: Color = Color {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
        alpha: 1.0,
    };

    /// Create a color from sRGB channel values.
    ///
    /// Channels are expected in `[0.0, 1.0]` but are stored as given; the
    /// drawing subsystem that consumes the value owns any clamping policy.
    pub fn srgb(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// True if all four channels lie in `[0.0, 1.0]`.
    pub fn in_gamut(&self) -> bool {
        let ok = |c: f64| (0.0..=1.0).contains(&c);
        ok(self.red) && ok(self.green) && ok(self.blue) && ok(self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_is_opaque() {
        assert_eq!(Color::BLACK, Color::srgb(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn srgb_stores_channels_as_given() {
        let c = Color::srgb(0.25, 0.5, 0.75, 0.5);
        assert_eq!(c.red, 0.25);
        assert_eq!(c.green, 0.5);
        assert_eq!(c.blue, 0.75);
        assert_eq!(c.alpha, 0.5);
    }

    #[test]
    fn in_gamut() {
        assert!(Color::BLACK.in_gamut());
        assert!(!Color::srgb(1.5, 0.0, 0.0, 1.0).in_gamut());
        assert!(!Color::srgb(0.0, -0.1, 0.0, 1.0).in_gamut());
    }
}
