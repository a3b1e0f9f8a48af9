//! Blue-to-red gradient for field scores.

use std::fmt;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#RRGGBB`, upper-case.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Color for a score: red grows with the score, blue with its complement,
/// green stays at zero. Scores are clamped to `[0, 1]`; NaN maps to 0.
///
/// ```
/// use hexfield::gradient::{Rgb, color_of};
///
/// assert_eq!(color_of(0.0), Rgb::new(0, 0, 255));
/// assert_eq!(color_of(1.0), Rgb::new(255, 0, 0));
/// assert_eq!(color_of(0.5).to_hex(), "#7F007F");
/// ```
pub fn color_of(score: f64) -> Rgb {
    let score = if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 1.0)
    };
    Rgb {
        r: (score * 255.0) as u8,
        g: 0,
        b: ((1.0 - score) * 255.0) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let low = color_of(0.0);
        assert_eq!((low.r, low.g, low.b), (0, 0, 255));
        let high = color_of(1.0);
        assert_eq!((high.r, high.g, high.b), (255, 0, 0));
    }

    #[test]
    fn test_clamps_out_of_range() {
        assert_eq!(color_of(-3.0), color_of(0.0));
        assert_eq!(color_of(7.5), color_of(1.0));
        assert_eq!(color_of(f64::NAN), color_of(0.0));
        assert_eq!(color_of(f64::INFINITY), color_of(1.0));
    }

    #[test]
    fn test_monotonic_channels() {
        let mut prev = color_of(0.0);
        for i in 1..=1000 {
            let c = color_of(i as f64 / 1000.0);
            assert!(c.r >= prev.r);
            assert!(c.b <= prev.b);
            assert_eq!(c.g, 0);
            prev = c;
        }
    }

    #[test]
    fn test_hex_format() {
        assert_eq!(color_of(0.0).to_hex(), "#0000FF");
        assert_eq!(color_of(1.0).to_hex(), "#FF0000");
        assert_eq!(Rgb::new(10, 0, 171).to_string(), "#0A00AB");
    }
}
