use serde::{Deserialize, Serialize};
use std::fmt;

/// Packed 32-bit ARGB colour (`0xAARRGGBB`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK:       Self = Self(0xFF00_0000);
    pub const WHITE:       Self = Self(0xFFFF_FFFF);
    pub const TRANSPARENT: Self = Self(0x0000_0000);

    /// Named colours accepted alongside hex notation.
    const NAMED: &'static [(&'static str, u32)] = &[
        ("black", 0xFF00_0000),
        ("white", 0xFFFF_FFFF),
        ("red", 0xFFFF_0000),
        ("green", 0xFF00_FF00),
        ("blue", 0xFF00_00FF),
        ("yellow", 0xFFFF_FF00),
        ("cyan", 0xFF00_FFFF),
        ("magenta", 0xFFFF_00FF),
        ("gray", 0xFF88_8888),
        ("grey", 0xFF88_8888),
        ("lightgray", 0xFFCC_CCCC),
        ("lightgrey", 0xFFCC_CCCC),
        ("darkgray", 0xFF44_4444),
        ("darkgrey", 0xFF44_4444),
        ("aqua", 0xFF00_FFFF),
        ("fuchsia", 0xFFFF_00FF),
        ("lime", 0xFF00_FF00),
        ("maroon", 0xFF80_0000),
        ("navy", 0xFF00_0080),
        ("olive", 0xFF80_8000),
        ("purple", 0xFF80_0080),
        ("silver", 0xFFC0_C0C0),
        ("teal", 0xFF00_8080),
    ];

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Parse `#RRGGBB` (opaque), `#AARRGGBB`, or a named colour.
    /// Returns `None` for anything else — callers decide the fallback.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();

        let Some(hex) = input.strip_prefix('#') else {
            let lower = input.to_ascii_lowercase();
            return Self::NAMED
                .iter()
                .find(|(name, _)| *name == lower)
                .map(|&(_, argb)| Self(argb));
        };

        let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };

        match hex.len() {
            6 => Some(Self::from_argb(
                0xFF,
                byte(&hex[0..2])?,
                byte(&hex[2..4])?,
                byte(&hex[4..6])?,
            )),
            8 => Some(Self::from_argb(
                byte(&hex[0..2])?,
                byte(&hex[2..4])?,
                byte(&hex[4..6])?,
                byte(&hex[6..8])?,
            )),
            _ => None,
        }
    }

    /// Parse with a fallback — absent or unparsable input recovers to
    /// `default`, never an error.
    pub fn parse_or(input: Option<&str>, default: Color) -> Color {
        input.and_then(Self::parse).unwrap_or(default)
    }

    /// Relative luminance in `[0, 1]` (sRGB linearization, WCAG weights).
    /// Alpha is ignored.
    pub fn luminance(self) -> f64 {
        fn linear(channel: u8) -> f64 {
            let c = channel as f64 / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linear(self.red()) + 0.7152 * linear(self.green()) + 0.0722 * linear(self.blue())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rrggbb() {
        assert_eq!(Color::parse("#112233"), Some(Color(0xFF11_2233)));
        assert_eq!(Color::parse("#FFFFFF"), Some(Color::WHITE));
    }

    #[test]
    fn parse_aarrggbb() {
        assert_eq!(Color::parse("#80FF0000"), Some(Color(0x80FF_0000)));
        assert_eq!(Color::parse("#00000000"), Some(Color::TRANSPARENT));
    }

    #[test]
    fn parse_named() {
        assert_eq!(Color::parse("red"), Some(Color(0xFFFF_0000)));
        assert_eq!(Color::parse("Navy"), Some(Color(0xFF00_0080)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(Color::parse("#123"), None);
        assert_eq!(Color::parse("#11223G"), None);
        assert_eq!(Color::parse("notacolor"), None);
        assert_eq!(Color::parse(""), None);
    }

    #[test]
    fn parse_or_falls_back() {
        assert_eq!(Color::parse_or(None, Color::BLACK), Color::BLACK);
        assert_eq!(Color::parse_or(Some("bogus"), Color::WHITE), Color::WHITE);
        assert_eq!(
            Color::parse_or(Some("#112233"), Color::BLACK),
            Color(0xFF11_2233)
        );
    }

    #[test]
    fn luminance_extremes() {
        assert_eq!(Color::BLACK.luminance(), 0.0);
        assert!((Color::WHITE.luminance() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn luminance_straddles_half() {
        // Adjacent greys land on either side of the 0.5 contrast threshold.
        let below = Color::parse("#BBBBBB").unwrap();
        let above = Color::parse("#BCBCBC").unwrap();
        assert!(below.luminance() <= 0.5);
        assert!(above.luminance() > 0.5);
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(Color(0xFF11_2233).to_string(), "#FF112233");
    }
}
