use crate::color::Color;

/// Requested bar style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarStyle {
    /// Light bar backgrounds, dark icons.
    Light,
    /// Dark bar backgrounds, light icons.
    Dark,
    /// Caller-supplied colour; icon contrast derived from its luminance.
    Custom,
    /// Track the system light/dark theme.
    Default,
}

impl BarStyle {
    /// Parse a wire tag, case-insensitively. Unknown tags resolve through the
    /// `Default` branch and follow the system theme.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "light" => BarStyle::Light,
            "dark" => BarStyle::Dark,
            "custom" => BarStyle::Custom,
            _ => BarStyle::Default,
        }
    }
}

/// Outcome of resolving a style request: the icon tint and both bar colours
/// that should be visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedStyle {
    /// `true` = icons render dark, for a light bar background.
    pub dark_icons: bool,
    pub status_bar: Color,
    pub nav_bar:    Color,
}

/// Resolve a style to icon contrast and bar colours.
///
/// Pure function of its inputs so a later show/re-apply can replay it from
/// stored state without the original caller's arguments. `Custom` parses the
/// colour once and derives icon contrast from the same value, so contrast and
/// background can never disagree; unparsable or absent input falls back to
/// black. Icons are dark only when luminance is strictly above 0.5.
pub fn resolve(style: BarStyle, custom_color: Option<&str>, system_dark: bool) -> ResolvedStyle {
    match style {
        BarStyle::Light => ResolvedStyle {
            dark_icons: true,
            status_bar: Color::WHITE,
            nav_bar:    Color::WHITE,
        },
        BarStyle::Dark => ResolvedStyle {
            dark_icons: false,
            status_bar: Color::BLACK,
            nav_bar:    Color::BLACK,
        },
        BarStyle::Custom => {
            let color = Color::parse_or(custom_color, Color::BLACK);
            ResolvedStyle {
                dark_icons: color.luminance() > 0.5,
                status_bar: color,
                nav_bar:    color,
            }
        }
        BarStyle::Default => {
            let color = if system_dark { Color::BLACK } else { Color::WHITE };
            ResolvedStyle {
                dark_icons: !system_dark,
                status_bar: color,
                nav_bar:    color,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_is_white_with_dark_icons() {
        let resolved = resolve(BarStyle::Light, None, false);
        assert!(resolved.dark_icons);
        assert_eq!(resolved.status_bar, Color::WHITE);
        assert_eq!(resolved.nav_bar, Color::WHITE);
    }

    #[test]
    fn dark_is_black_with_light_icons() {
        let resolved = resolve(BarStyle::Dark, None, true);
        assert!(!resolved.dark_icons);
        assert_eq!(resolved.status_bar, Color::BLACK);
        assert_eq!(resolved.nav_bar, Color::BLACK);
    }

    #[test]
    fn custom_white_gets_dark_icons() {
        let resolved = resolve(BarStyle::Custom, Some("#FFFFFF"), false);
        assert!(resolved.dark_icons);
        assert_eq!(resolved.status_bar, Color::WHITE);
    }

    #[test]
    fn custom_dark_hex_gets_light_icons() {
        let resolved = resolve(BarStyle::Custom, Some("#112233"), false);
        assert!(!resolved.dark_icons);
        assert_eq!(resolved.status_bar, Color(0xFF11_2233));
        assert_eq!(resolved.nav_bar, Color(0xFF11_2233));
    }

    #[test]
    fn custom_unparsable_falls_back_to_black() {
        let resolved = resolve(BarStyle::Custom, Some("#nope"), false);
        assert!(!resolved.dark_icons);
        assert_eq!(resolved.status_bar, Color::BLACK);
    }

    #[test]
    fn custom_absent_falls_back_to_black() {
        let resolved = resolve(BarStyle::Custom, None, false);
        assert!(!resolved.dark_icons);
        assert_eq!(resolved.status_bar, Color::BLACK);
    }

    #[test]
    fn default_follows_system_theme() {
        let light = resolve(BarStyle::Default, None, false);
        assert!(light.dark_icons);
        assert_eq!(light.status_bar, Color::WHITE);

        let dark = resolve(BarStyle::Default, None, true);
        assert!(!dark.dark_icons);
        assert_eq!(dark.status_bar, Color::BLACK);
    }

    #[test]
    fn contrast_threshold_is_strict() {
        // Just below and just above the luminance threshold flip the icons.
        let below = resolve(BarStyle::Custom, Some("#BBBBBB"), false);
        let above = resolve(BarStyle::Custom, Some("#BCBCBC"), false);
        assert!(!below.dark_icons);
        assert!(above.dark_icons);
    }

    #[test]
    fn tags_parse_case_insensitively() {
        assert_eq!(BarStyle::from_tag("light"), BarStyle::Light);
        assert_eq!(BarStyle::from_tag("DARK"), BarStyle::Dark);
        assert_eq!(BarStyle::from_tag("Custom"), BarStyle::Custom);
        assert_eq!(BarStyle::from_tag("DEFAULT"), BarStyle::Default);
    }

    #[test]
    fn unknown_tag_falls_through_to_default() {
        assert_eq!(BarStyle::from_tag("bogus"), BarStyle::Default);
        assert_eq!(BarStyle::from_tag(""), BarStyle::Default);
    }
}
