use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `sysbar.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SysbarConfig {
    /// Modeled window parameters for the demo run.
    pub window: WindowConfig,
    /// Initial bar appearance applied at startup.
    pub bars: BarsConfig,
}

/// Parameters of the modeled window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Reported OS API level; selects the rendering strategy.
    pub api_level: u32,
    /// Whether the system theme starts dark.
    pub dark_mode: bool,
    /// Status bar thickness in pixels.
    pub status_bar_height: u32,
    /// Navigation bar thickness in pixels.
    pub navigation_bar_height: u32,
    /// Display cutout depth at the top edge (0 = no notch).
    pub cutout_top: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            api_level: 35,
            dark_mode: false,
            status_bar_height: 80,
            navigation_bar_height: 60,
            cutout_top: 0,
        }
    }
}

/// Initial bar appearance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BarsConfig {
    /// Style tag: `LIGHT`, `DARK`, `CUSTOM`, or `DEFAULT`.
    pub style: String,
    /// Custom colour hex, used with `style = "CUSTOM"`.
    pub color: Option<String>,
    /// Whether content is laid out underneath the system bars.
    pub overlays_content: bool,
    /// Root background colour.
    pub background: Option<String>,
}

impl Default for BarsConfig {
    fn default() -> Self {
        Self {
            style: "DEFAULT".to_string(),
            color: None,
            overlays_content: true,
            background: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_select_the_newest_tier() {
        let config = SysbarConfig::default();
        assert_eq!(config.window.api_level, 35);
        assert_eq!(config.bars.style, "DEFAULT");
        assert!(config.bars.overlays_content);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: SysbarConfig = toml::from_str(
            r##"
            [window]
            api_level = 29

            [bars]
            style = "CUSTOM"
            color = "#112233"
            "##,
        )
        .unwrap();

        assert_eq!(config.window.api_level, 29);
        assert_eq!(config.window.status_bar_height, 80);
        assert_eq!(config.bars.style, "CUSTOM");
        assert_eq!(config.bars.color.as_deref(), Some("#112233"));
        assert!(config.bars.overlays_content);
    }
}
