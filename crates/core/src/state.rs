use crate::color::Color;
use crate::style::BarStyle;

/// Which system bar an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemBar {
    /// Top strip carrying the system indicators.
    Status,
    /// Bottom strip carrying the navigation buttons.
    Navigation,
}

impl SystemBar {
    pub const BOTH: [SystemBar; 2] = [SystemBar::Status, SystemBar::Navigation];
}

/// Explicit visibility state, transitioned only by show/hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

/// Requested appearance, owned exclusively by the controller.
///
/// Invariant: after any style or visibility change both colour fields hold
/// the colour that should currently be visible, so a later show can rebuild
/// the screen from this value alone. Transparent is an ephemeral rendering
/// state while hidden and is never stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarState {
    pub style: BarStyle,
    /// Raw colour string from the last `Custom` request.
    pub custom_color: Option<String>,
    pub status_bar_color: Color,
    pub nav_bar_color:    Color,
    pub visibility: Visibility,
}

impl Default for BarState {
    fn default() -> Self {
        Self {
            style: BarStyle::Light,
            custom_color: None,
            status_bar_color: Color::BLACK,
            nav_bar_color:    Color::BLACK,
            visibility: Visibility::Shown,
        }
    }
}
