//! Legacy UI-visibility flag bitmask, used on tiers without an inset
//! controller. Values match the platform constants.

/// All flags cleared — bars visible, default icon tint.
pub const SYSTEM_UI_VISIBLE: u32 = 0;
pub const SYSTEM_UI_HIDE_NAVIGATION: u32 = 0x0000_0002;
pub const SYSTEM_UI_FULLSCREEN: u32 = 0x0000_0004;
/// Navigation bar background is light — render its icons dark.
pub const SYSTEM_UI_LIGHT_NAVIGATION_BAR: u32 = 0x0000_0010;
pub const SYSTEM_UI_LAYOUT_STABLE: u32 = 0x0000_0100;
pub const SYSTEM_UI_LAYOUT_HIDE_NAVIGATION: u32 = 0x0000_0200;
pub const SYSTEM_UI_LAYOUT_FULLSCREEN: u32 = 0x0000_0400;
pub const SYSTEM_UI_IMMERSIVE_STICKY: u32 = 0x0000_1000;
/// Status bar background is light — render its icons dark.
pub const SYSTEM_UI_LIGHT_STATUS_BAR: u32 = 0x0000_2000;

/// Bundle that hides both bars in sticky immersive mode with stable layout.
pub const IMMERSIVE_HIDE_BUNDLE: u32 = SYSTEM_UI_IMMERSIVE_STICKY
    | SYSTEM_UI_LAYOUT_STABLE
    | SYSTEM_UI_LAYOUT_HIDE_NAVIGATION
    | SYSTEM_UI_LAYOUT_FULLSCREEN
    | SYSTEM_UI_HIDE_NAVIGATION
    | SYSTEM_UI_FULLSCREEN;

/// Both light-background appearance flags.
pub const LIGHT_BARS_MASK: u32 = SYSTEM_UI_LIGHT_STATUS_BAR | SYSTEM_UI_LIGHT_NAVIGATION_BAR;
