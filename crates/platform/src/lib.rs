//! Platform window seam for the bar controller.
//!
//! [`window::PlatformWindow`] models the slice of the windowing system the
//! controller mutates: decor hierarchy views, window-level bar colours, the
//! legacy UI-visibility bitmask, the inset controller, and the current inset
//! snapshot. [`headless::HeadlessWindow`] is a complete in-memory
//! implementation used by the demo binary and the test suites.

pub mod flags;
pub mod headless;
pub mod tier;
pub mod window;

pub use headless::{HeadlessInsetsController, HeadlessView, HeadlessWindow};
pub use tier::{ApiTier, API_INSET_CONTROLLER, API_SYNTHETIC_OVERLAY};
pub use window::{
    Anchor, BarBehavior, InsetSnapshot, InsetsController, PlatformWindow, ViewId, WindowFlag,
};
