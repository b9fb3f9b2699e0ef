//! Bar state controller.
//!
//! Owns the requested style, colours, and visibility, and reconciles them
//! with the screen through a rendering strategy picked once from the platform
//! capability tier. Every colour or visibility change writes through to the
//! stored [`sysbar_core::BarState`] before touching the window, so a later
//! show or re-apply can rebuild the visible state from the stored fields
//! alone.

pub mod controller;
pub mod overlay;
pub mod renderer;

pub use controller::BarController;
pub use renderer::{BarRenderer, DirectRenderer, OverlayRenderer};
