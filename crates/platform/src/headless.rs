//! In-memory window implementation.
//!
//! Models decor views, window flags, bar colours, the legacy visibility
//! bitmask, the inset controller, and the inset snapshot, so controller logic
//! can run and be asserted on without a live windowing system.

use std::collections::HashSet;

use sysbar_core::Color;
use tracing::debug;

use crate::tier::API_INSET_CONTROLLER;
use crate::window::{
    Anchor, BarBehavior, InsetSnapshot, InsetsController, PlatformWindow, ViewId, WindowFlag,
};

/// One synthetic view in the headless decor hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessView {
    pub id:     ViewId,
    pub tag:    String,
    pub anchor: Anchor,
    pub color:  Color,
    pub height: u32,
}

/// In-memory inset controller state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessInsetsController {
    pub system_bars_visible: bool,
    pub behavior: BarBehavior,
    /// Light-background appearance requested (dark icons).
    pub light_bars: bool,
}

impl Default for HeadlessInsetsController {
    fn default() -> Self {
        Self {
            system_bars_visible: true,
            behavior: BarBehavior::Default,
            light_bars: false,
        }
    }
}

impl InsetsController for HeadlessInsetsController {
    fn show_system_bars(&mut self) {
        self.system_bars_visible = true;
    }

    fn hide_system_bars(&mut self) {
        self.system_bars_visible = false;
    }

    fn set_behavior(&mut self, behavior: BarBehavior) {
        self.behavior = behavior;
    }

    fn set_appearance_light_bars(&mut self, light: bool) {
        self.light_bars = light;
    }
}

/// In-memory [`PlatformWindow`].
///
/// Construction picks the inset controller from the API level;
/// [`HeadlessWindow::without_insets_controller`] models a window where the OS
/// never handed one out.
pub struct HeadlessWindow {
    api_level: u32,
    dark_mode: bool,
    decor_fits_system_windows: bool,
    window_flags: HashSet<WindowFlag>,
    ui_visibility: u32,
    status_bar_color: Color,
    navigation_bar_color: Color,
    background_color: Option<Color>,
    insets: Option<InsetSnapshot>,
    controller: Option<HeadlessInsetsController>,
    views: Vec<HeadlessView>,
    next_view_id: u32,
}

impl HeadlessWindow {
    pub fn new(api_level: u32) -> Self {
        let controller = (api_level >= API_INSET_CONTROLLER)
            .then(HeadlessInsetsController::default);
        Self {
            api_level,
            dark_mode: false,
            decor_fits_system_windows: true,
            window_flags: HashSet::new(),
            ui_visibility: 0,
            status_bar_color: Color::BLACK,
            navigation_bar_color: Color::BLACK,
            background_color: None,
            insets: None,
            controller,
            views: Vec::new(),
            next_view_id: 1,
        }
    }

    /// A window the OS never handed an inset controller for.
    pub fn without_insets_controller(api_level: u32) -> Self {
        Self {
            controller: None,
            ..Self::new(api_level)
        }
    }

    pub fn set_dark_mode(&mut self, dark: bool) {
        self.dark_mode = dark;
    }

    /// Replace the stored inset snapshot, as a layout pass would.
    pub fn set_insets(&mut self, insets: Option<InsetSnapshot>) {
        self.insets = insets;
    }

    // ── Inspection ───────────────────────────────────────────────────────────

    pub fn views(&self) -> &[HeadlessView] {
        &self.views
    }

    pub fn view(&self, tag: &str) -> Option<&HeadlessView> {
        self.views.iter().find(|v| v.tag == tag)
    }

    pub fn status_bar_color(&self) -> Color {
        self.status_bar_color
    }

    pub fn navigation_bar_color(&self) -> Color {
        self.navigation_bar_color
    }

    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    pub fn decor_fits_system_windows(&self) -> bool {
        self.decor_fits_system_windows
    }

    pub fn has_window_flag(&self, flag: WindowFlag) -> bool {
        self.window_flags.contains(&flag)
    }

    pub fn controller_state(&self) -> Option<&HeadlessInsetsController> {
        self.controller.as_ref()
    }
}

impl PlatformWindow for HeadlessWindow {
    fn api_level(&self) -> u32 {
        self.api_level
    }

    fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    fn set_window_flag(&mut self, flag: WindowFlag, enabled: bool) {
        if enabled {
            self.window_flags.insert(flag);
        } else {
            self.window_flags.remove(&flag);
        }
    }

    fn set_decor_fits_system_windows(&mut self, fits: bool) {
        debug!("decor fits system windows: {fits}");
        self.decor_fits_system_windows = fits;
    }

    fn set_status_bar_color(&mut self, color: Color) {
        self.status_bar_color = color;
    }

    fn set_navigation_bar_color(&mut self, color: Color) {
        self.navigation_bar_color = color;
    }

    fn set_background_color(&mut self, color: Color) {
        self.background_color = Some(color);
    }

    fn ui_visibility(&self) -> u32 {
        self.ui_visibility
    }

    fn set_ui_visibility(&mut self, flags: u32) {
        debug!("ui visibility flags: {flags:#06x}");
        self.ui_visibility = flags;
    }

    fn insets_controller(&mut self) -> Option<&mut dyn InsetsController> {
        self.controller
            .as_mut()
            .map(|c| c as &mut dyn InsetsController)
    }

    fn insets(&self) -> Option<InsetSnapshot> {
        self.insets
    }

    fn find_view(&self, tag: &str) -> Option<ViewId> {
        self.views.iter().find(|v| v.tag == tag).map(|v| v.id)
    }

    fn add_view(&mut self, tag: &str, anchor: Anchor, color: Color) -> ViewId {
        let id = ViewId(self.next_view_id);
        self.next_view_id += 1;
        debug!("add view {tag} ({anchor:?}, {color})");
        self.views.push(HeadlessView {
            id,
            tag: tag.to_owned(),
            anchor,
            color,
            height: 0,
        });
        id
    }

    fn remove_view(&mut self, id: ViewId) {
        self.views.retain(|v| v.id != id);
    }

    fn set_view_color(&mut self, id: ViewId, color: Color) {
        if let Some(view) = self.views.iter_mut().find(|v| v.id == id) {
            view.color = color;
        }
    }

    fn set_view_height(&mut self, id: ViewId, height: u32) {
        if let Some(view) = self.views.iter_mut().find(|v| v.id == id) {
            view.height = height;
        }
    }
}
