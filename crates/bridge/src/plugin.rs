use serde_json::Value;
use sysbar_controller::BarController;
use sysbar_core::{BarError, Result};
use sysbar_platform::PlatformWindow;
use tracing::debug;

use crate::args;

/// A single method invocation from the host layer.
#[derive(Debug, Clone)]
pub struct PluginCall {
    pub method: String,
    pub args: Value,
}

impl PluginCall {
    pub fn new(method: impl Into<String>, args: Value) -> Self {
        Self {
            method: method.into(),
            args,
        }
    }
}

/// Operation surface exposed to the host layer.
pub struct BarPlugin {
    controller: BarController,
}

impl BarPlugin {
    pub fn new(controller: BarController) -> Self {
        Self { controller }
    }

    pub fn controller(&self) -> &BarController {
        &self.controller
    }

    /// Direct access for host paths that bypass call marshaling
    /// (attachment, inset delivery).
    pub fn controller_mut(&mut self) -> &mut BarController {
        &mut self.controller
    }

    /// Validate and dispatch one call. A `Null` result models a resolved call
    /// with no payload.
    pub fn handle(&mut self, win: &mut dyn PlatformWindow, call: &PluginCall) -> Result<Value> {
        debug!("handle: method={}", call.method);
        match call.method.as_str() {
            "setStyle" => {
                let style = args::require_str(&call.args, "style")?;
                let color = args::opt_str(&call.args, "color");
                self.controller.set_style(win, style, color);
                Ok(Value::Null)
            }
            "show" => {
                let animated = args::bool_or(&call.args, "animated", true);
                self.controller.show(win, animated);
                Ok(Value::Null)
            }
            "hide" => {
                let animated = args::bool_or(&call.args, "animated", true);
                self.controller.hide(win, animated);
                Ok(Value::Null)
            }
            "setOverlaysWebView" => {
                let value = args::require_bool(&call.args, "value")?;
                self.controller.set_overlays_content(win, value);
                Ok(Value::Null)
            }
            "setBackground" => {
                let color = args::require_str(&call.args, "color")?;
                self.controller.set_background(win, color);
                Ok(Value::Null)
            }
            "getSafeAreaInsets" => {
                let insets = self.controller.safe_area_insets(win);
                serde_json::to_value(insets)
                    .map_err(|e| BarError::Platform(format!("serialize insets: {e}")))
            }
            other => Err(BarError::UnknownMethod(other.to_string())),
        }
    }
}
