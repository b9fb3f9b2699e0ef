pub mod color;
pub mod error;
pub mod insets;
pub mod state;
pub mod style;

pub use color::Color;
pub use error::{BarError, Result};
pub use insets::Insets;
pub use state::{BarState, SystemBar, Visibility};
pub use style::{resolve, BarStyle, ResolvedStyle};
