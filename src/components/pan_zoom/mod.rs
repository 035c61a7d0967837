//! Wheel zoom and middle-button pan for a plot container.

mod component;
pub mod config;
mod controller;
mod state;
pub mod swap;
mod types;

pub use component::PanZoomPlot;
pub use config::{PanZoomConfig, ZoomLimits};
pub use controller::PanZoomController;
pub use state::PanZoomState;
pub use swap::{ControllerSlot, SwapWatcher};
pub use types::{DragState, MouseButton, ViewTransform};
