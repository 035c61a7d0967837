use super::config::PanZoomConfig;
use super::types::{DragState, MouseButton, ViewTransform};

/// Zoom/pan state for one plot container, independent of the DOM.
///
/// Handlers return whether the transform changed so callers know when to
/// restyle the element.
#[derive(Clone, Debug)]
pub struct PanZoomState {
	/// Current zoom and pan.
	pub transform: ViewTransform,
	/// Middle-button drag, if any.
	pub drag: DragState,
	config: PanZoomConfig,
}

impl PanZoomState {
	/// Neutral state using `config`'s step, limits and pan button.
	pub fn new(config: PanZoomConfig) -> Self {
		Self {
			transform: ViewTransform::default(),
			drag: DragState::Idle,
			config,
		}
	}

	/// Scrolling up (`delta_y < 0`) zooms in by one step, anything else zooms out.
	pub fn on_wheel(&mut self, delta_y: f64) -> bool {
		let step = self.config.zoom_step;
		let zoom = if delta_y < 0.0 {
			self.transform.zoom * step
		} else {
			self.transform.zoom / step
		};
		let zoom = self.config.zoom_limits.clamp(zoom);
		let changed = zoom != self.transform.zoom;
		self.transform.zoom = zoom;
		changed
	}

	/// Starts a drag when `button` is the pan button. Returns whether it did,
	/// in which case the browser's default (autoscroll) should be suppressed.
	pub fn on_pointer_down(&mut self, button: Option<MouseButton>, x: f64, y: f64) -> bool {
		if button != Some(self.config.pan_button) {
			return false;
		}
		self.drag = DragState::Dragging {
			origin_x: x - self.transform.pan_x,
			origin_y: y - self.transform.pan_y,
		};
		true
	}

	/// Ends any drag, whichever button was released.
	pub fn on_pointer_up(&mut self) {
		self.drag = DragState::Idle;
	}

	/// Pans to follow the pointer while dragging.
	pub fn on_pointer_move(&mut self, x: f64, y: f64) -> bool {
		let DragState::Dragging { origin_x, origin_y } = self.drag else {
			return false;
		};
		self.transform.pan_x = x - origin_x;
		self.transform.pan_y = y - origin_y;
		true
	}

	/// CSS `transform` for the current state.
	pub fn compute_transform(&self) -> String {
		self.transform.to_css()
	}

	/// Neutral transform, no drag.
	pub fn reset(&mut self) {
		self.transform = ViewTransform::default();
		self.drag = DragState::Idle;
	}
}

impl Default for PanZoomState {
	fn default() -> Self {
		Self::new(PanZoomConfig::default())
	}
}
