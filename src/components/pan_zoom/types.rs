use serde::Deserialize;

/// Scale and offset applied to the plot container, in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
	/// Scale factor, always positive; 1.0 is neutral.
	pub zoom: f64,
	/// Horizontal offset in screen pixels.
	pub pan_x: f64,
	/// Vertical offset in screen pixels.
	pub pan_y: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			zoom: 1.0,
			pan_x: 0.0,
			pan_y: 0.0,
		}
	}
}

impl ViewTransform {
	/// CSS `transform` value for this state.
	///
	/// The translation is divided by the zoom because CSS applies it after the
	/// scale; without that the pan speed would grow with the zoom level.
	pub fn to_css(&self) -> String {
		format!(
			"scale({}) translate({}px,{}px)",
			self.zoom,
			self.pan_x / self.zoom,
			self.pan_y / self.zoom
		)
	}
}

/// Middle-button drag in progress or not.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
	/// No drag in progress.
	#[default]
	Idle,
	/// Pointer position minus the pan offset at press time.
	Dragging {
		/// Horizontal origin.
		origin_x: f64,
		/// Vertical origin.
		origin_y: f64,
	},
}

impl DragState {
	/// True while dragging.
	pub fn is_active(&self) -> bool {
		matches!(self, Self::Dragging { .. })
	}
}

/// `MouseEvent.button` values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
	/// Usually the left button.
	Primary,
	/// Wheel button; pans by default.
	#[default]
	Middle,
	/// Usually the right button.
	Secondary,
	/// Browser back.
	Back,
	/// Browser forward.
	Forward,
}

impl MouseButton {
	/// Maps `MouseEvent.button`; `None` for unknown codes.
	pub fn from_code(code: i16) -> Option<Self> {
		match code {
			0 => Some(Self::Primary),
			1 => Some(Self::Middle),
			2 => Some(Self::Secondary),
			3 => Some(Self::Back),
			4 => Some(Self::Forward),
			_ => None,
		}
	}
}
