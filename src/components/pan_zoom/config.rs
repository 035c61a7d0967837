//! Pan/zoom settings and their defaults.

use serde::Deserialize;

use super::types::MouseButton;
use crate::error::PlotError;

/// Nested plot element produced by the charting library.
pub const DEFAULT_SELECTOR: &str = "div div.plotly-graph-div";
/// Region id whose swaps replace the plot.
pub const DEFAULT_SWAP_TARGET: &str = "plot-section";
/// Zoom factor per wheel notch.
pub const DEFAULT_ZOOM_STEP: f64 = 1.1;

/// Inclusive zoom range. Both bounds must be positive.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct ZoomLimits {
	/// Smallest zoom.
	pub min: f64,
	/// Largest zoom.
	pub max: f64,
}

impl Default for ZoomLimits {
	fn default() -> Self {
		Self {
			min: 0.1,
			max: 10.0,
		}
	}
}

impl ZoomLimits {
	/// Smallest and largest positive finite values; zoom never clamps in practice.
	pub fn unbounded() -> Self {
		Self {
			min: f64::MIN_POSITIVE,
			max: f64::MAX,
		}
	}

	/// `zoom` forced into the range.
	pub fn clamp(&self, zoom: f64) -> f64 {
		zoom.clamp(self.min, self.max)
	}
}

/// Settings for binding a controller to a page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PanZoomConfig {
	/// CSS selector of the plot element.
	pub selector: String,
	/// Id of the region whose swaps trigger a rebind.
	pub swap_target_id: String,
	/// Factor applied per wheel event.
	pub zoom_step: f64,
	/// Range the zoom is clamped to.
	pub zoom_limits: ZoomLimits,
	/// Button that starts a pan.
	pub pan_button: MouseButton,
}

impl Default for PanZoomConfig {
	fn default() -> Self {
		Self {
			selector: DEFAULT_SELECTOR.into(),
			swap_target_id: DEFAULT_SWAP_TARGET.into(),
			zoom_step: DEFAULT_ZOOM_STEP,
			zoom_limits: ZoomLimits::default(),
			pan_button: MouseButton::default(),
		}
	}
}

impl PanZoomConfig {
	/// Parse a partial JSON object; missing fields take their defaults.
	pub fn from_json(json: &str) -> Result<Self, PlotError> {
		let config: Self = serde_json::from_str(json).map_err(|e| PlotError::json("config", e))?;
		Ok(config.sanitized())
	}

	/// Replaces the plot selector.
	pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
		self.selector = selector.into();
		self
	}

	/// Replaces the swap target id.
	pub fn with_swap_target(mut self, id: impl Into<String>) -> Self {
		self.swap_target_id = id.into();
		self
	}

	/// Replaces the zoom range.
	pub fn with_zoom_limits(mut self, limits: ZoomLimits) -> Self {
		self.zoom_limits = limits;
		self
	}

	/// Replace values that would break `zoom > 0` with the defaults.
	fn sanitized(mut self) -> Self {
		if !(self.zoom_step.is_finite() && self.zoom_step > 0.0) {
			log::warn!("ignoring zoom step {}", self.zoom_step);
			self.zoom_step = DEFAULT_ZOOM_STEP;
		}
		let ZoomLimits { min, max } = self.zoom_limits;
		if !(min > 0.0 && min <= max) {
			log::warn!("ignoring zoom limits [{min}, {max}]");
			self.zoom_limits = ZoomLimits::default();
		}
		self
	}
}
