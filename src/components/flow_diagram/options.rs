use std::fmt;
use std::rc::Rc;

use serde_json::{Map, Value};

use super::types::LinkInfo;
use crate::error::PlotError;

/// Option key the diagram library reads the link tooltip callback from.
pub const LINK_HOVER_KEY: &str = "on_link_hover_function";

/// Unit shown after every flow value.
pub const VALUE_UNIT: &str = "TJ";

/// Turns a hovered link into tooltip markup.
pub type LinkHoverFormatter = Rc<dyn Fn(&LinkInfo) -> String>;

/// `"<from><br><value> TJ<br><to>"`, with the value rounded and printed the
/// way the browser's `Math.round` and `String` would.
pub fn format_link_tooltip(info: &LinkInfo) -> String {
	let mut buffer = ryu_js::Buffer::new();
	format!(
		"{}<br>{} {VALUE_UNIT}<br>{}",
		info.from_label,
		buffer.format(js_round(info.value)),
		info.to_label
	)
}

/// `Math.round`: nearest integer, ties toward positive infinity.
fn js_round(value: f64) -> f64 {
	let rounded = value.round();
	// `f64::round` breaks ties away from zero, which differs for negative halves.
	if rounded - value == -0.5 {
		rounded + 1.0
	} else {
		rounded
	}
}

/// Display settings for the diagram library plus the link tooltip callback.
#[derive(Clone, Default)]
pub struct DiagramOptions {
	/// Plain display settings, passed to the library as an object.
	pub settings: Map<String, Value>,
	/// Installed under [`LINK_HOVER_KEY`] when rendering.
	pub on_link_hover: Option<LinkHoverFormatter>,
}

impl fmt::Debug for DiagramOptions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DiagramOptions")
			.field("settings", &self.settings)
			.field("on_link_hover", &self.on_link_hover.is_some())
			.finish()
	}
}

impl DiagramOptions {
	/// Settings with no tooltip callback.
	pub fn new(settings: Map<String, Value>) -> Self {
		Self {
			settings,
			on_link_hover: None,
		}
	}

	/// Parses a JSON object; `null` gives empty options.
	pub fn from_json(json: &str) -> Result<Self, PlotError> {
		match serde_json::from_str(json).map_err(|e| PlotError::json("options", e))? {
			Value::Object(settings) => Ok(Self::new(settings)),
			Value::Null => Ok(Self::default()),
			_ => Err(PlotError::OptionsNotObject),
		}
	}

	/// Installs a custom tooltip callback.
	pub fn with_link_hover(mut self, formatter: impl Fn(&LinkInfo) -> String + 'static) -> Self {
		self.on_link_hover = Some(Rc::new(formatter));
		self
	}

	/// A copy with the default tooltip installed under [`LINK_HOVER_KEY`].
	///
	/// A caller-provided formatter or setting under that key is replaced;
	/// `self` is left untouched.
	pub fn with_default_tooltip(&self) -> Self {
		let mut merged = self.clone();
		merged.settings.remove(LINK_HOVER_KEY);
		merged.on_link_hover = Some(Rc::new(format_link_tooltip));
		merged
	}

	/// Formats a tooltip with the installed callback, if any.
	pub fn link_tooltip(&self, info: &LinkInfo) -> Option<String> {
		self.on_link_hover.as_ref().map(|f| f(info))
	}
}
