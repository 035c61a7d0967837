//! Error type shared by the pan/zoom controller and the diagram adapter.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Everything that can go wrong while binding to the page or preparing diagram data.
#[derive(Debug, Error)]
pub enum PlotError {
	/// No browser window or document (e.g. running outside a page).
	#[error("no browser window or document available")]
	NoDocument,
	/// The selector matched nothing in the current document.
	#[error("no element matches `{0}`")]
	MissingElement(String),
	/// The matched node is not an `HTMLElement` and cannot be styled.
	#[error("element `{0}` is not an HTML element")]
	NotHtmlElement(String),
	/// Caller-supplied JSON could not be parsed.
	#[error("invalid {what} JSON: {source}")]
	Json {
		/// Which input was being parsed.
		what: &'static str,
		/// Underlying parser error.
		#[source]
		source: serde_json::Error,
	},
	/// Rust data could not be handed to JS.
	#[error("could not convert {what} to a JS value: {source}")]
	ToJs {
		/// Which value was being converted.
		what: &'static str,
		/// Underlying conversion error.
		#[source]
		source: serde_wasm_bindgen::Error,
	},
	/// Options must be a JSON object.
	#[error("diagram options must be a JSON object")]
	OptionsNotObject,
	/// A matrix entry named something other than R, U, V or Y.
	#[error("unknown matrix name `{0}`")]
	UnknownMatrix(String),
	/// An exception thrown by the browser or the diagram library.
	#[error("javascript error: {0}")]
	Js(String),
}

impl PlotError {
	/// Wrap a thrown JS value, keeping its message when it is an `Error`.
	pub fn from_js(value: JsValue) -> Self {
		let message = value
			.dyn_ref::<js_sys::Error>()
			.map(|err| String::from(err.message()))
			.or_else(|| value.as_string())
			.unwrap_or_else(|| format!("{value:?}"));
		Self::Js(message)
	}

	pub(crate) fn json(what: &'static str, source: serde_json::Error) -> Self {
		Self::Json { what, source }
	}
}

impl From<PlotError> for JsValue {
	fn from(err: PlotError) -> Self {
		js_sys::Error::new(&err.to_string()).into()
	}
}
