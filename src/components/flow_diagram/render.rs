use std::ops::Range;
use std::rc::Rc;

use js_sys::{Object, Reflect};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use super::options::{DiagramOptions, LINK_HOVER_KEY, LinkHoverFormatter, format_link_tooltip};
use super::types::{COLUMN_COUNT, LinkInfo};
use crate::error::PlotError;

#[wasm_bindgen]
extern "C" {
	/// The page's Sankey diagram library.
	#[wasm_bindgen(js_name = Sankey)]
	pub type SankeyChart;

	#[wasm_bindgen(constructor, js_class = "Sankey", catch)]
	fn new(
		container: &HtmlElement,
		nodes: &JsValue,
		links: &JsValue,
		width: f64,
		height: f64,
		first_column: u32,
		last_column: u32,
		options: &Object,
	) -> Result<SankeyChart, JsValue>;
}

/// Where and how much of a diagram to draw.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
	/// Id of the element to draw into.
	pub container_id: String,
	/// Visible columns, end exclusive.
	pub columns: Range<u32>,
	/// Empty the container first; otherwise a new diagram is drawn alongside
	/// whatever is already there.
	pub clear_before_render: bool,
}

impl Default for DiagramConfig {
	fn default() -> Self {
		Self {
			container_id: "sankey".into(),
			columns: 0..COLUMN_COUNT as u32,
			clear_before_render: false,
		}
	}
}

type HoverCallback = Closure<dyn Fn(JsValue, JsValue, JsValue, JsValue) -> String>;

/// A drawn diagram.
///
/// Owns the tooltip callback handed to the library, so it must be kept alive
/// for as long as the diagram is on the page; once dropped, hovering a link
/// calls into a freed closure.
#[wasm_bindgen]
pub struct FlowDiagram {
	chart: SankeyChart,
	_on_link_hover: Option<HoverCallback>,
}

#[wasm_bindgen]
impl FlowDiagram {
	/// The library's chart object.
	#[wasm_bindgen(getter)]
	pub fn chart(&self) -> JsValue {
		self.chart.clone().into()
	}
}

impl FlowDiagram {
	/// Draws into the element with `config.container_id`.
	pub fn create<N, L>(
		document: &Document,
		nodes: &N,
		links: &L,
		options: &DiagramOptions,
		config: &DiagramConfig,
	) -> Result<Self, PlotError>
	where
		N: Serialize + ?Sized,
		L: Serialize + ?Sized,
	{
		let container = find_container(document, config)?;
		Self::render_into(&container, nodes, links, options, config)
	}

	/// Draws typed data into `container`.
	pub fn render_into<N, L>(
		container: &HtmlElement,
		nodes: &N,
		links: &L,
		options: &DiagramOptions,
		config: &DiagramConfig,
	) -> Result<Self, PlotError>
	where
		N: Serialize + ?Sized,
		L: Serialize + ?Sized,
	{
		let nodes = to_js(nodes, "nodes")?;
		let links = to_js(links, "links")?;
		let merged = options.with_default_tooltip();
		let settings = to_js(&merged.settings, "options")?.unchecked_into::<Object>();
		Self::draw(container, &nodes, &links, &settings, merged.on_link_hover, config)
	}

	/// Draws data that is already in JS form.
	///
	/// `options` is copied before the tooltip is installed; the caller's
	/// object, including any function-valued settings, is left as it was.
	pub fn create_from_js(
		document: &Document,
		nodes: &JsValue,
		links: &JsValue,
		options: &Object,
		config: &DiagramConfig,
	) -> Result<Self, PlotError> {
		let container = find_container(document, config)?;
		let merged = Object::assign(&Object::new(), options);
		let formatter: LinkHoverFormatter = Rc::new(format_link_tooltip);
		Self::draw(&container, nodes, links, &merged, Some(formatter), config)
	}

	fn draw(
		container: &HtmlElement,
		nodes: &JsValue,
		links: &JsValue,
		options: &Object,
		on_link_hover: Option<LinkHoverFormatter>,
		config: &DiagramConfig,
	) -> Result<Self, PlotError> {
		let on_link_hover = on_link_hover.map(|formatter| {
			HoverCallback::new(move |info: JsValue, _data: JsValue, _element: JsValue, _event: JsValue| {
				match serde_wasm_bindgen::from_value::<LinkInfo>(info) {
					Ok(info) => formatter(&info),
					Err(err) => {
						log::warn!("unexpected link info: {err}");
						String::new()
					}
				}
			})
		});
		if let Some(callback) = &on_link_hover {
			Reflect::set(options, &JsValue::from_str(LINK_HOVER_KEY), callback.as_ref())
				.map_err(PlotError::from_js)?;
		}

		if config.clear_before_render {
			container.set_inner_html("");
		}
		let (width, height) = (container.client_width() as f64, container.client_height() as f64);
		log::debug!(
			"drawing flow diagram {width}x{height}, columns {:?}",
			config.columns
		);
		let chart = SankeyChart::new(
			container,
			nodes,
			links,
			width,
			height,
			config.columns.start,
			config.columns.end,
			options,
		)
		.map_err(PlotError::from_js)?;
		Ok(Self {
			chart,
			_on_link_hover: on_link_hover,
		})
	}
}

fn find_container(document: &Document, config: &DiagramConfig) -> Result<HtmlElement, PlotError> {
	let selector = format!("#{}", config.container_id);
	document
		.get_element_by_id(&config.container_id)
		.ok_or_else(|| PlotError::MissingElement(selector.clone()))?
		.dyn_into::<HtmlElement>()
		.map_err(|_| PlotError::NotHtmlElement(selector))
}

/// Maps become plain JS objects rather than `Map`s.
fn to_js<T: Serialize + ?Sized>(value: &T, what: &'static str) -> Result<JsValue, PlotError> {
	value
		.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
		.map_err(|source| PlotError::ToJs { what, source })
}
