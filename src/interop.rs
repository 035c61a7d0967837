//! Entry points for server-rendered pages.
//!
//! Inline page code loads the module once and then calls these instead of
//! reaching for globals:
//!
//! ```js
//! const plot = new PlotInteraction();          // binds + watches htmx swaps
//! resetButton.onclick = () => plot.reset();
//! // Keep the returned handle: it owns the tooltip callback the library
//! // calls on hover, and freeing it breaks the tooltips.
//! window.sankey = createDiagram(nodes, links, { show_column_names: true });
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::components::flow_diagram::{DiagramConfig, FlowDiagram};
use crate::components::pan_zoom::{ControllerSlot, PanZoomConfig, SwapWatcher, swap};
use crate::error::PlotError;
use crate::init_logging;

fn document() -> Result<Document, PlotError> {
	web_sys::window()
		.and_then(|w| w.document())
		.ok_or(PlotError::NoDocument)
}

/// Pan/zoom for the page's plot, rebound after every swap of the plot region.
#[wasm_bindgen]
pub struct PlotInteraction {
	slot: ControllerSlot,
	config: PanZoomConfig,
	document: Document,
	_watcher: SwapWatcher,
}

#[wasm_bindgen]
impl PlotInteraction {
	/// `config_json` is an optional partial `PanZoomConfig` object.
	#[wasm_bindgen(constructor)]
	pub fn new(config_json: Option<String>) -> Result<PlotInteraction, JsValue> {
		init_logging();
		let config = match config_json.as_deref() {
			Some(json) => PanZoomConfig::from_json(json)?,
			None => PanZoomConfig::default(),
		};
		let document = document()?;
		let slot: ControllerSlot = Rc::new(RefCell::new(None));
		let watcher = SwapWatcher::new(&document, config.clone(), slot.clone());
		let interaction = Self {
			slot,
			config,
			document,
			_watcher: watcher,
		};
		// The plot may not be on the page yet; the swap watcher picks it up later.
		interaction.rebind();
		Ok(interaction)
	}

	/// Binds to the current plot element. Returns whether one was found.
	pub fn rebind(&self) -> bool {
		match swap::rebind(&self.slot, &self.document, &self.config) {
			Ok(()) => true,
			Err(err) => {
				log::info!("pan/zoom not bound: {err}");
				false
			}
		}
	}

	/// Back to the neutral transform; no-op when unbound.
	pub fn reset(&self) {
		if let Some(controller) = self.slot.borrow().as_ref() {
			controller.reset();
		}
	}

	/// Whether a plot element is currently bound.
	#[wasm_bindgen(js_name = isBound)]
	pub fn is_bound(&self) -> bool {
		self.slot.borrow().is_some()
	}

	/// Current CSS transform, or `None` when unbound.
	pub fn transform(&self) -> Option<String> {
		self.slot.borrow().as_ref().map(|c| c.compute_transform())
	}
}

/// Draws a flow diagram into `#sankey` with the page's Sankey library.
///
/// `nodes` and `links` are passed through untouched. `options` is copied
/// and the copy gets the default link tooltip under `on_link_hover_function`,
/// replacing any caller-supplied one. The returned handle must be kept alive
/// while the diagram is shown.
#[wasm_bindgen(js_name = createDiagram)]
pub fn create_diagram(nodes: JsValue, links: JsValue, options: &js_sys::Object) -> Result<FlowDiagram, JsValue> {
	init_logging();
	Ok(FlowDiagram::create_from_js(
		&document()?,
		&nodes,
		&links,
		options,
		&DiagramConfig::default(),
	)?)
}
