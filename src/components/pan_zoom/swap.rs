//! Rebinding the controller after htmx replaces the plot region.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, Document, Element, Event};

use super::config::PanZoomConfig;
use super::controller::PanZoomController;
use crate::error::PlotError;

/// Fired by htmx on the swapped element after new content is in place.
pub const AFTER_SWAP_EVENT: &str = "htmx:afterSwap";

/// The controller currently bound to the page, if any.
pub type ControllerSlot = Rc<RefCell<Option<PanZoomController>>>;

/// Drops and rebinds `slot` against the freshly queried plot element.
pub fn rebind(slot: &ControllerSlot, document: &Document, config: &PanZoomConfig) -> Result<(), PlotError> {
	// Release the old element's listeners before looking for the new one.
	slot.borrow_mut().take();
	let controller = PanZoomController::initialize(document, config.clone())?;
	*slot.borrow_mut() = Some(controller);
	Ok(())
}

/// Rebinds the pan/zoom controller whenever the plot region is swapped.
pub struct SwapWatcher {
	_listener: EventListener,
}

impl SwapWatcher {
	/// Listens on `document` and rebinds `slot` when `config.swap_target_id`
	/// is the swapped region. Stops listening when dropped.
	pub fn new(document: &Document, config: PanZoomConfig, slot: ControllerSlot) -> Self {
		let doc = document.clone();
		let listener = EventListener::new(document, AFTER_SWAP_EVENT, move |ev: &Event| {
			let Some(ev) = ev.dyn_ref::<CustomEvent>() else {
				return;
			};
			let Some(id) = swapped_target_id(&ev.detail()) else {
				return;
			};
			if id != config.swap_target_id {
				return;
			}
			log::debug!("#{id} swapped, rebinding pan/zoom");
			if let Err(err) = rebind(&slot, &doc, &config) {
				log::warn!("could not rebind after swap: {err}");
			}
		});
		Self { _listener: listener }
	}
}

/// `detail.target.id` of an htmx swap event.
fn swapped_target_id(detail: &JsValue) -> Option<String> {
	let target = js_sys::Reflect::get(detail, &JsValue::from_str("target")).ok()?;
	target.dyn_into::<Element>().ok().map(|el| el.id())
}
