use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, MouseEvent, WheelEvent};

use super::config::PanZoomConfig;
use super::state::PanZoomState;
use super::types::{MouseButton, ViewTransform};
use crate::error::PlotError;

/// Pan/zoom behaviour bound to one plot element.
///
/// Dropping the controller removes all of its listeners, so a replaced
/// element can be rebound without handlers piling up.
pub struct PanZoomController {
	element: HtmlElement,
	state: Rc<RefCell<PanZoomState>>,
	_listeners: Vec<EventListener>,
}

impl PanZoomController {
	/// Finds the plot element with `config.selector` and binds to it.
	pub fn initialize(document: &Document, config: PanZoomConfig) -> Result<Self, PlotError> {
		let selector = config.selector.clone();
		let element = document
			.query_selector(&selector)
			.map_err(PlotError::from_js)?
			.ok_or_else(|| {
				log::warn!("plot element `{selector}` not found, pan/zoom disabled");
				PlotError::MissingElement(selector.clone())
			})?
			.dyn_into::<HtmlElement>()
			.map_err(|_| PlotError::NotHtmlElement(selector.clone()))?;
		Ok(Self::attach(element, config))
	}

	/// Binds to `element`, starting from the neutral transform.
	pub fn attach(element: HtmlElement, config: PanZoomConfig) -> Self {
		let state = Rc::new(RefCell::new(PanZoomState::new(config)));
		apply_transform(&element, &ViewTransform::default());

		// Wheel and mousedown cancel the browser default, so they can't be passive.
		let (el, st) = (element.clone(), state.clone());
		let on_wheel = EventListener::new_with_options(&element, "wheel", EventListenerOptions::enable_prevent_default(), move |ev: &Event| {
			let Some(ev) = ev.dyn_ref::<WheelEvent>() else {
				return;
			};
			ev.prevent_default();
			let mut s = st.borrow_mut();
			if s.on_wheel(ev.delta_y()) {
				apply_transform(&el, &s.transform);
			}
		});

		let st = state.clone();
		let on_mousedown = EventListener::new_with_options(&element, "mousedown", EventListenerOptions::enable_prevent_default(), move |ev: &Event| {
			let Some(ev) = ev.dyn_ref::<MouseEvent>() else {
				return;
			};
			let button = MouseButton::from_code(ev.button());
			let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
			if st.borrow_mut().on_pointer_down(button, x, y) {
				ev.prevent_default();
			}
		});

		let st = state.clone();
		let on_mouseup = EventListener::new(&element, "mouseup", move |_| {
			st.borrow_mut().on_pointer_up();
		});

		let (el, st) = (element.clone(), state.clone());
		let on_mousemove = EventListener::new(&element, "mousemove", move |ev: &Event| {
			let Some(ev) = ev.dyn_ref::<MouseEvent>() else {
				return;
			};
			let mut s = st.borrow_mut();
			if s.on_pointer_move(ev.client_x() as f64, ev.client_y() as f64) {
				apply_transform(&el, &s.transform);
			}
		});

		log::debug!("pan/zoom bound to <{}>", element.tag_name().to_lowercase());
		Self {
			element,
			state,
			_listeners: vec![on_wheel, on_mousedown, on_mouseup, on_mousemove],
		}
	}

	/// The bound plot element.
	pub fn element(&self) -> &HtmlElement {
		&self.element
	}

	/// Current zoom and pan.
	pub fn transform(&self) -> ViewTransform {
		self.state.borrow().transform
	}

	/// CSS `transform` value currently applied to the element.
	pub fn compute_transform(&self) -> String {
		self.state.borrow().compute_transform()
	}

	/// Whether a middle-button drag is in progress.
	pub fn is_dragging(&self) -> bool {
		self.state.borrow().drag.is_active()
	}

	/// Back to scale 1, no pan, no drag.
	pub fn reset(&self) {
		let mut s = self.state.borrow_mut();
		s.reset();
		apply_transform(&self.element, &s.transform);
	}
}

fn apply_transform(element: &HtmlElement, transform: &ViewTransform) {
	if let Err(err) = element.style().set_property("transform", &transform.to_css()) {
		log::warn!("failed to set plot transform: {err:?}");
	}
}
