//! DOM tests for pan/zoom binding and the diagram adapter.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Function, Object, Reflect};
use plot_view::PlotError;
use plot_view::components::flow_diagram::{
	DiagramConfig, DiagramOptions, FlowDiagram, FlowDiagramBuilder, LINK_HOVER_KEY, Matrix,
};
use plot_view::components::pan_zoom::{ControllerSlot, PanZoomConfig, PanZoomController, SwapWatcher};
use plot_view::interop::create_diagram;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{CustomEvent, CustomEventInit, Document, HtmlElement, MouseEvent, MouseEventInit, WheelEvent, WheelEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

/// `<section id=...><div><div class="plotly-graph-div"></div></div></section>`
fn mount_plot(section_id: &str) -> (HtmlElement, HtmlElement) {
	let doc = document();
	let section: HtmlElement = doc.create_element("section").unwrap().unchecked_into();
	section.set_id(section_id);
	let wrapper = doc.create_element("div").unwrap();
	let plot: HtmlElement = doc.create_element("div").unwrap().unchecked_into();
	plot.set_class_name("plotly-graph-div");
	wrapper.append_child(&plot).unwrap();
	section.append_child(&wrapper).unwrap();
	doc.body().unwrap().append_child(&section).unwrap();
	(section, plot)
}

fn config(section_id: &str) -> PanZoomConfig {
	PanZoomConfig::default()
		.with_selector(format!("#{section_id} div div.plotly-graph-div"))
		.with_swap_target(section_id)
}

fn wheel(target: &HtmlElement, delta_y: f64) -> bool {
	let init = WheelEventInit::new();
	init.set_delta_y(delta_y);
	init.set_cancelable(true);
	let ev = WheelEvent::new_with_event_init_dict("wheel", &init).unwrap();
	target.dispatch_event(&ev).unwrap()
}

fn mouse(target: &HtmlElement, kind: &str, button: i16, x: i32, y: i32) -> bool {
	let init = MouseEventInit::new();
	init.set_button(button);
	init.set_client_x(x);
	init.set_client_y(y);
	init.set_cancelable(true);
	let ev = MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap();
	target.dispatch_event(&ev).unwrap()
}

fn transform_of(el: &HtmlElement) -> String {
	el.style().get_property_value("transform").unwrap()
}

#[wasm_bindgen_test]
fn binding_applies_neutral_transform() {
	let (section, plot) = mount_plot("bind-neutral");
	let controller = PanZoomController::initialize(&document(), config("bind-neutral")).unwrap();
	assert_eq!(controller.compute_transform(), "scale(1) translate(0px,0px)");
	assert!(transform_of(&plot).starts_with("scale(1)"));
	section.remove();
}

#[wasm_bindgen_test]
fn missing_element_is_reported() {
	let result = PanZoomController::initialize(&document(), config("not-on-page"));
	assert!(matches!(result, Err(PlotError::MissingElement(_))));
}

#[wasm_bindgen_test]
fn wheel_zooms_and_cancels_scrolling() {
	let (section, plot) = mount_plot("wheel-zoom");
	let controller = PanZoomController::initialize(&document(), config("wheel-zoom")).unwrap();
	assert!(!wheel(&plot, -100.0), "default scroll should be prevented");
	assert!((controller.transform().zoom - 1.1).abs() < 1e-9);
	wheel(&plot, 100.0);
	assert!((controller.transform().zoom - 1.0).abs() < 1e-9);
	section.remove();
}

#[wasm_bindgen_test]
fn middle_drag_pans() {
	let (section, plot) = mount_plot("middle-drag");
	let controller = PanZoomController::initialize(&document(), config("middle-drag")).unwrap();
	assert!(!mouse(&plot, "mousedown", 1, 10, 10));
	mouse(&plot, "mousemove", 1, 40, 30);
	let t = controller.transform();
	assert_eq!((t.pan_x, t.pan_y), (30.0, 20.0));
	mouse(&plot, "mouseup", 0, 40, 30);
	assert!(!controller.is_dragging());
	mouse(&plot, "mousemove", 0, 90, 90);
	assert_eq!(controller.transform().pan_x, 30.0);
	section.remove();
}

#[wasm_bindgen_test]
fn primary_button_does_not_pan() {
	let (section, plot) = mount_plot("primary-drag");
	let controller = PanZoomController::initialize(&document(), config("primary-drag")).unwrap();
	assert!(mouse(&plot, "mousedown", 0, 10, 10));
	mouse(&plot, "mousemove", 0, 40, 30);
	assert_eq!(controller.transform().pan_x, 0.0);
	section.remove();
}

#[wasm_bindgen_test]
fn dropping_the_controller_removes_listeners() {
	let (section, plot) = mount_plot("drop-listeners");
	let controller = PanZoomController::initialize(&document(), config("drop-listeners")).unwrap();
	drop(controller);
	assert!(wheel(&plot, -100.0), "no listener should cancel the event");
	assert!(transform_of(&plot).starts_with("scale(1)"));
	section.remove();
}

#[wasm_bindgen_test]
fn swap_rebinds_to_new_element() {
	let doc = document();
	let (section, old_plot) = mount_plot("swap-target");
	let slot: ControllerSlot = Rc::new(RefCell::new(None));
	let _watcher = SwapWatcher::new(&doc, config("swap-target"), slot.clone());

	// Replace the plot the way a partial swap would.
	let wrapper = old_plot.parent_element().unwrap();
	old_plot.remove();
	let new_plot: HtmlElement = doc.create_element("div").unwrap().unchecked_into();
	new_plot.set_class_name("plotly-graph-div");
	wrapper.append_child(&new_plot).unwrap();

	let detail = js_sys::Object::new();
	js_sys::Reflect::set(&detail, &"target".into(), &section).unwrap();
	let init = CustomEventInit::new();
	init.set_detail(&detail);
	init.set_bubbles(true);
	let ev = CustomEvent::new_with_event_init_dict("htmx:afterSwap", &init).unwrap();
	section.dispatch_event(&ev).unwrap();

	{
		let bound = slot.borrow();
		let controller = bound.as_ref().expect("rebound after swap");
		assert_eq!(controller.element(), &new_plot);
	}
	wheel(&new_plot, -1.0);
	assert!(transform_of(&new_plot).starts_with("scale(1.1"));
	section.remove();
}

#[wasm_bindgen_test]
fn unrelated_swaps_are_ignored() {
	let doc = document();
	let (section, _plot) = mount_plot("swap-ignored");
	let other = doc.create_element("div").unwrap();
	other.set_id("sidebar");
	doc.body().unwrap().append_child(&other).unwrap();

	let slot: ControllerSlot = Rc::new(RefCell::new(None));
	let _watcher = SwapWatcher::new(&doc, config("swap-ignored"), slot.clone());
	let detail = js_sys::Object::new();
	js_sys::Reflect::set(&detail, &"target".into(), &other).unwrap();
	let init = CustomEventInit::new();
	init.set_detail(&detail);
	init.set_bubbles(true);
	let ev = CustomEvent::new_with_event_init_dict("htmx:afterSwap", &init).unwrap();
	other.dispatch_event(&ev).unwrap();

	assert!(slot.borrow().is_none());
	other.remove();
	section.remove();
}

/// Stand-in for the Sankey library that keeps its constructor arguments.
fn install_sankey_stub() {
	let stub = Function::new_with_args(
		"container, nodes, links, width, height, first, last, options",
		"this.args = Array.from(arguments);",
	);
	Reflect::set(&js_sys::global(), &"Sankey".into(), &stub).unwrap();
}

fn mount_container(id: &str) -> HtmlElement {
	let doc = document();
	let el: HtmlElement = doc.create_element("div").unwrap().unchecked_into();
	el.set_id(id);
	el.set_attribute("style", "width: 320px; height: 200px;").unwrap();
	doc.body().unwrap().append_child(&el).unwrap();
	el
}

fn constructor_args(diagram: &FlowDiagram) -> Array {
	Reflect::get(&diagram.chart(), &"args".into()).unwrap().unchecked_into()
}

fn hover_text(options: &JsValue, info: &JsValue) -> String {
	let hover: Function = Reflect::get(options, &LINK_HOVER_KEY.into()).unwrap().unchecked_into();
	hover.call1(&JsValue::NULL, info).unwrap().as_string().unwrap()
}

fn link_info() -> JsValue {
	js_sys::JSON::parse(r#"{"from_label": "A", "value": 123.6, "to_label": "B"}"#).unwrap()
}

#[wasm_bindgen_test]
fn diagram_is_drawn_with_container_size_and_columns() {
	install_sankey_stub();
	let container = mount_container("diagram-args");
	let mut builder = FlowDiagramBuilder::new(Default::default());
	builder.add(Matrix::R, "Coal [from Resources]", "Coal", 10.0);
	let data = builder.build().unwrap();
	let options = DiagramOptions::new(data.options.clone()).with_link_hover(|_| "custom".into());
	let config = DiagramConfig {
		container_id: "diagram-args".into(),
		..DiagramConfig::default()
	};

	let diagram = FlowDiagram::create(&document(), &data.nodes, &data.links, &options, &config).unwrap();
	let args = constructor_args(&diagram);
	assert_eq!(args.length(), 8);
	assert_eq!(args.get(0), JsValue::from(container.clone()));
	assert_eq!(args.get(3).as_f64(), Some(320.0));
	assert_eq!(args.get(4).as_f64(), Some(200.0));
	assert_eq!(args.get(5).as_f64(), Some(0.0));
	assert_eq!(args.get(6).as_f64(), Some(5.0));

	let links: Array = args.get(2).unchecked_into();
	assert_eq!(links.length(), 1);
	let sent = args.get(7);
	assert_eq!(
		Reflect::get(&sent, &"plot_background_color".into()).unwrap().as_string().as_deref(),
		Some("#f4edf7")
	);
	assert_eq!(hover_text(&sent, &link_info()), "A<br>124 TJ<br>B");
	drop(diagram);
	container.remove();
}

#[wasm_bindgen_test]
fn create_diagram_copies_options_and_overrides_tooltip() {
	install_sankey_stub();
	let container = mount_container("sankey");
	let custom = Function::new_no_args("return 'custom';");
	let on_node_click = Function::new_no_args("return 'clicked';");
	let caller = Object::new();
	Reflect::set(&caller, &LINK_HOVER_KEY.into(), &custom).unwrap();
	Reflect::set(&caller, &"on_node_click_function".into(), &on_node_click).unwrap();
	Reflect::set(&caller, &"show_column_names".into(), &JsValue::TRUE).unwrap();
	let nodes: JsValue = Array::new().into();
	let links: JsValue = Array::new().into();

	let diagram = create_diagram(nodes.clone(), links.clone(), &caller).unwrap();
	let args = constructor_args(&diagram);
	assert_eq!(args.get(1), nodes);
	assert_eq!(args.get(2), links);

	let sent = args.get(7);
	assert!(!Object::is(&sent, &caller), "options must be a copy");
	assert_eq!(hover_text(&sent, &link_info()), "A<br>124 TJ<br>B");
	assert!(Object::is(
		&Reflect::get(&sent, &"on_node_click_function".into()).unwrap(),
		&on_node_click
	));
	assert_eq!(Reflect::get(&sent, &"show_column_names".into()).unwrap(), JsValue::TRUE);

	// The caller's object still holds its own formatter.
	assert!(Object::is(&Reflect::get(&caller, &LINK_HOVER_KEY.into()).unwrap(), &custom));
	assert_eq!(hover_text(&caller, &link_info()), "custom");
	drop(diagram);
	container.remove();
}

#[wasm_bindgen_test]
fn missing_diagram_container_is_reported() {
	install_sankey_stub();
	let config = DiagramConfig {
		container_id: "no-such-diagram".into(),
		..DiagramConfig::default()
	};
	let result = FlowDiagram::create_from_js(
		&document(),
		&Array::new().into(),
		&Array::new().into(),
		&Object::new(),
		&config,
	);
	assert!(matches!(result, Err(PlotError::MissingElement(id)) if id == "#no-such-diagram"));
}
