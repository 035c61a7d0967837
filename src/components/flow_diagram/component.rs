use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use web_sys::HtmlElement;

use super::options::DiagramOptions;
use super::render::{DiagramConfig, FlowDiagram};
use super::types::FlowDiagramData;

/// Draws `data` with the page's Sankey library, redrawing when it changes.
#[component]
pub fn FlowDiagramView(
	/// Nodes, links and display settings.
	#[prop(into)]
	data: Signal<FlowDiagramData>,
	/// Container width in pixels.
	#[prop(default = 900.0)]
	width: f64,
	/// Container height in pixels.
	#[prop(default = 600.0)]
	height: f64,
) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let diagram: Rc<RefCell<Option<FlowDiagram>>> = Rc::new(RefCell::new(None));
	let config = DiagramConfig {
		clear_before_render: true,
		..DiagramConfig::default()
	};

	Effect::new(move |_| {
		let Some(container) = container_ref.get() else {
			return;
		};
		let container: HtmlElement = container.into();
		let data = data.get();
		let options = DiagramOptions::new(data.options.clone());
		// Drop the old chart's callback only after the container is cleared.
		let drawn = FlowDiagram::render_into(&container, &data.nodes, &data.links, &options, &config);
		match drawn {
			Ok(handle) => *diagram.borrow_mut() = Some(handle),
			Err(err) => log::error!("flow diagram failed to render: {err}"),
		}
	});

	view! {
		<div
			node_ref=container_ref
			class="flow-diagram"
			style:width=format!("{width}px")
			style:height=format!("{height}px")
		/>
	}
}
