use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use web_sys::{MouseEvent, WheelEvent};

use super::config::PanZoomConfig;
use super::state::PanZoomState;
use super::types::MouseButton;

/// Wraps `children` in a container that zooms with the wheel and pans with
/// a middle-button drag.
#[component]
pub fn PanZoomPlot(
	/// Content to zoom and pan.
	children: Children,
	/// Step, limits and pan button; defaults when omitted.
	#[prop(optional)]
	config: Option<PanZoomConfig>,
	/// Render a Reset button under the plot.
	#[prop(default = true)]
	show_reset: bool,
) -> impl IntoView {
	let state = Rc::new(RefCell::new(PanZoomState::new(config.unwrap_or_default())));
	let transform = RwSignal::new(state.borrow().compute_transform());

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let mut s = state_wh.borrow_mut();
		if s.on_wheel(ev.delta_y()) {
			transform.set(s.compute_transform());
		}
	};

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let button = MouseButton::from_code(ev.button());
		if state_md
			.borrow_mut()
			.on_pointer_down(button, ev.client_x() as f64, ev.client_y() as f64)
		{
			ev.prevent_default();
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| state_mu.borrow_mut().on_pointer_up();

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let mut s = state_mm.borrow_mut();
		if s.on_pointer_move(ev.client_x() as f64, ev.client_y() as f64) {
			transform.set(s.compute_transform());
		}
	};

	let state_rs = state.clone();
	let on_reset = move |_: MouseEvent| {
		let mut s = state_rs.borrow_mut();
		s.reset();
		transform.set(s.compute_transform());
	};

	view! {
		<div class="pan-zoom-viewport" style="overflow: hidden;">
			<div
				class="pan-zoom-content"
				on:wheel=on_wheel
				on:mousedown=on_mousedown
				on:mouseup=on_mouseup
				on:mousemove=on_mousemove
				style:transform=move || transform.get()
			>
				{children()}
			</div>
		</div>
		{show_reset.then(|| view! { <button class="plot-reset" on:click=on_reset>"Reset"</button> })}
	}
}
