use leptos::prelude::*;

use crate::components::flow_diagram::{ColorPalette, FlowDiagramBuilder, FlowDiagramData, FlowDiagramView, Matrix};
use crate::components::pan_zoom::PanZoomPlot;

const CARRIERS: &[(&str, &str)] = &[
	("Coal", "#3b3b3b"),
	("Oil", "#8c564b"),
	("Natural", "#1f77b4"),
	("Electricity", "#ff7f0e"),
];

/// Sample R/U/V/Y flows between a few carriers and industries.
fn generate_sample_data() -> FlowDiagramData {
	let mut palette = ColorPalette::default();
	for (carrier, color) in CARRIERS {
		palette.insert(*carrier, *color);
	}
	palette.insert("Unspecified", "#bcbd22");

	let products = ["Coal", "Oil", "Natural gas"];
	let industries = ["Power plants", "Refineries"];
	let sectors = ["Households", "Industry", "Transport"];

	let mut builder = FlowDiagramBuilder::new(palette);
	for (i, product) in products.iter().enumerate() {
		builder.add(Matrix::R, &format!("{product} [from Resources]"), product, 200.0 + rand_simple(i) * 300.0);
		for (j, industry) in industries.iter().enumerate() {
			builder.add(Matrix::U, product, industry, 50.0 + rand_simple(i * 7 + j) * 150.0);
		}
	}
	for (j, industry) in industries.iter().enumerate() {
		let output = if j == 0 { "Electricity" } else { "Refined oil products" };
		builder.add(Matrix::V, industry, output, 120.0 + rand_simple(j + 31) * 100.0);
		for (k, sector) in sectors.iter().enumerate() {
			builder.add(Matrix::Y, output, sector, 20.0 + rand_simple(j * 5 + k + 53) * 80.0);
		}
	}
	builder.build().unwrap_or_default()
}

/// Simple pseudo-random number generator (deterministic for consistency).
fn rand_simple(seed: usize) -> f64 {
	let x = ((seed + 1) * 9301 + 49297) % 233280;
	(x as f64) / 233280.0
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let diagram_data = Signal::derive(generate_sample_data);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<section id="plot-section">
				<h1>"Energy flows"</h1>
				<p class="subtitle">"Scroll to zoom. Hold the middle button and drag to pan."</p>
				<PanZoomPlot>
					<FlowDiagramView data=diagram_data />
				</PanZoomPlot>
			</section>
		</ErrorBoundary>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sample_data_fills_every_column() {
		let data = generate_sample_data();
		assert!(data.nodes.iter().all(|column| !column.is_empty()));
		assert_eq!(data.links.len(), 3 + 6 + 2 + 6);
		assert_eq!(data.nodes[1][0].color, "#3b3b3b");
	}
}
