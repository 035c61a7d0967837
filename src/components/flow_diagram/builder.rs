//! Builds column-organised flow data from R/U/V/Y matrix entries.
//!
//! Each matrix moves flows one column to the right: resources (R) feed
//! products, which are used (U) by industries, which make (V) products that
//! end in final demand (Y).

use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use serde_json::{Map, Value};

use super::types::{COLUMN_COUNT, FlowDiagramData, FlowLink, FlowNode, NodeRef};
use crate::error::PlotError;

/// Palette key used when a label's first word has no colour.
pub const UNSPECIFIED_COLOR_KEY: &str = "Unspecified";
const FALLBACK_COLOR: &str = "#808080";

/// Which flow matrix an entry comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Matrix {
	/// Resources into products.
	R,
	/// Products used by industries.
	U,
	/// Industries making products.
	V,
	/// Products to final demand.
	Y,
}

impl Matrix {
	/// Source and destination columns for this matrix's flows.
	pub fn columns(self) -> (usize, usize) {
		match self {
			Self::R => (0, 1),
			Self::U => (1, 2),
			Self::V => (2, 3),
			Self::Y => (3, 4),
		}
	}
}

impl FromStr for Matrix {
	type Err = PlotError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"R" => Ok(Self::R),
			"U" => Ok(Self::U),
			"V" => Ok(Self::V),
			"Y" => Ok(Self::Y),
			other => Err(PlotError::UnknownMatrix(other.to_string())),
		}
	}
}

/// Node colours keyed by the first word of a label (the energy carrier).
#[derive(Clone, Debug, Default)]
pub struct ColorPalette {
	colors: HashMap<String, String>,
}

impl ColorPalette {
	/// Parses a `{"Carrier": "#rrggbb", ...}` object.
	pub fn from_json(json: &str) -> Result<Self, PlotError> {
		let colors = serde_json::from_str(json).map_err(|e| PlotError::json("palette", e))?;
		Ok(Self { colors })
	}

	/// Adds or replaces one carrier colour.
	pub fn insert(&mut self, key: impl Into<String>, color: impl Into<String>) {
		self.colors.insert(key.into(), color.into());
	}

	/// Colour for `label`, falling back to `Unspecified`, then grey.
	pub fn color_for(&self, label: &str) -> &str {
		let carrier = label.split_whitespace().next().unwrap_or_default();
		self.colors
			.get(carrier)
			.or_else(|| self.colors.get(UNSPECIFIED_COLOR_KEY))
			.map(String::as_str)
			.unwrap_or(FALLBACK_COLOR)
	}
}

/// Display settings sent with every generated diagram.
pub fn default_options() -> Map<String, Value> {
	let mut options = Map::new();
	options.insert("plot_background_color".into(), "#f4edf7".into());
	options.insert("default_links_opacity".into(), 0.8.into());
	options.insert("default_gradient_links_opacity".into(), 0.8.into());
	options.insert("show_column_lines".into(), false.into());
	options.insert("show_column_names".into(), false.into());
	options
}

/// Accumulates matrix entries into [`FlowDiagramData`].
#[derive(Debug, Default)]
pub struct FlowDiagramBuilder {
	palette: ColorPalette,
	nodes: Vec<Vec<FlowNode>>,
	links: Vec<FlowLink>,
	placed: HashMap<String, NodeRef>,
	seen: HashSet<(Matrix, String, String, u64)>,
}

impl FlowDiagramBuilder {
	/// An empty builder colouring nodes from `palette`.
	pub fn new(palette: ColorPalette) -> Self {
		Self {
			palette,
			nodes: vec![Vec::new(); COLUMN_COUNT],
			..Default::default()
		}
	}

	/// Same as [`add`](Self::add) with the matrix given by name.
	pub fn add_named(&mut self, matrix: &str, from: &str, to: &str, value: f64) -> Result<&mut Self, PlotError> {
		Ok(self.add(matrix.parse()?, from, to, value))
	}

	/// Adds one matrix entry as a link. Exact repeats are ignored.
	pub fn add(&mut self, matrix: Matrix, from: &str, to: &str, value: f64) -> &mut Self {
		if !self
			.seen
			.insert((matrix, from.to_string(), to.to_string(), value.to_bits()))
		{
			return self;
		}
		let (from_column, to_column) = matrix.columns();
		let from = self.place(from, from_column);
		let to = self.place(to, to_column);
		self.links.push(FlowLink {
			from,
			to,
			value,
			extra: Map::new(),
		});
		self
	}

	/// Finds the label's node, creating it in `column` the first time it appears.
	fn place(&mut self, label: &str, column: usize) -> NodeRef {
		if let Some(&existing) = self.placed.get(label) {
			return existing;
		}
		let node = NodeRef {
			column,
			node: self.nodes[column].len(),
		};
		self.nodes[column].push(FlowNode {
			label: label.to_string(),
			color: self.palette.color_for(label).to_string(),
			extra: Map::new(),
		});
		self.placed.insert(label.to_string(), node);
		node
	}

	/// Nodes, links and [`default_options`]; `None` when nothing was added.
	pub fn build(self) -> Option<FlowDiagramData> {
		if self.links.is_empty() {
			return None;
		}
		Some(FlowDiagramData {
			nodes: self.nodes,
			links: self.links,
			options: default_options(),
		})
	}
}
