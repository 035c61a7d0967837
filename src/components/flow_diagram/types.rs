//! Node and link data in the shape the Sankey library expects.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Number of columns in an R/U/V/Y flow diagram.
pub const COLUMN_COUNT: usize = 5;

/// One box in a column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
	/// Text shown next to the node.
	pub label: String,
	/// CSS colour of the node.
	pub color: String,
	/// Any other fields the diagram library understands.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// A node position: column, then index within that column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeRef {
	/// Column index.
	pub column: usize,
	/// Index within the column.
	pub node: usize,
}

/// A flow between two nodes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlowLink {
	/// Source node.
	pub from: NodeRef,
	/// Destination node.
	pub to: NodeRef,
	/// Flow magnitude.
	pub value: f64,
	/// Any other fields the diagram library understands.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Everything the diagram library needs besides the container.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowDiagramData {
	/// Nodes grouped by column.
	pub nodes: Vec<Vec<FlowNode>>,
	/// Flows between nodes.
	pub links: Vec<FlowLink>,
	/// Display settings.
	#[serde(default)]
	pub options: Map<String, Value>,
}

/// What the library passes to the link hover callback.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LinkInfo {
	/// Label of the source node.
	pub from_label: String,
	/// Flow magnitude.
	pub value: f64,
	/// Label of the destination node.
	pub to_label: String,
}
