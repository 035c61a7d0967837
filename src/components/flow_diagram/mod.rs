//! Adapter around the page's Sankey library, plus the data it draws.

pub mod builder;
mod component;
mod options;
mod render;
mod types;

pub use builder::{ColorPalette, FlowDiagramBuilder, Matrix};
pub use component::FlowDiagramView;
pub use options::{DiagramOptions, LINK_HOVER_KEY, LinkHoverFormatter, format_link_tooltip};
pub use render::{DiagramConfig, FlowDiagram};
pub use types::{FlowDiagramData, FlowLink, FlowNode, LinkInfo, NodeRef};
