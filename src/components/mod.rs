//! Plot interaction and diagram components.

pub mod flow_diagram;
pub mod pan_zoom;
