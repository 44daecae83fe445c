//! Graph representation and similarity primitives

pub mod vertex;
pub mod edge;
pub mod scan_graph;
pub mod builder;
pub mod similarity;

pub use builder::GraphBuilder;
pub use edge::Edge;
pub use scan_graph::Graph;
pub use vertex::{Vertex, VertexId};
