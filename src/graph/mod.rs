mod draw;
mod scene;
mod types;

pub use draw::*;
pub use scene::{
	ARROW_HEAD_LENGTH, ARROW_HEAD_WIDTH, ARROW_OFFSET, Arrowhead, Disc, LabelAnchor, Point, Scene,
	Stroke, resolve,
};
pub use types::{DEFAULT_NODE_RADIUS, Graph, GraphEdge, GraphNode, NodeId};
