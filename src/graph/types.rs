use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ExportError, Result};

/// Radius applied to every node when a graph does not set `nodeRadius`.
pub const DEFAULT_NODE_RADIUS: f64 = 25.0;

/// Node identifier as it appears in graph documents.
///
/// Integer and string ids are distinct: `1` never matches `"1"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
	/// Numeric id, e.g. `{"id": 3}`.
	Int(i64),
	/// String id, e.g. `{"id": "start"}`.
	Text(String),
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			NodeId::Int(id) => write!(f, "{id}"),
			NodeId::Text(id) => f.write_str(id),
		}
	}
}

impl From<i64> for NodeId {
	fn from(id: i64) -> Self {
		NodeId::Int(id)
	}
}

impl From<i32> for NodeId {
	fn from(id: i32) -> Self {
		NodeId::Int(id.into())
	}
}

impl From<&str> for NodeId {
	fn from(id: &str) -> Self {
		NodeId::Text(id.into())
	}
}

impl From<String> for NodeId {
	fn from(id: String) -> Self {
		NodeId::Text(id)
	}
}

/// A positioned node. Origin is top-left, y grows downward.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
	/// Unique id within the graph.
	pub id: NodeId,
	/// Horizontal center.
	pub x: f64,
	/// Vertical center.
	pub y: f64,
	/// Text drawn in the disc; the id is used when absent.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
}

impl GraphNode {
	/// Text to draw inside the node's disc.
	pub fn display_label(&self) -> String {
		self.label.clone().unwrap_or_else(|| self.id.to_string())
	}
}

/// A directed edge between two node ids.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
	/// Id of the node the edge leaves.
	pub source: NodeId,
	/// Id of the node the arrow points at.
	pub target: NodeId,
	/// Optional text anchored at the edge midpoint.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
}

/// A complete graph snapshot, supplied whole to every render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Graph {
	/// Nodes in draw order.
	#[serde(default)]
	pub nodes: Vec<GraphNode>,
	/// Edges in draw order. Parallel edges are kept.
	#[serde(default)]
	pub edges: Vec<GraphEdge>,
	/// Radius shared by all nodes.
	#[serde(default = "default_node_radius")]
	pub node_radius: f64,
}

fn default_node_radius() -> f64 {
	DEFAULT_NODE_RADIUS
}

impl Default for Graph {
	fn default() -> Self {
		Self {
			nodes: Vec::new(),
			edges: Vec::new(),
			node_radius: DEFAULT_NODE_RADIUS,
		}
	}
}

impl Graph {
	/// Empty graph with the default node radius.
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse and validate a graph document.
	///
	/// Missing `nodes` or `edges` keys yield empty collections. Anything that
	/// is not shaped like a graph (a node without coordinates, a string where
	/// a list belongs) is an error.
	pub fn from_json(json: &str) -> Result<Self> {
		let graph: Graph = serde_json::from_str(json)?;
		graph.validate()?;
		Ok(graph)
	}

	/// Reject values no backend can draw: non-finite coordinates or a
	/// negative or non-finite radius.
	pub fn validate(&self) -> Result<()> {
		if !self.node_radius.is_finite() || self.node_radius < 0.0 {
			return Err(ExportError::InvalidGraph(format!(
				"node radius must be a finite, non-negative number, got {}",
				self.node_radius
			)));
		}
		if let Some(node) = self
			.nodes
			.iter()
			.find(|node| !node.x.is_finite() || !node.y.is_finite())
		{
			return Err(ExportError::InvalidGraph(format!(
				"node {} has non-finite position ({}, {})",
				node.id, node.x, node.y
			)));
		}
		Ok(())
	}

	/// Append an unlabeled node.
	pub fn node(self, id: impl Into<NodeId>, x: f64, y: f64) -> Self {
		self.push_node(id.into(), x, y, None)
	}

	/// Append a labeled node.
	pub fn labeled_node(self, id: impl Into<NodeId>, x: f64, y: f64, label: &str) -> Self {
		self.push_node(id.into(), x, y, Some(label.into()))
	}

	/// Append an unlabeled edge.
	pub fn edge(self, source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
		self.push_edge(source.into(), target.into(), None)
	}

	/// Append a labeled edge.
	pub fn labeled_edge(
		self,
		source: impl Into<NodeId>,
		target: impl Into<NodeId>,
		label: &str,
	) -> Self {
		self.push_edge(source.into(), target.into(), Some(label.into()))
	}

	/// Replace the shared node radius.
	pub fn with_node_radius(mut self, radius: f64) -> Self {
		self.node_radius = radius;
		self
	}

	fn push_node(mut self, id: NodeId, x: f64, y: f64, label: Option<String>) -> Self {
		self.nodes.push(GraphNode { id, x, y, label });
		self
	}

	fn push_edge(mut self, source: NodeId, target: NodeId, label: Option<String>) -> Self {
		self.edges.push(GraphEdge {
			source,
			target,
			label,
		});
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_collections_default_to_empty() {
		let graph = Graph::from_json("{}").unwrap();
		assert!(graph.nodes.is_empty());
		assert!(graph.edges.is_empty());
		assert_eq!(graph.node_radius, DEFAULT_NODE_RADIUS);
	}

	#[test]
	fn ids_keep_their_json_type() {
		let graph = Graph::from_json(
			r#"{"nodes": [{"id": 1, "x": 0, "y": 0}, {"id": "b", "x": 5.5, "y": 2, "label": "B"}],
			    "edges": [{"source": 1, "target": "b"}],
			    "nodeRadius": 10}"#,
		)
		.unwrap();
		assert_eq!(graph.nodes[0].id, NodeId::Int(1));
		assert_eq!(graph.nodes[1].id, NodeId::Text("b".into()));
		assert_eq!(graph.nodes[0].display_label(), "1");
		assert_eq!(graph.nodes[1].display_label(), "B");
		assert_eq!(graph.node_radius, 10.0);
		assert_ne!(NodeId::from(1), NodeId::from("1"));
	}

	#[test]
	fn non_graph_documents_are_rejected() {
		assert!(matches!(
			Graph::from_json(r#"{"nodes": [{"id": 1}]}"#),
			Err(ExportError::Json(_))
		));
		assert!(matches!(
			Graph::from_json(r#"{"nodes": "abc"}"#),
			Err(ExportError::Json(_))
		));
		assert!(Graph::from_json("[1, 2]").is_err());
	}

	#[test]
	fn non_finite_positions_are_rejected() {
		let graph = Graph::new().node(1, f64::NAN, 0.0);
		assert!(matches!(graph.validate(), Err(ExportError::InvalidGraph(_))));

		let graph = Graph::new().with_node_radius(f64::INFINITY);
		assert!(matches!(graph.validate(), Err(ExportError::InvalidGraph(_))));
	}

	#[test]
	fn serializes_back_to_camel_case() {
		let graph = Graph::new().labeled_node("a", 1.0, 2.0, "A").edge("a", "a");
		let json = serde_json::to_string(&graph).unwrap();
		assert!(json.contains("\"nodeRadius\":25.0"));
		assert_eq!(Graph::from_json(&json).unwrap(), graph);
	}
}
