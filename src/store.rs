use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use log::debug;

use crate::config::RenderConfig;
use crate::error::{ExportError, Result};
use crate::export::{Export, ExportFormat, export};
use crate::graph::Graph;

/// Named graph storage injected into whatever serves exports.
///
/// The rendering functions never see a store; they receive the graph value
/// a store hands out.
pub trait GraphStore {
	/// Snapshot of the graph saved under `id`.
	fn get(&self, id: &str) -> Option<Graph>;
	/// Save `graph` under `id`, replacing any previous graph.
	fn put(&self, id: &str, graph: Graph);
	/// Stored ids in ascending order.
	fn ids(&self) -> Vec<String>;
}

/// In-process store; concurrent saves are serialized by a lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
	graphs: RwLock<BTreeMap<String, Graph>>,
}

impl MemoryStore {
	/// Empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Load a snapshot shaped `{"<id>": <graph>, ...}`.
	pub fn from_json(json: &str) -> Result<Self> {
		let graphs: BTreeMap<String, Graph> = serde_json::from_str(json)?;
		for graph in graphs.values() {
			graph.validate()?;
		}
		debug!("loaded {} graphs", graphs.len());
		Ok(Self {
			graphs: RwLock::new(graphs),
		})
	}

	/// Serialize every stored graph as a snapshot document.
	pub fn to_json(&self) -> Result<String> {
		let graphs = self.graphs.read().unwrap_or_else(PoisonError::into_inner);
		Ok(serde_json::to_string_pretty(&*graphs)?)
	}
}

impl GraphStore for MemoryStore {
	fn get(&self, id: &str) -> Option<Graph> {
		let graphs = self.graphs.read().unwrap_or_else(PoisonError::into_inner);
		graphs.get(id).cloned()
	}

	fn put(&self, id: &str, graph: Graph) {
		let mut graphs = self.graphs.write().unwrap_or_else(PoisonError::into_inner);
		graphs.insert(id.into(), graph);
	}

	fn ids(&self) -> Vec<String> {
		let graphs = self.graphs.read().unwrap_or_else(PoisonError::into_inner);
		graphs.keys().cloned().collect()
	}
}

/// Pretty-printed JSON of the graph stored under `id`.
pub fn show_stored(store: &impl GraphStore, id: &str) -> Result<String> {
	let graph = store
		.get(id)
		.ok_or_else(|| ExportError::NotFound(id.into()))?;
	Ok(serde_json::to_string_pretty(&graph)?)
}

/// Look up `id` in `store` and export it.
pub fn export_stored(
	store: &impl GraphStore,
	id: &str,
	format: ExportFormat,
	config: &RenderConfig,
) -> Result<Export> {
	let graph = store
		.get(id)
		.ok_or_else(|| ExportError::NotFound(id.into()))?;
	export(id, &graph, format, config)
}
