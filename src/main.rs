//! `graph-export` command line: render graph files or stored graphs.

#[cfg(not(target_arch = "wasm32"))]
mod cli {
	use std::fs;
	use std::path::{Path, PathBuf};
	use std::process::ExitCode;

	use clap::{ArgAction, Parser, Subcommand};
	use graph_export::{
		Export, ExportFormat, Graph, GraphStore, MemoryStore, RenderConfig, Result, export,
		export_stored, init_logging, show_stored,
	};
	use log::{LevelFilter, error, info};

	#[derive(Parser)]
	#[command(name = "graph-export", version, about = "Render positioned directed graphs")]
	struct Cli {
		#[command(subcommand)]
		command: Command,

		#[command(flatten)]
		render: RenderConfig,

		/// More output; repeat for trace logging.
		#[arg(short, long, global = true, action = ArgAction::Count)]
		verbose: u8,
	}

	#[derive(Subcommand)]
	enum Command {
		/// Render a graph document.
		Render {
			/// Graph JSON file; its stem names the output.
			graph: PathBuf,
			/// png, jpg, tikz or svg.
			#[arg(short, long, default_value = "png")]
			format: ExportFormat,
			/// Output path, defaults to `<stem>.<ext>`.
			#[arg(short, long)]
			output: Option<PathBuf>,
		},
		/// List the ids in a store snapshot.
		List {
			/// Store snapshot JSON file.
			store: PathBuf,
		},
		/// Print one stored graph as JSON.
		Show {
			/// Store snapshot JSON file.
			store: PathBuf,
			/// Id of the stored graph.
			id: String,
		},
		/// Save a graph document into a store snapshot, creating it if needed.
		Save {
			/// Store snapshot JSON file.
			store: PathBuf,
			/// Id to save under.
			id: String,
			/// Graph JSON file.
			graph: PathBuf,
		},
		/// Render a graph from a store snapshot.
		Export {
			/// Store snapshot JSON file.
			store: PathBuf,
			/// Id of the stored graph.
			id: String,
			/// png, jpg, tikz or svg.
			#[arg(short, long, default_value = "png")]
			format: ExportFormat,
			/// Output path, defaults to `<id>.<ext>`.
			#[arg(short, long)]
			output: Option<PathBuf>,
		},
	}

	pub fn main() -> ExitCode {
		let cli = Cli::parse();
		init_logging(match cli.verbose {
			0 => LevelFilter::Info,
			1 => LevelFilter::Debug,
			_ => LevelFilter::Trace,
		});

		match run(cli.command, &cli.render) {
			Ok(()) => ExitCode::SUCCESS,
			Err(err) => {
				error!("{err}");
				ExitCode::FAILURE
			}
		}
	}

	fn run(command: Command, config: &RenderConfig) -> Result<()> {
		match command {
			Command::Render {
				graph,
				format,
				output,
			} => {
				let id = graph
					.file_stem()
					.map(|stem| stem.to_string_lossy().into_owned())
					.unwrap_or_else(|| "graph".into());
				let doc = Graph::from_json(&fs::read_to_string(&graph)?)?;
				write_export(export(&id, &doc, format, config)?, output)
			}
			Command::List { store } => {
				for id in load_store(&store)?.ids() {
					println!("{id}");
				}
				Ok(())
			}
			Command::Show { store, id } => {
				println!("{}", show_stored(&load_store(&store)?, &id)?);
				Ok(())
			}
			Command::Save { store, id, graph } => {
				let snapshot = if store.exists() {
					load_store(&store)?
				} else {
					MemoryStore::new()
				};
				snapshot.put(&id, Graph::from_json(&fs::read_to_string(&graph)?)?);
				fs::write(&store, snapshot.to_json()?)?;
				info!("saved graph {id} to {}", store.display());
				Ok(())
			}
			Command::Export {
				store,
				id,
				format,
				output,
			} => write_export(
				export_stored(&load_store(&store)?, &id, format, config)?,
				output,
			),
		}
	}

	fn load_store(path: &Path) -> Result<MemoryStore> {
		MemoryStore::from_json(&fs::read_to_string(path)?)
	}

	fn write_export(export: Export, output: Option<PathBuf>) -> Result<()> {
		let path = output.unwrap_or_else(|| PathBuf::from(&export.file_name));
		fs::write(&path, &export.bytes)?;
		info!(
			"wrote {} ({}, {} bytes)",
			path.display(),
			export.mime_type,
			export.bytes.len()
		);
		Ok(())
	}
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
	cli::main()
}

// The browser build only ships the library.
#[cfg(target_arch = "wasm32")]
fn main() {}
