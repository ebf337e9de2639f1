use std::collections::HashSet;

use log::debug;

use crate::config::RenderConfig;
use crate::graph::{Disc, NodeId, Point, Scene};

// Scene units per TikZ unit.
const TIKZ_SCALE: f64 = 100.0;

/// Emit a `tikzpicture` with one `\node` per disc followed by one `\draw`
/// per stroke.
///
/// Coordinates become `(x / 100, (height - y) / 100)`: TikZ's y axis grows
/// upward. Edges dropped by the resolver are absent here too, so every
/// `\draw` names a declared node.
pub fn render_tikz(scene: &Scene, config: &RenderConfig) -> String {
	let names = node_names(scene.discs());
	let height = f64::from(config.height);
	let mut tikz = String::from("\\begin{tikzpicture}\n");

	for (disc, name) in scene.discs().iter().zip(&names) {
		let (x, y) = to_tikz(disc.center, height);
		tikz.push_str(&format!(
			"    \\node[circle, draw, fill=blue!20, minimum size=1cm] ({name}) at ({x:.2}, {y:.2}) {{{}}};\n",
			escape_latex(&disc.label)
		));
	}

	for stroke in scene.strokes() {
		let (src, tgt) = (&names[stroke.source], &names[stroke.target]);
		match &stroke.label {
			Some(label) => tikz.push_str(&format!(
				"    \\draw[->, thick] ({src}) -- node[midway, fill=white, font=\\small] {{{}}} ({tgt});\n",
				escape_latex(&label.text)
			)),
			None => tikz.push_str(&format!("    \\draw[->, thick] ({src}) -- ({tgt});\n")),
		}
	}

	tikz.push_str("\\end{tikzpicture}\n");
	debug!(
		"rendered tikz: {} nodes, {} edges",
		scene.discs().len(),
		scene.strokes().len()
	);
	tikz
}

fn to_tikz(p: Point, height: f64) -> (f64, f64) {
	// + 0.0 folds -0.0 so it never prints as "-0.00"
	(p.x / TIKZ_SCALE + 0.0, (height - p.y) / TIKZ_SCALE + 0.0)
}

/// TikZ node names: the id itself when it is a plain word, else `n<index>`.
///
/// Plain ids are reserved before any fallback is handed out, so a generated
/// name never shadows a node whose id already spells it.
fn node_names(discs: &[Disc]) -> Vec<String> {
	let preferred: Vec<Option<String>> = discs
		.iter()
		.map(|disc| match &disc.id {
			NodeId::Int(id) => Some(id.to_string()),
			NodeId::Text(id) if is_plain_name(id) => Some(id.clone()),
			NodeId::Text(_) => None,
		})
		.collect();
	let mut taken: HashSet<String> = preferred.iter().flatten().cloned().collect();
	let mut claimed = HashSet::with_capacity(discs.len());

	preferred
		.into_iter()
		.enumerate()
		.map(|(i, name)| match name {
			Some(name) if claimed.insert(name.clone()) => name,
			_ => {
				let mut fallback = format!("n{i}");
				let mut suffix = 0;
				while taken.contains(&fallback) {
					suffix += 1;
					fallback = format!("n{i}_{suffix}");
				}
				taken.insert(fallback.clone());
				fallback
			}
		})
		.collect()
}

fn is_plain_name(id: &str) -> bool {
	!id.is_empty()
		&& id
			.chars()
			.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn escape_latex(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'\\' => out.push_str("\\textbackslash{}"),
			'~' => out.push_str("\\textasciitilde{}"),
			'^' => out.push_str("\\textasciicircum{}"),
			'{' | '}' | '$' | '&' | '#' | '_' | '%' => {
				out.push('\\');
				out.push(c);
			}
			_ => out.push(c),
		}
	}
	out
}
