//! Graphviz DOT generation for search results

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::index::Directory;
use crate::record::{Record, RFC_EDITOR_URL};
use crate::traversal::SearchResult;

/// Label text used when a reached number has no directory entry
pub const UNDEFINED: &str = "undefined";

/// Graph layout direction (`rankdir`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RankDir {
    /// Top to bottom
    #[default]
    Tb,
    /// Left to right
    Lr,
    /// Bottom to top
    Bt,
    /// Right to left
    Rl,
}

impl RankDir {
    pub fn as_str(&self) -> &'static str {
        match self {
            RankDir::Tb => "TB",
            RankDir::Lr => "LR",
            RankDir::Bt => "BT",
            RankDir::Rl => "RL",
        }
    }
}

impl std::fmt::Display for RankDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RankDir {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TB" => Ok(RankDir::Tb),
            "LR" => Ok(RankDir::Lr),
            "BT" => Ok(RankDir::Bt),
            "RL" => Ok(RankDir::Rl),
            _ => Err(format!("unknown rank direction '{}' (expected TB, LR, BT or RL)", s)),
        }
    }
}

/// Rendering hints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Emit a `rankdir` directive; Graphviz lays out top to bottom without one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank_dir: Option<RankDir>,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rank_dir(mut self, rank_dir: RankDir) -> Self {
        self.rank_dir = Some(rank_dir);
        self
    }
}

/// Render a search result as a DOT digraph
pub fn render(result: &SearchResult, directory: &Directory) -> String {
    render_with(result, directory, &RenderOptions::default())
}

/// Render a search result as a DOT digraph with explicit options
pub fn render_with(result: &SearchResult, directory: &Directory, options: &RenderOptions) -> String {
    let mut dot = String::new();

    dot.push_str("digraph G {\n");
    if let Some(rank_dir) = options.rank_dir {
        let _ = writeln!(dot, "    rankdir=\"{}\"", rank_dir);
    }
    dot.push_str("    node [shape=box];\n");
    let nodes = result.rfcs.iter().map(|&number| {
        let record = directory.get(number);
        format!(
            "    RFC{number} [label=\"RFC-{number}\\n{}\\n({})\" URL=\"{}{number}\"];",
            title_label(record),
            year_label(record),
            RFC_EDITOR_URL,
        )
    });
    push_section(&mut dot, nodes);

    dot.push_str("\n    // Updates\n");
    dot.push_str("    edge [style=\"dotted\"];\n");
    push_section(&mut dot, result.updates.iter().map(|(from, to)| edge_line(*from, *to, "update")));

    dot.push_str("\n    // Obsoletes\n");
    dot.push_str("    edge [color=gray, style=\"solid\"];\n");
    push_section(
        &mut dot,
        result.obsoletes.iter().map(|(from, to)| edge_line(*from, *to, "obsolete")),
    );

    dot.push_str("}\n");
    dot
}

/// Append `lines` joined by newlines plus one terminating newline.
///
/// An empty section still leaves its blank line behind.
fn push_section(dot: &mut String, lines: impl Iterator<Item = String>) {
    let lines: Vec<String> = lines.collect();
    dot.push_str(&lines.join("\n"));
    dot.push('\n');
}

fn edge_line(from: u32, to: u32, label: &str) -> String {
    format!("    RFC{} -> RFC{} [label=\"{}\"];", from, to, label)
}

fn title_label(record: Option<&Record>) -> String {
    record.map_or_else(|| UNDEFINED.to_string(), |r| escape(&r.title))
}

fn year_label(record: Option<&Record>) -> String {
    match record {
        Some(r) if r.published > 0 => r.published.to_string().chars().take(4).collect(),
        _ => UNDEFINED.to_string(),
    }
}

/// Escape text for a DOT double-quoted string
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
