//! rfcview Core - RFC index parsing and relationship graphs
//!
//! This crate turns the text of `rfc-index.txt` into a [`Directory`] of
//! records, selects records with a [`FilterOptions`] filter, follows their
//! update/obsolete relations, and renders the result as Graphviz DOT.
//!
//! Every entry point is a pure function over its arguments.

pub mod dot;
pub mod error;
pub mod index;
pub mod parser;
pub mod query;
pub mod record;
pub mod traversal;

pub use dot::{render, render_with, RankDir, RenderOptions};
pub use error::{Error, Result};
pub use index::{parse_index, Directory};
pub use parser::parse_record;
pub use query::{FilterOptions, Matcher};
pub use record::{Record, RelationKind};
pub use traversal::{search, search_with_stats, Edge, SearchResult, SearchStats, TraversalEngine};
