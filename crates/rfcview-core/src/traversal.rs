//! Relationship search over the update/obsolete graph

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::index::Directory;
use crate::query::FilterOptions;

/// A directed edge `(earlier, later)`: `earlier` is updated or obsoleted by `later`
pub type Edge = (u32, u32);

/// Result of a relationship search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Every record reached, ascending
    pub rfcs: Vec<u32>,

    /// Update edges in discovery order
    pub updates: Vec<Edge>,

    /// Obsolete edges in discovery order
    pub obsoletes: Vec<Edge>,
}

impl SearchResult {
    /// Number of records reached
    pub fn len(&self) -> usize {
        self.rfcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rfcs.is_empty()
    }

    /// Compact JSON form, `{"rfcs":[..],"updates":[[a,b]],"obsoletes":[[a,b]]}`
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Search statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Records selected by the filter itself
    pub seeds: usize,
    /// Breadth-first expansion rounds executed
    pub rounds: usize,
    /// Records reached in total
    pub nodes: usize,
    /// Distinct update and obsolete edges
    pub edges: usize,
    /// Reached numbers with no entry in the directory
    pub dangling: usize,
}

/// Edge list that keeps first-seen order and drops repeats
#[derive(Default)]
struct EdgeList {
    edges: Vec<Edge>,
    seen: HashSet<Edge>,
}

impl EdgeList {
    fn push(&mut self, edge: Edge) {
        if self.seen.insert(edge) {
            self.edges.push(edge);
        }
    }
}

#[derive(Default)]
struct Walk {
    rfcs: Vec<u32>,
    seen: HashSet<u32>,
    queue: VecDeque<u32>,
    updates: EdgeList,
    obsoletes: EdgeList,
}

impl Walk {
    fn visit(&mut self, number: u32) {
        if self.seen.insert(number) {
            self.rfcs.push(number);
            self.queue.push_back(number);
        }
    }
}

/// Relationship search engine
pub struct TraversalEngine;

impl TraversalEngine {
    /// Select seed records with `opts` and expand them level by level
    pub fn execute(directory: &Directory, opts: &FilterOptions) -> (SearchResult, SearchStats) {
        tracing::debug!(
            "Executing search: includes={:?}, excludes={:?}, range={:?}..={:?}, ancestors={}, descendants={}",
            opts.includes,
            opts.excludes,
            opts.from,
            opts.to,
            opts.search_ancestors,
            opts.search_descendants
        );

        let matcher = opts.matcher();
        let mut walk = Walk::default();
        let mut stats = SearchStats::default();

        for record in directory.iter() {
            if opts.in_range(record.number) && matcher.matches(record) {
                walk.visit(record.number);
            }
        }
        stats.seeds = walk.rfcs.len();

        while !walk.queue.is_empty() {
            let batch: Vec<u32> = walk.queue.drain(..).collect();
            stats.rounds += 1;

            if opts.search_ancestors {
                for &number in &batch {
                    let Some(record) = directory.get(number) else {
                        continue;
                    };
                    for &parent in &record.updates {
                        walk.updates.push((parent, number));
                        walk.visit(parent);
                    }
                    for &parent in &record.obsoletes {
                        walk.obsoletes.push((parent, number));
                        walk.visit(parent);
                    }
                }
            }

            if opts.search_descendants {
                for &number in &batch {
                    let Some(record) = directory.get(number) else {
                        continue;
                    };
                    for &child in &record.updated_by {
                        walk.updates.push((number, child));
                        walk.visit(child);
                    }
                    for &child in &record.obsoleted_by {
                        walk.obsoletes.push((number, child));
                        walk.visit(child);
                    }
                }
            }
        }

        let Walk {
            mut rfcs,
            updates,
            obsoletes,
            ..
        } = walk;
        rfcs.sort_unstable();

        stats.nodes = rfcs.len();
        stats.edges = updates.edges.len() + obsoletes.edges.len();
        stats.dangling = rfcs.iter().filter(|n| !directory.contains(**n)).count();

        tracing::debug!(
            "Search reached {} records ({} seeds) in {} rounds, {} edges, {} dangling",
            stats.nodes,
            stats.seeds,
            stats.rounds,
            stats.edges,
            stats.dangling
        );

        let result = SearchResult {
            rfcs,
            updates: updates.edges,
            obsoletes: obsoletes.edges,
        };
        (result, stats)
    }
}

/// Find the records matching `opts`, expanded along the relations it enables
pub fn search(directory: &Directory, opts: &FilterOptions) -> SearchResult {
    TraversalEngine::execute(directory, opts).0
}

/// Same as [`search`], also returning traversal statistics
pub fn search_with_stats(directory: &Directory, opts: &FilterOptions) -> (SearchResult, SearchStats) {
    TraversalEngine::execute(directory, opts)
}
