//! Per-root views over a [`Classification`].

use crate::types::{Classification, MenuEntry, MenuId};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Path counts for one root menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootSummary {
    pub root_id: MenuId,
    pub valid_paths: usize,
    pub invalid_paths: usize,
}

impl RootSummary {
    /// A menu is valid when none of its paths closes a cycle.
    pub fn is_valid(&self) -> bool {
        self.invalid_paths == 0
    }
}

/// Count valid and invalid paths per root, roots in first-appearance order
/// across the valid entries followed by the invalid ones.
///
/// # Examples
///
/// ```
/// use menucheck::v1::{MenuGraph, query, validate};
///
/// let mut graph = MenuGraph::new();
/// graph.add_root(1);
/// graph.add_root(5);
/// graph.add_children(1, [2, 3]);
/// graph.add_children(3, [1]);
///
/// let summary = query::summarize(&validate(&graph));
/// assert_eq!(summary.len(), 2);
/// assert_eq!(summary[0].root_id, 1);
/// assert!(!summary[0].is_valid());
/// assert!(summary[1].is_valid());
/// ```
pub fn summarize(result: &Classification) -> Vec<RootSummary> {
    let mut counts: IndexMap<MenuId, (usize, usize)> = IndexMap::new();
    for entry in result.valid() {
        counts.entry(entry.root_id).or_default().0 += 1;
    }
    for entry in result.invalid() {
        counts.entry(entry.root_id).or_default().1 += 1;
    }

    counts
        .into_iter()
        .map(|(root_id, (valid_paths, invalid_paths))| RootSummary {
            root_id,
            valid_paths,
            invalid_paths,
        })
        .collect()
}

/// Roots with at least one invalid path, in first-appearance order.
pub fn invalid_roots(result: &Classification) -> Vec<MenuId> {
    result
        .invalid()
        .iter()
        .map(|e| e.root_id)
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}

/// Every node that appears on some invalid path, including the roots.
pub fn nodes_on_invalid_paths(result: &Classification) -> HashSet<MenuId> {
    result
        .invalid()
        .iter()
        .flat_map(|e| std::iter::once(e.root_id).chain(e.children.iter().copied()))
        .collect()
}

/// Edges of an invalid path that lead back to a node already on it.
///
/// The path is read as root, then its children in order.
pub fn back_edges(entry: &MenuEntry) -> Vec<(MenuId, MenuId)> {
    let mut on_path = vec![entry.root_id];
    let mut edges = Vec::new();
    for &next in &entry.children {
        let prev = on_path[on_path.len() - 1];
        if on_path.contains(&next) {
            edges.push((prev, next));
        }
        on_path.push(next);
    }
    edges
}
