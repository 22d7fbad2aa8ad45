//! Depth-first path enumeration and cycle classification.

use crate::graph::MenuGraph;
use crate::types::{Classification, MenuId};

/// How a cycle found under one child affects the siblings after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SiblingScope {
    /// Once a child at some level is already on the path, every later
    /// sibling at that level is walked as invalid too.
    #[default]
    Inherit,
    /// Each branch is judged only by its own path.
    PerBranch,
}

/// Options for a validation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateOptions {
    pub sibling_scope: SiblingScope,
}

/// A path walked to completion from one root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedPath {
    pub path: Vec<MenuId>,
    pub valid: bool,
}

struct Frame {
    current: MenuId,
    path: Vec<MenuId>,
    valid: bool,
}

/// Classify every path from every root with default options.
///
/// # Examples
///
/// ```
/// use menucheck::v1::{MenuGraph, validate};
///
/// let mut graph = MenuGraph::new();
/// graph.add_root(1);
/// graph.add_children(1, [2, 3]);
/// graph.add_children(2, [4]);
/// graph.add_children(3, [1]);
///
/// let result = validate(&graph);
/// assert_eq!(result.valid()[0].children, vec![2, 4]);
/// assert_eq!(result.invalid()[0].children, vec![3, 1]);
/// ```
pub fn validate(graph: &MenuGraph) -> Classification {
    validate_with(graph, &ValidateOptions::default())
}

/// Classify every path from every root, roots in insertion order.
pub fn validate_with(graph: &MenuGraph, options: &ValidateOptions) -> Classification {
    let mut result = Classification::new();
    for &root in graph.roots() {
        let walked = walk_root(graph, root, options.sibling_scope);
        tracing::debug!(root, paths = walked.len(), "walked root");
        for WalkedPath { path, valid } in walked {
            result.record(root, path, valid);
        }
    }
    result
}

/// Enumerate every path below `root` in depth-first order.
///
/// A branch stops at a node without children, at the root reached again
/// (always invalid), or at a node that already occurs earlier on its own
/// path. The last rule bounds every path at one repeated node, so cycles
/// that never touch the root still terminate.
pub fn walk_root(graph: &MenuGraph, root: MenuId, scope: SiblingScope) -> Vec<WalkedPath> {
    let mut done = Vec::new();
    let mut stack = vec![Frame {
        current: root,
        path: Vec::new(),
        valid: true,
    }];

    while let Some(frame) = stack.pop() {
        let children = graph.children_of(frame.current);
        let closes_on_root = frame.current == root && !frame.path.is_empty();

        if children.is_empty() || closes_on_root || repeats_last(&frame.path) {
            done.push(WalkedPath {
                valid: frame.valid && !closes_on_root,
                path: frame.path,
            });
            continue;
        }

        let mut inherited = frame.valid;
        let mut branches = Vec::with_capacity(children.len());
        for &child in children {
            let on_path = frame.path.contains(&child);
            let valid = match scope {
                SiblingScope::Inherit => {
                    inherited &= !on_path;
                    inherited
                }
                SiblingScope::PerBranch => frame.valid && !on_path,
            };
            let mut path = frame.path.clone();
            path.push(child);
            branches.push(Frame {
                current: child,
                path,
                valid,
            });
        }
        // Reverse so the first child is popped first.
        stack.extend(branches.into_iter().rev());
    }

    done
}

fn repeats_last(path: &[MenuId]) -> bool {
    path.split_last()
        .is_some_and(|(last, earlier)| earlier.contains(last))
}
