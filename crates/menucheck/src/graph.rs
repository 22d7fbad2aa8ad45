//! Adjacency and root bookkeeping for menu records.

use crate::types::{MenuId, MenuPage, MenuRecord};
use indexmap::IndexSet;
use std::collections::HashMap;

/// Node → ordered children, plus the set of root menus.
///
/// Populated once from ingested records and read-only afterwards. Unknown
/// nodes are leaves: [`MenuGraph::children_of`] never fails.
#[derive(Debug, Clone, Default)]
pub struct MenuGraph {
    children: HashMap<MenuId, Vec<MenuId>>,
    roots: IndexSet<MenuId>,
    labels: HashMap<MenuId, String>,
    // First mention of every identifier, for stable rendering order.
    seen: IndexSet<MenuId>,
}

impl MenuGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from records, applied in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use menucheck::v1::{MenuGraph, MenuRecord};
    ///
    /// let graph = MenuGraph::from_records(&[
    ///     MenuRecord::root(1).with_children([2]),
    ///     MenuRecord::child_of(2, 1).with_children([]),
    /// ]);
    /// assert_eq!(graph.roots(), &[1]);
    /// assert_eq!(graph.children_of(1), &[2]);
    /// assert!(graph.children_of(99).is_empty());
    /// ```
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a MenuRecord>) -> Self {
        let mut graph = Self::new();
        for record in records {
            graph.add_record(record);
        }
        graph
    }

    /// Build a graph from every record of every page, in page order.
    pub fn from_pages(pages: &[MenuPage]) -> Self {
        Self::from_records(pages.iter().flat_map(|p| &p.menus))
    }

    /// Apply one record: roots are registered when `parent_id` is missing,
    /// adjacency only when `child_ids` is present.
    pub fn add_record(&mut self, record: &MenuRecord) {
        self.mention(record.id);
        if record.is_root() {
            self.add_root(record.id);
        }
        if let Some(children) = &record.child_ids {
            self.add_children(record.id, children.iter().copied());
        }
        if let Some(data) = &record.data {
            self.set_label(record.id, data.clone());
        }
    }

    /// Register or overwrite the children of `id`. Children may be unknown
    /// nodes or `id` itself.
    pub fn add_children(&mut self, id: MenuId, children: impl IntoIterator<Item = MenuId>) {
        self.mention(id);
        let children: Vec<MenuId> = children.into_iter().collect();
        for &child in &children {
            self.mention(child);
        }
        self.children.insert(id, children);
    }

    /// Mark `id` as having no parent. Returns `false` if it was already a root.
    pub fn add_root(&mut self, id: MenuId) -> bool {
        self.mention(id);
        self.roots.insert(id)
    }

    /// Ordered children of `id`, empty when `id` has none registered.
    pub fn children_of(&self, id: MenuId) -> &[MenuId] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Roots in first-insertion order.
    pub fn roots(&self) -> &indexmap::set::Slice<MenuId> {
        self.roots.as_slice()
    }

    pub fn is_root(&self, id: MenuId) -> bool {
        self.roots.contains(&id)
    }

    pub fn set_label(&mut self, id: MenuId, label: impl Into<String>) {
        self.labels.insert(id, label.into());
    }

    pub fn label_of(&self, id: MenuId) -> Option<&str> {
        self.labels.get(&id).map(String::as_str)
    }

    /// Every identifier mentioned so far, in first-mention order.
    pub fn nodes(&self) -> &indexmap::set::Slice<MenuId> {
        self.seen.as_slice()
    }

    fn mention(&mut self, id: MenuId) {
        self.seen.insert(id);
    }
}
