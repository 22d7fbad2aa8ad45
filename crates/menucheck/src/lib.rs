#![doc = include_str!("../README.md")]

mod graph;
mod query;
mod types;
mod validate;

pub mod v1 {
    //! Versioned public API for menucheck types and operations.
    //!
    //! Everything you need is re-exported from this module. Types are organized
    //! into three groups:
    //!
    //! # Ingestion
    //!
    //! The wire shapes produced by the menus endpoint:
    //!
    //! - [`MenuRecord`] — one menu with optional parent and children
    //! - [`MenuPage`] — a page of records plus [`Pagination`] counters
    //! - [`PageSet`] — one page or many, as stored on disk
    //!
    //! # Graph and traversal
    //!
    //! - [`MenuGraph`] — node → ordered children, plus the root set
    //! - [`validate`] / [`validate_with`] — walk every root and classify paths
    //! - [`walk_root`] — the completed paths below a single root
    //! - [`ValidateOptions`], [`SiblingScope`] — traversal knobs
    //!
    //! # Results
    //!
    //! - [`Classification`] — valid and invalid [`MenuEntry`] lists
    //! - [`query`] — per-root summaries and cycle helpers
    //!
    //! # Example — classify a menu with one cycle
    //!
    //! ```
    //! use menucheck::v1::*;
    //!
    //! let page = MenuPage::from_json(r#"{
    //!     "menus": [
    //!         {"id": 1, "data": "House", "child_ids": [2, 3]},
    //!         {"id": 2, "data": "Room", "parent_id": 1, "child_ids": [4]},
    //!         {"id": 3, "data": "Garden", "parent_id": 1, "child_ids": [1]},
    //!         {"id": 4, "data": "Lamp", "parent_id": 2, "child_ids": []}
    //!     ],
    //!     "pagination": {"current_page": 1, "per_page": 4, "total": 4}
    //! }"#).unwrap();
    //!
    //! let graph = MenuGraph::from_pages(&[page]);
    //! let result = validate(&graph);
    //!
    //! assert_eq!(result.valid(), &[MenuEntry::new(1, vec![2, 4])]);
    //! assert_eq!(result.invalid(), &[MenuEntry::new(1, vec![3, 1])]);
    //! ```

    /// Per-root views over a [`Classification`].
    ///
    /// # Example — which menus contain a cycle
    ///
    /// ```
    /// use menucheck::v1::{MenuGraph, query, validate};
    ///
    /// let mut graph = MenuGraph::new();
    /// graph.add_root(1);
    /// graph.add_root(7);
    /// graph.add_children(1, [2]);
    /// graph.add_children(2, [3]);
    /// graph.add_children(3, [2]);
    ///
    /// let result = validate(&graph);
    /// assert_eq!(query::invalid_roots(&result), vec![1]);
    ///
    /// let summary = query::summarize(&result);
    /// assert_eq!(summary.len(), 2);
    /// assert!(summary.iter().any(|s| s.root_id == 7 && s.is_valid()));
    /// ```
    pub mod query {
        pub use crate::query::{
            RootSummary, back_edges, invalid_roots, nodes_on_invalid_paths, summarize,
        };
    }
    pub use crate::graph::MenuGraph;
    pub use crate::types::{
        Classification, MenuEntry, MenuId, MenuPage, MenuRecord, PageSet, Pagination,
    };
    pub use crate::validate::{
        SiblingScope, ValidateOptions, WalkedPath, validate, validate_with, walk_root,
    };
}
