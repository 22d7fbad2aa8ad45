use serde::{Deserialize, Serialize};

/// Identifier of a single menu entry.
pub type MenuId = i64;

// ============================================================================
// Ingestion
// ============================================================================

/// One menu record as served by the menus endpoint.
///
/// A record without a `parent_id` marks a root menu. `child_ids` lists the
/// record's children in traversal order; when the field is absent the record
/// contributes no adjacency at all.
///
/// # JSON shape
///
/// ```json
/// { "id": 1, "data": "House", "child_ids": [3] }
/// { "id": 3, "data": "Room", "parent_id": 1, "child_ids": [] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuRecord {
    pub id: MenuId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<MenuId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_ids: Option<Vec<MenuId>>,
}

/// Pagination counters attached to every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub current_page: u32,
    pub per_page: u32,
    pub total: u32,
}

/// A single page of menu records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuPage {
    #[serde(default)]
    pub menus: Vec<MenuRecord>,
    pub pagination: Pagination,
}

/// Either one page or a list of pages, as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageSet {
    Many(Vec<MenuPage>),
    One(Box<MenuPage>),
}

// ============================================================================
// Classification
// ============================================================================

/// One completed path, keyed by the root it was walked from.
///
/// `children` holds the identifiers visited below the root, in descent
/// order. The root itself only shows up in `children` when the path closed
/// back on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuEntry {
    pub root_id: MenuId,
    pub children: Vec<MenuId>,
}

/// Completed paths split into valid and invalid, in the order the
/// enumerator finished them.
///
/// Entries are only ever appended; nothing is merged, sorted, or
/// deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(rename = "valid_menus", default)]
    valid: Vec<MenuEntry>,
    #[serde(rename = "invalid_menus", default)]
    invalid: Vec<MenuEntry>,
}

// ============================================================================
// Convenience methods
// ============================================================================

impl MenuRecord {
    /// Create a root record with no children field
    pub fn root(id: MenuId) -> Self {
        Self {
            id,
            data: None,
            parent_id: None,
            child_ids: None,
        }
    }

    /// Create a record with a parent
    pub fn child_of(id: MenuId, parent: MenuId) -> Self {
        Self {
            parent_id: Some(parent),
            ..Self::root(id)
        }
    }

    /// Set the children list
    pub fn with_children(mut self, children: impl IntoIterator<Item = MenuId>) -> Self {
        self.child_ids = Some(children.into_iter().collect());
        self
    }

    /// Set the label
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

impl Pagination {
    /// Number of pages needed to cover `total` records.
    ///
    /// A zero `per_page` is treated as "everything fits on one page".
    ///
    /// ```
    /// use menucheck::v1::Pagination;
    ///
    /// let p = Pagination { current_page: 1, per_page: 5, total: 15 };
    /// assert_eq!(p.page_count(), 3);
    ///
    /// let p = Pagination { current_page: 1, per_page: 5, total: 16 };
    /// assert_eq!(p.page_count(), 4);
    /// ```
    pub fn page_count(&self) -> u32 {
        if self.per_page == 0 {
            return u32::from(self.total > 0);
        }
        self.total.div_ceil(self.per_page)
    }
}

impl MenuPage {
    /// Parse a page from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl PageSet {
    /// Parse either a single page object or an array of pages.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn into_pages(self) -> Vec<MenuPage> {
        match self {
            PageSet::Many(pages) => pages,
            PageSet::One(page) => vec![*page],
        }
    }
}

impl MenuEntry {
    pub fn new(root_id: MenuId, children: Vec<MenuId>) -> Self {
        Self { root_id, children }
    }
}

impl Classification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed path as valid or invalid.
    pub fn record(&mut self, root_id: MenuId, path: Vec<MenuId>, valid: bool) {
        let entry = MenuEntry::new(root_id, path);
        if valid {
            self.valid.push(entry);
        } else {
            self.invalid.push(entry);
        }
    }

    /// Valid entries in completion order
    pub fn valid(&self) -> &[MenuEntry] {
        &self.valid
    }

    /// Invalid entries in completion order
    pub fn invalid(&self) -> &[MenuEntry] {
        &self.invalid
    }

    /// Total number of recorded paths
    pub fn len(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valid.is_empty() && self.invalid.is_empty()
    }

    /// Parse a report from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
