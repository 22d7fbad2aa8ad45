//! Fetch every page of a paginated menus endpoint.
//!
//! The page count comes from the first page's `pagination` block
//! (`ceil(total / per_page)`); the remaining pages are then requested in
//! order and their records concatenated. Pagination counters are handed
//! back to the caller alongside the records.
//!
//! # Example
//!
//! ```
//! use menucheck::v1::{MenuPage, MenuRecord, Pagination};
//! use menucheck_fetch::fetch_all;
//!
//! let pagination = Pagination { current_page: 1, per_page: 1, total: 2 };
//! let pages = vec![
//!     MenuPage { menus: vec![MenuRecord::root(1).with_children([2])], pagination },
//!     MenuPage { menus: vec![MenuRecord::child_of(2, 1)], pagination },
//! ];
//!
//! let fetched = fetch_all(pages.as_slice()).unwrap();
//! assert_eq!(fetched.records.len(), 2);
//! assert_eq!(fetched.pages, 2);
//! ```
//!
//! Against a live endpoint, use [`HttpSource`]:
//!
//! ```no_run
//! use menucheck_fetch::{FetchConfig, HttpSource, fetch_all};
//!
//! let source = HttpSource::new(FetchConfig::new("https://example.com/menus.json?id=1"))?;
//! let fetched = fetch_all(&source)?;
//! println!("{} menus", fetched.records.len());
//! # Ok::<(), menucheck_fetch::FetchError>(())
//! ```

mod error;
mod http;

pub use error::{FetchError, Result};
pub use http::{FetchConfig, HttpSource, page_url};

use menucheck::v1::{MenuGraph, MenuPage, MenuRecord, Pagination};

/// Anything that can hand out numbered pages, starting at 1.
pub trait PageSource {
    fn fetch_page(&self, page: u32) -> Result<MenuPage>;
}

impl<T: PageSource + ?Sized> PageSource for &T {
    fn fetch_page(&self, page: u32) -> Result<MenuPage> {
        (**self).fetch_page(page)
    }
}

/// Pages already in memory, page 1 first.
impl PageSource for [MenuPage] {
    fn fetch_page(&self, page: u32) -> Result<MenuPage> {
        let index = page.checked_sub(1).map(|i| i as usize);
        index
            .and_then(|i| self.get(i))
            .cloned()
            .ok_or_else(|| FetchError::Page {
                page,
                reason: format!("only {} pages available", self.len()),
            })
    }
}

/// Records from every page plus the counters read from the first one.
#[derive(Debug, Clone)]
pub struct Fetched {
    pub records: Vec<MenuRecord>,
    pub pagination: Pagination,
    /// Number of pages actually requested.
    pub pages: u32,
}

impl Fetched {
    pub fn graph(&self) -> MenuGraph {
        MenuGraph::from_records(&self.records)
    }
}

/// Fetch page 1, derive the page count from it, then fetch the rest in order.
pub fn fetch_all<S: PageSource>(source: S) -> Result<Fetched> {
    let first = source.fetch_page(1)?;
    let pagination = first.pagination;
    let page_count = pagination.page_count().max(1);
    tracing::debug!(
        total = pagination.total,
        per_page = pagination.per_page,
        page_count,
        "read pagination"
    );

    let mut records = first.menus;
    for page in 2..=page_count {
        let next = source.fetch_page(page)?;
        tracing::debug!(page, menus = next.menus.len(), "fetched page");
        records.extend(next.menus);
    }

    Ok(Fetched {
        records,
        pagination,
        pages: page_count,
    })
}
