//! Listing query and paged result types.

use serde::{Deserialize, Serialize};

use crate::types::record::{ActorRecord, ActorSummary, Rank};

/// Default page size for listings.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Filter and paging parameters for [`Catalog::list`](crate::Catalog::list).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Case-sensitive substring match on the name (empty = no constraint)
    #[serde(default)]
    pub name_filter: Option<String>,

    /// Inclusive lower rank bound
    #[serde(default)]
    pub min_rank: Option<Rank>,

    /// Inclusive upper rank bound
    #[serde(default)]
    pub max_rank: Option<Rank>,

    /// 1-indexed page number
    pub page: usize,

    pub page_size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            name_filter: None,
            min_rank: None,
            max_rank: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListQuery {
    /// First page, default page size, no filters.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name_filter(mut self, filter: impl Into<String>) -> Self {
        self.name_filter = Some(filter.into());
        self
    }

    pub fn min_rank(mut self, rank: Rank) -> Self {
        self.min_rank = Some(rank);
        self
    }

    pub fn max_rank(mut self, rank: Rank) -> Self {
        self.max_rank = Some(rank);
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Whether a record passes the name and rank filters.
    pub fn matches(&self, record: &ActorRecord) -> bool {
        if let Some(filter) = self.name_filter.as_deref() {
            if !filter.is_empty() && !record.name.contains(filter) {
                return false;
            }
        }
        if self.min_rank.is_some_and(|min| record.rank < min) {
            return false;
        }
        if self.max_rank.is_some_and(|max| record.rank > max) {
            return false;
        }
        true
    }

    /// Number of records to skip before this page.
    pub(crate) fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }
}

/// One page of a filtered listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorPage {
    pub items: Vec<ActorRecord>,

    /// Records matching the filters across all pages
    pub total_count: usize,

    pub total_pages: usize,

    pub page: usize,

    pub page_size: usize,
}

impl ActorPage {
    /// Id and name of each item, the shape of the listing response.
    pub fn summaries(&self) -> Vec<ActorSummary> {
        self.items.iter().map(ActorSummary::from).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// `ceil(total / page_size)`; zero when `page_size` is zero.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}
