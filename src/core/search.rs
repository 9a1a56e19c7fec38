use crate::core::filters::apply_filters;
use crate::core::pagination::{
    item_range, page_tokens, total_pages, ItemRange, PageToken, DEFAULT_MAX_VISIBLE,
    DEFAULT_PAGE_SIZE, MIN_VISIBLE,
};
use crate::models::{FilterCriteria, Listing};

/// Result of a paginated search
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The listings on the requested page, in upstream order
    pub listings: Vec<Listing>,
    pub total_matches: usize,
    /// The page actually served, after clamping
    pub page: usize,
    pub total_pages: usize,
    /// Token sequence for the pagination controls; empty when the controls
    /// would not be rendered (one page or less)
    pub tokens: Vec<PageToken>,
    /// Display range, or None when nothing matched
    pub range: Option<ItemRange>,
}

/// Search orchestrator - filters a snapshot, slices the requested page and
/// derives the pagination view
///
/// # Pipeline
/// 1. Conjunctive filtering (stable, order-preserving)
/// 2. Page clamp and slice
/// 3. Page-token window + display range
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine {
    page_size: usize,
    max_visible: usize,
}

impl SearchEngine {
    pub fn new(page_size: usize, max_visible: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            max_visible: max_visible.max(MIN_VISIBLE),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_MAX_VISIBLE)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Run a search over a listing snapshot
    ///
    /// A page outside `[1, total_pages]` is clamped, never rejected; zero
    /// matches is a valid result with an empty page and no tokens.
    pub fn search(
        &self,
        listings: &[Listing],
        criteria: &FilterCriteria,
        page: usize,
    ) -> SearchResult {
        self.search_with_visibility(listings, criteria, page, self.max_visible)
    }

    /// Same as `search` with a caller-supplied control width (3 on narrow
    /// viewports, 5 on wide ones)
    pub fn search_with_visibility(
        &self,
        listings: &[Listing],
        criteria: &FilterCriteria,
        page: usize,
        max_visible: usize,
    ) -> SearchResult {
        let filtered = apply_filters(listings, criteria);
        let total_matches = filtered.len();
        let total_pages = total_pages(total_matches, self.page_size);

        let page = page.clamp(1, total_pages.max(1));

        let page_listings: Vec<Listing> = filtered
            .into_iter()
            .skip((page - 1) * self.page_size)
            .take(self.page_size)
            .collect();

        // Controls are hidden for a single page, so no tokens are produced
        let tokens = if total_pages <= 1 {
            Vec::new()
        } else {
            page_tokens(page, total_pages, max_visible)
        };

        let range = if total_matches == 0 {
            None
        } else {
            Some(item_range(page, self.page_size, total_matches))
        };

        SearchResult {
            listings: page_listings,
            total_matches,
            page,
            total_pages,
            tokens,
            range,
        }
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Stateful search driver for embedding callers
///
/// Owns the active criteria and current page. Replacing the criteria resets
/// the page to 1 in the same call, so a stale page number can never be
/// applied to a fresh filtered set.
#[derive(Debug, Clone)]
pub struct SearchSession {
    engine: SearchEngine,
    criteria: FilterCriteria,
    page: usize,
}

impl SearchSession {
    pub fn new(engine: SearchEngine) -> Self {
        Self {
            engine,
            criteria: FilterCriteria::default(),
            page: 1,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Replace the active criteria and return to the first page
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.page = 1;
    }

    /// Request a page change; the upper bound is clamped at search time
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Run the engine against a snapshot with the session's current state
    pub fn run(&self, listings: &[Listing]) -> SearchResult {
        self.engine.search(listings, &self.criteria, self.page)
    }
}
