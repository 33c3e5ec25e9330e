//! View state for the paginated product list.
//!
//! Mirrors the behaviour of the catalog's list screen: changing the page or
//! sort order re-fetches immediately, while search text and price bounds are
//! applied on submit, which also jumps back to the first page.

use catalog_core::listing::SortOrder;
use catalog_core::types::DbId;

use crate::api::{ApiError, CatalogApi, ListFilter, Product, ProductPage};

/// Products shown per page in the list view.
pub const PAGE_LIMIT: i64 = 8;

/// Filter/sort/page selections plus the last-fetched page of products.
///
/// Mutators only record the selection and mark the state dirty;
/// [`ProductListState::refresh`] performs the actual fetch so the embedding
/// UI decides when network calls happen.
#[derive(Debug)]
pub struct ProductListState {
    search: String,
    min_price: Option<f64>,
    max_price: Option<f64>,
    sort: SortOrder,
    page: i64,
    current: Option<ProductPage>,
    dirty: bool,
}

impl ProductListState {
    /// A fresh list view: no filters, first page, nothing fetched yet.
    pub fn new() -> Self {
        Self {
            search: String::new(),
            min_price: None,
            max_price: None,
            sort: SortOrder::Newest,
            page: 1,
            current: None,
            dirty: true,
        }
    }

    // -- selection mutators --------------------------------------------------

    /// Jump to a page (clamped to >= 1).
    pub fn set_page(&mut self, page: i64) {
        let page = page.max(1);
        if page != self.page {
            self.page = page;
            self.dirty = true;
        }
    }

    /// Change the sort order, keeping the current page.
    pub fn set_sort(&mut self, sort: SortOrder) {
        if sort != self.sort {
            self.sort = sort;
            self.dirty = true;
        }
    }

    /// Apply search text and price bounds, jumping back to the first page.
    pub fn submit_search(
        &mut self,
        search: impl Into<String>,
        min_price: Option<f64>,
        max_price: Option<f64>,
    ) {
        self.search = search.into();
        self.min_price = min_price;
        self.max_price = max_price;
        self.page = 1;
        self.dirty = true;
    }

    // -- accessors -----------------------------------------------------------

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    /// The last-fetched products, empty before the first refresh.
    pub fn products(&self) -> &[Product] {
        self.current.as_ref().map(|p| p.data.as_slice()).unwrap_or(&[])
    }

    /// Total pages reported by the last fetch, 1 before the first refresh.
    pub fn total_pages(&self) -> i64 {
        self.current.as_ref().map(|p| p.pages).unwrap_or(1)
    }

    /// Whether the selections have changed since the last fetch.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn filter(&self) -> ListFilter {
        ListFilter {
            search: self.search.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            sort: self.sort,
            page: self.page,
            limit: PAGE_LIMIT,
        }
    }

    // -- effects -------------------------------------------------------------

    /// Fetch the current page if any selection changed since the last fetch.
    ///
    /// A failed fetch keeps the previous page data and leaves the state
    /// dirty so the next refresh retries.
    pub async fn refresh(&mut self, api: &CatalogApi) -> Result<(), ApiError> {
        if !self.dirty {
            return Ok(());
        }
        let page = api.list(&self.filter()).await?;
        self.current = Some(page);
        self.dirty = false;
        Ok(())
    }

    /// Delete a product and re-fetch the current page.
    pub async fn delete_product(&mut self, api: &CatalogApi, id: DbId) -> Result<(), ApiError> {
        api.delete(id).await?;
        self.dirty = true;
        self.refresh(api).await
    }
}

impl Default for ProductListState {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_dirty_on_first_page() {
        let state = ProductListState::new();
        assert_eq!(state.page(), 1);
        assert!(state.is_dirty());
        assert!(state.products().is_empty());
        assert_eq!(state.total_pages(), 1);
    }

    #[test]
    fn set_page_clamps_to_one() {
        let mut state = ProductListState::new();
        state.set_page(0);
        assert_eq!(state.page(), 1);
        state.set_page(-3);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn set_page_marks_dirty_only_on_change() {
        let mut state = ProductListState::new();
        state.dirty = false;

        state.set_page(1);
        assert!(!state.is_dirty(), "same page must not trigger a refetch");

        state.set_page(3);
        assert!(state.is_dirty());
    }

    #[test]
    fn set_sort_marks_dirty_and_keeps_page() {
        let mut state = ProductListState::new();
        state.set_page(2);
        state.dirty = false;

        state.set_sort(SortOrder::PriceDesc);
        assert!(state.is_dirty());
        assert_eq!(state.page(), 2);
        assert_eq!(state.sort(), SortOrder::PriceDesc);
    }

    #[test]
    fn submit_search_resets_to_first_page() {
        let mut state = ProductListState::new();
        state.set_page(4);
        state.dirty = false;

        state.submit_search("widget", Some(5.0), Some(10.0));

        assert_eq!(state.page(), 1);
        assert!(state.is_dirty());
        let filter = state.filter();
        assert_eq!(filter.search, "widget");
        assert_eq!(filter.min_price, Some(5.0));
        assert_eq!(filter.max_price, Some(10.0));
        assert_eq!(filter.limit, PAGE_LIMIT);
    }
}
