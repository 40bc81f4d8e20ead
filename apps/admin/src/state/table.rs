//! # Table View State
//!
//! One `TableView` per list screen (orders, products, customers).
//!
//! ## Table Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Table View Operations                                │
//! │                                                                         │
//! │  Frontend Action          View Method             State Change          │
//! │  ───────────────          ───────────             ────────────          │
//! │                                                                         │
//! │  Type in search ─────────► set_query() ─────────► query = q, page = 1   │
//! │                                                                         │
//! │  Pick category ──────────► set_category() ──────► category, page = 1    │
//! │                                                                         │
//! │  Click page 2 ───────────► go_to(2) ────────────► page = 2              │
//! │                                                                         │
//! │  Header checkbox ────────► toggle_page() ───────► selection := page ids │
//! │                                                                         │
//! │  Redraw ─────────────────► render(records) ─────► page clamped          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use backoffice_core::table::run_pipeline;
use backoffice_core::validation::{validate_page_size, validate_search_query};
use backoffice_core::{CategoryFilter, FilterState, PageMeta, Record, RecordSchema, Selection};
use tracing::debug;

use crate::error::ApiResult;

/// What a table draws: the visible rows and the pagination footer.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRender<'a, T> {
    pub items: Vec<&'a T>,
    pub meta: PageMeta,
    /// Footer text, e.g. "Menampilkan 21 - 23 dari 23 order".
    pub range_label: String,
}

impl<'a, T: Record> TableRender<'a, T> {
    /// Ids of the visible rows, in display order.
    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(|record| record.id()).collect()
    }
}

/// Search, category, page and selection of one table.
#[derive(Debug, Clone)]
pub struct TableView<T: 'static> {
    schema: RecordSchema<T>,
    filter: FilterState,
    page: usize,
    page_size: usize,
    /// Page count seen at the last render.
    total_pages: usize,
    selection: Selection,
}

impl<T: Record + 'static> TableView<T> {
    /// ## Errors
    /// - `VALIDATION_ERROR` if `page_size` is zero
    pub fn new(schema: RecordSchema<T>, page_size: usize) -> ApiResult<Self> {
        validate_page_size(page_size)?;

        Ok(TableView {
            schema,
            filter: FilterState::default(),
            page: 1,
            page_size,
            total_pages: 1,
            selection: Selection::new(),
        })
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Replaces the search text and goes back to page 1.
    ///
    /// ## Errors
    /// - `VALIDATION_ERROR` if the query is too long
    pub fn set_query(&mut self, query: &str) -> ApiResult<()> {
        let query = validate_search_query(query)?;
        debug!(entity = self.schema.noun, %query, "Search query changed");

        self.filter.query = query;
        self.page = 1;
        Ok(())
    }

    /// Replaces the category dropdown value and goes back to page 1.
    ///
    /// `"all"` or an empty value clears the category filter.
    pub fn set_category(&mut self, value: &str) {
        self.filter.category = CategoryFilter::parse(value);
        debug!(entity = self.schema.noun, category = %self.filter.category, "Category changed");
        self.page = 1;
    }

    /// Jumps to a page. Out-of-range pages are clamped by the next render.
    pub fn go_to(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn next_page(&mut self) {
        if self.page < self.total_pages {
            self.page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Runs search, category filter and pagination over `records`.
    ///
    /// The stored page is clamped to the result, so a page that no longer
    /// exists (e.g. after records were deleted) snaps to the last one.
    pub fn render<'a>(&mut self, records: &'a [T]) -> ApiResult<TableRender<'a, T>> {
        let page = run_pipeline(records, &self.schema, &self.filter, self.page, self.page_size)?;

        self.page = page.meta.page;
        self.total_pages = page.meta.total_pages;

        Ok(TableRender {
            range_label: page.meta.range_label(self.schema.noun),
            items: page.items,
            meta: page.meta,
        })
    }

    /// Row checkbox.
    pub fn toggle_row(&mut self, id: &str) {
        self.selection.toggle(id);
    }

    /// Header checkbox over the rows of `render`.
    pub fn toggle_page(&mut self, render: &TableRender<'_, T>) {
        self.selection.toggle_all_records(&render.items);
        debug!(entity = self.schema.noun, selected = self.selection.count(), "Page selection toggled");
    }

    /// Whether the header checkbox of `render` is checked.
    pub fn is_page_selected(&self, render: &TableRender<'_, T>) -> bool {
        self.selection.is_page_selected(render.items.iter().map(|record| record.id()))
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }
}
