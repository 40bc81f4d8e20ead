//! # Table Pipeline
//!
//! Search, category filter and pagination shared by the order, product and
//! customer tables.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Table Pipeline                                     │
//! │                                                                         │
//! │  records ──► apply_text_filter ──► apply_category_filter ──► paginate  │
//! │     │            (query)               (category)          (page)       │
//! │     │                                                         │         │
//! │     │                                                         ▼         │
//! │     │                                             Page { items, meta }  │
//! │                                                                         │
//! │  Category narrows BEFORE pagination, so page counts reflect the        │
//! │  filtered set. Nothing is cached: every render runs the whole chain.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Page Reset Contract
//! Whoever owns the filter state MUST reset the page to 1 whenever the query
//! or category changes. `apps/admin`'s `TableView` does this.
//!
//! ## Example
//! ```rust
//! use backoffice_core::table::{paginate, range_text};
//!
//! let records: Vec<u32> = (0..23).collect();
//! let page = paginate(&records, 3, 10).unwrap();
//!
//! assert_eq!(page.items, vec![20, 21, 22]);
//! assert_eq!(page.meta.total_pages, 3);
//! assert_eq!(range_text(&page.meta), "21 - 23 dari 23");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::CoreResult;
use crate::validation::validate_page_size;

// =============================================================================
// Records and Accessors
// =============================================================================

/// Anything listed in a table. The id scopes bulk selection.
pub trait Record {
    fn id(&self) -> &str;
}

/// Extracts one searchable text field from a record.
pub type SearchField<T> = fn(&T) -> &str;

/// Extracts the value compared by the category filter.
pub type CategoryField<T> = fn(&T) -> &str;

/// Per-entity table configuration.
///
/// Instances live in [`crate::schema`].
pub struct RecordSchema<T: 'static> {
    /// Noun used in the footer, e.g. "order" in "... dari 23 order".
    pub noun: &'static str,
    /// Fields searched by the toolbar query, any one may match.
    pub search_fields: &'static [SearchField<T>],
    /// Field behind the category dropdown, if the table has one.
    pub category_field: Option<CategoryField<T>>,
}

impl<T: 'static> Clone for RecordSchema<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for RecordSchema<T> {}

impl<T: 'static> fmt::Debug for RecordSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordSchema")
            .field("noun", &self.noun)
            .field("search_fields", &self.search_fields.len())
            .field("category_field", &self.category_field.is_some())
            .finish()
    }
}

// =============================================================================
// Filter State
// =============================================================================

/// Sentinel value the dropdown sends for "Semua Kategori".
pub const ALL_CATEGORIES: &str = "all";

/// Category dropdown state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// No constraint.
    #[default]
    All,
    /// Only records whose category field equals this value.
    Only(String),
}

impl CategoryFilter {
    /// Parses a dropdown value; `"all"` and `""` mean no constraint.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(expected) => expected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL_CATEGORIES),
            CategoryFilter::Only(value) => f.write_str(value),
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        CategoryFilter::parse(value)
    }
}

/// Toolbar state: search text plus category dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub query: String,
    pub category: CategoryFilter,
}

// =============================================================================
// Filters
// =============================================================================

/// Keeps records where any search field contains `query`, ignoring case.
///
/// An empty query keeps everything. Input order is preserved.
pub fn apply_text_filter<'a, T, I>(records: I, query: &str, fields: &[SearchField<T>]) -> Vec<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
{
    if query.is_empty() {
        return records.into_iter().collect();
    }

    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|record| {
            fields
                .iter()
                .any(|field| field(*record).to_lowercase().contains(&needle))
        })
        .collect()
}

/// Keeps records whose category field equals the filter value.
pub fn apply_category_filter<'a, T, I>(
    records: I,
    category: &CategoryFilter,
    field: CategoryField<T>,
) -> Vec<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
{
    records
        .into_iter()
        .filter(|record| category.matches(field(*record)))
        .collect()
}

// =============================================================================
// Pagination
// =============================================================================

/// Pagination metadata for the table footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Page actually shown, after clamping.
    pub page: usize,
    pub page_size: usize,
    /// Never below 1, even for an empty table.
    pub total_pages: usize,
    /// Records after filtering.
    pub total_count: usize,
    /// 1-based position of the first shown record; 0 when empty.
    pub range_start: usize,
    /// 1-based position of the last shown record; 0 when empty.
    pub range_end: usize,
}

impl PageMeta {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    /// Page buttons `1..=total_pages`.
    pub fn page_numbers(&self) -> Vec<usize> {
        (1..=self.total_pages).collect()
    }

    /// Footer text, e.g. `Menampilkan 21 - 23 dari 23 order`.
    pub fn range_label(&self, noun: &str) -> String {
        format!("Menampilkan {} {}", range_text(self), noun)
    }
}

/// `"{start} - {end} dari {total}"`; an empty table reads `0 - 0 dari 0`.
pub fn range_text(meta: &PageMeta) -> String {
    format!(
        "{} - {} dari {}",
        meta.range_start, meta.range_end, meta.total_count
    )
}

/// One visible page plus its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

/// `max(1, ceil(count / page_size))`.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size).max(1)
}

/// Slices one page out of `records`.
///
/// `page` is clamped to `[1, total_pages]` first, so page 0 shows page 1 and
/// a page past the end shows the last page.
///
/// ## Errors
/// `Validation` when `page_size` is zero.
pub fn paginate<T: Clone>(records: &[T], page: usize, page_size: usize) -> CoreResult<Page<T>> {
    validate_page_size(page_size)?;

    let total_count = records.len();
    let total_pages = total_pages(total_count, page_size);
    let page = page.clamp(1, total_pages);

    let start = ((page - 1) * page_size).min(total_count);
    let end = (start + page_size).min(total_count);

    let (range_start, range_end) = if total_count == 0 {
        (0, 0)
    } else {
        (start + 1, end)
    };

    Ok(Page {
        items: records[start..end].to_vec(),
        meta: PageMeta {
            page,
            page_size,
            total_pages,
            total_count,
            range_start,
            range_end,
        },
    })
}

// =============================================================================
// Full Pipeline
// =============================================================================

/// Text filter, then category filter, then paginate.
///
/// A category filter on a schema without a category field is ignored.
pub fn run_pipeline<'a, T: 'static>(
    records: &'a [T],
    schema: &RecordSchema<T>,
    filter: &FilterState,
    page: usize,
    page_size: usize,
) -> CoreResult<Page<&'a T>> {
    let matched = apply_text_filter(records, &filter.query, schema.search_fields);

    let matched = match schema.category_field {
        Some(field) => apply_category_filter(matched, &filter.category, field),
        None => {
            if !filter.category.is_all() {
                debug!(entity = schema.noun, category = %filter.category, "Table has no category field, ignoring filter");
            }
            matched
        }
    };

    let page = paginate(&matched, page, page_size)?;

    debug!(
        entity = schema.noun,
        total = records.len(),
        matched = page.meta.total_count,
        page = page.meta.page,
        total_pages = page.meta.total_pages,
        "Table pipeline run"
    );

    Ok(page)
}

// =============================================================================
// Unit Tests
// =============================================================================
