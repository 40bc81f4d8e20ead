//! # Bulk Selection
//!
//! Checkbox state for bulk actions ("Cetak (3)") on the order table.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  [x] header checkbox ──► toggle_all(current page ids)                  │
//! │                                                                         │
//! │     selection == page ids ?  ── yes ──► clear                          │
//! │                              └─ no ───► selection := page ids          │
//! │                                                                         │
//! │  [ ] row checkbox ──────► toggle(id)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! "Select all" never reaches ids on other pages.

use std::collections::BTreeSet;

use crate::table::Record;

/// Set of selected record ids.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Selection::default()
    }

    /// Flips one row.
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    /// Header checkbox over the ids of the page currently shown.
    pub fn toggle_all<'a, I>(&mut self, page_ids: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let page: BTreeSet<String> = page_ids.into_iter().map(str::to_string).collect();

        if self.ids == page {
            self.ids.clear();
        } else {
            self.ids = page;
        }
    }

    /// Header checkbox over page records.
    pub fn toggle_all_records<T: Record>(&mut self, page: &[&T]) {
        self.toggle_all(page.iter().map(|record| record.id()));
    }

    /// Whether the header checkbox shows as checked.
    pub fn is_page_selected<'a, I>(&self, page_ids: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let page: BTreeSet<&str> = page_ids.into_iter().collect();
        !page.is_empty() && page.len() == self.ids.len() && page.iter().all(|id| self.ids.contains(*id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Selected ids in sorted order, for print/delete requests.
    pub fn ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }
}
