use serde::{Deserialize, Serialize};

use crate::{search_query::SearchQuery, solr_document::SolrDocument};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetItem {
    pub value: String,
    pub hits: u64,
    pub label: String,
}

impl FacetItem {
    pub fn new(value: impl Into<String>, hits: u64) -> Self {
        let value = value.into();
        Self { label: value.clone(), value, hits }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetField {
    pub name: String,
    pub label: Option<String>,
    pub items: Vec<FacetItem>,
}

impl FacetField {
    pub fn new(name: impl Into<String>, items: Vec<FacetItem>) -> Self {
        Self { name: name.into(), label: None, items }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub current_page: u64,
    pub next_page: Option<u64>,
    pub prev_page: Option<u64>,
    pub total_pages: u64,
}

impl PaginationInfo {
    /// Pagination for `current_page` of `total_pages`; both are clamped to at least 1.
    pub fn new(current_page: u64, total_pages: u64) -> Self {
        let total_pages = total_pages.max(1);
        let current_page = current_page.max(1);
        Self {
            current_page,
            next_page: if current_page < total_pages { Some(current_page + 1) } else { None },
            prev_page: if current_page > 1 { Some(current_page - 1) } else { None },
            total_pages,
        }
    }

    /// Pagination from the index counters: hit count, offset of the first row, page size.
    pub fn from_counters(num_found: u64, start: u64, rows: u64) -> Self {
        let rows = rows.max(1);
        Self::new(start / rows + 1, num_found.div_ceil(rows))
    }
}

/// One page of results, as handed to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultDocuments {
    pub query: SearchQuery,
    pub documents: Vec<SolrDocument>,
    pub facets: Vec<FacetField>,
    pub pagination: PaginationInfo,
    pub num_found: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentWithRelated {
    pub document: SolrDocument,
    pub more_like_this: Vec<SolrDocument>,
}
