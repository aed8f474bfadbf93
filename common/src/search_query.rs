//! Shared search query models and helpers.
//!
//! A query travels in the URL as `q=..&f[field][]=value&per_page=..&page=..`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Selected facet values per facet field, in selection order.
pub type SelectedFacets = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchQuery {
    pub q: String,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub facet_filters: SelectedFacets,
}

/// Field name from `f[field]`, `f[field][]` or `f[field][3]`.
fn parse_filter_key(key: &str) -> Option<&str> {
    let inner = key.strip_prefix("f[")?;
    let close = inner.find(']')?;
    let (field, rest) = (&inner[..close], &inner[close + 1..]);
    if field.is_empty() {
        return None;
    }
    let index_ok = rest.is_empty()
        || rest
            .strip_prefix('[')
            .and_then(|r| r.strip_suffix(']'))
            .map(|idx| idx.chars().all(|c| c.is_ascii_digit()))
            .unwrap_or(false);
    if index_ok { Some(field) } else { None }
}

fn parse_positive(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().filter(|n| *n > 0)
}

impl SearchQuery {
    pub fn from_query_string(query_string: &str) -> Self {
        let query_string = query_string.strip_prefix('?').unwrap_or(query_string);
        let mut query = SearchQuery::default();
        for (key, value) in form_urlencoded::parse(query_string.as_bytes()) {
            match key.as_ref() {
                "q" => query.q = value.into_owned(),
                "page" => query.page = parse_positive(&value),
                "per_page" => query.per_page = parse_positive(&value),
                other => {
                    if let Some(field) = parse_filter_key(other) {
                        query.facet_filters.entry(field.to_string()).or_default().push(value.into_owned());
                    }
                }
            }
        }
        query
    }

    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if !self.q.is_empty() {
            pairs.push(("q".to_string(), self.q.clone()));
        }
        for (field, values) in &self.facet_filters {
            for value in values {
                pairs.push((format!("f[{field}][]"), value.clone()));
            }
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page".to_string(), per_page.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        pairs
    }

    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.to_query_pairs() {
            serializer.append_pair(&key, &value);
        }
        serializer.finish()
    }

    /// `base` with this query appended; `base` alone when there is nothing to append.
    pub fn url_for(&self, base: &str) -> String {
        let query_string = self.to_query_string();
        if query_string.is_empty() {
            base.to_string()
        } else {
            format!("{base}?{query_string}")
        }
    }

    pub fn current_page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn with_page(&self, page: u64) -> Self {
        let mut query = self.clone();
        query.page = Some(page);
        query
    }

    pub fn has_facet_value(&self, field: &str, value: &str) -> bool {
        self.facet_filters.get(field).map(|values| values.iter().any(|v| v == value)).unwrap_or(false)
    }

    /// Copy of the query with `value` selected for `field`, back on the first page.
    pub fn with_facet_value(&self, field: &str, value: &str) -> Self {
        let mut query = self.clone();
        query.page = None;
        let values = query.facet_filters.entry(field.to_string()).or_default();
        if !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }
        query
    }

    /// Copy of the query with every occurrence of `value` removed from `field`.
    pub fn without_facet_value(&self, field: &str, value: &str) -> Self {
        let mut query = self.clone();
        query.page = None;
        if let Some(values) = query.facet_filters.get_mut(field) {
            values.retain(|v| v != value);
            if values.is_empty() {
                query.facet_filters.remove(field);
            }
        }
        query
    }
}
