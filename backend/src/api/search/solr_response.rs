//! Read interface over a raw Solr select response.

use common::{
    search_const::DEFAULT_PER_PAGE,
    search_result::{FacetField, FacetItem, PaginationInfo},
    solr_document::SolrDocument,
};

use crate::db_utils::solr_utils::{RawSolrResponse, RawSolrResultSet};

/// What the presenter and the JSON assembler need from a search response.
pub trait SearchResponse {
    fn documents(&self) -> &[SolrDocument];
    fn facets(&self) -> &[FacetField];
    fn pagination(&self) -> PaginationInfo;
    fn total(&self) -> u64;
}

#[derive(Debug, Clone)]
pub struct SolrResponse {
    raw: RawSolrResponse,
    facets: Vec<FacetField>,
    rows: u64,
}

fn facet_value_to_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Facet items from Solr's flat `[value, count, value, count, ...]` list.
fn parse_flat_facet_items(flat: &[serde_json::Value]) -> Vec<FacetItem> {
    flat.chunks_exact(2)
        .filter_map(|pair| {
            let value = facet_value_to_string(&pair[0])?;
            let hits = pair[1].as_u64()?;
            Some(FacetItem::new(value, hits))
        })
        .collect()
}

fn params_rows(raw: &RawSolrResponse) -> Option<u64> {
    match raw.response_header.params.get("rows")? {
        serde_json::Value::String(s) => s.parse().ok(),
        serde_json::Value::Number(n) => n.as_u64(),
        _ => None,
    }
}

impl SolrResponse {
    /// `rows_hint` is the page size that was requested; Solr only echoes it
    /// back when `echoParams` allows.
    pub fn new(raw: RawSolrResponse, rows_hint: u64) -> Self {
        let facets = raw
            .facet_counts
            .as_ref()
            .map(|counts| {
                counts
                    .facet_fields
                    .iter()
                    .map(|(name, flat)| FacetField::new(name.clone(), parse_flat_facet_items(flat)))
                    .collect()
            })
            .unwrap_or_default();
        let rows = params_rows(&raw).filter(|r| *r > 0).unwrap_or(if rows_hint > 0 { rows_hint } else { DEFAULT_PER_PAGE });
        Self { raw, facets, rows }
    }

    pub fn rows(&self) -> u64 {
        self.rows
    }

    pub fn facet_by_name(&self, name: &str) -> Option<&FacetField> {
        self.facets.iter().find(|f| f.name == name)
    }

    /// Documents Solr's More Like This component returned for `id`.
    pub fn more_like_this(&self, id: &str) -> Vec<SolrDocument> {
        let Some(mlt) = &self.raw.more_like_this else {
            return vec![];
        };
        let result_set = match mlt {
            serde_json::Value::Object(map) => map.get(id).cloned(),
            serde_json::Value::Array(flat) => flat
                .chunks_exact(2)
                .find(|pair| pair[0].as_str() == Some(id))
                .map(|pair| pair[1].clone()),
            _ => None,
        };
        result_set
            .and_then(|value| serde_json::from_value::<RawSolrResultSet>(value).ok())
            .map(|set| set.docs)
            .unwrap_or_default()
    }

    pub fn into_documents(self) -> Vec<SolrDocument> {
        self.raw.response.docs
    }
}

impl SearchResponse for SolrResponse {
    fn documents(&self) -> &[SolrDocument] {
        &self.raw.response.docs
    }

    fn facets(&self) -> &[FacetField] {
        &self.facets
    }

    fn pagination(&self) -> PaginationInfo {
        PaginationInfo::from_counters(self.raw.response.num_found, self.raw.response.start, self.rows)
    }

    fn total(&self) -> u64 {
        self.raw.response.num_found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawSolrResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn reads_documents_facets_and_pages() {
        let response = SolrResponse::new(
            raw(json!({
                "responseHeader": {"params": {"rows": "2"}},
                "response": {"numFound": 5, "start": 2, "docs": [{"id": "a"}, {"id": "b"}]},
                "facet_counts": {"facet_fields": {"format": ["Book", 30, "Article", 12], "pub_date_ssim": [1999, 4]}}
            })),
            10,
        );
        assert_eq!(response.rows(), 2);
        assert_eq!(response.documents().iter().map(|d| d.id.as_str()).collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(response.total(), 5);
        assert_eq!(response.pagination(), PaginationInfo::new(2, 3));

        let format = response.facet_by_name("format").unwrap();
        assert_eq!(format.items, vec![FacetItem::new("Book", 30), FacetItem::new("Article", 12)]);
        assert_eq!(response.facet_by_name("pub_date_ssim").unwrap().items, vec![FacetItem::new("1999", 4)]);
    }

    #[test]
    fn malformed_facet_pairs_are_skipped() {
        let response = SolrResponse::new(
            raw(json!({"facet_counts": {"facet_fields": {"format": ["Book", "many", "Map", 2, "Dangling"]}}})),
            10,
        );
        assert_eq!(response.facet_by_name("format").unwrap().items, vec![FacetItem::new("Map", 2)]);
    }

    #[test]
    fn missing_sections_yield_empty_results() {
        let response = SolrResponse::new(RawSolrResponse::default(), 0);
        assert!(response.documents().is_empty());
        assert!(response.facets().is_empty());
        assert_eq!(response.rows(), DEFAULT_PER_PAGE);
        assert_eq!(response.pagination(), PaginationInfo::new(1, 1));
        assert!(response.more_like_this("x").is_empty());
    }

    #[test]
    fn more_like_this_accepts_map_and_flat_layouts() {
        let related = json!({"numFound": 1, "start": 0, "docs": [{"id": "2", "title_tsim": "Title of MLT Document"}]});
        let as_map = SolrResponse::new(raw(json!({"moreLikeThis": {"1": related.clone()}})), 10);
        let as_flat = SolrResponse::new(raw(json!({"moreLikeThis": ["1", related]})), 10);
        for response in [as_map, as_flat] {
            let docs = response.more_like_this("1");
            assert_eq!(docs.len(), 1);
            assert_eq!(docs[0].first("title_tsim").as_deref(), Some("Title of MLT Document"));
            assert!(response.more_like_this("3").is_empty());
        }
    }

    #[test]
    fn irregular_documents_do_not_fail_the_response() {
        let response = SolrResponse::new(
            raw(json!({
                "response": {"numFound": 3, "start": 0, "docs": [
                    {"id": "1", "note": null},
                    {"id": 2, "title_tsim": "Parent", "_childDocuments_": [{"id": "2-a", "title_tsim": "Child"}]},
                    {"id": "3", "parts": {"id": "3-a"}}
                ]}
            })),
            10,
        );
        let ids = response.documents().iter().map(|d| d.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(response.documents()[1].first("title_tsim").as_deref(), Some("Parent"));
        assert_eq!(response.documents()[0].first("note"), None);
    }
}
