//! Derived view over a search response used when rendering JSON.

use common::{catalog_config::CatalogConfig, search_result::{FacetField, PaginationInfo}, solr_document::SolrDocument};

use crate::api::search::solr_response::SearchResponse;

pub struct JsonPresenter<'a, R: SearchResponse + ?Sized> {
    response: &'a R,
    config: &'a CatalogConfig,
}

impl<'a, R: SearchResponse + ?Sized> JsonPresenter<'a, R> {
    pub fn new(response: &'a R, config: &'a CatalogConfig) -> Self {
        Self { response, config }
    }

    pub fn config(&self) -> &CatalogConfig {
        self.config
    }

    pub fn documents(&self) -> &[SolrDocument] {
        self.response.documents()
    }

    pub fn pagination_info(&self) -> PaginationInfo {
        self.response.pagination()
    }

    /// Configured facets present in the response, in configuration order.
    pub fn search_facets(&self) -> Vec<FacetField> {
        let facets = self.response.facets();
        self.config
            .facet_fields
            .iter()
            .filter_map(|facet_config| facets.iter().find(|f| f.name == facet_config.field))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::search_result::FacetItem;

    struct StubResponse {
        documents: Vec<SolrDocument>,
        facets: Vec<FacetField>,
        pagination: PaginationInfo,
    }

    impl SearchResponse for StubResponse {
        fn documents(&self) -> &[SolrDocument] {
            &self.documents
        }
        fn facets(&self) -> &[FacetField] {
            &self.facets
        }
        fn pagination(&self) -> PaginationInfo {
            self.pagination
        }
        fn total(&self) -> u64 {
            self.documents.len() as u64
        }
    }

    #[test]
    fn search_facets_follow_configuration_order_and_skip_unconfigured() {
        let config = CatalogConfig::new("title_tsim").add_facet_field("language_ssim", "Language").add_facet_field("format", "Format");
        let response = StubResponse {
            documents: vec![],
            facets: vec![
                FacetField::new("format", vec![FacetItem::new("Book", 30)]),
                FacetField::new("subject_ssim", vec![FacetItem::new("Rome", 2)]),
                FacetField::new("language_ssim", vec![FacetItem::new("Latin", 1)]),
            ],
            pagination: PaginationInfo::new(1, 1),
        };
        let presenter = JsonPresenter::new(&response, &config);
        let names = presenter.search_facets().into_iter().map(|f| f.name).collect::<Vec<_>>();
        assert_eq!(names, vec!["language_ssim", "format"]);
    }

    #[test]
    fn configured_facets_missing_from_response_are_not_invented() {
        let config = CatalogConfig::new("title_tsim").add_facet_field("format", "Format");
        let response = StubResponse { documents: vec![], facets: vec![], pagination: PaginationInfo::new(1, 1) };
        assert!(JsonPresenter::new(&response, &config).search_facets().is_empty());
    }

    #[test]
    fn pagination_is_passed_through() {
        let config = CatalogConfig::new("title_tsim");
        let response = StubResponse { documents: vec![], facets: vec![], pagination: PaginationInfo::new(2, 3) };
        let pages = JsonPresenter::new(&response, &config).pagination_info();
        assert_eq!((pages.current_page, pages.next_page, pages.prev_page, pages.total_pages), (2, Some(3), Some(1), 3));
    }
}
