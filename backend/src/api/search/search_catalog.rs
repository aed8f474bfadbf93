//! Catalog search: runs a query against Solr and shapes the result.

use common::{catalog_config::CatalogConfig, search_query::SearchQuery, search_result::SearchResultDocuments};
use tracing::info;

use crate::api::search::{json_presenter::JsonPresenter, solr_response::{SearchResponse, SolrResponse}};
use crate::db_utils::solr_utils::{SolrConfig, build_search_params, solr_select};

pub async fn search_catalog(solr: &SolrConfig, config: &CatalogConfig, query: &SearchQuery) -> anyhow::Result<SolrResponse> {
    let params = build_search_params(query, config);
    let raw = solr_select(solr, &params).await?;
    let response = SolrResponse::new(raw, config.rows_for(query.per_page));
    info!("search_catalog: q={:?} page={} found={}", query.q, query.current_page(), response.total());
    Ok(response)
}

/// One page of results with the configured facets, for the UI.
pub async fn search_for_results(solr: &SolrConfig, config: &CatalogConfig, query: SearchQuery) -> anyhow::Result<SearchResultDocuments> {
    let response = search_catalog(solr, config, &query).await?;
    let presenter = JsonPresenter::new(&response, config);
    let facets = presenter.search_facets();
    let pagination = presenter.pagination_info();
    let num_found = response.total();
    Ok(SearchResultDocuments {
        query,
        documents: response.into_documents(),
        facets,
        pagination,
        num_found,
    })
}
