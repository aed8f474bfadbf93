//! Client API calls for catalog endpoints.

use common::{search_query::SearchQuery, search_result::{DocumentWithRelated, SearchResultDocuments}};
use dioxus::prelude::*;


#[server]
pub async fn search_catalog(input: SearchQuery) -> Result<SearchResultDocuments, ServerFnError> {
    let solr = backend::db_utils::solr_utils::SolrConfig::from_env();
    let config = common::catalog_config::CatalogConfig::default();
    let x = backend::api::search::search_for_results(&solr, &config, input).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn get_document(id: String) -> Result<DocumentWithRelated, ServerFnError> {
    let solr = backend::db_utils::solr_utils::SolrConfig::from_env();
    let config = common::catalog_config::CatalogConfig::default();
    let x = backend::api::documents::get_document(&solr, &config, &id).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
