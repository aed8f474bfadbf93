//! Extra HTTP routes served next to the UI: the catalog JSON API.

use std::sync::Arc;

use axum::{Router, routing::get};
use common::catalog_config::CatalogConfig;

use crate::{api::search::catalog_urls::CatalogUrls, db_utils::solr_utils::SolrConfig};

pub mod catalog_json;
pub mod document_json;

#[derive(Debug, Clone)]
pub struct CatalogState {
    pub solr: SolrConfig,
    pub config: CatalogConfig,
    /// Public base URL used for absolute links in responses.
    pub base_url: String,
}

impl CatalogState {
    pub fn from_env() -> Self {
        Self {
            solr: SolrConfig::from_env(),
            config: CatalogConfig::default(),
            base_url: CatalogUrls::base_url_from_env(),
        }
    }
}

pub fn json_api_router(state: CatalogState) -> Router {
    Router::new()
        .route("/catalog.json", get(catalog_json::catalog_json))
        .route("/catalog.json/{id}", get(document_json::document_json))
        .with_state(Arc::new(state))
}
