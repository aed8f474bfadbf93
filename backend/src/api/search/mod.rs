//! Search API: Solr response adapter, presenter and JSON rendering.

pub mod solr_response;
pub mod json_presenter;
pub mod catalog_urls;
pub mod index_json;

mod search_catalog;
pub use search_catalog::{search_catalog, search_for_results};
