//! Single document lookup with its More Like This neighbours.

use common::{catalog_config::CatalogConfig, search_result::DocumentWithRelated};
use tracing::info;

use crate::api::search::solr_response::SolrResponse;
use crate::db_utils::solr_utils::{SolrConfig, build_document_params, solr_select};

pub async fn get_document(solr: &SolrConfig, config: &CatalogConfig, id: &str) -> anyhow::Result<DocumentWithRelated> {
    let params = build_document_params(id, config);
    let raw = solr_select(solr, &params).await?;
    let response = SolrResponse::new(raw, 1);
    let more_like_this = response.more_like_this(id);
    let Some(document) = response.into_documents().into_iter().find(|doc| doc.id == id) else {
        anyhow::bail!("document not found: {}", id);
    };
    info!("get_document: {} ({} related)", id, more_like_this.len());
    Ok(DocumentWithRelated { document, more_like_this })
}
