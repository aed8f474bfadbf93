use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::json_api::DocumentJsonResponse;
use tracing::info;

use crate::api::documents::{document_json::render_document_json, get_document};
use crate::api::search::catalog_urls::CatalogUrls;
use crate::server_extra::CatalogState;

async fn _document_json(state: &CatalogState, id: String) -> anyhow::Result<Json<DocumentJsonResponse>> {
    info!("document_json: {}", id);
    let document = get_document(&state.solr, &state.config, &id).await?;
    let urls = CatalogUrls::for_json_api(&state.base_url);
    Ok(Json(render_document_json(&document, &urls, &state.config)))
}

pub async fn document_json(State(state): State<Arc<CatalogState>>, Path(id): Path<String>) -> Response {
    match _document_json(&state, id).await {
        Ok(response) => response.into_response(),
        Err(e) => {
            tracing::error!("document_json: request failed: {:#?}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response();
        }
    }
}
