use std::sync::Arc;

use axum::{
    Json,
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::{json_api::IndexJsonResponse, search_query::SearchQuery};
use tracing::info;

use crate::api::search::{
    catalog_urls::CatalogUrls, index_json::render_presenter_json, json_presenter::JsonPresenter, search_catalog,
};
use crate::server_extra::CatalogState;

async fn _catalog_json(state: &CatalogState, raw_query: Option<String>) -> anyhow::Result<Json<IndexJsonResponse>> {
    let query = SearchQuery::from_query_string(raw_query.as_deref().unwrap_or(""));
    info!("catalog_json: {:?}", query);

    let response = search_catalog(&state.solr, &state.config, &query).await?;
    let presenter = JsonPresenter::new(&response, &state.config);
    let urls = CatalogUrls::for_json_api(&state.base_url);
    Ok(Json(render_presenter_json(&presenter, &urls, &query)))
}

pub async fn catalog_json(State(state): State<Arc<CatalogState>>, RawQuery(raw_query): RawQuery) -> Response {
    match _catalog_json(&state, raw_query).await {
        Ok(response) => response.into_response(),
        Err(e) => {
            tracing::error!("catalog_json: request failed: {:#?}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response();
        }
    }
}
