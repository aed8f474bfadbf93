use dioxus::prelude::*;

use common::{catalog_config::CatalogConfig, search_query::SearchQuery};
use crate::{
    api::catalog_api::search_catalog,
    components::{
        error_boundary::ComponentErrorDisplay,
        search_components::{
            facet_sidebar::FacetSidebar, pagination_controls::PaginationControls,
            search_input_top_bar::SearchInputTopBar, search_result_item_card::SearchResultItemCard,
        },
        loading_indicator::LoadingIndicator,
    },
    data_definitions::url_param::UrlParam,
};

fn title_ellipsis(title: String) -> String {
    if title.chars().count() > 20 {
        title.chars().take(18).collect::<String>() + "..."
    } else {
        title
    }
}

/// Search results page
#[component]
pub fn SearchPage(query: UrlParam<SearchQuery>) -> Element {
    rsx! {
        Title { "Blacklight Search: {title_ellipsis(query.0.q.clone())}" }
        SearchPageRootComponent { query: query.0.clone() }
    }
}

#[component]
pub(crate) fn SearchPageRootComponent(query: ReadSignal<SearchQuery>) -> Element {
    rsx! {
        div {
            id: "x-search-page-root-component",
            style: "
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            ",
            div {
                id: "x-search-input-top-bar",
                style: "
                    border-bottom: 1px solid rgb(164, 164, 164);
                    background-color: #F8FCFF;
                    flex-shrink: 0;
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    height: 76px;
                    width: 100%;
                ",
                SearchInputTopBar { original_query: query }
            }
            SearchResultsView { query }
        }
    }
}

#[component]
fn SearchResultsView(query: ReadSignal<SearchQuery>) -> Element {
    let config = CatalogConfig::default();
    let mut search_result = use_resource(move || {
        let q = query.read().clone();
        search_catalog(q)
    });
    // navigation keeps the component alive, so restart on every new query
    use_effect(move || {
        let _ = query.read();
        search_result.clear();
        search_result.restart();
    });

    let search_result = search_result.read();
    let search_result = match search_result.as_ref() {
        Some(Err(e)) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Some(Ok(s)) => s.clone(),
        None => return rsx! { LoadingIndicator { message: "Searching the catalog..." } },
    };
    let first_counter = (search_result.pagination.current_page - 1) * config.rows_for(query.read().per_page) + 1;

    rsx! {
        div {
            id: "x-search-results-bottom-space",
            style: "
                width: 100%;
                display: flex;
                flex-direction: row;
                flex-grow: 1;
                background-color: #ECEEF2;
            ",
            div {
                id: "sidebar",
                style: "width: 300px; flex-shrink: 0;",
                FacetSidebar { facets: search_result.facets.clone(), query, config: config.clone() }
            }
            div {
                id: "content",
                style: "flex-grow: 1; min-width: 400px; padding: 7px;",
                div {
                    class: "page-info",
                    style: "padding: 8px; font-size: 16px; color: rgba(0, 0, 0, 0.7);",
                    "{search_result.num_found} results"
                }
                if search_result.documents.is_empty() {
                    div { style: "padding: 20px; font-size: 18px;", "No results found for your search" }
                }
                div {
                    id: "documents",
                    for (i, document) in search_result.documents.iter().cloned().enumerate() {
                        SearchResultItemCard {
                            key: "{document.id}",
                            document,
                            counter: first_counter + i as u64,
                            config: config.clone(),
                        }
                    }
                }
                PaginationControls { query, pagination: search_result.pagination }
            }
        }
    }
}
