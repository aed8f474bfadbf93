//! Facet sidebar: one block per configured facet, with apply/remove links.

use common::{catalog_config::CatalogConfig, search_query::SearchQuery, search_result::FacetField};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}};

use crate::routes::Route;

#[derive(Debug, Clone, PartialEq)]
struct FacetItemView {
    label: String,
    hits: u64,
    selected: bool,
    href: String,
}

fn facet_item_views(facet: &FacetField, query: &SearchQuery) -> Vec<FacetItemView> {
    facet
        .items
        .iter()
        .map(|item| {
            let selected = query.has_facet_value(&facet.name, &item.value);
            let target = if selected {
                query.without_facet_value(&facet.name, &item.value)
            } else {
                query.with_facet_value(&facet.name, &item.value)
            };
            FacetItemView {
                label: item.label.clone(),
                hits: item.hits,
                selected,
                href: Route::search_page_from_query(target).to_string(),
            }
        })
        .collect()
}

#[component]
pub fn FacetSidebar(facets: ReadSignal<Vec<FacetField>>, query: ReadSignal<SearchQuery>, config: ReadSignal<CatalogConfig>) -> Element {
    let config = config.read().clone();
    let blocks = facets
        .read()
        .iter()
        .filter_map(|facet| {
            let facet_config = config.facet_config(&facet.name)?;
            Some((facet.name.clone(), facet_config.label.clone(), facet_item_views(facet, &query.read())))
        })
        .collect::<Vec<_>>();

    rsx! {
        div {
            id: "facets",
            class: "facets sidenav",
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                padding: 10px;
                min-width: 240px;
            ",
            h2 {
                style: "font-size: 20px; font-weight: 400; margin: 0;",
                "Limit your search"
            }
            for (name, label, items) in blocks {
                div {
                    key: "{name}",
                    class: "card facet-limit blacklight-{name}",
                    style: "
                        border: 1px solid rgba(0,0,0,0.2);
                        border-radius: 8px;
                        background: white;
                        padding: 8px 12px;
                    ",
                    h3 {
                        class: "facet-field-heading",
                        style: "font-size: 16px; font-weight: 500; margin: 4px 0 8px 0;",
                        "{label}"
                    }
                    ul {
                        class: "facet-values list-unstyled",
                        style: "list-style: none; padding: 0; margin: 0;",
                        for item in items {
                            FacetItemRow { key: "{item.label}-{item.hits}", item }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FacetItemRow(item: FacetItemView) -> Element {
    rsx! {
        li {
            class: "x-facet-list-item",
            style: "
                display: flex;
                flex-direction: row;
                gap: 8px;
                padding: 2px;
                align-items: center;
            ",
            if item.selected {
                Icon { icon: MdCheckBox, style: "width: 20px; height: 20px; color: rgb(28, 33, 45); flex-shrink: 0;" }
                span { class: "facet-label selected", style: "font-weight: 600;", "{item.label}" }
                a { class: "remove", href: "{item.href}", "[remove]" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 20px; height: 20px; color: black; flex-shrink: 0;" }
                a { class: "facet-select", href: "{item.href}", "{item.label}" }
            }
            div { style: "flex: 1 1 auto;" }
            span { class: "facet-count", style: "color: rgba(28, 33, 45, 0.7);", "{item.hits}" }
        }
    }
}
