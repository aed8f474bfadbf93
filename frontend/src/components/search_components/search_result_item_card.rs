//! Search result item card component.

use dioxus::prelude::*;
use common::{catalog_config::CatalogConfig, solr_document::SolrDocument};

use crate::routes::Route;

#[component]
pub fn SearchResultItemCard(document: ReadSignal<SolrDocument>, counter: u64, config: ReadSignal<CatalogConfig>) -> Element {
    let config = config.read().clone();
    let document = document.read().clone();
    let title = document.title(&config);
    let format = document.format(&config);
    let fields = config
        .index_fields
        .iter()
        .filter_map(|field| {
            let values = document.values(&field.field);
            if values.is_empty() { None } else { Some((field.label.clone(), values.join(", "))) }
        })
        .collect::<Vec<_>>();

    rsx! {
        article {
            class: "document document-position-{counter}",
            style: "
                display: flex;
                flex-direction: column;
                gap: 7px;
                background: white;
                border: 3px solid #AAAAAA33;
                border-radius: 8px;
                padding: 12px 16px;
                margin: 8px 8px;
                box-sizing: border-box;
            ",
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 12px;
                ",
                span {
                    class: "document-counter",
                    style: "font-size: 20px; font-weight: 200; color: rgba(0, 0, 0, 0.5);",
                    "{counter}."
                }
                h3 {
                    class: "index_title",
                    style: "font-size: 20px; font-weight: 400; margin: 0; min-width: 0; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                    a { href: Route::ShowPage { id: document.id.clone() }.to_string(), "{title}" }
                }
                div { style: "flex: 1 1 auto;" }
                if let Some(format) = format {
                    span {
                        style: "font-size: 16px; font-style: italic; color: rgba(0, 0, 0, 0.5);",
                        "{format}"
                    }
                }
            }
            dl {
                class: "document-metadata",
                style: "
                    display: grid;
                    grid-template-columns: max-content 1fr;
                    gap: 4px 12px;
                    margin: 0;
                    font-size: 16px;
                ",
                for (label, value) in fields {
                    dt { key: "{label}", style: "font-weight: 600;", "{label}:" }
                    dd { style: "margin: 0;", "{value}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_links_the_title_to_the_show_page() {
        let config = CatalogConfig::new("title_tsim").add_index_field("author_tsim", "Author");
        let document = SolrDocument::new("123").with_field("title_tsim", "Book1").with_field("author_tsim", "Julie");
        let html = dioxus_ssr::render_element(rsx! { SearchResultItemCard { document, counter: 11, config } });
        assert!(html.contains("11."));
        assert!(html.contains("href=\"/catalog/123\""));
        assert!(html.contains("Book1"));
        assert!(html.contains("Author:"));
        assert!(html.contains("Julie"));
    }
}
