//! Show page sidebar listing More Like This documents.

use common::{catalog_config::CatalogConfig, solr_document::SolrDocument};
use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn ShowSidebar(more_like_this: ReadSignal<Vec<SolrDocument>>, config: ReadSignal<CatalogConfig>) -> Element {
    let config = config.read().clone();
    let related = more_like_this
        .read()
        .iter()
        .map(|doc| (doc.id.clone(), doc.title(&config)))
        .collect::<Vec<_>>();
    if related.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "card more-like-this",
            style: "
                border: 1px solid rgba(0,0,0,0.2);
                border-radius: 8px;
                background: white;
                padding: 8px 12px;
                min-width: 240px;
            ",
            h2 {
                class: "card-header",
                style: "font-size: 18px; font-weight: 500; margin: 4px 0 8px 0;",
                "More Like This"
            }
            ul {
                style: "list-style: none; padding: 0; margin: 0;",
                for (id, title) in related {
                    li {
                        key: "{id}",
                        style: "padding: 4px 0;",
                        a { href: Route::ShowPage { id: id.clone() }.to_string(), "{title}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_more_like_this_titles() {
        let config = CatalogConfig::new("title_tsim");
        let related = vec![SolrDocument::new("2").with_field("title_tsim", "Title of MLT Document")];
        let html = dioxus_ssr::render_element(rsx! { ShowSidebar { more_like_this: related, config } });
        assert!(html.contains("More Like This"));
        assert!(html.contains("Title of MLT Document"));
        assert!(html.contains("/catalog/2"));
    }

    #[test]
    fn untitled_related_documents_show_their_id() {
        let config = CatalogConfig::new("title_tsim");
        let related = vec![SolrDocument::new("2008308175").with_field("title_s", "abc")];
        let html = dioxus_ssr::render_element(rsx! { ShowSidebar { more_like_this: related, config } });
        assert!(html.contains("2008308175"));
        assert!(!html.contains("abc"));
    }

    #[test]
    fn nothing_rendered_without_related_documents() {
        let html = dioxus_ssr::render_element(rsx! {
            ShowSidebar { more_like_this: Vec::<SolrDocument>::new(), config: CatalogConfig::new("title_tsim") }
        });
        assert!(!html.contains("More Like This"));
    }
}
