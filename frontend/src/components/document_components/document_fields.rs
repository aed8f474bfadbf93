//! Field list for a single document.

use common::{catalog_config::CatalogConfig, solr_document::SolrDocument};
use dioxus::prelude::*;

#[component]
pub fn DocumentFields(document: ReadSignal<SolrDocument>, config: ReadSignal<CatalogConfig>) -> Element {
    let rows = config
        .read()
        .show_fields
        .iter()
        .filter_map(|field| {
            let values = document.read().values(&field.field);
            if values.is_empty() { None } else { Some((field.label.clone(), values.join(", "))) }
        })
        .collect::<Vec<_>>();

    rsx! {
        dl {
            class: "document-metadata",
            style: "
                display: grid;
                grid-template-columns: max-content 1fr;
                gap: 6px 16px;
                font-size: 16px;
            ",
            for (label, value) in rows {
                dt { key: "{label}", style: "font-weight: 600;", "{label}:" }
                dd { style: "margin: 0;", "{value}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_configured_fields_present_on_the_document() {
        let config = CatalogConfig::new("title_tsim").add_show_field("author_tsim", "Author").add_show_field("isbn_ssim", "ISBN");
        let document = SolrDocument::new("1").with_field("author_tsim", vec!["Julie", "Rosie"]);
        let html = dioxus_ssr::render_element(rsx! { DocumentFields { document, config } });
        assert!(html.contains("Author:"));
        assert!(html.contains("Julie, Rosie"));
        assert!(!html.contains("ISBN"));
    }
}
