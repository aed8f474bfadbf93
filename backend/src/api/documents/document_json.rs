//! JSON rendering of a single document.

use common::{catalog_config::CatalogConfig, json_api::DocumentJsonResponse, search_result::DocumentWithRelated};

use crate::api::search::{catalog_urls::CatalogUrls, index_json::document_resource};

/// The document with its show fields; related documents go to `included`
/// with their list fields.
pub fn render_document_json(document: &DocumentWithRelated, urls: &CatalogUrls, config: &CatalogConfig) -> DocumentJsonResponse {
    DocumentJsonResponse {
        data: document_resource(&document.document, &config.show_fields, urls, config),
        included: document
            .more_like_this
            .iter()
            .map(|related| document_resource(related, &config.index_fields, urls, config))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::solr_document::SolrDocument;
    use serde_json::json;

    #[test]
    fn renders_document_and_related() {
        let config = CatalogConfig::new("title_tsim").add_show_field("author_tsim", "Author");
        let document = DocumentWithRelated {
            document: SolrDocument::new("1").with_field("title_tsim", "abc").with_field("author_tsim", "Julie").with_field("format", "Book"),
            more_like_this: vec![SolrDocument::new("2").with_field("title_tsim", "Title of MLT Document")],
        };
        let json = serde_json::to_value(render_document_json(&document, &CatalogUrls::for_base("http://test.host"), &config)).unwrap();
        assert_eq!(
            json,
            json!({
                "data": {
                    "id": "1",
                    "type": "Book",
                    "attributes": {"title": "abc", "author_tsim": "Julie"},
                    "links": {"self": "http://test.host/catalog/1"}
                },
                "included": [{
                    "id": "2",
                    "type": null,
                    "attributes": {"title": "Title of MLT Document"},
                    "links": {"self": "http://test.host/catalog/2"}
                }]
            })
        );
    }
}
