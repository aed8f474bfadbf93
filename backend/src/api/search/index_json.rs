//! JSON rendering of a page of search results.

use std::collections::BTreeMap;

use common::{
    catalog_config::{CatalogConfig, DisplayFieldConfig},
    json_api::{
        DocumentResource, FACET_RESOURCE_TYPE, FacetAttributes, FacetItemAttributes, FacetItemLinks, FacetItemResource,
        FacetResource, IndexJsonResponse, IndexMeta, PageLinks, PageMeta, SelfLink,
    },
    search_query::SearchQuery,
    search_result::{FacetField, FacetItem, PaginationInfo},
    solr_document::{FieldValue, SolrDocument},
};

use crate::api::search::{catalog_urls::CatalogUrls, json_presenter::JsonPresenter, solr_response::SearchResponse};

/// `{id, type, attributes, links}` for one document. `fields` are copied into
/// the attributes when the document has them; `title` is always present.
pub fn document_resource(
    document: &SolrDocument,
    fields: &[DisplayFieldConfig],
    urls: &CatalogUrls,
    config: &CatalogConfig,
) -> DocumentResource {
    let mut attributes = BTreeMap::new();
    for field in fields {
        if let Some(value) = document.get(&field.field) {
            attributes.insert(field.field.clone(), value.clone());
        }
    }
    attributes.insert("title".to_string(), FieldValue::Text(document.title(config)));

    DocumentResource {
        id: document.id.clone(),
        resource_type: document.format(config),
        attributes,
        links: SelfLink { self_link: urls.document_url_for(&document.id) },
    }
}

fn page_links(pagination: &PaginationInfo, urls: &CatalogUrls, query: &SearchQuery) -> PageLinks {
    PageLinks {
        self_link: query.url_for(&urls.current_url),
        next: pagination.next_page.map(|page| query.with_page(page).url_for(&urls.current_url)),
        last: query.with_page(pagination.total_pages).url_for(&urls.current_url),
    }
}

fn facet_item_resource(field: &str, item: &FacetItem, urls: &CatalogUrls, query: &SearchQuery) -> FacetItemResource {
    let links = if query.has_facet_value(field, &item.value) {
        FacetItemLinks::Remove(query.without_facet_value(field, &item.value).url_for(&urls.search_action_url))
    } else {
        FacetItemLinks::Apply(query.with_facet_value(field, &item.value).url_for(&urls.search_action_url))
    };
    FacetItemResource {
        id: None,
        attributes: FacetItemAttributes { value: item.value.clone(), hits: item.hits, label: item.label.clone() },
        links,
    }
}

/// `None` for facet fields that have no configuration.
fn facet_resource(facet: &FacetField, urls: &CatalogUrls, query: &SearchQuery, config: &CatalogConfig) -> Option<FacetResource> {
    let facet_config = config.facet_config(&facet.name)?;
    let label = if facet_config.label.is_empty() {
        facet.label.clone().unwrap_or_else(|| facet.name.clone())
    } else {
        facet_config.label.clone()
    };
    Some(FacetResource {
        id: facet.name.clone(),
        resource_type: FACET_RESOURCE_TYPE.to_string(),
        attributes: FacetAttributes {
            label,
            items: facet.items.iter().map(|item| facet_item_resource(&facet.name, item, urls, query)).collect(),
        },
        links: SelfLink { self_link: urls.facet_url.clone() },
    })
}

pub fn render_index_json(
    documents: &[SolrDocument],
    pagination: &PaginationInfo,
    facets: &[FacetField],
    urls: &CatalogUrls,
    query: &SearchQuery,
    config: &CatalogConfig,
) -> IndexJsonResponse {
    IndexJsonResponse {
        data: documents.iter().map(|doc| document_resource(doc, &config.index_fields, urls, config)).collect(),
        included: facets.iter().filter_map(|facet| facet_resource(facet, urls, query, config)).collect(),
        links: page_links(pagination, urls, query),
        meta: IndexMeta {
            pages: PageMeta {
                current_page: pagination.current_page,
                next_page: pagination.next_page,
                prev_page: pagination.prev_page,
            },
        },
    }
}

pub fn render_presenter_json<R: SearchResponse + ?Sized>(
    presenter: &JsonPresenter<'_, R>,
    urls: &CatalogUrls,
    query: &SearchQuery,
) -> IndexJsonResponse {
    render_index_json(
        presenter.documents(),
        &presenter.pagination_info(),
        &presenter.search_facets(),
        urls,
        query,
        presenter.config(),
    )
}
