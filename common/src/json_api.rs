//! Wire shapes of the catalog JSON API.
//!
//! Resources follow a `{id, type, attributes, links}` layout; top-level
//! documents carry `data`, `included`, `links` and `meta`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::solr_document::FieldValue;

pub const FACET_RESOURCE_TYPE: &str = "facet";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfLink {
    #[serde(rename = "self")]
    pub self_link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentResource {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    pub attributes: BTreeMap<String, FieldValue>,
    pub links: SelfLink,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLinks {
    #[serde(rename = "self")]
    pub self_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    pub last: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub current_page: u64,
    pub next_page: Option<u64>,
    pub prev_page: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexMeta {
    pub pages: PageMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetItemAttributes {
    pub value: String,
    pub hits: u64,
    pub label: String,
}

/// Either the link that adds the value to the search or the one that takes it out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetItemLinks {
    Apply(String),
    Remove(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetItemResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub attributes: FacetItemAttributes,
    pub links: FacetItemLinks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetAttributes {
    pub label: String,
    pub items: Vec<FacetItemResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetResource {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub attributes: FacetAttributes,
    pub links: SelfLink,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexJsonResponse {
    pub data: Vec<DocumentResource>,
    pub included: Vec<FacetResource>,
    pub links: PageLinks,
    pub meta: IndexMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentJsonResponse {
    pub data: DocumentResource,
    pub included: Vec<DocumentResource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facet_item_links_serialize_as_single_key_objects() {
        let apply = serde_json::to_value(FacetItemLinks::Apply("http://test.host/?f".to_string())).unwrap();
        assert_eq!(apply, serde_json::json!({"apply": "http://test.host/?f"}));
        let remove = serde_json::to_value(FacetItemLinks::Remove("http://test.host/".to_string())).unwrap();
        assert_eq!(remove, serde_json::json!({"remove": "http://test.host/"}));
    }

    #[test]
    fn next_link_is_omitted_when_absent() {
        let links = PageLinks { self_link: "a".to_string(), next: None, last: "b".to_string() };
        assert_eq!(serde_json::to_value(links).unwrap(), serde_json::json!({"self": "a", "last": "b"}));
    }
}
