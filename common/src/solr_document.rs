//! Documents as returned by the search index.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog_config::CatalogConfig;

/// A stored field value. Solr returns single values for single-valued
/// fields and arrays for multivalued ones. `null` and nested objects such as
/// child documents are kept but have no display value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    List(Vec<FieldValue>),
    Null,
    Other(serde_json::Value),
}

impl FieldValue {
    /// First scalar value rendered as a string. Empty lists have none.
    pub fn first_string(&self) -> Option<String> {
        match self {
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Integer(i) => Some(i.to_string()),
            FieldValue::Float(f) => Some(f.to_string()),
            FieldValue::Bool(b) => Some(b.to_string()),
            FieldValue::List(values) => values.iter().find_map(|v| v.first_string()),
            FieldValue::Null | FieldValue::Other(_) => None,
        }
    }

    pub fn strings(&self) -> Vec<String> {
        match self {
            FieldValue::List(values) => values.iter().flat_map(|v| v.strings()).collect(),
            other => other.first_string().into_iter().collect(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(values: Vec<T>) -> Self {
        FieldValue::List(values.into_iter().map(|v| v.into()).collect())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
}

/// Ids are strings in most schemas; numeric ids are rendered as text.
fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Integer(i) => i.to_string(),
        RawId::Unsigned(u) => u.to_string(),
        RawId::Float(f) => f.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolrDocument {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl SolrDocument {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), fields: BTreeMap::new() }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn first(&self, field: &str) -> Option<String> {
        if field == "id" {
            return Some(self.id.clone());
        }
        self.fields.get(field).and_then(|v| v.first_string())
    }

    pub fn values(&self, field: &str) -> Vec<String> {
        self.fields.get(field).map(|v| v.strings()).unwrap_or_default()
    }

    /// Heading for the document: the configured title field, or the id.
    pub fn title(&self, config: &CatalogConfig) -> String {
        self.first(&config.title_field).unwrap_or_else(|| self.id.clone())
    }

    /// The document's type, taken from the configured display type field.
    pub fn format(&self, config: &CatalogConfig) -> Option<String> {
        self.first(&config.display_type_field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_scalar_and_multivalued_fields() {
        let doc: SolrDocument = serde_json::from_str(
            r#"{"id":"123","title_tsim":["Book1","Subtitle"],"format":"Book","pub_date_ssim":[1999],"score":1.5}"#,
        )
        .unwrap();
        assert_eq!(doc.id, "123");
        assert_eq!(doc.first("title_tsim").as_deref(), Some("Book1"));
        assert_eq!(doc.values("title_tsim"), vec!["Book1".to_string(), "Subtitle".to_string()]);
        assert_eq!(doc.first("format").as_deref(), Some("Book"));
        assert_eq!(doc.first("pub_date_ssim").as_deref(), Some("1999"));
        assert_eq!(doc.get("score"), Some(&FieldValue::Float(1.5)));
    }

    #[test]
    fn title_falls_back_to_id() {
        let config = CatalogConfig::new("title_tsim");
        let doc = SolrDocument::new("1").with_field("title_s", "abc");
        assert_eq!(doc.title(&config), "1");
        let doc = doc.with_field("title_tsim", "Title of MLT Document");
        assert_eq!(doc.title(&config), "Title of MLT Document");
    }

    #[test]
    fn tolerates_nulls_child_documents_and_numeric_ids() {
        let doc: SolrDocument = serde_json::from_str(
            r#"{"id":1,"note":null,"title_tsim":"Parent","_childDocuments_":[{"id":"1-a","title_tsim":"Child"}]}"#,
        )
        .unwrap();
        assert_eq!(doc.id, "1");
        assert_eq!(doc.get("note"), Some(&FieldValue::Null));
        assert_eq!(doc.first("note"), None);
        assert_eq!(doc.first("_childDocuments_"), None);
        assert!(doc.values("_childDocuments_").is_empty());
        assert_eq!(doc.title(&CatalogConfig::new("title_tsim")), "Parent");

        let doc: SolrDocument = serde_json::from_str(r#"{"id":"x","child":{"id":"y"}}"#).unwrap();
        assert!(matches!(doc.get("child"), Some(FieldValue::Other(_))));
    }

    #[test]
    fn empty_list_has_no_first_value() {
        let doc = SolrDocument::new("1").with_field("format", Vec::<String>::new());
        assert_eq!(doc.format(&CatalogConfig::new("title_tsim")), None);
    }
}
